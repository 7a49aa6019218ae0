//! Todo Store Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Handlers the host shell exposes to the frontend

use std::path::Path;

pub mod commands;
pub mod domain;
pub mod repository;

use domain::{DomainResult, User};
use repository::{init_db, TodoRepository};

/// Application state shared across commands
pub struct AppState {
    pub repo: TodoRepository,
    pub session: User,
}

impl AppState {
    /// Open the database at `db_path` and build the shared state
    pub async fn open(db_path: &Path, session: User) -> DomainResult<Self> {
        let db_state = init_db(db_path).await?;
        Ok(Self {
            repo: TodoRepository::new(db_state.connection()),
            session,
        })
    }
}

/// Install the tracing subscriber (RUST_LOG-style filtering, "info" default)
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
