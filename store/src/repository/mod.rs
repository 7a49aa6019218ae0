//! Repository Layer
//!
//! Data access abstractions and implementations.

mod db;
mod todo_repo;
mod traits;

#[cfg(test)]
mod tests;

pub use db::{init_db, DbState};
pub use todo_repo::TodoRepository;
pub use traits::Repository;
