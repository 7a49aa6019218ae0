//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod todo;
mod user;

pub use entity::{DomainError, DomainResult, Entity};
pub use todo::Todo;
pub use user::User;
