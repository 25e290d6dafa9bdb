//! SQLite storage implementation for the organization profile.

mod model;
mod repository;

pub use model::OrgEntityDB;
pub use repository::OrgEntityRepository;
