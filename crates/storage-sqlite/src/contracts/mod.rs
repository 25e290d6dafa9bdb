//! SQLite storage implementation for contracts.
//!
//! A contract row is the whole document: the item list is serialized into a
//! JSON column, so replacing a contract's items is a single-row update.

mod model;
mod repository;

pub use model::ContractDB;
pub use repository::ContractRepository;
