//! SQLite storage implementation for categories.

mod model;
mod repository;

pub use model::CategoryDB;
pub(crate) use model::{expense_type_from_str, expense_type_to_str};
pub use repository::CategoryRepository;
