//! Users module - accounts and roles.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{NewUser, User, UserRole, UserUpdate};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
