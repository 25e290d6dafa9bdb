//! Creditors module - domain models, services, and traits.

mod creditors_model;
mod creditors_service;
mod creditors_traits;

pub use creditors_model::{Creditor, CreditorUpdate, NewCreditor};
pub use creditors_service::CreditorService;
pub use creditors_traits::{CreditorRepositoryTrait, CreditorServiceTrait};
