//! Fiscus Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Fiscus, an institutional
//! financial management service: creditors, expenses, contracts with
//! consumption balances, a material/service catalog, organization profile,
//! users and settings. It is database-agnostic and defines repository traits
//! that are implemented by the `storage-sqlite` crate.

pub mod catalog;
pub mod categories;
pub mod constants;
pub mod contracts;
pub mod creditors;
pub mod entities;
pub mod errors;
pub mod expenses;
pub mod export;
pub mod pncp;
pub mod settings;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
