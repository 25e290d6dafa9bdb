//! Contracts module - domain models, balance accounting, and services.

mod alerts;
mod balance;
mod contracts_model;
mod contracts_service;
mod contracts_traits;

pub use alerts::{expiry_alerts, AlertKind, ContractAlert};
pub use balance::{classify, BalanceReport, BalanceStatus, ItemBalance};
pub use contracts_model::{
    ConsumptionAdjustment, ConsumptionEntry, Contract, ContractItem, ContractItemInput,
    ContractStatus, ContractUpdate, NewContract,
};
pub use contracts_service::ContractService;
pub use contracts_traits::{ContractRepositoryTrait, ContractServiceTrait};
