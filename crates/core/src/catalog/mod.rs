//! Material/service catalog module.

mod catalog_model;
mod catalog_service;
mod catalog_traits;

pub use catalog_model::{CatalogItem, CatalogItemUpdate, NewCatalogItem};
pub use catalog_service::CatalogItemService;
pub use catalog_traits::{CatalogItemRepositoryTrait, CatalogItemServiceTrait};
