//! Organization profile module.

mod entities_model;
mod entities_service;
mod entities_traits;

pub use entities_model::{NewOrgEntity, OrgEntity, OrgEntityUpdate};
pub use entities_service::OrgEntityService;
pub use entities_traits::{OrgEntityRepositoryTrait, OrgEntityServiceTrait};
