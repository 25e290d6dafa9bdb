use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use fiscus_core::catalog::{CatalogItemService, CatalogItemServiceTrait};
use fiscus_core::categories::{CategoryService, CategoryServiceTrait};
use fiscus_core::contracts::{ContractService, ContractServiceTrait};
use fiscus_core::creditors::{CreditorService, CreditorServiceTrait};
use fiscus_core::entities::{OrgEntityService, OrgEntityServiceTrait};
use fiscus_core::expenses::{ExpenseService, ExpenseServiceTrait};
use fiscus_core::pncp::PncpCatalogService;
use fiscus_core::settings::{SettingsService, SettingsServiceTrait};
use fiscus_core::users::{UserService, UserServiceTrait};
use fiscus_storage_sqlite::catalog::CatalogItemRepository;
use fiscus_storage_sqlite::categories::CategoryRepository;
use fiscus_storage_sqlite::contracts::ContractRepository;
use fiscus_storage_sqlite::creditors::CreditorRepository;
use fiscus_storage_sqlite::db::{self, write_actor};
use fiscus_storage_sqlite::entities::OrgEntityRepository;
use fiscus_storage_sqlite::expenses::ExpenseRepository;
use fiscus_storage_sqlite::settings::SettingsRepository;
use fiscus_storage_sqlite::users::UserRepository;

pub struct AppState {
    pub creditor_service: Arc<dyn CreditorServiceTrait + Send + Sync>,
    pub expense_service: Arc<dyn ExpenseServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub contract_service: Arc<dyn ContractServiceTrait + Send + Sync>,
    pub catalog_service: Arc<dyn CatalogItemServiceTrait + Send + Sync>,
    pub entity_service: Arc<dyn OrgEntityServiceTrait + Send + Sync>,
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub settings_service: Arc<dyn SettingsServiceTrait + Send + Sync>,
    pub pncp_service: Arc<PncpCatalogService>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("FISCUS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let creditor_repo = Arc::new(CreditorRepository::new(pool.clone(), writer.clone()));
    let creditor_service = Arc::new(CreditorService::new(creditor_repo));

    let expense_repo = Arc::new(ExpenseRepository::new(pool.clone(), writer.clone()));
    let expense_service = Arc::new(ExpenseService::new(expense_repo));

    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let category_service = Arc::new(CategoryService::new(category_repo));

    let contract_repo = Arc::new(ContractRepository::new(pool.clone(), writer.clone()));
    let contract_service = Arc::new(ContractService::new(contract_repo));

    let catalog_repo = Arc::new(CatalogItemRepository::new(pool.clone(), writer.clone()));
    let catalog_service = Arc::new(CatalogItemService::new(catalog_repo));

    let entity_repo = Arc::new(OrgEntityRepository::new(pool.clone(), writer.clone()));
    let entity_service = Arc::new(OrgEntityService::new(entity_repo));

    let user_repo = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service = Arc::new(UserService::new(user_repo));

    let settings_repo = Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));
    let settings_service = Arc::new(SettingsService::new(settings_repo));

    let pncp_service = Arc::new(PncpCatalogService::new()?);

    Ok(Arc::new(AppState {
        creditor_service,
        expense_service,
        category_service,
        contract_service,
        catalog_service,
        entity_service,
        user_service,
        settings_service,
        pncp_service,
        db_path,
    }))
}
