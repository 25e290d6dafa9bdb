//! Public procurement catalog lookup (PNCP / ComprasNet).
//!
//! This module queries the Brazilian public material/service registries and
//! normalizes results into a single row shape. The registries are reachable
//! on a best-effort basis only, so every lookup carries a compiled-in static
//! fallback dataset that is filtered locally when the network call fails.

mod client;
mod models;

pub use client::PncpCatalogService;
pub use models::{CatalogKind, RegistryCatalog, RegistryItem, RegistrySearchResponse, SearchSource};
