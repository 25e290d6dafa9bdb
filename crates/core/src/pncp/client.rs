//! HTTP client for the public procurement registries.

use std::time::Duration;

use log::warn;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::{Error, Result};

use super::models::{
    CatalogKind, RegistryCatalog, RegistryItem, RegistrySearchResponse, SearchSource,
};

const MATERIALS_URL: &str = "https://compras.dados.gov.br/materiais/v1/materiais.json";
const SERVICES_URL: &str = "https://compras.dados.gov.br/servicos/v1/servicos.json";
const CATALOGS_URL: &str = "https://pncp.gov.br/api/pncp/v1/catalogos?statusAtivo=true";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);
const USER_AGENT: &str = concat!("fiscus/", env!("CARGO_PKG_VERSION"));

/// Minimum query length; shorter queries return an empty result without a
/// network round trip.
const MIN_QUERY_LEN: usize = 2;

/// Rows returned from the local fallback dataset are capped.
const FALLBACK_LIMIT: usize = 20;

/// Fallback dataset compiled into the binary.
#[derive(Debug, Clone, Deserialize)]
struct FallbackCatalog {
    materials: Vec<FallbackEntry>,
    services: Vec<FallbackEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct FallbackEntry {
    code: String,
    description: String,
    unit: String,
    class: String,
    subclass: String,
}

/// Response shape of the ComprasNet search endpoints. The materials and
/// services endpoints use different list keys and slightly different field
/// names per row.
#[derive(Debug, Deserialize)]
struct RemoteSearchResponse {
    #[serde(default)]
    materiais: Vec<RemoteItem>,
    #[serde(default)]
    servicos: Vec<RemoteItem>,
    #[serde(default)]
    count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RemoteItem {
    #[serde(default)]
    codigo: Option<serde_json::Value>,
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    descricao: Option<String>,
    #[serde(default)]
    nome: Option<String>,
    #[serde(default, rename = "unidadeFornecimento")]
    unidade_fornecimento: Option<String>,
    #[serde(default)]
    unidade: Option<String>,
    #[serde(default, rename = "classeDescricao")]
    classe_descricao: Option<String>,
    #[serde(default)]
    classe: Option<String>,
    #[serde(default)]
    pdm: Option<String>,
    #[serde(default)]
    subclasse: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoteCatalog {
    id: i64,
    #[serde(rename = "nome")]
    name: String,
    #[serde(rename = "descricao", default)]
    description: String,
}

pub struct PncpCatalogService {
    client: Client,
    fallback: FallbackCatalog,
}

impl PncpCatalogService {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::CatalogLookup(e.to_string()))?;
        let fallback: FallbackCatalog = serde_json::from_str(include_str!("fallback_catalog.json"))?;
        Ok(PncpCatalogService { client, fallback })
    }

    /// Search the registry for `kind`, falling back to the local dataset when
    /// the remote endpoint is unreachable or returns garbage.
    pub async fn search(
        &self,
        query: &str,
        kind: CatalogKind,
        page: u32,
    ) -> RegistrySearchResponse {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return RegistrySearchResponse {
                items: Vec::new(),
                total: 0,
                source: SearchSource::Local,
            };
        }

        match self.search_remote(query, kind, page).await {
            Ok(response) => response,
            Err(e) => {
                warn!("registry search unavailable, using local dataset: {e}");
                self.search_fallback(query, kind)
            }
        }
    }

    async fn search_remote(
        &self,
        query: &str,
        kind: CatalogKind,
        page: u32,
    ) -> Result<RegistrySearchResponse> {
        let base = match kind {
            CatalogKind::Material => MATERIALS_URL,
            CatalogKind::Service => SERVICES_URL,
        };
        let response: RemoteSearchResponse = self
            .client
            .get(base)
            .query(&[("descricao", query), ("pagina", &page.to_string())])
            .send()
            .await
            .map_err(|e| Error::CatalogLookup(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::CatalogLookup(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::CatalogLookup(e.to_string()))?;

        let rows = if response.materiais.is_empty() {
            response.servicos
        } else {
            response.materiais
        };
        let items: Vec<RegistryItem> = rows
            .into_iter()
            .map(|row| normalize_remote_item(row, kind))
            .collect();
        let total = response.count.unwrap_or(items.len() as u64) as usize;
        Ok(RegistrySearchResponse {
            items,
            total,
            source: SearchSource::Remote,
        })
    }

    /// Accent-insensitive substring match over the compiled-in dataset.
    fn search_fallback(&self, query: &str, kind: CatalogKind) -> RegistrySearchResponse {
        let needle = fold_accents(&query.to_lowercase());
        let entries = match kind {
            CatalogKind::Material => &self.fallback.materials,
            CatalogKind::Service => &self.fallback.services,
        };
        let matched: Vec<&FallbackEntry> = entries
            .iter()
            .filter(|entry| fold_accents(&entry.description.to_lowercase()).contains(&needle))
            .collect();
        let total = matched.len();
        let items = matched
            .into_iter()
            .take(FALLBACK_LIMIT)
            .map(|entry| RegistryItem {
                code: entry.code.clone(),
                description: entry.description.clone(),
                unit: entry.unit.clone(),
                class: entry.class.clone(),
                subclass: entry.subclass.clone(),
                catalog: kind.registry_label().to_string(),
            })
            .collect();
        RegistrySearchResponse {
            items,
            total,
            source: SearchSource::Local,
        }
    }

    /// List the registry's catalogs, falling back to the two official ones.
    pub async fn catalogs(&self) -> Vec<RegistryCatalog> {
        match self.catalogs_remote().await {
            Ok(catalogs) => catalogs,
            Err(e) => {
                warn!("registry catalog list unavailable, using builtin list: {e}");
                vec![
                    RegistryCatalog {
                        id: 1,
                        name: "CATMAT".to_string(),
                        description: "Catálogo de Materiais".to_string(),
                    },
                    RegistryCatalog {
                        id: 2,
                        name: "CATSERV".to_string(),
                        description: "Catálogo de Serviços".to_string(),
                    },
                ]
            }
        }
    }

    async fn catalogs_remote(&self) -> Result<Vec<RegistryCatalog>> {
        let catalogs: Vec<RemoteCatalog> = self
            .client
            .get(CATALOGS_URL)
            .send()
            .await
            .map_err(|e| Error::CatalogLookup(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::CatalogLookup(e.to_string()))?
            .json()
            .await
            .map_err(|e| Error::CatalogLookup(e.to_string()))?;
        Ok(catalogs
            .into_iter()
            .map(|c| RegistryCatalog {
                id: c.id,
                name: c.name,
                description: c.description,
            })
            .collect())
    }
}

fn normalize_remote_item(row: RemoteItem, kind: CatalogKind) -> RegistryItem {
    RegistryItem {
        code: row
            .codigo
            .or(row.id)
            .map(json_value_to_string)
            .unwrap_or_default(),
        description: row.descricao.or(row.nome).unwrap_or_default(),
        unit: row
            .unidade_fornecimento
            .or(row.unidade)
            .unwrap_or_default(),
        class: row.classe_descricao.or(row.classe).unwrap_or_default(),
        subclass: row.pdm.or(row.subclasse).unwrap_or_default(),
        catalog: kind.registry_label().to_string(),
    }
}

fn json_value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Strip the diacritics that appear in the registries' Portuguese text so
/// fallback matching is accent-insensitive.
fn fold_accents(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ç' => 'C',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_accents_strips_portuguese_diacritics() {
        assert_eq!(fold_accents("serviços de manutenção"), "servicos de manutencao");
        assert_eq!(fold_accents("CAFÉ"), "CAFE");
    }

    #[test]
    fn fallback_search_is_accent_insensitive() {
        let service = PncpCatalogService::new().unwrap();
        let response = service.search_fallback("grafite", CatalogKind::Material);
        assert_eq!(response.source, SearchSource::Local);
        assert_eq!(response.total, 1);
        assert_eq!(response.items[0].code, "300400");

        let with_accents = service.search_fallback("vigilância", CatalogKind::Service);
        let without_accents = service.search_fallback("vigilancia", CatalogKind::Service);
        assert_eq!(with_accents.total, 1);
        assert_eq!(with_accents.items, without_accents.items);
    }

    #[test]
    fn fallback_search_respects_kind() {
        let service = PncpCatalogService::new().unwrap();
        let response = service.search_fallback("limpeza", CatalogKind::Material);
        assert_eq!(response.total, 0);
        let response = service.search_fallback("limpeza", CatalogKind::Service);
        assert_eq!(response.total, 1);
        assert_eq!(response.items[0].catalog, "CATSERV");
    }

    #[tokio::test]
    async fn short_queries_short_circuit() {
        let service = PncpCatalogService::new().unwrap();
        let response = service.search(" a ", CatalogKind::Material, 1).await;
        assert!(response.items.is_empty());
        assert_eq!(response.total, 0);
    }
}
