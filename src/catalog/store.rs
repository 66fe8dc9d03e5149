//! File-backed and in-memory catalogs

use super::models::{Country, LanguageSpec};
use super::traits::CatalogSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Catalog rows held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub languages: Vec<LanguageSpec>,
}

impl StaticCatalog {
    pub fn new(countries: Vec<Country>, languages: Vec<LanguageSpec>) -> Self {
        Self {
            countries,
            languages,
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn countries(&self) -> Result<Vec<Country>> {
        Ok(self.countries.clone())
    }

    async fn languages(&self) -> Result<Vec<LanguageSpec>> {
        Ok(self.languages.clone())
    }
}

/// Catalog stored as a JSON file
///
/// The file is re-read on every call so edits are visible to the next
/// validation without a restart.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file
    pub async fn load(&self) -> Result<StaticCatalog> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read catalog {}", self.path.display()))?;
        let catalog: StaticCatalog = serde_json::from_str(&content)
            .with_context(|| format!("Invalid catalog {}", self.path.display()))?;
        tracing::info!(
            path = %self.path.display(),
            countries = catalog.countries.len(),
            languages = catalog.languages.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogSource for JsonCatalog {
    async fn countries(&self) -> Result<Vec<Country>> {
        Ok(self.load().await?.countries)
    }

    async fn languages(&self) -> Result<Vec<LanguageSpec>> {
        Ok(self.load().await?.languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const CATALOG: &str = r#"{
        "countries": [{"id": 1, "name": "Egypt"}, {"id": 2, "name": "Germany"}],
        "languages": [{"id": 1, "code": "ar", "name": "Arabic"}]
    }"#;

    fn write_catalog(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_static_catalog_returns_rows() {
        let catalog = StaticCatalog::new(
            vec![Country {
                id: 1,
                name: "Egypt".to_string(),
            }],
            vec![],
        );
        let countries = tokio_test::block_on(catalog.countries()).unwrap();
        assert_eq!(countries.len(), 1);
        assert!(tokio_test::block_on(catalog.languages()).unwrap().is_empty());
    }

    #[test]
    fn test_json_catalog_reads_file() {
        let file = write_catalog(CATALOG);
        let catalog = JsonCatalog::new(file.path());
        assert_eq!(catalog.path(), file.path());

        let countries = tokio_test::block_on(catalog.countries()).unwrap();
        assert_eq!(countries[1].name, "Germany");
        let languages = tokio_test::block_on(catalog.languages()).unwrap();
        assert_eq!(languages[0].code, "ar");
    }

    #[test]
    fn test_json_catalog_sees_new_rows() {
        let file = write_catalog(r#"{"countries": []}"#);
        let catalog = JsonCatalog::new(file.path());
        assert!(tokio_test::block_on(catalog.countries()).unwrap().is_empty());

        std::fs::write(file.path(), CATALOG).unwrap();
        assert_eq!(tokio_test::block_on(catalog.countries()).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_tables_default_to_empty() {
        let file = write_catalog("{}");
        let loaded = tokio_test::block_on(JsonCatalog::new(file.path()).load()).unwrap();
        assert_eq!(loaded, StaticCatalog::default());
    }

    #[test]
    fn test_missing_file_is_error() {
        let catalog = JsonCatalog::new("/nonexistent/catalog.json");
        let err = tokio_test::block_on(catalog.countries()).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let file = write_catalog("not json");
        let err = tokio_test::block_on(JsonCatalog::new(file.path()).load()).unwrap_err();
        assert!(err.to_string().contains("Invalid catalog"));
    }
}
