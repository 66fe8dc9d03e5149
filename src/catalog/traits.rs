//! Trait abstraction for lookup table access to enable mocking in tests

use super::models::{Country, LanguageSpec};
use anyhow::Result;
use async_trait::async_trait;

/// Source of the current lookup table rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// All current `Country` rows
    async fn countries(&self) -> Result<Vec<Country>>;

    /// All current `LanguageSpec` rows
    async fn languages(&self) -> Result<Vec<LanguageSpec>>;
}
