//! Lookup tables backing the model choice fields

mod models;
mod store;
mod traits;

pub use models::{find_row, row_options, Country, LanguageSpec, LookupRow};
pub use store::{JsonCatalog, StaticCatalog};
pub use traits::CatalogSource;

#[cfg(test)]
pub use traits::MockCatalogSource;
