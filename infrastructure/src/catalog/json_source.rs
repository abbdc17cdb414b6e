//! Catalog adapter reading a products JSON document from disk.

use async_trait::async_trait;
use serde::Deserialize;
use shelfie_application::CatalogSource;
use shelfie_domain::Product;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Wire shape of the catalog resource: a top-level `products` array.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Catalog source backed by a JSON file.
///
/// Issues one read per call; any transport or parse failure degrades to an
/// empty list with a warning. No retry, no partial results.
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> Vec<Product> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Could not read catalog {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<CatalogDocument>(&raw) {
            Ok(document) => {
                debug!(
                    "Loaded {} products from {}",
                    document.products.len(),
                    self.path.display()
                );
                document.products
            }
            Err(e) => {
                warn!("Could not parse catalog {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }
}
