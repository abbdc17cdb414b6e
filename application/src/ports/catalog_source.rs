//! Catalog source port

use async_trait::async_trait;
use shelfie_domain::Product;

/// Source of the product catalog.
///
/// One read per session. Implementations never error: any transport or
/// parse failure degrades to an empty list and is logged by the adapter.
/// No retry, no partial results.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Vec<Product>;
}
