//! Document service trait.

use async_trait::async_trait;

use crate::documents::{Page, PropertyMap};
use crate::error::DocumentError;

/// Client for the external document database.
///
/// Handlers reach the service exclusively through this trait, via the
/// context they are given. Implementations own transport, retries, and
/// authentication; none of that leaks into handler code.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Fetch a page by identifier.
    async fn get_page(&self, page_id: &str) -> Result<Page, DocumentError>;

    /// Update a page's properties by identifier.
    ///
    /// Properties present in `properties` are written; others are left
    /// untouched. Returns the page after the update.
    async fn update_page(
        &self,
        page_id: &str,
        properties: PropertyMap,
    ) -> Result<Page, DocumentError>;
}
