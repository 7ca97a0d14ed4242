//! In-memory document service.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::documents::{DocumentService, Page, PageData, PropertyMap};
use crate::error::DocumentError;

/// Record of one `update_page` call, kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCall {
    pub page_id: String,
    pub properties: PropertyMap,
}

/// Document service backed by a process-local page store.
///
/// Every `update_page` call is recorded, including calls that fail, so
/// callers can assert on exactly what a handler did.
#[derive(Default)]
pub struct InMemoryDocumentService {
    pages: RwLock<BTreeMap<String, PageData>>,
    updates: RwLock<Vec<UpdateCall>>,
}

impl InMemoryDocumentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a page into the store.
    pub async fn insert_page(&self, page_id: impl Into<String>, data: PageData) {
        self.pages.write().await.insert(page_id.into(), data);
    }

    /// All recorded update calls, in order.
    pub async fn update_calls(&self) -> Vec<UpdateCall> {
        self.updates.read().await.clone()
    }

    /// Number of recorded update calls.
    pub async fn update_count(&self) -> usize {
        self.updates.read().await.len()
    }
}

#[async_trait]
impl DocumentService for InMemoryDocumentService {
    async fn get_page(&self, page_id: &str) -> Result<Page, DocumentError> {
        let pages = self.pages.read().await;
        let data = pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| DocumentError::PageNotFound(page_id.to_string()))?;

        Ok(Page {
            id: page_id.to_string(),
            data,
        })
    }

    async fn update_page(
        &self,
        page_id: &str,
        properties: PropertyMap,
    ) -> Result<Page, DocumentError> {
        if page_id.is_empty() {
            return Err(DocumentError::InvalidIdentifier(page_id.to_string()));
        }

        self.updates.write().await.push(UpdateCall {
            page_id: page_id.to_string(),
            properties: properties.clone(),
        });

        let mut pages = self.pages.write().await;
        let data = pages
            .get_mut(page_id)
            .ok_or_else(|| DocumentError::PageNotFound(page_id.to_string()))?;

        for (name, value) in properties {
            data.properties.insert(name, value);
        }

        Ok(Page {
            id: page_id.to_string(),
            data: data.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::PropertyValue;

    #[tokio::test]
    async fn test_update_merges_properties() {
        let service = InMemoryDocumentService::new();
        service
            .insert_page(
                "page-1",
                PageData::new().with_property("Email", PropertyValue::rich_text(["x@y.z"])),
            )
            .await;

        let mut props = PropertyMap::new();
        props.insert("EmailSent".to_string(), PropertyValue::checkbox(true));
        let page = service.update_page("page-1", props).await.unwrap();

        assert_eq!(
            page.data.property("EmailSent"),
            Some(&PropertyValue::checkbox(true))
        );
        // Untouched property survives the update.
        assert!(page.data.property("Email").is_some());
        assert_eq!(service.update_count().await, 1);
    }

    #[tokio::test]
    async fn test_update_missing_page() {
        let service = InMemoryDocumentService::new();

        let result = service.update_page("nope", PropertyMap::new()).await;

        assert!(matches!(result, Err(DocumentError::PageNotFound(_))));
        // The attempt is still recorded.
        assert_eq!(service.update_count().await, 1);
    }

    #[tokio::test]
    async fn test_get_missing_page() {
        let service = InMemoryDocumentService::new();
        let result = service.get_page("nope").await;
        assert!(matches!(result, Err(DocumentError::PageNotFound(_))));
    }
}
