use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;

/// Document API methods
#[async_trait]
pub trait DocumentApi {
    /// Download the current version of a document
    async fn get_document_by_id(&self, id: i64) -> ApiResult<Bytes>;

    /// Download a specific version of a document
    async fn get_document_by_id_and_version(&self, id: i64, version: i64) -> ApiResult<Bytes>;

    /// Move a document to the trash
    async fn delete_document_by_id(&self, id: i64) -> ApiResult<bool>;

    /// Restore a document from the trash
    async fn recover_document_by_id(&self, id: i64) -> ApiResult<bool>;

    /// Get the ids of documents linked to `id`
    async fn get_linked_documents_by_id(&self, id: i64) -> ApiResult<Vec<i64>>;

    /// Link documents to `id`, returning the linked ids
    async fn link_documents(&self, id: i64, link_ids: &[i64]) -> ApiResult<Vec<i64>>;

    /// Remove document links from `id`
    async fn delete_linked(&self, id: i64, link_ids: &[i64]) -> ApiResult<bool>;

    /// Get classification metadata of a document
    async fn get_document_info_by_id(&self, id: i64) -> ApiResult<Vec<Value>>;

    /// Render a preview image of one document page at the given height
    async fn get_document_preview(&self, id: i64, page: u32, height: u32) -> ApiResult<Bytes>;
}

#[async_trait]
impl DocumentApi for Client {
    async fn get_document_by_id(&self, id: i64) -> ApiResult<Bytes> {
        self.get_bytes(&format!("/document/{id}"), RequestOptions::new())
            .await
    }

    async fn get_document_by_id_and_version(&self, id: i64, version: i64) -> ApiResult<Bytes> {
        self.get_bytes(
            &format!("/document/{id}/version/{version}"),
            RequestOptions::new(),
        )
        .await
    }

    async fn delete_document_by_id(&self, id: i64) -> ApiResult<bool> {
        self.get(&format!("/document/{id}/moveToTrash"), RequestOptions::new())
            .await
    }

    async fn recover_document_by_id(&self, id: i64) -> ApiResult<bool> {
        self.get(
            &format!("/document/{id}/removeFromTrash"),
            RequestOptions::new(),
        )
        .await
    }

    async fn get_linked_documents_by_id(&self, id: i64) -> ApiResult<Vec<i64>> {
        self.get(
            &format!("/document/{id}/readLinkedDocuments"),
            RequestOptions::new(),
        )
        .await
    }

    async fn link_documents(&self, id: i64, link_ids: &[i64]) -> ApiResult<Vec<i64>> {
        self.post(
            &format!("/document/{id}/linkToDocuments"),
            link_ids,
            RequestOptions::new(),
        )
        .await
    }

    async fn delete_linked(&self, id: i64, link_ids: &[i64]) -> ApiResult<bool> {
        self.post(
            &format!("/document/{id}/removeDocumentLink"),
            link_ids,
            RequestOptions::new(),
        )
        .await
    }

    async fn get_document_info_by_id(&self, id: i64) -> ApiResult<Vec<Value>> {
        self.get(&format!("/documentInfo/{id}"), RequestOptions::new())
            .await
    }

    async fn get_document_preview(&self, id: i64, page: u32, height: u32) -> ApiResult<Bytes> {
        self.get_bytes(
            &format!("/thumbnail/{id}/page/{page}/height/{height}"),
            RequestOptions::new(),
        )
        .await
    }
}
