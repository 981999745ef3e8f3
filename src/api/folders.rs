use async_trait::async_trait;
use serde_json::Value;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::folder::NewFolder;

/// Folder API methods
#[async_trait]
pub trait FolderApi {
    /// Get all folders
    async fn get_folders(&self) -> ApiResult<Vec<Value>>;

    /// Get a single folder
    async fn get_folder_by_id(&self, id: i64) -> ApiResult<Value>;

    /// Create a top-level folder, returning its id
    async fn create_folder(&self, folder: &NewFolder) -> ApiResult<i64>;

    /// Create a folder below `parent_folder_id`, returning its id
    async fn create_subfolder(&self, folder: &NewFolder, parent_folder_id: i64)
        -> ApiResult<i64>;
}

#[async_trait]
impl FolderApi for Client {
    async fn get_folders(&self) -> ApiResult<Vec<Value>> {
        self.get("/folders", RequestOptions::new()).await
    }

    async fn get_folder_by_id(&self, id: i64) -> ApiResult<Value> {
        self.get(&format!("/folders/{id}"), RequestOptions::new())
            .await
    }

    async fn create_folder(&self, folder: &NewFolder) -> ApiResult<i64> {
        self.post("/createFolder", folder, RequestOptions::new())
            .await
    }

    async fn create_subfolder(
        &self,
        folder: &NewFolder,
        parent_folder_id: i64,
    ) -> ApiResult<i64> {
        self.post(
            &format!("/createFolder/parent/{parent_folder_id}"),
            folder,
            RequestOptions::new(),
        )
        .await
    }
}
