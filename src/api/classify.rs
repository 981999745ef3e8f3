use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;
use crate::models::classify::Classification;

/// Classification API methods
#[async_trait]
pub trait ClassifyApi {
    /// Get the ids of the classification attributes configured on the server
    async fn get_classify_attributes(&self) -> ApiResult<Vec<i64>>;

    /// Register a new document classification, returning the new document id
    async fn create_new_classify(&self, classification: &Classification) -> ApiResult<i64>;
}

#[async_trait]
impl ClassifyApi for Client {
    async fn get_classify_attributes(&self) -> ApiResult<Vec<i64>> {
        self.get("/classifyAttributes", RequestOptions::new()).await
    }

    async fn create_new_classify(&self, classification: &Classification) -> ApiResult<i64> {
        self.post("/createNewClassify", classification, RequestOptions::new())
            .await
    }
}
