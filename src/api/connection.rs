use async_trait::async_trait;
use serde_json::Value;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;

/// Connectivity and server metadata API methods
#[async_trait]
pub trait ConnectionApi {
    /// Verify the server is reachable and the credentials are accepted
    async fn test(&self) -> ApiResult<String>;

    /// Get archive status information
    async fn get_status(&self) -> ApiResult<Vec<Value>>;

    /// Get all roles known to the server
    async fn get_roles(&self) -> ApiResult<Vec<String>>;

    /// Get the roles assigned to the authenticated user
    async fn get_user_roles(&self) -> ApiResult<Vec<String>>;

    /// Get the configured document types
    async fn get_types(&self) -> ApiResult<Vec<Value>>;
}

#[async_trait]
impl ConnectionApi for Client {
    async fn test(&self) -> ApiResult<String> {
        self.get("/test", RequestOptions::new()).await
    }

    async fn get_status(&self) -> ApiResult<Vec<Value>> {
        self.get("/status", RequestOptions::new()).await
    }

    async fn get_roles(&self) -> ApiResult<Vec<String>> {
        self.get("/roles", RequestOptions::new()).await
    }

    async fn get_user_roles(&self) -> ApiResult<Vec<String>> {
        self.get("/userRoles", RequestOptions::new()).await
    }

    async fn get_types(&self) -> ApiResult<Vec<Value>> {
        self.get("/types", RequestOptions::new()).await
    }
}
