use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for `create_folder` and `create_subfolder`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFolder {
    pub foldername: String,
    #[serde(default)]
    pub main_folder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buzzwords: Option<String>,
    /// Fields the server accepts that this model does not name; the payload
    /// is forwarded as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewFolder {
    pub fn new(foldername: impl Into<String>) -> Self {
        Self {
            foldername: foldername.into(),
            ..Default::default()
        }
    }
}
