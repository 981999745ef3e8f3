use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for `create_new_classify`: classification attributes plus
/// the roles allowed to edit and read the resulting document.
///
/// Attribute keys and values are server-defined and passed through without
/// schema checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub classify_attributes: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edit_roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub read_roles: Vec<String>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.classify_attributes.insert(key.into(), value.into());
        self
    }

    pub fn edit_role(mut self, role: impl Into<String>) -> Self {
        self.edit_roles.push(role.into());
        self
    }

    pub fn read_role(mut self, role: impl Into<String>) -> Self {
        self.read_roles.push(role.into());
        self
    }
}
