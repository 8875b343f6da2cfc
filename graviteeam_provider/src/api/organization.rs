use serde::{Deserialize, Serialize};

/// Organization settings.
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Identity providers used to log into the management console.
    pub identities: Option<Vec<String>>,
    /// Human readable ids.
    pub hrids: Option<Vec<String>>,
    pub domain_restrictions: Option<Vec<String>>,
}
