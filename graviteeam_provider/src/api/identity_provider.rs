use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An identity provider attached to a domain or an organization.
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvider {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub system: Option<bool>,
    /// Plugin configuration, itself a JSON document encoded as a string.
    pub configuration: Option<String>,
    /// User attribute -> claim.
    pub mappers: Option<BTreeMap<String, String>>,
    /// Role -> list of matching rules.
    pub role_mapper: Option<BTreeMap<String, Vec<String>>>,
    pub domain_whitelist: Option<Vec<String>>,
    pub reference_type: Option<String>,
    pub reference_id: Option<String>,
    pub external: Option<bool>,
}
