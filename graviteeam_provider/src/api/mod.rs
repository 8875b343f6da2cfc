//! Wire types of the Gravitee AM management API.
//!
//! Every field is optional: the API omits what it doesn't know and the
//! mappers only project what is present.

mod domain;
mod identity_provider;
mod organization;

pub use domain::{
    CibaSettings, ClientRegistrationSettings, Domain, LoginSettings, NewDomain, OidcSettings,
    PatchDomain, SecurityProfileSettings,
};
pub use identity_provider::IdentityProvider;
pub use organization::Organization;

use serde::Deserialize;

/// One page of a list endpoint.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub total_count: u64,
}
