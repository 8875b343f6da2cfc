//! Gravitee AM Provider
//!
//! Exposes organizations, environments, domains and identity providers of
//! a Gravitee.io Access Management instance as data sources, and domains
//! as a managed resource.
//!

pub mod api;
mod config;
mod data_sources;
mod error;
pub mod ids;
pub mod model;
mod resources;
mod rest;

use async_trait::async_trait;
use graviteeam_core::{
    logging::debug,
    provider::{get_model, ProviderMetadata},
    Attribute, DataSource, Diagnostics, Provider, Resource, Schema,
};
use serde_json::Value;

pub use config::{AmConfig, ProviderModel};
pub use data_sources::{
    DomainDataSource, DomainIdentityProviderDataSource, EnvironmentDataSource,
    OrganizationDataSource, OrganizationIdentityProviderDataSource,
};
pub use error::{ProviderError, Result};
pub use resources::DomainResource;
pub use rest::AmRestClient;

/// Type name of the provider. Prefixes every data source and resource.
pub const PROVIDER_TYPE_NAME: &str = "graviteeioam";

/// The Gravitee AM provider.
#[derive(Debug, Clone)]
pub struct GraviteeAmProvider {
    version: String,
}

impl GraviteeAmProvider {
    /// `version` is "dev" for local builds, "test" in tests.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

impl Default for GraviteeAmProvider {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

#[async_trait]
impl Provider for GraviteeAmProvider {
    type Client = AmRestClient;

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_owned(),
            version: self.version.to_owned(),
        }
    }

    fn schema(&self) -> Schema {
        Schema::new("Interact with Gravitee.io Access Management.")
            .attribute(
                "endpoint",
                Attribute::string().optional().describe(
                    "Management API URL. May also be provided via the GRAVITEEIO_AM_ENDPOINT environment variable.",
                ),
            )
            .attribute(
                "username",
                Attribute::string().optional().describe(
                    "Username. May also be provided via the GRAVITEEIO_AM_USERNAME environment variable.",
                ),
            )
            .attribute(
                "password",
                Attribute::string().optional().sensitive().describe(
                    "Password. May also be provided via the GRAVITEEIO_AM_PASSWORD environment variable.",
                ),
            )
    }

    /// Resolves the settings and authenticates. The returned client is
    /// shared by every later operation.
    async fn configure(&self, config: Value) -> std::result::Result<AmRestClient, Diagnostics> {
        let model: ProviderModel = get_model(config)?;
        let config = AmConfig::resolve(model)?;
        debug!("configuring client for {:?}", config);
        Ok(AmRestClient::new(&config).await?)
    }

    fn data_sources(&self) -> Vec<Box<dyn DataSource<Client = AmRestClient>>> {
        vec![
            Box::new(OrganizationDataSource),
            Box::new(EnvironmentDataSource),
            Box::new(DomainDataSource),
            Box::new(DomainIdentityProviderDataSource),
            Box::new(OrganizationIdentityProviderDataSource),
        ]
    }

    fn resources(&self) -> Vec<Box<dyn Resource<Client = AmRestClient>>> {
        vec![Box::new(DomainResource)]
    }
}

#[cfg(test)]
mod tests {
    use graviteeam_core::host::provider_schema;

    use super::*;

    #[test]
    fn every_entity_is_registered() {
        let schema = provider_schema(&GraviteeAmProvider::new("test"));
        assert_eq!(
            schema.data_sources.keys().collect::<Vec<_>>(),
            vec![
                "graviteeioam_organization",
                "graviteeioam_environment",
                "graviteeioam_domain",
                "graviteeioam_domain_identity_provider",
                "graviteeioam_organization_identity_provider",
            ]
        );
        assert_eq!(
            schema.resources.keys().collect::<Vec<_>>(),
            vec!["graviteeioam_domain"]
        );
        assert!(schema.provider.attributes["password"].sensitive);
    }
}
