use async_trait::async_trait;
use graviteeam_core::{
    provider::{get_model, set_state},
    DataSource, Diagnostics, Schema,
};
use serde_json::Value;

use super::invalid_id;
use crate::ids::parse_domain_identity_provider_id;
use crate::model::identity_provider::{
    identity_provider_data_source_schema, map_identity_provider_data_source,
    IdentityProviderDataSourceModel,
};
use crate::rest::AmRestClient;

/// `<provider>_domain_identity_provider`
pub struct DomainIdentityProviderDataSource;

#[async_trait]
impl DataSource for DomainIdentityProviderDataSource {
    type Client = AmRestClient;

    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_domain_identity_provider")
    }

    fn schema(&self) -> Schema {
        identity_provider_data_source_schema(
            "Domain",
            "organizationId:environmentId:domainId:identityProviderId",
        )
    }

    async fn read(&self, client: &AmRestClient, config: Value) -> Result<Value, Diagnostics> {
        let data: IdentityProviderDataSourceModel = get_model(config)?;
        let (organization_id, environment_id, domain_id, identity_provider_id) =
            parse_domain_identity_provider_id(&data.identity_provider_id)
                .map_err(|e| invalid_id(e, "identity_provider_id"))?;

        let identity_provider = client
            .get_domain_identity_provider(
                &organization_id,
                &environment_id,
                &domain_id,
                &identity_provider_id,
            )
            .await?;

        set_state(&map_identity_provider_data_source(identity_provider, data))
    }
}
