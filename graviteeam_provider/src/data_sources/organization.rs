use async_trait::async_trait;
use graviteeam_core::{
    logging::trace,
    provider::{get_model, set_state},
    DataSource, Diagnostics, Schema,
};
use serde_json::Value;

use crate::model::organization::{
    map_organization_data_source, organization_data_source_schema, OrganizationDataSourceModel,
};
use crate::rest::AmRestClient;

/// `<provider>_organization`
pub struct OrganizationDataSource;

#[async_trait]
impl DataSource for OrganizationDataSource {
    type Client = AmRestClient;

    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_organization")
    }

    fn schema(&self) -> Schema {
        organization_data_source_schema()
    }

    async fn read(&self, client: &AmRestClient, config: Value) -> Result<Value, Diagnostics> {
        let data: OrganizationDataSourceModel = get_model(config)?;
        let organization = client
            .get_organization_settings(&data.organization_id)
            .await?;

        let data = map_organization_data_source(organization, data);
        trace!("read organization {}", data.organization_id);
        set_state(&data)
    }
}
