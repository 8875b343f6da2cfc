use async_trait::async_trait;
use graviteeam_core::{
    logging::trace,
    provider::{get_model, set_state},
    DataSource, Diagnostics, Schema,
};
use serde_json::Value;

use super::invalid_id;
use crate::ids::parse_environment_id;
use crate::model::environment::{
    environment_data_source_schema, map_environment_data_source, EnvironmentDataSourceModel,
};
use crate::rest::AmRestClient;

/// `<provider>_environment`: the domains of an environment.
pub struct EnvironmentDataSource;

#[async_trait]
impl DataSource for EnvironmentDataSource {
    type Client = AmRestClient;

    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_environment")
    }

    fn schema(&self) -> Schema {
        environment_data_source_schema()
    }

    async fn read(&self, client: &AmRestClient, config: Value) -> Result<Value, Diagnostics> {
        let data: EnvironmentDataSourceModel = get_model(config)?;
        let (organization_id, environment_id) = parse_environment_id(&data.environment_id)
            .map_err(|e| invalid_id(e, "environment_id"))?;

        let domains = client
            .list_domains(&organization_id, &environment_id)
            .await?;
        trace!("environment {} has {} domains", data.environment_id, domains.len());

        set_state(&map_environment_data_source(domains, data))
    }
}
