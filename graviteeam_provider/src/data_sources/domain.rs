use async_trait::async_trait;
use graviteeam_core::{
    logging::trace,
    provider::{get_model, set_state},
    DataSource, Diagnostics, Schema,
};
use serde_json::Value;

use super::invalid_id;
use crate::ids::parse_domain_id;
use crate::model::domain::{domain_data_source_schema, map_domain_data_source, DomainDataSourceModel};
use crate::rest::AmRestClient;

/// `<provider>_domain`
pub struct DomainDataSource;

#[async_trait]
impl DataSource for DomainDataSource {
    type Client = AmRestClient;

    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_domain")
    }

    fn schema(&self) -> Schema {
        domain_data_source_schema()
    }

    async fn read(&self, client: &AmRestClient, config: Value) -> Result<Value, Diagnostics> {
        let data: DomainDataSourceModel = get_model(config)?;
        let (organization_id, environment_id, domain_id) =
            parse_domain_id(&data.domain_id).map_err(|e| invalid_id(e, "domain_id"))?;

        let domain = client
            .get_domain(&organization_id, &environment_id, &domain_id)
            .await?;

        let data = map_domain_data_source(domain, data);
        trace!("read domain {}", data.domain_id);
        set_state(&data)
    }
}
