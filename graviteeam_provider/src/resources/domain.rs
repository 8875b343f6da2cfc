use async_trait::async_trait;
use graviteeam_core::{
    logging::{debug, info},
    provider::{get_model, set_state},
    Diagnostic, Diagnostics, Resource, Schema,
};
use serde_json::{json, Value};

use crate::data_sources::invalid_id;
use crate::ids::{self, parse_domain_id};
use crate::model::domain_resource::{domain_resource_schema, map_domain_resource, DomainResourceModel};
use crate::rest::AmRestClient;

/// `<provider>_domain`
pub struct DomainResource;

/// Upstream keys of a domain held in resource state.
fn state_keys(state: &DomainResourceModel) -> Result<(String, String, String), Diagnostics> {
    let id = state.id.as_deref().ok_or_else(|| {
        Diagnostics::from(
            Diagnostic::error("Missing identifier", "the domain state has no id").at("id"),
        )
    })?;
    parse_domain_id(id).map_err(|e| invalid_id(e, "id"))
}

#[async_trait]
impl Resource for DomainResource {
    type Client = AmRestClient;

    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{provider_type_name}_domain")
    }

    fn schema(&self) -> Schema {
        domain_resource_schema()
    }

    async fn create(&self, client: &AmRestClient, plan: Value) -> Result<Value, Diagnostics> {
        let data: DomainResourceModel = get_model(plan)?;

        let mut domain = client
            .create_domain(&data.organization_id, &data.environment_id, &data.new_domain())
            .await?;

        let Some(domain_id) = domain.id.clone() else {
            return Err(Diagnostic::error(
                "Invalid format received",
                format!("the created domain {} has no id", data.name),
            )
            .into());
        };

        // enabled and vhost_mode are not accepted on creation
        let patch = data.post_create_patch();
        if !patch.is_empty() {
            domain = client
                .patch_domain(&data.organization_id, &data.environment_id, &domain_id, &patch)
                .await?;
        }

        let data = DomainResourceModel {
            domain_id: Some(domain_id),
            ..data
        };
        let data = map_domain_resource(domain, data);
        info!("created domain {}", data.id.as_deref().unwrap_or_default());
        set_state(&data)
    }

    async fn read(&self, client: &AmRestClient, state: Value) -> Result<Option<Value>, Diagnostics> {
        let data: DomainResourceModel = get_model(state)?;
        let (organization_id, environment_id, domain_id) = state_keys(&data)?;

        let domain = match client
            .get_domain(&organization_id, &environment_id, &domain_id)
            .await
        {
            Ok(domain) => domain,
            Err(e) if e.is_not_found() => {
                debug!("domain {domain_id} is gone, dropping it from state");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let data = DomainResourceModel {
            organization_id,
            environment_id,
            domain_id: Some(domain_id),
            ..data
        };
        set_state(&map_domain_resource(domain, data)).map(Some)
    }

    async fn update(
        &self,
        client: &AmRestClient,
        plan: Value,
        prior: Value,
    ) -> Result<Value, Diagnostics> {
        let data: DomainResourceModel = get_model(plan)?;
        let prior: DomainResourceModel = get_model(prior)?;
        let (organization_id, environment_id, domain_id) = state_keys(&prior)?;

        if data.organization_id != organization_id || data.environment_id != environment_id {
            return Err(Diagnostic::error(
                "Domain cannot be moved",
                format!(
                    "domain {domain_id} belongs to {organization_id}:{environment_id}; \
                     recreate it to change its organization or environment"
                ),
            )
            .into());
        }

        let domain = client
            .patch_domain(
                &organization_id,
                &environment_id,
                &domain_id,
                &data.update_patch(&prior),
            )
            .await?;

        let data = DomainResourceModel {
            id: prior.id,
            domain_id: Some(domain_id),
            ..data
        };
        set_state(&map_domain_resource(domain, data))
    }

    async fn delete(&self, client: &AmRestClient, state: Value) -> Result<(), Diagnostics> {
        let data: DomainResourceModel = get_model(state)?;
        let (organization_id, environment_id, domain_id) = state_keys(&data)?;

        match client
            .delete_domain(&organization_id, &environment_id, &domain_id)
            .await
        {
            Err(e) if e.is_not_found() => {
                debug!("domain {domain_id} already deleted");
                Ok(())
            }
            res => res.map_err(Into::into),
        }
    }

    fn import_state(&self, id: &str) -> Result<Value, Diagnostics> {
        let (organization_id, environment_id, domain_id) =
            parse_domain_id(id).map_err(|e| invalid_id(e, "id"))?;
        Ok(json!({
            "id": ids::domain_id(&organization_id, &environment_id, &domain_id),
            "organization_id": organization_id,
            "environment_id": environment_id,
            "domain_id": domain_id,
        }))
    }
}
