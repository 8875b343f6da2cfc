//! The host side of a provider.
//!
//! `ProviderHost` configures a provider once, keeps the resulting client
//! handle, and dispatches data source and resource operations by their
//! full type name.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::log_runtime;
use crate::logging::{debug, info};
use crate::provider::{DataSource, Provider, ProviderMetadata, Resource};
use crate::schema::Schema;

/// Every schema a provider declares.
#[derive(Debug, Serialize)]
pub struct ProviderSchema {
    /// Name and version of the provider.
    pub metadata: ProviderMetadata,
    /// Provider configuration block.
    pub provider: Schema,
    /// Data source schemas by type name.
    pub data_sources: IndexMap<String, Schema>,
    /// Resource schemas by type name.
    pub resources: IndexMap<String, Schema>,
}

/// Collect every schema of `provider`. Does not require configuration.
pub fn provider_schema<P: Provider>(provider: &P) -> ProviderSchema {
    let metadata = provider.metadata();
    let data_sources = provider
        .data_sources()
        .iter()
        .map(|d| (d.metadata(&metadata.type_name), d.schema()))
        .collect();
    let resources = provider
        .resources()
        .iter()
        .map(|r| (r.metadata(&metadata.type_name), r.schema()))
        .collect();
    ProviderSchema {
        provider: provider.schema(),
        metadata,
        data_sources,
        resources,
    }
}

/// A configured provider, ready to serve operations.
pub struct ProviderHost<P: Provider> {
    metadata: ProviderMetadata,
    client: P::Client,
    data_sources: HashMap<String, Box<dyn DataSource<Client = P::Client>>>,
    resources: HashMap<String, Box<dyn Resource<Client = P::Client>>>,
}

impl<P: Provider> ProviderHost<P> {
    /// Validate `config` against the provider schema and configure it.
    pub async fn configure(provider: P, config: Value) -> Result<Self, Diagnostics> {
        let metadata = provider.metadata();
        provider.schema().validate_config(&config).into_result(())?;

        let client = log_runtime!(
            format!("configuring provider {}", metadata.type_name),
            provider.configure(config).await?
        );

        let data_sources = provider
            .data_sources()
            .into_iter()
            .map(|d| (d.metadata(&metadata.type_name), d))
            .collect::<HashMap<_, _>>();
        let resources = provider
            .resources()
            .into_iter()
            .map(|r| (r.metadata(&metadata.type_name), r))
            .collect::<HashMap<_, _>>();
        debug!(
            "registered {} data sources and {} resources",
            data_sources.len(),
            resources.len()
        );

        Ok(Self {
            metadata,
            client,
            data_sources,
            resources,
        })
    }

    /// Name and version of the hosted provider.
    pub fn metadata(&self) -> &ProviderMetadata {
        &self.metadata
    }

    /// The configured client handle.
    pub fn client(&self) -> &P::Client {
        &self.client
    }

    /// Expand a short type name (`domain`) to the full one
    /// (`provider_domain`). Full names are returned unchanged.
    pub fn full_type_name(&self, type_name: &str) -> String {
        let prefix = format!("{}_", self.metadata.type_name);
        if type_name.starts_with(&prefix) {
            type_name.to_owned()
        } else {
            format!("{prefix}{type_name}")
        }
    }

    fn data_source(&self, type_name: &str) -> Result<&dyn DataSource<Client = P::Client>, Diagnostics> {
        let full_name = self.full_type_name(type_name);
        self.data_sources
            .get(&full_name)
            .map(|d| d.as_ref())
            .ok_or_else(|| unknown_type("data source", &full_name))
    }

    fn resource(&self, type_name: &str) -> Result<&dyn Resource<Client = P::Client>, Diagnostics> {
        let full_name = self.full_type_name(type_name);
        self.resources
            .get(&full_name)
            .map(|r| r.as_ref())
            .ok_or_else(|| unknown_type("resource", &full_name))
    }

    /// Read a data source.
    pub async fn read_data_source(&self, type_name: &str, config: Value) -> Result<Value, Diagnostics> {
        let data_source = self.data_source(type_name)?;
        data_source.schema().validate_config(&config).into_result(())?;
        let state = log_runtime!(
            format!("read data source {type_name}"),
            data_source.read(&self.client, config).await?
        );
        info!("read data source {}", self.full_type_name(type_name));
        Ok(state)
    }

    /// Create a resource from a plan.
    pub async fn create_resource(&self, type_name: &str, plan: Value) -> Result<Value, Diagnostics> {
        let resource = self.resource(type_name)?;
        resource.schema().validate_config(&plan).into_result(())?;
        let state = log_runtime!(
            format!("create resource {type_name}"),
            resource.create(&self.client, plan).await?
        );
        info!("created resource {}", self.full_type_name(type_name));
        Ok(state)
    }

    /// Refresh a resource. `None` means it is gone upstream.
    pub async fn read_resource(
        &self,
        type_name: &str,
        state: Value,
    ) -> Result<Option<Value>, Diagnostics> {
        let resource = self.resource(type_name)?;
        log_runtime!(
            format!("read resource {type_name}"),
            resource.read(&self.client, state).await
        )
    }

    /// Update a resource.
    pub async fn update_resource(
        &self,
        type_name: &str,
        plan: Value,
        prior: Value,
    ) -> Result<Value, Diagnostics> {
        let resource = self.resource(type_name)?;
        resource.schema().validate_config(&plan).into_result(())?;
        let state = log_runtime!(
            format!("update resource {type_name}"),
            resource.update(&self.client, plan, prior).await?
        );
        info!("updated resource {}", self.full_type_name(type_name));
        Ok(state)
    }

    /// Delete a resource.
    pub async fn delete_resource(&self, type_name: &str, state: Value) -> Result<(), Diagnostics> {
        let resource = self.resource(type_name)?;
        log_runtime!(
            format!("delete resource {type_name}"),
            resource.delete(&self.client, state).await?
        );
        info!("deleted resource {}", self.full_type_name(type_name));
        Ok(())
    }

    /// Import an existing resource by identifier and refresh it.
    pub async fn import_resource(&self, type_name: &str, id: &str) -> Result<Value, Diagnostics> {
        let resource = self.resource(type_name)?;
        let seed = resource.import_state(id)?;
        resource.read(&self.client, seed).await?.ok_or_else(|| {
            Diagnostic::error(
                "Cannot import non-existent remote object",
                format!("no {} exists with id {id}", self.full_type_name(type_name)),
            )
            .into()
        })
    }
}

fn unknown_type(kind: &str, full_name: &str) -> Diagnostics {
    Diagnostic::error(
        format!("Unknown {kind} type"),
        format!("this provider does not declare a {kind} named {full_name}"),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::schema::Attribute;

    /// Provider whose client is a greeting prefix.
    struct EchoProvider;

    struct EchoDataSource;

    struct EchoResource;

    #[async_trait]
    impl Provider for EchoProvider {
        type Client = String;

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                type_name: "echo".to_owned(),
                version: "test".to_owned(),
            }
        }

        fn schema(&self) -> Schema {
            Schema::new("echo").attribute("greeting", Attribute::string().optional())
        }

        async fn configure(&self, config: Value) -> Result<String, Diagnostics> {
            Ok(config["greeting"].as_str().unwrap_or("hello").to_owned())
        }

        fn data_sources(&self) -> Vec<Box<dyn DataSource<Client = String>>> {
            vec![Box::new(EchoDataSource)]
        }

        fn resources(&self) -> Vec<Box<dyn Resource<Client = String>>> {
            vec![Box::new(EchoResource)]
        }
    }

    #[async_trait]
    impl DataSource for EchoDataSource {
        type Client = String;

        fn metadata(&self, provider_type_name: &str) -> String {
            format!("{provider_type_name}_thing")
        }

        fn schema(&self) -> Schema {
            Schema::new("thing")
                .attribute("name", Attribute::string().required())
                .attribute("message", Attribute::string().computed())
        }

        async fn read(&self, client: &String, config: Value) -> Result<Value, Diagnostics> {
            let name = config["name"].as_str().unwrap_or_default();
            Ok(json!({"name": name, "message": format!("{client} {name}")}))
        }
    }

    #[async_trait]
    impl Resource for EchoResource {
        type Client = String;

        fn metadata(&self, provider_type_name: &str) -> String {
            format!("{provider_type_name}_thing")
        }

        fn schema(&self) -> Schema {
            Schema::new("thing")
                .attribute("id", Attribute::string().computed())
                .attribute("name", Attribute::string().required())
        }

        async fn create(&self, _client: &String, plan: Value) -> Result<Value, Diagnostics> {
            Ok(json!({"id": "1", "name": plan["name"]}))
        }

        async fn read(&self, _client: &String, state: Value) -> Result<Option<Value>, Diagnostics> {
            if state["id"] == "missing" {
                return Ok(None);
            }
            Ok(Some(json!({"id": state["id"], "name": "imported"})))
        }

        async fn update(
            &self,
            _client: &String,
            plan: Value,
            prior: Value,
        ) -> Result<Value, Diagnostics> {
            Ok(json!({"id": prior["id"], "name": plan["name"]}))
        }

        async fn delete(&self, _client: &String, _state: Value) -> Result<(), Diagnostics> {
            Ok(())
        }
    }

    async fn host() -> ProviderHost<EchoProvider> {
        ProviderHost::configure(EchoProvider, json!({"greeting": "hi"}))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn configure_rejects_unknown_provider_settings() {
        let res = ProviderHost::configure(EchoProvider, json!({"nope": true})).await;
        assert!(res.is_err());
    }

    #[tokio::test]
    async fn data_source_read_uses_client_handle() {
        let state = host()
            .await
            .read_data_source("thing", json!({"name": "bob"}))
            .await
            .unwrap();
        assert_eq!(state["message"], "hi bob");
    }

    #[tokio::test]
    async fn full_and_short_type_names_resolve() {
        let host = host().await;
        assert_eq!(host.full_type_name("thing"), "echo_thing");
        assert_eq!(host.full_type_name("echo_thing"), "echo_thing");
        assert!(host
            .read_data_source("echo_thing", json!({"name": "x"}))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn unknown_type_is_an_error() {
        let err = host()
            .await
            .read_data_source("other", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.iter().next().unwrap().summary, "Unknown data source type");
    }

    #[tokio::test]
    async fn missing_required_attribute_short_circuits() {
        let err = host()
            .await
            .create_resource("thing", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.iter().next().unwrap().summary, "Missing required argument");
    }

    #[tokio::test]
    async fn resource_lifecycle_dispatches() {
        let host = host().await;
        let state = host
            .create_resource("thing", json!({"name": "a"}))
            .await
            .unwrap();
        assert_eq!(state["id"], "1");
        let state = host
            .update_resource("thing", json!({"name": "b"}), state)
            .await
            .unwrap();
        assert_eq!(state["name"], "b");
        host.delete_resource("thing", state).await.unwrap();
    }

    #[tokio::test]
    async fn import_of_missing_object_fails() {
        let host = host().await;
        assert_eq!(
            host.import_resource("thing", "42").await.unwrap()["name"],
            "imported"
        );
        let err = host.import_resource("thing", "missing").await.unwrap_err();
        assert_eq!(
            err.iter().next().unwrap().summary,
            "Cannot import non-existent remote object"
        );
    }

    #[test]
    fn schema_lists_every_entity() {
        let schema = provider_schema(&EchoProvider);
        assert!(schema.data_sources.contains_key("echo_thing"));
        assert!(schema.resources.contains_key("echo_thing"));
        assert_eq!(schema.metadata.version, "test");
    }
}
