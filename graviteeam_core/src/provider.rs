//! The traits every provider, data source and resource implements.
//!
//! The client handle built by [`Provider::configure`] is passed explicitly
//! to each operation; nothing is stashed in global state.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::schema::Schema;

/// Name and version of a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProviderMetadata {
    /// Prefix of every data source and resource type name.
    pub type_name: String,
    /// Provider version. "dev" for local builds, "test" for tests.
    pub version: String,
}

/// A provider: configuration plus the set of entities it exposes.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Handle shared by all operations once configured.
    type Client: Send + Sync + 'static;

    /// Name and version.
    fn metadata(&self) -> ProviderMetadata;
    /// Schema of the provider configuration block.
    fn schema(&self) -> Schema;
    /// Build the client handle from the provider configuration.
    async fn configure(&self, config: Value) -> Result<Self::Client, Diagnostics>;
    /// All data sources.
    fn data_sources(&self) -> Vec<Box<dyn DataSource<Client = Self::Client>>>;
    /// All resources.
    fn resources(&self) -> Vec<Box<dyn Resource<Client = Self::Client>>>;
}

/// A read-only projection of remote state.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Client handle type, shared with the owning provider.
    type Client: Send + Sync + 'static;

    /// Full type name given the provider's type name.
    fn metadata(&self, provider_type_name: &str) -> String;
    /// Attribute schema.
    fn schema(&self) -> Schema;
    /// Fetch remote state for `config` and return the resulting state.
    async fn read(&self, client: &Self::Client, config: Value) -> Result<Value, Diagnostics>;
}

/// An entity with a full create/read/update/delete lifecycle.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Client handle type, shared with the owning provider.
    type Client: Send + Sync + 'static;

    /// Full type name given the provider's type name.
    fn metadata(&self, provider_type_name: &str) -> String;
    /// Attribute schema.
    fn schema(&self) -> Schema;
    /// Create the entity described by `plan` and return its state.
    async fn create(&self, client: &Self::Client, plan: Value) -> Result<Value, Diagnostics>;
    /// Refresh `state`. `None` means the entity no longer exists upstream.
    async fn read(&self, client: &Self::Client, state: Value)
        -> Result<Option<Value>, Diagnostics>;
    /// Apply `plan` over `prior` state and return the new state.
    async fn update(
        &self,
        client: &Self::Client,
        plan: Value,
        prior: Value,
    ) -> Result<Value, Diagnostics>;
    /// Delete the entity recorded in `state`.
    async fn delete(&self, client: &Self::Client, state: Value) -> Result<(), Diagnostics>;
    /// Seed state from an import identifier. The host refreshes it with
    /// [`Resource::read`] afterwards.
    fn import_state(&self, id: &str) -> Result<Value, Diagnostics> {
        Ok(json!({ "id": id }))
    }
}

/// Decode configuration, plan or state into a typed model.
pub fn get_model<T: DeserializeOwned>(value: Value) -> Result<T, Diagnostics> {
    serde_json::from_value(value).map_err(|e| {
        Diagnostic::error("Unable to decode configuration", e.to_string()).into()
    })
}

/// Encode a typed model as state.
pub fn set_state<T: Serialize>(model: &T) -> Result<Value, Diagnostics> {
    serde_json::to_value(model)
        .map_err(|e| Diagnostic::error("Unable to encode state", e.to_string()).into())
}
