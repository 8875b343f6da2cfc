use std::collections::BTreeMap;

use graviteeam_core::{
    schema::{attributes, Attribute},
    Schema,
};
use serde::{Deserialize, Serialize};

use super::project;
use crate::api::IdentityProvider;

/// State shared by the domain and organization identity provider data
/// sources. Only the shape of `identity_provider_id` differs.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct IdentityProviderDataSourceModel {
    pub id: Option<String>,
    pub identity_provider_id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub provider_type: Option<String>,
    pub system: Option<bool>,
    pub configuration: Option<String>,
    pub user_mappers: Option<BTreeMap<String, UserMapperModel>>,
    pub role_mappers: Option<BTreeMap<String, RoleMapperModel>>,
    pub reference_type: Option<String>,
    pub reference_id: Option<String>,
    pub external: Option<bool>,
    pub whitelist: Option<Vec<String>>,
}

/// Claim a user attribute is read from.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct UserMapperModel {
    pub mapping: String,
}

/// Rules granting a role.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RoleMapperModel {
    pub mapping: Vec<String>,
}

pub fn map_identity_provider_data_source(
    source: IdentityProvider,
    mut target: IdentityProviderDataSourceModel,
) -> IdentityProviderDataSourceModel {
    target.id = Some(target.identity_provider_id.clone());
    project(&mut target.name, source.name);
    project(&mut target.provider_type, source.provider_type);
    project(&mut target.system, source.system);
    project(&mut target.configuration, source.configuration);
    project(
        &mut target.user_mappers,
        source.mappers.map(|mappers| {
            mappers
                .into_iter()
                .map(|(name, mapping)| (name, UserMapperModel { mapping }))
                .collect()
        }),
    );
    project(
        &mut target.role_mappers,
        source.role_mapper.map(|roles| {
            roles
                .into_iter()
                .map(|(name, mapping)| (name, RoleMapperModel { mapping }))
                .collect()
        }),
    );
    project(&mut target.reference_type, source.reference_type);
    project(&mut target.reference_id, source.reference_id);
    project(&mut target.external, source.external);
    project(&mut target.whitelist, source.domain_whitelist);
    target
}

/// `owner` names the parent entity in descriptions, `id_shape` the
/// expected compound id.
pub fn identity_provider_data_source_schema(owner: &str, id_shape: &str) -> Schema {
    Schema::new(format!("{owner} identity provider data source"))
        .attribute("id", Attribute::string().computed().describe("Identifier"))
        .attribute(
            "identity_provider_id",
            Attribute::string()
                .required()
                .describe(format!("Identity provider id, as `{id_shape}`")),
        )
        .attribute(
            "name",
            Attribute::string().computed().describe("Identity provider name"),
        )
        .attribute(
            "type",
            Attribute::string()
                .computed()
                .describe("Identity provider plugin type"),
        )
        .attribute(
            "system",
            Attribute::bool()
                .computed()
                .describe("Whether the identity provider is managed by the platform"),
        )
        .attribute(
            "configuration",
            Attribute::string()
                .computed()
                .sensitive()
                .describe("Plugin configuration as a JSON document"),
        )
        .attribute(
            "user_mappers",
            Attribute::map_nested(attributes([(
                "mapping",
                Attribute::string()
                    .computed()
                    .describe("Claim the user attribute is read from"),
            )]))
            .computed()
            .describe("User attribute mapping"),
        )
        .attribute(
            "role_mappers",
            Attribute::map_nested(attributes([(
                "mapping",
                Attribute::string_list()
                    .computed()
                    .describe("Rules granting the role"),
            )]))
            .computed()
            .describe("Role mapping"),
        )
        .attribute(
            "reference_type",
            Attribute::string().computed().describe("Owner type"),
        )
        .attribute(
            "reference_id",
            Attribute::string().computed().describe("Owner id"),
        )
        .attribute(
            "external",
            Attribute::bool()
                .computed()
                .describe("Whether the identity provider is exposed externally"),
        )
        .attribute(
            "whitelist",
            Attribute::string_list()
                .computed()
                .describe("Domains allowed to use the identity provider"),
        )
}
