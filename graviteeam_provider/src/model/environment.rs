use graviteeam_core::{
    schema::{attributes, Attribute},
    Schema,
};
use serde::{Deserialize, Serialize};

use super::project;
use crate::api::Domain;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentDataSourceModel {
    pub id: Option<String>,
    /// `organizationId:environmentId`
    pub environment_id: String,
    pub domains: Option<Vec<EnvironmentDomainModel>>,
}

/// Summary of a domain living in the environment.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentDomainModel {
    pub id: Option<String>,
    pub hrid: Option<String>,
    pub name: Option<String>,
    pub enabled: Option<bool>,
}

impl From<Domain> for EnvironmentDomainModel {
    fn from(source: Domain) -> Self {
        let mut model = EnvironmentDomainModel::default();
        project(&mut model.id, source.id);
        project(&mut model.hrid, source.hrid);
        project(&mut model.name, source.name);
        project(&mut model.enabled, source.enabled);
        model
    }
}

/// The environment has no representation of its own upstream; its state
/// is the list of its domains.
pub fn map_environment_data_source(
    source: Vec<Domain>,
    mut target: EnvironmentDataSourceModel,
) -> EnvironmentDataSourceModel {
    target.id = Some(target.environment_id.clone());
    target.domains = Some(source.into_iter().map(Into::into).collect());
    target
}

pub fn environment_data_source_schema() -> Schema {
    Schema::new("Environment data source")
        .attribute("id", Attribute::string().computed().describe("Identifier"))
        .attribute(
            "environment_id",
            Attribute::string()
                .required()
                .describe("Environment id, as `organizationId:environmentId`"),
        )
        .attribute(
            "domains",
            Attribute::list_nested(attributes([
                ("id", Attribute::string().computed().describe("Domain id")),
                ("hrid", Attribute::string().computed().describe("Domain hrid")),
                ("name", Attribute::string().computed().describe("Domain name")),
                (
                    "enabled",
                    Attribute::bool().computed().describe("Domain enabled"),
                ),
            ]))
            .computed()
            .describe("Domains of the environment"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_keep_their_order() {
        let source = ["first", "second"]
            .into_iter()
            .map(|hrid| Domain {
                id: Some(format!("id-{hrid}")),
                hrid: Some(hrid.to_owned()),
                path: Some(format!("/{hrid}")),
                ..Default::default()
            })
            .collect();
        let model = map_environment_data_source(
            source,
            EnvironmentDataSourceModel {
                environment_id: "DEFAULT:DEFAULT".to_owned(),
                ..Default::default()
            },
        );

        assert_eq!(model.id.as_deref(), Some("DEFAULT:DEFAULT"));
        let domains = model.domains.unwrap();
        assert_eq!(domains[0].hrid.as_deref(), Some("first"));
        assert_eq!(domains[1].id.as_deref(), Some("id-second"));
        assert_eq!(domains[1].enabled, None);
    }

    #[test]
    fn empty_environment_has_empty_list() {
        let model = map_environment_data_source(vec![], Default::default());
        assert_eq!(model.domains, Some(vec![]));
    }
}
