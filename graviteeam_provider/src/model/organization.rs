use graviteeam_core::{schema::Attribute, Schema};
use serde::{Deserialize, Serialize};

use super::project;
use crate::api::Organization;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OrganizationDataSourceModel {
    pub id: Option<String>,
    pub organization_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub identities: Option<Vec<String>>,
    pub hrids: Option<Vec<String>>,
}

pub fn map_organization_data_source(
    source: Organization,
    mut target: OrganizationDataSourceModel,
) -> OrganizationDataSourceModel {
    target.id = Some(target.organization_id.clone());
    project(&mut target.name, source.name);
    project(&mut target.description, source.description);
    project(&mut target.identities, source.identities);
    project(&mut target.hrids, source.hrids);
    target
}

pub fn organization_data_source_schema() -> Schema {
    Schema::new("Organization data source")
        .attribute(
            "id",
            Attribute::string().computed().describe("Identifier"),
        )
        .attribute(
            "organization_id",
            Attribute::string().required().describe("Organization id"),
        )
        .attribute(
            "name",
            Attribute::string().computed().describe("Organization name"),
        )
        .attribute(
            "description",
            Attribute::string()
                .computed()
                .describe("Organization description"),
        )
        .attribute(
            "identities",
            Attribute::string_list()
                .computed()
                .describe("Identity providers allowed to log into the organization"),
        )
        .attribute(
            "hrids",
            Attribute::string_list()
                .computed()
                .describe("Human readable ids of the organization"),
        )
}
