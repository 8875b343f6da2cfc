use graviteeam_core::{schema::Attribute, Schema};
use serde::{Deserialize, Serialize};

use super::project;
use crate::api::{Domain, NewDomain, PatchDomain};
use crate::ids;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DomainResourceModel {
    /// `organizationId:environmentId:domainId`
    pub id: Option<String>,
    pub organization_id: String,
    pub environment_id: String,
    pub name: String,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub vhost_mode: Option<bool>,
    pub domain_id: Option<String>,
    pub hrid: Option<String>,
    pub master: Option<bool>,
}

impl DomainResourceModel {
    /// Creation body. Only name and description are accepted on creation.
    pub fn new_domain(&self) -> NewDomain {
        NewDomain {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Settings that can only be applied after creation.
    pub fn post_create_patch(&self) -> PatchDomain {
        PatchDomain {
            enabled: self.enabled,
            vhost_mode: self.vhost_mode,
            ..Default::default()
        }
    }

    /// Every updatable field as planned. A description dropped from the
    /// plan is cleared upstream with an empty string, since absent patch
    /// fields are left alone.
    pub fn update_patch(&self, prior: &DomainResourceModel) -> PatchDomain {
        let description = match (&self.description, &prior.description) {
            (None, Some(_)) => Some(String::new()),
            (planned, _) => planned.clone(),
        };
        PatchDomain {
            name: Some(self.name.clone()),
            description,
            enabled: self.enabled,
            vhost_mode: self.vhost_mode,
        }
    }
}

pub fn map_domain_resource(source: Domain, mut target: DomainResourceModel) -> DomainResourceModel {
    project(&mut target.domain_id, source.id);
    project(&mut target.hrid, source.hrid);
    project(&mut target.master, source.master);
    if let Some(name) = source.name {
        target.name = name;
    }
    // AM reports a cleared description as an empty string
    project(
        &mut target.description,
        source.description.filter(|d| !d.is_empty()),
    );
    project(&mut target.enabled, source.enabled);
    project(&mut target.vhost_mode, source.vhost_mode);
    if let Some(domain_id) = &target.domain_id {
        target.id = Some(ids::domain_id(
            &target.organization_id,
            &target.environment_id,
            domain_id,
        ));
    }
    target
}

pub fn domain_resource_schema() -> Schema {
    Schema::new("Domain resource")
        .attribute(
            "id",
            Attribute::string()
                .computed()
                .describe("Identifier, as `organizationId:environmentId:domainId`"),
        )
        .attribute(
            "organization_id",
            Attribute::string().required().describe("Organization id"),
        )
        .attribute(
            "environment_id",
            Attribute::string().required().describe("Environment id"),
        )
        .attribute("name", Attribute::string().required().describe("Domain name"))
        .attribute(
            "description",
            Attribute::string().optional().describe("Domain description"),
        )
        .attribute(
            "enabled",
            Attribute::bool()
                .optional()
                .computed()
                .describe("Whether the domain serves requests"),
        )
        .attribute(
            "vhost_mode",
            Attribute::bool()
                .optional()
                .computed()
                .describe("Whether the domain is exposed through virtual hosts"),
        )
        .attribute(
            "domain_id",
            Attribute::string().computed().describe("Domain id"),
        )
        .attribute("hrid", Attribute::string().computed().describe("Domain hrid"))
        .attribute("master", Attribute::bool().computed().describe("Domain master"))
}
