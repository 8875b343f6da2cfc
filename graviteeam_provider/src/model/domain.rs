use graviteeam_core::{
    schema::{attributes, Attribute},
    Schema,
};
use serde::{Deserialize, Serialize};

use super::project;
use crate::api::{
    CibaSettings, ClientRegistrationSettings, Domain, LoginSettings, OidcSettings,
    SecurityProfileSettings,
};

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DomainDataSourceModel {
    pub id: Option<String>,
    /// `organizationId:environmentId:domainId`
    pub domain_id: String,
    pub hrid: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub master: Option<bool>,
    pub vhost_mode: Option<bool>,
    pub oidc: Option<DomainOidcModel>,
    pub login_settings: Option<DomainLoginSettingsModel>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DomainOidcModel {
    pub client_registration_settings: Option<ClientRegistrationSettingsModel>,
    pub security_profile_settings: Option<SecurityProfileSettingsModel>,
    pub redirect_uri_strict_matching: Option<bool>,
    pub ciba_settings: Option<CibaSettingsModel>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ClientRegistrationSettingsModel {
    pub allow_localhost_redirect_uri: Option<bool>,
    pub allow_http_scheme_redirect_uri: Option<bool>,
    pub allow_wild_card_redirect_uri: Option<bool>,
    pub is_dynamic_client_registration_enabled: Option<bool>,
    pub is_open_dynamic_client_registration_enabled: Option<bool>,
    pub is_allowed_scopes_enabled: Option<bool>,
    pub is_client_template_enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct SecurityProfileSettingsModel {
    pub enable_plain_fapi: Option<bool>,
    pub enable_fapi_brazil: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CibaSettingsModel {
    pub enabled: Option<bool>,
    pub auth_req_expiry: Option<f64>,
    pub token_req_interval: Option<f64>,
    pub binding_message_length: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct DomainLoginSettingsModel {
    pub inherited: Option<bool>,
    pub forgot_password_enabled: Option<bool>,
    pub register_enabled: Option<bool>,
    pub remember_me_enabled: Option<bool>,
    pub passwordless_enabled: Option<bool>,
    pub passwordless_remember_device_enabled: Option<bool>,
    pub passwordless_enforce_password_enabled: Option<bool>,
    pub passwordless_device_naming_enabled: Option<bool>,
    pub hide_form: Option<bool>,
    pub identifier_first_enabled: Option<bool>,
}

impl From<ClientRegistrationSettings> for ClientRegistrationSettingsModel {
    fn from(s: ClientRegistrationSettings) -> Self {
        Self {
            allow_localhost_redirect_uri: s.allow_localhost_redirect_uri,
            allow_http_scheme_redirect_uri: s.allow_http_scheme_redirect_uri,
            allow_wild_card_redirect_uri: s.allow_wild_card_redirect_uri,
            is_dynamic_client_registration_enabled: s.is_dynamic_client_registration_enabled,
            is_open_dynamic_client_registration_enabled: s
                .is_open_dynamic_client_registration_enabled,
            is_allowed_scopes_enabled: s.is_allowed_scopes_enabled,
            is_client_template_enabled: s.is_client_template_enabled,
        }
    }
}

impl From<SecurityProfileSettings> for SecurityProfileSettingsModel {
    fn from(s: SecurityProfileSettings) -> Self {
        Self {
            enable_plain_fapi: s.enable_plain_fapi,
            enable_fapi_brazil: s.enable_fapi_brazil,
        }
    }
}

impl From<CibaSettings> for CibaSettingsModel {
    fn from(s: CibaSettings) -> Self {
        Self {
            enabled: s.enabled,
            auth_req_expiry: s.auth_req_expiry,
            token_req_interval: s.token_req_interval,
            binding_message_length: s.binding_message_length,
        }
    }
}

impl From<OidcSettings> for DomainOidcModel {
    fn from(s: OidcSettings) -> Self {
        Self {
            client_registration_settings: s.client_registration_settings.map(Into::into),
            security_profile_settings: s.security_profile_settings.map(Into::into),
            redirect_uri_strict_matching: s.redirect_uri_strict_matching,
            ciba_settings: s.ciba_settings.map(Into::into),
        }
    }
}

impl From<LoginSettings> for DomainLoginSettingsModel {
    fn from(s: LoginSettings) -> Self {
        Self {
            inherited: s.inherited,
            forgot_password_enabled: s.forgot_password_enabled,
            register_enabled: s.register_enabled,
            remember_me_enabled: s.remember_me_enabled,
            passwordless_enabled: s.passwordless_enabled,
            passwordless_remember_device_enabled: s.passwordless_remember_device_enabled,
            passwordless_enforce_password_enabled: s.passwordless_enforce_password_enabled,
            passwordless_device_naming_enabled: s.passwordless_device_naming_enabled,
            hide_form: s.hide_form,
            identifier_first_enabled: s.identifier_first_enabled,
        }
    }
}

pub fn map_domain_data_source(
    source: Domain,
    mut target: DomainDataSourceModel,
) -> DomainDataSourceModel {
    target.id = Some(target.domain_id.clone());
    project(&mut target.hrid, source.hrid);
    project(&mut target.name, source.name);
    project(&mut target.description, source.description);
    project(&mut target.enabled, source.enabled);
    project(&mut target.master, source.master);
    project(&mut target.vhost_mode, source.vhost_mode);
    project(&mut target.oidc, source.oidc.map(Into::into));
    project(&mut target.login_settings, source.login_settings.map(Into::into));
    target
}

fn computed_bools<const N: usize>(names: [&str; N]) -> graviteeam_core::schema::Attributes {
    names
        .into_iter()
        .map(|name| (name.to_owned(), Attribute::bool().computed()))
        .collect()
}

pub fn domain_data_source_schema() -> Schema {
    let client_registration = computed_bools([
        "allow_localhost_redirect_uri",
        "allow_http_scheme_redirect_uri",
        "allow_wild_card_redirect_uri",
        "is_dynamic_client_registration_enabled",
        "is_open_dynamic_client_registration_enabled",
        "is_allowed_scopes_enabled",
        "is_client_template_enabled",
    ]);
    let security_profile = computed_bools(["enable_plain_fapi", "enable_fapi_brazil"]);
    let ciba = attributes([
        ("enabled", Attribute::bool().computed()),
        ("auth_req_expiry", Attribute::number().computed()),
        ("token_req_interval", Attribute::number().computed()),
        ("binding_message_length", Attribute::number().computed()),
    ]);
    let login_settings = computed_bools([
        "inherited",
        "forgot_password_enabled",
        "register_enabled",
        "remember_me_enabled",
        "passwordless_enabled",
        "passwordless_remember_device_enabled",
        "passwordless_enforce_password_enabled",
        "passwordless_device_naming_enabled",
        "hide_form",
        "identifier_first_enabled",
    ]);

    Schema::new("Domain data source")
        .attribute("id", Attribute::string().computed().describe("Identifier"))
        .attribute(
            "domain_id",
            Attribute::string()
                .required()
                .describe("Domain id, as `organizationId:environmentId:domainId`"),
        )
        .attribute("hrid", Attribute::string().computed().describe("Domain hrid"))
        .attribute("name", Attribute::string().computed().describe("Domain name"))
        .attribute(
            "description",
            Attribute::string().computed().describe("Domain description"),
        )
        .attribute("enabled", Attribute::bool().computed().describe("Domain enabled"))
        .attribute("master", Attribute::bool().computed().describe("Domain master"))
        .attribute(
            "vhost_mode",
            Attribute::bool().computed().describe("Domain vhost mode"),
        )
        .attribute(
            "oidc",
            Attribute::single_nested(attributes([
                (
                    "client_registration_settings",
                    Attribute::single_nested(client_registration).computed(),
                ),
                (
                    "security_profile_settings",
                    Attribute::single_nested(security_profile).computed(),
                ),
                ("redirect_uri_strict_matching", Attribute::bool().computed()),
                ("ciba_settings", Attribute::single_nested(ciba).computed()),
            ]))
            .computed()
            .describe("OpenID Connect settings"),
        )
        .attribute(
            "login_settings",
            Attribute::single_nested(login_settings)
                .computed()
                .describe("Login page settings"),
        )
}
