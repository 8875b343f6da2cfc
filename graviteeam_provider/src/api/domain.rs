use serde::{Deserialize, Serialize};

/// A security domain.
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: Option<String>,
    pub hrid: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub enabled: Option<bool>,
    pub master: Option<bool>,
    pub vhost_mode: Option<bool>,
    pub path: Option<String>,
    pub reference_type: Option<String>,
    pub reference_id: Option<String>,
    pub oidc: Option<OidcSettings>,
    pub login_settings: Option<LoginSettings>,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OidcSettings {
    pub client_registration_settings: Option<ClientRegistrationSettings>,
    pub security_profile_settings: Option<SecurityProfileSettings>,
    pub redirect_uri_strict_matching: Option<bool>,
    pub ciba_settings: Option<CibaSettings>,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientRegistrationSettings {
    pub allow_localhost_redirect_uri: Option<bool>,
    pub allow_http_scheme_redirect_uri: Option<bool>,
    pub allow_wild_card_redirect_uri: Option<bool>,
    pub is_dynamic_client_registration_enabled: Option<bool>,
    pub is_open_dynamic_client_registration_enabled: Option<bool>,
    pub is_allowed_scopes_enabled: Option<bool>,
    pub is_client_template_enabled: Option<bool>,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityProfileSettings {
    pub enable_plain_fapi: Option<bool>,
    pub enable_fapi_brazil: Option<bool>,
}

/// Client-initiated backchannel authentication.
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CibaSettings {
    pub enabled: Option<bool>,
    pub auth_req_expiry: Option<f64>,
    pub token_req_interval: Option<f64>,
    pub binding_message_length: Option<f64>,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginSettings {
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

/// Body of a domain creation request.
#[derive(Clone, Default, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewDomain {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of a domain patch request. Absent fields are left alone upstream.
#[derive(Clone, Default, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatchDomain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vhost_mode: Option<bool>,
}

impl PatchDomain {
    /// Whether the patch changes anything.
    pub fn is_empty(&self) -> bool {
        self == &PatchDomain::default()
    }
}
