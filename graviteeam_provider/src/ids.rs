//! Compound identifiers of each entity kind.

use graviteeam_core::compound_id::{self, CompoundIdError};

/// `organizationId:environmentId`
pub fn parse_environment_id(id: &str) -> Result<(String, String), CompoundIdError> {
    let [org, env] = compound_id::parse(id, ["organizationId", "environmentId"])?;
    Ok((org, env))
}

/// `organizationId:environmentId:domainId`
pub fn parse_domain_id(id: &str) -> Result<(String, String, String), CompoundIdError> {
    let [org, env, domain] =
        compound_id::parse(id, ["organizationId", "environmentId", "domainId"])?;
    Ok((org, env, domain))
}

/// `organizationId:environmentId:domainId:identityProviderId`
pub fn parse_domain_identity_provider_id(
    id: &str,
) -> Result<(String, String, String, String), CompoundIdError> {
    let [org, env, domain, idp] = compound_id::parse(
        id,
        [
            "organizationId",
            "environmentId",
            "domainId",
            "identityProviderId",
        ],
    )?;
    Ok((org, env, domain, idp))
}

/// `organizationId:identityProviderId`
pub fn parse_organization_identity_provider_id(
    id: &str,
) -> Result<(String, String), CompoundIdError> {
    let [org, idp] = compound_id::parse(id, ["organizationId", "identityProviderId"])?;
    Ok((org, idp))
}

/// Identifier recorded in domain resource state.
pub fn domain_id(organization_id: &str, environment_id: &str, domain_id: &str) -> String {
    compound_id::format(&[organization_id, environment_id, domain_id])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_ids_have_two_parts() {
        assert_eq!(
            parse_environment_id("DEFAULT:DEFAULT").unwrap(),
            ("DEFAULT".to_owned(), "DEFAULT".to_owned())
        );
        assert!(parse_environment_id("DEFAULT").is_err());
        assert!(parse_environment_id("DEFAULT:DEFAULT:extra").is_err());
    }

    #[test]
    fn domain_ids_have_three_parts() {
        let (org, env, domain) = parse_domain_id("DEFAULT:DEFAULT:test-domain").unwrap();
        assert_eq!(
            (org.as_str(), env.as_str(), domain.as_str()),
            ("DEFAULT", "DEFAULT", "test-domain")
        );
    }

    #[test]
    fn empty_segments_are_rejected() {
        let err = parse_domain_id("DEFAULT::x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected format of ID (DEFAULT::x), expected organizationId:environmentId:domainId"
        );
    }

    #[test]
    fn identity_provider_ids() {
        let (_, _, domain, idp) =
            parse_domain_identity_provider_id("o:e:d:default-idp").unwrap();
        assert_eq!((domain.as_str(), idp.as_str()), ("d", "default-idp"));
        assert!(parse_domain_identity_provider_id("o:e:d").is_err());

        let (org, idp) = parse_organization_identity_provider_id("o:gravitee").unwrap();
        assert_eq!((org.as_str(), idp.as_str()), ("o", "gravitee"));
        assert!(parse_organization_identity_provider_id("o:e:gravitee").is_err());
    }

    #[test]
    fn domain_state_id_round_trips() {
        let id = domain_id("o", "e", "d");
        assert_eq!(id, "o:e:d");
        assert!(parse_domain_id(&id).is_ok());
    }
}
