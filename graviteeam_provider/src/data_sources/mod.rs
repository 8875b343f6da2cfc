//! Read-only projections of AM entities.

mod domain;
mod domain_identity_provider;
mod environment;
mod organization;
mod organization_identity_provider;

pub use domain::DomainDataSource;
pub use domain_identity_provider::DomainIdentityProviderDataSource;
pub use environment::EnvironmentDataSource;
pub use organization::OrganizationDataSource;
pub use organization_identity_provider::OrganizationIdentityProviderDataSource;

use graviteeam_core::{compound_id::CompoundIdError, Diagnostic, Diagnostics};

use crate::error::ProviderError;

/// Error for a compound id that does not parse, bound to its attribute.
pub(crate) fn invalid_id(err: CompoundIdError, attribute: &str) -> Diagnostics {
    Diagnostic::from(ProviderError::from(err))
        .at(attribute)
        .into()
}
