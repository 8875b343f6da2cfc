//! State models of every data source and resource, the mappers that
//! project API responses onto them, and their schemas.
//!
//! Mappers take the target by value and return it. Only fields the API
//! actually sent are copied; everything else on the target is left as is.

pub mod domain;
pub mod domain_resource;
pub mod environment;
pub mod identity_provider;
pub mod organization;

/// Overwrite `target` when the API sent a value.
pub(crate) fn project<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
