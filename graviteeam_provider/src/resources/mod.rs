//! Entities with a full lifecycle.

mod domain;

pub use domain::DomainResource;
