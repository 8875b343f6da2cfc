//!
//! Provider framework for the Gravitee AM infrastructure provider
//!
//! Provides the building blocks a provider needs to expose remote entities
//! as declarative data sources and resources: schemas, diagnostics, the
//! provider traits and a host that dispatches operations by type name.
#![deny(missing_docs)]

pub use diagnostics::{Diagnostic, Diagnostics};
pub use host::ProviderHost;
pub use provider::{DataSource, Provider, Resource};
pub use schema::{Attribute, Schema};

pub mod compound_id;
pub mod config;
pub mod diagnostics;
pub mod host;
pub mod logging;
pub mod provider;
pub mod schema;

#[macro_export]
/// Time the code inside the macro. Write the elapsed time to debug logs.
/// Derived from https://notes.iveselov.info/programming/time_it-a-case-study-in-rust-macros
macro_rules! log_runtime {
    ($context:expr, $($tt:tt)+) => {
        {
            $crate::logging::debug!("{}: starting", $context);
            let timer = std::time::Instant::now();
            let x =
            $(
                $tt
            )+;
            $crate::logging::debug!("{}: {:?}", $context, timer.elapsed());
            x
        }
    }
}
