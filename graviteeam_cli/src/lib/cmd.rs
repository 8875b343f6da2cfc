//! Commands for the Gravitee AM provider CLI
//!

use std::path::PathBuf;

use clap::{self, Parser, Subcommand};

use graviteeam_core::logging::LevelFilter;

/// Drive the Gravitee AM provider from the command line
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
pub(crate) struct GraviteeAmArgs {
    #[clap(subcommand)]
    pub(crate) command: GraviteeAmCommand,
    #[clap(global = true, short = 'v', long)]
    pub(crate) log_level: Option<LevelFilter>,
    /// YAML file with the provider settings. Defaults to ~/.graviteeam/provider.yaml
    #[clap(global = true, long)]
    pub(crate) provider_config: Option<PathBuf>,
}

/// JSON arguments are given inline or as `@path/to/file.json`. Type names
/// may omit the `graviteeioam_` prefix.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum GraviteeAmCommand {
    /// Print the provider, data source and resource schemas
    Schema,
    /// Read a data source
    Read {
        /// Data source type, e.g. domain
        type_name: String,
        /// Data source configuration
        #[clap(short, long)]
        config: String,
    },
    /// Create a resource
    Create {
        /// Resource type, e.g. domain
        type_name: String,
        /// Planned resource state
        #[clap(short, long)]
        plan: String,
    },
    /// Refresh the state of a resource
    Refresh {
        /// Resource type
        type_name: String,
        /// Current resource state
        #[clap(short, long)]
        state: String,
    },
    /// Update a resource
    Update {
        /// Resource type
        type_name: String,
        /// Planned resource state
        #[clap(short, long)]
        plan: String,
        /// Current resource state
        #[clap(short, long)]
        state: String,
    },
    /// Delete a resource
    Delete {
        /// Resource type
        type_name: String,
        /// Current resource state
        #[clap(short, long)]
        state: String,
    },
    /// Import an existing resource by identifier
    Import {
        /// Resource type
        type_name: String,
        /// Identifier, e.g. organizationId:environmentId:domainId
        id: String,
    },
}
