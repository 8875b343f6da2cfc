//! Full CLI library for the Gravitee AM provider
//!

#![deny(missing_docs)]

mod cmd;
mod input;
mod output;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use human_panic::setup_panic;
use serde_json::Value;

use graviteeam_core::{
    config::load_provider_config,
    host::provider_schema,
    logging::{self, debug, warn},
    Diagnostics, ProviderHost,
};
use graviteeam_provider::GraviteeAmProvider;

use cmd::{GraviteeAmArgs, GraviteeAmCommand};
use input::parse_json_arg;
use output::{print_diagnostics, print_json};

/// Main CLI entrypoint.
pub async fn cli() -> Result<()> {
    setup_panic!();
    let args = GraviteeAmArgs::parse();
    logging::setup(args.log_level);

    run(&args).await
}

/// Run a single command. Only operations configure the provider.
async fn run(args: &GraviteeAmArgs) -> Result<()> {
    let config_path = args.provider_config.as_deref();
    match &args.command {
        GraviteeAmCommand::Schema => print_json(&provider_schema(&GraviteeAmProvider::default())),
        GraviteeAmCommand::Read { type_name, config } => {
            let host = configure(config_path).await?;
            let state = host
                .read_data_source(type_name, parse_json_arg(config)?)
                .await;
            print_json(&check(state)?)
        }
        GraviteeAmCommand::Create { type_name, plan } => {
            let host = configure(config_path).await?;
            let state = host.create_resource(type_name, parse_json_arg(plan)?).await;
            print_json(&check(state)?)
        }
        GraviteeAmCommand::Refresh { type_name, state } => {
            let host = configure(config_path).await?;
            let state = check(
                host.read_resource(type_name, parse_json_arg(state)?)
                    .await,
            )?;
            if state.is_none() {
                warn!("{type_name} no longer exists upstream");
            }
            print_json(&state)
        }
        GraviteeAmCommand::Update {
            type_name,
            plan,
            state,
        } => {
            let host = configure(config_path).await?;
            let state = host
                .update_resource(type_name, parse_json_arg(plan)?, parse_json_arg(state)?)
                .await;
            print_json(&check(state)?)
        }
        GraviteeAmCommand::Delete { type_name, state } => {
            let host = configure(config_path).await?;
            check(
                host.delete_resource(type_name, parse_json_arg(state)?)
                    .await,
            )?;
            debug!("deleted {type_name}");
            Ok(())
        }
        GraviteeAmCommand::Import { type_name, id } => {
            let host = configure(config_path).await?;
            let state = host.import_resource(type_name, id).await;
            print_json(&check(state)?)
        }
    }
}

async fn configure(config_path: Option<&Path>) -> Result<ProviderHost<GraviteeAmProvider>> {
    let config: Value = load_provider_config(config_path).context("loading provider config")?;
    check(ProviderHost::configure(GraviteeAmProvider::default(), config).await)
}

/// Print diagnostics of a failed operation and turn them into an error.
fn check<T>(res: std::result::Result<T, Diagnostics>) -> Result<T> {
    match res {
        Ok(value) => Ok(value),
        Err(diagnostics) => {
            print_diagnostics(&diagnostics);
            bail!("operation failed with {} diagnostic(s)", diagnostics.len())
        }
    }
}
