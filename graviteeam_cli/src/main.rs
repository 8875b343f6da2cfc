//! Gravitee AM provider CLI
//!

#![deny(missing_docs)]

use anyhow::Result;

use graviteeam_lib::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli().await
}
