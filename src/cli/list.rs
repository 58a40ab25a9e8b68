use std::fs::OpenOptions;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use orghooks_api::client::HooksApi;
use orghooks_api::host;
use orghooks_lib::{table, Webhook};

use crate::auth;
use crate::cli::HostArgs;
use crate::error::{self, Context};
use crate::transfer::ConfigError;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// organization to list webhooks from
    organization: String,

    /// file to write the csv report to
    ///
    /// defaults to "<organization>-webhooks-<timestamp>.csv" in the current
    /// working directory
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    #[command(flatten)]
    pub host: HostArgs,
}

pub fn default_report_name(organization: &str, now: DateTime<Utc>) -> PathBuf {
    PathBuf::from(format!(
        "{}-webhooks-{}.csv",
        organization,
        now.format("%Y%m%d%H%M%S")
    ))
}

pub fn handle(args: ListArgs) -> error::Result {
    if !host::valid_organization(&args.organization) {
        return Err(ConfigError::InvalidOrganization(args.organization).into());
    }

    let token = auth::resolve_token(args.host.token, &args.host.hostname)?;
    let client = auth::client_for(&args.host.hostname, token)?;

    let body = error::request_context(
        client.fetch(&args.organization),
        "failed to retrieve organization webhooks"
    )?;
    let hooks: Vec<Webhook> = serde_json::from_slice(&body)
        .context("failed to decode organization webhooks")?;

    let output = args.output_file
        .unwrap_or_else(|| default_report_name(&args.organization, Utc::now()));

    tracing::debug!("writing {} hooks to {}", hooks.len(), output.display());

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&output)
        .context(format!("failed to open report file {}", output.display()))?;

    table::write_report(BufWriter::new(file), &hooks)
        .context("failed to write report")?;

    println!("wrote {} webhooks to {}", hooks.len(), output.display());

    Ok(())
}
