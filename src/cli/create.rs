use std::path::PathBuf;

use clap::Args;
use orghooks_api::host;

use crate::auth;
use crate::cli::HostArgs;
use crate::error;
use crate::input;
use crate::transfer::{ConfigError, Source, SourceSelection, Transfer, TransferError};

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// organization to create webhooks in
    organization: String,

    /// csv file to read webhooks from, the format written by the list command
    #[arg(short, long)]
    from_file: Option<PathBuf>,

    /// organization to copy webhooks from
    #[arg(short, long)]
    source_organization: Option<String>,

    /// token for reading webhooks from the source organization
    ///
    /// required with --source-organization
    #[arg(long)]
    source_token: Option<String>,

    /// hostname of the source organization, defaults to --hostname
    #[arg(long)]
    source_hostname: Option<String>,

    /// prompt for the real secret of webhooks that have a redacted one
    #[arg(long)]
    prompt_secrets: bool,

    #[command(flatten)]
    pub host: HostArgs,
}

pub fn handle(args: CreateArgs) -> error::Result {
    // checked before anything is read or requested
    if !host::valid_organization(&args.organization) {
        return Err(ConfigError::InvalidOrganization(args.organization).into());
    }

    let selection = SourceSelection::resolve(
        args.from_file,
        args.source_organization,
        args.source_token
    )?;
    let token = auth::resolve_token(args.host.token, &args.host.hostname)?;
    let target = auth::client_for(&args.host.hostname, token)?;

    let source_client;
    let source = match selection {
        SourceSelection::File(path) => Source::File(path),
        SourceSelection::Organization { name, token } => {
            let hostname = args.source_hostname
                .as_deref()
                .unwrap_or(&args.host.hostname);

            source_client = auth::client_for(hostname, token)?;

            Source::Organization { name, api: &source_client }
        }
    };

    let prompt = args.prompt_secrets;
    let mut transfer = Transfer::new(&target, &args.organization);

    let result = transfer.run(source, |hook| input::review_secret(hook, prompt));

    tracing::debug!("transfer finished as {:?}", transfer.state());

    match result {
        Ok(count) => {
            println!("created {} webhooks in {}", count, args.organization);

            Ok(())
        },
        Err(err) => {
            let mut msg = format!(
                "failed after creating {} webhooks in {}",
                transfer.written(),
                args.organization
            );

            if let TransferError::Request(req) = &err {
                msg.push_str(", ");
                msg.push_str(&error::request_summary(req));
            }

            Err(error::Error::msg(msg).with_source(err))
        }
    }
}
