use clap::{Parser, Subcommand, Args};
use orghooks_api::host::DEFAULT_HOST;

use crate::error;

mod list;
mod create;

/// list and create organization level webhooks.
///
/// webhooks can be exported from an organization to a csv file and created
/// in another organization from that file or directly from the source
/// organization.
#[derive(Debug, Parser)]
#[command(name = "orghooks")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    command: BaseCmds
}

impl Cli {
    pub fn debug(&self) -> bool {
        match &self.command {
            BaseCmds::List(given) => given.host.debug,
            BaseCmds::Create(given) => given.host.debug,
        }
    }
}

#[derive(Debug, Subcommand)]
enum BaseCmds {
    /// list organization level webhooks into a csv report
    List(list::ListArgs),

    /// create organization level webhooks
    Create(create::CreateArgs),
}

/// options shared by every command
#[derive(Debug, Args)]
pub struct HostArgs {
    /// hostname of the github instance, use this for enterprise server
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    pub hostname: String,

    /// token used for the organization given as the command argument
    ///
    /// falls back to GH_TOKEN / GITHUB_TOKEN for github.com and to
    /// GH_ENTERPRISE_TOKEN / GITHUB_ENTERPRISE_TOKEN for other hosts
    #[arg(short, long)]
    pub token: Option<String>,

    /// enables debug logging
    #[arg(short, long)]
    pub debug: bool,
}

pub fn handle(args: Cli) -> error::Result {
    match args.command {
        BaseCmds::List(given) => list::handle(given),
        BaseCmds::Create(given) => create::handle(given),
    }
}
