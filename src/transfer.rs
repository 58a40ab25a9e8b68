//! copies webhooks into a target organization.
//!
//! records come from exactly one source, a csv file or another organization,
//! and are created one at a time in input order. the first failed create stops
//! the run. hooks created before the failure stay in place.

use std::fs::OpenOptions;
use std::io::BufReader;
use std::path::PathBuf;

use orghooks_api::client::HooksApi;
use orghooks_api::client::error::RequestError;
use orghooks_api::host;
use orghooks_lib::hooks::normalize;
use orghooks_lib::{table, CreatedWebhook, Webhook};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("--from-file and --source-organization cannot be used together")]
    ConflictingSources,

    #[error("one of --from-file or --source-organization is required")]
    MissingSource,

    #[error("--source-token is required when using --source-organization")]
    MissingSourceToken,

    #[error("no token provided for {0}. use --token or set GH_TOKEN")]
    MissingToken(String),

    #[error("cannot create an api url from host: {0:?}")]
    InvalidHost(String),

    #[error("invalid organization name: {0:?}")]
    InvalidOrganization(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("failed to decode organization webhooks: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read webhooks file: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("transfer has already finished as {0:?}")]
    Finished(State),
}

/// where the records come from, checked before anything is read or requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    File(PathBuf),
    Organization {
        name: String,
        token: String,
    },
}

impl SourceSelection {
    /// empty values count as not given
    pub fn resolve(
        file: Option<PathBuf>,
        organization: Option<String>,
        token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = file.filter(|v| !v.as_os_str().is_empty());
        let organization = organization.filter(|v| !v.is_empty());

        match (file, organization) {
            (Some(_), Some(_)) => Err(ConfigError::ConflictingSources),
            (None, None) => Err(ConfigError::MissingSource),
            (Some(path), None) => Ok(SourceSelection::File(path)),
            (None, Some(name)) => {
                if !host::valid_organization(&name) {
                    return Err(ConfigError::InvalidOrganization(name));
                }

                let Some(token) = token.filter(|v| !v.is_empty()) else {
                    return Err(ConfigError::MissingSourceToken);
                };

                Ok(SourceSelection::Organization { name, token })
            }
        }
    }
}

pub enum Source<'a, S> {
    File(PathBuf),
    Organization {
        name: String,
        api: &'a S,
    },
}

impl<'a, S> Source<'a, S>
where
    S: HooksApi
{
    pub fn load(self) -> Result<Vec<CreatedWebhook>, TransferError> {
        match self {
            Source::File(path) => {
                tracing::debug!("reading hooks from file {}", path.display());

                let file = OpenOptions::new()
                    .read(true)
                    .open(&path)?;

                Ok(table::read_created(BufReader::new(file))?)
            },
            Source::Organization { name, api } => {
                let body = api.fetch(&name)?;
                let hooks: Vec<Webhook> = serde_json::from_slice(&body)?;

                tracing::debug!("retrieved {} hooks from {}", hooks.len(), name);

                Ok(hooks.into_iter()
                    .map(normalize)
                    .collect())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingSource,
    Streaming,
    Done,
    Failed,
}

pub struct Transfer<'a, T> {
    target: &'a T,
    organization: &'a str,
    state: State,
    written: usize,
}

impl<'a, T> Transfer<'a, T>
where
    T: HooksApi
{
    pub fn new(target: &'a T, organization: &'a str) -> Self {
        Transfer {
            target,
            organization,
            state: State::AwaitingSource,
            written: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// `review` sees each record right before it is sent
    pub fn run<S, F>(&mut self, source: Source<'_, S>, review: F) -> Result<usize, TransferError>
    where
        S: HooksApi,
        F: FnMut(&mut CreatedWebhook) -> std::io::Result<()>,
    {
        if self.state != State::AwaitingSource {
            return Err(TransferError::Finished(self.state));
        }

        let result = self.stream(source, review);

        self.state = if result.is_ok() {
            State::Done
        } else {
            State::Failed
        };

        result.map(|()| self.written)
    }

    fn stream<S, F>(&mut self, source: Source<'_, S>, mut review: F) -> Result<(), TransferError>
    where
        S: HooksApi,
        F: FnMut(&mut CreatedWebhook) -> std::io::Result<()>,
    {
        let records = source.load()?;
        let total = records.len();

        self.state = State::Streaming;

        for (index, mut record) in records.into_iter().enumerate() {
            review(&mut record)?;

            let name = record.name.clone();
            let url = record.config.url.clone();

            if let Err(err) = self.target.create(self.organization, record) {
                tracing::debug!(
                    "failed creating hook {} of {} ({} {}) in {}",
                    index + 1,
                    total,
                    name,
                    url,
                    self.organization
                );

                return Err(err.into());
            }

            self.written += 1;

            tracing::info!(
                "created hook {} of {} ({} {}) in {}",
                index + 1,
                total,
                name,
                url,
                self.organization
            );
        }

        Ok(())
    }
}
