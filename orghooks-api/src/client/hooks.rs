use bytes::Bytes;
use orghooks_lib::CreatedWebhook;

use crate::client::error::RequestError;
use crate::client::ApiClient;
use crate::host::{hooks_path, valid_organization};
use crate::ApiError;

fn checked_path(organization: &str) -> Result<String, RequestError> {
    if valid_organization(organization) {
        Ok(hooks_path(organization))
    } else {
        Err(RequestError::InvalidOrganization(organization.to_owned()))
    }
}

fn api_error(res: reqwest::blocking::Response) -> RequestError {
    let status = res.status().as_u16();

    match res.text() {
        Ok(body) => RequestError::Api(ApiError::new(status, body)),
        Err(err) => RequestError::Reqwest(err),
    }
}

/// the body is handed back as is. only the first page is retrieved.
pub struct QueryHooks {
    organization: String,
}

impl QueryHooks {
    pub fn org<O>(organization: O) -> Self
    where
        O: Into<String>
    {
        QueryHooks {
            organization: organization.into()
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<Bytes, RequestError> {
        let path = checked_path(&self.organization)?;

        tracing::debug!("reading hooks from {}", path);

        let res = client.get(&path)?.send()?;

        if res.status().is_success() {
            Ok(res.bytes()?)
        } else {
            Err(api_error(res))
        }
    }
}

pub struct CreateHook {
    organization: String,
    body: CreatedWebhook,
}

impl CreateHook {
    pub fn new<O>(organization: O, body: CreatedWebhook) -> Self
    where
        O: Into<String>
    {
        CreateHook {
            organization: organization.into(),
            body,
        }
    }

    pub fn send(self, client: &ApiClient) -> Result<(), RequestError> {
        let path = checked_path(&self.organization)?;

        tracing::debug!("creating hook {:?} at {}", self.body.name, path);

        let res = client.post(&path)?
            .json(&self.body)
            .send()?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(api_error(res))
        }
    }
}
