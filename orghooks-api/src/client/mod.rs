use bytes::Bytes;
use orghooks_lib::CreatedWebhook;
use reqwest::Url;
use reqwest::blocking::RequestBuilder;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::host;

pub mod error;
pub mod hooks;

use error::{ApiClientError, RequestError};
use hooks::{QueryHooks, CreateHook};

const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("orghooks/", env!("CARGO_PKG_VERSION"));

/// the two operations needed to copy webhooks between organizations
pub trait HooksApi {
    fn fetch(&self, organization: &str) -> Result<Bytes, RequestError>;

    fn create(&self, organization: &str, hook: CreatedWebhook) -> Result<(), RequestError>;
}

pub struct Info {
    pub url: Url
}

pub struct ApiClient {
    pub(crate) client: reqwest::blocking::Client,
    pub(crate) info: Info
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder {
            host: host::DEFAULT_HOST.into(),
            token: None,
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub(crate) fn get<U>(&self, path: U) -> Result<RequestBuilder, url::ParseError>
    where
        U: AsRef<str>,
    {
        let url = self.info.url.join(path.as_ref())?;

        Ok(self.client.get(url))
    }

    pub(crate) fn post<U>(&self, path: U) -> Result<RequestBuilder, url::ParseError>
    where
        U: AsRef<str>
    {
        let url = self.info.url.join(path.as_ref())?;

        Ok(self.client.post(url))
    }
}

impl HooksApi for ApiClient {
    fn fetch(&self, organization: &str) -> Result<Bytes, RequestError> {
        QueryHooks::org(organization).send(self)
    }

    fn create(&self, organization: &str, hook: CreatedWebhook) -> Result<(), RequestError> {
        CreateHook::new(organization, hook).send(self)
    }
}

pub struct ApiClientBuilder {
    host: String,
    token: Option<String>,
}

impl ApiClientBuilder {
    /// returns false if no api url can be made from the value
    pub fn host<H>(&mut self, host: H) -> bool
    where
        H: AsRef<str>
    {
        if host::api_url(host.as_ref()).is_ok() {
            self.host = host.as_ref().trim().to_owned();
            true
        } else {
            false
        }
    }

    pub fn token<T>(&mut self, token: T)
    where
        T: Into<String>
    {
        self.token = Some(token.into());
    }

    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let url = host::api_url(&self.host)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        if let Some(token) = self.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ApiClientError::InvalidToken)?;
            value.set_sensitive(true);

            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(ApiClient {
            client,
            info: Info {
                url
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builder_resolves_host() {
        let mut builder = ApiClient::builder();

        assert!(builder.host("ghes.example.com"));
        assert!(!builder.host("bad host name"));

        let client = builder.build().unwrap();

        assert_eq!(client.info().url.as_str(), "https://ghes.example.com/api/v3/");
    }

    #[test]
    fn builder_default_host() {
        let client = ApiClient::builder().build().unwrap();

        assert_eq!(client.info().url.as_str(), "https://api.github.com/");
    }

    #[test]
    fn builder_rejects_invalid_token() {
        let mut builder = ApiClient::builder();
        builder.token("ghp_abc\nInjected: header");

        assert!(matches!(builder.build(), Err(ApiClientError::InvalidToken)));
    }
}
