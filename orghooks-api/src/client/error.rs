use crate::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("invalid api host: {0}")]
    InvalidHost(#[from] url::ParseError),

    #[error("token contains characters that are not valid in a header")]
    InvalidToken,

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid organization name: {0:?}")]
    InvalidOrganization(String),
}

impl RequestError {
    /// true for failures that never received a response
    pub fn is_transport(&self) -> bool {
        matches!(self, RequestError::Reqwest(_))
    }
}
