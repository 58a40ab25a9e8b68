use orghooks_api::client::error::RequestError;

use crate::transfer::ConfigError;

type BoxDynError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub struct Error {
    msg: String,
    src: Option<BoxDynError>,
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    pub fn msg<M>(msg: M) -> Error
    where
        M: Into<String>
    {
        Error {
            msg: msg.into(),
            src: None,
        }
    }

    pub fn with_source<S>(mut self, src: S) -> Error
    where
        S: Into<BoxDynError>
    {
        self.src = Some(src.into());
        self
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.src {
            Some(src) => write!(f, "{}: {}", self.msg, src),
            None => f.write_str(&self.msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.src.as_ref().map(|v| & **v as _)
    }
}

pub trait Context<T> {
    fn context<C>(self, cxt: C) -> Result<T>
    where
        C: Into<String>;
}

impl<T, E> Context<T> for std::result::Result<T, E>
where
    E: Into<BoxDynError>
{
    fn context<C>(self, cxt: C) -> Result<T>
    where
        C: Into<String>
    {
        self.map_err(|err| Error::msg(cxt).with_source(err))
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::msg("invalid options").with_source(err)
    }
}

/// short description of a failed request, github puts a readable `message`
/// in its json error bodies
pub fn request_summary(err: &RequestError) -> String {
    match err {
        RequestError::Api(api) => match api.message() {
            Some(msg) => format!("github responded with {} {}", api.status(), msg),
            None => format!("github responded with {}", api.status()),
        },
        err if err.is_transport() => String::from("no response from the api"),
        _ => String::from("request was not sent"),
    }
}

/// [`Context`] for requests, the summary is added to the message
pub fn request_context<T, C>(result: std::result::Result<T, RequestError>, cxt: C) -> Result<T>
where
    C: std::fmt::Display
{
    result.map_err(|err| Error::msg(format!("{}, {}", cxt, request_summary(&err)))
        .with_source(err))
}

#[cfg(test)]
mod test {
    use orghooks_api::ApiError;

    use super::*;

    #[test]
    fn display_message_and_source() {
        let err = Error::msg("failed to create webhooks")
            .with_source(ApiError::new(422, "Validation Failed"));

        assert_eq!(
            err.to_string(),
            "failed to create webhooks: api responded with status 422: Validation Failed"
        );

        assert_eq!(Error::msg("nothing to do").to_string(), "nothing to do");
    }

    #[test]
    fn result_context() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::MissingSourceToken);
        let err = result.context("invalid options").unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid options: --source-token is required when using --source-organization"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_error_conversion() {
        let err = Error::from(ConfigError::MissingSource);

        assert_eq!(
            err.to_string(),
            "invalid options: one of --from-file or --source-organization is required"
        );
    }

    #[test]
    fn request_summaries() {
        let cases = [
            (
                RequestError::from(ApiError::new(404, r#"{"message":"Not Found"}"#)),
                "github responded with 404 Not Found"
            ),
            (
                RequestError::from(ApiError::new(502, "<html>bad gateway</html>")),
                "github responded with 502"
            ),
            (
                RequestError::InvalidOrganization("a/../b".into()),
                "request was not sent"
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(request_summary(&err), expected, "failed summary of {:?}", err);
        }
    }

    #[test]
    fn request_context_keeps_body() {
        let result: std::result::Result<(), RequestError> = Err(
            ApiError::new(422, r#"{"message":"Validation Failed"}"#).into()
        );
        let err = request_context(result, "failed to retrieve organization webhooks").unwrap_err();

        assert_eq!(
            err.to_string(),
            r#"failed to retrieve organization webhooks, github responded with 422 Validation Failed: api responded with status 422: {"message":"Validation Failed"}"#
        );
    }
}
