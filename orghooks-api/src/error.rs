/// a response from the api that was outside of the 2xx range
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("api responded with status {status}: {body}")]
pub struct ApiError {
    status: u16,
    body: String,
}

impl ApiError {
    pub fn new<B>(status: u16, body: B) -> Self
    where
        B: Into<String>
    {
        ApiError {
            status,
            body: body.into()
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// the `message` field github puts in its json error bodies
    pub fn message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;

        value.get("message")?
            .as_str()
            .map(|v| v.to_owned())
    }
}
