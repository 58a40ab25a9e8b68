pub mod serde;
pub mod hooks;
pub mod table;

pub use hooks::{Webhook, Config, CreatedWebhook, REDACTED_SECRET};
