use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// value the upstream api returns in place of a webhook secret
pub const REDACTED_SECRET: &str = "********";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "crate::serde::lenient_string::deserialize")]
    pub content_type: String,

    #[serde(default, deserialize_with = "crate::serde::lenient_string::deserialize")]
    pub insecure_ssl: String,

    #[serde(default, deserialize_with = "crate::serde::lenient_string::deserialize")]
    pub secret: String,

    #[serde(default, deserialize_with = "crate::serde::lenient_string::deserialize")]
    pub url: String,
}

impl Config {
    pub fn has_redacted_secret(&self) -> bool {
        self.secret == REDACTED_SECRET
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    #[serde(rename = "type")]
    pub hook_type: String,
    pub id: u64,
    pub name: String,
    pub active: bool,
    pub events: Vec<String>,
    pub config: Config,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedWebhook {
    pub name: String,
    pub active: bool,
    pub events: Vec<String>,
    pub config: Config,
}

impl From<Webhook> for CreatedWebhook {
    fn from(hook: Webhook) -> Self {
        normalize(hook)
    }
}

pub fn normalize(hook: Webhook) -> CreatedWebhook {
    CreatedWebhook {
        name: hook.name,
        active: hook.active,
        events: hook.events,
        config: hook.config,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SINGLE_HOOK: &str = r#"{
        "type": "Organization",
        "id": 12345678,
        "name": "web",
        "active": true,
        "events": ["push", "pull_request"],
        "config": {
            "content_type": "json",
            "insecure_ssl": "0",
            "secret": "********",
            "url": "https://example.com/webhook"
        },
        "updated_at": "2023-01-02T10:00:00Z",
        "created_at": "2023-01-01T10:00:00Z",
        "url": "https://api.github.com/orgs/octo-org/hooks/12345678",
        "ping_url": "https://api.github.com/orgs/octo-org/hooks/12345678/pings"
    }"#;

    #[test]
    fn decode_api_hook() {
        let hook: Webhook = serde_json::from_str(SINGLE_HOOK).unwrap();

        assert_eq!(hook.hook_type, "Organization");
        assert_eq!(hook.id, 12345678);
        assert_eq!(hook.events, vec!["push", "pull_request"]);
        assert_eq!(hook.config.insecure_ssl, "0");
        assert!(hook.config.has_redacted_secret());
    }

    #[test]
    fn decode_numeric_insecure_ssl() {
        let json = SINGLE_HOOK.replace(r#""insecure_ssl": "0""#, r#""insecure_ssl": 1"#);
        let hook: Webhook = serde_json::from_str(&json).unwrap();

        assert_eq!(hook.config.insecure_ssl, "1");
    }

    #[test]
    fn normalize_copies_fields() {
        let hook: Webhook = serde_json::from_str(SINGLE_HOOK).unwrap();
        let expected_config = hook.config.clone();
        let created = normalize(hook);

        assert_eq!(created.name, "web");
        assert!(created.active);
        assert_eq!(created.events, vec!["push", "pull_request"]);
        assert_eq!(created.config, expected_config);
    }

    #[test]
    fn normalized_body_has_no_server_fields() {
        let hook: Webhook = serde_json::from_str(SINGLE_HOOK).unwrap();
        let value = serde_json::to_value(CreatedWebhook::from(hook)).unwrap();
        let object = value.as_object().unwrap();

        for key in ["id", "type", "created_at", "updated_at"] {
            assert!(!object.contains_key(key), "body contains {:?}", key);
        }

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort();

        assert_eq!(keys, vec!["active", "config", "events", "name"]);
    }
}
