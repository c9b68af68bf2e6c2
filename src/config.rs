use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::DEFAULT_TOTAL_DURATION_SECS;
use crate::util::clog;

pub const CONFIG_STORAGE_KEY: &str = "pc_config";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 500;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base: String,
    pub poll_interval_ms: u32,
    pub total_duration_secs: i64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            total_duration_secs: DEFAULT_TOTAL_DURATION_SECS,
        }
    }
}

impl ClientConfig {
    /// Reads overrides from localStorage, falling back to defaults.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        let Some(raw) = raw else {
            return Self::default();
        };
        let (cfg, warnings) = Self::from_json(&raw);
        for warning in &warnings {
            clog(&format!("stored config: {warning}"));
        }
        cfg
    }

    /// Parses a stored config. Each field that is missing or fails to decode
    /// keeps its default; the returned warnings name the rejected ones.
    pub fn from_json(raw: &str) -> (Self, Vec<String>) {
        let mut cfg = Self::default();
        let mut warnings = Vec::new();
        let fields = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => fields,
            Ok(other) => {
                warnings.push(format!("expected a JSON object, found {other}"));
                return (cfg, warnings);
            }
            Err(e) => {
                warnings.push(format!("not valid JSON: {e}"));
                return (cfg, warnings);
            }
        };
        if let Some(v) = take_field(&fields, "api_base", &mut warnings) {
            cfg.api_base = v;
        }
        if let Some(v) = take_field(&fields, "poll_interval_ms", &mut warnings) {
            cfg.poll_interval_ms = v;
        }
        if let Some(v) = take_field(&fields, "total_duration_secs", &mut warnings) {
            cfg.total_duration_secs = v;
        }
        (cfg.normalized(), warnings)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base.trim().trim_end_matches('/');
        self.api_base = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        if self.poll_interval_ms == 0 {
            self.poll_interval_ms = DEFAULT_POLL_INTERVAL_MS;
        }
        self
    }
}

fn take_field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let value = fields.get(key)?;
    match T::deserialize(value) {
        Ok(v) => Some(v),
        Err(e) => {
            warnings.push(format!("ignoring {key}: {e}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let (cfg, warnings) = ClientConfig::from_json(r#"{"api_base": "https://timer.example:9000/"}"#);
        assert!(warnings.is_empty());
        assert_eq!(cfg.api_base, "https://timer.example:9000");
        assert_eq!(cfg.poll_interval_ms, 500);
        assert_eq!(cfg.total_duration_secs, 28_800);
    }

    #[test]
    fn zero_interval_and_blank_base_are_replaced() {
        let (cfg, _) = ClientConfig::from_json(
            r#"{"api_base": "  ", "poll_interval_ms": 0, "total_duration_secs": 60}"#,
        );
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(cfg.total_duration_secs, 60);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ClientConfig::from_json("{}"), (ClientConfig::default(), Vec::new()));
    }

    #[test]
    fn bad_field_keeps_the_good_ones() {
        let (cfg, warnings) = ClientConfig::from_json(
            r#"{"api_base": "http://timer:9000", "poll_interval_ms": "fast", "total_duration_secs": 600}"#,
        );
        assert_eq!(cfg.api_base, "http://timer:9000");
        assert_eq!(cfg.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(cfg.total_duration_secs, 600);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("poll_interval_ms"));
    }

    #[test]
    fn unparseable_entry_is_all_defaults() {
        let (cfg, warnings) = ClientConfig::from_json("not json");
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(warnings.len(), 1);

        let (cfg, warnings) = ClientConfig::from_json("[1, 2]");
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(warnings.len(), 1);
    }
}
