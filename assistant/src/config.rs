use anyhow::Result;
use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/ask";
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_TOP_K: u32 = 3;

const ENDPOINT_VAR: &str = "LEGAL_ASSISTANT_ENDPOINT";
const TEMPERATURE_VAR: &str = "LEGAL_ASSISTANT_TEMPERATURE";
const TOP_K_VAR: &str = "LEGAL_ASSISTANT_TOP_K";

/// Where questions are sent and the fixed parameters that go with them.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub endpoint: String,
    pub temperature: f32,
    pub top_k: u32,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AssistantConfig {
    /// Defaults overridden by `LEGAL_ASSISTANT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }

        if let Some(raw) = lookup(TEMPERATURE_VAR) {
            config.temperature = raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("{} must be a number, got {:?}", TEMPERATURE_VAR, raw)
            })?;
        }

        if let Some(raw) = lookup(TOP_K_VAR) {
            config.top_k = raw.trim().parse().map_err(|_| {
                anyhow::anyhow!("{} must be a non-negative integer, got {:?}", TOP_K_VAR, raw)
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_fixed_parameters() {
        let config = AssistantConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8000/ask");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AssistantConfig::from_lookup(lookup_from(&[
            ("LEGAL_ASSISTANT_ENDPOINT", "http://backend:9000/ask"),
            ("LEGAL_ASSISTANT_TEMPERATURE", "0.7"),
            ("LEGAL_ASSISTANT_TOP_K", " 5 "),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://backend:9000/ask");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.top_k, 5);
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let err = AssistantConfig::from_lookup(lookup_from(&[("LEGAL_ASSISTANT_TOP_K", "-1")]))
            .unwrap_err();
        assert!(err.to_string().contains("LEGAL_ASSISTANT_TOP_K"));

        let err = AssistantConfig::from_lookup(lookup_from(&[(
            "LEGAL_ASSISTANT_TEMPERATURE",
            "warm",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("LEGAL_ASSISTANT_TEMPERATURE"));
    }
}
