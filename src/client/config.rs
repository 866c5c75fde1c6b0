/// Model used when none is given.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Sampling temperature used when `0.0` is given.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Public OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Credentials and generation defaults for a [`ChatClient`](crate::ChatClient).
///
/// Defaults are applied once in [`ClientConfig::new`]. A temperature of exactly
/// `0.0` is treated as unset and replaced with [`DEFAULT_TEMPERATURE`], so a
/// client-wide temperature of zero cannot be configured here; pass
/// `Some(0.0)` as the per-call override instead.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    api_key: String,
    model: String,
    temperature: f64,
    base_url: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, temperature: f64) -> Self {
        let mut model = model.into();
        if model.is_empty() {
            model = DEFAULT_MODEL.to_string();
        }
        let temperature = if temperature == 0.0 {
            DEFAULT_TEMPERATURE
        } else {
            temperature
        };

        Self {
            api_key: api_key.into(),
            model,
            temperature,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at an OpenAI-compatible API root (e.g. a gateway or a
    /// local mock). An empty value keeps the default.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        if !base_url.is_empty() {
            self.base_url = base_url;
        }
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_model_and_zero_temperature_use_defaults() {
        let cfg = ClientConfig::new("sk-test", "", 0.0);
        assert_eq!(cfg.model(), DEFAULT_MODEL);
        assert_eq!(cfg.temperature(), DEFAULT_TEMPERATURE);
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let cfg = ClientConfig::new("sk-test", "gpt-4o", 1.3);
        assert_eq!(cfg.model(), "gpt-4o");
        assert_eq!(cfg.temperature(), 1.3);
        assert_eq!(cfg.api_key(), "sk-test");
    }

    #[test]
    fn test_empty_base_url_keeps_default() {
        let cfg = ClientConfig::new("k", "", 0.0).with_base_url("");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);

        let cfg = cfg.with_base_url("http://127.0.0.1:4010/v1");
        assert_eq!(cfg.base_url(), "http://127.0.0.1:4010/v1");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let cfg = ClientConfig::new("sk-secret-value", "", 0.0);
        let dbg = format!("{:?}", cfg);
        assert!(!dbg.contains("sk-secret-value"));
        assert!(dbg.contains("gpt-4o-mini"));
    }
}
