use std::time::Duration;

use crate::error::Error;

/// Backend connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct MotionConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout: Option<Duration>,
}

impl MotionConfig {
    /// Load configuration from environment variables
    ///
    /// `MOTION_BASE_URL` is required. `MOTION_ACCESS_TOKEN` and
    /// `MOTION_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let base_url = lookup("MOTION_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| Error::Config("MOTION_BASE_URL environment variable not set".into()))?;

        let timeout = match lookup("MOTION_TIMEOUT_SECS") {
            Some(secs) => Some(parse_timeout(&secs)?),
            None => None,
        };

        Ok(Self {
            base_url,
            access_token: lookup("MOTION_ACCESS_TOKEN").filter(|token| !token.is_empty()),
            timeout,
        })
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        access_token: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(token) = access_token {
            self.access_token = Some(token);
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }
}

fn parse_timeout(secs: &str) -> Result<Duration, Error> {
    secs.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| {
            Error::Config(format!(
                "MOTION_TIMEOUT_SECS must be a whole number of seconds, got '{secs}'"
            ))
        })
}

impl std::fmt::Debug for MotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_requires_base_url() {
        let err = MotionConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("MOTION_BASE_URL"));
    }

    #[test]
    fn test_from_lookup_reads_optional_values() {
        let config = MotionConfig::from_lookup(lookup(&[
            ("MOTION_BASE_URL", "https://admin.example.com"),
            ("MOTION_ACCESS_TOKEN", "abc"),
            ("MOTION_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://admin.example.com");
        assert_eq!(config.access_token.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_bad_timeout_is_rejected() {
        let err = MotionConfig::from_lookup(lookup(&[
            ("MOTION_BASE_URL", "https://admin.example.com"),
            ("MOTION_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_overrides_win() {
        let config = MotionConfig::from_lookup(lookup(&[("MOTION_BASE_URL", "https://a")]))
            .unwrap()
            .with_overrides(Some("https://b".into()), Some("t".into()), Some(5));

        assert_eq!(config.base_url, "https://b");
        assert_eq!(config.access_token.as_deref(), Some("t"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = MotionConfig {
            base_url: "https://a".into(),
            access_token: Some("secret-token".into()),
            timeout: None,
        };
        assert!(!format!("{config:?}").contains("secret-token"));
    }
}
