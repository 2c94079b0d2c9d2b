use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub provider: ProviderConfig,
    /// Listing ids forming the comparison set.
    pub listings: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Listing pages live at `<base_url>/<id>`.
    pub base_url: String,
    /// Pause between page fetches.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_delay_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
provider:
  base_url: "https://www2.kv.ee/en"
  delay_ms: 500
listings:
  - "3435688"
  - "3473089"
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.provider.base_url, "https://www2.kv.ee/en");
        assert_eq!(config.provider.delay_ms, 500);
        assert_eq!(config.listings.len(), 2);
        assert_eq!(config.listings[0], "3435688");
    }

    #[test]
    fn test_delay_defaults_when_omitted() {
        let yaml = r#"
provider:
  base_url: "https://www2.kv.ee/en"
listings: []
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.provider.delay_ms, 300);
        assert!(config.listings.is_empty());
    }

    #[test]
    fn test_missing_provider_is_an_error() {
        let yaml = r#"
listings:
  - "3435688"
"#;
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
