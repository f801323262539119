use crate::core::loader::DEFAULT_ORDERS_FILE;
use crate::core::{ConfigProvider, OutputFormat, ReverseStrategy};
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub reverse: ReverseConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

fn default_source_path() -> String {
    DEFAULT_ORDERS_FILE.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseConfig {
    #[serde(default)]
    pub strategy: ReverseStrategy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| OrderError::ConfigError {
            message: format!("Cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ORDERS_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OrderError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("source.path", &self.source.path)?;
        validation::validate_optional_path("output.path", self.output.path.as_deref())?;
        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn strategy(&self) -> ReverseStrategy {
        self.reverse.strategy
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[pipeline]
name = "nightly-orders"
description = "Replay the day's orders newest first"

[source]
path = "data/1_9.csv"

[reverse]
strategy = "streamed"

[output]
format = "json"
path = "out/reversed.json"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.pipeline.name, "nightly-orders");
        assert_eq!(config.input_path(), "data/1_9.csv");
        assert_eq!(config.strategy(), ReverseStrategy::Streamed);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("out/reversed.json"));
        assert!(config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("[pipeline]\nname = \"orders\"\n").unwrap();

        assert_eq!(config.input_path(), DEFAULT_ORDERS_FILE);
        assert_eq!(config.strategy(), ReverseStrategy::Indexed);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.output_path(), None);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ORDER_REVERSE_TEST_DIR", "/srv/orders");

        let toml_content = r#"
[pipeline]
name = "env"

[source]
path = "${ORDER_REVERSE_TEST_DIR}/1_9.csv"

[output]
path = "${ORDER_REVERSE_UNSET_VAR}/out.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.path, "/srv/orders/1_9.csv");
        assert_eq!(
            config.output.path.as_deref(),
            Some("${ORDER_REVERSE_UNSET_VAR}/out.csv")
        );

        std::env::remove_var("ORDER_REVERSE_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[pipeline]
name = "  "

[source]
path = "1_9.csv"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[pipeline]
name = "orders"

[source]
path = ""
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_strategy_is_config_error() {
        let err = TomlConfig::from_toml_str(
            r#"
[pipeline]
name = "orders"

[reverse]
strategy = "sideways"
"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[pipeline]\nname = \"file-test\"\n\n[output]\nformat = \"csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "file-test");
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let err = TomlConfig::from_file("/no/such/order-reverse.toml").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
