use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use cct::Method;

use crate::error::AppResult;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CctConfig {
    pub method: Method,
    pub precision: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub output: Utf8PathBuf,
    pub format: TableFormat,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub cct: CctConfig,
    pub table: TableConfig,
}

fn builder() -> AppResult<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("cct.method", Method::default().name())?
        .set_default("cct.precision", 4)?
        .set_default("table.output", "isotherms.json")?
        .set_default("table.format", "json")?)
}

fn environment() -> Environment {
    Environment::with_prefix("CCTOOL")
        .separator("__")
        .try_parsing(true)
}

/// Load configuration from `filename` (if it exists), overridden by
/// `CCTOOL__*` environment variables
pub fn parse(filename: &Utf8Path) -> AppResult<AppConfig> {
    let settings = builder()?
        .add_source(File::new(filename.as_str(), FileFormat::Yaml).required(false))
        .add_source(environment())
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load configuration from yaml text, without consulting the environment
pub fn parse_str(yaml: &str) -> AppResult<AppConfig> {
    let settings = builder()?
        .add_source(File::from_str(yaml, FileFormat::Yaml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use cct::Method;

    use crate::config::{TableFormat, parse_str};

    #[test]
    fn defaults() {
        let config = parse_str("").unwrap();
        assert_eq!(config.cct.method, Method::Default);
        assert_eq!(config.cct.precision, 4);
        assert_eq!(config.table.output, "isotherms.json");
        assert_eq!(config.table.format, TableFormat::Json);
    }

    #[test]
    fn overrides() {
        let config = parse_str(
            "
cct:
  method: robertson-improved
  precision: 6
table:
  format: yaml
",
        )
        .unwrap();
        assert_eq!(config.cct.method, Method::RobertsonImproved);
        assert_eq!(config.cct.precision, 6);
        assert_eq!(config.table.output, "isotherms.json");
        assert_eq!(config.table.format, TableFormat::Yaml);
    }

    #[test]
    fn unknown_method() {
        assert!(parse_str("cct:\n  method: mccamy\n").is_err());
    }
}
