use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError, ResponseContract};

/// Terminal client for verifying whether a linked image or post is real.
#[derive(Debug, Clone, Parser)]
#[command(name = "buster", version, about)]
pub struct Args {
    /// Config file to load instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Analysis endpoint URL, overriding the config file.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Response contract spoken by the endpoint.
    #[arg(long, value_enum)]
    pub contract: Option<ResponseContract>,

    /// Analyze a single link, print the verdict and exit.
    #[arg(long, value_name = "URL")]
    pub check: Option<String>,
}

impl Args {
    /// Load the config file named by `--config` (or the default one) and
    /// apply command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(config)
    }

    pub fn apply_overrides(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(endpoint) = &self.endpoint {
            config.analysis.endpoint = endpoint.clone();
        }
        if let Some(contract) = self.contract {
            config.analysis.contract = contract;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = Args::try_parse_from([
            "buster",
            "--endpoint",
            "http://127.0.0.1:9000/analyze",
            "--contract",
            "fact-check",
            "--check",
            "https://x.com/post/1",
        ])
        .unwrap();

        assert_eq!(args.contract, Some(ResponseContract::FactCheck));
        assert_eq!(args.check.as_deref(), Some("https://x.com/post/1"));

        let config = args.apply_overrides(Config::default()).unwrap();
        assert_eq!(config.analysis.endpoint, "http://127.0.0.1:9000/analyze");
        assert_eq!(config.analysis.contract, ResponseContract::FactCheck);
    }

    #[test]
    fn rejects_bad_endpoint_override() {
        let args = Args::try_parse_from(["buster", "--endpoint", "not a url"]).unwrap();
        assert!(args.apply_overrides(Config::default()).is_err());
    }

    #[test]
    fn rejects_unknown_contract() {
        assert!(Args::try_parse_from(["buster", "--contract", "both"]).is_err());
    }

    #[test]
    fn no_flags_keeps_defaults() {
        let args = Args::try_parse_from(["buster"]).unwrap();
        let config = args.apply_overrides(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }
}
