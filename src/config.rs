//! Harness configuration, read from the environment and command line.

use std::error::Error;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}', use text or json")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Path to the log4rs YAML file.
    pub log_config: String,
    /// Case file used when no inputs are given on the command line.
    pub cases_file: Option<String>,
    pub output: OutputFormat,
    /// CIDR strings from the command line.
    pub inputs: Vec<String>,
}

impl HarnessConfig {
    /// Build from process environment (after `.env` is loaded) and arguments.
    pub fn from_env<I>(args: I) -> Result<HarnessConfig, Box<dyn Error>>
    where
        I: IntoIterator<Item = String>,
    {
        Self::from_vars(|key| std::env::var(key).ok(), args)
    }

    /// Build from an arbitrary variable lookup, `--json` on the command line
    /// wins over `SUBNET_CALC_OUTPUT`.
    pub fn from_vars<F, I>(var: F, args: I) -> Result<HarnessConfig, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut output = match var("SUBNET_CALC_OUTPUT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };

        let mut inputs = Vec::new();
        for arg in args {
            match arg.as_str() {
                "--json" => output = OutputFormat::Json,
                "--text" => output = OutputFormat::Text,
                _ => inputs.push(arg),
            }
        }

        Ok(HarnessConfig {
            log_config: var("SUBNET_CALC_LOG_CONFIG")
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string()),
            cases_file: var("SUBNET_CALC_CASES").filter(|v| !v.is_empty()),
            output,
            inputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let cfg = HarnessConfig::from_vars(|_| None, args(&[])).unwrap();
        assert_eq!(cfg.log_config, DEFAULT_LOG_CONFIG);
        assert_eq!(cfg.cases_file, None);
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(cfg.inputs.is_empty());
    }

    #[test]
    fn test_env_and_args() {
        let vars = HashMap::from([
            ("SUBNET_CALC_OUTPUT", "JSON"),
            ("SUBNET_CALC_CASES", "cases.json"),
            ("SUBNET_CALC_LOG_CONFIG", "/etc/subnet-calc/log4rs.yml"),
        ]);
        let cfg = HarnessConfig::from_vars(
            |k| vars.get(k).map(|v| v.to_string()),
            args(&["10.0.0.0/8", "--text", "192.168.0.0/16"]),
        )
        .unwrap();
        assert_eq!(cfg.output, OutputFormat::Text);
        assert_eq!(cfg.cases_file.as_deref(), Some("cases.json"));
        assert_eq!(cfg.log_config, "/etc/subnet-calc/log4rs.yml");
        assert_eq!(cfg.inputs, args(&["10.0.0.0/8", "192.168.0.0/16"]));
    }

    #[test]
    fn test_bad_output_format() {
        let err = HarnessConfig::from_vars(
            |k| (k == "SUBNET_CALC_OUTPUT").then(|| "yaml".to_string()),
            args(&[]),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown output format 'yaml', use text or json"
        );
    }
}
