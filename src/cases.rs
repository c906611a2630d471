//! Demonstration cases for the harness.
//!
//! A case file is JSON: `{"cases": [{"input": <any>, "expect": "ok"}, ...]}`.
//! `input` may be any JSON type so type rejection can be exercised too.

use crate::error::{SubnetError, SubnetResult};
use crate::models::SubnetDetails;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::path::Path;

/// Built-in cases used when no case file is configured.
const BUILTIN_CASES: &str = include_str!("../cases/demo_cases.json");

/// Expected outcome of a case.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Expect {
    Ok,
    InvalidArgumentType,
    InvalidNetworkFormat,
}

impl Expect {
    /// Whether a calculation result is the expected outcome.
    pub fn matches(&self, result: &SubnetResult<SubnetDetails>) -> bool {
        matches!(
            (self, result),
            (Expect::Ok, Ok(_))
                | (
                    Expect::InvalidArgumentType,
                    Err(SubnetError::InvalidArgumentType { .. })
                )
                | (
                    Expect::InvalidNetworkFormat,
                    Err(SubnetError::InvalidNetworkFormat { .. })
                )
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Case {
    pub input: Value,
    /// No expectation means any outcome except an internal error passes.
    #[serde(default)]
    pub expect: Option<Expect>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CaseFile {
    pub cases: Vec<Case>,
}

/// Parse case file JSON, reporting the path of the first bad element.
pub fn parse_cases(json: &str) -> Result<CaseFile, Box<dyn Error>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let cases: CaseFile = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| format!("Error parsing cases: path={} error={}", e.path(), e))?;
    Ok(cases)
}

/// Read cases from `cases_file`, or the built-in list if `None`.
pub fn read_cases(cases_file: Option<&str>) -> Result<CaseFile, Box<dyn Error>> {
    match cases_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Case file does not exist: {file}").into());
            }
            log::info!("Reading cases from file: {file}");
            let json = std::fs::read_to_string(file)
                .map_err(|e| format!("Error reading case file {file}: {e}"))?;
            parse_cases(&json)
        }
        None => {
            log::info!("Using built-in demonstration cases");
            parse_cases(BUILTIN_CASES)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate_value;

    #[test]
    fn test_builtin_cases() {
        let file = read_cases(None).expect("Error reading built-in cases");
        assert_eq!(file.cases.len(), 16);
        assert_eq!(file.cases[0].input, Value::from("192.168.1.0/24"));
        assert_eq!(file.cases[0].expect, Some(Expect::Ok));
        assert!(file.cases[13].input.is_number());
    }

    #[test]
    fn test_builtin_cases_pass() {
        for case in read_cases(None).unwrap().cases {
            let expect = case.expect.expect("built-in cases carry expectations");
            let result = calculate_value(&case.input);
            assert!(
                expect.matches(&result),
                "{:?} expected {:?} got {:?}",
                case.input,
                expect,
                result
            );
        }
    }

    #[test]
    fn test_parse_cases_error_path() {
        let err = parse_cases(r#"{"cases": [{"input": "10.0.0.0/8", "expect": "maybe"}]}"#)
            .unwrap_err()
            .to_string();
        assert!(err.contains("path=cases[0].expect"), "{err}");
    }

    #[test]
    fn test_optional_fields() {
        let file = parse_cases(r#"{"cases": [{"input": "10.0.0.0/8"}]}"#).unwrap();
        assert_eq!(file.cases[0].expect, None);
        assert_eq!(file.cases[0].note, None);
    }

    #[test]
    fn test_env_example_case_file_exists() {
        let line = include_str!("../.env.example")
            .lines()
            .find(|l| l.trim_start_matches('#').starts_with("SUBNET_CALC_CASES="))
            .expect("SUBNET_CALC_CASES documented in .env.example");
        let (_, path) = line.split_once('=').unwrap();
        let file = read_cases(Some(path)).expect("documented case file should load");
        assert_eq!(file, read_cases(None).unwrap());
    }

    #[test]
    fn test_missing_case_file() {
        let err = read_cases(Some("no/such/cases.json")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Case file does not exist: no/such/cases.json"
        );
    }

    #[test]
    fn test_expect_matches() {
        let fmt: SubnetResult<SubnetDetails> = Err(SubnetError::InvalidNetworkFormat {
            input: String::new(),
            reason: "empty input".to_string(),
        });
        assert!(Expect::InvalidNetworkFormat.matches(&fmt));
        assert!(!Expect::Ok.matches(&fmt));
        assert!(!Expect::InvalidArgumentType.matches(&fmt));
    }
}
