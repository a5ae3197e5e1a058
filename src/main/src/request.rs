use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// Fields stay loosely typed so the evaluator can reject bad values itself.
// A field that is present but null is kept as Value::Null, not dropped.
#[derive(Debug, Default, Deserialize)]
pub struct PushRequest {
    #[serde(default, deserialize_with = "present")]
    pub force_push: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub tariff_change: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl PushRequest {
    pub fn parse(json: &str) -> Result<PushRequest> {
        let request = serde_json::from_str(json).context("Invalid push request")?;
        Ok(request)
    }

    pub fn read(path: Option<&Path>) -> Result<PushRequest> {
        let json = match path {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Unable to read {}", path.display()))?,
            None => {
                let mut json = String::new();
                io::stdin()
                    .read_to_string(&mut json)
                    .context("Unable to read push request from stdin")?;
                json
            }
        };
        PushRequest::parse(&json)
    }

    // --force wins over the request, the request wins over configuration
    pub fn force_push(&self, force: bool, default_force_push: bool) -> Value {
        if force {
            return Value::Bool(true);
        }
        self.force_push
            .clone()
            .unwrap_or(Value::Bool(default_force_push))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_request() {
        let request =
            PushRequest::parse(r#"{"force_push": false, "tariff_change": {"import": {"rate": 0.12}}}"#)
                .unwrap();
        assert_eq!(request.force_push, Some(json!(false)));
        assert_eq!(request.tariff_change, Some(json!({"import": {"rate": 0.12}})));
    }

    #[test]
    fn test_parse_keeps_explicit_null() {
        let request = PushRequest::parse(r#"{"force_push": null, "tariff_change": null}"#).unwrap();
        assert_eq!(request.force_push, Some(Value::Null));
        assert_eq!(request.tariff_change, Some(Value::Null));
    }

    #[test]
    fn test_parse_missing_fields() {
        let request = PushRequest::parse("{}").unwrap();
        assert_eq!(request.force_push, None);
        assert_eq!(request.tariff_change, None);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(PushRequest::parse("42").is_err());
        assert!(PushRequest::parse("not json").is_err());
    }

    #[test]
    fn test_force_push_precedence() {
        let request = PushRequest {
            force_push: Some(json!("yes")),
            tariff_change: None,
        };
        assert_eq!(request.force_push(true, false), json!(true));
        assert_eq!(request.force_push(false, true), json!("yes"));

        let request = PushRequest::default();
        assert_eq!(request.force_push(false, true), json!(true));
        assert_eq!(request.force_push(false, false), json!(false));
    }
}
