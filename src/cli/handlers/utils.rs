use anyhow::{Context, Result};
use async_graphql::Variables;
use serde::Serialize;

use crate::config::GqlMockConfig;
use crate::context::Viewer;

/// Parse `--variables` JSON, defaulting to no variables
pub fn parse_variables(variables: Option<&str>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(v).context("Failed to parse --variables as JSON"),
        None => Ok(Variables::default()),
    }
}

/// Parse `--context` JSON, falling back to the configured default viewer
pub fn resolve_viewer(context: Option<&str>, config: &GqlMockConfig) -> Result<Viewer> {
    match context {
        Some(c) => Viewer::parse(c).context("Failed to parse --context"),
        None => Ok(Viewer {
            anonymous: config.execution.anonymous,
        }),
    }
}

/// Serialize to JSON, indented unless disabled in the config
pub fn to_json<T: Serialize>(value: &T, config: &GqlMockConfig) -> Result<String> {
    let text = if config.output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let vars = parse_variables(Some(r#"{"limit": 1}"#)).unwrap();
        assert_eq!(vars.get(&async_graphql::Name::new("limit")), Some(&async_graphql::Value::from(1)));
        assert!(parse_variables(None).unwrap().is_empty());
        assert!(parse_variables(Some("{limit")).is_err());
    }

    #[test]
    fn test_resolve_viewer_falls_back_to_config() {
        let mut config = GqlMockConfig::default();
        assert!(!resolve_viewer(None, &config).unwrap().anonymous);
        config.execution.anonymous = true;
        assert!(resolve_viewer(None, &config).unwrap().anonymous);
        assert!(!resolve_viewer(Some(r#"{"is_anonymous": false}"#), &config).unwrap().anonymous);
    }

    #[test]
    fn test_to_json_respects_pretty() {
        let mut config = GqlMockConfig::default();
        let value = serde_json::json!({ "a": 1 });
        assert!(to_json(&value, &config).unwrap().contains('\n'));
        config.output.pretty = false;
        assert_eq!(to_json(&value, &config).unwrap(), r#"{"a":1}"#);
    }
}
