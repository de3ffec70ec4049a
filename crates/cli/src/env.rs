use crate::error::CliError;
use std::collections::HashMap;
use std::path::Path;

const ACCESS_TOKEN_VAR: &str = "CIRRUS_ACCESS_TOKEN";
const ACCESS_TOKEN_FALLBACK_VAR: &str = "GCP_ACCESS_TOKEN";

/// Load KEY=VALUE pairs from a .env style file
pub fn load_env_file<P: AsRef<Path>>(path: P) -> Result<HashMap<String, String>, CliError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::EnvFile(format!("failed to read {}: {}", path.display(), e))
    })?;
    parse_env_content(&content)
}

/// Resolve the bearer token used for all three services. File-loaded
/// variables take precedence over the process environment.
pub fn resolve_access_token(overrides: &HashMap<String, String>) -> Result<String, CliError> {
    for key in [ACCESS_TOKEN_VAR, ACCESS_TOKEN_FALLBACK_VAR] {
        if let Some(token) = overrides.get(key) {
            return Ok(token.clone());
        }
        if let Ok(token) = std::env::var(key) {
            return Ok(token);
        }
    }
    Err(CliError::MissingAccessToken)
}

fn parse_env_content(content: &str) -> Result<HashMap<String, String>, CliError> {
    let mut vars = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(CliError::EnvFile(format!(
                "malformed line {} (expected KEY=VALUE)",
                line_num + 1
            )));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::EnvFile(format!(
                "empty key at line {}",
                line_num + 1
            )));
        }

        vars.insert(key.to_string(), unquote(value.trim()));
    }

    Ok(vars)
}

fn unquote(value: &str) -> String {
    let stripped = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    stripped.unwrap_or(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_env() {
        let content = r#"
# Comment
KEY1=value1
KEY2=value2
        "#;

        let vars = parse_env_content(content).unwrap();
        assert_eq!(vars.get("KEY1").unwrap(), "value1");
        assert_eq!(vars.get("KEY2").unwrap(), "value2");
    }

    #[test]
    fn test_parse_quoted_values() {
        let content = r#"
QUOTED="value with spaces"
SINGLE='single quoted'
UNQUOTED=no_spaces
        "#;

        let vars = parse_env_content(content).unwrap();
        assert_eq!(vars.get("QUOTED").unwrap(), "value with spaces");
        assert_eq!(vars.get("SINGLE").unwrap(), "single quoted");
        assert_eq!(vars.get("UNQUOTED").unwrap(), "no_spaces");
    }

    #[test]
    fn test_invalid_env_format() {
        assert!(parse_env_content("INVALID LINE WITHOUT EQUALS").is_err());
    }

    #[test]
    fn test_token_from_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert(ACCESS_TOKEN_VAR.to_string(), "file-token".to_string());

        let token = resolve_access_token(&overrides).unwrap();
        assert_eq!(token, "file-token");
    }

    #[test]
    fn test_fallback_token_from_overrides() {
        let mut overrides = HashMap::new();
        overrides.insert(
            ACCESS_TOKEN_FALLBACK_VAR.to_string(),
            "fallback-token".to_string(),
        );

        let token = resolve_access_token(&overrides).unwrap();
        assert_eq!(token, "fallback-token");
    }
}
