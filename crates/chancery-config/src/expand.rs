//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a configuration value.
///
/// A bare `${VAR}` errors when the variable is unset; `${VAR:-default}` falls
/// back to `default` instead. Values without references pass through
/// unchanged.
///
/// # Arguments
///
/// * `value` - Raw string from the config file
/// * `field` - Config field path for error messages (e.g., `"server.host"`)
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let context = |name: &str| -> Result<Option<String>, String> {
        let (var, default) = match name.split_once(":-") {
            Some((var, default)) => (var, Some(default)),
            None => (name, None),
        };
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => match default {
                Some(default) => Ok(Some(default.to_owned())),
                None => Err(format!("${{{var}}} not set")),
            },
        }
    };

    match shellexpand::env_with_context(value, context) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(e) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.cause,
        }),
    }
}
