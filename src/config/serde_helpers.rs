/// Loads and parses an environment variable into `target`.
/// Returns Ok(()) if the variable doesn't exist (keeps the current value).
pub fn load_env_var<T>(name: &str, target: &mut T) -> Result<(), super::ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(value) = std::env::var(name) {
        *target = value
            .trim()
            .parse()
            .map_err(|e| super::ConfigError::EnvError(format!("Invalid {name}: {e}")))?;
    }
    Ok(())
}

/// Loads a boolean flag, accepting the usual spellings (`1`/`0`, `yes`/`no`,
/// `on`/`off`, `true`/`false`).
pub fn load_env_bool(name: &str, target: &mut bool) -> Result<(), super::ConfigError> {
    if let Ok(value) = std::env::var(name) {
        *target = match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                return Err(super::ConfigError::EnvError(format!(
                    "Invalid {name}: '{value}' is not a boolean"
                )));
            }
        };
    }
    Ok(())
}

/// Loads a string environment variable.
pub fn load_env_string(name: &str, target: &mut String) {
    if let Ok(value) = std::env::var(name) {
        *target = value;
    }
}
