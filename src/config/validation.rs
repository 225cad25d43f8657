use super::{ConfigError, LoggerConfig, Output};
use crate::format::validate_timestamp_format;

impl LoggerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Checked even when timestamps are off
        validate_timestamp_format(&self.formatting.timestamp_format)?;

        if let Output::File(path) = &self.output {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "Output file path must not be empty".to_string(),
                ));
            }

            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                return Err(ConfigError::InvalidConfig(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        Ok(())
    }
}
