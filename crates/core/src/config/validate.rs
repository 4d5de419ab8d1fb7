use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Target format is a non-empty extension token
/// - Passthrough extensions are non-empty and written without a leading dot
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.mirror.target_format.is_empty() {
        return Err(ConfigError::ValidationError(
            "mirror.target_format cannot be empty".to_string(),
        ));
    }

    for ext in &config.mirror.passthrough_extensions {
        if ext.is_empty() {
            return Err(ConfigError::ValidationError(
                "mirror.passthrough_extensions entries cannot be empty".to_string(),
            ));
        }
        if ext.starts_with('.') {
            return Err(ConfigError::ValidationError(format!(
                "mirror.passthrough_extensions entries must not start with a dot: {ext}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_empty_format_fails() {
        let mut config = Config::default();
        config.mirror.target_format = String::new();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_validate_dotted_passthrough_fails() {
        let mut config = Config::default();
        config.mirror.passthrough_extensions = vec![".seg".to_string()];
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains(".seg"));
    }

    #[test]
    fn test_validate_empty_passthrough_entry_fails() {
        let mut config = Config::default();
        config.mirror.passthrough_extensions = vec![String::new()];
        assert!(validate_config(&config).is_err());
    }
}
