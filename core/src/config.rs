use search::EngineConfig;

/// Builds the engine configuration from `NAME=VALUE` pairs.
pub fn build_config(options: &[String]) -> Result<EngineConfig, String> {
    let mut config = EngineConfig::default();

    for option in options {
        let (name, value) = option
            .split_once('=')
            .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", option))?;
        config.update(name.trim(), value)?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_are_applied_in_order() {
        let options = vec![
            "aspiration_window=40".to_string(),
            "hash_size = 16".to_string(),
            "aspiration_window=60".to_string(),
        ];
        let config = build_config(&options).unwrap();
        assert_eq!(config.aspiration_window.value, 60);
        assert_eq!(config.hash_size.value, 16);
    }

    #[test]
    fn test_malformed_option() {
        assert!(build_config(&["hash_size".to_string()]).is_err());
        assert!(build_config(&["hash_size=big".to_string()]).is_err());
    }
}
