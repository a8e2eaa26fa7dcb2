// ============================================================================
// ENV FILE - `.env` parsing shared by build.rs and the config tests
// ============================================================================

/// Every key `AppConfig::from_env` reads through `option_env!`
pub const CONFIG_KEYS: [&str; 7] = [
    "API_BASE_URL",
    "RESTAURANTS_ENDPOINT",
    "LOGIN_LANDING_PATH",
    "MENU_PATH_TEMPLATE",
    "CSRF_COOKIE_NAME",
    "ERROR_DISPLAY_MS",
    "ENABLE_LOGGING",
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvFile {
    /// Known keys, in file order
    pub entries: Vec<(String, String)>,
    /// Keys that no config field reads
    pub unknown: Vec<String>,
}

/// Parse `KEY=VALUE` lines; blank lines and `#` comments are skipped
pub fn parse_env_file(contents: &str) -> EnvFile {
    let mut parsed = EnvFile::default();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            parsed.unknown.push(line.to_string());
            continue;
        };

        let key = key.trim();
        if CONFIG_KEYS.contains(&key) {
            parsed.entries.push((key.to_string(), value.trim().to_string()));
        } else {
            parsed.unknown.push(key.to_string());
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_are_kept_in_order() {
        let parsed = parse_env_file(
            "# comment\n\nERROR_DISPLAY_MS = 1234\nAPI_BASE_URL=http://api.test\n",
        );
        assert_eq!(
            parsed.entries,
            vec![
                ("ERROR_DISPLAY_MS".to_string(), "1234".to_string()),
                ("API_BASE_URL".to_string(), "http://api.test".to_string()),
            ]
        );
        assert!(parsed.unknown.is_empty());
    }

    #[test]
    fn unknown_keys_and_malformed_lines_are_reported() {
        let parsed = parse_env_file("MAPBOX_TOKEN=x\nnot a pair\nENABLE_LOGGING=false");
        assert_eq!(parsed.unknown, vec!["MAPBOX_TOKEN", "not a pair"]);
        assert_eq!(
            parsed.entries,
            vec![("ENABLE_LOGGING".to_string(), "false".to_string())]
        );
    }

    #[test]
    fn empty_value_is_forwarded() {
        let parsed = parse_env_file("API_BASE_URL=");
        assert_eq!(parsed.entries, vec![("API_BASE_URL".to_string(), String::new())]);
    }

    #[test]
    fn example_file_only_uses_known_keys() {
        let parsed = parse_env_file(include_str!("../.env.example"));
        assert!(parsed.unknown.is_empty(), "unknown: {:?}", parsed.unknown);
        assert_eq!(parsed.entries.len(), CONFIG_KEYS.len());
    }
}
