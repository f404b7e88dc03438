// ABOUTME: Integration tests for configuration parsing and validation.
// ABOUTME: Tests YAML parsing, defaults, discovery and invalid values.

use dockery::config::*;
use dockery::error::Error;
use dockery::runtime::RuntimeType;
use std::fs;
use std::time::Duration;

mod parsing {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.remove, RemoveMode::Kill);
        assert_eq!(config.events.buffer, 16);
        assert!(config.events.reconnect);
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
runtime: podman
socket: /run/user/1000/podman/podman.sock
timeout: 30s
remove: remove
events:
  buffer: 4
  reconnect: false
  initial_backoff: 250ms
  max_backoff: 1m
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.runtime, Some(RuntimeType::Podman));
        assert_eq!(
            config.socket.as_deref(),
            Some("/run/user/1000/podman/podman.sock")
        );
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.remove, RemoveMode::Remove);
        assert_eq!(config.events.buffer, 4);
        assert!(!config.events.reconnect);
        assert_eq!(config.events.initial_backoff, Duration::from_millis(250));
        assert_eq!(config.events.max_backoff, Duration::from_secs(60));

        let runtime = config.runtime_config();
        assert_eq!(runtime.runtime, Some(RuntimeType::Podman));
        assert_eq!(runtime.socket, config.socket);
    }

    #[test]
    fn partial_events_section_keeps_other_defaults() {
        let config = Config::from_yaml("events:\n  buffer: 2\n").unwrap();
        assert_eq!(config.events.buffer, 2);
        assert_eq!(config.events.initial_backoff, Duration::from_secs(1));
        assert_eq!(config.events.max_backoff, Duration::from_secs(30));
    }

    #[test]
    fn unknown_remove_mode_is_rejected() {
        let err = Config::from_yaml("remove: delete\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }
}

mod validation {
    use super::*;

    #[test]
    fn zero_buffer_is_invalid() {
        let err = Config::from_yaml("events:\n  buffer: 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg.contains("buffer")));
    }

    #[test]
    fn initial_backoff_above_max_is_invalid() {
        let yaml = "events:\n  initial_backoff: 1m\n  max_backoff: 10s\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg.contains("initial_backoff")));
    }

    #[test]
    fn zero_timeout_is_invalid() {
        let err = Config::from_yaml("timeout: 0s\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn sub_second_timeout_is_invalid() {
        let err = Config::from_yaml("timeout: 500ms\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg.contains("timeout")));
    }

    #[test]
    fn one_second_timeout_is_accepted() {
        let config = Config::from_yaml("timeout: 1s\n").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}

mod discovery {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn finds_primary_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "timeout: 5s\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn primary_file_wins_over_alternatives() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "timeout: 5s\n").unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_ALT), "timeout: 9s\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn finds_config_in_dot_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".dockery")).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME_DIR), "remove: remove\n").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.remove, RemoveMode::Remove);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yml");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(p) if p == path));
    }
}
