//! Integration tests for configuration loading and the simulated backend.

use endpointctl::cli::RunContext;
use endpointctl::config::{Backend, ConfigLoader};
use endpointctl::provider::MemoryEndpoint;
use endpointctl::selection::Request;
use tempfile::TempDir;

use crate::integration::{with_config_env, write_simulated_config};

#[test]
fn test_global_config_sets_listing_format() {
    let test_dir = TempDir::new().unwrap();
    with_config_env(&test_dir, |config_dir| {
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            r#"
[listing]
format = "%d. %s"

[provider]
backend = "simulated"

[[provider.devices]]
id = "A"
name = "Speakers"
"#,
        )
        .unwrap();

        let context = RunContext::new(None).unwrap();
        assert_eq!(context.config().provider.backend, Backend::Simulated);
        let output = context.execute(&Request::List { template: None }).unwrap();
        assert_eq!(output, "1. Speakers\n");
    });
}

#[test]
fn test_environment_overrides_file() {
    let test_dir = TempDir::new().unwrap();
    with_config_env(&test_dir, |config_dir| {
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[listing]\nformat = \"from file %d\"\n",
        )
        .unwrap();
        std::env::set_var("ENDPOINTCTL_LISTING__FORMAT", "from env %d");

        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.listing.format.as_deref(), Some("from env %d"));
    });
}

#[test]
fn test_explicit_config_skips_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_config_env(&test_dir, |config_dir| {
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[listing]\nformat = \"global %d\"\n",
        )
        .unwrap();

        let explicit = write_simulated_config(
            &test_dir,
            vec![
                MemoryEndpoint::new("A", Some("Speakers")),
                MemoryEndpoint::new("B", Some("Headset")),
            ],
        );

        let context = RunContext::new(Some(explicit)).unwrap();
        assert_eq!(context.config().listing.format, None);
        assert_eq!(context.config().provider.devices.len(), 2);
    });
}

#[test]
fn test_invalid_global_config_is_reported() {
    let test_dir = TempDir::new().unwrap();
    with_config_env(&test_dir, |config_dir| {
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[listing]\nformat = \"\"\n").unwrap();

        let err = ConfigLoader::load().err().expect("empty format must be rejected");
        assert!(err.to_string().contains("format cannot be empty"));
        assert_eq!(err.exit_code(), 1);
    });
}
