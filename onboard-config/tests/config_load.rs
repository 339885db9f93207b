use onboard_config::OnboardConfigLoader;
use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn loads_file_with_env_placeholders() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
brand_api:
  base_url: "https://api.brandfetch.io/v2/brands"
  api_key: "${BRANDFETCH_API_KEY}"
"#;
    let p = write_yaml(&tmp, "onboard.yaml", file_yaml);

    temp_env::with_var("BRANDFETCH_API_KEY", Some("key-from-env"), || {
        let config = OnboardConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config");

        assert_eq!(
            config.brand_api.base_url,
            "https://api.brandfetch.io/v2/brands"
        );
        assert_eq!(config.brand_api.api_key, "key-from-env");
    });
}

#[test]
#[serial]
fn env_overrides_file_values() {
    let tmp = TempDir::new().unwrap();

    let file_yaml = r#"
brand_api:
  base_url: "https://file.example.com"
  api_key: "file-key"
"#;
    let p = write_yaml(&tmp, "onboard.yaml", file_yaml);

    temp_env::with_var(
        "ONBOARD_BRAND_API__API_KEY",
        Some("env-key"),
        || {
            let config = OnboardConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config");

            assert_eq!(config.brand_api.base_url, "https://file.example.com");
            assert_eq!(config.brand_api.api_key, "env-key");
        },
    );
}

#[test]
#[serial]
fn missing_file_and_env_yield_empty_defaults() {
    temp_env::with_vars_unset(
        ["ONBOARD_BRAND_API__BASE_URL", "ONBOARD_BRAND_API__API_KEY"],
        || {
            let config = OnboardConfigLoader::new()
                .with_file("/nonexistent/onboard.yaml")
                .load()
                .expect("load config");

            assert_eq!(config.brand_api.base_url, "");
            assert_eq!(config.brand_api.api_key, "");
        },
    );
}
