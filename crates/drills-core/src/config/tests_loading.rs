//! Loading-focused tests for configuration
//!
//! Tests for configuration file loading, parsing, path resolution, and the
//! `DRILLS_CONFIG` override.

#[cfg(test)]
mod loading_tests {
    use std::io::Write;

    use serial_test::serial;

    use crate::config::{
        global_config_path, load_config_at, load_toml_file, project_config_path, Config,
        ConfigPaths, CONFIG_ENV_VAR,
    };
    use crate::{Error, Result};

    fn write_config(dir: &tempfile::TempDir, name: &str, body: &str) -> Result<std::path::PathBuf> {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path)
            .map_err(|e| Error::io_error(format!("Failed to create test file: {e}")))?;
        file.write_all(body.as_bytes())
            .map_err(|e| Error::io_error(format!("Failed to write test file: {e}")))?;
        Ok(path)
    }

    fn temp_dir() -> Result<tempfile::TempDir> {
        tempfile::tempdir().map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))
    }

    /// Global and project layers inside `dir`, neither written yet
    fn isolated_paths(dir: &tempfile::TempDir) -> ConfigPaths {
        ConfigPaths {
            global: Some(dir.path().join("global.toml")),
            project: dir.path().join(".drills/config.toml"),
        }
    }

    #[test]
    #[serial]
    fn test_no_config_files_returns_valid_config() -> Result<()> {
        std::env::remove_var(CONFIG_ENV_VAR);
        let dir = temp_dir()?;
        let result = load_config_at(&isolated_paths(&dir), None);
        assert!(
            result.is_ok(),
            "load_config_at should succeed even without config files"
        );
        let config = result.unwrap_or_else(|_| Config::default());
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_malformed_global_config_is_a_parse_error() -> Result<()> {
        std::env::remove_var(CONFIG_ENV_VAR);
        let dir = temp_dir()?;
        write_config(&dir, "global.toml", "coupons = [not toml")?;

        let result = load_config_at(&isolated_paths(&dir), None);
        assert!(matches!(result, Err(Error::Parse(_))));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_project_layer_overrides_global_layer() -> Result<()> {
        std::env::remove_var(CONFIG_ENV_VAR);
        let dir = temp_dir()?;
        let paths = isolated_paths(&dir);
        write_config(&dir, "global.toml", "[driving_ages]\nDE = 18\nUS = 18\n")?;
        std::fs::create_dir_all(dir.path().join(".drills"))
            .map_err(|e| Error::io_error(format!("Failed to create project dir: {e}")))?;
        write_config(&dir, ".drills/config.toml", "[driving_ages]\nUS = 15\n")?;

        let rules = load_config_at(&paths, None)?.driving_rules()?;
        assert_eq!(rules.minimum_age("DE"), Some(18));
        assert_eq!(rules.minimum_age("US"), Some(15));
        assert_eq!(rules.minimum_age("UK"), Some(17));
        Ok(())
    }

    #[test]
    fn test_load_toml_file_parses_catalog_and_ages() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(
            &dir,
            "config.toml",
            r#"
[[coupons]]
code = "WINTER"
discount = 0.35

[driving_ages]
NZ = 16
"#,
        )?;

        let config = load_toml_file(&path)?;
        assert_eq!(config.coupons.len(), 1);
        assert_eq!(config.coupons[0].code, "WINTER");
        assert_eq!(config.driving_ages.get("NZ"), Some(&16));
        assert!(config.driving_ages.get("US").is_none());
        Ok(())
    }

    #[test]
    fn test_partial_file_leaves_other_fields_empty() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "config.toml", "[driving_ages]\nUK = 18\n")?;

        let config = load_toml_file(&path)?;
        assert!(config.coupons.is_empty());

        let merged = Config::default().merge(config);
        assert_eq!(merged.coupons, Config::default().coupons);
        assert_eq!(merged.driving_ages.get("UK"), Some(&18));
        Ok(())
    }

    #[test]
    fn test_malformed_toml_returns_parse_error() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "bad_config.toml", "coupons = \n invalid toml [[[")?;

        let result = load_toml_file(&path);
        assert!(matches!(result, Err(Error::Parse(_))));
        Ok(())
    }

    #[test]
    fn test_directory_path_is_rejected() -> Result<()> {
        let dir = temp_dir()?;
        let result = load_toml_file(dir.path());
        assert!(matches!(result, Err(Error::Io(_))));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_toml_file(std::path::Path::new("/nonexistent/drills/config.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    #[serial]
    fn test_load_config_from_layers_explicit_file() -> Result<()> {
        std::env::remove_var(CONFIG_ENV_VAR);
        let dir = temp_dir()?;
        let path = write_config(
            &dir,
            "explicit.toml",
            "[[coupons]]\ncode = \"HALF\"\ndiscount = 0.5\n",
        )?;

        let config = load_config_at(&isolated_paths(&dir), Some(&path))?;
        assert_eq!(config.pricing()?.calculate_discount(10.0, "HALF")?, 5.0);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_load_config_from_rejects_invalid_catalog() -> Result<()> {
        std::env::remove_var(CONFIG_ENV_VAR);
        let dir = temp_dir()?;
        let path = write_config(
            &dir,
            "invalid.toml",
            "[[coupons]]\ncode = \"FREE\"\ndiscount = 1.0\n",
        )?;

        let result = load_config_at(&isolated_paths(&dir), Some(&path));
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    #[serial]
    fn test_env_var_layer_is_applied() -> Result<()> {
        let dir = temp_dir()?;
        let path = write_config(&dir, "env.toml", "[driving_ages]\nDE = 18\n")?;

        std::env::set_var(CONFIG_ENV_VAR, &path);
        let result = load_config_at(&isolated_paths(&dir), None);
        std::env::remove_var(CONFIG_ENV_VAR);

        let config = result?;
        assert!(config.driving_rules()?.can_drive(18, "DE")?);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_env_var_pointing_nowhere_is_an_error() -> Result<()> {
        let dir = temp_dir()?;
        std::env::set_var(CONFIG_ENV_VAR, "/nonexistent/drills/env.toml");
        let result = load_config_at(&isolated_paths(&dir), None);
        std::env::remove_var(CONFIG_ENV_VAR);

        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_global_config_path() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_project_config_path() {
        let path = project_config_path().unwrap_or_default();
        assert!(path.ends_with(".drills/config.toml"));
    }
}
