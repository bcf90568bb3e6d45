use figment::Jail;
use vox_config::{ConfigError, VoxConfig};

#[test]
fn env_overrides_general_settings() {
    Jail::expect_with(|jail| {
        jail.set_env("VOXTASK_GENERAL__DEFAULT_LIMIT", "5");
        jail.set_env("VOXTASK_GENERAL__DEFAULT_FORMAT", "raw");

        let config = VoxConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 5);
        assert_eq!(config.general.default_format, "raw");
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".voxtask")?;
        jail.create_file(
            ".voxtask/config.toml",
            "[general]\ndefault_format = \"table\"\n",
        )?;
        jail.set_env("VOXTASK_GENERAL__DEFAULT_FORMAT", "json");

        let config = VoxConfig::load().expect("config loads");
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn env_cannot_smuggle_an_unknown_format() {
    Jail::expect_with(|jail| {
        jail.set_env("VOXTASK_GENERAL__DEFAULT_FORMAT", "yaml");

        let err = VoxConfig::load().expect_err("should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "general.default_format"
        ));
        Ok(())
    });
}
