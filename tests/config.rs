use sequencescape::config::Config;
use sequencescape::constants::DEFAULT_DATABASE_URL;
use sequencescape::Connector;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unsupported dialect should fail
    config.database.url = "postgresql:///warehouse".to_string();
    assert!(config.validate().is_err());

    // Missing separator should fail
    config.database.url = "sqlite:warehouse.db".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.database.url = DEFAULT_DATABASE_URL.to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "debug".to_string();
    config.logging.file = Some(std::path::PathBuf::new());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("[database]"));
    assert!(toml_str.contains("url = \"sqlite:///sequencescape.db\""));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.url, default_config.database.url);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sequencescape.toml");
    std::fs::write(
        &path,
        r#"
[database]
url = "sqlite:///var/lib/warehouse.db"

[logging]
enabled = true
level = "warn"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.database.url, "sqlite:///var/lib/warehouse.db");
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Warn);

    let connector = Connector::from_config(&config.database).unwrap();
    assert_eq!(connector.url(), "sqlite://var/lib/warehouse.db?mode=rwc");
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sequencescape.toml");
    std::fs::write(&path, "[database]\nurl = \"mysql:///warehouse\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
    assert!(Config::load_from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_generate_config_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");
    assert!(!config_path.parent().unwrap().exists());

    // Generate config should create the directory structure
    Config::generate_default_config(&config_path).unwrap();
    assert!(config_path.exists());

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Sequencescape Mapper Configuration File"));
    assert!(content.contains("# Generated on"));

    // The generated file loads back as the defaults
    let config = Config::load_from_file(&config_path).unwrap();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
}

#[test]
fn test_load_from_dirs_precedence() {
    let current_dir = tempfile::tempdir().unwrap();
    let config_dir = tempfile::tempdir().unwrap();

    // Nothing found anywhere: defaults
    let config = Config::load_from_dirs(current_dir.path(), Some(config_dir.path())).unwrap();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);
    let config = Config::load_from_dirs(current_dir.path(), None).unwrap();
    assert_eq!(config.database.url, DEFAULT_DATABASE_URL);

    // XDG config directory
    let xdg_path = config_dir.path().join("sequencescape").join("config.toml");
    std::fs::create_dir_all(xdg_path.parent().unwrap()).unwrap();
    std::fs::write(&xdg_path, "[database]\nurl = \"sqlite:///xdg.db\"\n").unwrap();
    let config = Config::load_from_dirs(current_dir.path(), Some(config_dir.path())).unwrap();
    assert_eq!(config.database.url, "sqlite:///xdg.db");

    // The current directory wins over the XDG directory
    std::fs::write(
        current_dir.path().join("sequencescape.toml"),
        "[database]\nurl = \"sqlite:///local.db\"\n",
    )
    .unwrap();
    let config = Config::load_from_dirs(current_dir.path(), Some(config_dir.path())).unwrap();
    assert_eq!(config.database.url, "sqlite:///local.db");
}

#[test]
fn test_load_from_dirs_surfaces_invalid_file() {
    let current_dir = tempfile::tempdir().unwrap();
    std::fs::write(current_dir.path().join("sequencescape.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(Config::load_from_dirs(current_dir.path(), None).is_err());
}
