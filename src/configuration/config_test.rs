use anyhow::Result;
use tokio::fs;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build())?;
    let doc = res.parse::<toml_edit::Document>()?;

    assert_eq!(doc["api-url"].as_str(), Some("http://localhost:3000"));
    assert_eq!(doc["storage"].as_str(), Some("file"));
    assert_eq!(
        doc["storage-file"].as_str(),
        Some(Config::default(ConfigKey::StorageFile).as_str())
    );
    assert!(doc.get("config-file").is_none());
    assert!(doc.get("username").is_none());
    assert!(res.contains("# username = \"\""));
    assert!(res.contains("[possible values: file, memory]"));

    return Ok(());
}

#[tokio::test]
async fn it_loads_config_from_file_and_flags() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.toml");
    let config_file = config_path.to_string_lossy().to_string();
    fs::write(
        &config_path,
        "api-url = \"http://shop.test:8080\"\nstorage = \"memory\"\n",
    )
    .await?;

    let matches =
        cli::build().try_get_matches_from(vec!["storefront", "-c", config_file.as_str(), "whoami"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::ApiURL), "http://shop.test:8080");
    assert_eq!(Config::get(ConfigKey::Storage), "memory");
    assert_eq!(
        Config::get(ConfigKey::StorageFile),
        Config::default(ConfigKey::StorageFile)
    );

    let matches = cli::build().try_get_matches_from(vec![
        "storefront",
        "-c",
        config_file.as_str(),
        "--api-url",
        "http://flag.test",
        "whoami",
    ])?;
    Config::load(cli::build(), vec![&matches]).await?;
    assert_eq!(Config::get(ConfigKey::ApiURL), "http://flag.test");

    fs::write(&config_path, "storage = \"cloud\"\n").await?;
    let matches =
        cli::build().try_get_matches_from(vec!["storefront", "-c", config_file.as_str(), "whoami"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    assert!(res
        .unwrap_err()
        .to_string()
        .contains("invalid value for key 'storage': cloud"));

    return Ok(());
}
