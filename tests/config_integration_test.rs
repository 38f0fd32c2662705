//! Configuration loading wired through to the running service.

mod common;

use std::io::Write;

use docstore::domain::models::Document;
use docstore::infrastructure::config::ConfigLoader;
use docstore::infrastructure::setup::build_document_service;

#[test]
fn test_env_overrides_file_and_drives_storage_layout() {
    let dir = common::temp_dir();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "storage:\n  root: {}\n  collection: FromFile\ncache:\n  expiration_secs: 60",
        dir.path().display()
    )
    .unwrap();
    file.flush().unwrap();

    let config = temp_env::with_vars(
        [
            ("DOCSTORE_STORAGE__COLLECTION", Some("FromEnv")),
            ("DOCSTORE_SERVER__PORT", Some("9999")),
        ],
        || ConfigLoader::load_from_file(file.path()).unwrap(),
    );

    assert_eq!(config.storage.collection, "FromEnv");
    assert_eq!(config.server.port, 9999);
    assert_eq!(config.cache.expiration_secs, 60);

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let service = build_document_service(&config).await.unwrap();
        service.persist(Document::new("a")).await.unwrap();
    });

    assert!(dir.path().join("FromEnv").join("a").is_file());
}

#[test]
fn test_invalid_env_value_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  port: 8081").unwrap();
    file.flush().unwrap();

    temp_env::with_var("DOCSTORE_CACHE__MAX_CAPACITY", Some("0"), || {
        let err = ConfigLoader::load_from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("max_capacity"));
    });
}
