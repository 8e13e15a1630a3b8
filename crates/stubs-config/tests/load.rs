use std::{fs, path::PathBuf};
use stubs_config::{ConfigError, load_registry};
use stubs_schema::{node::NodeError, types::SemanticType};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write schema file");

    path
}

#[test]
fn loads_and_merges_files_in_order() {
    let dir = TempDir::new().unwrap();
    let first = write(
        &dir,
        "first.toml",
        r#"
        [[types]]
        name = "Domain"
        fields = [
            { name = "name", type = "string", key = true, encoding = { cpp = "std::string" } },
        ]

        [[types]]
        name = "Topic"
        fields = [{ name = "id", type = "uint64", key = true }]
        "#,
    );
    let second = write(
        &dir,
        "second.toml",
        r#"
        [[types]]
        name = "Domain"
        fields = [
            { name = "name", type = "string", key = true, encoding = { cpp = "std::string", ipc = "char_string" } },
            { name = "domain_id", type = "uint32", encoding = { cpp = "uint32_t", ipc = "uint32_t" } },
        ]
        "#,
    );

    let registry = load_registry([&first, &second]).expect("registry should load");

    assert_eq!(registry.list_type_names().collect::<Vec<_>>(), ["Domain", "Topic"]);

    let domain = registry.lookup("Domain").unwrap();
    assert_eq!(domain.fields.len(), 2);
    assert_eq!(domain.fields[0].hint("ipc"), Some("char_string"));
    assert_eq!(domain.fields[1].semantic_type, SemanticType::Uint32);

    assert_eq!(
        registry.lookup("Widget"),
        Err(NodeError::NotFound("Widget".to_string()))
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = load_registry([&missing]).expect_err("missing file must fail");

    assert!(matches!(err, ConfigError::Io { .. }), "{err}");
    assert!(err.to_string().contains("nope.toml"), "{err}");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.toml", "[[types]\nname = ");

    let err = load_registry([&path]).expect_err("malformed file must fail");

    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn schema_rules_apply_after_loading() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "keys.toml",
        r#"
        [[types]]
        name = "Domain"
        fields = [
            { name = "name", type = "string", key = true },
            { name = "domain_id", type = "uint32", key = true },
        ]
        "#,
    );

    let err = load_registry([&path]).expect_err("two keys must fail");

    assert!(matches!(err, ConfigError::Schema(_)), "{err}");
    assert!(err.to_string().contains("multiple key fields"), "{err}");
}
