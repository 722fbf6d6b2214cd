use crate::error::{IciError, Result};
use crate::types::config::IciConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "ici.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".ici/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/ici/config.toml";

/// Layered load: global, then `ici.toml`, then `.ici/local.toml` under `root`.
/// Returns `None` when no layer exists.
pub fn load_config(root: &Path) -> Result<Option<IciConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<IciConfig>> {
    let layers = global_path
        .into_iter()
        .map(Path::to_path_buf)
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .filter(|path| path.exists())
        .collect::<Vec<_>>();
    if layers.is_empty() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    for path in &layers {
        debug!(path = %path.display(), "merging config layer");
        merge_toml(&mut merged, read_toml_value(path)?);
    }
    finish(merged).map(Some)
}

/// Loads a single explicit config file, bypassing the layers.
pub fn load_config_file(path: &Path) -> Result<IciConfig> {
    if !path.exists() {
        return Err(IciError::PathNotFound(path.display().to_string()));
    }
    finish(read_toml_value(path)?)
}

fn finish(merged: Value) -> Result<IciConfig> {
    let cfg: IciConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| IciError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| IciError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::criterion::CriterionId;
    use crate::types::scoring::AggregationScheme;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[aggregation]
scheme = "mean"

[penalty]
max = 20.0
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[aggregation]
scheme = "weighted"

[aggregation.weights]
C5 = 0.20
C12 = 0.00
C11 = 0.03
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".ici")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[penalty]
threshold = 50.0
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        let settings = cfg.settings();
        assert_eq!(settings.scheme, AggregationScheme::Weighted);
        assert_eq!(settings.weights.get(CriterionId::C5), 0.20);
        assert_eq!(settings.penalty.threshold, 50.0);
        assert_eq!(settings.penalty.max, 20.0);
    }

    #[test]
    fn load_config_rejects_invalid_layers() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[aggregation.weights]\nC1 = 0.9\n",
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("should fail");
        assert!(matches!(err, IciError::ConfigParse(_)));
    }

    #[test]
    fn load_config_file_requires_existing_path() {
        let err = load_config_file(Path::new("/nonexistent/ici.toml")).expect_err("should fail");
        assert!(matches!(err, IciError::PathNotFound(_)));
    }
}
