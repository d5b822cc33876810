use super::{LockDocument, Manifest};
use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde_json::Value;
use std::fs;

const LOG_TARGET: &str = " documents";

/// Read and parse the manifest and lock file.
///
/// # Errors
///
/// Returns an error if either file cannot be read or is not valid JSON.
pub fn load_documents(manifest_path: &Utf8Path, lock_path: &Utf8Path) -> Result<(Manifest, LockDocument)> {
    let manifest = Manifest::new(read_json(manifest_path, "manifest")?);
    let lock = LockDocument::new(read_json(lock_path, "lock file")?);
    Ok((manifest, lock))
}

fn read_json(path: &Utf8Path, role: &str) -> Result<Value> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading {role} '{path}'"))?;
    let value = serde_json::from_str(&text).into_app_err_with(|| format!("parsing {role} '{path}' as JSON"))?;
    log::info!(target: LOG_TARGET, "Loaded {role} from '{path}'");
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use serde_json::json;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join(name)).unwrap();
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_documents() {
        let tmp = tempfile::tempdir().unwrap();
        let manifest_path = write_file(&tmp, "package.json", r#"{"name": "pkg", "license": "MIT"}"#);
        let lock_path = write_file(&tmp, "package-lock.json", r#"{"packages": {"a": {"dev": true}}}"#);

        let (manifest, lock) = load_documents(&manifest_path, &lock_path).unwrap();
        assert_eq!(manifest.as_value(), &json!({"name": "pkg", "license": "MIT"}));
        assert_eq!(lock.as_value(), &json!({"packages": {"a": {"dev": true}}}));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_missing_manifest_names_the_role() {
        let tmp = tempfile::tempdir().unwrap();
        let lock_path = write_file(&tmp, "package-lock.json", "{}");
        let missing = Utf8PathBuf::try_from(tmp.path().join("nope.json")).unwrap();

        let err = load_documents(&missing, &lock_path).unwrap_err();
        assert!(format!("{err:#}").contains("reading manifest"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_lock_json() {
        let tmp = tempfile::tempdir().unwrap();
        let manifest_path = write_file(&tmp, "package.json", "{}");
        let lock_path = write_file(&tmp, "package-lock.json", "{not json");

        let err = load_documents(&manifest_path, &lock_path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing lock file"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_non_object_documents_still_load() {
        let tmp = tempfile::tempdir().unwrap();
        let manifest_path = write_file(&tmp, "package.json", "[]");
        let lock_path = write_file(&tmp, "package-lock.json", "42");

        let (manifest, lock) = load_documents(&manifest_path, &lock_path).unwrap();
        assert!(manifest.as_value().is_array());
        assert!(lock.as_value().is_number());
    }
}
