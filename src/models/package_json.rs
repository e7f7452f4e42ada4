use anyhow::{bail, Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Package manifest kept as an ordered JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageJsonFile {
    fields: Map<String, Value>,
}

impl PackageJsonFile {
    /// Read the `package.json` file.
    ///
    /// A missing or unreadable manifest is treated as an empty one.
    pub fn from_file(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Default::default();
        };

        match PackageJsonFile::parse(&content) {
            Ok(package) => package,
            Err(err) => {
                log::warn!("Ignoring {}: {}", path.display(), err);
                Default::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("Invalid package manifest")?;
        match value {
            Value::Object(fields) => Ok(PackageJsonFile { fields }),
            _ => bail!("Package manifest is not a JSON object"),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn keywords(&self) -> Vec<&str> {
        self.fields
            .get("keywords")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Uses `defaults` for every field this manifest does not define.
    ///
    /// Default fields come first, in their own order, followed by the fields
    /// only this manifest has.
    pub fn with_defaults(self, defaults: Map<String, Value>) -> Self {
        let mut fields = defaults;
        for (key, value) in self.fields {
            fields.insert(key, value);
        }
        PackageJsonFile { fields }
    }

    /// Adds the keyword list unless the manifest already defines keywords.
    pub fn with_keywords(self, keywords: Vec<String>) -> Self {
        let mut defaults = Map::new();
        defaults.insert("keywords".to_owned(), json!(keywords));
        self.with_defaults(defaults)
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.fields)?;
        content.push('\n');
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::{NamedTempFile, TempDir};

    fn keywords() -> Vec<String> {
        vec!["app-keyword".into(), "alfresco-component".into()]
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let package = PackageJsonFile::from_file(Path::new("missing/package.json"));
        assert!(package.is_empty());
    }

    #[test]
    fn invalid_file_reads_as_empty() -> Result<()> {
        let file = NamedTempFile::new("package.json")?;
        file.write_str("{ not json")?;
        assert!(PackageJsonFile::from_file(file.path()).is_empty());

        file.close()?;
        Ok(())
    }

    #[test]
    fn rejects_non_object_manifest() {
        assert!(PackageJsonFile::parse("[1, 2]").is_err());
    }

    #[test]
    fn adds_keywords_first() -> Result<()> {
        let package = PackageJsonFile::parse(r#"{ "name": "app-fake", "version": "0.1.0" }"#)?
            .with_keywords(keywords());

        let fields: Vec<&String> = package.fields.keys().collect();
        assert_eq!(fields, vec!["keywords", "name", "version"]);
        assert_eq!(package.keywords(), vec!["app-keyword", "alfresco-component"]);
        Ok(())
    }

    #[test]
    fn existing_keywords_take_precedence() -> Result<()> {
        let package = PackageJsonFile::parse(r#"{ "name": "app-fake", "keywords": ["mine"] }"#)?
            .with_keywords(keywords());
        assert_eq!(package.keywords(), vec!["mine"]);
        Ok(())
    }

    #[test]
    fn existing_fields_override_defaults() -> Result<()> {
        let generated = PackageJsonFile::parse(
            r#"{ "name": "generated", "description": "new", "license": "MIT" }"#,
        )?;
        let existing = PackageJsonFile::parse(r#"{ "name": "existing", "private": true }"#)?;

        let merged = existing.with_defaults(generated.into_fields());
        assert_eq!(merged.name(), Some("existing"));
        assert_eq!(
            Value::Object(merged.into_fields()),
            json!({
                "name": "existing",
                "description": "new",
                "license": "MIT",
                "private": true
            })
        );
        Ok(())
    }

    #[test]
    fn keyword_merge_is_idempotent() -> Result<()> {
        let once = PackageJsonFile::parse(r#"{ "name": "app-fake" }"#)?.with_keywords(keywords());
        let twice = once.clone().with_keywords(keywords());
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn writes_pretty_json() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("package.json");

        PackageJsonFile::parse(r#"{"name":"app-fake"}"#)?.write(&path)?;
        dir.child("package.json")
            .assert("{\n  \"name\": \"app-fake\"\n}\n");

        dir.close()?;
        Ok(())
    }
}
