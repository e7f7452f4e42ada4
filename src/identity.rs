use anyhow::{Context, Result};
use git2::Config as GitConfig;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

/// Author details remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_url: Option<String>,
}

impl Identity {
    /// Fills the gaps with values from `other`
    pub fn or(self, other: Identity) -> Identity {
        Identity {
            author_name: self.author_name.or(other.author_name),
            author_email: self.author_email.or(other.author_email),
            author_url: self.author_url.or(other.author_url),
        }
    }
}

pub trait IdentityStore {
    fn load(&self) -> Identity;
    fn save(&self, identity: &Identity) -> Result<()>;
}

/// Identity store persisted as a TOML file in the user config directory.
pub struct TomlIdentityStore {
    path: PathBuf,
}

impl TomlIdentityStore {
    pub fn new(path: PathBuf) -> Self {
        TomlIdentityStore { path }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("alfresco-app-generator").join("identity.toml"))
    }
}

impl IdentityStore for TomlIdentityStore {
    fn load(&self) -> Identity {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Identity::default();
        };
        match toml::from_str(&content) {
            Ok(identity) => identity,
            Err(err) => {
                log::warn!("Ignoring invalid {}: {}", self.path.display(), err);
                Identity::default()
            }
        }
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(identity)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Identity store kept in memory, used when no config directory is available.
#[derive(Default)]
pub struct MemoryIdentityStore {
    identity: RefCell<Identity>,
}

impl MemoryIdentityStore {
    pub fn new(identity: Identity) -> Self {
        MemoryIdentityStore {
            identity: RefCell::new(identity),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Identity {
        self.identity.borrow().clone()
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        *self.identity.borrow_mut() = identity.clone();
        Ok(())
    }
}

/// Reads `user.name` and `user.email` from the global git configuration.
pub fn git_identity() -> Identity {
    match GitConfig::open_default() {
        Err(err) => {
            log::debug!("Git configuration not found: {}", err);
            Identity::default()
        }
        Ok(config) => Identity {
            author_name: config.get_string("user.name").ok(),
            author_email: config.get_string("user.email").ok(),
            author_url: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn sample() -> Identity {
        Identity {
            author_name: Some("Alfresco Team".into()),
            author_email: Some("team@alfresco.com".into()),
            author_url: Some("http://alfresco.com".into()),
        }
    }

    #[test]
    fn saves_and_loads_identity() -> Result<()> {
        let dir = TempDir::new()?;
        let store = TomlIdentityStore::new(dir.path().join("nested/identity.toml"));

        store.save(&sample())?;
        assert_eq!(store.load(), sample());

        dir.close()?;
        Ok(())
    }

    #[test]
    fn loads_empty_identity_when_missing() -> Result<()> {
        let dir = TempDir::new()?;
        let store = TomlIdentityStore::new(dir.path().join("identity.toml"));
        assert_eq!(store.load(), Identity::default());

        dir.close()?;
        Ok(())
    }

    #[test]
    fn ignores_invalid_file() -> Result<()> {
        let dir = TempDir::new()?;
        let file = dir.child("identity.toml");
        file.write_str("author_name = [")?;

        let store = TomlIdentityStore::new(file.path().to_path_buf());
        assert_eq!(store.load(), Identity::default());

        dir.close()?;
        Ok(())
    }

    #[test]
    fn stored_values_take_precedence() {
        let stored = Identity {
            author_name: Some("Stored".into()),
            ..Default::default()
        };
        let merged = stored.or(sample());
        assert_eq!(merged.author_name.as_deref(), Some("Stored"));
        assert_eq!(merged.author_email.as_deref(), Some("team@alfresco.com"));
    }

    #[test]
    fn memory_store_round_trip() -> Result<()> {
        let store = MemoryIdentityStore::default();
        store.save(&sample())?;
        assert_eq!(store.load(), sample());
        Ok(())
    }
}
