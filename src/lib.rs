use crate::github::{AccountLookup, GithubLookup, OfflineLookup};
use crate::identity::{IdentityStore, MemoryIdentityStore, TomlIdentityStore};
use crate::install::{Installer, NpmInstaller};
use crate::license::MitLicense;
use crate::prompt::TerminalPrompter;
use crate::templates::Templates;
use anyhow::{Context, Result};

pub mod answers;
pub mod collector;
pub mod config;
pub mod generator;
pub mod github;
pub mod identity;
pub mod install;
pub mod license;
pub mod logger;
pub mod models;
pub mod plan;
pub mod prompt;
pub mod templates;
pub mod writer;

pub use answers::{Answers, Features};
pub use config::Config;
pub use generator::{Generator, Outcome};

/// Runs the interactive generator in the configured working directory
pub fn run(config: &Config) -> Result<Outcome> {
    let prompter = TerminalPrompter::default();
    let templates = Templates::load()?;
    let license = MitLicense::new(&templates);

    let identity: Box<dyn IdentityStore> = match config
        .identity_file
        .clone()
        .or_else(TomlIdentityStore::default_path)
    {
        Some(path) => Box::new(TomlIdentityStore::new(path)),
        None => {
            log::warn!("No config directory found, author details won't be remembered");
            Box::new(MemoryIdentityStore::default())
        }
    };

    let lookup: Box<dyn AccountLookup> = if config.offline {
        Box::new(OfflineLookup)
    } else {
        Box::new(GithubLookup::new()?)
    };

    let npm = NpmInstaller::new();
    let installer: Option<&dyn Installer> = if config.skip_install {
        None
    } else {
        Some(&npm)
    };

    let generator = Generator {
        prompter: &prompter,
        identity: identity.as_ref(),
        lookup: lookup.as_ref(),
        templates: &templates,
        license: &license,
        installer,
    };

    let working_dir = config
        .working_dir
        .canonicalize()
        .with_context(|| format!("Invalid working directory {}", config.working_dir.display()))?;

    let outcome = generator.run(&working_dir)?;
    log::info!(
        "Project {} created in {}",
        outcome.answers.project_name,
        outcome.root.display()
    );
    Ok(outcome)
}
