use crate::answers::Answers;
use crate::collector;
use crate::github::AccountLookup;
use crate::identity::IdentityStore;
use crate::install::Installer;
use crate::license::LicenseWriter;
use crate::prompt::Prompter;
use crate::templates::Templates;
use crate::writer;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Collaborators used by the generator.
pub struct Generator<'a> {
    pub prompter: &'a dyn Prompter,
    pub identity: &'a dyn IdentityStore,
    pub lookup: &'a dyn AccountLookup,
    pub templates: &'a Templates,
    pub license: &'a dyn LicenseWriter,
    /// `None` skips dependency installation
    pub installer: Option<&'a dyn Installer>,
}

#[derive(Debug)]
pub struct Outcome {
    pub root: PathBuf,
    pub answers: Answers,
    pub files: Vec<PathBuf>,
}

impl Generator<'_> {
    /// Asks every question, then writes the project.
    pub fn run(&self, working_dir: &Path) -> Result<Outcome> {
        let answers = self.collect(working_dir)?;
        self.write(working_dir, answers)
    }

    pub fn collect(&self, working_dir: &Path) -> Result<Answers> {
        self.prompter.say(collector::WELCOME);

        let answers = Answers::default();
        log::debug!("Collecting project identity");
        let answers = collector::collect_project_identity(self.prompter, working_dir, answers)?;
        log::debug!("Collecting authorship");
        let answers = collector::collect_authorship(self.prompter, self.identity, answers)?;
        log::debug!("Collecting hosting account");
        let answers = collector::collect_hosting_account(self.prompter, self.lookup, answers)?;
        log::debug!("Collecting feature toggles");
        collector::collect_feature_toggles(self.prompter, answers)
    }

    pub fn write(&self, working_dir: &Path, answers: Answers) -> Result<Outcome> {
        let root = writer::reconcile_destination(working_dir, &answers.project_name)?;
        let files = writer::write_scaffold(&root, &answers, self.templates, self.license)?;

        match self.installer {
            Some(installer) => {
                if let Err(err) = installer.install(&root) {
                    log::warn!("Dependency installation failed: {:#}", err);
                }
            }
            None => log::info!("Skipping dependency installation"),
        }

        Ok(Outcome {
            root,
            answers,
            files,
        })
    }
}
