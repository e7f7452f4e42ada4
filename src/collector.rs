//! Answer collection stages
//!
//! Each stage takes the answers gathered so far and returns them with its
//! own fields filled in. No stage touches the destination directory.

use crate::answers::{self, Answers, Features};
use crate::github::AccountLookup;
use crate::identity::{self, Identity, IdentityStore};
use crate::prompt::{Prompter, Question};
use anyhow::{bail, Result};
use std::path::Path;

pub const WELCOME: &str = "Welcome to the awesome angular 2 App generator!";

const NAME_ATTEMPTS: usize = 3;

/// Asks for the project name, defaulting to the normalized directory name.
///
/// The question is repeated while the name normalizes to nothing and there is
/// no usable default, giving up after a few attempts.
pub fn collect_project_identity(
    prompter: &dyn Prompter,
    working_dir: &Path,
    mut answers: Answers,
) -> Result<Answers> {
    let dir_name = working_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let default_name = answers::make_app_name(&dir_name);

    let question = Question::new("projectName", "What's the name of your App?")
        .with_default(Some(default_name.clone()));

    for _ in 0..NAME_ATTEMPTS {
        let name = answers::make_app_name(&prompter.input(&question)?);
        let name = if name.is_empty() { default_name.clone() } else { name };
        if !name.is_empty() {
            answers.project_name = name;
            return Ok(answers);
        }
        prompter.say("The App name needs at least one letter or digit");
    }

    bail!("No valid App name given");
}

/// Asks for the description, author details and package keywords.
///
/// Author details default to the remembered identity, then to the git
/// identity, and are remembered again for the next run.
pub fn collect_authorship(
    prompter: &dyn Prompter,
    store: &dyn IdentityStore,
    mut answers: Answers,
) -> Result<Answers> {
    let known = store.load().or(identity::git_identity());

    answers.description = prompter.input(&Question::new(
        "description",
        "How would you describe the element?",
    ))?;
    answers.author_name = prompter.input(
        &Question::new("authorName", "Author's Name").with_default(known.author_name),
    )?;
    answers.author_email = prompter.input(
        &Question::new("authorEmail", "Author's Email").with_default(known.author_email),
    )?;
    answers.author_url = prompter.input(
        &Question::new("authorUrl", "Author's Homepage").with_default(known.author_url),
    )?;
    let keywords = prompter.input(&Question::new(
        "keywords",
        "Package keywords (comma to split)",
    ))?;
    answers.keywords = answers::split_keywords(&keywords);

    let remembered = Identity {
        author_name: Some(answers.author_name.clone()),
        author_email: Some(answers.author_email.clone()),
        author_url: Some(answers.author_url.clone()),
    };
    if let Err(err) = store.save(&remembered) {
        log::warn!("Could not remember author details: {}", err);
    }

    Ok(answers)
}

/// Asks for the GitHub account when the author email is valid.
///
/// The suggestion comes from the lookup service; a failed lookup leaves the
/// suggestion empty.
pub fn collect_hosting_account(
    prompter: &dyn Prompter,
    lookup: &dyn AccountLookup,
    mut answers: Answers,
) -> Result<Answers> {
    if !answers::is_valid_email(&answers.author_email) {
        log::debug!("Skipping GitHub account, invalid email");
        return Ok(answers);
    }

    let suggestion = match lookup.lookup(&answers.author_email) {
        Ok(username) => username,
        Err(err) => {
            log::warn!("GitHub username lookup failed: {}", err);
            String::new()
        }
    };

    let question = Question::new("githubAccount", "GitHub username or organization")
        .with_default(Some(suggestion));
    answers.github_account = Some(prompter.input(&question)?);
    Ok(answers)
}

/// Asks which optional components to include.
pub fn collect_feature_toggles(prompter: &dyn Prompter, mut answers: Answers) -> Result<Answers> {
    let defaults = Features::default();

    answers.features = Features {
        navigation_bar: prompter.confirm(
            &Question::new("navigationBar", "Do you want include a navigation bar?"),
            defaults.navigation_bar,
        )?,
        drawer: prompter.confirm(
            &Question::new("drawer", "Do you want include a drawer bar?"),
            defaults.drawer,
        )?,
        search_bar: prompter.confirm(
            &Question::new("searchBar", "Do you want include a search bar?"),
            defaults.search_bar,
        )?,
        content_page: prompter.confirm(
            &Question::new("contentPage", "Do you want include a ECM Content Page?"),
            defaults.content_page,
        )?,
        bpm_task_page: prompter.confirm(
            &Question::new("bpmTaskPage", "Do you want include a BPM Tasks Page?"),
            defaults.bpm_task_page,
        )?,
    };
    Ok(answers)
}
