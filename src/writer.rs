//! Scaffold writing stages

use crate::answers::Answers;
use crate::license::{LicenseOptions, LicenseWriter};
use crate::models::PackageJsonFile;
use crate::plan::{self, Action, PlannedFile};
use crate::templates::{self, Templates};
use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tera::Context;

/// Makes sure the project is generated inside a folder named after it.
///
/// Returns the destination root, creating `<working_dir>/<project_name>`
/// when the working directory has a different name.
pub fn reconcile_destination(working_dir: &Path, project_name: &str) -> Result<PathBuf> {
    let dir_name = working_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    if dir_name.as_deref() == Some(project_name) {
        return Ok(working_dir.to_path_buf());
    }

    log::info!(
        "Your generator must be inside a folder named {}, creating it",
        project_name
    );
    let root = working_dir.join(project_name);
    fs::create_dir_all(&root)
        .with_context(|| format!("Failed to create directory {}", root.display()))?;
    Ok(root)
}

/// Writes every planned file under `root`, returning the written paths.
pub fn write_scaffold(
    root: &Path,
    answers: &Answers,
    templates: &Templates,
    license: &dyn LicenseWriter,
) -> Result<Vec<PathBuf>> {
    let context = templates::project_context(answers);
    log::debug!("Template variables: {:?}", context);

    let mut written = Vec::new();
    for file in plan::plan(&answers.features) {
        let path = root.join(file.destination);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        write_file(&file, &path, answers, templates, &context, license)?;
        log::info!("create {}", file.destination);
        written.push(path);
    }

    Ok(written)
}

fn write_file(
    file: &PlannedFile,
    path: &Path,
    answers: &Answers,
    templates: &Templates,
    context: &Context,
    license: &dyn LicenseWriter,
) -> Result<()> {
    match file.action {
        Action::Copy => {
            let content = templates.raw(file.template)?;
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        Action::Render => {
            let content = templates.render(file.template, context)?;
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        Action::Manifest => {
            let rendered = templates.render(file.template, context)?;
            let generated = PackageJsonFile::parse(&rendered)
                .with_context(|| format!("Rendered {} is invalid", file.template))?;

            PackageJsonFile::from_file(path)
                .with_defaults(generated.into_fields())
                .with_keywords(answers.manifest_keywords())
                .write(path)
        }
        Action::License => license.write(
            path,
            &LicenseOptions {
                name: answers.author_name.clone(),
                email: answers.author_email.clone(),
                website: answers.author_url.clone(),
            },
        ),
    }
}
