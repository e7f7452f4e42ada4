//! Embedded project templates
//!
//! Files ending with `.tera` are rendered with the answers, every other file
//! is copied as is.

use crate::answers::Answers;
use anyhow::{anyhow, Context as _, Result};
use include_dir::{include_dir, Dir, DirEntry};
use tera::{Context, Tera};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

pub const TEMPLATE_SUFFIX: &str = ".tera";

pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parses every embedded `.tera` template
    pub fn load() -> Result<Self> {
        let mut sources = Vec::new();
        collect_sources(&TEMPLATES, &mut sources)?;

        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_templates(sources)
            .context("Failed to parse project templates")?;

        Ok(Templates { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String> {
        self.tera
            .render(name, context)
            .with_context(|| format!("Failed to render {}", name))
    }

    /// Raw contents of a template copied without rendering
    pub fn raw(&self, name: &str) -> Result<&'static [u8]> {
        TEMPLATES
            .get_file(name)
            .map(|file| file.contents())
            .ok_or_else(|| anyhow!("Template not found: {}", name))
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }
}

fn collect_sources(dir: &Dir<'static>, sources: &mut Vec<(String, &'static str)>) -> Result<()> {
    for entry in dir.entries() {
        match entry {
            DirEntry::Dir(child) => collect_sources(child, sources)?,
            DirEntry::File(file) => {
                let name = file.path().to_string_lossy().replace('\\', "/");
                if name.ends_with(TEMPLATE_SUFFIX) {
                    let content = file
                        .contents_utf8()
                        .ok_or_else(|| anyhow!("Template is not valid UTF-8: {}", name))?;
                    sources.push((name, content));
                }
            }
        }
    }

    Ok(())
}

/// Variables available to the project templates.
pub fn project_context(answers: &Answers) -> Context {
    let github_account = answers.github_account.clone().unwrap_or_default();
    let features = &answers.features;

    let mut context = Context::new();
    context.insert("project_name", &answers.project_name);
    context.insert("project_name_camel_case", &answers.project_name_camel_case());
    context.insert("description", &answers.description);
    context.insert("author_name", &answers.author_name);
    context.insert("author_email", &answers.author_email);
    context.insert("author_url", &answers.author_url);
    context.insert("author", &author_line(answers));
    context.insert("keywords", &answers.keywords);
    context.insert(
        "repository_url",
        &format!("https://github.com/{}/{}.git", github_account, answers.project_name),
    );
    context.insert(
        "bugs_url",
        &format!("https://github.com/{}/{}/issues", github_account, answers.project_name),
    );
    context.insert("github_account", &github_account);
    context.insert("navigation_bar", &features.navigation_bar);
    context.insert("drawer", &features.drawer);
    context.insert("search_bar", &features.search_bar);
    context.insert("content_page", &features.content_page);
    context.insert("bpm_task_page", &features.bpm_task_page);
    context
}

fn author_line(answers: &Answers) -> String {
    if answers.author_email.is_empty() {
        answers.author_name.clone()
    } else {
        format!("{} <{}>", answers.author_name, answers.author_email)
    }
}
