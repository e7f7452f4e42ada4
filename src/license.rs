use crate::templates::Templates;
use anyhow::{Context as _, Result};
use chrono::Datelike;
use std::fs;
use std::path::Path;
use tera::Context;

/// Copyright holder details passed to the license generator.
#[derive(Debug, Clone, Default)]
pub struct LicenseOptions {
    pub name: String,
    pub email: String,
    pub website: String,
}

pub trait LicenseWriter {
    fn write(&self, path: &Path, options: &LicenseOptions) -> Result<()>;
}

/// Writes the MIT license text.
pub struct MitLicense<'a> {
    templates: &'a Templates,
    year: i32,
}

impl<'a> MitLicense<'a> {
    pub fn new(templates: &'a Templates) -> Self {
        MitLicense {
            templates,
            year: chrono::Local::now().year(),
        }
    }

    pub fn for_year(templates: &'a Templates, year: i32) -> Self {
        MitLicense { templates, year }
    }
}

impl LicenseWriter for MitLicense<'_> {
    fn write(&self, path: &Path, options: &LicenseOptions) -> Result<()> {
        let mut context = Context::new();
        context.insert("year", &self.year);
        context.insert("author_name", &options.name);
        context.insert("author_email", &options.email);
        context.insert("author_url", &options.website);

        let content = self.templates.render("LICENSE.tera", &context)?;
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use predicates::prelude::*;

    #[test]
    fn writes_mit_license() -> Result<()> {
        let dir = TempDir::new()?;
        let templates = Templates::load()?;
        let license = MitLicense::for_year(&templates, 2016);

        license.write(
            &dir.path().join("LICENSE"),
            &LicenseOptions {
                name: "Alfresco Team".into(),
                email: "team@alfresco.com".into(),
                website: "http://alfresco.com".into(),
            },
        )?;

        dir.child("LICENSE")
            .assert(predicate::str::starts_with("The MIT License (MIT)"));
        dir.child("LICENSE").assert(predicate::str::contains(
            "Copyright (c) 2016 Alfresco Team <team@alfresco.com> (http://alfresco.com)",
        ));

        dir.close()?;
        Ok(())
    }

    #[test]
    fn omits_missing_contact_details() -> Result<()> {
        let dir = TempDir::new()?;
        let templates = Templates::load()?;
        let license = MitLicense::for_year(&templates, 2016);

        license.write(
            &dir.path().join("LICENSE"),
            &LicenseOptions {
                name: "Alfresco Team".into(),
                ..Default::default()
            },
        )?;

        dir.child("LICENSE")
            .assert(predicate::str::contains("Copyright (c) 2016 Alfresco Team\n"));

        dir.close()?;
        Ok(())
    }
}
