use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;

pub trait Installer {
    /// Installs the declared dependencies of the project at `root`
    fn install(&self, root: &Path) -> Result<()>;
}

/// Runs `npm install` in the project directory.
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    pub fn new() -> Self {
        let program = if cfg!(windows) { "npm.cmd" } else { "npm" };
        NpmInstaller::with_program(program)
    }

    pub fn with_program(program: &str) -> Self {
        NpmInstaller {
            program: program.to_owned(),
        }
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        NpmInstaller::new()
    }
}

impl Installer for NpmInstaller {
    fn install(&self, root: &Path) -> Result<()> {
        log::info!("Running {} install in {}", self.program, root.display());

        let status = Command::new(&self.program)
            .arg("install")
            .current_dir(root)
            .status()
            .with_context(|| format!("Failed to run {}", self.program))?;

        if !status.success() {
            bail!("{} install exited with {}", self.program, status);
        }
        Ok(())
    }
}
