use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub working_dir: PathBuf,
    pub skip_install: bool,
    pub offline: bool,
    pub identity_file: Option<PathBuf>,
}
