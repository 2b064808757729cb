use crate::actors::ActorOptions;
use crate::error::{PageError, Result};
use crate::PageParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the JSON report (one array entry per page).
    pub json_out: Option<PathBuf>,
    /// Directory receiving per-page trace JSON and debug renderings.
    pub debug_dir: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub inputs: Vec<PathBuf>,
    pub templates_dir: PathBuf,
    /// Reference pictures of the cast; speakers stay unknown without it.
    pub actors_dir: Option<PathBuf>,
    /// Snap pages to black and white around their Otsu level before reading.
    pub binarize: bool,
    pub output: OutputConfig,
    pub actors: ActorOptions,
    pub params: PageParams,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            templates_dir: PathBuf::from("templates/glyphs"),
            actors_dir: None,
            binarize: true,
            output: OutputConfig::default(),
            actors: ActorOptions::default(),
            params: PageParams::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig> {
    let contents = fs::read_to_string(path).map_err(|source| PageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| PageError::Json {
        path: path.to_path_buf(),
        source,
    })
}
