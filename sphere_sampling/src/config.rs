use std::path::Path;

use crate::{display::DEFAULT_POINT_COLOR, pcg::DEFAULT_SEED};

/// Config file that stores all knobs of the sketch.
///
/// Kept intentionally simple: a handful of plain fields, no stringly typed dictionaries.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial state of the pcg hash chain.
    pub pcg_seed: u32,

    /// Seed for the uniform random source. `None` seeds from entropy, making runs non-reproducible.
    pub uniform_seed: Option<u64>,

    pub sample_counts: Vec<usize>,

    /// Packed `0xRRGGBBAA`.
    pub point_color: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pcg_seed: DEFAULT_SEED,
            uniform_seed: None,
            sample_counts: vec![1024, 2048],
            point_color: DEFAULT_POINT_COLOR,
        }
    }
}

impl Config {
    pub fn save_to_ron_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn save_to_ron_file_or_log_error(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Err(err) = self.save_to_ron_file(path) {
            log::error!("Failed to save {path:?}: {err}");
        }
    }

    pub fn load_from_ron_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_contents = std::fs::read_to_string(path)?;
        Ok(ron::de::from_str(&file_contents)?)
    }

    pub fn load_from_ron_file_or_default_and_log_error(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_from_ron_file(path).unwrap_or_else(|err| {
            log::warn!("Failed to load {path:?}: {err}");
            let default = Self::default();
            default.save_to_ron_file_or_log_error(path);
            default
        })
    }
}
