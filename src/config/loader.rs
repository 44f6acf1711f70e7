//! Loader for the RON tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::{ConfigError, Tuning};

/// Default location of the tuning file, relative to the working directory.
pub const TUNING_FILE: &str = "assets/data/tuning.ron";

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `source` only labels errors.
pub(crate) fn parse_tuning(contents: &str, source: &str) -> Result<Tuning, ConfigError> {
    let tuning: Tuning = ron_options()
        .from_str(contents)
        .map_err(|e| ConfigError::Parse {
            path: source.to_string(),
            details: e.to_string(),
        })?;

    tuning.validate()?;
    Ok(tuning)
}

/// Load and validate the tuning file.
pub fn load_tuning(path: &Path) -> Result<Tuning, ConfigError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: file_name.clone(),
        details: e.to_string(),
    })?;

    parse_tuning(&contents, &file_name)
}
