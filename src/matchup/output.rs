use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{Level, event};

use super::MatchupError;

/// Delete every file directly inside `dir`, returning how many went.
///
/// A directory that doesn't exist is left alone. Sub directories are
/// not touched.
pub fn clear_output_dir(dir: &Path) -> Result<usize, MatchupError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            event!(Level::INFO, dir = %dir.display(), "Output directory does not exist");
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }
    event!(Level::INFO, dir = %dir.display(), removed, "Cleared output directory");
    Ok(removed)
}
