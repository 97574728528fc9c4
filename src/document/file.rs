//! `.frc` match files.
//!
//! A match file is the JSON document from [`super::codec`] written as-is.
//! Loading never touches the caller's state: on any failure the error is
//! returned and the caller keeps what it had.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use super::codec::{decode, encode};
use crate::core::{Edition, MatchState};
use crate::error::Error;

/// Extension used for saved matches.
pub const FILE_EXTENSION: &str = "frc";

/// File name offered when saving a new match.
pub const DEFAULT_FILE_NAME: &str = "match.frc";

/// Write `state` to `path`, replacing any existing file.
pub fn save(path: impl AsRef<Path>, state: &MatchState) -> Result<(), Error> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    serde_json::to_writer(&mut writer, &encode(state))?;
    writer.flush()?;

    info!("Match saved to {}", path.display());
    Ok(())
}

/// Read and validate a match from `path`.
pub fn load(path: impl AsRef<Path>, edition: Edition) -> Result<MatchState, Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;

    match decode(&value, edition) {
        Ok(state) => {
            info!("Match loaded from {}", path.display());
            Ok(state)
        }
        Err(e) => {
            warn!("Rejected match file {}: {}", path.display(), e);
            Err(e.into())
        }
    }
}
