//! Loading already-fetched place payloads from disk.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use nearby_core::Place;
use serde::Deserialize;

use crate::CliError;

/// Accepted payload shapes: a provider nearby-search response, or a bare
/// array of places.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlacesPayload {
    Search { results: Vec<Place> },
    Bare(Vec<Place>),
}

impl PlacesPayload {
    fn into_places(self) -> Vec<Place> {
        match self {
            Self::Search { results } => results,
            Self::Bare(places) => places,
        }
    }
}

/// Open a UTF-8 file path using ambient authority.
fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(file_name).map(|meta| meta.is_file())
}

/// Load places from a JSON payload on disk.
pub(crate) fn load_places(path: &Utf8Path) -> Result<Vec<Place>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlaces {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let payload: PlacesPayload =
        serde_json::from_reader(reader).map_err(|source| CliError::ParsePlaces {
            path: path.to_path_buf(),
            source,
        })?;
    let places = payload.into_places();
    log::debug!("loaded {} places from {path}", places.len());
    Ok(places)
}
