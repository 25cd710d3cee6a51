// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Loading page descriptions from YAML or JSON documents.

use std::{fs, path::Path};

use tracing::debug;

use crate::{
    error::{self, Error},
    input::InputMetadata,
};

/// Loads a page description from the file at `path`.
///
/// JSON documents are accepted as well, since JSON is a subset of YAML.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Parse`](Error::Parse) when it is not a valid description.
pub fn load_metadata(path: &Path,) -> Result<InputMetadata, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    debug!(path = %path.display(), "loaded metadata document");
    parse_metadata(&contents,)
}

/// Parses a page description from a document string.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the document cannot be
/// decoded.
pub fn parse_metadata(contents: &str,) -> Result<InputMetadata, Error,>
{
    let metadata: InputMetadata = serde_yaml::from_str(contents,)?;
    Ok(metadata,)
}
