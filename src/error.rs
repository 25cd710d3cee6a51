#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the metadata compiler."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint, so the lint is disabled
//! for this module.

use std::path::{Path, PathBuf};

/// Unified error type returned by the compiler pipeline and the CLI.
///
/// Tag generation itself never fails on malformed leaves; errors are reserved
/// for discriminants outside the closed vocabularies, unusable base URLs,
/// and the I/O boundary of the command line tool.
#[derive(Debug, masterror::Error)]
pub enum Error
{
    /// Raised when an Open Graph `type` is outside the known vocabulary.
    #[error("Invalid OpenGraph type: {kind}")]
    InvalidOpenGraphType {
        /// Offending type string as supplied by the caller.
        kind: String,
    },
    /// Raised when a Twitter `card` is outside the known vocabulary.
    #[error("Invalid Twitter card: {card}")]
    InvalidTwitterCard {
        /// Offending card string as supplied by the caller.
        card: String,
    },
    /// Raised when the generator is configured with an unusable base URL.
    #[error("invalid base URL {value:?}: {source}")]
    InvalidBaseUrl {
        /// Base URL as supplied by the caller.
        value:  String,
        /// Parser failure reported by the `url` crate.
        source: url::ParseError,
    },
    /// Raised when a relative value cannot be joined onto the base URL.
    #[error("failed to resolve {value:?} against the base URL: {source}")]
    UrlJoin {
        /// Relative value that failed to resolve.
        value:  String,
        /// Parser failure reported by the `url` crate.
        source: url::ParseError,
    },
    /// Wraps I/O errors that occur while reading metadata documents.
    #[error("failed to read metadata from {path:?}: {source}")]
    Io {
        /// Location of the metadata document.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Wraps YAML/JSON decoding errors.
    #[error("failed to parse metadata: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error,
    },
    /// Wraps serialization errors when writing generated tags.
    #[error("failed to serialize output: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

impl Error
{
    /// Constructs an [`Error::InvalidOpenGraphType`] for the supplied type.
    pub fn invalid_open_graph_type<K,>(kind: K,) -> Self
    where
        K: Into<String,>,
    {
        Self::InvalidOpenGraphType {
            kind: kind.into(),
        }
    }

    /// Constructs an [`Error::InvalidTwitterCard`] for the supplied card.
    pub fn invalid_twitter_card<C,>(card: C,) -> Self
    where
        C: Into<String,>,
    {
        Self::InvalidTwitterCard {
            card: card.into(),
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation
    /// and is what the CLI prints before exiting.
    pub fn to_display_string(&self,) -> String
    {
        format!("{self}")
    }
}

impl From<serde_yaml::Error,> for Error
{
    fn from(source: serde_yaml::Error,) -> Self
    {
        Self::Parse {
            source,
        }
    }
}

impl From<serde_json::Error,> for Error
{
    fn from(source: serde_json::Error,) -> Self
    {
        Self::Serialize {
            source,
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the document that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error,) -> Error
{
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests
{
    use std::path::Path;

    use super::{Error, io_error};

    #[test]
    fn open_graph_type_error_names_the_offending_type()
    {
        let error = Error::invalid_open_graph_type("video.short",);
        assert_eq!(error.to_display_string(), "Invalid OpenGraph type: video.short");
    }

    #[test]
    fn twitter_card_error_names_the_offending_card()
    {
        let error = Error::invalid_twitter_card("gallery",);
        assert_eq!(error.to_display_string(), "Invalid Twitter card: gallery");
    }

    #[test]
    fn io_error_captures_path()
    {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing",);
        let error = io_error(Path::new("/tmp/page.yaml",), source,);
        match &error {
            Error::Io {
                path, ..
            } => assert_eq!(path, Path::new("/tmp/page.yaml")),
            other => panic!("expected io error, got {other:?}"),
        }
        assert!(error.to_display_string().contains("missing"));
    }

    #[test]
    fn serde_errors_convert_into_dedicated_variants()
    {
        let yaml = serde_yaml::from_str::<u8,>("[",).expect_err("expected yaml error",);
        assert!(matches!(Error::from(yaml), Error::Parse { .. }));

        let json = serde_json::from_str::<u8,>("[",).expect_err("expected json error",);
        assert!(matches!(Error::from(json), Error::Serialize { .. }));
    }

    #[test]
    fn base_url_error_mentions_value()
    {
        let source = url::Url::parse("not a url",).expect_err("expected parse failure",);
        let error = Error::InvalidBaseUrl {
            value: "not a url".to_owned(),
            source,
        };
        assert!(error.to_display_string().contains("not a url"));
    }
}
