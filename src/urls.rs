// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! URL helpers built on the WHATWG parser from the `url` crate.

use url::Url;

use crate::error::Error;

/// Resolves a possibly relative value against the base URL.
///
/// Values already starting with `http://` or `https://` are returned
/// byte-for-byte without normalization. Everything else, including
/// protocol-relative values such as `//cdn.example.com/a.png`, is joined onto
/// `base` using standard URL resolution.
///
/// # Errors
///
/// Returns [`Error::UrlJoin`] when the value cannot be joined onto the base.
///
/// # Examples
///
/// ```
/// use headmeta::{parse_base_url, resolve_url};
///
/// let base = parse_base_url("https://example.com").expect("valid base");
/// assert_eq!(resolve_url("/og.png", &base).expect("joined"), "https://example.com/og.png");
/// assert_eq!(resolve_url("http://a.test/x", &base).expect("kept"), "http://a.test/x");
/// ```
pub fn resolve_url(value: &str, base: &Url,) -> Result<String, Error,>
{
    if value.starts_with("http://",) || value.starts_with("https://",) {
        return Ok(value.to_owned(),);
    }

    base.join(value,).map(String::from,).map_err(|source| Error::UrlJoin {
        value: value.to_owned(),
        source,
    },)
}

/// Parses the base URL used by the generator.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] when `value` is not an absolute URL.
pub fn parse_base_url(value: &str,) -> Result<Url, Error,>
{
    Url::parse(value,).map_err(|source| Error::InvalidBaseUrl {
        value: value.to_owned(),
        source,
    },)
}

/// Parses `value` as an absolute URL and returns its serialized form.
///
/// Relative and malformed values yield `None`.
pub(crate) fn absolute_url(value: &str,) -> Option<String,>
{
    Url::parse(value,).ok().map(String::from,)
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{absolute_url, parse_base_url, resolve_url};
    use crate::error::Error;

    fn base() -> url::Url
    {
        parse_base_url("https://example.com/blog/",).expect("expected valid base",)
    }

    #[test]
    fn joins_root_relative_paths()
    {
        let resolved = resolve_url("/og.png", &base(),).expect("expected join",);
        assert_eq!(resolved, "https://example.com/og.png");
    }

    #[test]
    fn joins_document_relative_paths()
    {
        let resolved = resolve_url("post.png", &base(),).expect("expected join",);
        assert_eq!(resolved, "https://example.com/blog/post.png");
    }

    #[test]
    fn protocol_relative_values_inherit_scheme()
    {
        let resolved = resolve_url("//cdn.example.com/a.png", &base(),).expect("expected join",);
        assert_eq!(resolved, "https://cdn.example.com/a.png");
    }

    #[test]
    fn absolute_values_are_not_normalized()
    {
        let raw = "https://Example.com/a/../b.png";
        assert_eq!(resolve_url(raw, &base(),).expect("expected passthrough",), raw);
    }

    #[test]
    fn malformed_values_report_join_errors()
    {
        let error = resolve_url("//[broken", &base(),).expect_err("expected join failure",);
        assert!(matches!(error, Error::UrlJoin { .. }));
    }

    #[test]
    fn base_must_be_absolute()
    {
        let error = parse_base_url("/relative",).expect_err("expected invalid base",);
        assert!(matches!(error, Error::InvalidBaseUrl { .. }));
    }

    #[test]
    fn absolute_url_rejects_relative_values()
    {
        assert_eq!(absolute_url("invalid-url",), None);
        assert_eq!(absolute_url("",), None);
        assert_eq!(absolute_url("https://img.com/a.png",), Some("https://img.com/a.png".to_owned()));
        assert_eq!(absolute_url("https://img.com",), Some("https://img.com/".to_owned()));
    }

    proptest! {
        #[test]
        fn root_relative_paths_land_on_base_origin(segment in "[a-z0-9]{1,12}") {
            let resolved = resolve_url(&format!("/{segment}"), &base()).expect("expected join");
            prop_assert_eq!(resolved, format!("https://example.com/{segment}"));
        }

        #[test]
        fn http_values_pass_through(path in "[A-Za-z0-9/._-]{0,24}") {
            let raw = format!("http://site.test{path}");
            prop_assert_eq!(resolve_url(&raw, &base()).expect("expected passthrough"), raw);
        }
    }
}
