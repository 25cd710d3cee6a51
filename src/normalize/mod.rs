// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Transformation of author-facing metadata into the canonical shape.
//!
//! Normalization coerces single-or-list fields into vectors, parses the Open
//! Graph `type` and Twitter `card` into closed variants, validates images,
//! and renders derived strings such as robots directives and the viewport
//! layout. It performs no URL resolution against a base; that happens before
//! normalization in [`crate::resolve`].

mod basic;
mod icons;
mod media;
mod opengraph;
mod twitter;
mod viewport;

pub(crate) use icons::ICON_REL;

use crate::{
    error::Error,
    input::InputMetadata,
    normalized::NormalizedMetadata,
    value::{non_empty, wrap_as_array},
};

/// Normalizes author-facing metadata.
///
/// Fields that are absent stay absent; present fields are coerced into their
/// canonical shape. Normalizing the result of
/// [`NormalizedMetadata::to_input`] reproduces the same value.
///
/// # Errors
///
/// Returns [`Error::InvalidOpenGraphType`] or [`Error::InvalidTwitterCard`]
/// when a discriminant is outside its vocabulary.
///
/// # Examples
///
/// ```
/// use headmeta::{InputMetadata, OneOrMany, normalize};
///
/// let input = InputMetadata {
///     keywords: Some(OneOrMany::One("rust".to_owned())),
///     ..InputMetadata::default()
/// };
/// let normalized = normalize(&input).expect("valid metadata");
/// assert_eq!(normalized.keywords, Some(vec!["rust".to_owned()]));
/// ```
pub fn normalize(metadata: &InputMetadata,) -> Result<NormalizedMetadata, Error,>
{
    let open_graph = metadata.open_graph.as_ref().map(opengraph::normalize_open_graph,).transpose()?;
    let twitter = metadata.twitter.as_ref().map(twitter::normalize_twitter,).transpose()?;

    Ok(NormalizedMetadata {
        char_set: metadata.char_set.clone(),
        title: metadata.title.as_ref().map(basic::normalize_title,),
        description: metadata.description.clone(),
        application_name: metadata.application_name.clone(),
        authors: wrap_as_array(metadata.authors.as_ref(),),
        manifest: metadata.manifest.clone(),
        generator: metadata.generator.clone(),
        keywords: wrap_as_array(metadata.keywords.as_ref(),),
        referrer: metadata.referrer.clone(),
        creator: metadata.creator.clone(),
        publisher: metadata.publisher.clone(),
        robots: metadata.robots.as_ref().and_then(basic::normalize_robots,),
        abstract_text: metadata.abstract_text.clone(),
        archives: wrap_as_array(metadata.archives.as_ref(),),
        assets: wrap_as_array(metadata.assets.as_ref(),),
        bookmarks: wrap_as_array(metadata.bookmarks.as_ref(),),
        pagination: metadata.pagination.clone(),
        category: non_empty(metadata.category.as_ref(),),
        classification: non_empty(metadata.classification.as_ref(),),
        other: metadata.other.as_ref().map(basic::normalize_other,),
        alternates: metadata.alternates.as_ref().map(basic::normalize_alternates,),
        itunes: metadata.itunes.clone(),
        facebook: metadata.facebook.as_ref().map(basic::normalize_facebook,),
        pinterest: metadata.pinterest.clone(),
        format_detection: metadata.format_detection.clone(),
        verification: metadata.verification.as_ref().map(basic::normalize_verification,),
        apple_web_app: metadata.apple_web_app.as_ref().and_then(basic::normalize_apple_web_app,),
        open_graph,
        twitter,
        app_links: metadata.app_links.as_ref().map(basic::normalize_app_links,),
        icons: metadata.icons.as_ref().map(icons::normalize_icons,),
        viewport: metadata.viewport.as_ref().map(viewport::normalize_viewport,),
    },)
}
