// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Aggregation of the section generators and the top-level entry points.
//!
//! [`generate_metadata`] normalizes a page description and concatenates the
//! generator outputs in a fixed order. [`MetadataGenerator`] additionally
//! applies a site-wide title template and resolves relative URLs against a
//! base before delegating to it.

use tracing::debug;
use url::Url;

use crate::{
    error::Error,
    generate::{
        generate_alternates, generate_app_links, generate_apple_web_app_links, generate_apple_web_app_meta,
        generate_basic_links, generate_basic_meta, generate_facebook, generate_format_detection, generate_icons,
        generate_itunes, generate_open_graph, generate_pinterest, generate_twitter, generate_verification,
    },
    input::{InputMetadata, Title},
    normalize::normalize,
    normalized::NormalizedMetadata,
    resolve::resolve_metadata,
    tag::{GeneratedMetadata, LinkTag, MetaTag},
    title::{TitleTemplate, resolve_title},
    urls::parse_base_url,
};

/// Meta tags of every section, in emission order.
pub fn meta(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    [
        generate_basic_meta(metadata,),
        generate_itunes(metadata,),
        generate_facebook(metadata,),
        generate_pinterest(metadata,),
        generate_format_detection(metadata,),
        generate_verification(metadata,),
        generate_apple_web_app_meta(metadata,),
        generate_open_graph(metadata,),
        generate_twitter(metadata,),
        generate_app_links(metadata,),
    ]
    .concat()
}

/// Link tags of every section, in emission order.
pub fn links(metadata: &NormalizedMetadata,) -> Vec<LinkTag,>
{
    [
        generate_basic_links(metadata,),
        generate_alternates(metadata,),
        generate_apple_web_app_links(metadata,),
        generate_icons(metadata,),
    ]
    .concat()
}

/// Normalizes `metadata` and emits its ordered meta and link tags.
///
/// # Errors
///
/// Propagates [`Error::InvalidOpenGraphType`] and
/// [`Error::InvalidTwitterCard`] from normalization; no partial output is
/// produced in that case.
///
/// # Examples
///
/// ```
/// use headmeta::{InputMetadata, generate_metadata};
///
/// let input = InputMetadata {
///     description: Some("Landing page".to_owned()),
///     manifest: Some("/manifest.json".to_owned()),
///     ..InputMetadata::default()
/// };
/// let generated = generate_metadata(&input).expect("valid metadata");
/// assert_eq!(generated.meta.len(), 1);
/// assert_eq!(generated.links[0].rel, "manifest");
/// ```
pub fn generate_metadata(metadata: &InputMetadata,) -> Result<GeneratedMetadata, Error,>
{
    let normalized = normalize(metadata,)?;
    let generated = GeneratedMetadata {
        meta:  meta(&normalized,),
        links: links(&normalized,),
    };
    debug!(meta = generated.meta.len(), links = generated.links.len(), "generated head tags");
    Ok(generated,)
}

/// Settings shared by every page compiled with one [`MetadataGenerator`].
#[derive(Debug, Clone, Default,)]
pub struct GeneratorOptions
{
    /// Template applied to page titles.
    pub title_template: Option<TitleTemplate,>,
    /// Base against which relative URLs are resolved.
    pub base_url:       Option<Url,>,
}

/// Configured entry point that applies title templating and base-URL
/// resolution before generation.
///
/// The generator holds no per-call state and can be shared across threads.
///
/// # Examples
///
/// ```
/// use headmeta::{InputMetadata, MetadataGenerator, Title, TitleTemplate};
///
/// let generator = MetadataGenerator::builder()
///     .title_template(TitleTemplate::new("Site", "%s | Site"))
///     .base_url("https://example.com")
///     .build()
///     .expect("valid base URL");
///
/// let page = InputMetadata {
///     title: Some(Title::Text("About".to_owned())),
///     manifest: Some("/manifest.json".to_owned()),
///     ..InputMetadata::default()
/// };
/// let generated = generator.generate(&page).expect("valid metadata");
/// assert_eq!(generated.meta[0].content(), "About | Site");
/// assert_eq!(generated.links[0].href, "https://example.com/manifest.json");
/// ```
#[derive(Debug, Clone, Default,)]
pub struct MetadataGenerator
{
    options: GeneratorOptions,
}

impl MetadataGenerator
{
    /// Creates a generator from prepared options.
    pub fn new(options: GeneratorOptions,) -> Self
    {
        Self {
            options,
        }
    }

    /// Starts configuring a generator.
    pub fn builder() -> MetadataGeneratorBuilder
    {
        MetadataGeneratorBuilder::default()
    }

    pub fn options(&self,) -> &GeneratorOptions
    {
        &self.options
    }

    /// Resolves the title and URLs of `metadata`, then generates its tags.
    ///
    /// URL leaves that cannot be joined against the base are dropped
    /// individually and never fail the call.
    ///
    /// # Errors
    ///
    /// Same as [`generate_metadata`].
    pub fn generate(&self, metadata: &InputMetadata,) -> Result<GeneratedMetadata, Error,>
    {
        let mut resolved = resolve_metadata(metadata, self.options.base_url.as_ref(),);
        resolved.title =
            resolve_title(metadata.title.as_ref(), self.options.title_template.as_ref(),).map(Title::Text,);
        generate_metadata(&resolved,)
    }
}

/// Builder for [`MetadataGenerator`].
#[derive(Debug, Clone, Default,)]
pub struct MetadataGeneratorBuilder
{
    title_template: Option<TitleTemplate,>,
    base_url:       Option<String,>,
}

impl MetadataGeneratorBuilder
{
    /// Sets the title template.
    pub fn title_template(mut self, template: TitleTemplate,) -> Self
    {
        self.title_template = Some(template,);
        self
    }

    /// Sets the base URL; parsed when [`build`](Self::build) is called.
    pub fn base_url<U: Into<String,>,>(mut self, base_url: U,) -> Self
    {
        self.base_url = Some(base_url.into(),);
        self
    }

    /// Validates the configuration and creates the generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBaseUrl`] when the base URL is not an
    /// absolute URL.
    pub fn build(self,) -> Result<MetadataGenerator, Error,>
    {
        let base_url = self.base_url.as_deref().map(parse_base_url,).transpose()?;
        Ok(MetadataGenerator::new(GeneratorOptions {
            title_template: self.title_template,
            base_url,
        },),)
    }
}
