//! Compiler from page metadata descriptions into document-head tags.
//!
//! A page description ([`InputMetadata`]) is normalized into a canonical
//! shape, optionally resolved against a base URL, and expanded into two
//! ordered lists: `<meta>` descriptors and `<link>` descriptors. Every stage
//! is a pure function of its input, so the same description always yields
//! the same tags in the same order.
//!
//! ```
//! use headmeta::{InputMetadata, MetaTag, generate_metadata};
//!
//! let page: InputMetadata = serde_yaml::from_str(
//!     "description: Landing page\nopenGraph: {type: website, title: Home}",
//! )
//! .expect("valid document");
//!
//! let generated = generate_metadata(&page).expect("valid metadata");
//! let keys: Vec<_> = generated.meta.iter().filter_map(MetaTag::key).collect();
//! assert_eq!(keys, ["description", "og:title", "og:type"]);
//! ```

mod document;
mod error;
pub mod generate;
pub mod input;
mod normalize;
pub mod normalized;
mod pipeline;
pub mod resolve;
mod tag;
mod title;
mod urls;
mod value;

pub use document::{load_metadata, parse_metadata};
pub use error::{Error, io_error};
pub use input::{InputMetadata, Title, UrlOr};
pub use normalize::normalize;
pub use normalized::NormalizedMetadata;
pub use pipeline::{GeneratorOptions, MetadataGenerator, MetadataGeneratorBuilder, generate_metadata, links, meta};
pub use resolve::resolve_metadata;
pub use tag::{GeneratedMetadata, LinkTag, MetaTag, TagKind};
pub use title::{TITLE_PLACEHOLDER, TemplateFormat, TitleTemplate, resolve_title};
pub use urls::{parse_base_url, resolve_url};
pub use value::{OneOrMany, Scalar, format_number, wrap_as_array};
