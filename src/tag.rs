// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Output descriptors and the helpers that decide whether a tag is emitted.
//!
//! A tag is emitted only when its content is truthy: empty strings, zero,
//! and `false` suppress it. Numeric fields of descriptor objects are turned
//! into strings first, so a width of `0` still yields `"0"`.

use serde::Serialize;

use crate::{
    input::{
        ActorReference, AppLinkAndroid, AppLinkApple, AppLinkWeb, AppLinkWindows,
        MediaDescriptor, MusicReference, UrlOr,
    },
    value::Scalar,
};

/// Prefixes whose descriptor `url` key maps onto the bare prefix.
const URL_ALIASED_PREFIXES: [&str; 4] = ["og:image", "twitter:image", "og:video", "og:audio",];

/// A `<meta>` element description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize,)]
#[serde(untagged)]
pub enum MetaTag
{
    /// `<meta charSet>`.
    CharSet {
        #[serde(rename = "charSet")]
        char_set: String,
    },
    /// Document title.
    Title {
        title: String,
    },
    /// `<meta name content>`.
    Name {
        name:    String,
        #[serde(skip_serializing_if = "Option::is_none")]
        media:   Option<String,>,
        content: String,
    },
    /// `<meta property content>`.
    Property {
        property: String,
        content:  String,
    },
}

/// Attribute used to key a meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
pub enum TagKind
{
    Name,
    Property,
}

impl MetaTag
{
    /// Builds a tag keyed by `kind`, or `None` when the content is empty.
    pub fn keyed<K: Into<String,>,>(kind: TagKind, key: K, content: Option<String,>,) -> Option<Self,>
    {
        let content = content.filter(|content| !content.is_empty(),)?;
        Some(match kind {
            TagKind::Name => Self::Name {
                name: key.into(),
                media: None,
                content,
            },
            TagKind::Property => Self::Property {
                property: key.into(),
                content,
            },
        },)
    }

    /// `<meta name>` with non-empty content.
    pub fn name<K: Into<String,>,>(name: K, content: Option<String,>,) -> Option<Self,>
    {
        Self::keyed(TagKind::Name, name, content,)
    }

    /// `<meta property>` with non-empty content.
    pub fn property<K: Into<String,>,>(property: K, content: Option<String,>,) -> Option<Self,>
    {
        Self::keyed(TagKind::Property, property, content,)
    }

    /// `<meta name media>` with non-empty content.
    pub fn name_with_media<K: Into<String,>,>(
        name: K,
        media: Option<String,>,
        content: Option<String,>,
    ) -> Option<Self,>
    {
        let content = content.filter(|content| !content.is_empty(),)?;
        Some(Self::Name {
            name: name.into(),
            media,
            content,
        },)
    }

    /// The `name` or `property` key, when the tag has one.
    pub fn key(&self,) -> Option<&str,>
    {
        match self {
            Self::Name {
                name, ..
            } => Some(name,),
            Self::Property {
                property, ..
            } => Some(property,),
            Self::CharSet {
                ..
            }
            | Self::Title {
                ..
            } => None,
        }
    }

    /// The emitted content value.
    pub fn content(&self,) -> &str
    {
        match self {
            Self::CharSet {
                char_set,
            } => char_set,
            Self::Title {
                title,
            } => title,
            Self::Name {
                content, ..
            }
            | Self::Property {
                content, ..
            } => content,
        }
    }
}

/// A `<link>` element description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct LinkTag
{
    pub rel:       String,
    pub href:      String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href_lang: Option<String,>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media:     Option<String,>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String,>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes:     Option<String,>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title:     Option<String,>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color:     Option<String,>,
}

impl LinkTag
{
    /// Builds a link, or `None` when `href` is missing or empty.
    pub fn new<R: Into<String,>,>(rel: R, href: Option<&str,>,) -> Option<Self,>
    {
        let href = href.filter(|href| !href.is_empty(),)?;
        Some(Self {
            rel: rel.into(),
            href: href.to_owned(),
            ..Self::default()
        },)
    }
}

/// Ordered output of the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct GeneratedMetadata
{
    pub meta:  Vec<MetaTag,>,
    pub links: Vec<LinkTag,>,
}

/// Returns non-empty text.
pub(crate) fn text(value: Option<&String,>,) -> Option<String,>
{
    value.filter(|value| !value.is_empty(),).cloned()
}

/// Returns the rendered scalar when it is truthy.
pub(crate) fn truthy(value: Option<&Scalar,>,) -> Option<String,>
{
    value.filter(|value| !value.is_falsy(),).map(Scalar::to_content,)
}

/// Renders the scalar first and keeps any non-empty result, so `0` and
/// `false` survive as `"0"` and `"false"`.
pub(crate) fn stringified(value: Option<&Scalar,>,) -> Option<String,>
{
    value.map(Scalar::to_content,).filter(|value| !value.is_empty(),)
}

/// Descriptor objects expanded into `prefix:key` tags.
pub(crate) trait Descriptor
{
    /// Keys in emission order with their stringified values.
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>;
}

/// Values accepted by [`multi_meta`].
pub(crate) trait MultiContent
{
    fn expand(&self, kind: TagKind, prefix: &str,) -> Vec<MetaTag,>;
}

fn meta_key(prefix: &str, key: &str,) -> String
{
    if key == "url" && URL_ALIASED_PREFIXES.contains(&prefix,) {
        prefix.to_owned()
    } else {
        format!("{prefix}:{key}")
    }
}

fn expand_descriptor<D: Descriptor + ?Sized,>(descriptor: &D, kind: TagKind, prefix: &str,) -> Vec<MetaTag,>
{
    descriptor
        .entries()
        .into_iter()
        .filter_map(|(key, value,)| MetaTag::keyed(kind, meta_key(prefix, key,), value,),)
        .collect()
}

impl MultiContent for String
{
    fn expand(&self, kind: TagKind, prefix: &str,) -> Vec<MetaTag,>
    {
        MetaTag::keyed(kind, prefix, text(Some(self,),),).into_iter().collect()
    }
}

impl MultiContent for Scalar
{
    fn expand(&self, kind: TagKind, prefix: &str,) -> Vec<MetaTag,>
    {
        MetaTag::keyed(kind, prefix, truthy(Some(self,),),).into_iter().collect()
    }
}

impl<D: Descriptor,> MultiContent for UrlOr<D,>
{
    fn expand(&self, kind: TagKind, prefix: &str,) -> Vec<MetaTag,>
    {
        match self {
            UrlOr::Url(url,) => url.expand(kind, prefix,),
            UrlOr::Descriptor(descriptor,) => expand_descriptor(descriptor, kind, prefix,),
        }
    }
}

macro_rules! descriptor_content {
    ($($descriptor:ty),+ $(,)?) => {
        $(
            impl MultiContent for $descriptor
            {
                fn expand(&self, kind: TagKind, prefix: &str,) -> Vec<MetaTag,>
                {
                    expand_descriptor(self, kind, prefix,)
                }
            }
        )+
    };
}

descriptor_content!(MediaDescriptor, AppLinkApple, AppLinkAndroid, AppLinkWindows, AppLinkWeb);

/// Expands every value into tags under `prefix`.
///
/// Primitive values produce a single tag keyed by the prefix itself.
/// Descriptor values produce one tag per present key, keyed
/// `prefix:key`, except that `url` maps onto the bare prefix for image,
/// video, and audio prefixes.
pub(crate) fn multi_meta<C: MultiContent,>(kind: TagKind, prefix: &str, contents: Option<&[C],>,) -> Vec<MetaTag,>
{
    contents
        .unwrap_or_default()
        .iter()
        .flat_map(|content| content.expand(kind, prefix,),)
        .collect()
}

impl Descriptor for MediaDescriptor
{
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>
    {
        vec![
            ("url", Some(self.url.clone(),),),
            ("secure_url", self.secure_url.clone(),),
            ("type", self.mime_type.clone(),),
            ("width", stringified(self.width.as_ref(),),),
            ("height", stringified(self.height.as_ref(),),),
            ("alt", self.alt.clone(),),
        ]
    }
}

impl Descriptor for MusicReference
{
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>
    {
        vec![
            ("url", Some(self.url.clone(),),),
            ("disc", stringified(self.disc.as_ref(),),),
            ("track", stringified(self.track.as_ref(),),),
        ]
    }
}

impl Descriptor for ActorReference
{
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>
    {
        vec![("url", Some(self.url.clone(),),), ("role", self.role.clone(),)]
    }
}

impl Descriptor for AppLinkApple
{
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>
    {
        vec![
            ("url", self.url.clone(),),
            ("app_store_id", stringified(self.app_store_id.as_ref(),),),
            ("app_name", self.app_name.clone(),),
        ]
    }
}

impl Descriptor for AppLinkAndroid
{
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>
    {
        vec![
            ("package", self.package.clone(),),
            ("url", self.url.clone(),),
            ("class", self.class.clone(),),
            ("app_name", self.app_name.clone(),),
        ]
    }
}

impl Descriptor for AppLinkWindows
{
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>
    {
        vec![
            ("url", self.url.clone(),),
            ("app_id", stringified(self.app_id.as_ref(),),),
            ("app_name", self.app_name.clone(),),
        ]
    }
}

impl Descriptor for AppLinkWeb
{
    fn entries(&self,) -> Vec<(&'static str, Option<String,>,),>
    {
        vec![
            ("url", self.url.clone(),),
            ("should_fallback", self.should_fallback.map(|flag| flag.to_string(),),),
        ]
    }
}

#[cfg(test)]
mod tests
{
    use super::{LinkTag, MetaTag, TagKind, multi_meta, stringified, truthy};
    use crate::{
        input::{AppLinkWeb, MediaDescriptor, UrlOr},
        value::Scalar,
    };

    #[test]
    fn empty_content_suppresses_tag()
    {
        assert_eq!(MetaTag::name("description", Some(String::new(),),), None);
        assert_eq!(MetaTag::property("og:title", None,), None);
        assert!(MetaTag::name("description", Some("x".to_owned(),),).is_some());
    }

    #[test]
    fn link_requires_href()
    {
        assert_eq!(LinkTag::new("manifest", Some("",),), None);
        assert_eq!(LinkTag::new("manifest", None,), None);
        assert_eq!(LinkTag::new("manifest", Some("/m.json",),).map(|link| link.href), Some("/m.json".to_owned()));
    }

    #[test]
    fn truthiness_differs_from_stringified()
    {
        let zero = Scalar::Number(0.0,);
        assert_eq!(truthy(Some(&zero,),), None);
        assert_eq!(stringified(Some(&zero,),).as_deref(), Some("0"));
        assert_eq!(stringified(Some(&Scalar::Bool(false,),),).as_deref(), Some("false"));
    }

    #[test]
    fn image_descriptor_url_maps_to_bare_prefix()
    {
        let image = UrlOr::Descriptor(MediaDescriptor {
            url: "https://img.com/a.png".to_owned(),
            width: Some(Scalar::Number(0.0,),),
            alt: Some(String::new(),),
            ..MediaDescriptor::default()
        },);

        let tags = multi_meta(TagKind::Property, "og:image", Some(&[image][..],),);
        assert_eq!(tags, vec![
            MetaTag::Property {
                property: "og:image".to_owned(),
                content:  "https://img.com/a.png".to_owned(),
            },
            MetaTag::Property {
                property: "og:image:width".to_owned(),
                content:  "0".to_owned(),
            },
        ]);
    }

    #[test]
    fn other_prefixes_keep_url_key()
    {
        let web = AppLinkWeb {
            url: Some("https://example.com".to_owned(),),
            should_fallback: Some(false,),
        };
        let tags = multi_meta(TagKind::Property, "al:web", Some(&[web][..],),);
        let keys: Vec<_,> = tags.iter().filter_map(MetaTag::key,).collect();
        assert_eq!(keys, vec!["al:web:url", "al:web:should_fallback"]);
        assert_eq!(tags[1].content(), "false");
    }

    #[test]
    fn primitive_values_use_prefix()
    {
        let values = vec!["a@b.c".to_owned(), String::new()];
        let tags = multi_meta(TagKind::Property, "og:email", Some(values.as_slice(),),);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key(), Some("og:email"));
    }

    #[test]
    fn serializes_with_attribute_names()
    {
        let tag = MetaTag::CharSet {
            char_set: "utf-8".to_owned(),
        };
        assert_eq!(serde_json::to_string(&tag,).expect("expected json",), r#"{"charSet":"utf-8"}"#);

        let link = LinkTag {
            href_lang: Some("fr".to_owned(),),
            ..LinkTag::new("alternate", Some("/fr",),).expect("expected link",)
        };
        assert_eq!(
            serde_json::to_string(&link,).expect("expected json",),
            r#"{"rel":"alternate","href":"/fr","hrefLang":"fr"}"#
        );
    }
}
