// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;

use crate::{
    input::AlternateLink,
    normalized::NormalizedMetadata,
    tag::LinkTag,
};

fn alternate(link: &AlternateLink, rel: &str,) -> Option<LinkTag,>
{
    Some(LinkTag {
        title: link.title.clone(),
        ..LinkTag::new(rel, Some(link.url.as_str(),),)?
    },)
}

fn keyed_links<F,>(map: Option<&IndexMap<String, Vec<AlternateLink,>,>,>, attach: F,) -> Vec<LinkTag,>
where
    F: Fn(LinkTag, &str,) -> LinkTag,
{
    map.into_iter()
        .flatten()
        .flat_map(|(key, links,)| {
            links
                .iter()
                .filter_map(|link| alternate(link, "alternate",),)
                .map(|tag| attach(tag, key.as_str(),),)
                .collect::<Vec<_,>>()
        },)
        .collect()
}

/// Canonical link first, then language, media, and type alternates.
pub fn generate_alternates(metadata: &NormalizedMetadata,) -> Vec<LinkTag,>
{
    let Some(alternates,) = &metadata.alternates else {
        return Vec::new();
    };

    let mut links: Vec<LinkTag,> =
        alternates.canonical.as_ref().and_then(|canonical| alternate(canonical, "canonical",),).into_iter().collect();
    links.extend(keyed_links(alternates.languages.as_ref(), |tag, lang| LinkTag {
        href_lang: Some(lang.to_owned(),),
        ..tag
    },),);
    links.extend(keyed_links(alternates.media.as_ref(), |tag, media| LinkTag {
        media: Some(media.to_owned(),),
        ..tag
    },),);
    links.extend(keyed_links(alternates.types.as_ref(), |tag, mime_type| LinkTag {
        mime_type: Some(mime_type.to_owned(),),
        ..tag
    },),);
    links
}
