// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{
    input::IconDescriptor,
    normalize::ICON_REL,
    normalized::NormalizedMetadata,
    tag::LinkTag,
};

fn icon_link(icon: &IconDescriptor,) -> Option<LinkTag,>
{
    let rel = icon.rel.as_deref().filter(|rel| !rel.is_empty(),).unwrap_or(ICON_REL,);
    Some(LinkTag {
        mime_type: icon.mime_type.clone(),
        sizes: icon.sizes.clone(),
        color: icon.color.clone(),
        media: icon.media.clone(),
        ..LinkTag::new(rel, Some(icon.url.as_str(),),)?
    },)
}

/// Icon links in bucket order: shortcut, icon, apple, other.
pub fn generate_icons(metadata: &NormalizedMetadata,) -> Vec<LinkTag,>
{
    let Some(icons,) = &metadata.icons else {
        return Vec::new();
    };

    [&icons.shortcut, &icons.icon, &icons.apple, &icons.other,]
        .into_iter()
        .flatten()
        .filter_map(icon_link,)
        .collect()
}
