// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{
    normalized::NormalizedMetadata,
    tag::{MetaTag, TagKind, multi_meta},
};

/// `al:*` deep-link tags, one block per platform.
pub fn generate_app_links(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(links,) = &metadata.app_links else {
        return Vec::new();
    };

    let mut tags = multi_meta(TagKind::Property, "al:ios", links.ios.as_deref(),);
    tags.extend(multi_meta(TagKind::Property, "al:iphone", links.iphone.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "al:ipad", links.ipad.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "al:android", links.android.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "al:windows_phone", links.windows_phone.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "al:windows", links.windows.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "al:windows_universal", links.windows_universal.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "al:web", links.web.as_deref(),),);
    tags
}
