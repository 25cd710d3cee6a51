// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{
    input::{IconDescriptor, Icons, UrlOr},
    normalized::NormalizedIcons,
    value::OneOrMany,
};

pub(crate) const ICON_REL: &str = "icon";
pub(crate) const SHORTCUT_REL: &str = "shortcut icon";
pub(crate) const APPLE_REL: &str = "apple-touch-icon";

/// Sorts icon declarations into buckets and fills in each bucket's `rel`.
///
/// A single icon or a bare list lands in the `icon` bucket. Descriptors
/// that carry their own `rel` keep it.
pub(super) fn normalize_icons(icons: &Icons,) -> NormalizedIcons
{
    match icons {
        Icons::One(icon,) => NormalizedIcons {
            icon: vec![icon_descriptor(icon, ICON_REL,)],
            ..NormalizedIcons::default()
        },
        Icons::Many(list,) => NormalizedIcons {
            icon: list.iter().map(|icon| icon_descriptor(icon, ICON_REL,),).collect(),
            ..NormalizedIcons::default()
        },
        Icons::Buckets(buckets,) => NormalizedIcons {
            icon:     bucket(buckets.icon.as_ref(), ICON_REL,),
            shortcut: bucket(buckets.shortcut.as_ref(), SHORTCUT_REL,),
            apple:    bucket(buckets.apple.as_ref(), APPLE_REL,),
            other:    buckets
                .other
                .iter()
                .flat_map(OneOrMany::iter,)
                .map(|icon| with_rel(icon.clone(), ICON_REL,),)
                .collect(),
        },
    }
}

fn bucket(icons: Option<&OneOrMany<UrlOr<IconDescriptor,>,>,>, rel: &str,) -> Vec<IconDescriptor,>
{
    icons.into_iter().flat_map(OneOrMany::iter,).map(|icon| icon_descriptor(icon, rel,),).collect()
}

fn icon_descriptor(icon: &UrlOr<IconDescriptor,>, rel: &str,) -> IconDescriptor
{
    match icon {
        UrlOr::Url(url,) => with_rel(IconDescriptor::from_url(url.clone(),), rel,),
        UrlOr::Descriptor(descriptor,) => with_rel(descriptor.clone(), rel,),
    }
}

fn with_rel(mut icon: IconDescriptor, rel: &str,) -> IconDescriptor
{
    if icon.rel.as_deref().is_none_or(str::is_empty,) {
        icon.rel = Some(rel.to_owned(),);
    }
    icon
}

#[cfg(test)]
mod tests
{
    use super::normalize_icons;
    use crate::{
        input::{IconBuckets, IconDescriptor, Icons, UrlOr},
        value::OneOrMany,
    };

    #[test]
    fn single_icon_lands_in_icon_bucket()
    {
        let icons = normalize_icons(&Icons::One(UrlOr::Url("/favicon.ico".to_owned(),),),);
        assert_eq!(icons.icon.len(), 1);
        assert_eq!(icons.icon[0].rel.as_deref(), Some("icon"));
        assert!(icons.apple.is_empty() && icons.shortcut.is_empty() && icons.other.is_empty());
    }

    #[test]
    fn buckets_get_default_rel_unless_overridden()
    {
        let buckets = IconBuckets {
            shortcut: Some(OneOrMany::One(UrlOr::Url("/s.png".to_owned(),),),),
            apple: Some(OneOrMany::Many(vec![UrlOr::Descriptor(IconDescriptor {
                url: "/a.png".to_owned(),
                rel: Some("apple-touch-icon-precomposed".to_owned(),),
                sizes: Some("180x180".to_owned(),),
                ..IconDescriptor::default()
            },)],),),
            other: Some(OneOrMany::One(IconDescriptor {
                url: "/mask.svg".to_owned(),
                rel: Some("mask-icon".to_owned(),),
                ..IconDescriptor::default()
            },),),
            ..IconBuckets::default()
        };

        let icons = normalize_icons(&Icons::Buckets(buckets,),);
        assert_eq!(icons.shortcut[0].rel.as_deref(), Some("shortcut icon"));
        assert_eq!(icons.apple[0].rel.as_deref(), Some("apple-touch-icon-precomposed"));
        assert_eq!(icons.apple[0].sizes.as_deref(), Some("180x180"));
        assert_eq!(icons.other[0].rel.as_deref(), Some("mask-icon"));
        assert!(icons.icon.is_empty());
    }

    #[test]
    fn empty_buckets_stay_empty()
    {
        let icons = normalize_icons(&Icons::Buckets(IconBuckets::default(),),);
        assert!(icons.is_empty());
    }
}
