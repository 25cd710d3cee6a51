// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Base URL resolution for every URL-bearing field of the input model.
//!
//! Each resolver reads one field of [`InputMetadata`] and returns it with
//! relative URLs joined onto the base. Without a base the field is returned
//! borrowed and untouched. Resolution keeps the shape of the field: a single
//! value stays single, a list stays a list, a keyed map keeps its keys.
//!
//! Leaves that fail to resolve are dropped together with the smallest
//! enclosing unit that cannot exist without them: a list element, a map
//! value, or just the sub-field when the surrounding object still makes
//! sense. Empty strings are left as they are.

use std::borrow::Cow;

use tracing::debug;
use url::Url;

use crate::{
    input::{
        ActorReference, AlternateLink, AlternateMap, AlternateValue, Alternates, AppLinks,
        AppleWebApp, AppleWebAppConfig, Author, IconBuckets, IconDescriptor, Icons,
        InputMetadata, MediaDescriptor, MusicReference, OpenGraph, Pagination, StartupImage,
        Twitter, TwitterAppUrls, TwitterPlayer, UrlOr,
    },
    urls::resolve_url,
    value::OneOrMany,
};

/// Descriptor types whose primary field is a URL.
trait UrlField: Clone
{
    fn url(&self,) -> &str;

    fn with_url(&self, url: String,) -> Self;
}

macro_rules! url_field {
    ($($descriptor:ty),+ $(,)?) => {
        $(
            impl UrlField for $descriptor
            {
                fn url(&self,) -> &str
                {
                    &self.url
                }

                fn with_url(&self, url: String,) -> Self
                {
                    Self {
                        url,
                        ..self.clone()
                    }
                }
            }
        )+
    };
}

url_field!(AlternateLink, ActorReference, IconDescriptor, MusicReference, StartupImage);

fn join(value: &str, base: &Url,) -> Option<String,>
{
    if value.is_empty() {
        return Some(String::new(),);
    }

    match resolve_url(value, base,) {
        Ok(resolved,) => Some(resolved,),
        Err(error,) => {
            debug!("dropping unresolvable URL: {}", error.to_display_string());
            None
        }
    }
}

fn with_base<'a, T: Clone,>(
    field: &'a Option<T,>,
    base: Option<&Url,>,
    resolve: impl FnOnce(&T, &Url,) -> Option<T,>,
) -> Cow<'a, Option<T,>,>
{
    match (field, base,) {
        (Some(value,), Some(base,),) => Cow::Owned(resolve(value, base,),),
        _ => Cow::Borrowed(field,),
    }
}

fn join_all(values: &OneOrMany<String,>, base: &Url,) -> Option<OneOrMany<String,>,>
{
    values.filter_map(|value| join(value, base,),)
}

fn join_optional(value: Option<&String,>, base: &Url,) -> Option<String,>
{
    value.and_then(|value| join(value, base,),)
}

fn join_located<D: UrlField,>(item: &UrlOr<D,>, base: &Url,) -> Option<UrlOr<D,>,>
{
    match item {
        UrlOr::Url(url,) => join(url, base,).map(UrlOr::Url,),
        UrlOr::Descriptor(descriptor,) => join_descriptor(descriptor, base,).map(UrlOr::Descriptor,),
    }
}

fn join_descriptor<D: UrlField,>(descriptor: &D, base: &Url,) -> Option<D,>
{
    join(descriptor.url(), base,).map(|url| descriptor.with_url(url,),)
}

fn join_media(item: &UrlOr<MediaDescriptor,>, base: &Url,) -> Option<UrlOr<MediaDescriptor,>,>
{
    match item {
        UrlOr::Url(url,) => join(url, base,).map(UrlOr::Url,),
        UrlOr::Descriptor(media,) => join_media_descriptor(media, base,).map(UrlOr::Descriptor,),
    }
}

/// Resolves a media descriptor, falling back to its secure URL.
fn join_media_descriptor(media: &MediaDescriptor, base: &Url,) -> Option<MediaDescriptor,>
{
    let secure_url = join_optional(media.secure_url.as_ref(), base,);
    match join(&media.url, base,) {
        Some(url,) => Some(MediaDescriptor {
            url,
            secure_url,
            ..media.clone()
        },),
        None if secure_url.as_deref().is_some_and(|secure| !secure.is_empty(),) => {
            Some(MediaDescriptor {
                url: String::new(),
                secure_url,
                ..media.clone()
            },)
        }
        None => None,
    }
}

/// Resolves the page authors' profile URLs; the name survives a bad URL.
pub fn resolve_authors<'a,>(
    metadata: &'a InputMetadata,
    base: Option<&Url,>,
) -> Cow<'a, Option<OneOrMany<Author,>,>,>
{
    with_base(&metadata.authors, base, |authors, base| {
        authors.filter_map(|author| {
            Some(Author {
                url: join_optional(author.url.as_ref(), base,),
                ..author.clone()
            },)
        },)
    },)
}

pub fn resolve_manifest<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<String,>,>
{
    with_base(&metadata.manifest, base, |manifest, base| join(manifest, base,),)
}

pub fn resolve_archives<'a,>(
    metadata: &'a InputMetadata,
    base: Option<&Url,>,
) -> Cow<'a, Option<OneOrMany<String,>,>,>
{
    with_base(&metadata.archives, base, join_all,)
}

pub fn resolve_assets<'a,>(
    metadata: &'a InputMetadata,
    base: Option<&Url,>,
) -> Cow<'a, Option<OneOrMany<String,>,>,>
{
    with_base(&metadata.assets, base, join_all,)
}

pub fn resolve_bookmarks<'a,>(
    metadata: &'a InputMetadata,
    base: Option<&Url,>,
) -> Cow<'a, Option<OneOrMany<String,>,>,>
{
    with_base(&metadata.bookmarks, base, join_all,)
}

pub fn resolve_pagination<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<Pagination,>,>
{
    with_base(&metadata.pagination, base, |pagination, base| {
        Some(Pagination {
            previous: join_optional(pagination.previous.as_ref(), base,),
            next:     join_optional(pagination.next.as_ref(), base,),
        },)
    },)
}

/// Resolves the canonical URL and every alternate link.
pub fn resolve_alternates<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<Alternates,>,>
{
    with_base(&metadata.alternates, base, |alternates, base| {
        Some(Alternates {
            canonical: alternates.canonical.as_ref().and_then(|canonical| join_located(canonical, base,),),
            languages: alternates.languages.as_ref().map(|map| join_alternate_map(map, base,),),
            media:     alternates.media.as_ref().map(|map| join_alternate_map(map, base,),),
            types:     alternates.types.as_ref().map(|map| join_alternate_map(map, base,),),
        },)
    },)
}

fn join_alternate_map(map: &AlternateMap, base: &Url,) -> AlternateMap
{
    map.iter()
        .map(|(key, value,)| {
            let resolved = value.as_ref().and_then(|value| match value {
                AlternateValue::Url(url,) => join(url, base,).map(AlternateValue::Url,),
                AlternateValue::Links(links,) => Some(AlternateValue::Links(
                    links.iter().filter_map(|link| join_descriptor(link, base,),).collect(),
                ),),
            },);
            (key.clone(), resolved,)
        },)
        .collect()
}

/// Resolves icon URLs in every bucket.
pub fn resolve_icons<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<Icons,>,>
{
    with_base(&metadata.icons, base, |icons, base| match icons {
        Icons::One(icon,) => join_located(icon, base,).map(Icons::One,),
        Icons::Many(list,) => {
            Some(Icons::Many(list.iter().filter_map(|icon| join_located(icon, base,),).collect(),),)
        }
        Icons::Buckets(buckets,) => {
            let bucket = |icons: &Option<OneOrMany<UrlOr<IconDescriptor,>,>,>| {
                icons.as_ref().and_then(|icons| icons.filter_map(|icon| join_located(icon, base,),),)
            };
            Some(Icons::Buckets(IconBuckets {
                icon:     bucket(&buckets.icon,),
                shortcut: bucket(&buckets.shortcut,),
                apple:    bucket(&buckets.apple,),
                other:    buckets
                    .other
                    .as_ref()
                    .and_then(|icons| icons.filter_map(|icon| join_descriptor(icon, base,),),),
            },),)
        }
    },)
}

/// Resolves every URL of an Open Graph object.
pub fn resolve_open_graph<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<OpenGraph,>,>
{
    with_base(&metadata.open_graph, base, |og, base| {
        let media = |items: &Option<OneOrMany<UrlOr<MediaDescriptor,>,>,>| {
            items.as_ref().and_then(|items| items.filter_map(|item| join_media(item, base,),),)
        };
        let strings = |values: &Option<OneOrMany<String,>,>| {
            values.as_ref().and_then(|values| join_all(values, base,),)
        };
        let music = |items: &Option<OneOrMany<UrlOr<MusicReference,>,>,>| {
            items.as_ref().and_then(|items| items.filter_map(|item| join_located(item, base,),),)
        };

        Some(OpenGraph {
            url: join_optional(og.url.as_ref(), base,),
            images: media(&og.images,),
            videos: media(&og.videos,),
            audio: media(&og.audio,),
            authors: strings(&og.authors,),
            albums: music(&og.albums,),
            songs: music(&og.songs,),
            musicians: strings(&og.musicians,),
            creators: strings(&og.creators,),
            actors: og.actors.as_ref().and_then(|actors| {
                actors.filter_map(|actor| join_located::<ActorReference,>(actor, base,),)
            },),
            directors: strings(&og.directors,),
            writers: strings(&og.writers,),
            series: join_optional(og.series.as_ref(), base,),
            ..og.clone()
        },)
    },)
}

/// Resolves Twitter images, player URLs, and app store URLs.
pub fn resolve_twitter<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<Twitter,>,>
{
    with_base(&metadata.twitter, base, |twitter, base| {
        Some(Twitter {
            images: twitter
                .images
                .as_ref()
                .and_then(|images| images.filter_map(|image| join_media(image, base,),),),
            players: twitter.players.as_ref().and_then(|players| {
                players.filter_map(|player| {
                    Some(TwitterPlayer {
                        player_url: join(&player.player_url, base,)?,
                        stream_url: join(&player.stream_url, base,).unwrap_or_default(),
                        ..player.clone()
                    },)
                },)
            },),
            app: twitter.app.as_ref().map(|app| {
                let mut app = app.clone();
                app.url = app.url.as_ref().map(|urls| TwitterAppUrls {
                    iphone:     join_optional(urls.iphone.as_ref(), base,),
                    ipad:       join_optional(urls.ipad.as_ref(), base,),
                    googleplay: join_optional(urls.googleplay.as_ref(), base,),
                },);
                app
            },),
            ..twitter.clone()
        },)
    },)
}

/// Resolves the `url` of every App Links entry.
pub fn resolve_app_links<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<AppLinks,>,>
{
    macro_rules! entries {
        ($links:expr, $base:expr) => {
            $links.as_ref().and_then(|entries| {
                entries.filter_map(|entry| {
                    let mut entry = entry.clone();
                    entry.url = join_optional(entry.url.as_ref(), $base,);
                    Some(entry,)
                },)
            },)
        };
    }

    with_base(&metadata.app_links, base, |links, base| {
        Some(AppLinks {
            ios:               entries!(links.ios, base),
            iphone:            entries!(links.iphone, base),
            ipad:              entries!(links.ipad, base),
            android:           entries!(links.android, base),
            windows_phone:     entries!(links.windows_phone, base),
            windows:           entries!(links.windows, base),
            windows_universal: entries!(links.windows_universal, base),
            web:               entries!(links.web, base),
        },)
    },)
}

/// Resolves Apple web app startup image URLs.
pub fn resolve_apple_web_app<'a,>(metadata: &'a InputMetadata, base: Option<&Url,>,) -> Cow<'a, Option<AppleWebApp,>,>
{
    with_base(&metadata.apple_web_app, base, |settings, base| match settings {
        AppleWebApp::Enabled(flag,) => Some(AppleWebApp::Enabled(*flag,),),
        AppleWebApp::Config(config,) => Some(AppleWebApp::Config(AppleWebAppConfig {
            startup_image: config.startup_image.as_ref().and_then(|images| {
                images.filter_map(|image| join_located(image, base,),)
            },),
            ..config.clone()
        },),),
    },)
}

/// Applies every resolver to a copy of `metadata`.
pub fn resolve_metadata(metadata: &InputMetadata, base: Option<&Url,>,) -> InputMetadata
{
    InputMetadata {
        authors: resolve_authors(metadata, base,).into_owned(),
        manifest: resolve_manifest(metadata, base,).into_owned(),
        archives: resolve_archives(metadata, base,).into_owned(),
        assets: resolve_assets(metadata, base,).into_owned(),
        bookmarks: resolve_bookmarks(metadata, base,).into_owned(),
        pagination: resolve_pagination(metadata, base,).into_owned(),
        alternates: resolve_alternates(metadata, base,).into_owned(),
        icons: resolve_icons(metadata, base,).into_owned(),
        open_graph: resolve_open_graph(metadata, base,).into_owned(),
        twitter: resolve_twitter(metadata, base,).into_owned(),
        app_links: resolve_app_links(metadata, base,).into_owned(),
        apple_web_app: resolve_apple_web_app(metadata, base,).into_owned(),
        ..metadata.clone()
    }
}
