// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Document-level tags plus the small single-purpose sections: iTunes,
//! Facebook, Pinterest, format detection, verification, and the Apple web
//! app settings.

use crate::{
    normalized::NormalizedMetadata,
    tag::{LinkTag, MetaTag, TagKind, multi_meta, stringified, text},
};

/// Basic document tags in fixed order.
pub fn generate_basic_meta(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let mut tags = Vec::new();

    if let Some(char_set,) = text(metadata.char_set.as_ref(),) {
        tags.push(MetaTag::CharSet {
            char_set,
        },);
    }
    if let Some(title,) = text(metadata.title.as_ref(),) {
        tags.push(MetaTag::Title {
            title,
        },);
    }
    tags.extend(MetaTag::name("description", text(metadata.description.as_ref(),),),);
    tags.extend(MetaTag::name("application-name", text(metadata.application_name.as_ref(),),),);
    for author in metadata.authors.iter().flatten() {
        tags.extend(MetaTag::name("author", text(author.name.as_ref(),),),);
    }
    tags.extend(MetaTag::name("generator", text(metadata.generator.as_ref(),),),);
    tags.extend(MetaTag::name(
        "keywords",
        metadata.keywords.as_ref().map(|keywords| keywords.join(",",),),
    ),);
    tags.extend(MetaTag::name("referrer", text(metadata.referrer.as_ref(),),),);
    tags.extend(MetaTag::name("creator", text(metadata.creator.as_ref(),),),);
    tags.extend(MetaTag::name("publisher", text(metadata.publisher.as_ref(),),),);
    if let Some(robots,) = &metadata.robots {
        tags.extend(MetaTag::name("robots", Some(robots.basic.clone(),),),);
        tags.extend(MetaTag::name("googlebot", robots.google_bot.clone(),),);
    }
    tags.extend(MetaTag::name("abstract", text(metadata.abstract_text.as_ref(),),),);
    for (name, values,) in metadata.other.iter().flatten() {
        tags.extend(multi_meta(TagKind::Name, name, Some(values.as_slice(),),),);
    }

    tags
}

/// Author, manifest, archive, asset, bookmark, and pagination links.
pub fn generate_basic_links(metadata: &NormalizedMetadata,) -> Vec<LinkTag,>
{
    let mut links = Vec::new();

    for author in metadata.authors.iter().flatten() {
        links.extend(LinkTag::new("author", author.url.as_deref(),),);
    }
    links.extend(LinkTag::new("manifest", metadata.manifest.as_deref(),),);
    for (rel, hrefs,) in [
        ("archives", &metadata.archives,),
        ("assets", &metadata.assets,),
        ("bookmarks", &metadata.bookmarks,),
    ] {
        for href in hrefs.iter().flatten() {
            links.extend(LinkTag::new(rel, Some(href.as_str(),),),);
        }
    }
    if let Some(pagination,) = &metadata.pagination {
        links.extend(LinkTag::new("prev", pagination.previous.as_deref(),),);
        links.extend(LinkTag::new("next", pagination.next.as_deref(),),);
    }

    links
}

/// iOS Smart App Banner tag.
pub fn generate_itunes(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(itunes,) = &metadata.itunes else {
        return Vec::new();
    };

    let mut content = format!("app-id={}", itunes.app_id);
    if let Some(argument,) = text(itunes.app_argument.as_ref(),) {
        content.push_str(&format!(", app-argument={argument}"),);
    }
    MetaTag::name("apple-itunes-app", Some(content,),).into_iter().collect()
}

pub fn generate_facebook(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(facebook,) = &metadata.facebook else {
        return Vec::new();
    };

    let mut tags: Vec<MetaTag,> =
        MetaTag::property("fb:app_id", text(facebook.app_id.as_ref(),),).into_iter().collect();
    tags.extend(multi_meta(TagKind::Property, "fb:admins", facebook.admins.as_deref(),),);
    tags
}

pub fn generate_pinterest(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    metadata
        .pinterest
        .as_ref()
        .and_then(|pinterest| {
            MetaTag::property("pinterest-rich-pin", stringified(pinterest.rich_pin.as_ref(),),)
        },)
        .into_iter()
        .collect()
}

/// Joins every switch explicitly set to `false` into one tag.
pub fn generate_format_detection(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(detection,) = &metadata.format_detection else {
        return Vec::new();
    };

    let disabled: Vec<String,> = detection
        .switches()
        .into_iter()
        .filter(|(_, enabled,)| *enabled == Some(false,),)
        .map(|(key, _,)| format!("{key}=no"),)
        .collect();
    MetaTag::name("format-detection", Some(disabled.join(", ",),),).into_iter().collect()
}

pub fn generate_verification(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(verification,) = &metadata.verification else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    for (name, values,) in [
        ("google-site-verification", &verification.google,),
        ("y_key", &verification.yahoo,),
        ("yandex-verification", &verification.yandex,),
        ("me", &verification.me,),
    ] {
        tags.extend(multi_meta(TagKind::Name, name, values.as_deref(),),);
    }
    for (name, values,) in verification.other.iter().flatten() {
        tags.extend(multi_meta(TagKind::Name, name, Some(values.as_slice(),),),);
    }
    tags
}

pub fn generate_apple_web_app_meta(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(settings,) = &metadata.apple_web_app else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    if settings.capable {
        tags.extend(MetaTag::name("mobile-web-app-capable", Some("yes".to_owned(),),),);
    }
    tags.extend(MetaTag::name("apple-mobile-web-app-title", text(settings.title.as_ref(),),),);
    tags.extend(MetaTag::name(
        "apple-mobile-web-app-status-bar-style",
        text(settings.status_bar_style.as_ref(),),
    ),);
    tags
}

pub fn generate_apple_web_app_links(metadata: &NormalizedMetadata,) -> Vec<LinkTag,>
{
    metadata
        .apple_web_app
        .iter()
        .flat_map(|settings| settings.startup_image.iter().flatten(),)
        .filter_map(|image| {
            LinkTag::new("apple-touch-startup-image", Some(image.url.as_str(),),).map(|link| LinkTag {
                media: image.media.clone(),
                ..link
            },)
        },)
        .collect()
}
