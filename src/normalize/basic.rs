// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Normalization of the document-level fields.

use indexmap::IndexMap;

use crate::{
    input::{
        AlternateLink, AlternateMap, AlternateValue, Alternates, AppLinks, AppleWebApp,
        Facebook, Robots, RobotsDirectives, RobotsInfo, StartupImage, Title, UrlOr, Verification,
    },
    normalized::{
        NormalizedAlternates, NormalizedAppLinks, NormalizedAppleWebApp, NormalizedFacebook,
        NormalizedVerification,
    },
    value::{OneOrMany, Scalar, non_empty, wrap_as_array},
};

const DEFAULT_STATUS_BAR_STYLE: &str = "default";

pub(super) fn normalize_title(title: &Title,) -> String
{
    match title {
        Title::Text(text,) => text.clone(),
        Title::Absolute {
            absolute,
        } => absolute.clone(),
    }
}

/// Renders robots directives into the generic and Googlebot strings.
pub(super) fn normalize_robots(robots: &Robots,) -> Option<RobotsDirectives,>
{
    match robots {
        Robots::Text(text,) if text.is_empty() => None,
        Robots::Text(text,) => Some(RobotsDirectives {
            basic:      text.clone(),
            google_bot: None,
        },),
        Robots::Compiled(directives,) => Some(directives.clone(),),
        Robots::Info(info,) => Some(RobotsDirectives {
            basic:      render_robots(info,),
            google_bot: info.google_bot.as_deref().and_then(robots_value,),
        },),
    }
}

fn robots_value(robots: &Robots,) -> Option<String,>
{
    match robots {
        Robots::Text(text,) if text.is_empty() => None,
        Robots::Text(text,) => Some(text.clone(),),
        Robots::Compiled(directives,) => Some(directives.basic.clone(),),
        Robots::Info(info,) => Some(render_robots(info,),),
    }
}

fn render_robots(info: &RobotsInfo,) -> String
{
    let mut values = Vec::new();
    if let Some(index,) = info.index {
        values.push(if index { "index" } else { "noindex" }.to_owned(),);
    }
    if let Some(follow,) = info.follow {
        values.push(if follow { "follow" } else { "nofollow" }.to_owned(),);
    }

    for (key, value,) in info.directives() {
        match value {
            None | Some(Scalar::Bool(false,),) => {}
            Some(Scalar::Bool(true,),) => values.push(key.to_owned(),),
            Some(other,) => values.push(format!("{key}:{}", other.to_content()),),
        }
    }

    values.join(", ",)
}

pub(super) fn normalize_alternates(alternates: &Alternates,) -> NormalizedAlternates
{
    let canonical = alternates.canonical.as_ref().and_then(|canonical| match canonical {
        UrlOr::Url(url,) if url.is_empty() => None,
        UrlOr::Url(url,) => Some(AlternateLink {
            url:   url.clone(),
            title: None,
        },),
        UrlOr::Descriptor(link,) => Some(AlternateLink {
            url:   link.url.clone(),
            title: None,
        },),
    },);

    NormalizedAlternates {
        canonical,
        languages: alternates.languages.as_ref().map(normalize_alternate_map,),
        media: alternates.media.as_ref().map(normalize_alternate_map,),
        types: alternates.types.as_ref().map(normalize_alternate_map,),
    }
}

fn normalize_alternate_map(map: &AlternateMap,) -> IndexMap<String, Vec<AlternateLink,>,>
{
    map.iter()
        .filter_map(|(key, value,)| {
            let links = match value.as_ref()? {
                AlternateValue::Url(url,) => vec![AlternateLink {
                    url:   url.clone(),
                    title: None,
                }],
                AlternateValue::Links(links,) if links.is_empty() => return None,
                AlternateValue::Links(links,) => links.clone(),
            };
            Some((key.clone(), links,),)
        },)
        .collect()
}

pub(super) fn normalize_facebook(facebook: &Facebook,) -> NormalizedFacebook
{
    NormalizedFacebook {
        app_id: facebook.app_id.clone(),
        admins: wrap_as_array(facebook.admins.as_ref(),),
    }
}

pub(super) fn normalize_verification(verification: &Verification,) -> NormalizedVerification
{
    NormalizedVerification {
        google: verification_values(verification.google.as_ref(),),
        yahoo:  verification_values(verification.yahoo.as_ref(),),
        yandex: verification_values(verification.yandex.as_ref(),),
        me:     verification_values(verification.me.as_ref(),),
        other:  verification.other.as_ref().map(normalize_other,),
    }
}

fn verification_values(value: Option<&OneOrMany<Scalar,>,>,) -> Option<Vec<Scalar,>,>
{
    match value? {
        OneOrMany::One(token,) if token.is_falsy() => None,
        value => Some(value.to_vec(),),
    }
}

/// Coerces free-form `name`/`content` pairs, dropping `null` entries.
pub(super) fn normalize_other(
    other: &IndexMap<String, Option<OneOrMany<Scalar,>,>,>,
) -> IndexMap<String, Vec<Scalar,>,>
{
    other
        .iter()
        .filter_map(|(key, value,)| Some((key.clone(), value.as_ref()?.to_vec(),),),)
        .collect()
}

pub(super) fn normalize_apple_web_app(settings: &AppleWebApp,) -> Option<NormalizedAppleWebApp,>
{
    match settings {
        AppleWebApp::Enabled(false,) => None,
        AppleWebApp::Enabled(true,) => Some(NormalizedAppleWebApp {
            capable: true,
            ..NormalizedAppleWebApp::default()
        },),
        AppleWebApp::Config(config,) => Some(NormalizedAppleWebApp {
            capable:          config.capable.unwrap_or(true,),
            title:            non_empty(config.title.as_ref(),),
            startup_image:    config.startup_image.as_ref().map(|images| {
                images
                    .iter()
                    .map(|image| match image {
                        UrlOr::Url(url,) => StartupImage {
                            url:   url.clone(),
                            media: None,
                        },
                        UrlOr::Descriptor(image,) => image.clone(),
                    },)
                    .collect()
            },),
            status_bar_style: Some(
                non_empty(config.status_bar_style.as_ref(),)
                    .unwrap_or_else(|| DEFAULT_STATUS_BAR_STYLE.to_owned(),),
            ),
        },),
    }
}

pub(super) fn normalize_app_links(links: &AppLinks,) -> NormalizedAppLinks
{
    NormalizedAppLinks {
        ios:               wrap_as_array(links.ios.as_ref(),),
        iphone:            wrap_as_array(links.iphone.as_ref(),),
        ipad:              wrap_as_array(links.ipad.as_ref(),),
        android:           wrap_as_array(links.android.as_ref(),),
        windows_phone:     wrap_as_array(links.windows_phone.as_ref(),),
        windows:           wrap_as_array(links.windows.as_ref(),),
        windows_universal: wrap_as_array(links.windows_universal.as_ref(),),
        web:               wrap_as_array(links.web.as_ref(),),
    }
}
