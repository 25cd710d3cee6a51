// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Author-facing metadata model.
//!
//! Every field is optional and most list fields accept either a single value
//! or an array (see [`OneOrMany`]). Field names follow the camelCase spelling
//! used in metadata documents; `null` and a missing key are treated alike.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::{OneOrMany, Scalar};

/// A leaf that may be written as a bare URL string or as a descriptor object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum UrlOr<D,>
{
    /// Bare URL string.
    Url(String,),
    /// Descriptor carrying the URL plus auxiliary fields.
    Descriptor(D,),
}

/// Page title, either plain or exempt from templating.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum Title
{
    /// Plain title subject to the configured template.
    Text(String,),
    /// Title that bypasses the template entirely.
    Absolute {
        /// Verbatim title.
        absolute: String,
    },
}

/// Complete metadata description of a single page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct InputMetadata
{
    pub char_set:         Option<String,>,
    pub title:            Option<Title,>,
    pub description:      Option<String,>,
    pub application_name: Option<String,>,
    pub authors:          Option<OneOrMany<Author,>,>,
    pub manifest:         Option<String,>,
    pub generator:        Option<String,>,
    pub keywords:         Option<OneOrMany<String,>,>,
    pub referrer:         Option<String,>,
    pub creator:          Option<String,>,
    pub publisher:        Option<String,>,
    pub robots:           Option<Robots,>,
    #[serde(rename = "abstract")]
    pub abstract_text:    Option<String,>,
    pub archives:         Option<OneOrMany<String,>,>,
    pub assets:           Option<OneOrMany<String,>,>,
    pub bookmarks:        Option<OneOrMany<String,>,>,
    pub pagination:       Option<Pagination,>,
    pub category:         Option<String,>,
    pub classification:   Option<String,>,
    /// Free-form `name`/`content` pairs emitted in insertion order.
    pub other:            Option<IndexMap<String, Option<OneOrMany<Scalar,>,>,>,>,
    pub alternates:       Option<Alternates,>,
    pub itunes:           Option<Itunes,>,
    pub facebook:         Option<Facebook,>,
    pub pinterest:        Option<Pinterest,>,
    pub format_detection: Option<FormatDetection,>,
    pub verification:     Option<Verification,>,
    pub apple_web_app:    Option<AppleWebApp,>,
    pub open_graph:       Option<OpenGraph,>,
    pub twitter:          Option<Twitter,>,
    pub app_links:        Option<AppLinks,>,
    pub icons:            Option<Icons,>,
    pub viewport:         Option<Viewport,>,
}

/// Page author; either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct Author
{
    pub name: Option<String,>,
    pub url:  Option<String,>,
}

/// Neighbouring pages of a paginated sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct Pagination
{
    pub previous: Option<String,>,
    pub next:     Option<String,>,
}

/// Robots directives in one of three spellings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum Robots
{
    /// Directive string used verbatim.
    Text(String,),
    /// Directives already rendered into strings.
    Compiled(RobotsDirectives,),
    /// Structured directives.
    Info(RobotsInfo,),
}

/// Rendered robots directives for the generic and Googlebot-specific tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RobotsDirectives
{
    pub basic:      String,
    #[serde(default)]
    pub google_bot: Option<String,>,
}

/// Structured robots directives.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct RobotsInfo
{
    pub index:                  Option<bool,>,
    pub follow:                 Option<bool,>,
    pub noarchive:              Option<Scalar,>,
    pub nosnippet:              Option<Scalar,>,
    pub noimageindex:           Option<Scalar,>,
    pub nocache:                Option<Scalar,>,
    pub notranslate:            Option<Scalar,>,
    pub indexifembedded:        Option<Scalar,>,
    pub nositelinkssearchbox:   Option<Scalar,>,
    pub unavailable_after:      Option<Scalar,>,
    #[serde(rename = "max-video-preview")]
    pub max_video_preview:      Option<Scalar,>,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview:      Option<Scalar,>,
    #[serde(rename = "max-snippet")]
    pub max_snippet:            Option<Scalar,>,
    /// Googlebot-specific directives rendered into their own tag.
    #[serde(rename = "googleBot")]
    pub google_bot:             Option<Box<Robots,>,>,
}

impl RobotsInfo
{
    /// Auxiliary directives in emission order.
    pub fn directives(&self,) -> [(&'static str, Option<&Scalar,>,); 11]
    {
        [
            ("noarchive", self.noarchive.as_ref(),),
            ("nosnippet", self.nosnippet.as_ref(),),
            ("noimageindex", self.noimageindex.as_ref(),),
            ("nocache", self.nocache.as_ref(),),
            ("notranslate", self.notranslate.as_ref(),),
            ("indexifembedded", self.indexifembedded.as_ref(),),
            ("nositelinkssearchbox", self.nositelinkssearchbox.as_ref(),),
            ("unavailable_after", self.unavailable_after.as_ref(),),
            ("max-video-preview", self.max_video_preview.as_ref(),),
            ("max-image-preview", self.max_image_preview.as_ref(),),
            ("max-snippet", self.max_snippet.as_ref(),),
        ]
    }
}

/// Canonical and alternate document URLs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct Alternates
{
    pub canonical: Option<UrlOr<AlternateLink,>,>,
    pub languages: Option<AlternateMap,>,
    pub media:     Option<AlternateMap,>,
    pub types:     Option<AlternateMap,>,
}

/// Alternates keyed by language, media query, or MIME type.
pub type AlternateMap = IndexMap<String, Option<AlternateValue,>,>;

/// Value of an alternates map entry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum AlternateValue
{
    Url(String,),
    Links(Vec<AlternateLink,>,),
}

/// Alternate link with an optional title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct AlternateLink
{
    pub url:   String,
    pub title: Option<String,>,
}

/// iOS Smart App Banner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct Itunes
{
    pub app_id:       String,
    pub app_argument: Option<String,>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct Facebook
{
    pub app_id: Option<String,>,
    pub admins: Option<OneOrMany<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct Pinterest
{
    pub rich_pin: Option<Scalar,>,
}

/// Mobile browser auto-linking switches; only explicit `false` is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct FormatDetection
{
    pub telephone: Option<bool,>,
    pub date:      Option<bool,>,
    pub address:   Option<bool,>,
    pub email:     Option<bool,>,
    pub url:       Option<bool,>,
}

impl FormatDetection
{
    /// Switches in emission order.
    pub fn switches(&self,) -> [(&'static str, Option<bool,>,); 5]
    {
        [
            ("telephone", self.telephone,),
            ("date", self.date,),
            ("address", self.address,),
            ("email", self.email,),
            ("url", self.url,),
        ]
    }
}

/// Site ownership verification tokens.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct Verification
{
    pub google: Option<OneOrMany<Scalar,>,>,
    pub yahoo:  Option<OneOrMany<Scalar,>,>,
    pub yandex: Option<OneOrMany<Scalar,>,>,
    pub me:     Option<OneOrMany<Scalar,>,>,
    pub other:  Option<IndexMap<String, Option<OneOrMany<Scalar,>,>,>,>,
}

/// Apple home-screen web app settings, as a switch or a full object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum AppleWebApp
{
    Enabled(bool,),
    Config(AppleWebAppConfig,),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct AppleWebAppConfig
{
    pub capable:           Option<bool,>,
    pub title:             Option<String,>,
    pub startup_image:     Option<OneOrMany<UrlOr<StartupImage,>,>,>,
    pub status_bar_style:  Option<String,>,
}

/// Launch screen image with an optional media query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct StartupImage
{
    pub url:   String,
    pub media: Option<String,>,
}

/// Image, video, or audio descriptor.
///
/// An empty `url` stands for a descriptor that only carries a secure URL.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct MediaDescriptor
{
    #[serde(default)]
    pub url:        String,
    pub secure_url: Option<String,>,
    #[serde(rename = "type")]
    pub mime_type:  Option<String,>,
    pub width:      Option<Scalar,>,
    pub height:     Option<Scalar,>,
    pub alt:        Option<String,>,
}

impl MediaDescriptor
{
    /// Builds a descriptor holding only a URL.
    pub fn from_url(url: String,) -> Self
    {
        Self {
            url,
            ..Self::default()
        }
    }
}

/// Album or song reference used by music objects.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct MusicReference
{
    pub url:   String,
    pub disc:  Option<Scalar,>,
    pub track: Option<Scalar,>,
}

/// Actor reference used by video objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct ActorReference
{
    pub url:  String,
    pub role: Option<String,>,
}

/// Open Graph object as written by authors.
///
/// Type-specific fields sit next to the common ones; the normalizer keeps
/// only those that belong to the declared `type`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph
{
    #[serde(rename = "type")]
    pub kind:             Option<String,>,
    pub determiner:       Option<String,>,
    pub title:            Option<String,>,
    pub description:      Option<String,>,
    pub url:              Option<String,>,
    pub site_name:        Option<String,>,
    pub locale:           Option<String,>,
    pub country_name:     Option<String,>,
    pub ttl:              Option<Scalar,>,
    pub images:           Option<OneOrMany<UrlOr<MediaDescriptor,>,>,>,
    pub videos:           Option<OneOrMany<UrlOr<MediaDescriptor,>,>,>,
    pub audio:            Option<OneOrMany<UrlOr<MediaDescriptor,>,>,>,
    pub emails:           Option<OneOrMany<String,>,>,
    pub phone_numbers:    Option<OneOrMany<String,>,>,
    pub fax_numbers:      Option<OneOrMany<String,>,>,
    pub alternate_locale: Option<OneOrMany<String,>,>,
    pub published_time:   Option<String,>,
    pub modified_time:    Option<String,>,
    pub expiration_time:  Option<String,>,
    pub authors:          Option<OneOrMany<String,>,>,
    pub section:          Option<String,>,
    pub tags:             Option<OneOrMany<String,>,>,
    pub isbn:             Option<String,>,
    pub release_date:     Option<String,>,
    pub first_name:       Option<String,>,
    pub last_name:        Option<String,>,
    pub username:         Option<String,>,
    pub gender:           Option<String,>,
    pub duration:         Option<Scalar,>,
    pub albums:           Option<OneOrMany<UrlOr<MusicReference,>,>,>,
    pub songs:            Option<OneOrMany<UrlOr<MusicReference,>,>,>,
    pub musicians:        Option<OneOrMany<String,>,>,
    pub creators:         Option<OneOrMany<String,>,>,
    pub actors:           Option<OneOrMany<UrlOr<ActorReference,>,>,>,
    pub directors:        Option<OneOrMany<String,>,>,
    pub writers:          Option<OneOrMany<String,>,>,
    pub series:           Option<String,>,
}

/// Twitter card as written by authors.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct Twitter
{
    pub card:        Option<String,>,
    pub site:        Option<String,>,
    pub site_id:     Option<String,>,
    pub creator:     Option<String,>,
    pub creator_id:  Option<String,>,
    pub title:       Option<String,>,
    pub description: Option<String,>,
    pub images:      Option<OneOrMany<UrlOr<MediaDescriptor,>,>,>,
    pub players:     Option<OneOrMany<TwitterPlayer,>,>,
    pub app:         Option<TwitterApp,>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct TwitterPlayer
{
    #[serde(default)]
    pub player_url: String,
    #[serde(default)]
    pub stream_url: String,
    pub width:      Option<Scalar,>,
    pub height:     Option<Scalar,>,
}

/// App card details for each store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct TwitterApp
{
    pub name: Option<String,>,
    #[serde(default)]
    pub id:   TwitterAppIds,
    pub url:  Option<TwitterAppUrls,>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct TwitterAppIds
{
    pub iphone:     Option<Scalar,>,
    pub ipad:       Option<Scalar,>,
    pub googleplay: Option<Scalar,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct TwitterAppUrls
{
    pub iphone:     Option<String,>,
    pub ipad:       Option<String,>,
    pub googleplay: Option<String,>,
}

/// Platform keys of the Twitter app card, in emission order.
pub const TWITTER_APP_PLATFORMS: [&str; 3] = ["iphone", "ipad", "googleplay",];

impl TwitterAppIds
{
    pub fn get(&self, platform: &str,) -> Option<&Scalar,>
    {
        match platform {
            "iphone" => self.iphone.as_ref(),
            "ipad" => self.ipad.as_ref(),
            "googleplay" => self.googleplay.as_ref(),
            _ => None,
        }
    }
}

impl TwitterAppUrls
{
    pub fn get(&self, platform: &str,) -> Option<&String,>
    {
        match platform {
            "iphone" => self.iphone.as_ref(),
            "ipad" => self.ipad.as_ref(),
            "googleplay" => self.googleplay.as_ref(),
            _ => None,
        }
    }
}

/// App Links entries grouped by platform.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct AppLinks
{
    pub ios:               Option<OneOrMany<AppLinkApple,>,>,
    pub iphone:            Option<OneOrMany<AppLinkApple,>,>,
    pub ipad:              Option<OneOrMany<AppLinkApple,>,>,
    pub android:           Option<OneOrMany<AppLinkAndroid,>,>,
    pub windows_phone:     Option<OneOrMany<AppLinkWindows,>,>,
    pub windows:           Option<OneOrMany<AppLinkWindows,>,>,
    pub windows_universal: Option<OneOrMany<AppLinkWindows,>,>,
    pub web:               Option<OneOrMany<AppLinkWeb,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct AppLinkApple
{
    pub url:          Option<String,>,
    pub app_store_id: Option<Scalar,>,
    pub app_name:     Option<String,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct AppLinkAndroid
{
    pub package:  Option<String,>,
    pub url:      Option<String,>,
    pub class:    Option<String,>,
    pub app_name: Option<String,>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct AppLinkWindows
{
    pub url:      Option<String,>,
    pub app_id:   Option<Scalar,>,
    pub app_name: Option<String,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct AppLinkWeb
{
    pub url:             Option<String,>,
    pub should_fallback: Option<bool,>,
}

/// Icon declarations: a single icon, a list, or a bucketed object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum Icons
{
    One(UrlOr<IconDescriptor,>,),
    Many(Vec<UrlOr<IconDescriptor,>,>,),
    Buckets(IconBuckets,),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
pub struct IconBuckets
{
    pub icon:     Option<OneOrMany<UrlOr<IconDescriptor,>,>,>,
    pub shortcut: Option<OneOrMany<UrlOr<IconDescriptor,>,>,>,
    pub apple:    Option<OneOrMany<UrlOr<IconDescriptor,>,>,>,
    pub other:    Option<OneOrMany<IconDescriptor,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct IconDescriptor
{
    pub url:       String,
    pub rel:       Option<String,>,
    #[serde(rename = "type")]
    pub mime_type: Option<String,>,
    pub sizes:     Option<String,>,
    pub color:     Option<String,>,
    pub media:     Option<String,>,
}

impl IconDescriptor
{
    /// Builds a descriptor holding only a URL.
    pub fn from_url(url: String,) -> Self
    {
        Self {
            url,
            ..Self::default()
        }
    }
}

/// Viewport layout, theme colors, and color scheme.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct Viewport
{
    pub width:              Option<Scalar,>,
    pub height:             Option<Scalar,>,
    pub initial_scale:      Option<Scalar,>,
    pub minimum_scale:      Option<Scalar,>,
    pub maximum_scale:      Option<Scalar,>,
    pub viewport_fit:       Option<Scalar,>,
    pub user_scalable:      Option<Scalar,>,
    pub interactive_widget: Option<Scalar,>,
    pub theme_color:        Option<OneOrMany<ThemeColorSource,>,>,
    pub color_scheme:       Option<String,>,
}

impl Viewport
{
    /// Layout keys in emission order.
    pub fn layout(&self,) -> [(&'static str, Option<&Scalar,>,); 8]
    {
        [
            ("width", self.width.as_ref(),),
            ("height", self.height.as_ref(),),
            ("initial-scale", self.initial_scale.as_ref(),),
            ("minimum-scale", self.minimum_scale.as_ref(),),
            ("maximum-scale", self.maximum_scale.as_ref(),),
            ("viewport-fit", self.viewport_fit.as_ref(),),
            ("user-scalable", self.user_scalable.as_ref(),),
            ("interactive-widget", self.interactive_widget.as_ref(),),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum ThemeColorSource
{
    Color(String,),
    Descriptor(ThemeColor,),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize,)]
pub struct ThemeColor
{
    pub color: String,
    pub media: Option<String,>,
}
