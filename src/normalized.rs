// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Canonical metadata shape consumed by the generators.
//!
//! Every list field is a plain vector, Open Graph objects and Twitter cards
//! are closed variants carrying only the fields their type uses, and derived
//! strings (robots directives, viewport layout) are computed up front.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    input::{
        ActorReference, AlternateLink, AlternateValue, Alternates, AppLinkAndroid, AppLinkApple,
        AppLinkWeb, AppLinkWindows, AppLinks, AppleWebApp, AppleWebAppConfig, Author, Facebook,
        FormatDetection, IconBuckets, IconDescriptor, Icons, InputMetadata, Itunes,
        MediaDescriptor, MusicReference, OpenGraph, Pagination, Pinterest, Robots,
        RobotsDirectives, StartupImage, ThemeColor, ThemeColorSource, Title, Twitter, TwitterApp,
        TwitterPlayer, UrlOr, Verification, Viewport,
    },
    value::{OneOrMany, Scalar},
};

/// Metadata after normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedMetadata
{
    pub char_set:         Option<String,>,
    pub title:            Option<String,>,
    pub description:      Option<String,>,
    pub application_name: Option<String,>,
    pub authors:          Option<Vec<Author,>,>,
    pub manifest:         Option<String,>,
    pub generator:        Option<String,>,
    pub keywords:         Option<Vec<String,>,>,
    pub referrer:         Option<String,>,
    pub creator:          Option<String,>,
    pub publisher:        Option<String,>,
    pub robots:           Option<RobotsDirectives,>,
    #[serde(rename = "abstract")]
    pub abstract_text:    Option<String,>,
    pub archives:         Option<Vec<String,>,>,
    pub assets:           Option<Vec<String,>,>,
    pub bookmarks:        Option<Vec<String,>,>,
    pub pagination:       Option<Pagination,>,
    pub category:         Option<String,>,
    pub classification:   Option<String,>,
    pub other:            Option<IndexMap<String, Vec<Scalar,>,>,>,
    pub alternates:       Option<NormalizedAlternates,>,
    pub itunes:           Option<Itunes,>,
    pub facebook:         Option<NormalizedFacebook,>,
    pub pinterest:        Option<Pinterest,>,
    pub format_detection: Option<FormatDetection,>,
    pub verification:     Option<NormalizedVerification,>,
    pub apple_web_app:    Option<NormalizedAppleWebApp,>,
    pub open_graph:       Option<NormalizedOpenGraph,>,
    pub twitter:          Option<NormalizedTwitter,>,
    pub app_links:        Option<NormalizedAppLinks,>,
    pub icons:            Option<NormalizedIcons,>,
    pub viewport:         Option<NormalizedViewport,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct NormalizedAlternates
{
    pub canonical: Option<AlternateLink,>,
    pub languages: Option<IndexMap<String, Vec<AlternateLink,>,>,>,
    pub media:     Option<IndexMap<String, Vec<AlternateLink,>,>,>,
    pub types:     Option<IndexMap<String, Vec<AlternateLink,>,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFacebook
{
    pub app_id: Option<String,>,
    pub admins: Option<Vec<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
pub struct NormalizedVerification
{
    pub google: Option<Vec<Scalar,>,>,
    pub yahoo:  Option<Vec<Scalar,>,>,
    pub yandex: Option<Vec<Scalar,>,>,
    pub me:     Option<Vec<Scalar,>,>,
    pub other:  Option<IndexMap<String, Vec<Scalar,>,>,>,
}

/// Apple web app settings.
///
/// `status_bar_style` is only absent when the settings came from the bare
/// `true` switch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAppleWebApp
{
    pub capable:          bool,
    pub title:            Option<String,>,
    pub startup_image:    Option<Vec<StartupImage,>,>,
    pub status_bar_style: Option<String,>,
}

/// Open Graph object with list fields coerced and images validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedOpenGraph
{
    pub determiner:       Option<String,>,
    pub title:            Option<String,>,
    pub description:      Option<String,>,
    pub url:              Option<String,>,
    pub site_name:        Option<String,>,
    pub locale:           Option<String,>,
    pub country_name:     Option<String,>,
    pub ttl:              Option<Scalar,>,
    pub images:           Option<Vec<MediaDescriptor,>,>,
    pub videos:           Option<Vec<UrlOr<MediaDescriptor,>,>,>,
    pub audio:            Option<Vec<UrlOr<MediaDescriptor,>,>,>,
    pub emails:           Option<Vec<String,>,>,
    pub phone_numbers:    Option<Vec<String,>,>,
    pub fax_numbers:      Option<Vec<String,>,>,
    pub alternate_locale: Option<Vec<String,>,>,
    /// Typed object; `None` when no `type` was declared.
    #[serde(flatten)]
    pub variant:          Option<OpenGraphVariant,>,
}

/// Closed set of Open Graph object types.
#[derive(Debug, Clone, PartialEq, Serialize,)]
#[serde(tag = "type")]
pub enum OpenGraphVariant
{
    #[serde(rename = "website")]
    Website,
    #[serde(rename = "article")]
    Article(ArticleObject,),
    #[serde(rename = "book")]
    Book(BookObject,),
    #[serde(rename = "profile")]
    Profile(ProfileObject,),
    #[serde(rename = "music.song")]
    MusicSong(SongObject,),
    #[serde(rename = "music.album")]
    MusicAlbum(AlbumObject,),
    #[serde(rename = "music.playlist")]
    MusicPlaylist(PlaylistObject,),
    #[serde(rename = "music.radio_station")]
    MusicRadioStation(RadioStationObject,),
    #[serde(rename = "video.movie")]
    VideoMovie(VideoObject,),
    #[serde(rename = "video.episode")]
    VideoEpisode(EpisodeObject,),
    #[serde(rename = "video.tv_show")]
    VideoTvShow,
    #[serde(rename = "video.other")]
    VideoOther,
}

impl OpenGraphVariant
{
    /// Value emitted as `og:type`.
    pub fn as_str(&self,) -> &'static str
    {
        match self {
            Self::Website => "website",
            Self::Article(_,) => "article",
            Self::Book(_,) => "book",
            Self::Profile(_,) => "profile",
            Self::MusicSong(_,) => "music.song",
            Self::MusicAlbum(_,) => "music.album",
            Self::MusicPlaylist(_,) => "music.playlist",
            Self::MusicRadioStation(_,) => "music.radio_station",
            Self::VideoMovie(_,) => "video.movie",
            Self::VideoEpisode(_,) => "video.episode",
            Self::VideoTvShow => "video.tv_show",
            Self::VideoOther => "video.other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ArticleObject
{
    pub published_time:  Option<String,>,
    pub modified_time:   Option<String,>,
    pub expiration_time: Option<String,>,
    pub authors:         Option<Vec<String,>,>,
    pub section:         Option<String,>,
    pub tags:            Option<Vec<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct BookObject
{
    pub isbn:         Option<String,>,
    pub release_date: Option<String,>,
    pub authors:      Option<Vec<String,>,>,
    pub tags:         Option<Vec<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct ProfileObject
{
    pub first_name: Option<String,>,
    pub last_name:  Option<String,>,
    pub username:   Option<String,>,
    pub gender:     Option<String,>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
pub struct SongObject
{
    pub duration:  Option<Scalar,>,
    pub albums:    Option<Vec<UrlOr<MusicReference,>,>,>,
    pub musicians: Option<Vec<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct AlbumObject
{
    pub songs:        Option<Vec<UrlOr<MusicReference,>,>,>,
    pub musicians:    Option<Vec<String,>,>,
    pub release_date: Option<String,>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
pub struct PlaylistObject
{
    pub songs:    Option<Vec<UrlOr<MusicReference,>,>,>,
    pub creators: Option<Vec<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct RadioStationObject
{
    pub creators: Option<Vec<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct VideoObject
{
    pub actors:       Option<Vec<UrlOr<ActorReference,>,>,>,
    pub directors:    Option<Vec<String,>,>,
    pub writers:      Option<Vec<String,>,>,
    pub duration:     Option<Scalar,>,
    pub release_date: Option<String,>,
    pub tags:         Option<Vec<String,>,>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
pub struct EpisodeObject
{
    #[serde(flatten)]
    pub video:  VideoObject,
    pub series: Option<String,>,
}

/// Twitter card with its defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTwitter
{
    #[serde(flatten)]
    pub card:        TwitterCard,
    pub site:        Option<String,>,
    pub site_id:     Option<String,>,
    pub creator:     Option<String,>,
    pub creator_id:  Option<String,>,
    pub title:       Option<String,>,
    pub description: Option<String,>,
    pub images:      Option<Vec<MediaDescriptor,>,>,
}

/// Closed set of Twitter card types.
#[derive(Debug, Clone, PartialEq, Serialize,)]
#[serde(tag = "card", rename_all = "snake_case")]
pub enum TwitterCard
{
    Summary,
    SummaryLargeImage,
    Player {
        players: Vec<TwitterPlayer,>,
    },
    App {
        app: TwitterApp,
    },
}

impl TwitterCard
{
    /// Value emitted as `twitter:card`.
    pub fn as_str(&self,) -> &'static str
    {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::Player {
                ..
            } => "player",
            Self::App {
                ..
            } => "app",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
pub struct NormalizedAppLinks
{
    pub ios:               Option<Vec<AppLinkApple,>,>,
    pub iphone:            Option<Vec<AppLinkApple,>,>,
    pub ipad:              Option<Vec<AppLinkApple,>,>,
    pub android:           Option<Vec<AppLinkAndroid,>,>,
    pub windows_phone:     Option<Vec<AppLinkWindows,>,>,
    pub windows:           Option<Vec<AppLinkWindows,>,>,
    pub windows_universal: Option<Vec<AppLinkWindows,>,>,
    pub web:               Option<Vec<AppLinkWeb,>,>,
}

/// Icons grouped into buckets with `rel` filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize,)]
pub struct NormalizedIcons
{
    pub icon:     Vec<IconDescriptor,>,
    pub shortcut: Vec<IconDescriptor,>,
    pub apple:    Vec<IconDescriptor,>,
    pub other:    Vec<IconDescriptor,>,
}

impl NormalizedIcons
{
    pub fn is_empty(&self,) -> bool
    {
        self.icon.is_empty()
            && self.shortcut.is_empty()
            && self.apple.is_empty()
            && self.other.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize,)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedViewport
{
    /// Source layout settings.
    #[serde(skip)]
    pub settings:     Viewport,
    /// Rendered `content` of the viewport tag.
    pub layout:       Option<String,>,
    pub theme_color:  Option<Vec<ThemeColor,>,>,
    pub color_scheme: Option<String,>,
}

fn many<T: Clone,>(values: &Option<Vec<T,>,>,) -> Option<OneOrMany<T,>,>
{
    values.as_ref().map(|values| OneOrMany::Many(values.clone(),),)
}

fn many_map(values: &Option<IndexMap<String, Vec<Scalar,>,>,>,)
-> Option<IndexMap<String, Option<OneOrMany<Scalar,>,>,>,>
{
    values.as_ref().map(|map| {
        map.iter()
            .map(|(key, values,)| (key.clone(), Some(OneOrMany::Many(values.clone(),),),),)
            .collect()
    },)
}

fn alternate_map(values: &Option<IndexMap<String, Vec<AlternateLink,>,>,>,)
-> Option<IndexMap<String, Option<AlternateValue,>,>,>
{
    values.as_ref().map(|map| {
        map.iter()
            .map(|(key, links,)| (key.clone(), Some(AlternateValue::Links(links.clone(),),),),)
            .collect()
    },)
}

impl NormalizedMetadata
{
    /// Re-embeds the normalized metadata into the input model.
    ///
    /// Normalizing the returned value yields `self` again: lists come back
    /// as explicit arrays, typed Open Graph objects as flat objects with
    /// their `type`, and rendered robots directives in compiled form.
    pub fn to_input(&self,) -> InputMetadata
    {
        InputMetadata {
            char_set:         self.char_set.clone(),
            title:            self.title.clone().map(Title::Text,),
            description:      self.description.clone(),
            application_name: self.application_name.clone(),
            authors:          many(&self.authors,),
            manifest:         self.manifest.clone(),
            generator:        self.generator.clone(),
            keywords:         many(&self.keywords,),
            referrer:         self.referrer.clone(),
            creator:          self.creator.clone(),
            publisher:        self.publisher.clone(),
            robots:           self.robots.clone().map(Robots::Compiled,),
            abstract_text:    self.abstract_text.clone(),
            archives:         many(&self.archives,),
            assets:           many(&self.assets,),
            bookmarks:        many(&self.bookmarks,),
            pagination:       self.pagination.clone(),
            category:         self.category.clone(),
            classification:   self.classification.clone(),
            other:            many_map(&self.other,),
            alternates:       self.alternates.as_ref().map(|alternates| Alternates {
                canonical: alternates.canonical.clone().map(UrlOr::Descriptor,),
                languages: alternate_map(&alternates.languages,),
                media:     alternate_map(&alternates.media,),
                types:     alternate_map(&alternates.types,),
            },),
            itunes:           self.itunes.clone(),
            facebook:         self.facebook.as_ref().map(|facebook| Facebook {
                app_id: facebook.app_id.clone(),
                admins: many(&facebook.admins,),
            },),
            pinterest:        self.pinterest.clone(),
            format_detection: self.format_detection.clone(),
            verification:     self.verification.as_ref().map(|verification| Verification {
                google: many(&verification.google,),
                yahoo:  many(&verification.yahoo,),
                yandex: many(&verification.yandex,),
                me:     many(&verification.me,),
                other:  many_map(&verification.other,),
            },),
            apple_web_app:    self.apple_web_app.as_ref().map(apple_web_app_input,),
            open_graph:       self.open_graph.as_ref().map(open_graph_input,),
            twitter:          self.twitter.as_ref().map(twitter_input,),
            app_links:        self.app_links.as_ref().map(|links| AppLinks {
                ios:               many(&links.ios,),
                iphone:            many(&links.iphone,),
                ipad:              many(&links.ipad,),
                android:           many(&links.android,),
                windows_phone:     many(&links.windows_phone,),
                windows:           many(&links.windows,),
                windows_universal: many(&links.windows_universal,),
                web:               many(&links.web,),
            },),
            icons:            self.icons.as_ref().map(icons_input,),
            viewport:         self.viewport.as_ref().map(|viewport| Viewport {
                theme_color: viewport.theme_color.as_ref().map(|colors| {
                    OneOrMany::Many(colors.iter().cloned().map(ThemeColorSource::Descriptor,).collect(),)
                },),
                color_scheme: viewport.color_scheme.clone(),
                ..viewport.settings.clone()
            },),
        }
    }
}

fn apple_web_app_input(settings: &NormalizedAppleWebApp,) -> AppleWebApp
{
    if settings.status_bar_style.is_none() {
        return AppleWebApp::Enabled(settings.capable,);
    }

    AppleWebApp::Config(AppleWebAppConfig {
        capable:          Some(settings.capable,),
        title:            settings.title.clone(),
        startup_image:    settings.startup_image.as_ref().map(|images| {
            OneOrMany::Many(images.iter().cloned().map(UrlOr::Descriptor,).collect(),)
        },),
        status_bar_style: settings.status_bar_style.clone(),
    },)
}

fn icons_input(icons: &NormalizedIcons,) -> Icons
{
    let bucket = |icons: &[IconDescriptor],| {
        Some(OneOrMany::Many(icons.iter().cloned().map(UrlOr::Descriptor,).collect(),),)
    };

    Icons::Buckets(IconBuckets {
        icon:     bucket(&icons.icon,),
        shortcut: bucket(&icons.shortcut,),
        apple:    bucket(&icons.apple,),
        other:    Some(OneOrMany::Many(icons.other.clone(),),),
    },)
}

fn twitter_input(twitter: &NormalizedTwitter,) -> Twitter
{
    let (players, app,) = match &twitter.card {
        TwitterCard::Player {
            players,
        } => (Some(OneOrMany::Many(players.clone(),),), None,),
        TwitterCard::App {
            app,
        } => (None, Some(app.clone(),),),
        TwitterCard::Summary | TwitterCard::SummaryLargeImage => (None, None,),
    };

    Twitter {
        card: Some(twitter.card.as_str().to_owned(),),
        site: twitter.site.clone(),
        site_id: twitter.site_id.clone(),
        creator: twitter.creator.clone(),
        creator_id: twitter.creator_id.clone(),
        title: twitter.title.clone(),
        description: twitter.description.clone(),
        images: twitter.images.as_ref().map(|images| {
            OneOrMany::Many(images.iter().cloned().map(UrlOr::Descriptor,).collect(),)
        },),
        players,
        app,
    }
}

fn open_graph_input(og: &NormalizedOpenGraph,) -> OpenGraph
{
    let mut input = OpenGraph {
        kind: og.variant.as_ref().map(|variant| variant.as_str().to_owned(),),
        determiner: og.determiner.clone(),
        title: og.title.clone(),
        description: og.description.clone(),
        url: og.url.clone(),
        site_name: og.site_name.clone(),
        locale: og.locale.clone(),
        country_name: og.country_name.clone(),
        ttl: og.ttl.clone(),
        images: og.images.as_ref().map(|images| {
            OneOrMany::Many(images.iter().cloned().map(UrlOr::Descriptor,).collect(),)
        },),
        videos: many(&og.videos,),
        audio: many(&og.audio,),
        emails: many(&og.emails,),
        phone_numbers: many(&og.phone_numbers,),
        fax_numbers: many(&og.fax_numbers,),
        alternate_locale: many(&og.alternate_locale,),
        ..OpenGraph::default()
    };

    match &og.variant {
        Some(OpenGraphVariant::Article(article,),) => {
            input.published_time = article.published_time.clone();
            input.modified_time = article.modified_time.clone();
            input.expiration_time = article.expiration_time.clone();
            input.authors = many(&article.authors,);
            input.section = article.section.clone();
            input.tags = many(&article.tags,);
        }
        Some(OpenGraphVariant::Book(book,),) => {
            input.isbn = book.isbn.clone();
            input.release_date = book.release_date.clone();
            input.authors = many(&book.authors,);
            input.tags = many(&book.tags,);
        }
        Some(OpenGraphVariant::Profile(profile,),) => {
            input.first_name = profile.first_name.clone();
            input.last_name = profile.last_name.clone();
            input.username = profile.username.clone();
            input.gender = profile.gender.clone();
        }
        Some(OpenGraphVariant::MusicSong(song,),) => {
            input.duration = song.duration.clone();
            input.albums = many(&song.albums,);
            input.musicians = many(&song.musicians,);
        }
        Some(OpenGraphVariant::MusicAlbum(album,),) => {
            input.songs = many(&album.songs,);
            input.musicians = many(&album.musicians,);
            input.release_date = album.release_date.clone();
        }
        Some(OpenGraphVariant::MusicPlaylist(playlist,),) => {
            input.songs = many(&playlist.songs,);
            input.creators = many(&playlist.creators,);
        }
        Some(OpenGraphVariant::MusicRadioStation(station,),) => {
            input.creators = many(&station.creators,);
        }
        Some(OpenGraphVariant::VideoMovie(video,),) => video_input(&mut input, video,),
        Some(OpenGraphVariant::VideoEpisode(episode,),) => {
            video_input(&mut input, &episode.video,);
            input.series = episode.series.clone();
        }
        Some(
            OpenGraphVariant::Website | OpenGraphVariant::VideoTvShow | OpenGraphVariant::VideoOther,
        )
        | None => {}
    }

    input
}

fn video_input(input: &mut OpenGraph, video: &VideoObject,)
{
    input.actors = many(&video.actors,);
    input.directors = many(&video.directors,);
    input.writers = many(&video.writers,);
    input.duration = video.duration.clone();
    input.release_date = video.release_date.clone();
    input.tags = many(&video.tags,);
}
