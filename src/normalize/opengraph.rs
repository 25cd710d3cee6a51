// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Open Graph normalization.
//!
//! The declared `type` selects which type-specific fields survive. Unknown
//! types are rejected here so the generator can match exhaustively.

use super::media::validate_images;
use crate::{
    error::Error,
    input::OpenGraph,
    normalized::{
        AlbumObject, ArticleObject, BookObject, EpisodeObject, NormalizedOpenGraph,
        OpenGraphVariant, PlaylistObject, ProfileObject, RadioStationObject, SongObject,
        VideoObject,
    },
    value::wrap_as_array,
};

/// Normalizes an Open Graph object.
///
/// # Errors
///
/// Returns [`Error::InvalidOpenGraphType`] when `type` is present but not
/// part of the Open Graph vocabulary.
pub(super) fn normalize_open_graph(og: &OpenGraph,) -> Result<NormalizedOpenGraph, Error,>
{
    let variant = og.kind.as_deref().map(|kind| open_graph_variant(kind, og,),).transpose()?;
    let images = og.images.as_ref().map(validate_images,).filter(|images| !images.is_empty(),);

    Ok(NormalizedOpenGraph {
        determiner: og.determiner.clone(),
        title: og.title.clone(),
        description: og.description.clone(),
        url: og.url.clone(),
        site_name: og.site_name.clone(),
        locale: og.locale.clone(),
        country_name: og.country_name.clone(),
        ttl: og.ttl.clone(),
        images,
        videos: wrap_as_array(og.videos.as_ref(),),
        audio: wrap_as_array(og.audio.as_ref(),),
        emails: wrap_as_array(og.emails.as_ref(),),
        phone_numbers: wrap_as_array(og.phone_numbers.as_ref(),),
        fax_numbers: wrap_as_array(og.fax_numbers.as_ref(),),
        alternate_locale: wrap_as_array(og.alternate_locale.as_ref(),),
        variant,
    },)
}

fn open_graph_variant(kind: &str, og: &OpenGraph,) -> Result<OpenGraphVariant, Error,>
{
    let variant = match kind {
        "website" => OpenGraphVariant::Website,
        "article" => OpenGraphVariant::Article(ArticleObject {
            published_time:  og.published_time.clone(),
            modified_time:   og.modified_time.clone(),
            expiration_time: og.expiration_time.clone(),
            authors:         wrap_as_array(og.authors.as_ref(),),
            section:         og.section.clone(),
            tags:            wrap_as_array(og.tags.as_ref(),),
        },),
        "book" => OpenGraphVariant::Book(BookObject {
            isbn:         og.isbn.clone(),
            release_date: og.release_date.clone(),
            authors:      wrap_as_array(og.authors.as_ref(),),
            tags:         wrap_as_array(og.tags.as_ref(),),
        },),
        "profile" => OpenGraphVariant::Profile(ProfileObject {
            first_name: og.first_name.clone(),
            last_name:  og.last_name.clone(),
            username:   og.username.clone(),
            gender:     og.gender.clone(),
        },),
        "music.song" => OpenGraphVariant::MusicSong(SongObject {
            duration:  og.duration.clone(),
            albums:    wrap_as_array(og.albums.as_ref(),),
            musicians: wrap_as_array(og.musicians.as_ref(),),
        },),
        "music.album" => OpenGraphVariant::MusicAlbum(AlbumObject {
            songs:        wrap_as_array(og.songs.as_ref(),),
            musicians:    wrap_as_array(og.musicians.as_ref(),),
            release_date: og.release_date.clone(),
        },),
        "music.playlist" => OpenGraphVariant::MusicPlaylist(PlaylistObject {
            songs:    wrap_as_array(og.songs.as_ref(),),
            creators: wrap_as_array(og.creators.as_ref(),),
        },),
        "music.radio_station" => OpenGraphVariant::MusicRadioStation(RadioStationObject {
            creators: wrap_as_array(og.creators.as_ref(),),
        },),
        "video.movie" => OpenGraphVariant::VideoMovie(video_object(og,),),
        "video.episode" => OpenGraphVariant::VideoEpisode(EpisodeObject {
            video:  video_object(og,),
            series: og.series.clone(),
        },),
        "video.tv_show" => OpenGraphVariant::VideoTvShow,
        "video.other" => OpenGraphVariant::VideoOther,
        unknown => return Err(Error::invalid_open_graph_type(unknown,),),
    };

    Ok(variant,)
}

fn video_object(og: &OpenGraph,) -> VideoObject
{
    VideoObject {
        actors:       wrap_as_array(og.actors.as_ref(),),
        directors:    wrap_as_array(og.directors.as_ref(),),
        writers:      wrap_as_array(og.writers.as_ref(),),
        duration:     og.duration.clone(),
        release_date: og.release_date.clone(),
        tags:         wrap_as_array(og.tags.as_ref(),),
    }
}
