// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{
    normalized::{NormalizedMetadata, OpenGraphVariant, VideoObject},
    tag::{MetaTag, TagKind, multi_meta, stringified, text, truthy},
};

fn property(key: &str, value: Option<&String,>,) -> Option<MetaTag,>
{
    MetaTag::property(key, text(value,),)
}

/// Open Graph tags: common fields first, then the typed block.
pub fn generate_open_graph(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(og,) = &metadata.open_graph else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    tags.extend(property("og:determiner", og.determiner.as_ref(),),);
    tags.extend(property("og:title", og.title.as_ref(),),);
    tags.extend(property("og:description", og.description.as_ref(),),);
    tags.extend(property("og:url", og.url.as_ref(),),);
    tags.extend(property("og:site_name", og.site_name.as_ref(),),);
    tags.extend(property("og:locale", og.locale.as_ref(),),);
    tags.extend(property("og:country_name", og.country_name.as_ref(),),);
    tags.extend(MetaTag::property("og:ttl", stringified(og.ttl.as_ref(),),),);
    tags.extend(multi_meta(TagKind::Property, "og:image", og.images.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "og:video", og.videos.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "og:audio", og.audio.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "og:email", og.emails.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "og:phone_number", og.phone_numbers.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "og:fax_number", og.fax_numbers.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "og:locale:alternate", og.alternate_locale.as_deref(),),);

    if let Some(variant,) = &og.variant {
        tags.extend(MetaTag::property("og:type", Some(variant.as_str().to_owned(),),),);
        tags.extend(variant_tags(variant,),);
    }

    tags
}

fn variant_tags(variant: &OpenGraphVariant,) -> Vec<MetaTag,>
{
    let mut tags = Vec::new();
    match variant {
        OpenGraphVariant::Article(article,) => {
            tags.extend(property("article:published_time", article.published_time.as_ref(),),);
            tags.extend(property("article:modified_time", article.modified_time.as_ref(),),);
            tags.extend(property("article:expiration_time", article.expiration_time.as_ref(),),);
            tags.extend(multi_meta(TagKind::Property, "article:author", article.authors.as_deref(),),);
            tags.extend(property("article:section", article.section.as_ref(),),);
            tags.extend(multi_meta(TagKind::Property, "article:tag", article.tags.as_deref(),),);
        }
        OpenGraphVariant::Book(book,) => {
            tags.extend(property("book:isbn", book.isbn.as_ref(),),);
            tags.extend(property("book:release_date", book.release_date.as_ref(),),);
            tags.extend(multi_meta(TagKind::Property, "book:author", book.authors.as_deref(),),);
            tags.extend(multi_meta(TagKind::Property, "book:tag", book.tags.as_deref(),),);
        }
        OpenGraphVariant::Profile(profile,) => {
            tags.extend(property("profile:first_name", profile.first_name.as_ref(),),);
            tags.extend(property("profile:last_name", profile.last_name.as_ref(),),);
            tags.extend(property("profile:username", profile.username.as_ref(),),);
            tags.extend(property("profile:gender", profile.gender.as_ref(),),);
        }
        OpenGraphVariant::MusicSong(song,) => {
            tags.extend(MetaTag::property("music:duration", stringified(song.duration.as_ref(),),),);
            tags.extend(multi_meta(TagKind::Property, "music:album", song.albums.as_deref(),),);
            tags.extend(multi_meta(TagKind::Property, "music:musician", song.musicians.as_deref(),),);
        }
        OpenGraphVariant::MusicAlbum(album,) => {
            tags.extend(multi_meta(TagKind::Property, "music:song", album.songs.as_deref(),),);
            tags.extend(multi_meta(TagKind::Property, "music:musician", album.musicians.as_deref(),),);
            tags.extend(property("music:release_date", album.release_date.as_ref(),),);
        }
        OpenGraphVariant::MusicPlaylist(playlist,) => {
            tags.extend(multi_meta(TagKind::Property, "music:song", playlist.songs.as_deref(),),);
            tags.extend(multi_meta(TagKind::Property, "music:creator", playlist.creators.as_deref(),),);
        }
        OpenGraphVariant::MusicRadioStation(station,) => {
            tags.extend(multi_meta(TagKind::Property, "music:creator", station.creators.as_deref(),),);
        }
        OpenGraphVariant::VideoMovie(video,) => tags.extend(video_tags(video,),),
        OpenGraphVariant::VideoEpisode(episode,) => {
            tags.extend(video_tags(&episode.video,),);
            tags.extend(property("video:series", episode.series.as_ref(),),);
        }
        OpenGraphVariant::Website | OpenGraphVariant::VideoTvShow | OpenGraphVariant::VideoOther => {}
    }
    tags
}

fn video_tags(video: &VideoObject,) -> Vec<MetaTag,>
{
    let mut tags = multi_meta(TagKind::Property, "video:actor", video.actors.as_deref(),);
    tags.extend(multi_meta(TagKind::Property, "video:director", video.directors.as_deref(),),);
    tags.extend(multi_meta(TagKind::Property, "video:writer", video.writers.as_deref(),),);
    tags.extend(MetaTag::property("video:duration", truthy(video.duration.as_ref(),),),);
    tags.extend(property("video:release_date", video.release_date.as_ref(),),);
    tags.extend(multi_meta(TagKind::Property, "video:tag", video.tags.as_deref(),),);
    tags
}

#[cfg(test)]
mod tests
{
    use super::generate_open_graph;
    use crate::{
        input::{ActorReference, MediaDescriptor, MusicReference, UrlOr},
        normalized::{
            ArticleObject, EpisodeObject, NormalizedMetadata, NormalizedOpenGraph,
            OpenGraphVariant, SongObject, VideoObject,
        },
        tag::MetaTag,
        value::Scalar,
    };

    fn pairs(tags: &[MetaTag],) -> Vec<(String, String,),>
    {
        tags.iter()
            .map(|tag| (tag.key().unwrap_or_default().to_owned(), tag.content().to_owned(),),)
            .collect()
    }

    fn with_og(og: NormalizedOpenGraph,) -> NormalizedMetadata
    {
        NormalizedMetadata {
            open_graph: Some(og,),
            ..NormalizedMetadata::default()
        }
    }

    fn pair(key: &str, content: &str,) -> (String, String,)
    {
        (key.to_owned(), content.to_owned(),)
    }

    #[test]
    fn article_block_follows_common_fields()
    {
        let og = NormalizedOpenGraph {
            title: Some("Post".to_owned(),),
            url: Some("https://example.com/post".to_owned(),),
            images: Some(vec![MediaDescriptor {
                url: "https://img.com/a.png".to_owned(),
                width: Some(Scalar::Number(1200.0,),),
                height: Some(Scalar::Number(630.0,),),
                ..MediaDescriptor::default()
            }],),
            variant: Some(OpenGraphVariant::Article(ArticleObject {
                published_time: Some("2024-01-01".to_owned(),),
                authors: Some(vec!["Jane".to_owned(), "John".to_owned()],),
                tags: Some(vec!["rust".to_owned()],),
                ..ArticleObject::default()
            },),),
            ..NormalizedOpenGraph::default()
        };

        assert_eq!(pairs(&generate_open_graph(&with_og(og,),),), vec![
            pair("og:title", "Post"),
            pair("og:url", "https://example.com/post"),
            pair("og:image", "https://img.com/a.png"),
            pair("og:image:width", "1200"),
            pair("og:image:height", "630"),
            pair("og:type", "article"),
            pair("article:published_time", "2024-01-01"),
            pair("article:author", "Jane"),
            pair("article:author", "John"),
            pair("article:tag", "rust"),
        ]);
    }

    #[test]
    fn secure_url_only_image_skips_bare_tag()
    {
        let og = NormalizedOpenGraph {
            images: Some(vec![MediaDescriptor {
                url: String::new(),
                secure_url: Some("https://img.com/s.png".to_owned(),),
                ..MediaDescriptor::default()
            }],),
            ..NormalizedOpenGraph::default()
        };
        assert_eq!(pairs(&generate_open_graph(&with_og(og,),),), vec![pair(
            "og:image:secure_url",
            "https://img.com/s.png"
        )]);
    }

    #[test]
    fn ttl_zero_is_emitted_as_string()
    {
        let og = NormalizedOpenGraph {
            ttl: Some(Scalar::Number(0.0,),),
            ..NormalizedOpenGraph::default()
        };
        assert_eq!(pairs(&generate_open_graph(&with_og(og,),),), vec![pair("og:ttl", "0")]);
    }

    #[test]
    fn song_durations_and_album_descriptors()
    {
        let og = NormalizedOpenGraph {
            variant: Some(OpenGraphVariant::MusicSong(SongObject {
                duration:  Some(Scalar::Number(0.0,),),
                albums:    Some(vec![UrlOr::Descriptor(MusicReference {
                    url:   "/album".to_owned(),
                    disc:  None,
                    track: Some(Scalar::Number(2.0,),),
                },)],),
                musicians: Some(vec!["/band".to_owned()],),
            },),),
            ..NormalizedOpenGraph::default()
        };
        assert_eq!(pairs(&generate_open_graph(&with_og(og,),),), vec![
            pair("og:type", "music.song"),
            pair("music:duration", "0"),
            pair("music:album:url", "/album"),
            pair("music:album:track", "2"),
            pair("music:musician", "/band"),
        ]);
    }

    #[test]
    fn episode_drops_zero_duration_and_adds_series()
    {
        let og = NormalizedOpenGraph {
            variant: Some(OpenGraphVariant::VideoEpisode(EpisodeObject {
                video:  VideoObject {
                    actors: Some(vec![UrlOr::Descriptor(ActorReference {
                        url:  "/actor".to_owned(),
                        role: Some("Lead".to_owned(),),
                    },)],),
                    duration: Some(Scalar::Number(0.0,),),
                    ..VideoObject::default()
                },
                series: Some("/show".to_owned(),),
            },),),
            ..NormalizedOpenGraph::default()
        };
        assert_eq!(pairs(&generate_open_graph(&with_og(og,),),), vec![
            pair("og:type", "video.episode"),
            pair("video:actor:url", "/actor"),
            pair("video:actor:role", "Lead"),
            pair("video:series", "/show"),
        ]);
    }

    #[test]
    fn untyped_variants_emit_only_type()
    {
        let og = NormalizedOpenGraph {
            variant: Some(OpenGraphVariant::VideoTvShow,),
            ..NormalizedOpenGraph::default()
        };
        assert_eq!(pairs(&generate_open_graph(&with_og(og,),),), vec![pair("og:type", "video.tv_show")]);
    }
}
