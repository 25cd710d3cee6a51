// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{
    input::TWITTER_APP_PLATFORMS,
    normalized::{NormalizedMetadata, TwitterCard},
    tag::{MetaTag, TagKind, multi_meta, text, truthy},
};

/// Twitter card tags, including the player and app blocks.
pub fn generate_twitter(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(twitter,) = &metadata.twitter else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    tags.extend(MetaTag::name("twitter:card", Some(twitter.card.as_str().to_owned(),),),);
    tags.extend(MetaTag::name("twitter:site", text(twitter.site.as_ref(),),),);
    tags.extend(MetaTag::name("twitter:site:id", text(twitter.site_id.as_ref(),),),);
    tags.extend(MetaTag::name("twitter:creator", text(twitter.creator.as_ref(),),),);
    tags.extend(MetaTag::name("twitter:creator:id", text(twitter.creator_id.as_ref(),),),);
    tags.extend(MetaTag::name("twitter:title", text(twitter.title.as_ref(),),),);
    tags.extend(MetaTag::name("twitter:description", text(twitter.description.as_ref(),),),);
    tags.extend(multi_meta(TagKind::Name, "twitter:image", twitter.images.as_deref(),),);

    match &twitter.card {
        TwitterCard::Player {
            players,
        } => {
            for player in players {
                tags.extend(MetaTag::name("twitter:player", Some(player.player_url.clone(),),),);
                tags.extend(MetaTag::name("twitter:player:stream", Some(player.stream_url.clone(),),),);
                tags.extend(MetaTag::name("twitter:player:width", truthy(player.width.as_ref(),),),);
                tags.extend(MetaTag::name("twitter:player:height", truthy(player.height.as_ref(),),),);
            }
        }
        TwitterCard::App {
            app,
        } => {
            for platform in TWITTER_APP_PLATFORMS {
                tags.extend(MetaTag::name(format!("twitter:app:name:{platform}"), text(app.name.as_ref(),),),);
                tags.extend(MetaTag::name(
                    format!("twitter:app:id:{platform}"),
                    truthy(app.id.get(platform,),),
                ),);
                tags.extend(MetaTag::name(
                    format!("twitter:app:url:{platform}"),
                    text(app.url.as_ref().and_then(|urls| urls.get(platform,),),),
                ),);
            }
        }
        TwitterCard::Summary | TwitterCard::SummaryLargeImage => {}
    }

    tags
}
