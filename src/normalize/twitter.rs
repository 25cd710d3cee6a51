// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use super::media::validate_images;
use crate::{
    error::Error,
    input::Twitter,
    normalized::{NormalizedTwitter, TwitterCard},
    value::{non_empty, wrap_as_array},
};

/// Normalizes a Twitter card, choosing a default card type when none is set.
///
/// Without an explicit card the result is `summary_large_image` when at
/// least one image survives validation and `summary` otherwise.
///
/// # Errors
///
/// Returns [`Error::InvalidTwitterCard`] for cards outside the vocabulary.
pub(super) fn normalize_twitter(twitter: &Twitter,) -> Result<NormalizedTwitter, Error,>
{
    let images = twitter.images.as_ref().map(validate_images,);
    let has_images = images.as_ref().is_some_and(|images| !images.is_empty(),);

    let card = match twitter.card.as_deref().filter(|card| !card.is_empty(),) {
        None if has_images => TwitterCard::SummaryLargeImage,
        None | Some("summary",) => TwitterCard::Summary,
        Some("summary_large_image",) => TwitterCard::SummaryLargeImage,
        Some("player",) => TwitterCard::Player {
            players: wrap_as_array(twitter.players.as_ref(),).unwrap_or_default(),
        },
        Some("app",) => TwitterCard::App {
            app: twitter.app.clone().unwrap_or_default(),
        },
        Some(unknown,) => return Err(Error::invalid_twitter_card(unknown,),),
    };

    Ok(NormalizedTwitter {
        card,
        site: non_empty(twitter.site.as_ref(),),
        site_id: non_empty(twitter.site_id.as_ref(),),
        creator: non_empty(twitter.creator.as_ref(),),
        creator_id: non_empty(twitter.creator_id.as_ref(),),
        title: twitter.title.clone(),
        description: non_empty(twitter.description.as_ref(),),
        images,
    },)
}

#[cfg(test)]
mod tests
{
    use super::normalize_twitter;
    use crate::{
        error::Error,
        input::{Twitter, TwitterPlayer, UrlOr},
        normalized::TwitterCard,
        value::OneOrMany,
    };

    #[test]
    fn defaults_to_summary_without_images()
    {
        let twitter = Twitter {
            site: Some(String::new(),),
            ..Twitter::default()
        };
        let normalized = normalize_twitter(&twitter,).expect("expected normalization",);
        assert_eq!(normalized.card, TwitterCard::Summary);
        assert_eq!(normalized.site, None);
    }

    #[test]
    fn defaults_to_large_image_when_images_survive()
    {
        let twitter = Twitter {
            images: Some(OneOrMany::One(UrlOr::Url("https://img.com/a.png".to_owned(),),),),
            ..Twitter::default()
        };
        let normalized = normalize_twitter(&twitter,).expect("expected normalization",);
        assert_eq!(normalized.card, TwitterCard::SummaryLargeImage);
    }

    #[test]
    fn invalid_images_do_not_upgrade_card()
    {
        let twitter = Twitter {
            images: Some(OneOrMany::One(UrlOr::Url("relative.png".to_owned(),),),),
            ..Twitter::default()
        };
        let normalized = normalize_twitter(&twitter,).expect("expected normalization",);
        assert_eq!(normalized.card, TwitterCard::Summary);
        assert_eq!(normalized.images, Some(Vec::new()));
    }

    #[test]
    fn player_card_coerces_players()
    {
        let twitter = Twitter {
            card: Some("player".to_owned(),),
            players: Some(OneOrMany::One(TwitterPlayer {
                player_url: "https://p.com/embed".to_owned(),
                ..TwitterPlayer::default()
            },),),
            ..Twitter::default()
        };
        match normalize_twitter(&twitter,).expect("expected normalization",).card {
            TwitterCard::Player {
                players,
            } => assert_eq!(players.len(), 1),
            other => panic!("expected player card, got {other:?}"),
        }
    }

    #[test]
    fn app_card_defaults_app_details()
    {
        let twitter = Twitter {
            card: Some("app".to_owned(),),
            ..Twitter::default()
        };
        let normalized = normalize_twitter(&twitter,).expect("expected normalization",);
        assert!(matches!(normalized.card, TwitterCard::App { .. }));
    }

    #[test]
    fn unknown_card_is_rejected()
    {
        let twitter = Twitter {
            card: Some("gallery".to_owned(),),
            ..Twitter::default()
        };
        let error = normalize_twitter(&twitter,).expect_err("expected invalid card",);
        assert!(matches!(error, Error::InvalidTwitterCard { .. }));
    }
}
