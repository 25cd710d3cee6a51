// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Image validation shared by Open Graph and Twitter.

use tracing::debug;

use crate::{
    input::{MediaDescriptor, UrlOr},
    urls::absolute_url,
    value::OneOrMany,
};

/// Validates image entries, keeping only those with a usable absolute URL.
///
/// A bare string must parse as an absolute URL and is replaced by its parsed
/// form. A descriptor keeps its own `url` when that URL parses; otherwise it
/// survives with an empty `url` as long as its `secure_url` parses. Entries
/// satisfying neither rule are dropped.
pub(crate) fn validate_images(images: &OneOrMany<UrlOr<MediaDescriptor,>,>,)
-> Vec<MediaDescriptor,>
{
    images.iter().filter_map(validate_image,).collect()
}

fn validate_image(image: &UrlOr<MediaDescriptor,>,) -> Option<MediaDescriptor,>
{
    match image {
        UrlOr::Url(raw,) => {
            let parsed = absolute_url(raw,);
            if parsed.is_none() {
                debug!("dropping image {raw:?}: not an absolute URL");
            }
            parsed.map(MediaDescriptor::from_url,)
        }
        UrlOr::Descriptor(descriptor,) => {
            let secure = descriptor.secure_url.as_deref().and_then(absolute_url,);
            if !descriptor.url.is_empty() && absolute_url(&descriptor.url,).is_some() {
                return Some(MediaDescriptor {
                    secure_url: secure.or_else(|| descriptor.secure_url.clone(),),
                    ..descriptor.clone()
                },);
            }

            match secure {
                Some(secure_url,) => Some(MediaDescriptor {
                    url: String::new(),
                    secure_url: Some(secure_url,),
                    ..descriptor.clone()
                },),
                None => {
                    debug!("dropping image {:?}: neither url nor secureUrl is absolute", descriptor.url);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::validate_images;
    use crate::{
        input::{MediaDescriptor, UrlOr},
        value::{OneOrMany, Scalar},
    };

    #[test]
    fn strings_are_replaced_by_parsed_form()
    {
        let images = OneOrMany::One(UrlOr::Url("https://img.com".to_owned(),),);
        let validated = validate_images(&images,);
        assert_eq!(validated, vec![MediaDescriptor::from_url("https://img.com/".to_owned())]);
    }

    #[test]
    fn relative_strings_are_dropped()
    {
        let images = OneOrMany::Many(vec![
            UrlOr::Url("invalid-url".to_owned(),),
            UrlOr::Url("https://img.com/a.png".to_owned(),),
        ],);
        let validated = validate_images(&images,);
        assert_eq!(validated.len(), 1);
        assert_eq!(validated[0].url, "https://img.com/a.png");
    }

    #[test]
    fn descriptor_keeps_url_and_fields()
    {
        let descriptor = MediaDescriptor {
            url: "https://img.com/a.png".to_owned(),
            secure_url: Some("https://img.com/s.png".to_owned(),),
            width: Some(Scalar::Number(1200.0,),),
            ..MediaDescriptor::default()
        };
        let validated = validate_images(&OneOrMany::One(UrlOr::Descriptor(descriptor.clone(),),),);
        assert_eq!(validated, vec![descriptor]);
    }

    #[test]
    fn descriptor_falls_back_to_secure_url()
    {
        let descriptor = MediaDescriptor {
            url: String::new(),
            secure_url: Some("https://img.com/s.png".to_owned(),),
            ..MediaDescriptor::default()
        };
        let validated = validate_images(&OneOrMany::One(UrlOr::Descriptor(descriptor,),),);
        assert_eq!(validated.len(), 1);
        assert_eq!(validated[0].url, "");
        assert_eq!(validated[0].secure_url.as_deref(), Some("https://img.com/s.png"));
    }

    #[test]
    fn descriptor_without_usable_url_is_dropped()
    {
        let descriptor = MediaDescriptor {
            url: "/relative.png".to_owned(),
            secure_url: Some("also-relative".to_owned(),),
            ..MediaDescriptor::default()
        };
        assert!(validate_images(&OneOrMany::One(UrlOr::Descriptor(descriptor,),),).is_empty());
    }
}
