// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{
    normalized::NormalizedMetadata,
    tag::{MetaTag, text},
};

/// Viewport layout, theme colors, and color scheme.
pub fn generate_viewport(metadata: &NormalizedMetadata,) -> Vec<MetaTag,>
{
    let Some(viewport,) = &metadata.viewport else {
        return Vec::new();
    };

    let mut tags: Vec<MetaTag,> = MetaTag::name("viewport", text(viewport.layout.as_ref(),),).into_iter().collect();
    for theme in viewport.theme_color.iter().flatten() {
        tags.extend(MetaTag::name_with_media("theme-color", theme.media.clone(), Some(theme.color.clone(),),),);
    }
    tags.extend(MetaTag::name("color-scheme", text(viewport.color_scheme.as_ref(),),),);
    tags
}

#[cfg(test)]
mod tests
{
    use super::generate_viewport;
    use crate::{
        input::ThemeColor,
        normalized::{NormalizedMetadata, NormalizedViewport},
        tag::MetaTag,
    };

    #[test]
    fn layout_then_theme_then_scheme()
    {
        let metadata = NormalizedMetadata {
            viewport: Some(NormalizedViewport {
                layout: Some("width=device-width, initial-scale=1".to_owned(),),
                theme_color: Some(vec![
                    ThemeColor {
                        color: "#fff".to_owned(),
                        media: Some("(prefers-color-scheme: light)".to_owned(),),
                    },
                    ThemeColor {
                        color: "#000".to_owned(),
                        media: None,
                    },
                ],),
                color_scheme: Some("dark".to_owned(),),
                ..NormalizedViewport::default()
            },),
            ..NormalizedMetadata::default()
        };

        assert_eq!(generate_viewport(&metadata,), vec![
            MetaTag::Name {
                name:    "viewport".to_owned(),
                media:   None,
                content: "width=device-width, initial-scale=1".to_owned(),
            },
            MetaTag::Name {
                name:    "theme-color".to_owned(),
                media:   Some("(prefers-color-scheme: light)".to_owned()),
                content: "#fff".to_owned(),
            },
            MetaTag::Name {
                name:    "theme-color".to_owned(),
                media:   None,
                content: "#000".to_owned(),
            },
            MetaTag::Name {
                name:    "color-scheme".to_owned(),
                media:   None,
                content: "dark".to_owned(),
            },
        ]);
    }

    #[test]
    fn empty_viewport_emits_nothing()
    {
        let metadata = NormalizedMetadata {
            viewport: Some(NormalizedViewport::default(),),
            ..NormalizedMetadata::default()
        };
        assert!(generate_viewport(&metadata,).is_empty());
    }
}
