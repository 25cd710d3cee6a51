// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use crate::{
    input::{ThemeColor, ThemeColorSource, Viewport},
    normalized::NormalizedViewport,
    value::{Scalar, non_empty},
};

pub(super) fn normalize_viewport(viewport: &Viewport,) -> NormalizedViewport
{
    NormalizedViewport {
        settings:     Viewport {
            theme_color: None,
            color_scheme: None,
            ..viewport.clone()
        },
        layout:       render_layout(viewport,),
        theme_color:  viewport.theme_color.as_ref().map(|colors| {
            colors
                .iter()
                .map(|color| match color {
                    ThemeColorSource::Color(color,) => ThemeColor {
                        color: color.clone(),
                        media: None,
                    },
                    ThemeColorSource::Descriptor(color,) => color.clone(),
                },)
                .collect()
        },),
        color_scheme: non_empty(viewport.color_scheme.as_ref(),),
    }
}

/// Joins the layout settings into the `content` of the viewport tag.
///
/// Booleans render as `yes`/`no`; other falsy values are skipped.
fn render_layout(viewport: &Viewport,) -> Option<String,>
{
    let parts: Vec<String,> = viewport
        .layout()
        .into_iter()
        .filter_map(|(key, value,)| match value? {
            Scalar::Bool(flag,) => Some(format!("{key}={}", if *flag { "yes" } else { "no" }),),
            value if value.is_falsy() => None,
            value => Some(format!("{key}={}", value.to_content()),),
        },)
        .collect();

    (!parts.is_empty()).then(|| parts.join(", ",),)
}
