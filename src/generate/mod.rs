// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Per-section tag generators.
//!
//! Every generator reads [`NormalizedMetadata`](crate::NormalizedMetadata)
//! and returns its tags in a fixed order. Sections that are absent yield an
//! empty list.

mod alternates;
mod app_links;
mod basic;
mod icons;
mod opengraph;
mod twitter;
mod viewport;

pub use alternates::generate_alternates;
pub use app_links::generate_app_links;
pub use basic::{
    generate_apple_web_app_links, generate_apple_web_app_meta, generate_basic_links, generate_basic_meta,
    generate_facebook, generate_format_detection, generate_itunes, generate_pinterest, generate_verification,
};
pub use icons::generate_icons;
pub use opengraph::generate_open_graph;
pub use twitter::generate_twitter;
pub use viewport::generate_viewport;
