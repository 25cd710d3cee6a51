// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use headmeta::{
    InputMetadata, MetadataGenerator, TitleTemplate, generate_metadata, normalize, parse_base_url, parse_metadata,
    resolve_metadata,
};

const SMALL_PAGE: &str = r"
title: Home
description: Landing page
keywords: [rust, metadata]
";

const RICH_PAGE: &str = r#"
title: Release notes
description: Everything that changed in this release
applicationName: Example
authors:
  - {name: Jane, url: /team/jane}
  - {name: John}
keywords: [release, changelog, rust]
robots: {index: true, follow: true, googleBot: {index: true, nosnippet: true, max-image-preview: large}}
alternates:
  canonical: /releases/1.0
  languages:
    en-US: /en-US/releases/1.0
    de-DE: /de-DE/releases/1.0
  types:
    application/rss+xml: [{url: /feed.xml, title: Feed}]
itunes: {appId: "123456", appArgument: "example://releases"}
verification: {google: g-token, other: {me: [a@b.c, https://example.com]}}
appleWebApp: {title: Example, statusBarStyle: black-translucent, startupImage: [/startup.png]}
openGraph:
  type: article
  title: Release notes
  url: /releases/1.0
  siteName: Example
  images:
    - {url: "https://cdn.example.com/og.png", width: 1200, height: 630, alt: Release}
    - "https://cdn.example.com/og-square.png"
  publishedTime: "2024-01-01T00:00:00Z"
  authors: [/team/jane, /team/john]
  tags: [release, rust]
twitter:
  card: app
  site: "@example"
  images: "https://cdn.example.com/card.png"
  app: {name: Example, id: {iphone: id123, googleplay: com.example}, url: {iphone: /ios}}
appLinks:
  ios: {url: "example://releases", app_store_id: "123456"}
  web: {url: /releases/1.0, should_fallback: false}
icons:
  icon: [/icon-32.png, {url: /icon.svg, type: image/svg+xml}]
  shortcut: /favicon.ico
  apple: {url: /apple.png, sizes: 180x180}
viewport: {width: device-width, initialScale: 1, themeColor: [{color: "#fff", media: "(prefers-color-scheme: light)"}]}
"#;

fn rich_page() -> InputMetadata
{
    parse_metadata(RICH_PAGE,).expect("parse failed",)
}

fn benchmark_parse_metadata(c: &mut Criterion,)
{
    c.bench_function("parse_metadata_small", |b| {
        b.iter(|| parse_metadata(black_box(SMALL_PAGE,),).expect("parse failed",),)
    },);

    c.bench_function("parse_metadata_rich", |b| {
        b.iter(|| parse_metadata(black_box(RICH_PAGE,),).expect("parse failed",),)
    },);
}

fn benchmark_normalize(c: &mut Criterion,)
{
    let small = parse_metadata(SMALL_PAGE,).expect("parse failed",);
    let rich = rich_page();

    c.bench_function("normalize_small", |b| b.iter(|| normalize(black_box(&small,),).expect("normalize failed",),),);
    c.bench_function("normalize_rich", |b| b.iter(|| normalize(black_box(&rich,),).expect("normalize failed",),),);
}

fn benchmark_resolve(c: &mut Criterion,)
{
    let rich = rich_page();
    let base = parse_base_url("https://example.com/",).expect("invalid base",);

    c.bench_function("resolve_rich_with_base", |b| {
        b.iter(|| resolve_metadata(black_box(&rich,), Some(&base,),),)
    },);
    c.bench_function("resolve_rich_without_base", |b| b.iter(|| resolve_metadata(black_box(&rich,), None,),),);
}

fn benchmark_generate(c: &mut Criterion,)
{
    let rich = rich_page();
    let generator = MetadataGenerator::builder()
        .title_template(TitleTemplate::new("Example", "%s | Example",),)
        .base_url("https://example.com/",)
        .build()
        .expect("invalid generator",);

    c.bench_function("generate_metadata_rich", |b| {
        b.iter(|| {
            let generated = generate_metadata(black_box(&rich,),).expect("generation failed",);
            black_box(generated.meta.len() + generated.links.len(),)
        },)
    },);

    c.bench_function("generator_rich_with_base", |b| {
        b.iter(|| generator.generate(black_box(&rich,),).expect("generation failed",),)
    },);
}

fn benchmark_many_pages(c: &mut Criterion,)
{
    let mut pages = Vec::with_capacity(100,);
    for index in 0..100 {
        pages.push(
            parse_metadata(&format!(
                "title: Page {index}\ndescription: Page number {index}\nopenGraph: {{type: website, url: /pages/{index}}}\n"
            ),)
            .expect("parse failed",),
        );
    }

    c.bench_function("generate_metadata_100_pages", |b| {
        b.iter(|| {
            for page in &pages {
                black_box(generate_metadata(black_box(page,),).expect("generation failed",),);
            }
        },)
    },);
}

criterion_group!(
    benches,
    benchmark_parse_metadata,
    benchmark_normalize,
    benchmark_resolve,
    benchmark_generate,
    benchmark_many_pages
);
criterion_main!(benches);
