// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Site-wide title templates.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer};

use crate::input::Title;

/// Placeholder replaced by the page title in pattern templates.
pub const TITLE_PLACEHOLDER: &str = "%s";

/// Formatting rule applied to page titles.
#[derive(Clone,)]
pub enum TemplateFormat
{
    /// Pattern in which every `%s` is replaced by the page title.
    Pattern(String,),
    /// Callback producing the final title.
    Function(Arc<dyn Fn(&str,) -> String + Send + Sync,>,),
}

impl fmt::Debug for TemplateFormat
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        match self {
            Self::Pattern(pattern,) => f.debug_tuple("Pattern",).field(pattern,).finish(),
            Self::Function(_,) => f.write_str("Function(..)",),
        }
    }
}

impl<'de,> Deserialize<'de,> for TemplateFormat
{
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
    where
        D: Deserializer<'de,>,
    {
        String::deserialize(deserializer,).map(Self::Pattern,)
    }
}

/// Site-wide title template with the fallback used for untitled pages.
///
/// # Examples
///
/// ```
/// use headmeta::{Title, TitleTemplate, resolve_title};
///
/// let template = TitleTemplate::new("My Site", "%s | My Site");
/// let title = Title::Text("About".to_owned());
/// assert_eq!(resolve_title(Some(&title), Some(&template)).as_deref(), Some("About | My Site"));
/// assert_eq!(resolve_title(None, Some(&template)).as_deref(), Some("My Site"));
/// ```
#[derive(Debug, Clone, Deserialize,)]
pub struct TitleTemplate
{
    /// Title used when the page does not set one.
    pub default:  String,
    /// Formatting rule applied to page titles.
    pub template: TemplateFormat,
}

impl TitleTemplate
{
    /// Creates a pattern template.
    pub fn new<D, T,>(default: D, template: T,) -> Self
    where
        D: Into<String,>,
        T: Into<String,>,
    {
        Self {
            default:  default.into(),
            template: TemplateFormat::Pattern(template.into(),),
        }
    }

    /// Creates a template backed by a callback.
    pub fn with_fn<D, F,>(default: D, format: F,) -> Self
    where
        D: Into<String,>,
        F: Fn(&str,) -> String + Send + Sync + 'static,
    {
        Self {
            default:  default.into(),
            template: TemplateFormat::Function(Arc::new(format,),),
        }
    }

    /// Formats a page title with the template.
    ///
    /// Pattern replacement is literal: `$` sequences and other characters in
    /// `title` are inserted unchanged.
    pub fn apply(&self, title: &str,) -> String
    {
        match &self.template {
            TemplateFormat::Pattern(pattern,) => pattern.replace(TITLE_PLACEHOLDER, title,),
            TemplateFormat::Function(format,) => format(title,),
        }
    }
}

/// Resolves the final document title.
///
/// Absolute titles bypass the template. Without a template the title is
/// returned as written. With a template a plain title is formatted and an
/// absent title falls back to the template's default.
pub fn resolve_title(title: Option<&Title,>, template: Option<&TitleTemplate,>,) -> Option<String,>
{
    match (title, template,) {
        (
            Some(Title::Absolute {
                absolute,
            },),
            _,
        ) => Some(absolute.clone(),),
        (Some(Title::Text(text,),), None,) => Some(text.clone(),),
        (Some(Title::Text(text,),), Some(template,),) => Some(template.apply(text,),),
        (None, Some(template,),) => Some(template.default.clone(),),
        (None, None,) => None,
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{TitleTemplate, resolve_title};
    use crate::input::Title;

    fn template() -> TitleTemplate
    {
        TitleTemplate::new("My Site", "%s | My Site",)
    }

    #[test]
    fn applies_pattern_to_plain_title()
    {
        let title = Title::Text("About".to_owned(),);
        assert_eq!(resolve_title(Some(&title,), Some(&template(),),).as_deref(), Some("About | My Site"));
    }

    #[test]
    fn absolute_title_bypasses_template()
    {
        let title = Title::Absolute {
            absolute: "Exact".to_owned(),
        };
        assert_eq!(resolve_title(Some(&title,), Some(&template(),),).as_deref(), Some("Exact"));
    }

    #[test]
    fn missing_title_uses_default()
    {
        assert_eq!(resolve_title(None, Some(&template(),),).as_deref(), Some("My Site"));
        assert_eq!(resolve_title(None, None,), None);
    }

    #[test]
    fn every_placeholder_is_replaced()
    {
        let template = TitleTemplate::new("d", "%s - %s",);
        assert_eq!(template.apply("x",), "x - x");
    }

    #[test]
    fn replacement_is_literal()
    {
        assert_eq!(template().apply("$& cost $1",), "$& cost $1 | My Site");
    }

    #[test]
    fn function_templates_are_called()
    {
        let template = TitleTemplate::with_fn("Shop", |title| title.to_uppercase(),);
        let title = Title::Text("cart".to_owned(),);
        assert_eq!(resolve_title(Some(&title,), Some(&template,),).as_deref(), Some("CART"));
    }

    #[test]
    fn deserializes_pattern_template()
    {
        let template: TitleTemplate =
            serde_yaml::from_str("{default: Shop, template: '%s · Shop'}",).expect("expected",);
        assert_eq!(template.apply("Cart",), "Cart · Shop");
    }

    proptest! {
        #[test]
        fn plain_title_without_template_is_unchanged(title in ".{0,32}") {
            let resolved = resolve_title(Some(&Title::Text(title.clone())), None);
            prop_assert_eq!(resolved, Some(title));
        }
    }
}
