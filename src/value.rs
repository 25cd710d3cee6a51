// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Value shapes shared by the input model, the normalizer, and the tag
//! emitters.
//!
//! Metadata authors may write most list-valued fields either as a single
//! value or as an array. [`OneOrMany`] captures both spellings and the
//! normalizer collapses them into plain vectors. [`Scalar`] carries the
//! string/number/boolean leaves whose truthiness decides tag emission.

use serde::{Deserialize, Serialize};

/// A field that accepts either a single value or a list of values.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum OneOrMany<T,>
{
    /// Single value written without surrounding brackets.
    One(T,),
    /// Explicit list of values.
    Many(Vec<T,>,),
}

impl<T,> OneOrMany<T,>
{
    /// Coerces the value into a vector, wrapping a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use headmeta::OneOrMany;
    ///
    /// assert_eq!(OneOrMany::One("a").into_vec(), vec!["a"]);
    /// assert_eq!(OneOrMany::Many(vec!["a", "b"]).into_vec(), vec!["a", "b"]);
    /// ```
    pub fn into_vec(self,) -> Vec<T,>
    {
        match self {
            Self::One(value,) => vec![value],
            Self::Many(values,) => values,
        }
    }

    /// Iterates over the contained values regardless of the spelling.
    pub fn iter(&self,) -> std::slice::Iter<'_, T,>
    {
        match self {
            Self::One(value,) => std::slice::from_ref(value,).iter(),
            Self::Many(values,) => values.iter(),
        }
    }

    /// Transforms each value while keeping the original shape.
    ///
    /// Returns `None` when a single value is rejected by `transform`; list
    /// values drop rejected entries and always survive, possibly empty.
    pub fn filter_map<U, F,>(&self, mut transform: F,) -> Option<OneOrMany<U,>,>
    where
        F: FnMut(&T,) -> Option<U,>,
    {
        match self {
            Self::One(value,) => transform(value,).map(OneOrMany::One,),
            Self::Many(values,) => Some(OneOrMany::Many(values.iter().filter_map(transform,).collect(),),),
        }
    }
}

impl<T: Clone,> OneOrMany<T,>
{
    /// Clones the contained values into a vector.
    pub fn to_vec(&self,) -> Vec<T,>
    {
        self.iter().cloned().collect()
    }
}

impl<T,> From<Vec<T,>,> for OneOrMany<T,>
{
    fn from(values: Vec<T,>,) -> Self
    {
        Self::Many(values,)
    }
}

/// Wraps an optional single-or-list field into an optional vector.
///
/// Absent input stays absent; everything else is coerced by
/// [`OneOrMany::to_vec`].
pub fn wrap_as_array<T: Clone,>(value: Option<&OneOrMany<T,>,>,) -> Option<Vec<T,>,>
{
    value.map(OneOrMany::to_vec,)
}

/// Primitive leaf value accepted by content-bearing fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum Scalar
{
    /// Boolean flag.
    Bool(bool,),
    /// Numeric value.
    Number(f64,),
    /// Free-form text.
    Text(String,),
}

impl Scalar
{
    /// Returns `true` for the values that suppress tag emission: the empty
    /// string, zero, NaN, and `false`.
    pub fn is_falsy(&self,) -> bool
    {
        match self {
            Self::Bool(flag,) => !flag,
            Self::Number(number,) => *number == 0.0 || number.is_nan(),
            Self::Text(text,) => text.is_empty(),
        }
    }

    /// Renders the value as tag content.
    ///
    /// Integral numbers are printed without a fractional part, so `1200.0`
    /// becomes `"1200"`.
    pub fn to_content(&self,) -> String
    {
        match self {
            Self::Bool(flag,) => flag.to_string(),
            Self::Number(number,) => format_number(*number,),
            Self::Text(text,) => text.clone(),
        }
    }

    /// Returns the text when the scalar is a string.
    pub fn as_text(&self,) -> Option<&str,>
    {
        match self {
            Self::Text(text,) => Some(text.as_str(),),
            _ => None,
        }
    }
}

impl From<&str,> for Scalar
{
    fn from(value: &str,) -> Self
    {
        Self::Text(value.to_owned(),)
    }
}

impl From<String,> for Scalar
{
    fn from(value: String,) -> Self
    {
        Self::Text(value,)
    }
}

impl From<bool,> for Scalar
{
    fn from(value: bool,) -> Self
    {
        Self::Bool(value,)
    }
}

impl From<f64,> for Scalar
{
    fn from(value: f64,) -> Self
    {
        Self::Number(value,)
    }
}

impl From<i64,> for Scalar
{
    fn from(value: i64,) -> Self
    {
        Self::Number(value as f64,)
    }
}

/// Formats a number the way a browser would print it in an attribute.
pub fn format_number(number: f64,) -> String
{
    if number.is_nan() {
        return "NaN".to_owned();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if number == number.trunc() && number.abs() < 1e21 {
        // -0.0 prints as "0"
        return format!("{}", number as i128);
    }
    number.to_string()
}

/// Returns the value only when it is a non-empty string.
pub fn non_empty(value: Option<&String,>,) -> Option<String,>
{
    value.filter(|text| !text.is_empty(),).cloned()
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{OneOrMany, Scalar, format_number, non_empty, wrap_as_array};

    #[test]
    fn deserializes_single_value_and_list()
    {
        let one: OneOrMany<String,> = serde_yaml::from_str("alpha",).expect("expected single",);
        assert_eq!(one, OneOrMany::One("alpha".to_owned()));

        let many: OneOrMany<String,> =
            serde_yaml::from_str("[alpha, beta]",).expect("expected list",);
        assert_eq!(many.into_vec(), vec!["alpha".to_owned(), "beta".to_owned()]);
    }

    #[test]
    fn wrap_as_array_keeps_absence()
    {
        assert_eq!(wrap_as_array::<u8,>(None,), None);
        assert_eq!(wrap_as_array(Some(&OneOrMany::One(3_u8,),),), Some(vec![3]));
    }

    #[test]
    fn filter_map_keeps_shape()
    {
        let one = OneOrMany::One(2_u8,);
        assert_eq!(one.filter_map(|value| Some(value * 2,),), Some(OneOrMany::One(4)));
        assert_eq!(one.filter_map(|_| None::<u8,>,), None);

        let many = OneOrMany::Many(vec![1_u8, 2, 3],);
        let odd = many.filter_map(|value| (value % 2 == 1).then_some(*value,),);
        assert_eq!(odd, Some(OneOrMany::Many(vec![1, 3])));
    }

    #[test]
    fn scalar_deserializes_each_primitive()
    {
        let values: Vec<Scalar,> =
            serde_json::from_str(r#"[true, 1200, "text", 0.5]"#,).expect("expected scalars",);
        assert_eq!(values, vec![
            Scalar::Bool(true),
            Scalar::Number(1200.0),
            Scalar::Text("text".to_owned()),
            Scalar::Number(0.5),
        ]);
    }

    #[test]
    fn falsy_values_match_attribute_semantics()
    {
        assert!(Scalar::from("",).is_falsy());
        assert!(Scalar::from(0_i64,).is_falsy());
        assert!(Scalar::from(false,).is_falsy());
        assert!(!Scalar::from("0",).is_falsy());
        assert!(!Scalar::from(true,).is_falsy());
    }

    #[test]
    fn numbers_render_without_trailing_fraction()
    {
        assert_eq!(format_number(1200.0,), "1200");
        assert_eq!(format_number(-0.0,), "0");
        assert_eq!(format_number(2.5,), "2.5");
        assert_eq!(format_number(f64::NAN,), "NaN");
        assert_eq!(Scalar::from(false,).to_content(), "false");
    }

    #[test]
    fn non_empty_filters_empty_strings()
    {
        assert_eq!(non_empty(Some(&String::new(),),), None);
        assert_eq!(non_empty(Some(&"x".to_owned(),),), Some("x".to_owned()));
    }

    proptest! {
        #[test]
        fn integral_numbers_render_as_integers(value in -1_000_000_i64..1_000_000) {
            prop_assert_eq!(format_number(value as f64), value.to_string());
        }

        #[test]
        fn into_vec_length_matches_iter(values in proptest::collection::vec(any::<u16>(), 0..8)) {
            let wrapped = OneOrMany::Many(values.clone());
            prop_assert_eq!(wrapped.iter().count(), values.len());
            prop_assert_eq!(wrapped.into_vec(), values);
        }
    }
}
