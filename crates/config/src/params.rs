//! Strict, type-checked reader over a theme parameter table.
//!
//! Every `take_*` call removes its key from the table.  Once all recognised
//! keys have been read, [`Params::finish`] rejects whatever is left, so a
//! typo'd key is an error instead of being silently ignored.

use crate::schema::{check_channels, ColorInput, ImageRef, MenuBarStyle, PaddingInput};
use menu_core::{MenuError, Result};
use serde::de::DeserializeOwned;
use toml::{Table, Value};

/// Literal accepted by the optional color keys to mean "no color".
const NONE_LITERAL: &str = "none";

#[derive(Debug, Default)]
pub struct Params {
    table: Table,
}

impl Params {
    pub fn new(table: Table) -> Self {
        Self { table }
    }

    /// A 3/4-channel color or a hex string.
    pub fn take_color(&mut self, key: &str, default: ColorInput) -> Result<ColorInput> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(value) => parse_color(key, value),
        }
    }

    /// A color, or `"none"`.
    pub fn take_color_or_none(
        &mut self,
        key: &str,
        default: Option<ColorInput>,
    ) -> Result<Option<ColorInput>> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(value) if is_none_literal(&value) => Ok(None),
            Some(value) => parse_color(key, value).map(Some),
        }
    }

    /// A color, or an `{ image = "<path>" }` table.
    pub fn take_color_or_image(&mut self, key: &str, default: ColorInput) -> Result<ColorInput> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(value @ Value::Table(_)) => parse_image(key, value),
            Some(value) => parse_color(key, value),
        }
    }

    /// A color, an image table, or `"none"`.
    pub fn take_color_image_or_none(
        &mut self,
        key: &str,
        default: Option<ColorInput>,
    ) -> Result<Option<ColorInput>> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(value) if is_none_literal(&value) => Ok(None),
            Some(value @ Value::Table(_)) => parse_image(key, value).map(Some),
            Some(value) => parse_color(key, value).map(Some),
        }
    }

    /// An array of exactly two numbers.
    pub fn take_tuple2(&mut self, key: &str, default: Vec<f64>) -> Result<Vec<f64>> {
        let Some(value) = self.table.remove(key) else {
            return Ok(default);
        };
        let numbers = parse_numbers(key, value)?;
        if numbers.len() != 2 {
            return Err(type_error(
                key,
                format!("expected 2 numbers, got {}", numbers.len()),
            ));
        }
        Ok(numbers)
    }

    pub fn take_bool(&mut self, key: &str, default: bool) -> Result<bool> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(Value::Boolean(b)) => Ok(b),
            Some(other) => Err(mismatch(key, "a boolean", &other)),
        }
    }

    pub fn take_int(&mut self, key: &str, default: i64) -> Result<i64> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(Value::Integer(i)) => Ok(i),
            Some(other) => Err(mismatch(key, "an integer", &other)),
        }
    }

    /// An integer or a float.
    pub fn take_number(&mut self, key: &str, default: f64) -> Result<f64> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(value) => parse_number(key, value),
        }
    }

    pub fn take_string(&mut self, key: &str, default: String) -> Result<String> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(mismatch(key, "a string", &other)),
        }
    }

    /// Any closed set of names (positions, alignments, ...) via `serde`.
    pub fn take_enum<T: DeserializeOwned>(&mut self, key: &str, default: T) -> Result<T> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(value) => value
                .try_into()
                .map_err(|e| type_error(key, e.to_string().trim().to_string())),
        }
    }

    /// A single number, or a list handed over as-is for validation.
    pub fn take_padding(&mut self, key: &str, default: PaddingInput) -> Result<PaddingInput> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(value @ Value::Array(_)) => parse_numbers(key, value).map(PaddingInput::Sides),
            Some(value) => parse_number(key, value).map(PaddingInput::Uniform),
        }
    }

    /// A style code, or a style name mapped to its code.
    pub fn take_style(&mut self, key: &str, default: i64) -> Result<i64> {
        match self.table.remove(key) {
            None => Ok(default),
            Some(Value::Integer(code)) => Ok(code),
            Some(Value::String(name)) => name.parse::<MenuBarStyle>().map(MenuBarStyle::code),
            Some(other) => Err(mismatch(key, "a style code or name", &other)),
        }
    }

    /// Fail on the first key nobody asked for.
    pub fn finish(self) -> Result<()> {
        match self.table.into_iter().next() {
            Some((key, _)) => Err(MenuError::UnknownParameter(key)),
            None => Ok(()),
        }
    }
}

fn is_none_literal(value: &Value) -> bool {
    matches!(value, Value::String(s) if s.eq_ignore_ascii_case(NONE_LITERAL))
}

fn parse_color(key: &str, value: Value) -> Result<ColorInput> {
    match value {
        Value::String(s) => ColorInput::from_hex(&s)
            .ok_or_else(|| type_error(key, format!("'{s}' is not a hex color"))),
        value @ Value::Array(_) => {
            let channels = parse_numbers(key, value)?;
            check_channels(&channels).map_err(|reason| type_error(key, reason))?;
            Ok(ColorInput::Channels(channels))
        }
        other => Err(mismatch(key, "a color", &other)),
    }
}

fn parse_image(key: &str, value: Value) -> Result<ColorInput> {
    value
        .try_into::<ImageRef>()
        .map(ColorInput::Image)
        .map_err(|e| type_error(key, format!("invalid image: {}", e.to_string().trim())))
}

fn parse_number(key: &str, value: Value) -> Result<f64> {
    match value {
        Value::Integer(i) => Ok(i as f64),
        Value::Float(f) => Ok(f),
        other => Err(mismatch(key, "a number", &other)),
    }
}

fn parse_numbers(key: &str, value: Value) -> Result<Vec<f64>> {
    match value {
        Value::Array(items) => items.into_iter().map(|v| parse_number(key, v)).collect(),
        other => Err(mismatch(key, "an array of numbers", &other)),
    }
}

fn mismatch(key: &str, expected: &str, got: &Value) -> MenuError {
    type_error(key, format!("expected {expected}, got {}", got.type_str()))
}

fn type_error(key: &str, reason: String) -> MenuError {
    MenuError::Config(format!("Theme.{key}: {reason}"))
}
