//! JSON output formatting for the four `--format` modes.
//!
//! With `serde_json`'s default map (a `BTreeMap`), object keys come out
//! sorted lexicographically in every mode except `off`, which reproduces the
//! input text untouched.

use std::io;

use serde::Serialize;
use serde_json::{
    Value,
    ser::{Formatter, PrettyFormatter, Serializer},
};

/// Output format for detected JSON.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Pretty-print values on separate lines with indentation.
    On,
    /// Output the JSON as it appeared in the input.
    Off,
    /// One line, keeping spaces after the `,` and `:` separators.
    Mini,
    /// Like mini, but without any extra spaces at all.
    Tiny,
}

/// Compact output with a space after `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_string_with<F: Formatter>(value: &Value, formatter: F) -> io::Result<String> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Render one detected JSON value.
///
/// `original` is the value's source text, used verbatim by [`Format::Off`].
pub fn render(value: &Value, original: &str, format: Format, indent: usize) -> io::Result<String> {
    match format {
        Format::Off => Ok(original.to_string()),
        Format::On => {
            let indent = " ".repeat(indent);
            to_string_with(value, PrettyFormatter::with_indent(indent.as_bytes()))
        }
        Format::Mini => to_string_with(value, SpacedFormatter),
        Format::Tiny => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Format, render};

    #[test]
    fn off_reproduces_the_original_text() {
        let value = json!({"b": 1});
        assert_eq!(
            render(&value, "{ \"b\" :1}", Format::Off, 4).unwrap(),
            "{ \"b\" :1}"
        );
    }

    #[test]
    fn tiny_is_compact_with_sorted_keys() {
        let value = json!({"b": 1, "a": [1, 2]});
        assert_eq!(
            render(&value, "", Format::Tiny, 4).unwrap(),
            r#"{"a":[1,2],"b":1}"#
        );
    }

    #[test]
    fn mini_keeps_separator_spaces() {
        let value = json!({"b": 1, "a": [1, 2]});
        assert_eq!(
            render(&value, "", Format::Mini, 4).unwrap(),
            r#"{"a": [1, 2], "b": 1}"#
        );
    }

    #[test]
    fn on_pretty_prints_with_the_requested_indent() {
        let value = json!({"a": [1, 2], "b": 1});
        let expected = "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": 1\n}";
        assert_eq!(render(&value, "", Format::On, 2).unwrap(), expected);
    }
}
