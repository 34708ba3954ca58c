//! Drive the scanner over the input and rebuild the output document.

use std::io::{self, BufRead, Write};

use jsonfinder::{FinderOptions, JsonFinder, Span, Value, counts_at_least};
use log::{debug, trace};

use crate::{
    format::{self, Format},
    sections::{Section, SectionSet},
};

/// Settings shared by both processing modes.
#[derive(Debug)]
pub struct ProcessOptions<'a> {
    /// Substring filters a match's source text must contain.
    pub filters: &'a [String],
    /// Sections deleted from the output.
    pub delete: SectionSet,
    /// Output format for selected JSON.
    pub format: Format,
    /// Indentation width for [`Format::On`].
    pub indent: usize,
    /// Minimum leaf-element count for a match to be selected.
    pub min_size: usize,
    /// Collect selected values into one top-level array.
    pub array: bool,
}

impl ProcessOptions<'_> {
    /// Scan `string`, selecting only JSON that passes the filters and the
    /// minimum-size test. Rejected candidates merge back into plain text by
    /// the scanner's contract.
    fn scan<'s>(&'s self, string: &'s str, json_only: bool) -> JsonFinder<'s, 's> {
        let predicate = move |start: usize, end: usize, value: &Value| {
            let text = &string[start..end];
            self.filters.iter().all(|f| text.contains(f.as_str()))
                && counts_at_least(value, self.min_size)
        };
        JsonFinder::new(
            string,
            FinderOptions {
                json_only,
                predicate: Some(Box::new(predicate)),
            },
        )
    }
}

/// Rebuild the output for one string (the whole buffer, or one line when
/// `linewise`).
fn rebuild(string: &str, options: &ProcessOptions<'_>, linewise: bool) -> io::Result<String> {
    let mut out = String::new();
    for span in options.scan(string, false) {
        match &span.value {
            None => out.push_str(&compose_text(
                span.text(string),
                span.start,
                span.end,
                string.len(),
                options.delete,
                linewise,
            )),
            Some(value) => {
                debug!("selected JSON at {}..{}", span.start, span.end);
                if options.delete.includes(Section::Json) {
                    out.push_str(&format::render(
                        value,
                        span.text(string),
                        options.format,
                        options.indent,
                    )?);
                }
            }
        }
    }
    Ok(out)
}

/// Classify a plain-text section into context and other-lines and keep the
/// included parts.
///
/// Interior lines of the section are other-lines; the partial line before
/// the first newline and after the last one are context around adjacent
/// matches. A section touching the start or end of the input has no context
/// on that side. When other-lines are deleted between two kept context
/// pieces, a single newline keeps them on separate lines.
fn compose_text(
    section: &str,
    start: usize,
    end: usize,
    whole_len: usize,
    delete: SectionSet,
    linewise: bool,
) -> String {
    let incl_context = delete.includes(Section::Context);
    let incl_other = delete.includes(Section::OtherLines);

    if linewise {
        // A line containing no selected JSON is entirely an other-line; any
        // text section beside a match is context.
        let included = if section.len() == whole_len {
            incl_other
        } else {
            incl_context
        };
        return if included {
            section.to_string()
        } else {
            String::new()
        };
    }

    let Some(first_newline) = section.find('\n') else {
        return if incl_context {
            section.to_string()
        } else {
            String::new()
        };
    };

    let mut other_start = first_newline;
    let mut separator = "\n";
    if start == 0 {
        other_start = 0;
        separator = "";
    }
    let other_end = if end == whole_len {
        separator = "";
        section.len()
    } else {
        section.rfind('\n').map_or(section.len(), |i| i + 1)
    };

    let mut out = String::new();
    if incl_context {
        out.push_str(&section[..other_start]);
    }
    if incl_other {
        out.push_str(&section[other_start..other_end]);
    } else {
        out.push_str(separator);
    }
    if incl_context {
        out.push_str(&section[other_end..]);
    }
    out
}

/// Render all selected JSON values as one top-level array.
fn render_array(contents: &str, options: &ProcessOptions<'_>) -> io::Result<String> {
    let spans: Vec<Span> = options.scan(contents, true).collect();
    trace!("collected {} values into an array", spans.len());
    if options.format == Format::Off {
        // There is no single original slice for the synthesized array; join
        // the original slices instead.
        let parts: Vec<&str> = spans.iter().map(|span| span.text(contents)).collect();
        return Ok(format!("[{}]", parts.join(", ")));
    }
    let array = Value::Array(spans.into_iter().filter_map(|span| span.value).collect());
    format::render(&array, "", options.format, options.indent)
}

/// Whole-buffer mode: read all input, scan once, write the rebuilt document.
pub fn run_buffered(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    options: &ProcessOptions<'_>,
) -> io::Result<()> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    if options.array {
        let rendered = render_array(&contents, options)?;
        writer.write_all(rendered.as_bytes())?;
        writer.write_all(b"\n")?;
        return Ok(());
    }

    let result = rebuild(&contents, options, false)?;
    writer.write_all(result.as_bytes())?;
    if !result.is_empty() && !result.ends_with('\n') && contents.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Linewise mode: scan and emit one line at a time, flushing after each so
/// the output is a live stream. JSON split across lines is not detected.
pub fn run_linewise(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    options: &ProcessOptions<'_>,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let had_newline = line.ends_with('\n');
        if had_newline {
            line.pop();
        }
        let result = rebuild(&line, options, true)?;
        writer.write_all(result.as_bytes())?;
        if had_newline && !result.is_empty() {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ProcessOptions, rebuild, render_array, run_buffered, run_linewise};
    use crate::{
        format::Format,
        sections::{SectionSet, parse_delete},
    };

    const INPUT: &str = "plain line\nbefore {\"a\": 1, \"b\": 2} after\nlast line\n";

    fn options(filters: &'static [String]) -> ProcessOptions<'static> {
        ProcessOptions {
            filters,
            delete: SectionSet::default(),
            format: Format::Off,
            indent: 4,
            min_size: 2,
            array: false,
        }
    }

    #[test]
    fn format_off_without_deletions_is_the_identity() {
        assert_eq!(rebuild(INPUT, &options(&[]), false).unwrap(), INPUT);
    }

    #[rstest]
    #[case::json_only("CL", "{\"a\": 1, \"b\": 2}")]
    #[case::drop_other_lines("L", "before {\"a\": 1, \"b\": 2} after")]
    #[case::drop_json("J", "plain line\nbefore  after\nlast line\n")]
    #[case::drop_context("C", "plain line\n{\"a\": 1, \"b\": 2}\nlast line\n")]
    fn deletes_the_requested_sections(#[case] delete: &str, #[case] expected: &str) {
        let opts = ProcessOptions {
            delete: parse_delete(delete).unwrap(),
            ..options(&[])
        };
        assert_eq!(rebuild(INPUT, &opts, false).unwrap(), expected);
    }

    #[test]
    fn formats_selected_json_in_place() {
        let opts = ProcessOptions {
            format: Format::Tiny,
            ..options(&[])
        };
        assert_eq!(
            rebuild(INPUT, &opts, false).unwrap(),
            "plain line\nbefore {\"a\":1,\"b\":2} after\nlast line\n"
        );
    }

    #[test]
    fn min_size_rejects_small_matches() {
        let s = "a [1] b {\"k\": [true, null]} c";
        let opts = ProcessOptions {
            format: Format::Tiny,
            ..options(&[])
        };
        // [1] has one leaf and is absorbed into the text.
        assert_eq!(
            rebuild(s, &opts, false).unwrap(),
            "a [1] b {\"k\":[true,null]} c"
        );
    }

    #[test]
    fn filters_must_all_match_the_source_text() {
        let s = "{\"alpha\": [1, 2]} and {\"beta\": [3, 4]}";
        let filters = vec![String::from("alpha")];
        let opts = ProcessOptions {
            filters: &filters,
            delete: parse_delete("CL").unwrap(),
            ..options(&[])
        };
        assert_eq!(rebuild(s, &opts, false).unwrap(), "{\"alpha\": [1, 2]}");
    }

    #[test]
    fn linewise_classifies_whole_lines_as_other_lines() {
        let opts = ProcessOptions {
            delete: parse_delete("L").unwrap(),
            ..options(&[])
        };
        assert_eq!(rebuild("no json here", &opts, true).unwrap(), "");
        assert_eq!(
            rebuild("x {\"a\": 1, \"b\": 2} y", &opts, true).unwrap(),
            "x {\"a\": 1, \"b\": 2} y"
        );
    }

    #[test]
    fn run_linewise_drops_newlines_of_deleted_lines() {
        let mut input = "junk\n{\"a\": 1, \"b\": 2}\nmore junk\n".as_bytes();
        let mut output = Vec::new();
        let opts = ProcessOptions {
            delete: parse_delete("L").unwrap(),
            format: Format::Tiny,
            ..options(&[])
        };
        run_linewise(&mut input, &mut output, &opts).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "{\"a\":1,\"b\":2}\n"
        );
    }

    #[test]
    fn run_buffered_preserves_a_trailing_newline() {
        let mut input = "x {\"a\": 1, \"b\": 2}\n".as_bytes();
        let mut output = Vec::new();
        let opts = ProcessOptions {
            delete: parse_delete("CL").unwrap(),
            format: Format::Tiny,
            ..options(&[])
        };
        run_buffered(&mut input, &mut output, &opts).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "{\"a\":1,\"b\":2}\n");
    }

    #[test]
    fn render_array_collects_all_selected_values() {
        let s = "one {\"a\": 1, \"b\": 2} two [3, 4] three";
        let opts = ProcessOptions {
            format: Format::Tiny,
            array: true,
            ..options(&[])
        };
        assert_eq!(
            render_array(s, &opts).unwrap(),
            "[{\"a\":1,\"b\":2},[3,4]]"
        );
    }

    #[test]
    fn render_array_with_format_off_joins_original_slices() {
        let s = "one {\"b\":2,\"a\":1} two [3, 4] three";
        let opts = ProcessOptions {
            array: true,
            ..options(&[])
        };
        assert_eq!(
            render_array(s, &opts).unwrap(),
            "[{\"b\":2,\"a\":1}, [3, 4]]"
        );
    }
}
