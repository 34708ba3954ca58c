//! Output section classification and `--delete` parsing.
//!
//! The output is partitioned into three sections: selected JSON, context
//! (text sharing a line with selected JSON) and other-lines (lines with no
//! selected JSON at all). `--delete` removes whole sections.

/// One of the three output sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// JSON that has been detected and selected by the filters.
    Json,
    /// Text not within a JSON section but on the same line(s).
    Context,
    /// Lines not containing any selected JSON.
    OtherLines,
}

/// The set of sections deleted from the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSet {
    json: bool,
    context: bool,
    other_lines: bool,
}

impl SectionSet {
    /// Whether `section` is kept in the output.
    #[must_use]
    pub fn includes(self, section: Section) -> bool {
        !match section {
            Section::Json => self.json,
            Section::Context => self.context,
            Section::OtherLines => self.other_lines,
        }
    }

    fn insert(&mut self, section: Section) {
        match section {
            Section::Json => self.json = true,
            Section::Context => self.context = true,
            Section::OtherLines => self.other_lines = true,
        }
    }
}

/// Parse the `--delete` argument.
///
/// Accepts either compact capital letters (`-dCL`) or comma-separated long
/// names (`--delete=context,other-lines`). Arguments of up to three
/// characters are treated as the compact form.
pub fn parse_delete(arg: &str) -> Result<SectionSet, String> {
    let mut set = SectionSet::default();
    if arg.len() <= 3 {
        for c in arg.chars() {
            set.insert(match c {
                'J' => Section::Json,
                'C' => Section::Context,
                'L' => Section::OtherLines,
                _ => {
                    return Err(String::from(
                        "the only short options allowed for DELETE are J, C, and L",
                    ));
                }
            });
        }
    } else {
        for name in arg.split(',') {
            set.insert(match name {
                "json" => Section::Json,
                "context" => Section::Context,
                "other-lines" => Section::OtherLines,
                _ => {
                    return Err(String::from(
                        "the only long options allowed for DELETE are json, context, and \
                         other-lines, and they must be separated by only a comma",
                    ));
                }
            });
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Section, SectionSet, parse_delete};

    #[rstest]
    #[case::short_pair("CL", &[Section::Context, Section::OtherLines])]
    #[case::short_single("J", &[Section::Json])]
    #[case::short_all("JCL", &[Section::Json, Section::Context, Section::OtherLines])]
    #[case::long_single("json", &[Section::Json])]
    #[case::long_pair("context,other-lines", &[Section::Context, Section::OtherLines])]
    fn parses_valid_delete_arguments(#[case] arg: &str, #[case] deleted: &[Section]) {
        let set = parse_delete(arg).unwrap();
        for section in [Section::Json, Section::Context, Section::OtherLines] {
            assert_eq!(set.includes(section), !deleted.contains(&section), "{section:?}");
        }
    }

    #[rstest]
    #[case::unknown_letter("X")]
    #[case::lowercase_short("j,c")]
    #[case::unknown_name("json,everything")]
    #[case::space_separated("json, context")]
    fn rejects_invalid_delete_arguments(#[case] arg: &str) {
        assert!(parse_delete(arg).is_err());
    }

    #[test]
    fn default_set_keeps_everything() {
        let set = SectionSet::default();
        assert!(set.includes(Section::Json));
        assert!(set.includes(Section::Context));
        assert!(set.includes(Section::OtherLines));
    }
}
