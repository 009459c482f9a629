// src/core/tag_parser.rs

//! Splits a doc-comment block into its `@tag` segments.
//!
//! The scanner walks the normalized comment one line at a time with two states:
//! collecting the free-text description, or collecting the value of the last
//! `@tag` line seen. Every line is visited once, so parsing time is linear in
//! the length of the comment no matter how it is shaped.

use crate::{
    constants::{DEFAULT_IGNORED_TAGS, DESCRIPTION_TAG},
    models::TagSet,
};

/// Where the scanner currently is inside the comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState<'a> {
    InDescription,
    InTag { name: &'a str },
}

/// Parses a comment block using the default ignore set (`param`, `return`).
pub fn parse(comment: &str) -> TagSet {
    parse_with_ignored(comment, DEFAULT_IGNORED_TAGS)
}

/// Parses a comment block into tags, dropping every tag named in `ignored`.
///
/// Text before the first `@tag` line becomes the `description` tag. A tag that
/// appears more than once is stored as a list in encounter order.
pub fn parse_with_ignored<S: AsRef<str>>(comment: &str, ignored: &[S]) -> TagSet {
    let normalized = normalize(comment);
    let is_ignored = |name: &str| ignored.iter().any(|i| i.as_ref() == name);

    let mut tags = TagSet::new();
    let mut state = ScanState::InDescription;
    let mut segment: Vec<&str> = Vec::new();

    for line in normalized.split('\n') {
        let Some((name, rest)) = tag_marker(line) else {
            segment.push(line);
            continue;
        };

        flush(&mut tags, state, &segment, &is_ignored);
        segment.clear();
        segment.push(rest);
        state = ScanState::InTag { name };
    }
    flush(&mut tags, state, &segment, &is_ignored);

    log::trace!("Parsed {} tag(s) from comment: {:?}", tags.len(), tags);
    tags
}

/// Closes the current segment and stores it under its tag name.
fn flush(
    tags: &mut TagSet,
    state: ScanState<'_>,
    segment: &[&str],
    is_ignored: &impl Fn(&str) -> bool,
) {
    let name = match state {
        ScanState::InDescription => DESCRIPTION_TAG,
        ScanState::InTag { name } => name,
    };
    if is_ignored(name) {
        return;
    }
    tags.insert(name, segment.join("\n").trim().to_string());
}

/// Returns the line that follows the first physical line, stripped of comment
/// decoration. Empty if the comment has fewer than two lines.
///
/// This assumes the first line is the opening `/**` of the block.
pub fn first_line(comment: &str) -> String {
    comment
        .replace("\r\n", "\n")
        .split(is_line_break)
        .nth(1)
        .map(|line| {
            line.trim_matches(|c| matches!(c, '/' | '\t' | ' ' | '*'))
                .to_string()
        })
        .unwrap_or_default()
}

/// Returns the text before the first `@tag` line, or the whole normalized
/// comment when there is no tag.
pub fn description(comment: &str) -> String {
    let normalized = normalize(comment);
    let before_tags: Vec<&str> = normalized
        .split('\n')
        .take_while(|line| tag_marker(line).is_none())
        .collect();
    before_tags.join("\n").trim().to_string()
}

/// Unifies line endings, removes the `/** */` delimiters and strips the leading
/// `*` decoration from every line.
pub fn normalize(comment: &str) -> String {
    let unified = comment.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = unified.trim();
    let without_open = trimmed
        .strip_prefix("/**")
        .or_else(|| trimmed.strip_prefix("/*"))
        .unwrap_or(trimmed);
    let body = without_open
        .strip_suffix("*/")
        .unwrap_or(without_open)
        .trim();

    body.split('\n')
        .map(strip_decoration)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Removes leading whitespace, any run of `*`, and at most one following space or tab.
fn strip_decoration(line: &str) -> &str {
    let rest = line.trim_start().trim_start_matches('*');
    rest.strip_prefix([' ', '\t']).unwrap_or(rest)
}

/// Recognizes a `@name rest` line and splits it into the name and the rest.
fn tag_marker(line: &str) -> Option<(&str, &str)> {
    let after_at = line.trim_start().strip_prefix('@')?;
    let name_len = after_at
        .find(|c: char| !is_word_char(c))
        .unwrap_or(after_at.len());
    if name_len == 0 {
        return None;
    }
    Some(after_at.split_at(name_len))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TagValue;

    const PACK_COMMENT: &str = "/**
     * pack project to a phar package
     * @usage {$command} [--dir DIR] [--output FILE]
     * @options
     *  --dir STRING        Setting the directory for packing.
     *                      - default is current work-dir.
     *  --output STRING     Setting the output file name
     * @param  Input $in
     * @param  Output $out
     * @return int
     */";

    fn single(tags: &TagSet, name: &str) -> String {
        tags.get(name)
            .and_then(TagValue::as_single)
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_parse_full_doc_block() {
        let tags = parse(PACK_COMMENT);

        assert_eq!(single(&tags, "description"), "pack project to a phar package");
        assert_eq!(
            single(&tags, "usage"),
            "{$command} [--dir DIR] [--output FILE]"
        );
        let options = single(&tags, "options");
        assert!(options.starts_with("--dir STRING"));
        assert!(options.contains("\n                     - default is current work-dir."));
        assert!(options.ends_with("Setting the output file name"));
        assert_eq!(
            tags.names().collect::<Vec<_>>(),
            vec!["description", "usage", "options"]
        );
    }

    #[test]
    fn test_parse_never_keeps_ignored_tags() {
        let tags = parse("@param a\n@return b\n@param c\nText @param inline");
        assert!(!tags.contains("param"));
        assert!(!tags.contains("return"));
        assert_eq!(single(&tags, "description"), "");
    }

    #[test]
    fn test_parse_custom_ignore_set() {
        let tags = parse_with_ignored("Desc\n@param p\n@internal yes", &["internal"]);
        assert_eq!(single(&tags, "param"), "p");
        assert!(!tags.contains("internal"));
    }

    #[test]
    fn test_parse_repeated_tag_becomes_list() {
        let tags = parse("/**\n * Desc\n * @example one\n * @usage u\n * @example two\n */");
        assert_eq!(
            tags.get("example"),
            Some(&TagValue::Multi(vec!["one".to_string(), "two".to_string()]))
        );
        assert_eq!(single(&tags, "usage"), "u");
    }

    #[test]
    fn test_parse_without_tags_is_description_only() {
        let comment = "/**\n * Line one\n *\n * Line two\n */";
        let tags = parse(comment);
        assert_eq!(tags.len(), 1);
        assert_eq!(single(&tags, "description"), normalize(comment));
        assert_eq!(normalize(comment), "Line one\n\nLine two");
    }

    #[test]
    fn test_parse_empty_comment() {
        let tags = parse("");
        assert_eq!(tags.len(), 1);
        assert_eq!(single(&tags, "description"), "");

        let tags = parse("/** */");
        assert_eq!(single(&tags, "description"), "");
    }

    #[test]
    fn test_parse_explicit_description_tag_merges() {
        let tags = parse("Summary\n@description More");
        assert_eq!(
            tags.get("description"),
            Some(&TagValue::Multi(vec!["Summary".to_string(), "More".to_string()]))
        );
    }

    #[test]
    fn test_parse_handles_crlf_and_word_boundaries() {
        let tags = parse("/**\r\n * Hi\r\n * @usage{$name} run\r\n * @ not-a-tag\r\n */");
        assert_eq!(single(&tags, "description"), "Hi");
        assert_eq!(single(&tags, "usage"), "{$name} run\n@ not-a-tag");
    }

    #[test]
    fn test_first_line_returns_second_physical_line() {
        assert_eq!(first_line(PACK_COMMENT), "pack project to a phar package");
        assert_eq!(first_line("/**\r\n * Windows line\r\n */"), "Windows line");
        assert_eq!(first_line("/**\r * Classic Mac\r */"), "Classic Mac");
        assert_eq!(first_line("single line"), "");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn test_first_line_splits_on_every_break_kind() {
        for brk in ['\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}'] {
            let comment = format!("/**{brk} * Second{brk} * third */");
            assert_eq!(first_line(&comment), "Second", "break {:?}", brk);
        }
    }

    #[test]
    fn test_normalize_keeps_trailing_slash_of_content() {
        assert_eq!(
            normalize("/**\n * Packs files from src/\n */"),
            "Packs files from src/"
        );

        let tags = parse("/**\n * Desc\n * @example\n *  {$command} ./src/\n * @see https://example.com/\n */");
        assert_eq!(single(&tags, "example"), "{$command} ./src/");
        assert_eq!(single(&tags, "see"), "https://example.com/");
        assert_eq!(description("/**\n * Lives in /opt/\n */"), "Lives in /opt/");
    }

    #[test]
    fn test_description_stops_at_first_tag() {
        let comment = "/**\n * First\n * second\n * @usage x\n * tail\n */";
        assert_eq!(description(comment), "First\nsecond");
        assert!(normalize(comment).starts_with(&description(comment)));
    }

    #[test]
    fn test_description_without_tags_is_full_text() {
        let comment = "/**\n * Only text\n * here\n */";
        assert_eq!(description(comment), normalize(comment));
    }

    #[test]
    fn test_strip_decoration_removes_one_space_only() {
        assert_eq!(strip_decoration("   *   indented"), "  indented");
        assert_eq!(strip_decoration("\t**\tx"), "x");
        assert_eq!(strip_decoration("plain"), "plain");
    }
}
