// src/core/help_formatter.rs

//! Turns a parsed [`TagSet`] into help sections.
//!
//! The [`AllowList`] decides both which tags are shown and in which order.
//! Tags holding several values are skipped; callers that want them displayed
//! must merge them into one string first.

use crate::{
    constants::HELP_INDENT,
    core::substitutor::{self, AnnotationVars},
    models::{AllowList, TagSet},
    system::sink::OutputSink,
};
use std::io;

/// One rendered help section, e.g. `Usage:` followed by its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpBlock {
    pub heading: String,
    pub body: String,
}

/// Renders tags as help text according to an allow-list.
#[derive(Debug, Clone, Copy)]
pub struct HelpFormatter<'a> {
    allow_list: &'a AllowList,
}

impl<'a> HelpFormatter<'a> {
    pub fn new(allow_list: &'a AllowList) -> Self {
        Self { allow_list }
    }

    /// Builds the help sections without writing them anywhere.
    ///
    /// When `vars` is given, placeholders in each value are substituted before
    /// the value is re-indented.
    pub fn render(&self, tags: &TagSet, vars: Option<&AnnotationVars>) -> Vec<HelpBlock> {
        let mut blocks = Vec::new();

        for allowed in self.allow_list.iter() {
            let Some(value) = tags.get(&allowed.name) else {
                continue;
            };
            let Some(text) = value.as_single() else {
                log::trace!("Skipping multi-value tag '{}'.", allowed.name);
                continue;
            };

            let text = match vars {
                Some(vars) => substitutor::substitute(text, vars),
                None => text.to_string(),
            };
            let body = if allowed.align {
                align_lines(&text)
            } else {
                text
            };

            blocks.push(HelpBlock {
                heading: capitalize(&allowed.name),
                body,
            });
        }

        log::debug!("Rendered {} help section(s).", blocks.len());
        blocks
    }

    /// Renders the sections and writes each one to `sink`, returning what was written.
    pub fn show(
        &self,
        tags: &TagSet,
        vars: Option<&AnnotationVars>,
        sink: &mut dyn OutputSink,
    ) -> io::Result<Vec<HelpBlock>> {
        let blocks = self.render(tags, vars);
        for block in &blocks {
            sink.section(&block.heading, &block.body)?;
        }
        Ok(blocks)
    }
}

/// Trims every line, drops the blank ones and re-joins them under a two-space indent.
pub fn align_lines(value: &str) -> String {
    value
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(&format!("\n{}", HELP_INDENT))
}

/// Upper-cases the first character of a tag name (`usage` -> `Usage`).
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::tag_parser,
        system::sink::{BufferSink, LineKind},
    };

    fn tags_from(pairs: &[(&str, &str)]) -> TagSet {
        let mut tags = TagSet::new();
        for (name, value) in pairs {
            tags.insert(name, value.to_string());
        }
        tags
    }

    #[test]
    fn test_render_follows_allow_list_order() {
        let tags = tags_from(&[
            ("example", "ex"),
            ("usage", "use"),
            ("description", "desc"),
        ]);
        let allow = AllowList::default();

        let headings: Vec<_> = HelpFormatter::new(&allow)
            .render(&tags, None)
            .into_iter()
            .map(|b| b.heading)
            .collect();

        assert_eq!(headings, vec!["Description", "Usage", "Example"]);
    }

    #[test]
    fn test_render_aligns_multiline_values() {
        let tags = tags_from(&[("options", "a\n  b\n\nc"), ("usage", "x\n  y")]);
        let allow = AllowList::from_pairs(&[("options", true), ("usage", false)]);

        let blocks = HelpFormatter::new(&allow).render(&tags, None);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].body, "a\n  b\n  c");
        assert_eq!(blocks[1].body, "x\n  y");
    }

    #[test]
    fn test_render_skips_unlisted_and_multi_value_tags() {
        let mut tags = tags_from(&[("usage", "u"), ("since", "1.0")]);
        tags.insert("example", "one".to_string());
        tags.insert("example", "two".to_string());
        let allow = AllowList::default();

        let blocks = HelpFormatter::new(&allow).render(&tags, None);

        assert_eq!(
            blocks,
            vec![HelpBlock {
                heading: "Usage".to_string(),
                body: "u".to_string()
            }]
        );
    }

    #[test]
    fn test_render_substitutes_before_aligning() {
        let tags = tags_from(&[("example", "  {$command} --dir .\n\n  {$command} --help")]);
        let allow = AllowList::default();
        let mut vars = AnnotationVars::new();
        vars.insert("command".to_string(), "app phar:pack".to_string());

        let blocks = HelpFormatter::new(&allow).render(&tags, Some(&vars));

        assert_eq!(blocks[0].body, "app phar:pack --dir .\n  app phar:pack --help");
    }

    #[test]
    fn test_show_writes_sections_to_sink() {
        let comment = "/**\n * Pack a project\n * @usage {$name} pack\n * @example\n *   a\n *   b\n */";
        let tags = tag_parser::parse(comment);
        let allow = AllowList::default();
        let mut vars = AnnotationVars::new();
        vars.insert("name".to_string(), "phar".to_string());
        let mut sink = BufferSink::new();

        let blocks = HelpFormatter::new(&allow)
            .show(&tags, Some(&vars), &mut sink)
            .unwrap();

        assert_eq!(blocks.len(), 3);
        assert_eq!(
            sink.text_of(LineKind::Write),
            "Description:\n  Pack a project\n\nUsage:\n  phar pack\n\nExample:\n  a\n  b\n\n"
        );
    }

    #[test]
    fn test_empty_allow_list_renders_nothing() {
        let tags = tags_from(&[("description", "d")]);
        let allow = AllowList::empty();
        assert!(HelpFormatter::new(&allow).render(&tags, None).is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("usage"), "Usage");
        assert_eq!(capitalize(""), "");
    }
}
