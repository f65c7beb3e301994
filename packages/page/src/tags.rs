//! Start/end tag scanning over an HTML template.
//!
//! This is not an HTML parser. It finds tags and their attributes well enough
//! to locate `<meta>` elements and id-addressed containers in a hand-written
//! page template. Comments are skipped, and so is the content of `<script>`
//! and `<style>` elements.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a comment, or a start or end tag: `<name ...>`, `</name>`,
/// `<name .../>`. Quoted attribute values may contain `>`.
static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s:<!--.*?-->)|<(/?)([A-Za-z][A-Za-z0-9-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*\s*/?)>"#,
    )
    .unwrap()
});

/// Matches one attribute inside a start tag, with an optional quoted or bare value.
static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .unwrap()
});

/// Elements whose content is text, not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub closing: bool,
    pub self_closing: bool,
    /// Byte range of the whole tag, `<` through `>`.
    pub span: Range<usize>,
    attributes: &'a str,
    attributes_start: usize,
}

impl<'a> Tag<'a> {
    /// Elements that can never hold content, either by HTML rules or because
    /// they were written as `<x/>`.
    #[must_use]
    pub fn is_empty_element(&self) -> bool {
        self.self_closing
            || VOID_ELEMENTS
                .iter()
                .any(|void| void.eq_ignore_ascii_case(self.name))
    }

    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Decoded value of the named attribute. A bare attribute (`<x hidden>`)
    /// yields an empty string.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes()
            .find(|(attr, _, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value, _)| html_escape::decode_html_entities(value).into_owned())
    }

    /// Absolute byte range of the named attribute, name through closing quote.
    #[must_use]
    pub fn attribute_span(&self, name: &str) -> Option<Range<usize>> {
        self.attributes()
            .find(|(attr, _, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, _, span)| span)
    }

    /// Position just before the tag's `>` (or `/>`), where new attributes go.
    #[must_use]
    pub const fn insertion_point(&self) -> usize {
        if self.self_closing {
            self.span.end - 2
        } else {
            self.span.end - 1
        }
    }

    fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str, Range<usize>)> + '_ {
        ATTRIBUTE_REGEX
            .captures_iter(self.attributes)
            .filter_map(move |caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?.as_str();
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map_or("", |m| m.as_str());
                let start = self.attributes_start + whole.start();
                Some((name, value, start..self.attributes_start + whole.end()))
            })
    }
}

/// Iterate over every tag in `html` starting at byte `offset`.
pub fn scan(html: &str, offset: usize) -> impl Iterator<Item = Tag<'_>> {
    let mut position = offset;

    std::iter::from_fn(move || {
        loop {
            let caps = TAG_REGEX.captures_at(html, position)?;
            let whole = caps.get(0)?;
            position = whole.end();

            // Comments match without the tag groups.
            let Some(name) = caps.get(2) else {
                continue;
            };
            let attributes = caps.get(3)?;
            let raw = attributes.as_str();

            let tag = Tag {
                name: name.as_str(),
                closing: caps.get(1).is_some_and(|slash| !slash.is_empty()),
                self_closing: raw.ends_with('/'),
                span: whole.start()..whole.end(),
                attributes: raw.strip_suffix('/').unwrap_or(raw),
                attributes_start: attributes.start(),
            };

            if !tag.closing
                && !tag.self_closing
                && RAW_TEXT_ELEMENTS.iter().any(|raw_text| tag.is_named(raw_text))
            {
                position = raw_text_end(html, position, tag.name);
            }

            return Some(tag);
        }
    })
}

/// Start of the end tag closing a raw-text element, or the end of `html`.
fn raw_text_end(html: &str, from: usize, name: &str) -> usize {
    let end_tag = format!("</{}", name.to_ascii_lowercase());
    html[from..]
        .to_ascii_lowercase()
        .find(&end_tag)
        .map_or(html.len(), |index| from + index)
}
