#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The profile page template and the containers the renderers write into.

use std::fmt;
use std::ops::Range;

mod tags;

/// Element ids the page template is expected to carry.
pub mod ids {
    pub const AVATAR: &str = "avatar";
    pub const NAME: &str = "name";
    pub const BIO: &str = "bio";
    pub const SOCIAL: &str = "social";
    pub const CURRENT_PROJECTS: &str = "current-projects";
    pub const PREVIOUS_WORK: &str = "previous-work";
    pub const ACTIVITY_LIST: &str = "activity-list";
    pub const REPO_LIST: &str = "repo-list";
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Container not found: #{0}")]
    ContainerNotFound(String),
    #[error("Container #{0} has no closing tag")]
    Unclosed(String),
    #[error("Container #{0} cannot hold content")]
    EmptyElement(String),
}

/// A single change to one container of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerUpdate {
    pub id: String,
    pub change: Change,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// Replace the container's content with markup, as-is.
    InnerHtml(String),
    /// Replace the container's content with text, escaped.
    Text(String),
    /// Set (or add) an attribute on the container's start tag.
    Attribute { name: String, value: String },
}

impl ContainerUpdate {
    #[must_use]
    pub fn inner_html(id: &str, html: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            change: Change::InnerHtml(html.into()),
        }
    }

    #[must_use]
    pub fn text(id: &str, text: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            change: Change::Text(text.into()),
        }
    }

    #[must_use]
    pub fn attribute(id: &str, name: &str, value: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            change: Change::Attribute {
                name: name.to_string(),
                value: value.into(),
            },
        }
    }
}

/// Positions of an id-addressed element inside the document.
struct Located {
    insertion_point: usize,
    attribute: Option<Range<usize>>,
    inner: Option<Range<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    html: String,
}

impl Document {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.html
    }

    /// Content of the first `<meta name="{name}" content="...">` tag.
    #[must_use]
    pub fn meta_content(&self, name: &str) -> Option<String> {
        tags::scan(&self.html, 0)
            .filter(|tag| !tag.closing && tag.is_named("meta"))
            .find(|tag| tag.attribute("name").is_some_and(|value| value == name))
            .and_then(|tag| tag.attribute("content"))
    }

    /// Current markup inside the element with the given id.
    ///
    /// # Errors
    ///
    /// * If no element carries the id, or it has no content region
    pub fn inner_html(&self, id: &str) -> Result<&str, PageError> {
        let located = self.locate(id, None)?;
        let inner = located
            .inner
            .ok_or_else(|| PageError::EmptyElement(id.to_string()))?;
        Ok(&self.html[inner])
    }

    /// Decoded value of an attribute on the element with the given id.
    ///
    /// # Errors
    ///
    /// * If no element carries the id
    pub fn attribute(&self, id: &str, name: &str) -> Result<Option<String>, PageError> {
        Ok(self.start_tag(id)?.attribute(name))
    }

    /// Apply one update.
    ///
    /// # Errors
    ///
    /// * If the container is missing, unclosed, or cannot hold content
    pub fn apply(&mut self, update: &ContainerUpdate) -> Result<(), PageError> {
        match &update.change {
            Change::InnerHtml(html) => self.replace_inner(&update.id, html),
            Change::Text(text) => {
                let escaped = html_escape::encode_text(text);
                self.replace_inner(&update.id, &escaped)
            }
            Change::Attribute { name, value } => self.set_attribute(&update.id, name, value),
        }
    }

    /// Apply every update that can be applied; the rest are logged and skipped.
    ///
    /// Returns the number of updates applied.
    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = ContainerUpdate>) -> usize {
        let mut applied = 0;
        for update in updates {
            match self.apply(&update) {
                Ok(()) => applied += 1,
                Err(e) => log::warn!("Skipping update for #{}: {e}", update.id),
            }
        }
        applied
    }

    fn replace_inner(&mut self, id: &str, content: &str) -> Result<(), PageError> {
        let located = self.locate(id, None)?;
        let inner = located
            .inner
            .ok_or_else(|| PageError::EmptyElement(id.to_string()))?;
        self.html.replace_range(inner, content);
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), PageError> {
        let located = self.locate(id, Some(name))?;
        let rendered = format!(
            "{name}=\"{}\"",
            html_escape::encode_double_quoted_attribute(value)
        );

        if let Some(span) = located.attribute {
            self.html.replace_range(span, &rendered);
        } else {
            self.html
                .insert_str(located.insertion_point, &format!(" {rendered}"));
        }
        Ok(())
    }

    fn start_tag(&self, id: &str) -> Result<tags::Tag<'_>, PageError> {
        tags::scan(&self.html, 0)
            .filter(|tag| !tag.closing)
            .find(|tag| tag.attribute("id").is_some_and(|value| value == id))
            .ok_or_else(|| PageError::ContainerNotFound(id.to_string()))
    }

    fn locate(&self, id: &str, attribute: Option<&str>) -> Result<Located, PageError> {
        let open = self.start_tag(id)?;

        let inner = if open.is_empty_element() {
            None
        } else {
            Some(self.content_range(id, &open)?)
        };

        Ok(Located {
            insertion_point: open.insertion_point(),
            attribute: attribute.and_then(|name| open.attribute_span(name)),
            inner,
        })
    }

    /// Range between the start tag and its matching end tag, honoring nested
    /// elements of the same name.
    fn content_range(&self, id: &str, open: &tags::Tag<'_>) -> Result<Range<usize>, PageError> {
        let mut depth = 1_usize;
        for tag in tags::scan(&self.html, open.span.end).filter(|tag| tag.is_named(open.name)) {
            if tag.closing {
                depth -= 1;
                if depth == 0 {
                    return Ok(open.span.end..tag.span.start);
                }
            } else if !tag.self_closing {
                depth += 1;
            }
        }
        Err(PageError::Unclosed(id.to_string()))
    }
}

impl From<String> for Document {
    fn from(html: String) -> Self {
        Self::new(html)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}
