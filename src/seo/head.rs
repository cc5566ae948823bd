//! Per-request document head.
//!
//! The head is patched, never appended to: meta tags are keyed by `name`, so
//! applying the same values twice leaves the head unchanged.

use crate::html::escape_html;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHead {
    lang: Option<String>,
    title: String,
    meta: Vec<MetaTag>,
}

impl DocumentHead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta
            .iter()
            .find(|tag| tag.name == name)
            .map(|tag| tag.content.as_str())
    }

    pub fn meta_tags(&self) -> &[MetaTag] {
        &self.meta
    }

    /// Returns `true` if the title changed.
    pub fn set_title(&mut self, title: &str) -> bool {
        if self.title == title {
            return false;
        }
        self.title = title.to_string();
        true
    }

    /// Returns `true` if the language changed.
    pub fn set_lang(&mut self, lang: &str) -> bool {
        if self.lang.as_deref() == Some(lang) {
            return false;
        }
        self.lang = Some(lang.to_string());
        true
    }

    /// Insert or update the meta tag called `name`.
    ///
    /// Any further tags with the same name are dropped, so a head never holds
    /// two tags for one name. Returns `true` if the head changed.
    pub fn set_meta(&mut self, name: &str, content: &str) -> bool {
        let mut changed = false;
        let mut seen = false;

        self.meta.retain_mut(|tag| {
            if tag.name != name {
                return true;
            }
            if seen {
                changed = true;
                return false;
            }
            seen = true;
            if tag.content != content {
                tag.content = content.to_string();
                changed = true;
            }
            true
        });

        if !seen {
            self.meta.push(MetaTag {
                name: name.to_string(),
                content: content.to_string(),
            });
            changed = true;
        }

        changed
    }

    /// Remove every meta tag called `name`. Returns `true` if any was removed.
    pub fn remove_meta(&mut self, name: &str) -> bool {
        let before = self.meta.len();
        self.meta.retain(|tag| tag.name != name);
        self.meta.len() != before
    }

    /// Render the `<title>` and named `<meta>` elements.
    pub fn render(&self) -> String {
        let mut html = format!("<title>{}</title>", escape_html(&self.title));
        for tag in &self.meta {
            html.push_str(&format!(
                "\n<meta name=\"{}\" content=\"{}\">",
                escape_html(&tag.name),
                escape_html(&tag.content)
            ));
        }
        html
    }
}
