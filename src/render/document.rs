use anyhow::{Context, Result};
use std::path::Path;

use super::RenderError;

/// A host page shell: plain HTML with container elements addressed by id.
/// `inject` returns a copy of the page with one container's contents
/// replaced; the shell itself is never mutated.
#[derive(Debug, Clone)]
pub struct Document {
    shell: String,
}

impl Document {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let shell = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page shell {}", path.display()))?;
        Ok(Self::new(shell))
    }

    /// Whether an element with this id exists in the shell.
    pub fn has_container(&self, id: &str) -> bool {
        self.locate(id).is_some()
    }

    /// Replace the contents of the element with the given id. The previous
    /// contents are dropped entirely, never appended to.
    pub fn inject(&self, id: &str, markup: &str) -> Result<String, RenderError> {
        let (open_end, close_start) = self
            .locate(id)
            .ok_or_else(|| RenderError::MissingContainer(id.to_string()))?;

        let mut page = String::with_capacity(self.shell.len() + markup.len());
        page.push_str(&self.shell[..open_end]);
        page.push_str(markup);
        page.push_str(&self.shell[close_start..]);
        Ok(page)
    }

    /// Byte range of the container's contents: end of the opening tag to the
    /// start of the matching closing tag.
    fn locate(&self, id: &str) -> Option<(usize, usize)> {
        let attr_at = self.find_id_attr(id)?;
        let tag_start = self.shell[..attr_at].rfind('<')?;
        let tag_name: String = self.shell[tag_start + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag_name.is_empty() {
            return None;
        }
        let open_end = tag_start + self.shell[tag_start..].find('>')? + 1;

        let open_marker = format!("<{tag_name}");
        let close_marker = format!("</{tag_name}>");
        let mut depth = 1usize;
        let mut at = open_end;
        loop {
            let close = at + self.shell[at..].find(&close_marker)?;
            match self.next_open_tag(at, &open_marker) {
                Some(open) if open < close => {
                    depth += 1;
                    at = open + open_marker.len();
                }
                _ => {
                    depth -= 1;
                    if depth == 0 {
                        return Some((open_end, close));
                    }
                    at = close + close_marker.len();
                }
            }
        }
    }

    /// Next occurrence of `<tag` that is the start of that tag and not a
    /// prefix of a longer tag name.
    fn next_open_tag(&self, from: usize, marker: &str) -> Option<usize> {
        let mut at = from;
        while let Some(found) = self.shell[at..].find(marker) {
            let pos = at + found;
            match self.shell[pos + marker.len()..].chars().next() {
                Some(c) if c.is_ascii_alphanumeric() => at = pos + marker.len(),
                _ => return Some(pos),
            }
        }
        None
    }

    fn find_id_attr(&self, id: &str) -> Option<usize> {
        for quote in ['"', '\''] {
            let needle = format!("id={quote}{id}{quote}");
            let mut at = 0;
            while let Some(found) = self.shell[at..].find(&needle) {
                let pos = at + found;
                // Require a real attribute position, not a substring of some
                // other attribute or of text content.
                if self.shell[..pos].ends_with(|c: char| c.is_whitespace()) {
                    return Some(pos);
                }
                at = pos + needle.len();
            }
        }
        None
    }
}
