pub const DEFAULT_LINK_TEXT: &str = "Click Me!";
pub const DEFAULT_LINK_URL: &str = "#";

/// Code preview for the anchor tag demo, falling back to defaults for empty inputs.
#[must_use]
pub fn anchor_preview(text: &str, url: &str) -> String {
    let text = if text.is_empty() { DEFAULT_LINK_TEXT } else { text };
    let url = if url.is_empty() { DEFAULT_LINK_URL } else { url };
    format!("<A href=\"{url}\">{text}</A>")
}

/// The two inputs of an anchor tag demo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorDraft {
    text: String,
    url: String,
}

impl AnchorDraft {
    pub fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    pub fn set_url(&mut self, url: &str) {
        url.clone_into(&mut self.url);
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn preview(&self) -> String {
        anchor_preview(&self.text, &self.url)
    }
}
