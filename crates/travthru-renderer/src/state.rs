//! Renderer state tracked between markdown events.

/// Escape text for use in HTML content and double-quoted attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fenced/indented code block being collected.
#[derive(Debug, Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    lang: Option<String>,
    buffer: String,
}

impl CodeBlockState {
    pub(crate) fn start(&mut self, lang: Option<String>) {
        self.active = true;
        self.lang = lang;
        self.buffer.clear();
    }

    /// Finish the block, returning its language and raw source.
    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.lang.take(), std::mem::take(&mut self.buffer))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn push_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// Table section tracking (header cells render as `<th>`).
#[derive(Debug, Default)]
pub(crate) struct TableState {
    in_head: bool,
}

impl TableState {
    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }
}

/// Alt text collection for an image (inline markup inside `![...]` is flattened).
#[derive(Debug, Default)]
pub(crate) struct ImageState {
    depth: usize,
    alt: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        if self.depth == 0 {
            self.alt.clear();
        }
        self.depth += 1;
    }

    pub(crate) fn end(&mut self) -> String {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            std::mem::take(&mut self.alt)
        } else {
            String::new()
        }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.depth > 0
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt.push_str(text);
    }
}
