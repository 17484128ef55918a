/// Manages chat input and scroll state
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChatInput {
    text: String,
    pub scroll_offset: usize,
}

impl ChatInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the buffer and leaves it empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn get(&self) -> &str {
        &self.text
    }

    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max_scroll: usize) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    /// Called on render once the visible height is known
    pub fn clamp_scroll(&mut self, max_scroll: usize) {
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    /// Lines a set of messages takes up: each text line plus a label and a spacer
    pub fn calculate_max_scroll(texts: &[&str], visible_height: usize) -> usize {
        let total_lines: usize = texts.iter().map(|text| text.lines().count().max(1) + 2).sum();
        total_lines.saturating_sub(visible_height)
    }
}
