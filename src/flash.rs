use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl FlashLevel {
    pub fn color(self) -> Color {
        match self {
            FlashLevel::Success => Color::Green,
            FlashLevel::Info => Color::Cyan,
            FlashLevel::Warning => Color::Yellow,
            FlashLevel::Error => Color::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub id: u64,
    pub level: FlashLevel,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct FlashStack {
    messages: Vec<Flash>,
    next_id: u64,
}

impl FlashStack {
    pub fn push(&mut self, level: FlashLevel, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Flash {
            id,
            level,
            text: text.into(),
        });
        id
    }

    /// Unknown ids are ignored, so dismissing twice is harmless.
    pub fn dismiss(&mut self, id: u64) {
        self.messages.retain(|m| m.id != id);
    }

    pub fn dismiss_latest(&mut self) {
        if let Some(latest) = self.messages.last().map(|m| m.id) {
            self.dismiss(latest);
        }
    }

    pub fn messages(&self) -> &[Flash] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
