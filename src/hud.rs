//! Displayed ball counter
//!
//! The count lives in a text element and is parsed back on every change, so
//! whatever the page put there first (empty, placeholder text) reads as zero.

use crate::sim::SimEvent;

/// A text-bearing element showing the live ball count
pub trait CounterDisplay {
    fn text(&self) -> Option<String>;
    fn set_text(&mut self, text: &str);
}

/// Parse counter text; anything non-numeric counts as zero
pub fn parse_count(text: Option<&str>) -> i64 {
    text.and_then(|t| t.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// Add `delta` to the displayed count
pub fn adjust(display: &mut dyn CounterDisplay, delta: i64) {
    let current = parse_count(display.text().as_deref());
    display.set_text(&(current + delta).to_string());
}

/// Reflect spawn/elimination events in the display
pub fn apply_events(display: &mut dyn CounterDisplay, events: &[SimEvent]) {
    for event in events {
        match event {
            SimEvent::BallSpawned => adjust(display, 1),
            SimEvent::BallEaten { .. } => adjust(display, -1),
            SimEvent::EvilCircleSpawned => {}
        }
    }
}

/// In-memory counter for tests and the native runner
#[derive(Debug, Clone, Default)]
pub struct TextCounter {
    pub text: String,
}

impl TextCounter {
    pub fn value(&self) -> i64 {
        parse_count(Some(self.text.as_str()))
    }
}

impl CounterDisplay for TextCounter {
    fn text(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[cfg(target_arch = "wasm32")]
impl CounterDisplay for web_sys::Element {
    fn text(&self) -> Option<String> {
        self.text_content()
    }

    fn set_text(&mut self, text: &str) {
        self.set_text_content(Some(text));
    }
}
