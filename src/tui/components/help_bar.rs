//! # HelpBar Component
//!
//! One dim line listing the key bindings of the running drill.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;

pub const BOARD_HELP: &str =
    "←/→ h/l column • ↓/↑ j/k task • ctrl+k/j priority • ctrl+h/l move • ctrl+c exit";
pub const SPINNER_HELP: &str = "j/k, ↓/↑: select • <space>: reset selection • ctrl+c, q: exit";
pub const PAGE_HELP: &str = "ctrl+c, q: exit";

pub struct HelpBar {
    pub text: &'static str,
    pub color: Color,
}

impl HelpBar {
    pub fn new(text: &'static str, color: Color) -> Self {
        Self { text, color }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::styled(self.text, Style::default().fg(self.color))
            .centered();
        frame.render_widget(line, area);
    }
}
