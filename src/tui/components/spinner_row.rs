//! # SpinnerRow Component
//!
//! One line of the spinner drill:
//!
//! ```text
//!  > items001 <   ∙●∙      focused, still waiting
//!    items002     ready    not focused, done
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

use crate::core::spinner::SpinnerItem;
use crate::tui::component::Component;

pub struct SpinnerRow<'a> {
    pub item: &'a SpinnerItem,
    pub focused: bool,
    /// Current spinner frame, shown while the item is not ready.
    pub frame: &'a str,
    pub color: Color,
}

impl<'a> SpinnerRow<'a> {
    pub fn new(item: &'a SpinnerItem, focused: bool, frame: &'a str, color: Color) -> Self {
        Self {
            item,
            focused,
            frame,
            color,
        }
    }

    pub fn text(&self) -> String {
        let state = if self.item.ready { "ready" } else { self.frame };
        let (front_gap, mid_gap) = if self.focused {
            (" > ", " <   ")
        } else {
            ("   ", "     ")
        };
        format!("{front_gap}{}{mid_gap}{state}", self.item.name)
    }
}

impl Component for SpinnerRow<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.focused {
            Style::default().fg(self.color).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        frame.render_widget(Line::styled(self.text(), style), area);
    }
}
