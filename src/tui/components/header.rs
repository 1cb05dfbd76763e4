//! # Header Component
//!
//! Bordered box with its content centered both ways. Used by the layout
//! drill as the page title.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;

pub struct Header<'a> {
    pub content: &'a str,
    pub border_color: Color,
}

impl<'a> Header<'a> {
    pub fn new(content: &'a str, border_color: Color) -> Self {
        Self {
            content,
            border_color,
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(Style::default().fg(self.border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [line_area] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(inner);
        let paragraph = Paragraph::new(self.content).alignment(Alignment::Center);
        frame.render_widget(paragraph, line_area);
    }
}
