//! # ColumnPanel Component
//!
//! One bordered kanban column: centered title on the border, one line per
//! task, and the cursor.
//!
//! ## Cursor styling
//!
//! Every column remembers where its cursor was, but only the focused column
//! is "live":
//!
//! - **Focused column**: border in `theme.focused`, cursor task reversed + bold.
//! - **Other columns**: border in `theme.muted`, cursor task in `theme.accent`
//!   so the user can see where focus lands when they switch back.
//!
//! A column taller than the panel scrolls just enough to keep the cursor
//! on the bottom row.
//!
//! Labels wider than the panel are cut with `…` using display width, so wide
//! characters never spill past the border.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::board::ColumnView;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct ColumnPanel<'a> {
    pub view: ColumnView<'a>,
    pub theme: &'a Theme,
}

impl<'a> ColumnPanel<'a> {
    pub fn new(view: ColumnView<'a>, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn task_style(&self, index: usize) -> Style {
        if self.view.focused_task != Some(index) {
            return Style::default();
        }
        if self.view.is_focused {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.accent)
        }
    }
}

impl Component for ColumnPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.view.is_focused {
            self.theme.focused
        } else {
            self.theme.muted
        };
        let block = Block::bordered()
            .title(Line::from(self.view.title).centered())
            .border_style(Style::default().fg(border_color));

        let inner_width = area.width.saturating_sub(2) as usize;
        let lines: Vec<Line> = self
            .view
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                Line::styled(truncate_to_width(task, inner_width), self.task_style(index))
            })
            .collect();

        let visible_rows = area.height.saturating_sub(2);
        let offset = scroll_offset(self.view.focused_task, visible_rows);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .scroll((offset, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Rows to skip so the cursor stays on screen. Scrolls only once the cursor
/// passes the last visible row, then keeps it pinned there.
pub fn scroll_offset(focused_task: Option<usize>, visible_rows: u16) -> u16 {
    let Some(focused) = focused_task else {
        return 0;
    };
    let focused = u16::try_from(focused).unwrap_or(u16::MAX);
    if visible_rows == 0 || focused < visible_rows {
        return 0;
    }
    focused - visible_rows + 1
}

/// Cut `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn render_panel(view: ColumnView, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                ColumnPanel::new(view, &theme).render(f, f.area());
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_title_and_tasks() {
        let tasks = vec!["Task 4".to_string(), "Task 5".to_string()];
        let view = ColumnView {
            title: "IN PROGRESS",
            tasks: &tasks,
            focused_task: Some(0),
            is_focused: true,
        };
        let text = buffer_text(&render_panel(view, 20, 6));
        assert!(text.contains("IN PROGRESS"));
        assert!(text.contains("Task 4"));
        assert!(text.contains("Task 5"));
    }

    #[test]
    fn test_focused_column_border_color() {
        let tasks = vec!["a".to_string()];
        let focused = ColumnView {
            title: "TODO",
            tasks: &tasks,
            focused_task: Some(0),
            is_focused: true,
        };
        let buffer = render_panel(focused, 10, 4);
        assert_eq!(buffer[(0, 0)].fg, Color::Cyan);

        let unfocused = ColumnView {
            is_focused: false,
            ..focused
        };
        let buffer = render_panel(unfocused, 10, 4);
        assert_eq!(buffer[(0, 0)].fg, Color::DarkGray);
    }

    #[test]
    fn test_empty_column_renders_border_only() {
        let view = ColumnView {
            title: "DONE",
            tasks: &[],
            focused_task: None,
            is_focused: false,
        };
        let text = buffer_text(&render_panel(view, 12, 4));
        assert!(text.contains("DONE"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let tasks = vec!["Task 1".to_string()];
        let view = ColumnView {
            title: "TODO",
            tasks: &tasks,
            focused_task: Some(0),
            is_focused: true,
        };
        render_panel(view, 1, 1);
    }

    #[test]
    fn test_short_panel_keeps_cursor_visible() {
        let tasks: Vec<String> = (1..=6).map(|i| format!("Task {i}")).collect();
        let view = ColumnView {
            title: "IN PROGRESS",
            tasks: &tasks,
            focused_task: Some(5),
            is_focused: true,
        };
        // 5 inner rows for 6 tasks
        let buffer = render_panel(view, 20, 7);
        let text = buffer_text(&buffer);
        assert!(text.contains("Task 6"));
        assert!(text.contains("Task 2"));
        assert!(!text.contains("Task 1"));

        let bottom_row: String = (0..20)
            .map(|x| buffer[(x, 5)].symbol().to_string())
            .collect();
        assert!(bottom_row.contains("Task 6"));
    }

    #[test]
    fn test_cursor_near_top_does_not_scroll() {
        let tasks: Vec<String> = (1..=6).map(|i| format!("Task {i}")).collect();
        let view = ColumnView {
            title: "TODO",
            tasks: &tasks,
            focused_task: Some(1),
            is_focused: true,
        };
        let text = buffer_text(&render_panel(view, 20, 7));
        assert!(text.contains("Task 1"));
        assert!(!text.contains("Task 6"));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(None, 5), 0);
        assert_eq!(scroll_offset(Some(4), 5), 0);
        assert_eq!(scroll_offset(Some(5), 5), 1);
        assert_eq!(scroll_offset(Some(9), 3), 7);
        assert_eq!(scroll_offset(Some(3), 0), 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Task 1", 10), "Task 1");
        assert_eq!(truncate_to_width("Task 1", 4), "Tas…");
        assert_eq!(truncate_to_width("Task 1", 0), "");
        // Wide chars count double
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }
}
