use crate::core::board::{Board, COLUMN_COUNT, Viewport};
use crate::core::page::Page;
use crate::core::spinner::SpinnerList;
use crate::tui::component::Component;
use crate::tui::components::help_bar::{BOARD_HELP, PAGE_HELP, SPINNER_HELP};
use crate::tui::components::{ColumnPanel, Header, HelpBar, SpinnerRow};
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Paragraph, Wrap};

/// Where each kanban column goes.
///
/// Sizes come from the last recorded viewport: every column is a quarter of
/// its width and three quarters of its height, and the three of them sit
/// side by side, centered horizontally at the top of `area`. Rects are
/// clipped to `area`, so a stale viewport never draws out of bounds.
pub fn board_column_areas(area: Rect, viewport: Viewport) -> [Rect; COLUMN_COUNT] {
    let column_width = viewport.width / 4;
    let column_height = (u32::from(viewport.height) * 3 / 4) as u16;
    let total_width = column_width * COLUMN_COUNT as u16;
    let left = area.x + area.width.saturating_sub(total_width) / 2;

    std::array::from_fn(|i| {
        let x = left.saturating_add(column_width * i as u16);
        Rect::new(x, area.y, column_width, column_height).intersection(area)
    })
}

/// The bottom line of `area`, or `None` when there is no room for it.
fn help_area(area: Rect) -> Option<Rect> {
    if area.height < 2 {
        return None;
    }
    Some(Rect::new(area.x, area.bottom() - 1, area.width, 1))
}

pub fn draw_board(frame: &mut Frame, board: &Board, theme: &Theme) {
    let area = frame.area();
    let areas = board_column_areas(area, board.viewport());

    for (view, column_area) in board.column_views().zip(areas) {
        if column_area.is_empty() {
            continue;
        }
        ColumnPanel::new(view, theme).render(frame, column_area);
    }

    if let Some(help) = help_area(area) {
        HelpBar::new(BOARD_HELP, theme.muted).render(frame, help);
    }
}

pub fn draw_spinners(frame: &mut Frame, list: &SpinnerList, spinner_frame: &str, theme: &Theme) {
    let area = frame.area();

    for (index, item) in list.items().iter().enumerate() {
        let Ok(offset) = u16::try_from(index) else {
            break;
        };
        if offset >= area.height {
            break;
        }
        let row = Rect::new(area.x, area.y + offset, area.width, 1);
        SpinnerRow::new(item, index == list.focused(), spinner_frame, theme.focused)
            .render(frame, row);
    }

    // One blank line under the list, then the help text
    let help_y = list.items().len().saturating_add(1);
    if let Ok(help_y) = u16::try_from(help_y)
        && help_y < area.height
    {
        let help = Rect::new(area.x, area.y + help_y, area.width, 1);
        HelpBar::new(SPINNER_HELP, theme.muted).render(frame, help);
    }
}

pub fn draw_page(frame: &mut Frame, page: &Page, theme: &Theme) {
    let area = frame.area();
    let (content_width, content_height) = page.header_size();

    // Header size is content only; borders add one cell on each side.
    let header_area = Rect::new(
        area.x,
        area.y,
        content_width.saturating_add(2),
        content_height.saturating_add(2),
    )
    .intersection(area);
    if !header_area.is_empty() {
        Header::new(&page.header, theme.focused).render(frame, header_area);
    }

    let body_area = Rect::new(
        area.x,
        header_area.bottom(),
        area.width,
        area.bottom().saturating_sub(header_area.bottom()),
    );
    if !body_area.is_empty() {
        let body = Paragraph::new(page.body.as_str()).wrap(Wrap { trim: true });
        frame.render_widget(body, body_area);
    }

    if let Some(help) = help_area(area)
        && help.y >= header_area.bottom()
    {
        HelpBar::new(PAGE_HELP, theme.muted).render(frame, help);
    }
}
