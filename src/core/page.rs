//! # Page
//!
//! The layout drill: a header over a body, sized from the last viewport.

use crate::core::board::Viewport;

pub const DEFAULT_HEADER: &str = "Title Here";
pub const DEFAULT_BODY: &str = "Some text here";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub header: String,
    pub body: String,
    viewport: Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Resize { width: u16, height: u16 },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEffect {
    Redraw,
    Quit,
}

impl Page {
    pub fn new(header: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            viewport: Viewport::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Header box size for the current viewport: two columns narrower than
    /// the screen, an eighth of its height (at least one line of content).
    pub fn header_size(&self) -> (u16, u16) {
        let width = self.viewport.width.saturating_sub(2);
        let height = (self.viewport.height / 8).max(1);
        (width, height)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER, DEFAULT_BODY)
    }
}

pub fn update(page: &mut Page, action: PageAction) -> PageEffect {
    match action {
        PageAction::Resize { width, height } => {
            page.viewport = Viewport { width, height };
            PageEffect::Redraw
        }
        PageAction::Quit => PageEffect::Quit,
    }
}
