//! # Spinner List
//!
//! A handful of named items, each waiting on its own timer. While waiting an
//! item shows a spinner; once its timer fires it shows `ready`. Space resets
//! the focused item and starts a fresh wait.
//!
//! Timers are owned by the event loop. This module only decides *when* one
//! should start (`Effect::ScheduleReady`) and what to do when one reports
//! back (`SpinnerAction::Ready`). Each reset bumps the item's generation so
//! a timer started before the reset cannot end the new wait early.

use log::debug;

pub const DEFAULT_ITEM_COUNT: usize = 5;

/// Points-style spinner, one frame per tick.
pub const SPINNER_FRAMES: [&str; 4] = ["∙∙∙", "●∙∙", "∙●∙", "∙∙●"];

/// Frames per second of the spinner animation.
pub const SPINNER_FPS: f32 = 7.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerItem {
    pub name: String,
    pub ready: bool,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerList {
    items: Vec<SpinnerItem>,
    focused: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerAction {
    SelectNext,
    SelectPrevious,
    Reset,
    Ready { index: usize, generation: u64 },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerEffect {
    None,
    Redraw,
    ScheduleReady { index: usize, generation: u64 },
    Quit,
}

impl SpinnerList {
    /// Items named `items000`, `items001`, ... all waiting.
    pub fn new(count: usize) -> Self {
        let items = (0..count)
            .map(|i| SpinnerItem {
                name: format!("items{i:03}"),
                ready: false,
                generation: 0,
            })
            .collect();
        Self { items, focused: 0 }
    }

    pub fn items(&self) -> &[SpinnerItem] {
        &self.items
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    /// The timers to start when the program comes up: one per item.
    pub fn initial_effects(&self) -> Vec<SpinnerEffect> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| SpinnerEffect::ScheduleReady {
                index,
                generation: item.generation,
            })
            .collect()
    }

    /// True while any item is still spinning.
    pub fn is_animating(&self) -> bool {
        self.items.iter().any(|item| !item.ready)
    }
}

pub fn update(list: &mut SpinnerList, action: SpinnerAction) -> SpinnerEffect {
    match action {
        SpinnerAction::SelectNext => {
            if list.focused + 1 < list.items.len() {
                list.focused += 1;
                SpinnerEffect::Redraw
            } else {
                SpinnerEffect::None
            }
        }
        SpinnerAction::SelectPrevious => {
            if list.focused > 0 {
                list.focused -= 1;
                SpinnerEffect::Redraw
            } else {
                SpinnerEffect::None
            }
        }
        SpinnerAction::Reset => {
            let index = list.focused;
            let Some(item) = list.items.get_mut(index) else {
                return SpinnerEffect::None;
            };
            item.ready = false;
            item.generation += 1;
            debug!("Reset {} (generation {})", item.name, item.generation);
            SpinnerEffect::ScheduleReady {
                index,
                generation: item.generation,
            }
        }
        SpinnerAction::Ready { index, generation } => match list.items.get_mut(index) {
            Some(item) if item.generation == generation => {
                item.ready = true;
                debug!("{} ready", item.name);
                SpinnerEffect::Redraw
            }
            Some(item) => {
                debug!(
                    "Dropping stale timer for {} (generation {} != {})",
                    item.name, generation, item.generation
                );
                SpinnerEffect::None
            }
            None => SpinnerEffect::None,
        },
        SpinnerAction::Quit => SpinnerEffect::Quit,
    }
}

/// Spinner frame to show after `elapsed_secs` of animation.
pub fn frame_at(elapsed_secs: f32) -> &'static str {
    let tick = (elapsed_secs.max(0.0) * SPINNER_FPS) as usize;
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}
