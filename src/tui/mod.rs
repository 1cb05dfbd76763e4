//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders each drill,
//! and translates keyboard events into core actions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Every drill runs the same loop: draw if something changed, wait for
//! input, then drain *all* pending events through the drill's `update()`
//! before the next draw. Exactly one place mutates state, so there is no
//! locking anywhere.
//!
//! The spinner drill also has timers. They run as tokio tasks but never
//! touch the list: they send `SpinnerAction::Ready` over a channel, and the
//! loop feeds those into `update()` just like key presses.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (spinner with items still waiting): draws every
//!   `frame_ms` for smooth animation.
//! - **Idle** (everything else): sleeps up to 500ms, only redraws on events
//!   or terminal resize.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::{debug, info, warn};
use rand::Rng;
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::Program;
use crate::core::action::{self, Action, Effect};
use crate::core::board::Board;
use crate::core::config::ResolvedConfig;
use crate::core::page::{self, Page, PageAction, PageEffect};
use crate::core::spinner::{self, SpinnerAction, SpinnerEffect, SpinnerList};
use crate::tui::event::{
    TuiEvent, board_action, page_action, poll_event_immediate, poll_event_timeout,
    spinner_action,
};
use crate::tui::theme::Theme;

const IDLE_TIMEOUT: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Without disambiguation many terminals send Ctrl+H as Backspace and
        // Ctrl+J as Enter. Terminals without the kitty protocol ignore this.
        execute!(
            stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let theme = Theme::from_config(&config);

    let mut terminal = ratatui::try_init()?;
    let terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Keyboard enhancement unavailable: {}", e);
            None
        }
    };

    let result = match config.program {
        Program::Kanban => run_kanban(&mut terminal, &theme),
        Program::Spinner => run_spinner(&mut terminal, &config, &theme),
        Program::Layout => run_layout(&mut terminal, &config, &theme),
    };

    drop(terminal_mode_guard);
    ratatui::restore();

    match &result {
        Ok(()) => info!("{:?} exited cleanly", config.program),
        Err(e) => warn!("{:?} exited with error: {}", config.program, e),
    }
    result
}

/// Wait up to `timeout` for one event, then collect everything else that is
/// already queued, so a burst of keys costs one redraw.
fn next_events(timeout: Duration) -> std::io::Result<Vec<TuiEvent>> {
    let mut events = Vec::new();
    if let Some(first) = poll_event_timeout(timeout)? {
        events.push(first);
        while let Some(event) = poll_event_immediate()? {
            events.push(event);
        }
    }
    Ok(events)
}

// ============================================================================
// Kanban
// ============================================================================

fn run_kanban(terminal: &mut DefaultTerminal, theme: &Theme) -> std::io::Result<()> {
    let mut board = Board::seeded();

    // The board only knows the size a resize told it; seed it with the
    // current one so the first frame is not empty.
    let size = terminal.size()?;
    action::update(
        &mut board,
        Action::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_board(f, &board, theme))?;
            needs_redraw = false;
        }

        for event in next_events(IDLE_TIMEOUT)? {
            let Some(action) = board_action(event) else {
                continue;
            };
            match action::update(&mut board, action) {
                Effect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                Effect::Redraw => needs_redraw = true,
                Effect::None => {}
            }
        }
    }
}

// ============================================================================
// Spinner
// ============================================================================

fn run_spinner(
    terminal: &mut DefaultTerminal,
    config: &ResolvedConfig,
    theme: &Theme,
) -> std::io::Result<()> {
    let mut list = SpinnerList::new(config.spinner_items);

    // Channel for actions from timer tasks
    let (tx, rx) = mpsc::channel();

    for effect in list.initial_effects() {
        apply_spinner_effect(effect, config.spinner_max_ready_secs, &tx);
    }

    // Animation timer
    let start_time = Instant::now();
    let frame_timeout = Duration::from_millis(config.frame_ms);
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = list.is_animating();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = spinner::frame_at(start_time.elapsed().as_secs_f32());
            terminal.draw(|f| ui::draw_spinners(f, &list, spinner_frame, theme))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating { frame_timeout } else { IDLE_TIMEOUT };

        for event in next_events(timeout)? {
            // Any input, resize included, redraws
            needs_redraw = true;
            let Some(action) = spinner_action(event) else {
                continue;
            };
            let effect = spinner::update(&mut list, action);
            if effect == SpinnerEffect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            apply_spinner_effect(effect, config.spinner_max_ready_secs, &tx);
        }

        // Handle timer actions
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            let effect = spinner::update(&mut list, action);
            if effect == SpinnerEffect::Redraw {
                needs_redraw = true;
            }
        }
    }
}

fn apply_spinner_effect(
    effect: SpinnerEffect,
    max_ready_secs: u64,
    tx: &mpsc::Sender<SpinnerAction>,
) {
    if let SpinnerEffect::ScheduleReady { index, generation } = effect {
        let delay = ready_delay(max_ready_secs, &mut rand::thread_rng());
        spawn_ready_timer(index, generation, delay, tx.clone());
    }
}

/// A random wait in whole seconds, `0..max_secs` (zero when `max_secs` is 0).
fn ready_delay(max_secs: u64, rng: &mut impl Rng) -> Duration {
    if max_secs == 0 {
        return Duration::ZERO;
    }
    Duration::from_secs(rng.gen_range(0..max_secs))
}

fn spawn_ready_timer(
    index: usize,
    generation: u64,
    delay: Duration,
    tx: mpsc::Sender<SpinnerAction>,
) {
    debug!(
        "Spawning ready timer for item {} (generation {}, {:?})",
        index, generation, delay
    );
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(SpinnerAction::Ready { index, generation }).is_err() {
            warn!(
                "Failed to deliver ready signal for item {}: receiver dropped",
                index
            );
        }
    });
}

// ============================================================================
// Layout
// ============================================================================

fn run_layout(
    terminal: &mut DefaultTerminal,
    config: &ResolvedConfig,
    theme: &Theme,
) -> std::io::Result<()> {
    let mut page = Page::new(config.header.clone(), config.body.clone());

    let size = terminal.size()?;
    page::update(
        &mut page,
        PageAction::Resize {
            width: size.width,
            height: size.height,
        },
    );

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_page(f, &page, theme))?;
            needs_redraw = false;
        }

        for event in next_events(IDLE_TIMEOUT)? {
            let Some(action) = page_action(event) else {
                continue;
            };
            match page::update(&mut page, action) {
                PageEffect::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                PageEffect::Redraw => needs_redraw = true,
            }
        }
    }
}
