//! Terminal UI shell.
//!
//! Owns the terminal, the event loop, and the animation deadlines. The
//! loop is deadline-driven: input is polled with a timeout equal to the
//! time until the nearest due animation tick, so the process idles
//! between ticks instead of spinning, and each machine runs on its own
//! cadence (the machines themselves decide the cadence by returning the
//! next delay from `tick()`).

pub mod nav;
pub mod page;
pub mod styles;
pub mod text;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, Content, SectionId};
use crate::state::{self, AppState, SectionLayout};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub use nav::NAV_HEIGHT;
pub use styles::Styles;

/// Probe look-ahead in rows: the reference point for active-section
/// matching sits this far below the top of the content viewport,
/// compensating for the pinned nav bar.
pub const PROBE_LOOKAHEAD: usize = NAV_HEIGHT as usize + 1;

/// Cursor blink half-period.
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Fallback terminal width when the backend reports zero.
const FALLBACK_WIDTH: u16 = 80;

/// Restores the terminal on drop.
///
/// Held by the stdout-backed app so raw mode and the alternate screen
/// are released on every exit path, including panics and early returns.
#[derive(Debug)]
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

/// Main TUI application, generic over backend to support testing with
/// `TestBackend`.
pub struct App<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    bindings: KeyBindings,
    styles: Styles,
    /// Layout measured by the most recent draw, used by key handlers.
    layout: SectionLayout,
    typing_deadline: Instant,
    quote_deadline: Option<Instant>,
    blink_deadline: Instant,
    _guard: Option<TerminalGuard>,
}

impl App<CrosstermBackend<Stdout>> {
    /// Create and initialize a stdout-backed app.
    ///
    /// Sets up the terminal in raw mode on the alternate screen; both
    /// are restored when the app is dropped.
    pub fn new(content: Content, config: &ResolvedConfig) -> Result<Self, AppError> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        io::stdout().execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        let mut app = Self::with_terminal(terminal, content, config)?;
        app._guard = Some(guard);
        Ok(app)
    }
}

impl<B> App<B>
where
    B: ratatui::backend::Backend,
{
    /// Create an app over an existing terminal (no raw-mode setup).
    /// This is the constructor tests use with `TestBackend`.
    pub fn with_terminal(
        terminal: Terminal<B>,
        content: Content,
        config: &ResolvedConfig,
    ) -> Result<Self, AppError> {
        let state = AppState::new(content, config.scroll_step, PROBE_LOOKAHEAD)?;
        let now = Instant::now();
        let quote_deadline = if state.quotes.is_empty() {
            None
        } else {
            Some(now + crate::anim::quotes::ROTATE_DELAY)
        };

        Ok(Self {
            terminal,
            state,
            bindings: KeyBindings::default(),
            styles: Styles::for_theme(&config.theme),
            layout: SectionLayout::default(),
            typing_deadline: now,
            quote_deadline,
            blink_deadline: now + BLINK_INTERVAL,
            _guard: None,
        })
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable application state, for tests that drive the machines
    /// directly.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// The underlying terminal, for tests inspecting the backend
    /// buffer.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop. Returns when the user quits.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("Starting event loop");
        self.draw()?;

        loop {
            let timeout = self
                .next_deadline()
                .saturating_duration_since(Instant::now());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key) {
                            info!("Quit requested");
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        // The next draw re-measures at the new width.
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                self.advance_animations(Instant::now());
                self.draw()?;
            }
        }
    }

    /// Handle a single keyboard event. Returns `true` to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in the bindings.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.bindings.get(key) else {
            return false;
        };
        let viewport = self.viewport_height();
        state::handle_action(&mut self.state, action, &self.layout, viewport)
    }

    /// Fire every animation deadline that is due at `now` and
    /// reschedule it from the delay its machine returns.
    pub fn advance_animations(&mut self, now: Instant) {
        while self.typing_deadline <= now {
            let delay = self.state.typewriter.tick();
            self.typing_deadline += delay;
        }

        if let Some(deadline) = self.quote_deadline {
            if deadline <= now {
                let delay = self.state.quotes.tick();
                self.quote_deadline = Some(now + delay);
            }
        }

        if self.blink_deadline <= now {
            self.state.toggle_cursor();
            self.blink_deadline = now + BLINK_INTERVAL;
        }
    }

    /// Jump straight to a section (used by `--section`).
    pub fn jump_to_section(&mut self, section: SectionId) -> Result<(), AppError> {
        // Measure once so the jump has a layout to aim at.
        self.draw()?;
        if let Some(range) = self.layout.range(section) {
            let viewport = self.viewport_height();
            let max_scroll = self.layout.total_height.saturating_sub(viewport);
            self.state.scroll = range.top.min(max_scroll);
            self.state
                .tracker
                .on_scroll(self.state.scroll, self.layout.provider());
        }
        self.draw()
    }

    /// Render one frame: rebuild the page from current animation state,
    /// clamp the scroll offset, re-evaluate the active section against
    /// the fresh layout, and draw.
    pub fn draw(&mut self) -> Result<(), AppError> {
        let size = self.terminal.size()?;
        let width = if size.width == 0 {
            FALLBACK_WIDTH
        } else {
            size.width
        };

        let built = page::build(&self.state, &self.styles, width);

        let viewport = usize::from(size.height.saturating_sub(NAV_HEIGHT));
        let max_scroll = built.layout.total_height.saturating_sub(viewport);
        if self.state.scroll > max_scroll {
            self.state.scroll = max_scroll;
        }
        self.state
            .tracker
            .on_scroll(self.state.scroll, built.layout.provider());
        self.layout = built.layout;

        let scroll = u16::try_from(self.state.scroll).unwrap_or(u16::MAX);
        let name = self.state.content.profile.name.clone();
        let active = self.state.tracker.active();
        let sections = self.state.tracker.sections().to_vec();
        let styles = self.styles;
        let lines = built.lines;

        self.terminal.draw(|frame| {
            let [nav_area, content_area] =
                Layout::vertical([Constraint::Length(NAV_HEIGHT), Constraint::Min(0)])
                    .areas(frame.area());

            nav::render(frame, nav_area, &name, &sections, active, &styles);

            let body = Paragraph::new(lines).scroll((scroll, 0));
            frame.render_widget(body, content_area);
        })?;

        Ok(())
    }

    /// Instant of the nearest pending animation deadline.
    fn next_deadline(&self) -> Instant {
        let mut next = self.typing_deadline.min(self.blink_deadline);
        if let Some(quote) = self.quote_deadline {
            next = next.min(quote);
        }
        next
    }

    /// Visible content height in rows.
    fn viewport_height(&self) -> usize {
        match self.terminal.size() {
            Ok(size) => usize::from(size.height.saturating_sub(NAV_HEIGHT)),
            Err(_) => 24,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn test_app(width: u16, height: u16) -> App<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let content = Content::embedded().unwrap();
        App::with_terminal(terminal, content, &ResolvedConfig::default()).unwrap()
    }

    fn buffer_text(app: &App<TestBackend>) -> String {
        let buffer = app.terminal().backend().buffer();
        let area = *buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn draw_renders_nav_and_hero() {
        let mut app = test_app(80, 24);
        app.draw().unwrap();
        let text = buffer_text(&app);
        let name = app.state().content.profile.name.clone();
        assert!(text.contains(&name));
        assert!(text.contains("Home"));
    }

    #[test]
    fn key_scroll_moves_viewport_and_tracker() {
        let mut app = test_app(80, 24);
        app.draw().unwrap();

        let quit = app.handle_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
        assert!(!quit);
        assert!(app.state().scroll > 0);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app(80, 24);
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn q_quits_via_bindings() {
        let mut app = test_app(80, 24);
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut app = test_app(80, 24);
        assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)));
        assert_eq!(app.state().scroll, 0);
    }

    #[test]
    fn advance_animations_fires_due_typewriter_tick() {
        let mut app = test_app(80, 24);
        let before = app.state().typewriter.visible().to_string();
        // The first typing deadline is due immediately at construction.
        app.advance_animations(Instant::now());
        let after = app.state().typewriter.visible().to_string();
        assert!(after.len() > before.len());
    }

    #[test]
    fn advance_animations_toggles_blink_after_interval() {
        let mut app = test_app(80, 24);
        assert!(app.state().cursor_visible);
        app.advance_animations(Instant::now() + BLINK_INTERVAL + Duration::from_millis(1));
        assert!(!app.state().cursor_visible);
    }

    #[test]
    fn jump_to_section_lands_on_it() {
        let mut app = test_app(80, 24);
        app.jump_to_section(SectionId::Experience).unwrap();
        assert_eq!(app.state().tracker.active(), SectionId::Experience);
        assert!(app.state().scroll > 0);
    }

    #[test]
    fn jump_to_last_section_clamps_to_max_scroll() {
        let mut app = test_app(80, 24);
        app.jump_to_section(SectionId::Contact).unwrap();
        let viewport = usize::from(24 - NAV_HEIGHT);
        assert_eq!(
            app.state().scroll,
            app.layout.total_height.saturating_sub(viewport)
        );
    }

    #[test]
    fn draw_clamps_stale_scroll() {
        let mut app = test_app(80, 24);
        app.state_mut().scroll = usize::MAX;
        app.draw().unwrap();
        let viewport = usize::from(24 - NAV_HEIGHT);
        assert!(app.state().scroll <= app.layout.total_height.saturating_sub(viewport));
    }
}
