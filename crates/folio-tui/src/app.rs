use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_core::page::{
    Caret, ScrollProgress, ScrollSpy, SectionId, SectionLayout, TypingAnimator,
};
use folio_core::scheduler::{TaskHandle, TypingService};
use folio_core::{AppConfig, Portfolio, Result};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::layout::PageLayout;
use crate::scroll::{SmoothScroller, Step};
use crate::theme::Theme;
use crate::widgets::NavbarWidget;

/// Rows taken by the progress bar and the navbar
pub const HEADER_HEIGHT: u16 = 2;
/// Rows taken by the status bar
pub const FOOTER_HEIGHT: u16 = 1;

const HERO: &str = "hero";
const WORK: &str = "projects";

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub portfolio: Portfolio,
    pub theme: Theme,
    /// Rendered page for the current terminal size
    pub layout: PageLayout,
    pub scroller: SmoothScroller,
    pub spy: ScrollSpy,
    /// Active section as seen by the navbar
    active: watch::Receiver<SectionId>,
    pub progress: ScrollProgress,
    /// Typed headline published by the typing task
    typed: watch::Receiver<String>,
    /// Typing loop waiting for a runtime; taken by `start`
    typing: Option<TypingService>,
    typing_task: Option<TaskHandle>,
    caret: Caret,
    mounted_at: Instant,
    last_frame: Instant,
    /// Current application mode
    pub mode: Mode,
    /// Navigation overlay visible (compact layout)
    pub menu_open: bool,
    /// Highlighted entry in the overlay, index into `nav_entries`
    pub menu_cursor: usize,
    /// Contact link focused with Tab, index into `layout.links()`
    pub focused_link: Option<usize>,
    /// Directory the CV path is relative to
    pub content_dir: Option<PathBuf>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, portfolio: Portfolio, theme: Theme) -> Result<Self> {
        let spy = ScrollSpy::from_config(&config.ui.spy)?;
        let active = spy.subscribe();

        let animator =
            TypingAnimator::from_config(portfolio.profile.roles.clone(), &config.ui.typing);
        let (typing, typed) = TypingService::new(animator);

        let now = Instant::now();
        Ok(Self {
            scroller: SmoothScroller::new(config.ui.scroll.clone()),
            progress: ScrollProgress::from_config(&config.ui.progress),
            caret: Caret::from(&config.ui.typing),
            content_dir: config
                .content_path()
                .and_then(|p| p.parent().map(|d| d.to_path_buf())),
            config,
            portfolio,
            theme,
            layout: PageLayout::default(),
            spy,
            active,
            typed,
            typing: Some(typing),
            typing_task: None,
            mounted_at: now,
            last_frame: now,
            mode: Mode::Normal,
            menu_open: false,
            menu_cursor: 0,
            focused_link: None,
            should_quit: false,
            status_message: None,
            pending_key: None,
        })
    }

    /// Start background work. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        if let Some(service) = self.typing.take() {
            self.typing_task = Some(service.spawn());
            self.mounted_at = Instant::now();
        }
    }

    /// Stop background work and wait for it
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.typing_task.take() {
            task.shutdown().await;
        }
    }

    // --- geometry -------------------------------------------------------

    /// Rebuild the page for a terminal of `width` x `height` cells.
    ///
    /// The reader stays on the section they were reading.
    pub fn resize(&mut self, width: u16, height: u16) {
        let body = body_height(height);
        if !self.layout.is_stale(width, body) {
            return;
        }
        let anchor = self.layout.bounds(&self.active_section()).map(|b| {
            let offset = self.scroller.offset();
            (b.id, offset.saturating_sub(b.top_offset))
        });

        self.layout = PageLayout::build(
            &self.portfolio,
            self.spy.order(),
            &self.theme,
            width,
            body,
        );
        debug!(
            "Layout rebuilt for {}x{}: {} rows, {} sections",
            width,
            body,
            self.layout.total_height(),
            self.layout.sections().len()
        );

        let max = self.layout.max_scroll();
        let offset = anchor
            .and_then(|(id, within)| {
                self.layout
                    .bounds(&id)
                    .map(|b| b.top_offset + within.min(b.height.saturating_sub(1)))
            })
            .unwrap_or(0)
            .min(max);
        self.scroller.animator_mut().set_scroll(offset);
        self.spy.observe(offset, &self.layout);
        self.progress.set_scroll(offset, max);
        self.progress.snap();
        self.clamp_menu_cursor();
    }

    pub fn viewport_height(&self) -> u16 {
        self.layout.viewport_height()
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroller.offset()
    }

    /// Navbar compact mode: entries collapse into the menu overlay below the
    /// configured width, or whenever the full row would not fit
    pub fn is_compact(&self) -> bool {
        let width = self.layout.width();
        width < self.config.ui.navbar.compact_width
            || (width as usize) < NavbarWidget::full_width(self)
    }

    /// Navbar gets its solid background once the page has moved
    pub fn is_scrolled(&self) -> bool {
        self.scroller.offset() >= self.config.ui.navbar.scrolled_threshold
    }

    // --- derived state --------------------------------------------------

    /// Section the navbar highlights
    pub fn active_section(&self) -> SectionId {
        self.active.borrow().clone()
    }

    /// Navigation entries: every rendered section except the hero
    pub fn nav_entries(&self) -> Vec<SectionId> {
        self.spy
            .order()
            .iter()
            .filter(|id| id.as_str() != HERO && self.layout.contains(id))
            .cloned()
            .collect()
    }

    pub fn logo(&self) -> String {
        self.portfolio.profile.logo()
    }

    /// Typed headline text
    pub fn typed_text(&self) -> String {
        self.typed.borrow().clone()
    }

    pub fn caret_visible(&self) -> bool {
        self.caret.visible_at(self.mounted_at.elapsed())
    }

    /// Hero headline row is on screen
    pub fn typing_visible(&self) -> bool {
        let Some(row) = self.layout.typing_row() else {
            return false;
        };
        let offset = self.scroller.offset();
        row >= offset && row < offset + self.viewport_height() as u32
    }

    /// Something is moving; the event loop should poll at the frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.scroller.animator().needs_update()
            || !self.progress.is_settled()
            || self.typing_visible()
    }

    // --- per frame ------------------------------------------------------

    /// Advance animations. Order matters: the spy and the progress bar see
    /// the offset produced by this frame's scroll step.
    pub fn on_frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.step(dt);
    }

    fn step(&mut self, dt: Duration) {
        let max = self.layout.max_scroll();
        let offset = self.scroller.update(max);
        self.spy.observe(offset, &self.layout);
        self.progress.set_scroll(offset, max);
        self.progress.update(dt);
    }

    // --- navigation -----------------------------------------------------

    /// Smooth-scroll to a section. The menu closes only when the section exists.
    pub fn navigate(&mut self, id: &SectionId) -> bool {
        let max = self.layout.max_scroll();
        if self.scroller.navigate(id, &self.layout, max) {
            self.menu_open = false;
            true
        } else {
            self.set_status(format!("No section '{}'", id));
            false
        }
    }

    /// Logo: back to the hero
    pub fn go_home(&mut self) {
        if !self.navigate(&SectionId::new(HERO)) {
            self.clear_status();
            let max = self.layout.max_scroll();
            self.scroller.animator_mut().scroll_to(0, max);
        }
    }

    /// "View My Work" call to action
    pub fn view_work(&mut self) -> bool {
        self.navigate(&SectionId::new(WORK))
    }

    /// Navigate to the nth navbar entry
    pub fn navigate_to_entry(&mut self, index: usize) -> bool {
        match self.nav_entries().get(index).cloned() {
            Some(id) => self.navigate(&id),
            None => false,
        }
    }

    pub fn next_section(&mut self) {
        let current = self.active_section();
        if let Some(id) = self.spy.next_after(&current, &self.layout).cloned() {
            self.navigate(&id);
        }
    }

    pub fn prev_section(&mut self) {
        let current = self.active_section();
        // Inside a section: go to its top first
        if let Some(bounds) = self.layout.bounds(&current) {
            if self.scroller.animator().target_scroll() > bounds.top_offset {
                self.navigate(&current);
                return;
            }
        }
        if let Some(id) = self.spy.prev_before(&current, &self.layout).cloned() {
            self.navigate(&id);
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_step(Step::LineDown);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_step(Step::LineUp);
    }

    pub fn scroll_half_page_down(&mut self) {
        self.scroll_step(Step::HalfPageDown);
    }

    pub fn scroll_half_page_up(&mut self) {
        self.scroll_step(Step::HalfPageUp);
    }

    pub fn scroll_page_down(&mut self) {
        self.scroll_step(Step::PageDown);
    }

    pub fn scroll_page_up(&mut self) {
        self.scroll_step(Step::PageUp);
    }

    fn scroll_step(&mut self, step: Step) {
        let (vh, max) = (self.viewport_height() as u32, self.layout.max_scroll());
        self.scroller.animator_mut().step(step, vh, max);
    }

    pub fn jump_to_top(&mut self) {
        self.go_home();
    }

    pub fn jump_to_bottom(&mut self) {
        let max = self.layout.max_scroll();
        self.scroller.animator_mut().scroll_to(max, max);
    }

    // --- menu -----------------------------------------------------------

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            // start on the section being read
            let active = self.active_section();
            self.menu_cursor = self
                .nav_entries()
                .iter()
                .position(|id| *id == active)
                .unwrap_or(0);
        }
    }

    pub fn menu_down(&mut self) {
        let len = self.nav_entries().len();
        if len > 0 {
            self.menu_cursor = (self.menu_cursor + 1) % len;
        }
    }

    pub fn menu_up(&mut self) {
        let len = self.nav_entries().len();
        if len > 0 {
            self.menu_cursor = (self.menu_cursor + len - 1) % len;
        }
    }

    /// Activate the highlighted menu entry
    pub fn menu_select(&mut self) -> bool {
        self.navigate_to_entry(self.menu_cursor)
    }

    fn clamp_menu_cursor(&mut self) {
        let len = self.nav_entries().len();
        self.menu_cursor = self.menu_cursor.min(len.saturating_sub(1));
    }

    // --- links ----------------------------------------------------------

    /// Focus the next contact link and bring it into view
    pub fn next_link(&mut self) {
        let len = self.layout.links().len();
        if len == 0 {
            return;
        }
        let next = self.focused_link.map_or(0, |i| (i + 1) % len);
        self.focus_link(next);
    }

    pub fn prev_link(&mut self) {
        let len = self.layout.links().len();
        if len == 0 {
            return;
        }
        let prev = self.focused_link.map_or(len - 1, |i| (i + len - 1) % len);
        self.focus_link(prev);
    }

    fn focus_link(&mut self, index: usize) {
        self.focused_link = Some(index);
        if let Some(anchor) = self.layout.links().get(index).copied() {
            let offset = self.scroller.animator().target_scroll();
            let vh = self.viewport_height() as u32;
            if anchor.row < offset || anchor.row >= offset + vh {
                let max = self.layout.max_scroll();
                let target = anchor.row.saturating_sub(vh / 2);
                self.scroller.animator_mut().scroll_to(target, max);
            }
        }
    }

    /// Target of the focused contact link
    pub fn focused_link_target(&self) -> Option<&str> {
        let anchor = self.layout.links().get(self.focused_link?)?;
        self.portfolio
            .contact
            .links
            .get(anchor.index)
            .map(|l| l.href.as_str())
    }

    pub fn open_focused_link(&mut self) {
        let Some(target) = self.focused_link_target().map(str::to_string) else {
            self.set_status("No link selected (Tab to cycle)");
            return;
        };
        self.open_external(&target);
    }

    pub fn open_cv(&mut self) {
        match self.portfolio.profile.cv_target(self.content_dir.as_deref()) {
            Some(target) => self.open_external(&target),
            None => self.set_status("No CV configured"),
        }
    }

    fn open_external(&mut self, target: &str) {
        info!("Opening {}", target);
        match open::that(target) {
            Ok(()) => self.set_status(format!("Opened {}", target)),
            Err(e) => {
                warn!("Failed to open {}: {}", target, e);
                self.set_status(format!("Failed to open: {}", e));
            }
        }
    }

    // --- misc -----------------------------------------------------------

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

fn body_height(terminal_height: u16) -> u16 {
    terminal_height
        .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::config::ScrollConfig;

    /// App with instant scrolling so navigation lands in one frame
    fn app(width: u16, height: u16) -> App {
        let mut config = AppConfig::default();
        config.ui.scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut app = App::new(
            Arc::new(config),
            Portfolio::sample().unwrap(),
            Theme::default(),
        )
        .unwrap();
        app.resize(width, height);
        app
    }

    fn frame(app: &mut App) {
        app.step(Duration::from_millis(16));
    }

    #[test]
    fn test_starts_at_hero() {
        let app = app(100, 30);
        assert_eq!(app.active_section().as_str(), "hero");
        assert_eq!(app.scroll_offset(), 0);
        assert_eq!(app.viewport_height(), 27);
        assert!(!app.is_scrolled());
    }

    #[test]
    fn test_nav_entries_skip_hero() {
        let app = app(100, 30);
        let entries = app.nav_entries();
        assert_eq!(entries.first().map(SectionId::as_str), Some("about"));
        assert!(!entries.iter().any(|id| id.as_str() == "hero"));
        assert_eq!(entries.len(), 7);
    }

    #[test]
    fn test_navigate_moves_spy() {
        let mut app = app(100, 30);
        assert!(app.view_work());
        frame(&mut app);
        let projects = app.layout.bounds(&"projects".into()).unwrap();
        assert_eq!(app.scroll_offset(), projects.top_offset.min(app.layout.max_scroll()));
        assert_eq!(app.active_section().as_str(), "projects");
        assert!(app.is_scrolled());
    }

    #[test]
    fn test_menu_closes_only_on_success() {
        let mut app = app(60, 30);
        assert!(app.is_compact());

        app.toggle_menu();
        assert!(app.menu_open);
        assert!(!app.navigate(&"blog".into()));
        assert!(app.menu_open);
        assert!(app.status_message.is_some());

        app.menu_down();
        assert!(app.menu_select());
        assert!(!app.menu_open);
    }

    #[test]
    fn test_menu_cursor_wraps() {
        let mut app = app(60, 30);
        app.toggle_menu();
        assert_eq!(app.menu_cursor, 0);
        app.menu_up();
        assert_eq!(app.menu_cursor, app.nav_entries().len() - 1);
        app.menu_down();
        assert_eq!(app.menu_cursor, 0);
    }

    #[test]
    fn test_next_and_prev_section() {
        let mut app = app(100, 30);
        app.next_section();
        frame(&mut app);
        assert_eq!(app.active_section().as_str(), "about");

        app.next_section();
        frame(&mut app);
        assert_eq!(app.active_section().as_str(), "skills");

        app.prev_section();
        frame(&mut app);
        assert_eq!(app.active_section().as_str(), "about");
    }

    #[test]
    fn test_progress_tracks_offset() {
        let mut app = app(100, 30);
        app.jump_to_bottom();
        for _ in 0..120 {
            frame(&mut app);
        }
        assert_eq!(app.scroll_offset(), app.layout.max_scroll());
        assert_eq!(app.progress.value(), 1.0);
        assert_ne!(app.active_section().as_str(), "hero");

        app.jump_to_top();
        for _ in 0..120 {
            frame(&mut app);
        }
        assert_eq!(app.progress.value(), 0.0);
        assert_eq!(app.active_section().as_str(), "hero");
    }

    #[test]
    fn test_resize_keeps_section() {
        let mut app = app(120, 30);
        app.navigate(&"experience".into());
        frame(&mut app);
        app.resize(50, 30);
        assert_eq!(app.active_section().as_str(), "experience");
        assert!(app.scroll_offset() <= app.layout.max_scroll());
    }

    #[test]
    fn test_links_cycle_and_scroll_into_view() {
        let mut app = app(100, 30);
        app.next_link();
        assert_eq!(app.focused_link, Some(0));
        assert!(app.focused_link_target().is_some());
        frame(&mut app);
        let row = app.layout.links()[0].row;
        let offset = app.scroll_offset();
        assert!(row >= offset && row < offset + app.viewport_height() as u32);

        app.prev_link();
        assert_eq!(app.focused_link, Some(app.layout.links().len() - 1));
    }

    #[test]
    fn test_missing_cv_sets_status() {
        let mut app = app(100, 30);
        app.portfolio.profile.cv = None;
        app.open_cv();
        assert_eq!(app.status_message.as_deref(), Some("No CV configured"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_task_publishes() {
        let mut app = app(100, 30);
        assert_eq!(app.typed_text(), "");
        app.start();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!app.typed_text().is_empty());
        assert!(app.portfolio.profile.roles[0].starts_with(&app.typed_text()));
        app.shutdown().await;
    }
}
