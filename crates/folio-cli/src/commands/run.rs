use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use folio_core::{page::SectionId, AppConfig, Error, Portfolio};
use folio_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    load_theme, view,
};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub async fn run(config: Arc<AppConfig>, start_at: Option<String>) -> Result<()> {
    let portfolio = Portfolio::load(config.content_path().as_deref())?;
    if let Err(e) = portfolio.validate() {
        warn!("Content problem: {}", e);
    }

    // Unknown start section is an error before the terminal is touched
    let start_at = start_at.map(SectionId::new);
    if let Some(id) = &start_at {
        if !config.ui.spy.sections.iter().any(|s| s == id.as_str()) {
            return Err(Error::SectionNotFound(id.to_string()).into());
        }
    }

    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    // Load theme from config
    let theme = load_theme(&config.ui.theme);

    let mut app = App::new(config.clone(), portfolio, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let title = format!("{} | Portfolio", app.portfolio.profile.name);
    execute!(stdout, EnterAlternateScreen, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &keymap, start_at).await;

    // Stop the typing task before leaving
    app.shutdown().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Term,
    app: &mut App,
    keymap: &Keymap,
    start_at: Option<SectionId>,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    app.start();
    info!("Portfolio started at {}x{}", size.width, size.height);

    if let Some(id) = start_at {
        app.navigate(&id);
    }

    // Create event handler with animation FPS support
    let event_handler = EventHandler::with_animation_fps(
        app.config.ui.tick_rate_ms,
        app.config.ui.scroll.animation_fps,
    );

    // Main loop
    loop {
        // Scroll step, then spy scan, then progress: all before drawing
        app.on_frame();

        terminal.draw(|frame| view::draw(frame, app))?;

        let event = if app.needs_fast_update() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    handle_action(app, action);
                }
                AppEvent::Resize(width, height) => {
                    app.resize(width, height);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }
    // Status messages last until the next action
    if action != Action::None {
        app.clear_status();
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.scroll_down(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollHalfPageDown => app.scroll_half_page_down(),
        Action::ScrollHalfPageUp => app.scroll_half_page_up(),
        Action::ScrollPageDown => app.scroll_page_down(),
        Action::ScrollPageUp => app.scroll_page_up(),
        Action::JumpToTop => app.jump_to_top(),
        Action::JumpToBottom => app.jump_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::JumpToSection(index) => {
            if !app.navigate_to_entry(index) {
                app.set_status(format!("No section {}", index + 1));
            }
        }
        Action::ViewWork => {
            app.view_work();
        }
        Action::ToggleMenu => app.toggle_menu(),
        Action::MenuDown => app.menu_down(),
        Action::MenuUp => app.menu_up(),
        Action::Select => {
            if app.menu_open {
                app.menu_select();
            } else if app.focused_link.is_some() {
                app.open_focused_link();
            }
        }
        Action::OpenCv => app.open_cv(),
        Action::NextLink => app.next_link(),
        Action::PrevLink => app.prev_link(),
        Action::OpenLink => app.open_focused_link(),
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            if app.mode == Mode::Help {
                app.mode = Mode::Normal;
            } else if app.menu_open {
                app.menu_open = false;
            } else {
                app.focused_link = None;
            }
        }
        Action::None => {}
    }
}
