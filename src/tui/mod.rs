pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::qr;
use crate::slideshow::ImageStore;
use crate::timer::Repeating;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::AppState;
use crate::tui::view::draw;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("chorecast_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let config = Config::load_or_default();
    let schedule = config.schedule()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(schedule, config.upload_url.clone());
    let (action_tx, mut action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // SPAWN ACTOR
    // Owns the HTTP client; the UI only sees Actions in and AppEvents out.
    let actor_cfg = config.clone();
    let actor_events = event_tx.clone();
    tokio::spawn(async move {
        let store = match ImageStore::new(&actor_cfg.storage_url) {
            Ok(s) => s,
            Err(e) => {
                let _ = actor_events.send(AppEvent::Error(e)).await;
                return;
            }
        };

        let _ = actor_events
            .send(AppEvent::Status("Fetching images...".to_string()))
            .await;

        match qr::fetch_to_cache(&store, &actor_cfg.upload_url, actor_cfg.qr_size).await {
            Ok(Some(path)) => {
                let _ = actor_events.send(AppEvent::QrReady(path)).await;
            }
            Ok(None) => {}
            Err(e) => {
                let _ = actor_events.send(AppEvent::Error(format!("QR: {}", e))).await;
            }
        }

        while let Some(action) = action_rx.recv().await {
            match action {
                Action::Quit => break,

                Action::RefreshImages => {
                    // A failed refresh keeps showing the last good listing.
                    let (entries, warning) = store.list_with_fallback().await;
                    let _ = actor_events.send(AppEvent::ImagesLoaded(entries)).await;
                    if let Some(w) = warning {
                        let _ = actor_events.send(AppEvent::Error(w)).await;
                    }
                }
            }
        }
    });

    // The refresh timer fires immediately, which is what triggers the
    // initial listing; the cycle timer drives the slideshow.
    let refresh_tx = action_tx.clone();
    let refresh_timer = Repeating::spawn(Duration::from_secs(config.list_refresh_secs), move || {
        let tx = refresh_tx.clone();
        async move {
            let _ = tx.send(Action::RefreshImages).await;
        }
    });
    let cycle_tx = event_tx.clone();
    let cycle_timer = Repeating::spawn(Duration::from_secs(config.image_cycle_secs), move || {
        let tx = cycle_tx.clone();
        async move {
            let _ = tx.send(AppEvent::CycleImage).await;
        }
    });

    // UI Loop
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        if let Ok(event) = event_rx.try_recv() {
            match event {
                AppEvent::ImagesLoaded(entries) => {
                    app_state.loading = false;
                    app_state.message = format!("Images: {}", entries.len());
                    app_state.slideshow.set_entries(entries);
                }
                AppEvent::CycleImage => {
                    app_state.slideshow.advance();
                }
                AppEvent::QrReady(path) => {
                    app_state.qr_path = Some(path);
                }
                AppEvent::Error(msg) => {
                    app_state.message = format!("Error: {}", msg);
                    app_state.loading = false;
                }
                AppEvent::Status(msg) => {
                    app_state.message = msg;
                }
            }
        }

        if crossterm::event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        refresh_timer.cancel();
                        cycle_timer.cancel();
                        let _ = action_tx.send(Action::Quit).await;
                        break;
                    }
                    KeyCode::Left | KeyCode::Char('h') => app_state.prev_day(),
                    KeyCode::Right | KeyCode::Char('l') => app_state.next_day(),
                    KeyCode::Char('t') => app_state.jump_today(),
                    KeyCode::Char('g') => app_state.jump_start(),
                    KeyCode::Char('G') => app_state.jump_end(),
                    KeyCode::Char('r') => {
                        app_state.message = "Refreshing...".to_string();
                        let _ = action_tx.send(Action::RefreshImages).await;
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
