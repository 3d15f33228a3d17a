use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use assistant_core::{update, AppState, AppViewModel, Msg, RequestState};
use assistant_logging::{assistant_info, assistant_warn};
use clap::Parser;
use console::Term;

use super::config::{AppConfig, Cli};
use super::effects::EffectRunner;
use super::input::{translate, InputAction};
use super::{logging, ui};

/// Everything the main loop reacts to.
pub enum AppEvent {
    /// A line typed at the terminal.
    Line(String),
    /// Standard input reached end-of-file.
    InputClosed,
    /// A message produced by the engine side.
    Core(Msg),
}

pub fn run_app() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_cli(Cli::parse())?;
    logging::initialize(&config.log);
    assistant_info!("Starting assistant against {}", config.ask.base_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner =
        EffectRunner::new(config.ask.clone(), event_tx.clone()).context("starting engine")?;
    spawn_input_reader(event_tx.clone());

    let term = Term::stdout();
    let (mut state, effects) = update(AppState::new(), Msg::Started);
    runner.run(effects);
    state.consume_dirty();
    draw(&term, &state.view())?;

    let mut input_closed = false;
    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            AppEvent::Core(msg) => msg,
            AppEvent::InputClosed => {
                input_closed = true;
                Msg::Tick
            }
            AppEvent::Line(line) => match translate(&line, &state.view()) {
                InputAction::Dispatch(msg) => msg,
                InputAction::Notice(notice) => {
                    term.write_line(&console::style(notice).yellow().to_string())?;
                    continue;
                }
                InputAction::Help => {
                    for line in ui::constants::HELP_LINES {
                        term.write_line(line)?;
                    }
                    continue;
                }
                InputAction::Quit => break,
                InputAction::Ignore => continue,
            },
        };

        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);
        if state.consume_dirty() {
            draw(&term, &state.view())?;
        }

        // Piped input: wait for the pending answer before leaving.
        if input_closed && state.request_state() != RequestState::Loading {
            break;
        }
    }

    assistant_info!("Assistant shutting down");
    Ok(())
}

fn draw(term: &Term, view: &AppViewModel) -> io::Result<()> {
    term.clear_screen()?;
    for line in ui::render::render(view) {
        term.write_line(&ui::render::paint(&line))?;
    }
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(AppEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    assistant_warn!("Failed to read from stdin: {}", err);
                    break;
                }
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}
