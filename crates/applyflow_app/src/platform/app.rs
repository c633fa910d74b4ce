use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use applyflow_client::AuthSettings;
use applyflow_core::{update, AppState, Destination, Effect, Msg};
use clap::Parser;
use client_logging::client_info;

use super::cli::Cli;
use super::effects::EffectRunner;
use super::ui;
use super::ui::input::ParsedLine;

/// Shell-level event: core messages plus the shutdown signal, which the
/// state machine never sees.
#[derive(Debug)]
pub(crate) enum ShellEvent {
    Core(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    super::logging::initialize(cli.log);
    client_info!("applyflow starting against {}", cli.endpoint);

    let settings = AuthSettings {
        endpoint: cli.endpoint.clone(),
        ..AuthSettings::default()
    };
    let (msg_tx, msg_rx) = mpsc::channel::<ShellEvent>();
    let runner = EffectRunner::new(msg_tx.clone(), settings, cli.state_dir.clone());

    let mut state = AppState::new();
    let mut screen = Destination::Login;
    ui::render::render_screen(screen, &state.view());
    println!("{}", ui::help::HELP_HINT);

    spawn_input_thread(msg_tx, cli.script.clone())?;

    while let Ok(event) = msg_rx.recv() {
        let msg = match event {
            ShellEvent::Quit => break,
            ShellEvent::Core(msg) => msg,
        };

        let (next, effects) = update(state, msg);
        state = next;

        let mut needs_render = state.consume_dirty();
        let mut io_effects = Vec::new();
        for effect in effects {
            match effect {
                Effect::Navigate { destination } => {
                    client_info!("Navigating to {}", destination.path());
                    screen = destination;
                    needs_render = true;
                }
                other => io_effects.push(other),
            }
        }
        runner.enqueue(io_effects);

        if needs_render {
            ui::render::render_screen(screen, &state.view());
        }
    }

    client_info!("applyflow exiting");
    Ok(())
}

fn spawn_input_thread(
    tx: mpsc::Sender<ShellEvent>,
    script: Option<PathBuf>,
) -> anyhow::Result<()> {
    let reader: Box<dyn BufRead + Send> = match script {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("open command script {path:?}"))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    thread::spawn(move || {
        for line in reader.lines() {
            let Ok(line) = line else { break };
            match ui::input::parse_line(&line) {
                Some(ParsedLine::Core(msg)) => {
                    if tx.send(ShellEvent::Core(msg)).is_err() {
                        return;
                    }
                }
                // Waits run on the input thread so scripts can let an
                // in-flight login settle before the next command.
                Some(ParsedLine::Wait(delay)) => thread::sleep(delay),
                Some(ParsedLine::Help) => println!("{}", ui::help::HELP_TEXT),
                Some(ParsedLine::Quit) => break,
                None => {
                    if !line.trim().is_empty() {
                        println!("Unknown command; type 'help' for the command list.");
                    }
                }
            }
        }
        let _ = tx.send(ShellEvent::Quit);
    });

    Ok(())
}
