mod effects;
mod logging;
mod persistence;
mod render;
mod repl;

use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use desk_logging::desk_info;
use docdesk_core::{
    update, AppState, CompletedJobSnapshot, DocumentCategory, DocumentInput, Msg, SummaryType,
};
use docdesk_engine::EngineConfig;

use effects::EffectRunner;
use repl::Command;

/// Everything the main loop reacts to: a typed line from the user or a
/// message bridged back from the engine.
pub enum Input {
    Line(String),
    Msg(Msg),
}

fn main() -> Result<()> {
    logging::initialize(logging::LogDestination::File);

    let output_dir = output_dir();
    let engine_config = engine_config();
    desk_info!(
        "DocDesk starting; endpoint {} output dir {:?}",
        engine_config.submit.endpoint,
        output_dir
    );

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(engine_config, output_dir.clone(), input_tx.clone());
    spawn_stdin_reader(input_tx);

    let mut state = AppState::new();
    let session_history = persistence::load_history(&output_dir);
    if !session_history.is_empty() {
        let (next, _) = update(state, Msg::RestoreHistory(session_history.clone()));
        state = next;
        state.consume_dirty();
    }

    println!("DocDesk — type `help` for commands.");
    run_loop(input_rx, &runner, &output_dir, session_history, state)
}

fn run_loop(
    input_rx: mpsc::Receiver<Input>,
    runner: &EffectRunner,
    output_dir: &Path,
    session_history: Vec<CompletedJobSnapshot>,
    mut state: AppState,
) -> Result<()> {
    while let Ok(input) = input_rx.recv() {
        let msg = match input {
            Input::Msg(msg) => Some(msg),
            Input::Line(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match repl::parse(trimmed) {
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => {
                        for line in repl::help_lines() {
                            println!("{line}");
                        }
                        continue;
                    }
                    Ok(cmd) => {
                        if repl::requires_auth(&cmd) && !state.is_authenticated() {
                            println!("Sign in first: login <username> <password>");
                            continue;
                        }
                        command_to_msg(cmd, &state)
                    }
                }
            }
        };

        let Some(msg) = msg else { continue };
        let resolved_job = matches!(msg, Msg::JobResolved { .. });

        let (next, effects) = update(std::mem::take(&mut state), msg);
        state = next;
        runner.enqueue(effects);

        if resolved_job {
            let mut completed = session_history.clone();
            completed.extend(state.completed_jobs_snapshot());
            persistence::save_history(output_dir, &completed);
        }

        if state.consume_dirty() {
            for line in render::render(&state.view()) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Maps a parsed command onto a core message. Commands that only inspect
/// state print directly and yield no message.
fn command_to_msg(cmd: Command, state: &AppState) -> Option<Msg> {
    match cmd {
        Command::Login { username, password } => Some(Msg::LoginSubmitted { username, password }),
        Command::Logout => Some(Msg::LogoutClicked),
        Command::Add(path) => match read_document(&path) {
            Ok(input) => Some(Msg::FilesAdded(vec![input])),
            Err(err) => {
                println!("Could not read {}: {err}", path.display());
                None
            }
        },
        Command::Category { index, label } => match DocumentCategory::from_label(&label) {
            Some(category) => Some(Msg::DocumentCategoryChanged { index, category }),
            None => {
                println!(
                    "Unknown category {label:?}; one of: {}",
                    DocumentCategory::ALL.map(|c| c.label()).join(", ")
                );
                None
            }
        },
        Command::Remove { index } => Some(Msg::DocumentRemoved { index }),
        Command::Type(label) => {
            if label.eq_ignore_ascii_case("none") {
                return Some(Msg::SummaryTypeSelected(None));
            }
            match SummaryType::from_label(&label) {
                Some(summary_type) => Some(Msg::SummaryTypeSelected(Some(summary_type))),
                None => {
                    println!(
                        "Unknown summary type {label:?}; one of: {}",
                        SummaryType::ALL.map(|t| t.label()).join(", ")
                    );
                    None
                }
            }
        }
        Command::Generate => Some(Msg::GenerateClicked),
        Command::Status | Command::Docs | Command::CodeShow => {
            for line in render::render(&state.view()) {
                println!("{line}");
            }
            None
        }
        Command::Download(job_id) => Some(Msg::DownloadRequested { job_id }),
        Command::Chat(text) => Some(Msg::ChatMessageSent(text)),
        Command::Prompt(index) => Some(Msg::ChatPromptClicked(index)),
        Command::ChatClear => Some(Msg::ChatCleared),
        Command::CodeEdit(text) => Some(Msg::CodeEdited(text)),
        Command::CodeSave => Some(Msg::CodeSaved),
        Command::CodeBack => Some(Msg::CodeVersionBack),
        Command::CodeForward => Some(Msg::CodeVersionForward),
        Command::Help | Command::Quit => None,
    }
}

fn read_document(path: &Path) -> std::io::Result<DocumentInput> {
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(DocumentInput { name, bytes })
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        // EOF behaves like an explicit quit.
        let _ = input_tx.send(Input::Line("quit".to_string()));
    });
}

fn output_dir() -> PathBuf {
    std::env::var("DOCDESK_OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("output")
        })
}

fn engine_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    if let Ok(endpoint) = std::env::var("DOCDESK_ENDPOINT") {
        config.submit.endpoint = endpoint;
    }
    if let Ok(endpoint) = std::env::var("DOCDESK_AUTH_ENDPOINT") {
        config.auth.endpoint = endpoint;
    }
    config
}
