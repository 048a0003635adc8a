mod logging;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::runtime::Runtime;

use zbench::app::Workbench;
use zbench::kernel::services::adapters::{
    ensure_settings_file, load_settings, BufferEngine, BundledThemes, FileStorage, MemoryStorage,
};
use zbench::kernel::services::ports::{EngineEvent, KeyValueStorage, WorkbenchSettings};
use zbench::kernel::services::{EditorHost, PersistenceBridge};
use zbench::kernel::{AppState, WorkbenchPhase};
use zbench::tui::{
    action_for, command_for_key, draw, paste_inputs, Command, FrameLayout, TerminalGuard,
    TerminalRestorer, TerminationSignal, UiPalette,
};

const USAGE: &str = "usage: zbench [--ephemeral] [--storage-dir <dir>]";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    help: bool,
    ephemeral: bool,
    storage_dir: Option<PathBuf>,
}

fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--ephemeral" => parsed.ephemeral = true,
            "--storage-dir" => {
                let dir = args
                    .next()
                    .ok_or_else(|| "--storage-dir needs a directory".to_string())?;
                parsed.storage_dir = Some(PathBuf::from(dir));
            }
            other => match other.strip_prefix("--storage-dir=") {
                Some("") => return Err("--storage-dir needs a directory".to_string()),
                Some(dir) => parsed.storage_dir = Some(PathBuf::from(dir)),
                None => return Err(format!("unknown argument: {}", other)),
            },
        }
    }

    if parsed.ephemeral && parsed.storage_dir.is_some() {
        return Err("--ephemeral and --storage-dir cannot be combined".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, PartialEq, Eq)]
enum StorageChoice {
    Memory,
    Dir(PathBuf),
    Default,
}

fn storage_choice(args: &CliArgs, settings: &WorkbenchSettings) -> StorageChoice {
    if let Some(dir) = &args.storage_dir {
        return StorageChoice::Dir(dir.clone());
    }
    if args.ephemeral || !settings.persist {
        return StorageChoice::Memory;
    }
    StorageChoice::Default
}

fn open_storage(choice: StorageChoice) -> Arc<dyn KeyValueStorage> {
    match choice {
        StorageChoice::Memory => Arc::new(MemoryStorage::new()),
        StorageChoice::Dir(dir) => Arc::new(FileStorage::new(dir)),
        StorageChoice::Default => match FileStorage::open_default() {
            Ok(storage) => {
                tracing::info!(dir = %storage.dir().display(), "workbench state directory");
                Arc::new(storage)
            }
            Err(e) => {
                tracing::warn!(error = %e, "no state directory, workbench state will not persist");
                Arc::new(MemoryStorage::new())
            }
        },
    }
}

/// Bootstrap starts only after the loading placeholder has been on screen once.
fn mount_due(frames_drawn: u64, state: &AppState) -> bool {
    frames_drawn > 0 && matches!(state.phase, WorkbenchPhase::Loading)
}

#[cfg(unix)]
fn install_signals(restorer: TerminalRestorer, tx: Sender<TerminationSignal>) {
    if let Err(e) = zbench::tui::terminal_guard::install_termination_signals(restorer, tx) {
        tracing::warn!(error = %e, "failed to install signal handlers");
    }
}

#[cfg(not(unix))]
fn install_signals(_restorer: TerminalRestorer, _tx: Sender<TerminationSignal>) {}

fn main() -> io::Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("zbench: {}\n{}", message, USAGE);
            std::process::exit(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let _logging = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "failed to create settings file");
    }
    let settings = load_settings().unwrap_or_default();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (engine_tx, engine_rx) = mpsc::channel();
    let engine = Arc::new(BufferEngine::new(engine_tx));
    let host = Arc::new(EditorHost::new(
        engine.clone(),
        Arc::new(BundledThemes),
        settings.engine.clone(),
    ));
    let storage = open_storage(storage_choice(&args, &settings.workbench));
    let mut workbench = Workbench::new(host, PersistenceBridge::new(storage), &settings.workbench);

    let guard = TerminalGuard::enter()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    install_signals(guard.restorer(), signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run(
        &mut terminal,
        &runtime,
        &mut workbench,
        &engine,
        &engine_rx,
        &signal_rx,
    );
    drop(guard);

    if let Err(e) = &result {
        tracing::error!(error = %e, "workbench loop failed");
    }
    tracing::info!("zbench exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &Runtime,
    workbench: &mut Workbench,
    engine: &BufferEngine,
    engine_rx: &Receiver<EngineEvent>,
    signal_rx: &Receiver<TerminationSignal>,
) -> io::Result<()> {
    let mut frames_drawn = 0u64;
    loop {
        for event in engine_rx.try_iter() {
            runtime.block_on(workbench.handle_engine_event(event));
        }
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(signal = ?signal, "shutting down");
            return Ok(());
        }

        let snapshot = engine.snapshot();
        let palette = engine
            .current_theme()
            .map(|(_, definition)| UiPalette::from_theme(&definition))
            .unwrap_or_default();
        let mut layout = FrameLayout::default();
        terminal.draw(|frame| {
            layout = draw(frame, workbench.state(), snapshot.as_ref(), &palette);
        })?;
        engine.set_viewport_height(layout.editor.height as usize);
        frames_drawn += 1;

        if mount_due(frames_drawn, workbench.state()) {
            runtime.block_on(workbench.mount());
            continue;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => match command_for_key(key) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Edit(input)) => engine.apply_input(input),
                Some(command) => {
                    if let Some(action) = action_for(command, workbench.state()) {
                        runtime.block_on(workbench.dispatch(action));
                    }
                }
                None => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = layout.file_at(workbench.state(), mouse.column, mouse.row) {
                    runtime.block_on(workbench.select_file(&id));
                }
            }
            Event::Paste(text) => {
                for input in paste_inputs(&text) {
                    engine.apply_input(input);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/cli_args.rs"]
mod tests;
