//! Line-oriented browse loop.
//!
//! Input is read on its own thread so the loop can react to finished loads
//! while waiting for the next command. Selecting another console while one
//! is still loading supersedes it; the older result is dropped when it
//! arrives.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use romshelf_lib::settings::save_settings;
use romshelf_lib::{
    GameDetail, GameRecord, LoadEvent, LoadOutcome, LoadState, Loader, RegionFilter, Session,
    SortOrder, Theme, View,
};

use crate::commands::AppContext;
use crate::commands::list::run_list;
use crate::error::CliError;
use crate::render::{render_detail, render_regions, render_stats, render_view};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

const HELP: &[(&str, &str)] = &[
    ("console <key>", "load a console's listing"),
    ("reload", "load the current console again"),
    ("home", "leave the current listing"),
    ("search <text>", "filter by file name (no text clears)"),
    ("region <name|all>", "filter by region"),
    ("regions", "list the regions of this listing"),
    ("sort <order>", "see the orders below"),
    ("next, prev, page <n>", "move between pages"),
    ("show <n>", "details of game #n"),
    ("link <n>", "download link of game #n"),
    ("reset", "clear search, region and sort"),
    ("stats", "count and size of the filtered list"),
    ("theme <name>", "dark, light or mono (saved)"),
    ("help", "this list"),
    ("quit", "exit"),
];

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Empty,
    Console(String),
    Reload,
    Home,
    Search(String),
    Region(RegionFilter),
    Regions,
    Sort(SortOrder),
    Next,
    Prev,
    Page(usize),
    Show(usize),
    Link(usize),
    Reset,
    Stats,
    Theme(Theme),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (line, ""),
    };
    let index = |arg: &str| -> Result<usize, String> {
        arg.parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| format!("Expected a game number, got '{arg}'"))
    };

    let command = match word.to_lowercase().as_str() {
        "" => Command::Empty,
        "console" | "load" | "open" if !arg.is_empty() => Command::Console(arg.to_lowercase()),
        "console" | "load" | "open" => return Err("Which console? e.g. `console ps2`".into()),
        "reload" => Command::Reload,
        "home" => Command::Home,
        "search" | "find" | "/" => Command::Search(arg.to_string()),
        "region" if !arg.is_empty() => Command::Region(RegionFilter::from_value(arg)),
        "region" => Command::Region(RegionFilter::All),
        "regions" => Command::Regions,
        "sort" => Command::Sort(arg.parse()?),
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "page" => Command::Page(
            arg.parse()
                .map_err(|_| format!("Expected a page number, got '{arg}'"))?,
        ),
        "show" | "info" => Command::Show(index(arg)?),
        "link" | "copy" => Command::Link(index(arg)?),
        "reset" => Command::Reset,
        "stats" => Command::Stats,
        "theme" => Command::Theme(arg.parse()?),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("Unknown command '{other}' (try `help`)")),
    };
    Ok(command)
}

pub(crate) fn run_interactive(
    ctx: &mut AppContext,
    console: Option<String>,
) -> Result<(), CliError> {
    let mut session = Session::new(ctx.page_size);
    let mut loader = ctx.loader();
    let lines = spawn_input_reader();

    log::info!(
        "{}",
        ctx.palette.dim("Type `help` for commands, `quit` to leave.")
    );
    match console {
        Some(console) => open_console(ctx, &mut session, &mut loader, &console),
        None => show_home(ctx, &session),
    }
    prompt()?;

    loop {
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => {
                let command = match parse_command(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        log::warn!("{e}");
                        prompt()?;
                        continue;
                    }
                };
                if command == Command::Quit {
                    break;
                }
                execute(ctx, &mut session, &mut loader, command);
                prompt()?;
            }
            Err(RecvTimeoutError::Timeout) => {
                let events = loader.poll(&mut session);
                let mut shown = false;
                for event in events {
                    shown |= on_load_event(ctx, &mut session, &event);
                }
                if shown {
                    prompt()?;
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(())
}

fn execute(
    ctx: &mut AppContext,
    session: &mut Session,
    loader: &mut Loader,
    command: Command,
) {
    match command {
        Command::Empty | Command::Quit => {}
        Command::Console(console) => open_console(ctx, session, loader, &console),
        Command::Reload => match current_console(session) {
            Some(console) => {
                let console = console.to_string();
                open_console_fresh(ctx, session, loader, &console);
            }
            None => log::warn!("No console selected"),
        },
        Command::Home => {
            session.go_home();
            show_home(ctx, session);
        }
        Command::Search(term) => {
            session.set_search(&term);
            render_view(&ctx.palette, session);
        }
        Command::Region(region) => {
            if has_dataset(session) && !session.facets().contains(&region) {
                log::warn!("Region '{region}' is not among this listing's regions");
            }
            session.set_region(region);
            render_view(&ctx.palette, session);
        }
        Command::Regions => render_regions(&ctx.palette, session.facets()),
        Command::Sort(order) => {
            session.set_sort(order);
            render_view(&ctx.palette, session);
        }
        Command::Next => {
            session.next_page();
            render_view(&ctx.palette, session);
        }
        Command::Prev => {
            session.previous_page();
            render_view(&ctx.palette, session);
        }
        Command::Page(page) => {
            session.go_to_page(page);
            render_view(&ctx.palette, session);
        }
        Command::Show(index) => match visible_record(session, index) {
            Some(game) => render_detail(&ctx.palette, index - 1, &GameDetail::new(game)),
            None => log::warn!("No game #{index}"),
        },
        Command::Link(index) => match visible_record(session, index) {
            Some(game) => match game.download_link() {
                Some(link) => log::info!("{link}"),
                None => log::warn!("Game #{index} has no download link"),
            },
            None => log::warn!("No game #{index}"),
        },
        Command::Reset => {
            session.reset_filters();
            render_view(&ctx.palette, session);
        }
        Command::Stats => render_stats(&ctx.palette, &session.stats()),
        Command::Theme(theme) => {
            ctx.settings.general.theme = theme;
            ctx.palette.set_theme(theme);
            match save_settings(&ctx.settings) {
                Ok(()) => log::info!("Theme set to {}", ctx.palette.accent(theme.name())),
                Err(e) => log::warn!("Theme set to {theme} for this session only: {e}"),
            }
        }
        Command::Help => {
            for (usage, what) in HELP {
                log::info!(
                    "  {} {}",
                    ctx.palette.title(&format!("{usage:<22}")),
                    ctx.palette.dim(what)
                );
            }
            log::info!("");
            log::info!("{}", ctx.palette.title("Sort orders:"));
            for order in SortOrder::all() {
                log::info!(
                    "  {} {}",
                    ctx.palette.accent(&format!("{:<22}", order.as_str())),
                    ctx.palette.dim(order.description())
                );
            }
        }
    }
}

/// Switch consoles. Re-selecting the console already shown just redraws it.
fn open_console(ctx: &AppContext, session: &mut Session, loader: &mut Loader, console: &str) {
    if matches!(session.load_state(), LoadState::Ready { console: current } if current == console) {
        render_view(&ctx.palette, session);
        return;
    }
    open_console_fresh(ctx, session, loader, console);
}

fn open_console_fresh(ctx: &AppContext, session: &mut Session, loader: &mut Loader, console: &str) {
    if let Err(e) = ctx.check_console(console) {
        log::warn!("{e}");
        return;
    }
    loader.start(session, console);
    render_view(&ctx.palette, session);
}

/// Report a finished load. Returns whether anything was printed.
fn on_load_event(ctx: &AppContext, session: &mut Session, event: &LoadEvent) -> bool {
    match event.outcome {
        LoadOutcome::Stale => {
            log::debug!("ignored late {} listing", event.console);
            false
        }
        LoadOutcome::Applied { .. } => {
            log::info!("");
            render_view(&ctx.palette, session);
            true
        }
        LoadOutcome::Failed => {
            log::info!("");
            render_view(&ctx.palette, session);
            let has_previous = matches!(session.view(), View::Failed { has_previous: true, .. });
            session.dismiss_failure();
            if has_previous {
                log::info!(
                    "{}",
                    ctx.palette.dim(&format!(
                        "Still showing {}.",
                        session.loaded_console().unwrap_or_default().to_uppercase()
                    ))
                );
                render_view(&ctx.palette, session);
            }
            true
        }
    }
}

fn show_home(ctx: &AppContext, session: &Session) {
    render_view(&ctx.palette, session);
    run_list(ctx);
}

fn current_console(session: &Session) -> Option<&str> {
    match session.load_state() {
        LoadState::Loading { console, .. }
        | LoadState::Ready { console }
        | LoadState::Failed { console, .. } => Some(console),
        LoadState::Idle => None,
    }
}

fn has_dataset(session: &Session) -> bool {
    matches!(session.load_state(), LoadState::Ready { .. })
}

/// Record `#index` (1-based) while a listing is on screen.
fn visible_record(session: &Session, index: usize) -> Option<&GameRecord> {
    if !has_dataset(session) {
        return None;
    }
    session.record_at(index.checked_sub(1)?)
}

fn prompt() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "romshelf> ")?;
    stdout.flush()
}

fn spawn_input_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
