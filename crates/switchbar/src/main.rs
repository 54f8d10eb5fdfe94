//! switchbar - terminal demo of the segmented tab-switch bar
//!
//! Shows a bar of fleets with an eye toggle in front of each title and
//! echoes the bound selection below it.

use std::cell::RefCell;
use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use switchbar_core::{Selection, StyleConfig, Theme};
use switchbar_ui::{SwitchTabsBar, SwitchTabsState};
use tracing_subscriber::EnvFilter;

/// Poll interval while the indicator is moving
const FRAME: Duration = Duration::from_millis(16);
/// Poll interval otherwise
const IDLE: Duration = Duration::from_millis(100);

/// Interactive demo of the switchbar segmented tab bar
#[derive(Parser, Debug)]
#[command(name = "switchbar")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Segment titles
    #[arg(default_values = ["Fleet A", "Fleet B"])]
    titles: Vec<String>,

    /// Initially selected segment
    #[arg(short, long, default_value_t = 0)]
    selected: usize,

    /// Built-in palette (dark, light, nord)
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Style file; defaults to <config dir>/switchbar/style.toml when present
    #[arg(long)]
    style: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(&cli)?;

    let theme = Theme::by_name(&cli.theme).ok_or_else(|| eyre!("unknown theme: {}", cli.theme))?;
    let style = load_style(&cli, &theme)?;
    tracing::info!(theme = %theme.name, segments = cli.titles.len(), "starting");

    enable_raw_mode()?;
    let result = run_terminal(&cli, style, &theme);

    // Restore terminal, also when setup stopped half way
    disable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, Show)?;

    result
}

fn run_terminal(cli: &Cli, style: StyleConfig, theme: &Theme) -> Result<()> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, cli, style, theme)
}

/// Logs go to a file because the terminal is in raw mode; without `--log`
/// nothing is recorded.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log else {
        return Ok(());
    };
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("switchbar={level}").parse()?)
        .add_directive(format!("switchbar_ui={level}").parse()?)
        .add_directive(format!("switchbar_core={level}").parse()?);

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn load_style(cli: &Cli, theme: &Theme) -> Result<StyleConfig> {
    let path = cli
        .style
        .clone()
        .or_else(|| StyleConfig::default_path().filter(|path| path.exists()));
    match path {
        Some(path) => StyleConfig::load(&path)
            .wrap_err_with(|| format!("failed to load style from {}", path.display())),
        None => Ok(StyleConfig::themed(theme)),
    }
}

fn run_app<B>(
    terminal: &mut Terminal<B>,
    cli: &Cli,
    style: StyleConfig,
    theme: &Theme,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    let selection = Selection::new(cli.selected);
    let mut changes = selection.subscribe();
    let mut writes = 0usize;

    let eyes = Rc::new(RefCell::new(vec![true; cli.titles.len()]));
    let shown = Rc::clone(&eyes);
    let toggled = Rc::clone(&eyes);

    let bar = SwitchTabsBar::new(cli.titles.iter().cloned(), selection.clone())
        .style(style)
        .leading(move |index| {
            if shown.borrow().get(index).copied().unwrap_or(true) {
                "◉"
            } else {
                "◌"
            }
        })
        .on_leading_tap(move |index| {
            if let Some(eye) = toggled.borrow_mut().get_mut(index) {
                *eye = !*eye;
            }
        });
    let mut state = SwitchTabsState::new();

    loop {
        terminal.draw(|frame| {
            let [bar_area, body_area, status_area] = Layout::vertical([
                Constraint::Length(bar.required_height()),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(frame.area());

            frame.render_stateful_widget(&bar, bar_area, &mut state);
            frame.render_widget(
                body(&cli.titles, &selection, &eyes.borrow(), theme),
                body_area,
            );
            frame.render_widget(status(writes, theme), status_area);
        })?;

        let timeout = if state.is_animating(Instant::now()) {
            FRAME
        } else {
            IDLE
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match (key.modifiers, key.code) {
                        (KeyModifiers::CONTROL, KeyCode::Char('c'))
                        | (_, KeyCode::Char('q') | KeyCode::Esc) => break,
                        _ => {
                            bar.handle_key(key);
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    bar.handle_mouse(state.last_area(), mouse);
                }
                _ => {}
            }
        }

        while let Ok(index) = changes.try_recv() {
            writes += 1;
            tracing::info!(index, writes, "selection changed");
        }
    }

    Ok(())
}

fn body(
    titles: &[String],
    selection: &Selection,
    eyes: &[bool],
    theme: &Theme,
) -> Paragraph<'static> {
    let current = selection.get();
    let name = titles.get(current).map_or("none", String::as_str);
    let muted = Style::default().fg(theme.colors.muted);
    let mut lines = vec![
        Line::from(""),
        Line::from(format!("Current selection: {current} ({name})"))
            .style(Style::default().fg(theme.colors.foreground)),
        Line::from(""),
    ];
    for (title, visible) in titles.iter().zip(eyes) {
        let state = if *visible { "visible" } else { "hidden" };
        lines.push(Line::from(format!("  {title}: {state}")).style(muted));
    }
    Paragraph::new(lines).style(Style::default().bg(theme.colors.background))
}

fn status(writes: usize, theme: &Theme) -> Line<'static> {
    let hint = format!(" ←/→ switch  click: select  ◉: toggle  q: quit  writes: {writes}");
    let style = Style::default()
        .fg(theme.colors.muted)
        .bg(theme.colors.background);
    Line::from(hint).style(style)
}
