mod app;
mod event;
mod ui;

use std::fs::{self, OpenOptions};
use std::io;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tracing_subscriber::EnvFilter;

use drillbox::config::Config;
use drillbox::literacy::chat::{SUGGESTIONS, Speaker};
use drillbox::literacy::intro;
use drillbox::literacy::tools::AI_TOOLS;
use drillbox::session::Mode;
use drillbox::store::{JsonPrefStore, MemoryPrefStore, PreferenceStore, Preferences};

use app::{App, AppScreen};
use event::{AppEvent, EventHandler};
use ui::components::progress_bar::ProgressBar;
use ui::components::prompt_card::{CardBody, PromptCard};
use ui::layout::{AppLayout, pack_hint_lines};
use ui::line_input::{InputResult, LineInput};
use ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "drillbox",
    version,
    about = "Terminal drill trainer for kids: times tables, kana flashcards and an AI literacy corner"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Default drill mode (learn, quiz)")]
    mode: Option<String>,

    #[arg(long, help = "Directory for preferences and the log file")]
    data_dir: Option<String>,

    #[arg(long, help = "List bundled themes and exit")]
    list_themes: bool,

    #[arg(long, help = "Write the effective config file and exit")]
    write_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = Config::load().unwrap_or_else(|e| {
        eprintln!("Ignoring unreadable config: {e}");
        Config::default()
    });
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(mode) = cli.mode {
        if Mode::from_key(&mode).is_none() {
            anyhow::bail!("unknown mode '{mode}', expected learn or quiz");
        }
        config.default_mode = mode;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    config.validate();

    if cli.write_config {
        config.save()?;
        return Ok(());
    }

    init_logging(&config);
    tracing::info!(theme = %config.theme, mode = %config.default_mode, "starting drillbox");

    let store: Box<dyn PreferenceStore> =
        match JsonPrefStore::with_base_dir(config.data_path()) {
            Ok(store) => Box::new(store),
            Err(e) => {
                tracing::warn!("preferences unavailable, using memory only: {e}");
                Box::new(MemoryPrefStore::default())
            }
        };
    let prefs = Rc::new(Preferences::new(store));

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "unknown theme, using default");
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));

    let mut app = App::new(config, theme, prefs);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("{err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Logs go to a file in the data directory; the terminal belongs to the UI.
/// `RUST_LOG` overrides the configured level.
fn init_logging(config: &Config) {
    let dir = config.data_path();
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("drillbox.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }
        app.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Welcome => handle_welcome_key(app, key),
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::Session => handle_session_key(app, key),
        AppScreen::SessionResult => handle_result_key(app, key),
        AppScreen::AiChat => handle_chat_key(app, key),
        AppScreen::AiQuiz => handle_choice_quiz_key(app, key),
        AppScreen::AiIntro | AppScreen::AiTools => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
                app.go_to_menu();
            }
        }
    }
}

fn handle_welcome_key(app: &mut App, key: KeyEvent) {
    match app.name_input.handle(key) {
        InputResult::Submit => app.submit_name(),
        InputResult::Cancel => app.should_quit = true,
        InputResult::Continue => {}
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Tab => app.toggle_menu_mode(),
        KeyCode::Char('n') => {
            app.clear_status();
            app.screen = AppScreen::Welcome;
        }
        KeyCode::Enter => app.activate_menu(),
        _ => {}
    }
}

fn handle_session_key(app: &mut App, key: KeyEvent) {
    match app.session.mode() {
        Some(Mode::Learning) => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.leave_session(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
                app.study_next()
            }
            KeyCode::Left | KeyCode::Char('h') => app.study_previous(),
            _ => {}
        },
        Some(Mode::Quiz) => match app.answer.handle(key) {
            InputResult::Submit => app.submit_answer(),
            InputResult::Cancel => app.leave_session(),
            InputResult::Continue => {}
        },
        None => app.go_to_menu(),
    }
}

fn handle_result_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.retry_session(),
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => app.leave_session(),
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match app.chat_input.handle(key) {
        InputResult::Submit => app.send_chat(),
        InputResult::Cancel => app.go_to_menu(),
        InputResult::Continue => {}
    }
}

fn handle_choice_quiz_key(app: &mut App, key: KeyEvent) {
    if app.choice_quiz.is_finished() {
        match key.code {
            KeyCode::Char('r') => app.restart_choice_quiz(),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.go_to_menu(),
            _ => {}
        }
        return;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_to_menu(),
        KeyCode::Up | KeyCode::Char('k') => {
            app.choice_selected = app.choice_selected.checked_sub(1).unwrap_or(3);
        }
        KeyCode::Down | KeyCode::Char('j') => app.choice_selected = (app.choice_selected + 1) % 4,
        KeyCode::Char(c @ '1'..='4') => app.choose_option(c as usize - '1' as usize),
        KeyCode::Enter => app.choose_option(app.choice_selected),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Welcome => render_welcome(frame, app),
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::Session => render_session(frame, app),
        AppScreen::SessionResult => render_result(frame, app),
        AppScreen::AiIntro => render_intro(frame, app),
        AppScreen::AiChat => render_chat(frame, app),
        AppScreen::AiQuiz => render_choice_quiz(frame, app),
        AppScreen::AiTools => render_tools(frame, app),
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, info: &str) {
    let colors = &app.theme.colors;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " drillbox ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {info}"),
            Style::default()
                .fg(colors.text_pending())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, hints: &[&str]) {
    let colors = &app.theme.colors;
    let mut lines: Vec<Line> = Vec::new();
    if let Some(ref status) = app.status {
        lines.push(Line::from(Span::styled(
            format!("  {status}"),
            Style::default().fg(colors.error()),
        )));
    } else {
        lines.extend(
            pack_hint_lines(hints, area.width as usize)
                .into_iter()
                .take(1)
                .map(|l| Line::from(Span::styled(l, Style::default().fg(colors.text_pending())))),
        );
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_welcome(frame: &mut ratatui::Frame, app: &App) {
    let area = ui::layout::centered_rect(50, 40, frame.area());
    let colors = &app.theme.colors;

    let block = Block::bordered()
        .title(" Welcome ")
        .border_style(Style::default().fg(colors.border()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to drillbox!",
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("What's your name?", Style::default().fg(colors.fg()))),
        render_input_line(app, &app.name_input),
        Line::from(""),
    ];
    if let Some(ref status) = app.status {
        lines.push(Line::from(Span::styled(
            status.as_str(),
            Style::default().fg(colors.error()),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "[Enter] Continue  [Esc] Quit",
            Style::default().fg(colors.text_pending()),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    let mode_label = match app.menu_mode {
        Mode::Learning => "Learn",
        Mode::Quiz => "Quiz",
    };
    let done = app.prefs.completed_sets().len();
    render_header(
        frame,
        app,
        layout.header,
        &format!(
            "Hi {}! | Mode: {mode_label} | {done}/{} sets completed",
            app.player_name(),
            app.catalog.len()
        ),
    );

    let menu_area = ui::layout::centered_rect(60, 90, layout.main);
    frame.render_widget(&app.menu, menu_area);

    render_footer(
        frame,
        app,
        layout.footer,
        &[
            "[Up/Down] Select",
            "[Enter] Start",
            "[Tab] Learn/Quiz",
            "[n] Change name",
            "[q] Quit",
        ],
    );
}

fn render_session(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let Some(set) = app.session.set() else {
        return;
    };
    let mode = app.session.mode().unwrap_or(Mode::Quiz);

    let info = match mode {
        Mode::Learning => format!(
            "{} | Learn | card {}/{}",
            set.title,
            app.session.cursor().map_or(0, |c| c + 1),
            set.len()
        ),
        Mode::Quiz => format!(
            "{} | Quiz | {} to go",
            set.title,
            app.session.remaining()
        ),
    };
    render_header(frame, app, layout.header, &info);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(layout.main);

    if mode == Mode::Quiz {
        let bar = ProgressBar::new(
            "Progress",
            app.session.progress(),
            format!(
                "{}/{} mastered",
                app.session.mastered_count(),
                app.session.total_unique()
            ),
            app.theme,
        );
        frame.render_widget(bar, body[0]);
    }

    if let Some(item) = app.visible_item() {
        let card_body = match mode {
            Mode::Learning => CardBody::Study,
            Mode::Quiz => CardBody::Quiz {
                input: &app.answer,
                feedback: app
                    .session
                    .last_feedback()
                    .filter(|_| app.feedback_active()),
            },
        };
        let card = PromptCard {
            title: &set.title,
            item: &item,
            body: card_body,
            theme: app.theme,
        };
        frame.render_widget(card, ui::layout::centered_rect(50, 80, body[1]));
    }

    let hints: &[&str] = match mode {
        Mode::Learning => &["[Left/Right] Previous/Next", "[Esc] Back to menu"],
        Mode::Quiz => &["Type the reading", "[Enter] Check", "[Esc] Back to menu"],
    };
    render_footer(frame, app, layout.footer, hints);
}

fn render_result(frame: &mut ratatui::Frame, app: &App) {
    let area = ui::layout::centered_rect(50, 60, frame.area());
    let colors = &app.theme.colors;
    let Some(ref summary) = app.last_summary else {
        return;
    };

    let block = Block::bordered()
        .title(" Complete ")
        .border_style(Style::default().fg(colors.border()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stat = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:>10}: "), Style::default().fg(colors.fg())),
            Span::styled(value, Style::default().fg(colors.accent())),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Great job, {}!", app.player_name()),
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("You finished {}", summary.title),
            Style::default().fg(colors.fg()),
        )),
        Line::from(""),
        stat("Mastered", format!("{}/{}", summary.mastered, summary.total_unique)),
        stat("Answers", summary.attempts.to_string()),
        stat("Mistakes", summary.mistakes.to_string()),
        stat("Accuracy", format!("{:.0}%", summary.accuracy)),
        stat("Time", format!("{:.0}s", summary.elapsed_secs)),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Play again  [Enter] Menu",
            Style::default().fg(colors.text_pending()),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_input_line<'a>(app: &App, input: &'a LineInput) -> Line<'a> {
    let colors = &app.theme.colors;
    let (before, at, after) = input.render_parts();
    Line::from(vec![
        Span::styled("> ", Style::default().fg(colors.text_pending())),
        Span::styled(before, Style::default().fg(colors.fg())),
        Span::styled(
            at.map_or_else(|| " ".to_string(), |c| c.to_string()),
            Style::default().fg(colors.bg()).bg(colors.fg()),
        ),
        Span::styled(after, Style::default().fg(colors.fg())),
    ])
}

fn render_intro(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let colors = &app.theme.colors;
    render_header(frame, app, layout.header, "AI corner | What is AI?");

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        ))
    };
    let body = Style::default().fg(colors.fg());
    let muted = Style::default().fg(colors.text_pending());

    let mut lines = vec![heading("What is AI?")];
    lines.extend(intro::WHAT_IS_AI.iter().map(|p| Line::from(Span::styled(*p, body))));
    lines.push(Line::from(""));

    lines.push(heading("What Can AI Do?"));
    for ability in intro::ABILITIES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", ability.title), body.add_modifier(Modifier::BOLD)),
            Span::styled(ability.description, body),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading("How AI Works - The Simple Version"));
    for (i, (step, text)) in intro::HOW_IT_WORKS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}. {step}: ", i + 1), body.add_modifier(Modifier::BOLD)),
            Span::styled(*text, body),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(heading(intro::CODING_EXAMPLE_TITLE));
    lines.extend(
        intro::CODING_EXAMPLE
            .iter()
            .map(|code| Line::from(Span::styled(format!("    {code}"), muted))),
    );
    lines.push(Line::from(Span::styled(intro::CODING_EXAMPLE_NOTE, body)));
    lines.push(Line::from(""));

    lines.push(heading("AI Learning Tips"));
    lines.extend(
        intro::LEARNING_TIPS
            .iter()
            .map(|tip| Line::from(Span::styled(format!("  * {tip}"), body))),
    );

    let block = Block::bordered()
        .title(" What is AI? ")
        .border_style(Style::default().fg(colors.border()));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        ui::layout::centered_rect(80, 95, layout.main),
    );

    render_footer(frame, app, layout.footer, &["[Esc] Back to menu"]);
}

fn render_chat(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let colors = &app.theme.colors;
    render_header(frame, app, layout.header, "AI corner | Chat");

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(layout.main);

    let transcript: Vec<Line> = app
        .buddy
        .transcript()
        .iter()
        .map(|line| {
            let color = match line.speaker {
                Speaker::Player => colors.fg(),
                Speaker::Buddy => colors.accent(),
            };
            Line::from(Span::styled(line.label(), Style::default().fg(color)))
        })
        .collect();
    let visible = split[0].height.saturating_sub(2) as usize;
    let skip = transcript.len().saturating_sub(visible);
    let block = Block::bordered()
        .title(" AIBuddy ")
        .border_style(Style::default().fg(colors.border()));
    frame.render_widget(
        Paragraph::new(transcript.into_iter().skip(skip).collect::<Vec<_>>())
            .block(block)
            .wrap(Wrap { trim: false }),
        split[0],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" Try asking: {}", SUGGESTIONS.join("  ")),
            Style::default().fg(colors.text_pending()),
        )),
        split[1],
    );

    let input_block = Block::bordered()
        .title(" Ask something ")
        .border_style(Style::default().fg(colors.border()));
    frame.render_widget(
        Paragraph::new(render_input_line(app, &app.chat_input)).block(input_block),
        split[2],
    );

    render_footer(frame, app, layout.footer, &["[Enter] Send", "[Esc] Back to menu"]);
}

fn render_choice_quiz(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let colors = &app.theme.colors;
    let quiz = &app.choice_quiz;
    render_header(
        frame,
        app,
        layout.header,
        &format!("AI corner | Quiz | score {}/{}", quiz.score(), quiz.total()),
    );

    let area = ui::layout::centered_rect(60, 70, layout.main);
    let block = Block::bordered()
        .title(" AI fun quiz ")
        .border_style(Style::default().fg(colors.border()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    if let Some(question) = quiz.current() {
        lines.push(Line::from(Span::styled(
            format!(
                "Question {}/{}: {}",
                quiz.question_number(),
                quiz.total(),
                question.prompt
            ),
            Style::default().fg(colors.fg()).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for (i, option) in question.options.iter().enumerate() {
            let selected = i == app.choice_selected;
            let style = if selected {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.fg())
            };
            let marker = if selected { ">" } else { " " };
            lines.push(Line::from(Span::styled(
                format!("{marker} {}. {option}", i + 1),
                style,
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            format!(
                "All done! You got {} out of {} right.",
                quiz.score(),
                quiz.total()
            ),
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    match app.last_choice {
        Some(true) => lines.push(Line::from(Span::styled(
            "Correct!",
            Style::default().fg(colors.success()),
        ))),
        Some(false) => lines.push(Line::from(Span::styled(
            "Not quite, keep going!",
            Style::default().fg(colors.error()),
        ))),
        None => {}
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    let hints: &[&str] = if quiz.is_finished() {
        &["[r] Try again", "[Enter] Back to menu"]
    } else {
        &["[1-4] Answer", "[Up/Down] Select", "[Enter] Answer", "[Esc] Back"]
    };
    render_footer(frame, app, layout.footer, hints);
}

fn render_tools(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let colors = &app.theme.colors;
    render_header(frame, app, layout.header, "AI corner | Tools");

    let mut lines: Vec<Line> = Vec::new();
    for tool in AI_TOOLS {
        lines.push(Line::from(Span::styled(
            tool.name,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            tool.description,
            Style::default().fg(colors.fg()),
        )));
        lines.push(Line::from(Span::styled(
            format!("Good at: {}", tool.strengths.join(", ")),
            Style::default().fg(colors.text_pending()),
        )));
        lines.push(Line::from(""));
    }
    let block = Block::bordered()
        .title(" Meet the AI tools ")
        .border_style(Style::default().fg(colors.border()));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        ui::layout::centered_rect(70, 90, layout.main),
    );

    render_footer(frame, app, layout.footer, &["[Esc] Back to menu"]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillbox::session::Phase;

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["drillbox", "--mode", "learn", "--theme", "sunny-classroom"]);
        assert_eq!(cli.mode.as_deref(), Some("learn"));
        assert_eq!(cli.theme.as_deref(), Some("sunny-classroom"));
        assert!(!cli.list_themes);
    }

    #[test]
    fn session_phase_unaffected_by_release_events() {
        let theme: &'static Theme = Box::leak(Box::new(Theme::default()));
        let prefs = Rc::new(Preferences::new(Box::new(MemoryPrefStore::default())));
        let mut app = App::new(Config::default(), theme, prefs);
        app.start_session(0, Mode::Quiz);

        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.session.phase(), Phase::Active);

        handle_key(&mut app, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.session.phase(), Phase::Welcome);
        assert_eq!(app.screen, AppScreen::Menu);
    }
}
