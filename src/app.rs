use std::rc::Rc;
use std::time::{Duration, Instant};

use drillbox::config::Config;
use drillbox::content::{self, ContentSet};
use drillbox::literacy::chat::AiBuddy;
use drillbox::literacy::quiz::{AI_QUESTIONS, ChoiceQuiz};
use drillbox::session::result::SessionSummary;
use drillbox::session::{Item, Mode, Phase, SessionController};
use drillbox::store::Preferences;

use crate::ui::components::menu::{Menu, MenuItem};
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

const NAME_MAX_CHARS: usize = 24;
const ANSWER_MAX_CHARS: usize = 16;
const CHAT_MAX_CHARS: usize = 120;
const STATUS_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Welcome,
    Menu,
    Session,
    SessionResult,
    AiIntro,
    AiChat,
    AiQuiz,
    AiTools,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Content(usize),
    AiIntro,
    AiChat,
    AiQuiz,
    AiTools,
}

pub struct App {
    pub screen: AppScreen,
    pub config: Config,
    pub theme: &'static Theme,
    pub prefs: Rc<Preferences>,
    pub catalog: Vec<ContentSet>,
    pub entries: Vec<MenuEntry>,
    pub menu: Menu<'static>,
    pub menu_mode: Mode,
    pub session: SessionController,
    pub answer: LineInput,
    pub name_input: LineInput,
    pub chat_input: LineInput,
    pub buddy: AiBuddy,
    pub choice_quiz: ChoiceQuiz,
    pub choice_selected: usize,
    pub last_choice: Option<bool>,
    pub last_summary: Option<SessionSummary>,
    pub status: Option<String>,
    pub should_quit: bool,
    last_started: Option<(usize, Mode)>,
    status_until: Option<Instant>,
    feedback_until: Option<Instant>,
}

impl App {
    pub fn new(config: Config, theme: &'static Theme, prefs: Rc<Preferences>) -> Self {
        let catalog = content::catalog();
        let mut entries: Vec<MenuEntry> = (0..catalog.len()).map(MenuEntry::Content).collect();
        entries.extend([
            MenuEntry::AiIntro,
            MenuEntry::AiChat,
            MenuEntry::AiQuiz,
            MenuEntry::AiTools,
        ]);

        let name = prefs.player_name().unwrap_or_default();
        let menu_mode = config.mode();

        let mut app = Self {
            screen: AppScreen::Welcome,
            config,
            theme,
            prefs,
            catalog,
            entries,
            menu: Menu::new("drillbox", "Pick something to practice", Vec::new(), theme),
            menu_mode,
            session: SessionController::new(),
            answer: LineInput::new("", ANSWER_MAX_CHARS),
            name_input: LineInput::new(&name, NAME_MAX_CHARS),
            chat_input: LineInput::new("", CHAT_MAX_CHARS),
            buddy: AiBuddy::new(),
            choice_quiz: ChoiceQuiz::new(AI_QUESTIONS),
            choice_selected: 0,
            last_choice: None,
            last_summary: None,
            status: None,
            should_quit: false,
            last_started: None,
            status_until: None,
            feedback_until: None,
        };
        app.refresh_menu();
        app
    }

    pub fn player_name(&self) -> String {
        self.prefs
            .player_name()
            .unwrap_or_else(|| "friend".to_string())
    }

    /// Rebuilds menu rows so completion checkmarks follow the stored prefs.
    pub fn refresh_menu(&mut self) {
        let completed = self.prefs.completed_sets();
        self.menu.items = self
            .entries
            .iter()
            .map(|entry| match *entry {
                MenuEntry::Content(i) => {
                    let set = &self.catalog[i];
                    let learn_hint = if set.learnable {
                        "learn or quiz"
                    } else {
                        "quiz only"
                    };
                    MenuItem {
                        label: set.title.clone(),
                        description: format!("{} items, {learn_hint}", set.items.len()),
                        done: completed.iter().any(|k| *k == set.key),
                    }
                }
                MenuEntry::AiIntro => MenuItem {
                    label: "What is AI?".to_string(),
                    description: "How AI works, what it can do, and a robot coding example"
                        .to_string(),
                    done: false,
                },
                MenuEntry::AiChat => MenuItem {
                    label: "Chat with AIBuddy".to_string(),
                    description: "Ask about AI, coding, robots or games".to_string(),
                    done: false,
                },
                MenuEntry::AiQuiz => MenuItem {
                    label: "AI fun quiz".to_string(),
                    description: format!("{} multiple-choice questions", AI_QUESTIONS.len()),
                    done: false,
                },
                MenuEntry::AiTools => MenuItem {
                    label: "Meet the AI tools".to_string(),
                    description: "What different AI helpers are good at".to_string(),
                    done: false,
                },
            })
            .collect();
        if self.menu.selected >= self.menu.items.len() {
            self.menu.selected = 0;
        }
    }

    pub fn submit_name(&mut self) {
        let name = self.name_input.value().trim().to_string();
        if name.is_empty() {
            self.set_status("Type your name first");
            return;
        }
        if !self.prefs.set_player_name(&name) {
            self.set_status("Could not save your name, it is kept for this run");
        } else {
            self.clear_status();
        }
        self.screen = AppScreen::Menu;
    }

    pub fn toggle_menu_mode(&mut self) {
        self.menu_mode = match self.menu_mode {
            Mode::Learning => Mode::Quiz,
            Mode::Quiz => Mode::Learning,
        };
    }

    pub fn activate_menu(&mut self) {
        let Some(entry) = self.entries.get(self.menu.selected).copied() else {
            return;
        };
        self.clear_status();
        match entry {
            MenuEntry::Content(i) => self.start_session(i, self.menu_mode),
            MenuEntry::AiIntro => self.screen = AppScreen::AiIntro,
            MenuEntry::AiChat => self.screen = AppScreen::AiChat,
            MenuEntry::AiQuiz => {
                self.choice_quiz.reset();
                self.choice_selected = 0;
                self.last_choice = None;
                self.screen = AppScreen::AiQuiz;
            }
            MenuEntry::AiTools => self.screen = AppScreen::AiTools,
        }
    }

    pub fn start_session(&mut self, index: usize, mode: Mode) {
        let Some(set) = self.catalog.get(index).cloned() else {
            return;
        };
        let mode = if mode == Mode::Learning && !set.learnable {
            self.set_status(&format!("{} is quiz only", set.title));
            Mode::Quiz
        } else {
            mode
        };

        let mut session =
            SessionController::new().with_completion_sink(self.prefs.clone());
        match session.start(set.item_set(), mode) {
            Ok(()) => {
                self.session = session;
                self.last_started = Some((index, mode));
                self.last_summary = None;
                self.feedback_until = None;
                self.answer.clear();
                self.screen = AppScreen::Session;
            }
            Err(e) => {
                tracing::error!(set = %set.key, "could not start session: {e}");
                self.set_status(&e.to_string());
            }
        }
    }

    pub fn retry_session(&mut self) {
        if let Some((index, mode)) = self.last_started {
            self.start_session(index, mode);
        }
    }

    /// Shows a footer message until `STATUS_TTL` passes or the screen
    /// changes back to the menu.
    pub fn set_status(&mut self, message: &str) {
        self.status = Some(message.to_string());
        self.status_until = Some(Instant::now() + STATUS_TTL);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
        self.status_until = None;
    }

    pub fn feedback_active(&self) -> bool {
        self.feedback_until.is_some()
    }

    /// The item on screen. While feedback is showing this is the item that
    /// was just answered, even though the session has already moved on.
    pub fn visible_item(&self) -> Option<Item> {
        if self.feedback_active()
            && let Some(fb) = self.session.last_feedback()
        {
            return Some(Item::new(fb.display.clone(), fb.expected.clone()));
        }
        self.session.current_item().cloned()
    }

    pub fn submit_answer(&mut self) {
        if self.feedback_active() {
            return;
        }
        let text = self.answer.value().trim().to_string();
        if text.is_empty() {
            return;
        }
        match self.session.submit_answer(&text) {
            Ok(fb) => {
                let ms = if fb.correct {
                    self.config.feedback_correct_ms
                } else {
                    self.config.feedback_incorrect_ms
                };
                self.feedback_until = Some(Instant::now() + Duration::from_millis(ms));
                self.answer.clear();
            }
            Err(e) => {
                tracing::error!("answer rejected: {e}");
                self.set_status(&e.to_string());
            }
        }
    }

    pub fn study_next(&mut self) {
        if let Err(e) = self.session.next() {
            tracing::error!("{e}");
        }
    }

    pub fn study_previous(&mut self) {
        if let Err(e) = self.session.previous() {
            tracing::error!("{e}");
        }
    }

    /// Expires the feedback banner and, once a finished quiz has shown its
    /// last banner, moves to the result screen.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.status_until
            && now >= until
        {
            self.clear_status();
        }
        if let Some(until) = self.feedback_until
            && now >= until
        {
            self.feedback_until = None;
            if self.session.phase() == Phase::Complete {
                self.last_summary = self.session.summary();
                self.screen = AppScreen::SessionResult;
                self.refresh_menu();
            }
        }
    }

    pub fn leave_session(&mut self) {
        self.session.reset();
        self.feedback_until = None;
        self.answer.clear();
        self.go_to_menu();
    }

    pub fn go_to_menu(&mut self) {
        self.clear_status();
        self.refresh_menu();
        self.screen = AppScreen::Menu;
    }

    pub fn send_chat(&mut self) {
        let text = self.chat_input.value().to_string();
        if self.buddy.send(&text).is_some() {
            self.chat_input.clear();
        }
    }

    pub fn choose_option(&mut self, option: usize) {
        match self.choice_quiz.answer(option) {
            Ok(correct) => {
                self.last_choice = Some(correct);
                self.choice_selected = 0;
            }
            Err(e) => tracing::debug!("choice ignored: {e}"),
        }
    }

    pub fn restart_choice_quiz(&mut self) {
        self.choice_quiz.reset();
        self.choice_selected = 0;
        self.last_choice = None;
    }
}
