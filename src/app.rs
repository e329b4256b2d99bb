use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::{Config, UserProfile};
use crate::core::{parse_command, Action, Command, Context, Module, NotifyLevel};
use crate::domain::{CategoryFilter, Location, LocationId};
use crate::modules::locations::LocationList;
use crate::modules::sidebar::Sidebar;
use crate::nav::route;
use crate::store::{LocationStore, StoreEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
}

/// Entries of the footer user menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuItem {
    Settings,
    LogOut,
}

impl UserMenuItem {
    pub const ALL: [UserMenuItem; 2] = [UserMenuItem::Settings, UserMenuItem::LogOut];

    pub fn title(&self) -> &'static str {
        match self {
            UserMenuItem::Settings => "Settings",
            UserMenuItem::LogOut => "Log out",
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug)]
pub struct App {
    pub store: LocationStore,
    /// Derived view state shared with modules
    pub ctx: Context,
    pub sidebar: Sidebar,
    pub list: LocationList,
    pub focus: Focus,
    pub input_mode: InputMode,
    pub command: CommandBar,
    pub user: UserProfile,
    pub config_path: Option<PathBuf>,
    /// Where the store was seeded from, for the settings popup
    pub data_source: String,
    pub status: Option<StatusMessage>,
    /// Cursor into [`UserMenuItem::ALL`] while the user menu is open
    pub user_menu: Option<usize>,
    pub settings_open: bool,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: LocationStore, config: &Config) -> Self {
        let ctx = Context::new(&config.start_route, &store.snapshot());
        Self {
            store,
            ctx,
            sidebar: Sidebar::new(),
            list: LocationList::new(),
            focus: Focus::Sidebar,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            user: config.user.clone(),
            config_path: None,
            data_source: "built-in demo data".to_string(),
            status: None,
            user_menu: None,
            settings_open: false,
            help_open: false,
            should_quit: false,
        }
    }

    /// Apply queued store changes and rebuild derived state if needed
    pub fn sync_context(&mut self) {
        for event in self.store.take_changes() {
            if let Some(text) = self.describe_change(&event) {
                self.set_status(text, NotifyLevel::Info);
            }
        }
        let snapshot = self.store.snapshot();
        if self.ctx.refresh(&snapshot) {
            self.sidebar.clamp(&self.ctx);
            self.list.clamp(&self.ctx);
        }
    }

    pub fn route(&self) -> &str {
        self.ctx.route()
    }

    pub fn selected_location(&self) -> Option<&Location> {
        self.list
            .selected_id(&self.ctx)
            .and_then(|id| self.store.snapshot().location(id))
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
        self.sync_context();
    }

    pub fn focus_label(&self) -> &'static str {
        match self.focus {
            Focus::Sidebar => "Sidebar",
            Focus::List => "List",
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::List,
            Focus::List => Focus::Sidebar,
        };
    }

    // === Input ===

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.help_open {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.help_open = false;
            }
            return;
        }

        if self.settings_open {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('s')) {
                self.settings_open = false;
            }
            return;
        }

        if self.user_menu.is_some() {
            self.handle_user_menu(key);
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_mode(key),
            InputMode::Command => self.handle_command_mode(key),
        }
    }

    fn handle_normal_mode(&mut self, key: KeyEvent) {
        let action = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('q'), _) => Action::Quit,
            (KeyCode::Char('?'), _) => {
                self.help_open = true;
                Action::None
            }
            (KeyCode::Char(':'), _) => Action::OpenCommand,
            (KeyCode::Char('s'), _) => {
                self.settings_open = true;
                Action::None
            }
            (KeyCode::Char('u'), _) => {
                self.user_menu = Some(0);
                Action::None
            }
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => {
                self.cycle_focus();
                Action::None
            }
            (KeyCode::Char('h'), _) | (KeyCode::Left, _) => {
                self.focus = Focus::Sidebar;
                Action::None
            }
            (KeyCode::Char('l'), _) | (KeyCode::Right, _) => {
                self.focus = Focus::List;
                Action::None
            }
            (KeyCode::Char('1'), _) => Action::Navigate(route::ALL.to_string()),
            (KeyCode::Char('2'), _) => Action::Navigate(route::FAVORITES.to_string()),
            (KeyCode::Char('3'), _) => Action::Navigate(route::RECENTS.to_string()),
            (KeyCode::Char('a'), _) => Action::SelectCategory(CategoryFilter::All),
            (KeyCode::Backspace, _) | (KeyCode::Esc, _) => Action::Back,
            _ => match self.focus {
                Focus::Sidebar => self.sidebar.handle_key(key, &self.ctx),
                Focus::List => self.list.handle_key(key, &self.ctx),
            },
        };
        self.apply_action(action);
    }

    fn handle_command_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.exit_command(),
            KeyCode::Enter => self.apply_command(),
            KeyCode::Backspace => {
                if self.command.input.pop().is_none() {
                    self.exit_command();
                }
            }
            KeyCode::Up => {
                if let Some(last) = self.command.last.clone() {
                    self.command.input = last;
                }
            }
            KeyCode::Char(c) => self.command.input.push(c),
            _ => {}
        }
    }

    fn handle_user_menu(&mut self, key: KeyEvent) {
        let Some(index) = self.user_menu else {
            return;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Char('u') => self.user_menu = None,
            KeyCode::Down | KeyCode::Char('j') => {
                self.user_menu = Some((index + 1).min(UserMenuItem::ALL.len() - 1));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.user_menu = Some(index.saturating_sub(1));
            }
            KeyCode::Enter => {
                self.user_menu = None;
                match UserMenuItem::ALL[index] {
                    UserMenuItem::Settings => self.settings_open = true,
                    UserMenuItem::LogOut => {
                        log::info!("{} logged out", self.user.name);
                        self.should_quit = true;
                    }
                }
            }
            _ => {}
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self) {
        let input = self.command.input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }
        self.command.last = Some(input.clone());
        let command = parse_command(&input);
        let action = self.execute_command(&command);
        self.apply_action(action);
    }

    pub fn execute_command(&self, cmd: &Command) -> Action {
        match cmd {
            Command::Go(path) => Action::Navigate(path.clone()),
            Command::All => Action::Navigate(route::ALL.to_string()),
            Command::Favorites => Action::Navigate(route::FAVORITES.to_string()),
            Command::Recents => Action::Navigate(route::RECENTS.to_string()),
            Command::Back => Action::Back,
            Command::Category(id) => Action::SelectCategory(CategoryFilter::parse(id)),
            Command::Favorite(id) => Action::ToggleFavorite(LocationId::new(id.as_str())),
            Command::View(id) => Action::Open(LocationId::new(id.as_str())),
            Command::Help => Action::Notify(
                "Commands: go <path>, all, favs, recents, back, cat <id>, fav <id>, open <id>, quit"
                    .to_string(),
                NotifyLevel::Info,
            ),
            Command::Quit => Action::Quit,
            Command::Unknown(input) => {
                Action::Notify(format!("Unknown command: {input}"), NotifyLevel::Warn)
            }
        }
    }

    // === Actions ===

    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::None => return,
            Action::Navigate(path) => {
                if self.ctx.routes.push(path.as_str()) {
                    log::debug!("navigate -> {path}");
                    self.list.go_to_top();
                }
            }
            Action::Back => {
                if self.ctx.routes.go_back().is_some() {
                    self.list.go_to_top();
                }
            }
            Action::SelectCategory(filter) => {
                if !self.store.set_selected_category(filter.clone()) {
                    self.set_status(format!("Unknown category: {filter}"), NotifyLevel::Warn);
                } else {
                    self.list.go_to_top();
                }
            }
            Action::ToggleFavorite(id) => {
                if let Err(err) = self.store.toggle_favorite(&id) {
                    log::warn!("toggle favorite failed: {err}");
                    self.set_status(err.to_string(), NotifyLevel::Error);
                }
            }
            Action::Open(id) => {
                if let Err(err) = self.store.mark_viewed(&id, Utc::now()) {
                    log::warn!("open failed: {err}");
                    self.set_status(err.to_string(), NotifyLevel::Error);
                }
            }
            Action::Notify(text, level) => self.set_status(text, level),
            Action::OpenCommand => self.enter_command(),
            Action::Quit => self.should_quit = true,
        }
        self.sync_context();
    }

    fn describe_change(&self, event: &StoreEvent) -> Option<String> {
        let snapshot = self.store.snapshot();
        match event {
            StoreEvent::SelectionChanged(CategoryFilter::All) => {
                Some("Showing all categories".to_string())
            }
            StoreEvent::SelectionChanged(CategoryFilter::Category(id)) => snapshot
                .category(id)
                .map(|category| format!("Filtered to {}", category.name)),
            StoreEvent::FavoriteToggled { id, is_favorite } => {
                let name = snapshot
                    .location(id)
                    .map(|location| location.name.as_str())
                    .unwrap_or(id.as_str());
                if *is_favorite {
                    Some(format!("Added {name} to favorites"))
                } else {
                    Some(format!("Removed {name} from favorites"))
                }
            }
            StoreEvent::Viewed(id) => snapshot
                .location(id)
                .map(|location| format!("Opened {}", location.name)),
        }
    }
}
