//! Screen controller: owns all UI state and the event loop.
//!
//! Everything runs on one thread. The splash transition and notice expiry
//! are deadline checks on the loop tick; permission prompts are modal
//! overlays whose resolution arrives as a later key event, which is how the
//! asynchronous permission flow resumes on the single UI queue.

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::actions::ActionDispatcher;
use crate::config::Config;
use crate::loader::ContactLoader;
use crate::models::Contact;
use crate::permissions::{Permission, PermissionGate, RequestOutcome};
use crate::search::filter_contacts;
use crate::ui::binder::ContactListBinder;
use crate::ui::draw;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

const PERMISSION_DENIED_NOTICE: &str = "Permission denied";
const CALL_PERMISSION_GRANTED_NOTICE: &str = "Permission granted for calls";
const CALL_PERMISSION_DENIED_NOTICE: &str = "Call permission denied";

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Browser,
}

/// Modal state drawn over the browser. Overlays consume all key input
/// until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    None,
    /// Grant-or-deny prompt for one permission flow
    PermissionPrompt(Permission),
    /// Call/message menu for the selected entry
    Actions { contact: Contact },
}

/// A transient status-line message. Unlike overlays it does not consume
/// input; it just times out.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub until: Instant,
}

/// The contacts browser.
pub struct App {
    loader: ContactLoader,
    dispatcher: ActionDispatcher,
    gate: PermissionGate,

    /// Full loaded sequence; the binder holds the filtered view of it
    pub contacts: Vec<Contact>,
    pub binder: ContactListBinder,
    pub search_input: Input,
    pub selected: usize,

    pub screen: Screen,
    pub overlay: Overlay,
    pub notice: Option<Notice>,

    splash_until: Instant,
    notice_duration: Duration,
}

impl App {
    /// Create the app on the splash screen. Nothing is loaded until the
    /// splash deadline passes and the read-contacts flow resolves.
    pub fn new(config: &Config, loader: ContactLoader, dispatcher: ActionDispatcher) -> Self {
        Self {
            loader,
            dispatcher,
            gate: PermissionGate::new(),
            contacts: Vec::new(),
            binder: ContactListBinder::new(),
            search_input: Input::default(),
            selected: 0,
            screen: Screen::Splash,
            overlay: Overlay::None,
            notice: None,
            splash_until: Instant::now() + config.splash_duration,
            notice_duration: config.notice_duration,
        }
    }

    /// Take over the terminal and run until the user quits.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        terminal.backend_mut().execute(LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        B: ratatui::backend::Backend,
    {
        loop {
            self.on_tick(Instant::now());
            draw::render(terminal, self)?;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            break;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Advance deadline-driven state to `now`.
    pub fn on_tick(&mut self, now: Instant) {
        if self.screen == Screen::Splash && now >= self.splash_until {
            self.screen = Screen::Browser;
            tracing::info!("splash finished, entering browser");
            self.enter_browser();
        }

        if let Some(notice) = &self.notice {
            if now >= notice.until {
                self.notice = None;
            }
        }
    }

    /// Process one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return true;
        }

        match self.screen {
            // The splash runs its full delay; input is not a shortcut.
            Screen::Splash => false,
            Screen::Browser => match self.overlay.clone() {
                Overlay::PermissionPrompt(permission) => {
                    self.handle_prompt_key(permission, key);
                    false
                }
                Overlay::Actions { contact } => {
                    self.handle_actions_key(&contact, key);
                    false
                }
                Overlay::None => self.handle_browser_key(key),
            },
        }
    }

    fn handle_browser_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                if self.search_input.value().is_empty() {
                    return true;
                }
                self.search_input.reset();
                self.apply_filter();
                false
            }
            KeyCode::Enter => {
                self.open_actions();
                false
            }
            KeyCode::Down => {
                self.move_selection(1);
                false
            }
            KeyCode::Up => {
                self.move_selection(-1);
                false
            }
            KeyCode::PageDown => {
                self.move_selection(5);
                false
            }
            KeyCode::PageUp => {
                self.move_selection(-5);
                false
            }
            _ => {
                // Everything else belongs to the search field; each edit
                // refilters synchronously.
                if let Some(change) = self.search_input.handle_event(&Event::Key(key)) {
                    if change.value {
                        self.apply_filter();
                    }
                }
                false
            }
        }
    }

    fn handle_prompt_key(&mut self, permission: Permission, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.overlay = Overlay::None;
                self.complete_permission(permission, true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.overlay = Overlay::None;
                self.complete_permission(permission, false);
            }
            _ => {}
        }
    }

    fn handle_actions_key(&mut self, contact: &Contact, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.overlay = Overlay::None;
                self.attempt_call(contact);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.overlay = Overlay::None;
                self.send_message(contact);
            }
            KeyCode::Esc => {
                self.overlay = Overlay::None;
            }
            _ => {}
        }
    }

    /// First entry into the browser screen: resolve the read-contacts flow.
    fn enter_browser(&mut self) {
        match self.gate.request(Permission::ReadContacts) {
            RequestOutcome::Prompt => {
                self.overlay = Overlay::PermissionPrompt(Permission::ReadContacts);
            }
            RequestOutcome::AlreadyGranted => self.load_contacts(),
            RequestOutcome::AlreadyDenied => self.show_notice(PERMISSION_DENIED_NOTICE),
            RequestOutcome::InFlight => {}
        }
    }

    /// Apply a resolved permission prompt.
    fn complete_permission(&mut self, permission: Permission, granted: bool) {
        self.gate.complete(permission, granted);
        match (permission, granted) {
            (Permission::ReadContacts, true) => self.load_contacts(),
            (Permission::ReadContacts, false) => self.show_notice(PERMISSION_DENIED_NOTICE),
            // Granting calls does not retry the call that triggered the
            // prompt; the user triggers it again.
            (Permission::CallPhone, true) => self.show_notice(CALL_PERMISSION_GRANTED_NOTICE),
            (Permission::CallPhone, false) => self.show_notice(CALL_PERMISSION_DENIED_NOTICE),
        }
    }

    fn load_contacts(&mut self) {
        self.contacts = self.loader.load();
        self.apply_filter();
    }

    /// Refilter the full sequence into the binder and keep the selection
    /// in range.
    fn apply_filter(&mut self) {
        let filtered = filter_contacts(&self.contacts, self.search_input.value());
        self.binder.replace(filtered);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.binder.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.binder.count() {
            self.selected = self.binder.count() - 1;
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.binder.is_empty() {
            return;
        }
        let len = self.binder.count() as isize;
        let mut index = self.selected as isize + delta;
        if index < 0 {
            index = 0;
        } else if index >= len {
            index = len - 1;
        }
        self.selected = index as usize;
    }

    fn open_actions(&mut self) {
        if let Some(contact) = self.binder.get(self.selected).cloned() {
            self.overlay = Overlay::Actions { contact };
        }
    }

    /// Call the selected entry, resolving the call-phone flow first.
    fn attempt_call(&mut self, contact: &Contact) {
        match self.gate.request(Permission::CallPhone) {
            RequestOutcome::Prompt => {
                self.overlay = Overlay::PermissionPrompt(Permission::CallPhone);
            }
            RequestOutcome::AlreadyGranted => {
                self.dispatcher.call(&contact.phone_number);
                self.show_notice(format!("Calling {}", contact.phone_number));
            }
            RequestOutcome::AlreadyDenied => self.show_notice(CALL_PERMISSION_DENIED_NOTICE),
            RequestOutcome::InFlight => {}
        }
    }

    /// Open the SMS composer for the selected entry. Messaging needs no
    /// runtime permission.
    fn send_message(&mut self, contact: &Contact) {
        self.dispatcher.message(&contact.phone_number);
        self.show_notice(format!("Messaging {}", contact.phone_number));
    }

    fn show_notice<S: Into<String>>(&mut self, message: S) {
        self.notice = Some(Notice {
            message: message.into(),
            until: Instant::now() + self.notice_duration,
        });
    }
}
