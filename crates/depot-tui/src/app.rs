//! Application core — event loop, screen switching, action dispatch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Tabs},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use depot_core::{EntityController, Notice, NoticeLevel, Resource};

use crate::action::{Action, ConfirmAction, EntityKind};
use crate::component::Component;
use crate::data_bridge::Controllers;
use crate::event::{EventPump, UiEvent};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui;

const TOAST_SECS: u64 = 3;
const TICK_EVERY: Duration = Duration::from_millis(250);
const FRAME_EVERY: Duration = Duration::from_millis(50);

/// A controller call to run off the UI loop. Results come back through
/// the data bridge as snapshots and notices, never as return values.
enum EntityOp {
    Refresh,
    Search(String),
    Submit,
    Remove(String),
}

/// Top-level application state and event loop.
pub struct App {
    active_screen: ScreenId,
    last_screen: Option<ScreenId>,
    screens: HashMap<ScreenId, Box<dyn Component>>,
    running: bool,
    show_help: bool,
    search_open: bool,
    search_input: String,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    controllers: Controllers,
    client: std::sync::Arc<depot_api::ApiClient>,
    bridge_cancel: CancellationToken,
    /// Pending delete confirmation; captures all input while set.
    confirm: Option<ConfirmAction>,
    /// Active toast and the moment it appeared.
    toast: Option<(Notice, Instant)>,
}

impl App {
    pub fn new(controllers: Controllers, client: std::sync::Arc<depot_api::ApiClient>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens(&controllers).into_iter().collect();

        Self {
            active_screen: ScreenId::Dashboard,
            last_screen: None,
            screens,
            running: true,
            show_help: false,
            search_open: false,
            search_input: String::new(),
            action_tx,
            action_rx,
            controllers,
            client,
            bridge_cancel: CancellationToken::new(),
            confirm: None,
            toast: None,
        }
    }

    /// Run the main event loop until quit.
    pub async fn run(&mut self) -> Result<()> {
        let mut term = tui::enter()?;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focus(true);
        }

        {
            let controllers = self.controllers.clone();
            let client = std::sync::Arc::clone(&self.client);
            let cancel = self.bridge_cancel.clone();
            let tx = self.action_tx.clone();
            tokio::spawn(crate::data_bridge::run_bridge(controllers, client, tx, cancel));
        }

        let mut events = EventPump::start(TICK_EVERY, FRAME_EVERY);
        info!("entering main loop");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                UiEvent::Key(key) => {
                    if let Some(action) = self.key_to_action(key) {
                        self.queue(action);
                    }
                }
                UiEvent::Resize(cols, rows) => self.queue(Action::Resize(cols, rows)),
                UiEvent::Tick => self.queue(Action::Tick),
                UiEvent::Render => self.queue(Action::Render),
            }

            // Work through everything queued before waiting again.
            while let Ok(action) = self.action_rx.try_recv() {
                let redraw = matches!(action, Action::Render);
                self.apply(&action);
                if redraw {
                    term.draw(|frame| self.render(frame))?;
                }
            }
        }

        self.bridge_cancel.cancel();
        events.stop();
        info!("main loop ended");
        Ok(())
    }

    fn queue(&self, action: Action) {
        // The receiver lives on self, so this cannot fail.
        let _ = self.action_tx.send(action);
    }

    /// Translate a key press into an action, honoring whatever overlay is
    /// on top: confirm dialog, open form, search box, help.
    fn key_to_action(&mut self, key: KeyEvent) -> Option<Action> {
        if self.confirm.is_some() {
            return match key.code {
                KeyCode::Char('y' | 'Y') => Some(Action::ConfirmYes),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmNo),
                _ => None,
            };
        }

        let form_open = self
            .screens
            .get(&self.active_screen)
            .is_some_and(|screen| screen.wants_keys());
        if form_open {
            if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
                return Some(Action::Quit);
            }
            return self
                .screens
                .get_mut(&self.active_screen)
                .and_then(|screen| screen.on_key(key));
        }

        if self.search_open {
            return match key.code {
                KeyCode::Esc => Some(Action::CloseSearch),
                KeyCode::Enter => Some(Action::SearchSubmit),
                KeyCode::Backspace => {
                    self.search_input.pop();
                    None
                }
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                    None
                }
                _ => None,
            };
        }

        if self.show_help {
            return matches!(key.code, KeyCode::Esc | KeyCode::Char('?'))
                .then_some(Action::ToggleHelp);
        }

        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => return Some(Action::ToggleHelp),
            KeyCode::Char('/') => return Some(Action::OpenSearch),
            KeyCode::Tab => return Some(Action::SwitchScreen(self.active_screen.next())),
            KeyCode::BackTab => return Some(Action::SwitchScreen(self.active_screen.prev())),
            KeyCode::Esc => return Some(Action::GoBack),
            KeyCode::Char(c) => {
                if let Some(screen) = ScreenId::from_hotkey(c) {
                    return Some(Action::SwitchScreen(screen));
                }
            }
            _ => {}
        }

        self.screens
            .get_mut(&self.active_screen)
            .and_then(|screen| screen.on_key(key))
    }

    /// Apply one action to the app and propagate it to the screens.
    fn apply(&mut self, action: &Action) {
        match action {
            Action::Quit => self.running = false,

            Action::Resize(..) | Action::Render => {}

            Action::SwitchScreen(target) => self.switch_to(*target),

            Action::GoBack => {
                if let Some(prev) = self.last_screen.take() {
                    self.switch_to(prev);
                }
            }

            Action::ToggleHelp => self.show_help = !self.show_help,

            Action::OpenSearch => {
                // The dashboard has nothing to search.
                if self.active_screen != ScreenId::Dashboard {
                    self.search_open = true;
                    self.search_input.clear();
                }
            }

            Action::CloseSearch => {
                self.search_open = false;
                self.search_input.clear();
            }

            Action::SearchSubmit => {
                self.search_open = false;
                let term = std::mem::take(&mut self.search_input);
                if let Some(kind) = self.active_screen_entity() {
                    self.spawn_op(kind, EntityOp::Search(term));
                }
            }

            Action::Tick => {
                if self
                    .toast
                    .as_ref()
                    .is_some_and(|(_, at)| at.elapsed() > Duration::from_secs(TOAST_SECS))
                {
                    self.toast = None;
                }
                for screen in self.screens.values_mut() {
                    screen.on_action(action);
                }
            }

            // Snapshots go to every screen so each stays in sync.
            Action::ProductsState(_)
            | Action::CustomersState(_)
            | Action::LocationsState(_)
            | Action::DashboardLoaded(_) => {
                let mut follow_ups = Vec::new();
                for screen in self.screens.values_mut() {
                    if let Some(follow_up) = screen.on_action(action) {
                        follow_ups.push(follow_up);
                    }
                }
                for follow_up in follow_ups {
                    self.queue(follow_up);
                }
            }

            Action::RequestRefresh(kind) => self.spawn_op(*kind, EntityOp::Refresh),
            Action::RequestSearch(kind, term) => {
                self.spawn_op(*kind, EntityOp::Search(term.clone()));
            }
            Action::RequestSubmit(kind) => self.spawn_op(*kind, EntityOp::Submit),
            Action::RequestPage(page) => {
                let controller = self.controllers.products.clone();
                let page = *page;
                tokio::spawn(async move { controller.goto_page(page).await });
            }

            Action::ShowConfirm(pending) => self.confirm = Some(pending.clone()),
            Action::ConfirmYes => {
                if let Some(ConfirmAction::Delete { kind, key, .. }) = self.confirm.take() {
                    self.spawn_op(kind, EntityOp::Remove(key));
                }
            }
            Action::ConfirmNo => self.confirm = None,

            Action::Notify(notice) => {
                self.toast = Some((notice.clone(), Instant::now()));
            }
        }
    }

    fn switch_to(&mut self, target: ScreenId) {
        if target == self.active_screen {
            return;
        }
        debug!("screen {} -> {}", self.active_screen, target);
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focus(false);
        }
        self.last_screen = Some(self.active_screen);
        self.active_screen = target;
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focus(true);
        }
    }

    fn active_screen_entity(&self) -> Option<EntityKind> {
        match self.active_screen {
            ScreenId::Dashboard => None,
            ScreenId::Products => Some(EntityKind::Product),
            ScreenId::Customers => Some(EntityKind::Customer),
            ScreenId::Locations => Some(EntityKind::Location),
        }
    }

    fn spawn_op(&self, kind: EntityKind, op: EntityOp) {
        match kind {
            EntityKind::Product => launch(self.controllers.products.clone(), op),
            EntityKind::Customer => launch(self.controllers.customers.clone(), op),
            EntityKind::Location => launch(self.controllers.locations.clone(), op),
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let [tab_bar, content] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(frame.area());

        self.render_tab_bar(frame, tab_bar);

        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.draw(frame, content);
        }

        if self.search_open {
            self.render_search_overlay(frame, content);
        }
        if let Some(pending) = &self.confirm {
            Self::render_confirm(frame, content, pending);
        }
        if self.show_help {
            Self::render_help(frame, content);
        }
        if let Some((notice, _)) = &self.toast {
            Self::render_toast(frame, content, notice);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let narrow = area.width < 80;
        let titles = ScreenId::ORDER.map(|screen| {
            let label = if narrow {
                screen.short_title()
            } else {
                screen.title()
            };
            Line::from(vec![
                Span::styled(format!("{} ", screen.hotkey()), theme::hint_key()),
                Span::raw(label),
            ])
        });

        let selected = ScreenId::ORDER
            .iter()
            .position(|&s| s == self.active_screen)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .style(theme::tab(false))
            .highlight_style(theme::tab(true))
            .divider(" │ ");
        frame.render_widget(tabs, area);
    }

    fn render_search_overlay(&self, frame: &mut Frame, area: Rect) {
        let popup = top_rect(area, 50, 3);
        frame.render_widget(Clear, popup);

        let hint = match self.active_screen {
            ScreenId::Locations => " Search (warehouse code) ",
            _ => " Search (name) ",
        };
        let block = Block::default()
            .title(hint)
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(true));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        frame.render_widget(Paragraph::new(self.search_input.as_str()), inner);
        let cursor_x = inner
            .x
            .saturating_add(u16::try_from(self.search_input.len()).unwrap_or(u16::MAX));
        frame.set_cursor_position((cursor_x.min(inner.right()), inner.y));
    }

    fn render_confirm(frame: &mut Frame, area: Rect, pending: &ConfirmAction) {
        let message = pending.to_string();
        let width = u16::try_from(message.len() + 6).unwrap_or(60).min(area.width);
        let popup = centered_rect(area, width, 5);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Confirm ")
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(theme::ERROR_RED));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines = vec![
            Line::from(Span::styled(message, Style::new().fg(theme::FOG))),
            Line::from(""),
            Line::from(vec![
                Span::styled("y ", theme::hint_key()),
                Span::styled("confirm   ", theme::hint()),
                Span::styled("n/Esc ", theme::hint_key()),
                Span::styled("cancel", theme::hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), inner);
    }

    fn render_help(frame: &mut Frame, area: Rect) {
        let popup = centered_rect(area, 46, 14);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Help ")
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(true));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let entries = [
            ("1-4 / Tab", "switch screen"),
            ("j/k", "move selection"),
            ("/", "search"),
            ("n", "new record"),
            ("e", "edit selected"),
            ("d", "delete selected"),
            ("r", "refresh list"),
            ("h/l", "previous/next page (products)"),
            ("?", "toggle this help"),
            ("q", "quit"),
        ];
        let lines: Vec<Line> = entries
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(format!(" {keys:<12}"), theme::hint_key()),
                    Span::styled((*what).to_owned(), theme::hint()),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_toast(frame: &mut Frame, area: Rect, notice: &Notice) {
        let width = u16::try_from(notice.message.len() + 4)
            .unwrap_or(40)
            .min(area.width.saturating_sub(2));
        let popup = Rect {
            x: area.right().saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height: 3,
        };
        frame.render_widget(Clear, popup);

        let border = match notice.level {
            NoticeLevel::Success => Style::new().fg(theme::SUCCESS_GREEN),
            NoticeLevel::Error => Style::new().fg(theme::ERROR_RED),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(popup);
        frame.render_widget(block, popup);
        frame.render_widget(Paragraph::new(notice.message.as_str()).centered(), inner);
    }
}

/// Detach one controller call onto the runtime.
fn launch<R: Resource>(controller: EntityController<R>, op: EntityOp) {
    tokio::spawn(async move {
        match op {
            EntityOp::Refresh => controller.refresh().await,
            EntityOp::Search(term) => controller.run_search(&term).await,
            EntityOp::Submit => controller.submit().await,
            EntityOp::Remove(key) => controller.remove(&key).await,
        }
    });
}

/// A centered rect of fixed width/height, clamped to the parent area.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// A horizontally centered rect near the top of the parent area.
fn top_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + 1,
        width,
        height: height.min(area.height),
    }
}
