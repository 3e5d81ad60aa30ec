//! Storage locations screen — full-list table searched by warehouse code.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use depot_core::{
    EntityController, ListState, LocationResource, NewStorageLocation, Notice, Resource as _,
    SeverityLevel, StorageLocation,
};

use crate::action::{Action, ConfirmAction, EntityKind};
use crate::component::Component;
use crate::theme;
use crate::widgets::form::{EntityForm, FormField, FormOutcome};

pub struct LocationsScreen {
    focused: bool,
    controller: EntityController<LocationResource>,
    state: ListState<StorageLocation, NewStorageLocation>,
    table_state: TableState,
    form: Option<EntityForm>,
    throbber: throbber_widgets_tui::ThrobberState,
}

impl LocationsScreen {
    pub fn new(controller: EntityController<LocationResource>) -> Self {
        let state = controller.state();
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            focused: false,
            controller,
            state,
            table_state,
            form: None,
            throbber: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    fn selected(&self) -> Option<&StorageLocation> {
        self.state.items.get(self.table_state.selected().unwrap_or(0))
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.state.items.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.table_state.select(Some(next));
    }

    fn build_form(&self, existing: Option<&StorageLocation>) -> EntityForm {
        let draft = existing.map_or_else(NewStorageLocation::default, LocationResource::draft_from);
        let editing = existing.is_some();
        EntityForm::new(
            if editing { "Edit Location" } else { "New Location" },
            vec![
                FormField::new("Location ID", &draft.location_id)
                    .locked(editing)
                    .required(),
                FormField::new("Warehouse", &draft.warehouse_code).required(),
                FormField::new("Zone", &draft.zone),
                FormField::new("Rack", &draft.rack),
                FormField::new("Level", &draft.level_no),
                FormField::new("Position", &draft.position),
                FormField::new("Max capacity", &draft.max_capacity.to_string()).numeric(),
            ],
        )
    }

    fn push_draft(&self) {
        let Some(form) = &self.form else { return };
        self.controller.set_draft(NewStorageLocation {
            location_id: form.value(0).trim().to_owned(),
            warehouse_code: form.value(1).trim().to_owned(),
            zone: form.value(2).trim().to_owned(),
            rack: form.value(3).trim().to_owned(),
            level_no: form.value(4).trim().to_owned(),
            position: form.value(5).trim().to_owned(),
            max_capacity: form.value(6).trim().parse().unwrap_or(0),
        });
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        let form = self.form.as_mut()?;
        match form.handle_key(key) {
            FormOutcome::Cancel => {
                self.controller.close_form();
                self.form = None;
                None
            }
            FormOutcome::Submit => {
                if let Some(missing) = form.missing_required() {
                    return Some(Action::Notify(Notice::error(format!(
                        "{missing} is required"
                    ))));
                }
                self.push_draft();
                Some(Action::RequestSubmit(EntityKind::Location))
            }
            FormOutcome::Edited => {
                self.push_draft();
                None
            }
            FormOutcome::Ignored => None,
        }
    }
}

impl Component for LocationsScreen {
    fn on_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.form.is_some() {
            return self.handle_form_key(key);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection(-1);
                None
            }
            KeyCode::Char('g') => {
                self.table_state.select(Some(0));
                None
            }
            KeyCode::Char('G') => {
                let len = self.state.items.len();
                if len > 0 {
                    self.table_state.select(Some(len - 1));
                }
                None
            }
            KeyCode::Char('n') => {
                self.controller.open_form(None);
                self.form = Some(self.build_form(None));
                None
            }
            KeyCode::Char('e') => {
                if let Some(location) = self.selected().cloned() {
                    self.controller.open_form(Some(&location));
                    self.form = Some(self.build_form(Some(&location)));
                }
                None
            }
            KeyCode::Char('d') => self.selected().map(|location| {
                Action::ShowConfirm(ConfirmAction::Delete {
                    kind: EntityKind::Location,
                    key: location.location_id.clone(),
                    name: location.location_id.clone(),
                })
            }),
            KeyCode::Char('r') => Some(Action::RequestRefresh(EntityKind::Location)),
            _ => None,
        }
    }

    fn on_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::LocationsState(state) => {
                self.state = state.as_ref().clone();
                if !self.state.form_open {
                    self.form = None;
                }
                let len = self.state.items.len();
                if len > 0 && self.table_state.selected().unwrap_or(0) >= len {
                    self.table_state.select(Some(len - 1));
                }
            }
            Action::Tick => {
                if self.state.loading {
                    self.throbber.calc_next();
                }
            }
            _ => {}
        }
        None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let shown = self.state.items.len();
        let title = if self.state.search_term.is_empty() {
            format!(" Locations ({shown}) ")
        } else {
            format!(" Locations ({shown}) [\"{}\"] ", self.state.search_term)
        };

        let block = Block::default()
            .title(title)
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Min(1),    // table
            Constraint::Length(1), // status
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let header = Row::new(vec![
            Cell::from("ID").style(theme::header()),
            Cell::from("Warehouse").style(theme::header()),
            Cell::from("Zone").style(theme::header()),
            Cell::from("Rack").style(theme::header()),
            Cell::from("Level").style(theme::header()),
            Cell::from("Position").style(theme::header()),
            Cell::from("Capacity").style(theme::header()),
        ]);

        let rows: Vec<Row> = self
            .state
            .items
            .iter()
            .map(|location| {
                let ok = SeverityLevel::for_max_capacity(location.max_capacity)
                    == SeverityLevel::Ok;
                Row::new(vec![
                    Cell::from(location.location_id.clone()),
                    Cell::from(location.warehouse_code.clone()),
                    Cell::from(location.zone.clone()),
                    Cell::from(location.rack.clone()),
                    Cell::from(location.level_no.clone()),
                    Cell::from(location.position.clone()),
                    Cell::from(location.max_capacity.to_string()).style(theme::severity(ok)),
                ])
                .style(theme::row())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(10),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(9),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .row_highlight_style(theme::selected());

        let mut table_state = self.table_state.clone();
        frame.render_stateful_widget(table, layout[0], &mut table_state);

        if self.state.loading {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label("loading…")
                .style(ratatui::style::Style::new().fg(theme::HARBOR_BLUE));
            let mut throbber_state = self.throbber.clone();
            frame.render_stateful_widget(throbber, layout[1], &mut throbber_state);
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::hint_key()),
            Span::styled("navigate  ", theme::hint()),
            Span::styled("n ", theme::hint_key()),
            Span::styled("new  ", theme::hint()),
            Span::styled("e ", theme::hint_key()),
            Span::styled("edit  ", theme::hint()),
            Span::styled("d ", theme::hint_key()),
            Span::styled("delete  ", theme::hint()),
            Span::styled("/ ", theme::hint_key()),
            Span::styled("search (warehouse)  ", theme::hint()),
            Span::styled("r ", theme::hint_key()),
            Span::styled("refresh", theme::hint()),
        ]);
        frame.render_widget(Paragraph::new(hints), layout[2]);

        if let Some(form) = &self.form {
            form.render(frame, area);
        }
    }

    fn wants_keys(&self) -> bool {
        self.form.is_some()
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }
}
