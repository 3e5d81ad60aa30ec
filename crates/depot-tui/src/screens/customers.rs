//! Customers screen — full-list table with search and a create/edit form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use depot_core::{
    Customer, CustomerResource, EntityController, ListState, NewCustomer, Notice, Resource as _,
};

use crate::action::{Action, ConfirmAction, EntityKind};
use crate::component::Component;
use crate::theme;
use crate::widgets::form::{EntityForm, FormField, FormOutcome};

pub struct CustomersScreen {
    focused: bool,
    controller: EntityController<CustomerResource>,
    state: ListState<Customer, NewCustomer>,
    table_state: TableState,
    form: Option<EntityForm>,
    throbber: throbber_widgets_tui::ThrobberState,
}

impl CustomersScreen {
    pub fn new(controller: EntityController<CustomerResource>) -> Self {
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

    fn selected(&self) -> Option<&Customer> {
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

    fn build_form(&self, existing: Option<&Customer>) -> EntityForm {
        let draft = existing.map_or_else(NewCustomer::default, CustomerResource::draft_from);
        let editing = existing.is_some();
        EntityForm::new(
            if editing { "Edit Customer" } else { "New Customer" },
            vec![
                FormField::new("Customer ID", &draft.customer_id)
                    .locked(editing)
                    .required(),
                FormField::new("Name", &draft.customer_name).required(),
                FormField::new("Address", &draft.address),
                FormField::new("Phone", &draft.phone),
            ],
        )
    }

    fn push_draft(&self) {
        let Some(form) = &self.form else { return };
        self.controller.set_draft(NewCustomer {
            customer_id: form.value(0).trim().to_owned(),
            customer_name: form.value(1).trim().to_owned(),
            address: form.value(2).trim().to_owned(),
            phone: form.value(3).trim().to_owned(),
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
                Some(Action::RequestSubmit(EntityKind::Customer))
            }
            FormOutcome::Edited => {
                self.push_draft();
                None
            }
            FormOutcome::Ignored => None,
        }
    }
}

impl Component for CustomersScreen {
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
                if let Some(customer) = self.selected().cloned() {
                    self.controller.open_form(Some(&customer));
                    self.form = Some(self.build_form(Some(&customer)));
                }
                None
            }
            KeyCode::Char('d') => self.selected().map(|customer| {
                Action::ShowConfirm(ConfirmAction::Delete {
                    kind: EntityKind::Customer,
                    key: customer.customer_id.clone(),
                    name: customer.customer_name.clone(),
                })
            }),
            KeyCode::Char('r') => Some(Action::RequestRefresh(EntityKind::Customer)),
            _ => None,
        }
    }

    fn on_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::CustomersState(state) => {
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
            format!(" Customers ({shown}) ")
        } else {
            format!(" Customers ({shown}) [\"{}\"] ", self.state.search_term)
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
            Cell::from("Name").style(theme::header()),
            Cell::from("Address").style(theme::header()),
            Cell::from("Phone").style(theme::header()),
            Cell::from("Created").style(theme::header()),
        ]);

        let rows: Vec<Row> = self
            .state
            .items
            .iter()
            .map(|customer| {
                Row::new(vec![
                    Cell::from(customer.customer_id.clone()),
                    Cell::from(customer.customer_name.clone()),
                    Cell::from(customer.address.clone()),
                    Cell::from(customer.phone.clone()),
                    Cell::from(customer.created_at.format("%Y-%m-%d %H:%M").to_string()),
                ])
                .style(theme::row())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Fill(2),
                Constraint::Fill(3),
                Constraint::Length(16),
                Constraint::Length(17),
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
            Span::styled("search  ", theme::hint()),
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
