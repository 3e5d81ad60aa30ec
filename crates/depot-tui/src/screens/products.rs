//! Products screen — server-paged table with search and a create/edit form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

use depot_core::{
    EntityController, ListState, NewProduct, Product, ProductResource, Resource as _,
    SeverityLevel,
};

use crate::action::{Action, ConfirmAction, EntityKind};
use crate::component::Component;
use crate::theme;
use crate::widgets::form::{EntityForm, FormField, FormOutcome};

pub struct ProductsScreen {
    focused: bool,
    controller: EntityController<ProductResource>,
    state: ListState<Product, NewProduct>,
    table_state: TableState,
    form: Option<EntityForm>,
    throbber: throbber_widgets_tui::ThrobberState,
}

impl ProductsScreen {
    pub fn new(controller: EntityController<ProductResource>) -> Self {
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

    fn selected(&self) -> Option<&Product> {
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

    fn build_form(&self, existing: Option<&Product>) -> EntityForm {
        let draft = existing.map_or_else(NewProduct::default, ProductResource::draft_from);
        let editing = existing.is_some();
        EntityForm::new(
            if editing { "Edit Product" } else { "New Product" },
            vec![
                FormField::new("Product ID", &draft.product_id)
                    .locked(editing)
                    .required(),
                FormField::new("Name", &draft.product_name).required(),
                FormField::new("Specification", draft.specification.as_deref().unwrap_or("")),
                FormField::new("Unit", &draft.unit).required(),
                FormField::new("Safety stock", &draft.safety_stock.to_string()).numeric(),
            ],
        )
    }

    /// Rebuild the draft from the form fields and push it to the
    /// controller. Parsing mirrors the form's numeric filter: a blank
    /// stock field falls back to zero.
    fn push_draft(&self) {
        let Some(form) = &self.form else { return };
        let specification = form.value(2).trim();
        self.controller.set_draft(NewProduct {
            product_id: form.value(0).trim().to_owned(),
            product_name: form.value(1).trim().to_owned(),
            specification: if specification.is_empty() {
                None
            } else {
                Some(specification.to_owned())
            },
            unit: form.value(3).trim().to_owned(),
            safety_stock: form.value(4).trim().parse().unwrap_or(0),
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
                    return Some(Action::Notify(depot_core::Notice::error(format!(
                        "{missing} is required"
                    ))));
                }
                self.push_draft();
                Some(Action::RequestSubmit(EntityKind::Product))
            }
            FormOutcome::Edited => {
                self.push_draft();
                None
            }
            FormOutcome::Ignored => None,
        }
    }
}

impl Component for ProductsScreen {
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
                if let Some(product) = self.selected().cloned() {
                    self.controller.open_form(Some(&product));
                    self.form = Some(self.build_form(Some(&product)));
                }
                None
            }
            KeyCode::Char('d') => self.selected().map(|product| {
                Action::ShowConfirm(ConfirmAction::Delete {
                    kind: EntityKind::Product,
                    key: product.product_id.clone(),
                    name: product.product_name.clone(),
                })
            }),
            KeyCode::Char('r') => Some(Action::RequestRefresh(EntityKind::Product)),
            KeyCode::Char('h') | KeyCode::Left => {
                let page = self.state.page.page;
                (page > 0).then(|| Action::RequestPage(page - 1))
            }
            KeyCode::Char('l') | KeyCode::Right => {
                let page = self.state.page;
                (page.page + 1 < page.total_pages).then(|| Action::RequestPage(page.page + 1))
            }
            _ => None,
        }
    }

    fn on_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::ProductsState(state) => {
                self.state = state.as_ref().clone();
                // Controller closed the form (successful submit).
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
        let page = self.state.page;
        let title = if self.state.search_term.is_empty() {
            format!(" Products ({}) ", page.total_items)
        } else {
            format!(
                " Products ({}) [\"{}\"] ",
                page.total_items, self.state.search_term
            )
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
            Constraint::Length(1), // pagination
            Constraint::Length(1), // hints
        ])
        .split(inner);

        let header = Row::new(vec![
            Cell::from("ID").style(theme::header()),
            Cell::from("Name").style(theme::header()),
            Cell::from("Specification").style(theme::header()),
            Cell::from("Unit").style(theme::header()),
            Cell::from("Safety Stock").style(theme::header()),
            Cell::from("Created").style(theme::header()),
        ]);

        let rows: Vec<Row> = self
            .state
            .items
            .iter()
            .map(|product| {
                let ok = SeverityLevel::for_safety_stock(product.safety_stock)
                    == SeverityLevel::Ok;
                Row::new(vec![
                    Cell::from(product.product_id.clone()),
                    Cell::from(product.product_name.clone()),
                    Cell::from(product.specification.clone().unwrap_or_default()),
                    Cell::from(product.unit.clone()),
                    Cell::from(product.safety_stock.to_string()).style(theme::severity(ok)),
                    Cell::from(product.created_at.format("%Y-%m-%d %H:%M").to_string()),
                ])
                .style(theme::row())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(6),
                Constraint::Length(12),
                Constraint::Length(17),
            ],
        )
        .header(header)
        .row_highlight_style(theme::selected());

        let mut table_state = self.table_state.clone();
        frame.render_stateful_widget(table, layout[0], &mut table_state);

        // Pagination footer, with a throbber while a fetch is in flight.
        let total_pages = page.total_pages.max(1);
        if self.state.loading {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label("loading…")
                .style(ratatui::style::Style::new().fg(theme::HARBOR_BLUE));
            let mut throbber_state = self.throbber.clone();
            frame.render_stateful_widget(throbber, layout[1], &mut throbber_state);
        } else {
            let footer = Line::from(Span::styled(
                format!(" page {}/{total_pages}", page.page + 1),
                theme::hint(),
            ));
            frame.render_widget(Paragraph::new(footer), layout[1]);
        }

        let hints = Line::from(vec![
            Span::styled("  j/k ", theme::hint_key()),
            Span::styled("navigate  ", theme::hint()),
            Span::styled("h/l ", theme::hint_key()),
            Span::styled("page  ", theme::hint()),
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
