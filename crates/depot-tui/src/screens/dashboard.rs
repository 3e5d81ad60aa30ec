//! Landing dashboard — summary counts plus recent rows per entity.
//!
//! Single-shot: the data bridge loads the summary once at startup. A
//! failed section simply shows its zero default.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use depot_core::{DashboardSummary, SeverityLevel};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

pub struct DashboardScreen {
    focused: bool,
    summary: Option<DashboardSummary>,
    throbber: throbber_widgets_tui::ThrobberState,
}

/// Rounded panel with a themed title, returning the writable interior.
fn panel(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(title.to_owned())
        .title_style(theme::panel_title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            focused: false,
            summary: None,
            throbber: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    fn stat_card(frame: &mut Frame, area: Rect, label: &str, value: u64) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(label.to_owned(), Style::new().fg(theme::FOG))),
            Line::from(Span::styled(
                value.to_string(),
                Style::new().fg(theme::DEEP_TEAL).add_modifier(Modifier::BOLD),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn recent_products(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let inner = panel(frame, area, " Recent products ");

        let header = Row::new(vec![
            Cell::from("ID").style(theme::header()),
            Cell::from("Name").style(theme::header()),
            Cell::from("Unit").style(theme::header()),
            Cell::from("Stock").style(theme::header()),
        ]);
        let rows: Vec<Row> = summary
            .recent_products
            .iter()
            .map(|product| {
                let ok = SeverityLevel::for_safety_stock(product.safety_stock)
                    == SeverityLevel::Ok;
                Row::new(vec![
                    Cell::from(product.product_id.clone()),
                    Cell::from(product.product_name.clone()),
                    Cell::from(product.unit.clone()),
                    Cell::from(product.safety_stock.to_string()).style(theme::severity(ok)),
                ])
                .style(theme::row())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Fill(1),
                Constraint::Length(6),
                Constraint::Length(6),
            ],
        )
        .header(header);
        frame.render_widget(table, inner);
    }

    fn recent_customers(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let inner = panel(frame, area, " Recent customers ");

        let header = Row::new(vec![
            Cell::from("ID").style(theme::header()),
            Cell::from("Name").style(theme::header()),
            Cell::from("Address").style(theme::header()),
        ]);
        let rows: Vec<Row> = summary
            .recent_customers
            .iter()
            .map(|customer| {
                Row::new(vec![
                    Cell::from(customer.customer_id.clone()),
                    Cell::from(customer.customer_name.clone()),
                    Cell::from(customer.address.clone()),
                ])
                .style(theme::row())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Fill(1),
                Constraint::Fill(2),
            ],
        )
        .header(header);
        frame.render_widget(table, inner);
    }

    fn recent_locations(frame: &mut Frame, area: Rect, summary: &DashboardSummary) {
        let inner = panel(frame, area, " Recent locations ");

        let header = Row::new(vec![
            Cell::from("ID").style(theme::header()),
            Cell::from("Warehouse").style(theme::header()),
            Cell::from("Zone").style(theme::header()),
            Cell::from("Capacity").style(theme::header()),
        ]);
        let rows: Vec<Row> = summary
            .recent_locations
            .iter()
            .map(|location| {
                let ok = SeverityLevel::for_max_capacity(location.max_capacity)
                    == SeverityLevel::Ok;
                Row::new(vec![
                    Cell::from(location.location_id.clone()),
                    Cell::from(location.warehouse_code.clone()),
                    Cell::from(location.zone.clone()),
                    Cell::from(location.max_capacity.to_string()).style(theme::severity(ok)),
                ])
                .style(theme::row())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(6),
                Constraint::Length(9),
            ],
        )
        .header(header);
        frame.render_widget(table, inner);
    }
}

impl Component for DashboardScreen {
    fn on_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::DashboardLoaded(summary) => {
                self.summary = Some(summary.as_ref().clone());
            }
            Action::Tick => {
                if self.summary.is_none() {
                    self.throbber.calc_next();
                }
            }
            _ => {}
        }
        None
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Dashboard ")
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(summary) = &self.summary else {
            let throbber = throbber_widgets_tui::Throbber::default()
                .label("loading summary…")
                .style(Style::new().fg(theme::HARBOR_BLUE));
            let mut throbber_state = self.throbber.clone();
            frame.render_stateful_widget(throbber, inner, &mut throbber_state);
            return;
        };

        let [card_row, table_row] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(5)]).areas(inner);

        let cards = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(card_row);
        Self::stat_card(frame, cards[0], "Products", summary.total_products);
        Self::stat_card(frame, cards[1], "Customers", summary.total_customers);
        Self::stat_card(frame, cards[2], "Locations", summary.total_locations);

        let tables = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(table_row);
        Self::recent_products(frame, tables[0], summary);
        Self::recent_customers(frame, tables[1], summary);
        Self::recent_locations(frame, tables[2], summary);
    }

    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }
}
