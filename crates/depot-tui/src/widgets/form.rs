//! Create/edit form popup.
//!
//! A vertical stack of labeled `tui_input` fields rendered as a centered
//! overlay. The identifier field is locked while editing an existing
//! record — identifiers are immutable once assigned.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::theme;

/// What a key press did to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Field content changed; the caller should push a fresh draft.
    Edited,
    /// Enter — the caller should validate and submit.
    Submit,
    /// Esc — the caller should close the form.
    Cancel,
    /// Navigation or a swallowed key; nothing to do.
    Ignored,
}

/// One labeled input line.
pub struct FormField {
    label: &'static str,
    input: Input,
    locked: bool,
    required: bool,
    numeric: bool,
}

impl FormField {
    pub fn new(label: &'static str, value: &str) -> Self {
        Self {
            label,
            input: Input::new(value.to_owned()),
            locked: false,
            required: false,
            numeric: false,
        }
    }

    /// Mark the field read-only (identifier during edit).
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Mark the field as required-for-submit.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict input to an integer value.
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }
}

/// A centered popup form with Tab-cycled fields.
pub struct EntityForm {
    title: String,
    fields: Vec<FormField>,
    focus: usize,
}

impl EntityForm {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        // Start on the first editable field.
        let focus = fields.iter().position(|f| !f.locked).unwrap_or(0);
        Self {
            title: title.into(),
            fields,
            focus,
        }
    }

    /// Current text of the field at `idx` (empty string when out of range).
    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map_or("", FormField::value)
    }

    /// Label of the first required field whose trimmed value is empty.
    pub fn missing_required(&self) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|f| f.required && f.value().trim().is_empty())
            .map(|f| f.label)
    }

    /// Route a key press into the form.
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => FormOutcome::Cancel,
            KeyCode::Enter => FormOutcome::Submit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                FormOutcome::Ignored
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                FormOutcome::Ignored
            }
            KeyCode::Char(c)
                if self.focused_field().is_some_and(|f| f.numeric)
                    && !(c.is_ascii_digit() || c == '-') =>
            {
                FormOutcome::Ignored
            }
            _ => {
                let Some(field) = self.fields.get_mut(self.focus) else {
                    return FormOutcome::Ignored;
                };
                if field.locked {
                    return FormOutcome::Ignored;
                }
                if field.input.handle_event(&CrosstermEvent::Key(key)).is_some() {
                    FormOutcome::Edited
                } else {
                    FormOutcome::Ignored
                }
            }
        }
    }

    fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    fn focus_next(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let idx = (self.focus + step) % len;
            if !self.fields[idx].locked {
                self.focus = idx;
                return;
            }
        }
    }

    fn focus_prev(&mut self) {
        let len = self.fields.len();
        for step in 1..=len {
            let idx = (self.focus + len - step) % len;
            if !self.fields[idx].locked {
                self.focus = idx;
                return;
            }
        }
    }

    /// Render as a centered overlay and place the terminal cursor inside
    /// the focused field.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let height = u16::try_from(self.fields.len()).unwrap_or(u16::MAX)
            .saturating_add(4);
        let popup = centered_rect(area, 52, height);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(theme::panel_title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border(true));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let mut constraints = vec![Constraint::Length(1); self.fields.len()];
        constraints.push(Constraint::Min(0));
        constraints.push(Constraint::Length(1));
        let rows = Layout::vertical(constraints).split(inner);

        let label_width = self
            .fields
            .iter()
            .map(|f| f.label.len())
            .max()
            .unwrap_or(0);

        for (idx, field) in self.fields.iter().enumerate() {
            let focused = idx == self.focus;
            let label_style = if focused {
                Style::default().fg(theme::DEEP_TEAL).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::FOG)
            };
            let value_style = if field.locked {
                Style::default().fg(theme::SLATE)
            } else {
                Style::default().fg(theme::FOG)
            };

            let suffix = if field.locked { "  (fixed)" } else { "" };
            let line = Line::from(vec![
                Span::styled(format!(" {:label_width$}  ", field.label), label_style),
                Span::styled(field.input.value().to_owned(), value_style),
                Span::styled(suffix, Style::default().fg(theme::SLATE)),
            ]);
            frame.render_widget(Paragraph::new(line), rows[idx]);

            if focused && !field.locked {
                let cursor_x = rows[idx].x.saturating_add(
                    u16::try_from(label_width + 3 + field.input.visual_cursor())
                        .unwrap_or(u16::MAX),
                );
                frame.set_cursor_position((cursor_x.min(rows[idx].right()), rows[idx].y));
            }
        }

        let hints = Line::from(vec![
            Span::styled(" Tab ", theme::hint_key()),
            Span::styled("next field  ", theme::hint()),
            Span::styled("Enter ", theme::hint_key()),
            Span::styled("save  ", theme::hint()),
            Span::styled("Esc ", theme::hint_key()),
            Span::styled("cancel", theme::hint()),
        ]);
        if let Some(last) = rows.last() {
            frame.render_widget(Paragraph::new(hints), *last);
        }
    }
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

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent};
    use pretty_assertions::assert_eq;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn form() -> EntityForm {
        EntityForm::new(
            "Edit Product",
            vec![
                FormField::new("ID", "P1").locked(true).required(),
                FormField::new("Name", "Widget").required(),
                FormField::new("Stock", "5").numeric(),
            ],
        )
    }

    #[test]
    fn initial_focus_skips_locked_identifier() {
        let form = form();
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn tab_cycles_only_editable_fields() {
        let mut form = form();
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, 2);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus, 1, "cycle must skip the locked field");
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = form();
        let outcome = form.handle_key(key(KeyCode::Char('s')));
        assert_eq!(outcome, FormOutcome::Edited);
        assert_eq!(form.value(1), "Widgets");
    }

    #[test]
    fn numeric_field_swallows_letters() {
        let mut form = form();
        form.handle_key(key(KeyCode::Tab)); // focus Stock
        assert_eq!(form.handle_key(key(KeyCode::Char('x'))), FormOutcome::Ignored);
        assert_eq!(form.handle_key(key(KeyCode::Char('7'))), FormOutcome::Edited);
        assert_eq!(form.value(2), "57");
    }

    #[test]
    fn locked_field_rejects_edits() {
        let mut form = EntityForm::new("t", vec![FormField::new("ID", "P1").locked(true)]);
        assert_eq!(form.handle_key(key(KeyCode::Char('x'))), FormOutcome::Ignored);
        assert_eq!(form.value(0), "P1");
    }

    #[test]
    fn missing_required_reports_first_empty() {
        let form = EntityForm::new(
            "t",
            vec![
                FormField::new("ID", "P1").required(),
                FormField::new("Name", "  ").required(),
            ],
        );
        assert_eq!(form.missing_required(), Some("Name"));
    }

    #[test]
    fn enter_and_esc_map_to_submit_and_cancel() {
        let mut form = form();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormOutcome::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormOutcome::Cancel);
    }
}
