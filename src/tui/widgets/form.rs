//! Reusable form widget: labelled inputs with focus and per-field errors.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// How a [`FormField`] accepts input and renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Digits and a sign only.
    Number,
    /// On/off; the value is ignored and `checked` is shown instead.
    Checkbox,
    /// Read-only value changed through an action (e.g. a file picker).
    Picker,
}

/// A single field within a [`Form`].
#[derive(Debug, Clone)]
pub struct FormField {
    /// Display label shown in the field border.
    pub label: String,
    /// Input behaviour.
    pub kind: FieldKind,
    /// Current text value.
    pub value: String,
    /// Checkbox state; only meaningful for [`FieldKind::Checkbox`].
    pub checked: bool,
    /// Text shown dimmed until the field is first edited.
    pub placeholder: String,
    /// Set once the user has changed this field.
    pub edited: bool,
    /// Validation error message, if any.
    pub error: Option<String>,
}

impl FormField {
    /// Creates a new form field.
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            kind,
            value: String::new(),
            checked: false,
            placeholder: String::new(),
            edited: false,
            error: None,
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Returns `true` if `ch` may be typed into this field.
    pub fn accepts(&self, ch: char) -> bool {
        match self.kind {
            FieldKind::Text => !ch.is_control(),
            FieldKind::Number => ch.is_ascii_digit() || ch == '-',
            FieldKind::Checkbox | FieldKind::Picker => false,
        }
    }
}

/// A multi-field form with focus management.
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Creates a new form with the given fields. Focus starts on the first field.
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields, focus: 0 }
    }

    /// Returns the index of the currently focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to `index`, ignoring out-of-range values.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.fields.len() {
            self.focus = index;
        }
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.fields.len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
    }

    /// Appends a character to the focused field if the field accepts it.
    ///
    /// Returns `true` if the value changed.
    pub fn insert_char(&mut self, ch: char) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) if field.accepts(ch) => {
                field.value.push(ch);
                true
            }
            _ => false,
        }
    }

    /// Deletes the last character from the focused text or number field.
    ///
    /// Returns `true` if the value changed.
    pub fn delete_char(&mut self) -> bool {
        match self.fields.get_mut(self.focus) {
            Some(field) if matches!(field.kind, FieldKind::Text | FieldKind::Number) => {
                field.value.pop().is_some()
            }
            _ => false,
        }
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Sets the checkbox state of the field at `index`.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(field) = self.fields.get_mut(index) {
            field.checked = checked;
        }
    }

    /// Marks the field at `index` as edited or untouched.
    pub fn set_edited(&mut self, index: usize, edited: bool) {
        if let Some(field) = self.fields.get_mut(index) {
            field.edited = edited;
        }
    }

    /// Sets an error message on a field by index.
    pub fn set_error(&mut self, index: usize, error: String) {
        if let Some(field) = self.fields.get_mut(index) {
            field.error = Some(error);
        }
    }

    /// Clears all field errors.
    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Returns `true` if any field has an error set.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Returns the value of the field at `index`, or an empty string if out of bounds.
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.value.as_str())
            .unwrap_or("")
    }

    /// Returns a reference to the fields.
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }
}

/// Rows each field occupies: border, value, border.
pub const FIELD_HEIGHT: u16 = 3;

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus;

        let border_color = if field.error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let dim = Style::default().fg(Color::DarkGray);
        let mut spans = match field.kind {
            FieldKind::Checkbox => {
                let mark = if field.checked { "[x]" } else { "[ ]" };
                vec![Span::raw(mark)]
            }
            _ if field.value.is_empty() && !field.edited && !is_focused => {
                vec![Span::styled(field.placeholder.as_str(), dim)]
            }
            _ => vec![Span::raw(field.value.as_str())],
        };
        if is_focused && matches!(field.kind, FieldKind::Text | FieldKind::Number) {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(block);
        frame.render_widget(paragraph, rows[i]);

        // Error overlaps the bottom border so every field keeps its own message.
        if let Some(ref err) = field.error {
            let error_line = Paragraph::new(Span::styled(
                format!(" {err} "),
                Style::default().fg(Color::Red),
            ));
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + FIELD_HEIGHT.saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}
