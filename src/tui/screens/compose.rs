//! Compose screen: the preview card above the comment form.

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::controller::FormController;
use crate::model::{Field, FieldUpdate};
use crate::preview::ACCEPTED_EXTENSIONS;
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{FIELD_HEIGHT, FieldKind, Form, FormField, draw_form};
use crate::tui::widgets::preview_card::PreviewCard;
use crate::tui::widgets::status_bar::{Status, StatusBarContext, draw_status_bar};

/// Field index for the image picker.
const IMAGE: usize = 0;
/// Field index for the username.
const USERNAME: usize = 1;
/// Field index for the comment text.
const COMMENT: usize = 2;
/// Field index for the like count.
const LIKE_COUNT: usize = 3;
/// Field index for the liked checkbox.
const LIKED: usize = 4;

/// Maps a draft field to its form row.
fn field_index(field: Field) -> usize {
    match field {
        Field::Username => USERNAME,
        Field::Comment => COMMENT,
        Field::LikeCount => LIKE_COUNT,
        Field::Liked => LIKED,
    }
}

/// State for the compose screen.
#[derive(Debug)]
pub struct ComposeState {
    controller: FormController,
    form: Form,
    image_error: Option<String>,
    status: Option<Status>,
}

impl Default for ComposeState {
    fn default() -> Self {
        Self::new(FormController::new())
    }
}

impl ComposeState {
    /// Creates the compose screen around a controller.
    pub fn new(controller: FormController) -> Self {
        let form = Form::new(vec![
            FormField::new("Image", FieldKind::Picker)
                .with_placeholder(format!("Enter: choose ({ACCEPTED_EXTENSIONS})")),
            FormField::new("Username", FieldKind::Text).with_placeholder("Enter username"),
            FormField::new("Comment", FieldKind::Text).with_placeholder("Enter your comment"),
            FormField::new("Like count", FieldKind::Number)
                .with_placeholder("Enter the like count"),
            FormField::new("Liked", FieldKind::Checkbox),
        ]);
        let mut state = Self {
            controller,
            form,
            image_error: None,
            status: None,
        };
        state.sync_image_field();
        state
    }

    /// Returns the controller.
    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Returns the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the last submit outcome.
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Returns why the last image selection failed, if it did.
    pub fn image_error(&self) -> Option<&str> {
        self.image_error.as_deref()
    }

    /// Loads `path` as the preview image. Failures are reported in the status bar.
    pub fn select_image(&mut self, path: &Path) {
        match self.controller.select_image(path) {
            Ok(()) => {
                self.sync_image_field();
                self.image_error = None;
            }
            Err(e) => self.image_error = Some(e.to_string()),
        }
    }

    /// Flips the liked state from either heart or checkbox.
    fn toggle_like(&mut self) {
        self.controller.toggle_like();
        self.sync_like_fields();
        self.sync_edited();
    }

    fn clear_image(&mut self) {
        self.controller.clear_image();
        self.sync_image_field();
    }

    /// Forwards the focused field's text to the controller after an edit.
    fn push_edit(&mut self) {
        let focus = self.form.focus();
        let value = self.form.value(focus).to_string();
        match focus {
            USERNAME => self.controller.set_field(FieldUpdate::Username(value)),
            COMMENT => self.controller.set_field(FieldUpdate::Comment(value)),
            LIKE_COUNT => {
                self.controller.set_like_count_direct(&value);
            }
            _ => {}
        }
        self.sync_edited();
    }

    fn sync_edited(&mut self) {
        for field in Field::all() {
            self.form
                .set_edited(field_index(*field), self.controller.is_edited(*field));
        }
    }

    fn sync_like_fields(&mut self) {
        self.form
            .set_value(LIKE_COUNT, self.controller.like_count().to_string());
        self.form.set_checked(LIKED, self.controller.like_toggle());
    }

    fn sync_image_field(&mut self) {
        let name = self
            .controller
            .preview()
            .map(|p| p.file_name())
            .unwrap_or_default();
        self.form.set_value(IMAGE, name);
    }

    /// Runs validation and mirrors the result onto the form, focusing the
    /// first failing field.
    fn submit(&mut self) -> Action {
        let result = self.controller.validate_and_submit();
        self.form.clear_errors();
        if let Some(failure) = self.controller.validation() {
            for err in failure.errors() {
                self.form.set_error(field_index(err.field), err.message());
            }
            if let Some(first) = failure.errors().first() {
                self.form.set_focus(field_index(first.field));
            }
        }
        self.status = Some(match result {
            Ok(()) => Status::Valid,
            Err(failure) => Status::Invalid(failure.to_string()),
        });
        Action::None
    }
}

impl ScreenState for ComposeState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Action::Quit,
                KeyCode::Char('x') => {
                    self.clear_image();
                    Action::None
                }
                _ => Action::None,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char('l' | 'L') = key.code {
                self.toggle_like();
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Backspace => {
                if self.form.delete_char() {
                    self.push_edit();
                }
                Action::None
            }
            KeyCode::Enter if self.form.focus() == IMAGE => Action::OpenPicker,
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.form.focus() == LIKED => {
                self.toggle_like();
                Action::None
            }
            KeyCode::Char(ch) => {
                if self.form.insert_char(ch) {
                    self.push_edit();
                }
                Action::None
            }
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the compose screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_compose(state: &ComposeState, frame: &mut Frame, area: Rect) {
    let controller = state.controller();
    let draft = controller.draft();
    let card = PreviewCard {
        username: &draft.username,
        comment: &draft.comment,
        liked: controller.like_toggle(),
        like_count: controller.like_count(),
        image: controller.preview(),
    };
    let form_height = FIELD_HEIGHT * state.form().fields().len() as u16;

    let [card_area, form_area, _spacer, footer_area, status_area] = Layout::vertical([
        Constraint::Length(card.height()),
        Constraint::Length(form_height),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(card, card_area);
    draw_form(state.form(), frame, form_area);

    let footer = Paragraph::new(Line::from(
        "Tab: next  Enter: Generate Comment  Alt+l: like  Ctrl+x: clear image  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    let ctx = StatusBarContext {
        image_name: controller.preview().map(|p| p.file_name()),
        image_error: state.image_error().map(str::to_string),
        status: state.status().cloned(),
    };
    draw_status_bar(&ctx, frame, status_area);
}
