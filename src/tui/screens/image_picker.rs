//! Image picker screen: browse directories for a preview image.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::preview::{ACCEPTED_EXTENSIONS, EntryKind, PickerEntry, PreviewError, list_images};
use crate::tui::action::{Action, ScreenState};
use crate::tui::app::Screen;

/// State for the image picker screen.
#[derive(Debug, Clone, Default)]
pub struct ImagePickerState {
    /// Directory currently listed.
    dir: PathBuf,
    /// Cached listing of `dir`.
    entries: Vec<PickerEntry>,
    /// Index of the highlighted entry, or `None` if the list is empty.
    selected: Option<usize>,
    /// Error message from the last failed listing.
    error: Option<String>,
}

impl ImagePickerState {
    /// Creates an empty picker. Call [`load`](Self::load) to list a directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists `dir`, replacing the current listing.
    ///
    /// On failure the listing is emptied and the error is kept for display.
    pub fn load(&mut self, dir: &Path) -> Result<(), PreviewError> {
        let result = dir
            .canonicalize()
            .map_err(|source| PreviewError::Io {
                path: dir.to_path_buf(),
                source,
            })
            .and_then(|dir| list_images(&dir).map(|entries| (dir, entries)));
        match result {
            Ok((dir, entries)) => {
                self.selected = (!entries.is_empty()).then_some(0);
                self.dir = dir;
                self.entries = entries;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.dir = dir.to_path_buf();
                self.entries.clear();
                self.selected = None;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Returns the directory being listed.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the cached entries.
    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    /// Returns the selected index.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the current error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Opens the highlighted directory or picks the highlighted image.
    fn activate(&mut self) -> Action {
        let Some(entry) = self.selected.and_then(|i| self.entries.get(i)).cloned() else {
            return Action::None;
        };
        match entry.kind {
            EntryKind::Image => Action::SelectImage(entry.path),
            EntryKind::Dir | EntryKind::Parent => {
                self.enter(&entry.path);
                Action::None
            }
        }
    }

    fn go_up(&mut self) {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.enter(&parent);
        }
    }

    fn enter(&mut self, dir: &Path) {
        if let Err(e) = self.load(dir) {
            log::warn!("{e}");
        }
    }

    /// Moves the selection up by one (no wrap).
    fn select_prev(&mut self) {
        self.selected = match self.selected {
            Some(i) if i > 0 => Some(i - 1),
            other => other,
        };
    }

    /// Moves the selection down by one (no wrap).
    fn select_next(&mut self) {
        self.selected = match self.selected {
            Some(i) if i + 1 < self.entries.len() => Some(i + 1),
            other => other,
        };
    }
}

impl ScreenState for ImagePickerState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace => {
                self.go_up();
                Action::None
            }
            KeyCode::Esc => Action::Navigate(Screen::Compose),
            _ => Action::None,
        }
    }
}

/// Renders the image picker screen.
#[mutants::skip]
pub fn draw_image_picker(state: &ImagePickerState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" Choose Image ({ACCEPTED_EXTENSIONS}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [dir_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(state.dir().display().to_string()).style(Style::default().fg(Color::Gray)),
        dir_area,
    );

    if let Some(err) = state.error() {
        let err_line = Paragraph::new(err)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(err_line, list_area);
    } else if state.entries().is_empty() {
        let empty = Paragraph::new("No images here.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, list_area);
    } else {
        let items: Vec<ListItem> = state
            .entries()
            .iter()
            .map(|entry| {
                let (name, color) = match entry.kind {
                    EntryKind::Parent | EntryKind::Dir => (format!("{}/", entry.name), Color::Blue),
                    EntryKind::Image => (entry.name.clone(), Color::White),
                };
                ListItem::new(Line::from(Span::styled(name, Style::default().fg(color))))
            })
            .collect();
        let list = List::new(items).highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow));
        let mut list_state = ListState::default().with_selected(state.selected());
        frame.render_stateful_widget(list, list_area, &mut list_state);
    }

    let footer = Paragraph::new("↑/↓: move  Enter: open/choose  Backspace: up  Esc: cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    /// `root/` holds `photos/` (with `cat.png`), `me.jpg` and `notes.txt`.
    fn make_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("photos")).unwrap();
        fs::write(dir.path().join("photos").join("cat.png"), b"").unwrap();
        fs::write(dir.path().join("me.jpg"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        dir
    }

    fn loaded(dir: &Path) -> ImagePickerState {
        let mut state = ImagePickerState::new();
        state.load(dir).unwrap();
        state
    }

    fn names(state: &ImagePickerState) -> Vec<&str> {
        state.entries().iter().map(|e| e.name.as_str()).collect()
    }

    mod load {
        use super::*;

        #[test]
        fn new_starts_empty() {
            let state = ImagePickerState::new();
            assert!(state.entries().is_empty());
            assert_eq!(state.selected(), None);
            assert_eq!(state.error(), None);
        }

        #[test]
        fn lists_filtered_entries() {
            let tree = make_tree();
            let state = loaded(tree.path());
            assert_eq!(names(&state), vec!["..", "photos", "me.jpg"]);
            assert_eq!(state.selected(), Some(0));
            assert_eq!(state.dir(), tree.path().canonicalize().unwrap());
        }

        #[test]
        fn missing_dir_sets_error() {
            let tree = make_tree();
            let mut state = ImagePickerState::new();
            assert!(state.load(&tree.path().join("missing")).is_err());
            assert!(state.error().is_some());
            assert!(state.entries().is_empty());
            assert_eq!(state.selected(), None);
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn selection_moves_without_wrapping() {
            let tree = make_tree();
            let mut state = loaded(tree.path());
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.selected(), Some(0));
            for _ in 0..5 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.selected(), Some(2));
        }

        #[test]
        fn enter_on_image_selects_it() {
            let tree = make_tree();
            let mut state = loaded(tree.path());
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Down));
            let action = state.handle_key(press(KeyCode::Enter));
            let expected = tree.path().canonicalize().unwrap().join("me.jpg");
            assert_eq!(action, Action::SelectImage(expected));
        }

        #[test]
        fn enter_on_dir_descends() {
            let tree = make_tree();
            let mut state = loaded(tree.path());
            state.handle_key(press(KeyCode::Down));
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(names(&state), vec!["..", "cat.png"]);
        }

        #[test]
        fn backspace_goes_up() {
            let tree = make_tree();
            let mut state = loaded(&tree.path().join("photos"));
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.dir(), tree.path().canonicalize().unwrap());
        }

        #[test]
        fn esc_cancels_to_compose() {
            let tree = make_tree();
            let mut state = loaded(tree.path());
            let action = state.handle_key(press(KeyCode::Esc));
            assert_eq!(action, Action::Navigate(Screen::Compose));
        }

        #[test]
        fn enter_on_empty_list_is_noop() {
            let mut state = ImagePickerState::new();
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
        }
    }
}
