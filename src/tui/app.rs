use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal};

use crate::config::Config;
use crate::controller::FormController;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ComposeState, HelpState, ImagePickerState, draw_compose, draw_help, draw_image_picker,
};

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The comment form with its preview card.
    Compose,
    /// Browse for a preview image.
    ImagePicker,
    /// Show keybinding help.
    Help,
}

impl Screen {
    /// Human-readable screen name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compose => "Compose",
            Self::ImagePicker => "Image Picker",
            Self::Help => "Help",
        }
    }
}

/// Top-level application state.
pub struct App {
    screen: Screen,
    compose: ComposeState,
    picker: ImagePickerState,
    help: HelpState,
    picker_dir: PathBuf,
    should_quit: bool,
}

impl App {
    /// Creates a new `App` on the [`Screen::Compose`] screen, loading the
    /// startup image from `config` if one is given.
    pub fn new(config: &Config) -> Self {
        let mut compose = ComposeState::new(FormController::with_thumbnail_size(
            config.thumbnail_size,
        ));
        if let Some(image) = &config.image {
            compose.select_image(image);
        }
        Self {
            screen: Screen::Compose,
            compose,
            picker: ImagePickerState::new(),
            help: HelpState::new(),
            picker_dir: config.picker_dir.clone(),
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.screen {
            Screen::Compose => draw_compose(&self.compose, frame, area),
            Screen::ImagePicker => draw_image_picker(&self.picker, frame, area),
            Screen::Help => draw_help(&self.help, frame, area),
        }
    }

    /// Handles a key event: global keys first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::F(1) {
            if self.screen != Screen::Help {
                self.help.open_from(self.screen);
                self.screen = Screen::Help;
            }
            return;
        }

        let action = match self.screen {
            Screen::Compose => self.compose.handle_key(key),
            Screen::ImagePicker => self.picker.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
    }

    /// Applies an [`Action`] returned by a screen.
    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::OpenPicker => {
                // Reopen where the user last browsed.
                let dir = if self.picker.dir().as_os_str().is_empty() {
                    self.picker_dir.clone()
                } else {
                    self.picker.dir().to_path_buf()
                };
                // A failed listing is shown on the picker screen itself.
                let _ = self.picker.load(&dir);
                self.screen = Screen::ImagePicker;
            }
            Action::SelectImage(path) => {
                self.compose.select_image(&path);
                self.screen = Screen::Compose;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the compose screen state.
    pub fn compose(&self) -> &ComposeState {
        &self.compose
    }

    /// Returns the image picker state.
    pub fn picker(&self) -> &ImagePickerState {
        &self.picker
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use image::{Rgb, RgbImage};

    use super::*;

    fn make_app(picker_dir: &Path) -> App {
        App::new(&Config {
            picker_dir: picker_dir.to_path_buf(),
            ..Config::default()
        })
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(4, 4, Rgb([9, 9, 9])).save(&path).unwrap();
        path
    }

    #[test]
    fn new_starts_on_compose() {
        let dir = tempfile::tempdir().unwrap();
        let app = make_app(dir.path());
        assert_eq!(app.screen(), Screen::Compose);
        assert!(!app.should_quit());
        assert!(app.compose().controller().preview().is_none());
    }

    #[test]
    fn startup_image_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "start.png");
        let app = App::new(&Config {
            image: Some(path.clone()),
            thumbnail_size: 2,
            ..Config::default()
        });
        let preview = app.compose().controller().preview().unwrap();
        assert_eq!(preview.path(), path.as_path());
        assert_eq!(preview.width(), 2);
    }

    #[test]
    fn bad_startup_image_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(&Config {
            image: Some(dir.path().join("missing.png")),
            ..Config::default()
        });
        assert!(app.compose().controller().preview().is_none());
        assert!(app.compose().image_error().is_some());
    }

    #[test]
    fn esc_on_compose_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(dir.path());
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(dir.path());
        app.handle_key(release(KeyCode::Esc));
        assert!(!app.should_quit());
    }

    #[test]
    fn f1_opens_help_and_esc_returns() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(dir.path());
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        app.handle_key(press(KeyCode::F(1)));
        assert_eq!(app.screen(), Screen::Help);
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Compose);
        assert!(!app.should_quit());
    }

    #[test]
    fn pick_image_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "avatar.png");
        let mut app = make_app(dir.path());

        // Focus starts on the image field.
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::ImagePicker);
        assert_eq!(app.picker().dir(), dir.path().canonicalize().unwrap());

        // Entries: "..", "avatar.png".
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Compose);
        let preview = app.compose().controller().preview().unwrap();
        assert_eq!(preview.file_name(), "avatar.png");
    }

    #[test]
    fn cancelling_picker_leaves_preview_unset() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "avatar.png");
        let mut app = make_app(dir.path());
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Compose);
        assert!(app.compose().controller().preview().is_none());
        assert_eq!(app.compose().image_error(), None);
    }

    #[test]
    fn picker_reopens_in_last_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let mut app = make_app(dir.path());
        app.handle_key(press(KeyCode::Enter));
        // Entries: "..", "sub/".
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(
            app.picker().dir(),
            dir.path().join("sub").canonicalize().unwrap()
        );
    }

    #[test]
    fn missing_picker_dir_shows_error_on_picker() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = make_app(&dir.path().join("missing"));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::ImagePicker);
        assert!(app.picker().error().is_some());
    }

    #[test]
    fn screen_labels_match_expected() {
        let expected = [
            (Screen::Compose, "Compose"),
            (Screen::ImagePicker, "Image Picker"),
            (Screen::Help, "Help"),
        ];
        for (screen, label) in expected {
            assert_eq!(screen.label(), label, "{screen:?} label mismatch");
        }
    }
}
