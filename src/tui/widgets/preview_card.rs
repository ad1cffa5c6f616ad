//! Preview card widget: how the comment will look once posted.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::preview::PreviewImage;

/// Name shown while the username is empty.
pub const SAMPLE_USERNAME: &str = "Mitchael Brown";
/// Text shown while the comment is empty.
pub const SAMPLE_COMMENT: &str =
    "Hello, how are you doing this fine and lovely evening. I hope this message finds you well.";

const FILLED_HEART: &str = "\u{2665}";
const EMPTY_HEART: &str = "\u{2661}";
const HEART_COLUMN: u16 = 6;
const PLACEHOLDER_WIDTH: u16 = 5;

/// Renders a [`PreviewImage`] with one upper-half block per cell, so each
/// cell shows two vertically stacked pixels.
#[derive(Debug, Clone, Copy)]
pub struct Thumbnail<'a> {
    image: &'a PreviewImage,
}

impl<'a> Thumbnail<'a> {
    pub fn new(image: &'a PreviewImage) -> Self {
        Self { image }
    }

    /// Terminal cells needed to show the whole thumbnail.
    pub fn size(&self) -> (u16, u16) {
        let width = u16::try_from(self.image.width()).unwrap_or(u16::MAX);
        let height = u16::try_from(self.image.height().div_ceil(2)).unwrap_or(u16::MAX);
        (width, height)
    }
}

impl Widget for Thumbnail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        for row in 0..height.min(area.height) {
            for col in 0..width.min(area.width) {
                let x = u32::from(col);
                let y = u32::from(row) * 2;
                let Some([r, g, b]) = self.image.pixel(x, y) else {
                    continue;
                };
                let bg = self
                    .image
                    .pixel(x, y + 1)
                    .map_or(Color::Reset, |[r, g, b]| Color::Rgb(r, g, b));
                buf[(area.x + col, area.y + row)]
                    .set_symbol("\u{2580}")
                    .set_fg(Color::Rgb(r, g, b))
                    .set_bg(bg);
            }
        }
    }
}

/// Everything the card shows.
#[derive(Debug, Clone, Copy)]
pub struct PreviewCard<'a> {
    pub username: &'a str,
    pub comment: &'a str,
    pub liked: bool,
    pub like_count: i64,
    pub image: Option<&'a PreviewImage>,
}

impl PreviewCard<'_> {
    /// Rows the card needs, borders included.
    pub fn height(&self) -> u16 {
        let thumb_rows = self.image.map_or(1, |img| Thumbnail::new(img).size().1);
        thumb_rows.max(3).saturating_add(2)
    }

    fn thumb_width(&self) -> u16 {
        self.image
            .map_or(PLACEHOLDER_WIDTH, |img| Thumbnail::new(img).size().0)
    }
}

impl Widget for PreviewCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Comment Preview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let [thumb_area, _gap, text_area, heart_area] = Layout::horizontal([
            Constraint::Length(self.thumb_width()),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(HEART_COLUMN),
        ])
        .areas(inner);

        match self.image {
            Some(image) => Thumbnail::new(image).render(thumb_area, buf),
            None => Paragraph::new("[img]")
                .style(Style::default().fg(Color::DarkGray))
                .render(thumb_area, buf),
        }

        let username = if self.username.is_empty() {
            SAMPLE_USERNAME
        } else {
            self.username
        };
        let comment = if self.comment.is_empty() {
            SAMPLE_COMMENT
        } else {
            self.comment
        };
        let text = vec![
            Line::from(Span::styled(
                username,
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(comment, Style::default().fg(Color::Gray))),
        ];
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);

        let heart = if self.liked {
            Span::styled(FILLED_HEART, Style::default().fg(Color::Red))
        } else {
            Span::styled(EMPTY_HEART, Style::default().fg(Color::DarkGray))
        };
        Paragraph::new(vec![
            Line::from(heart),
            Line::from(Span::styled(
                self.like_count.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .render(heart_area, buf);
    }
}
