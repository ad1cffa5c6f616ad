//! Status bar widget: one line with the selected image, the last image error
//! and the last submit outcome.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Outcome of the most recent submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The last submit passed validation.
    Valid,
    /// The last submit failed; carries the summary.
    Invalid(String),
}

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// File name of the selected image, if any.
    pub image_name: Option<String>,
    /// Why the last image could not be loaded, if it failed.
    pub image_error: Option<String>,
    /// The last submit outcome, if any.
    pub status: Option<Status>,
}

/// Renders a one-line status bar.
///
/// Display format:
/// - `image: me.png  Comment is valid` (outcome in Green)
/// - `image: none  cannot load image x.png  2 field(s) failed validation`
///   (image error in Yellow, outcome in Red)
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let cyan = Style::default().fg(Color::Cyan);

    let mut spans: Vec<Span> = vec![Span::styled(
        format!("image: {}", ctx.image_name.as_deref().unwrap_or("none")),
        cyan,
    )];

    if let Some(reason) = &ctx.image_error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            reason.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(status) = &ctx.status {
        spans.push(Span::raw("  "));
        spans.push(match status {
            Status::Valid => Span::styled("Comment is valid", Style::default().fg(Color::Green)),
            Status::Invalid(summary) => {
                Span::styled(summary.as_str(), Style::default().fg(Color::Red))
            }
        });
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_no_image_and_no_status() {
        let output = render_status_bar(&StatusBarContext::default(), 40);
        assert!(output.contains("image: none"));
        assert!(!output.contains("valid"));
    }

    #[test]
    fn renders_valid_outcome() {
        let ctx = StatusBarContext {
            image_name: Some("me.png".into()),
            status: Some(Status::Valid),
            ..StatusBarContext::default()
        };
        let output = render_status_bar(&ctx, 50);
        assert!(output.contains("image: me.png"));
        assert!(output.contains("Comment is valid"));
    }

    #[test]
    fn renders_failure_summary() {
        let ctx = StatusBarContext {
            status: Some(Status::Invalid("2 field(s) failed validation".into())),
            ..StatusBarContext::default()
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("2 field(s) failed validation"));
    }

    #[test]
    fn renders_image_error() {
        let ctx = StatusBarContext {
            image_error: Some("cannot load image x.png".into()),
            ..StatusBarContext::default()
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("cannot load image x.png"));
    }

    #[test]
    fn renders_image_error_next_to_outcome() {
        let ctx = StatusBarContext {
            image_name: None,
            image_error: Some("cannot load image x.png".into()),
            status: Some(Status::Valid),
        };
        let output = render_status_bar(&ctx, 80);
        assert!(output.contains("cannot load image x.png"));
        assert!(output.contains("Comment is valid"));
    }
}
