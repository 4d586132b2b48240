use crate::ui::theme::{GLOBAL_BORDER, TEXT_MUTED};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " Enter: Analyze │ ^U: Clear │ ↑↓ PgUp/PgDn: Scroll │ Esc: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM);
        let content_width = area.width.saturating_sub(2) as usize;

        // Char count, not byte count: the separators are multi-byte.
        let hints_width = HINTS.chars().count();
        let version = format!("buster v{} ", VERSION);
        let version_width = version.chars().count();

        let mut spans = vec![Span::styled(HINTS, text_style)];
        // The hints win when both do not fit.
        if hints_width + version_width <= content_width {
            let padding = content_width - hints_width - version_width;
            spans.push(Span::styled(" ".repeat(padding), text_style));
            spans.push(Span::styled(version, text_style));
        }

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::widgets::Widget;

    fn render_row(width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buffer = Buffer::empty(area);
        Footer::new().widget(area).render(area, &mut buffer);
        (0..width).map(|x| buffer[(x, 1)].symbol()).collect()
    }

    #[test]
    fn hints_and_version_fit_default_width() {
        let row = render_row(80);
        assert!(row.contains("Esc: Quit"));
        assert!(row.contains(&format!("buster v{}", VERSION)));
        assert!(!row.contains("Quitbuster"));
    }

    #[test]
    fn version_dropped_when_too_narrow() {
        let row = render_row(70);
        assert!(row.contains("Esc: Quit"));
        assert!(!row.contains("buster v"));
    }
}
