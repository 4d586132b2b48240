//! Hero banner: the typewriter line under the product name.

use crate::ui::theme::{ACCENT, FOREGROUND, GLOBAL_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const CURSOR: &str = "▌";

pub struct Banner<'a> {
    text: &'a str,
    cursor_visible: bool,
}

impl<'a> Banner<'a> {
    pub fn new(text: &'a str, cursor_visible: bool) -> Self {
        Self {
            text,
            cursor_visible,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD);
        // Blank cell when hidden so the line does not jitter.
        let cursor = if self.cursor_visible { CURSOR } else { " " };
        let line = Line::from(vec![
            Span::styled(self.text, text_style),
            Span::styled(cursor, Style::default().fg(ACCENT)),
        ]);

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled(
                    " BUSTER ",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
                .title_alignment(Alignment::Center)
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
