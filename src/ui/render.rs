use crate::clock::Clock;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Banner;
use crate::ui::layout::layout_regions;
use crate::ui::result_panel::body_paragraph;
use crate::ui::theme::{ACCENT, FOREGROUND, GLOBAL_BORDER, TEXT_MUTED};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const PLACEHOLDER: &str = "Paste the link";

pub fn draw<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let regions = layout_regions(frame.area());

    let banner = app.banner();
    frame.render_widget(
        Banner::new(banner.visible_text(), banner.cursor_visible()).widget(),
        regions.banner,
    );

    draw_input(frame, app, regions.input);

    let body = body_paragraph(app.submission(), app.spinner_tick())
        .scroll((app.scroll(), 0))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(body, regions.body);

    frame.render_widget(Footer::new().widget(regions.footer), regions.footer);
}

fn draw_input<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let button = if app.submission().is_pending() {
        " Analyzing... "
    } else {
        " Analyze "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title_bottom(
            Line::from(Span::styled(
                button,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Leading space for padding.
    let text_width = inner.width.saturating_sub(1) as usize;
    let field = app.url_field();
    let line = if field.is_empty() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(PLACEHOLDER, Style::default().fg(TEXT_MUTED)),
        ])
    } else {
        let (visible, _) = field.viewport(text_width);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(visible.to_string(), Style::default().fg(FOREGROUND)),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width > 1 && inner.height > 0 {
        let (_, cursor_col) = field.viewport(text_width);
        frame.set_cursor_position(Position::new(
            inner.x + 1 + cursor_col as u16,
            inner.y,
        ));
    }
}
