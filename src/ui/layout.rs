use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub banner: Rect,
    pub input: Rect,
    pub body: Rect,
    pub footer: Rect,
}

const BANNER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Fixed-height banner, input and footer; the body takes what is left and
/// shrinks to zero first on tiny terminals.
pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    Regions {
        banner: chunks[0],
        input: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}
