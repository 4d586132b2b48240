use crate::clock::Clock;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown.
const PAGE_LINES: i32 = 10;

pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.url_field_mut().clear();
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit();
        }
        KeyCode::Backspace => app.url_field_mut().backspace(),
        KeyCode::Delete => app.url_field_mut().delete(),
        KeyCode::Left => app.url_field_mut().move_left(),
        KeyCode::Right => app.url_field_mut().move_right(),
        KeyCode::Home => app.url_field_mut().home(),
        KeyCode::End => app.url_field_mut().end(),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-PAGE_LINES),
        KeyCode::PageDown => app.scroll_by(PAGE_LINES),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.url_field_mut().insert_char(ch),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
