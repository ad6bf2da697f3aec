use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// The answer field. It is the only input, so it always holds focus.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(field) = state.answer() else {
        return;
    };

    let line = if field.value.is_empty() {
        Line::from(Span::styled("?", Theme::placeholder()))
    } else {
        Line::from(Span::styled(field.value.as_str(), Theme::input_text()))
    };
    frame.render_widget(Paragraph::new(line), inner);

    if inner.width > 0 {
        let offset = field.value[..field.cursor].width() as u16;
        let cursor_x = (inner.x + offset).min(inner.right() - 1);
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
