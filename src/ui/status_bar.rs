use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let practice = state.practice();
    let mut parts: Vec<Span> = vec![
        Span::styled(
            format!(
                " Ejercicio: {} / {} ",
                practice.exercise(),
                state.config.ui.total_exercises
            ),
            Theme::status_bar(),
        ),
        Span::styled(
            format!("| Puntuación: {} ", practice.score()),
            Theme::status_bar(),
        ),
    ];

    let connection = format!(" [{}] ", state.status_line());
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + connection.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(connection, Theme::connection(state.status)));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
