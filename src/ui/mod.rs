mod feedback;
mod game_over;
mod input_box;
mod layout;
mod problem;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Draw the whole page from the current snapshot.
pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());
    status_bar::render(frame, app_layout.status_bar, state);

    let page = &state.config.page;
    let block = Block::default()
        .title(format!(" {} ", page.title))
        .title_style(theme::Theme::title())
        .borders(Borders::ALL)
        .border_style(theme::Theme::border());
    let body = block.inner(app_layout.body);
    frame.render_widget(block, app_layout.body);

    let practice = state.practice();
    if practice.game_over() {
        game_over::render(frame, body, &practice);
        return;
    }

    let screen = layout::compute_practice_layout(body);
    frame.render_widget(
        Paragraph::new(state.config.ui.heading.as_str())
            .style(theme::Theme::heading())
            .alignment(Alignment::Center),
        screen.heading,
    );
    problem::render(frame, screen.problem, &practice);
    input_box::render(frame, screen.input_box, state);
    frame.render_widget(
        Paragraph::new(format!("[Enter] {}", state.config.ui.submit_label))
            .style(theme::Theme::hint())
            .alignment(Alignment::Center),
        screen.hint,
    );
    feedback::render(frame, screen.feedback, &practice);
}
