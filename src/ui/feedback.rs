use crate::app::state::PracticeView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, practice: &PracticeView) {
    let paragraph = Paragraph::new(practice.feedback_message())
        .style(Theme::feedback(practice.feedback_kind()))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
