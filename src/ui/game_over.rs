use crate::app::state::PracticeView;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, practice: &PracticeView) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled("¡Juego Terminado!", Theme::heading())),
        Line::default(),
        Line::from(vec![
            Span::raw("Tu puntuación final es: "),
            Span::styled(practice.score().to_string(), Theme::score()),
        ]),
        Line::default(),
        Line::from(Span::styled("[Enter] Jugar de Nuevo", Theme::hint())),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
