use crate::app::state::{ConnectionStatus, FeedbackKind};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Color::Indexed(99))
            .add_modifier(Modifier::BOLD)
    }

    pub fn number() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn operator() -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn score() -> Style {
        Style::default().fg(Color::Indexed(99)).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn connection(status: ConnectionStatus) -> Style {
        let fg = match status {
            ConnectionStatus::Connected => Color::Green,
            ConnectionStatus::Connecting => Color::Yellow,
            ConnectionStatus::Disconnected => Color::Red,
        };
        Style::default().fg(fg).bg(Color::DarkGray)
    }

    /// Style for the feedback line. Total over every feedback state.
    pub fn feedback(kind: FeedbackKind) -> Style {
        match kind {
            FeedbackKind::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            FeedbackKind::Error => Style::default().fg(Color::Red),
            FeedbackKind::Warning => Style::default().fg(Color::Yellow),
            FeedbackKind::Neutral => Style::default(),
        }
    }
}
