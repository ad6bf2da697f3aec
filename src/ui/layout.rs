use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct AppLayout {
    pub status_bar: Rect,
    pub body: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(5),    // Page body
        ])
        .split(area);

    AppLayout {
        status_bar: chunks[0],
        body: chunks[1],
    }
}

pub struct PracticeLayout {
    pub heading: Rect,
    pub problem: Rect,
    pub input_box: Rect,
    pub hint: Rect,
    pub feedback: Rect,
}

pub fn compute_practice_layout(area: Rect) -> PracticeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top padding
            Constraint::Length(1), // Heading
            Constraint::Length(1),
            Constraint::Length(3), // Number boxes
            Constraint::Length(1),
            Constraint::Length(3), // Answer input
            Constraint::Length(1), // Submit hint
            Constraint::Length(1),
            Constraint::Length(1), // Feedback
            Constraint::Min(0),
        ])
        .split(area);

    PracticeLayout {
        heading: chunks[1],
        problem: chunks[3],
        input_box: centered(chunks[5], 16),
        hint: chunks[6],
        feedback: chunks[8],
    }
}

/// Horizontally center a column of `width` inside `area`.
pub fn centered(area: Rect, width: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    column
}
