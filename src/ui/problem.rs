use crate::app::state::PracticeView;
use crate::ui::theme::Theme;
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

const BOX_WIDTH: u16 = 8;
const OPERATOR_WIDTH: u16 = 5;

/// Two operand boxes with `+` and `=` between and after them.
pub fn render(frame: &mut Frame, area: Rect, practice: &PracticeView) {
    let [left, plus, right, equals] = Layout::horizontal([
        Constraint::Length(BOX_WIDTH),
        Constraint::Length(OPERATOR_WIDTH),
        Constraint::Length(BOX_WIDTH),
        Constraint::Length(OPERATOR_WIDTH),
    ])
    .flex(Flex::Center)
    .areas(area);

    render_number(frame, left, practice.num1());
    render_operator(frame, plus, "+");
    render_number(frame, right, practice.num2());
    render_operator(frame, equals, "=");
}

fn render_number(frame: &mut Frame, area: Rect, value: i64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let paragraph = Paragraph::new(value.to_string())
        .style(Theme::number())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_operator(frame: &mut Frame, area: Rect, op: &str) {
    // Operators sit on the middle row of the boxes
    let row = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let paragraph = Paragraph::new(op)
        .style(Theme::operator())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, row);
}
