use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::HandlerConnected { link } => {
            state.bridge.attach(link);
            state.status = ConnectionStatus::Connected;
            state.dirty = true;
            vec![]
        }
        AppEvent::HandlerDisconnected { reason } => {
            state.bridge.detach(reason);
            state.status = ConnectionStatus::Disconnected;
            state.dirty = true;
            vec![]
        }
        AppEvent::HandlerError { error } => {
            state.bridge.record_connect_error(error);
            state.status = ConnectionStatus::Disconnected;
            vec![]
        }
        AppEvent::StateDelta(delta) => {
            state.bridge.apply_delta(delta);
            vec![]
        }
        AppEvent::Tick => vec![],
    }
}

fn handle_terminal(state: &mut AppState, cevent: CEvent) -> Vec<Action> {
    match cevent {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
    if ctrl_c || key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }

    if state.practice().game_over() {
        return match key.code {
            KeyCode::Enter => vec![Action::PlayAgain],
            _ => vec![],
        };
    }

    let Some(field) = state.form.field_mut(ANSWER_FIELD) else {
        return vec![];
    };
    match key.code {
        KeyCode::Enter => return vec![Action::SubmitAnswer],
        KeyCode::Char(c) => {
            if !field.insert_char(c) {
                return vec![];
            }
        }
        KeyCode::Backspace => field.delete_back(),
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => return vec![],
    }
    state.dirty = true;
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::event::PRACTICE_SLICE;
    use crate::bridge::store::StateDelta;
    use crate::config::AppConfig;
    use serde_json::json;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_numeric_answer() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "4a2!");
        handle_event(&mut state, key(KeyCode::Backspace));
        type_text(&mut state, "5");
        assert_eq!(state.answer().unwrap().value, "45");
    }

    #[test]
    fn test_enter_submits() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "8");
        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), vec![Action::SubmitAnswer]);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_game_over_enter_plays_again() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(
            &mut state,
            AppEvent::StateDelta(StateDelta::new(
                PRACTICE_SLICE,
                [("game_over".to_string(), json!(true))].into_iter().collect(),
            )),
        );
        type_text(&mut state, "12");
        assert_eq!(state.answer().unwrap().value, "");
        assert_eq!(handle_event(&mut state, key(KeyCode::Enter)), vec![Action::PlayAgain]);
    }

    #[test]
    fn test_connection_lifecycle() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(
            &mut state,
            AppEvent::HandlerError {
                error: "refused".into(),
            },
        );
        assert_eq!(state.status, ConnectionStatus::Disconnected);
        assert_eq!(state.bridge.connect_errors().len(), 1);

        let (tx, _rx) = mpsc::unbounded_channel();
        handle_event(&mut state, AppEvent::HandlerConnected { link: tx });
        assert_eq!(state.status, ConnectionStatus::Connected);
        assert!(state.bridge.connect_errors().is_empty());

        handle_event(
            &mut state,
            AppEvent::HandlerDisconnected {
                reason: "reset".into(),
            },
        );
        assert!(!state.bridge.is_connected());
        assert_eq!(state.bridge.connect_errors()[0].reason, "reset");
    }
}
