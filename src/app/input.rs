use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Submit,
    Quit,
    AddField,
    RemoveField,
    NextCell,
    PrevCell,
    NextRow,
    PrevRow,
    ResetStatus,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            KeyCode::Char('n') | KeyCode::Char('N') => KeyCommand::AddField,
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::RemoveField,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Enter => KeyCommand::NextCell,
        KeyCode::BackTab => KeyCommand::PrevCell,
        KeyCode::Down => KeyCommand::NextRow,
        KeyCode::Up => KeyCommand::PrevRow,
        KeyCode::Esc => KeyCommand::ResetStatus,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert!(matches!(classify(&ctrl('s')), KeyCommand::Submit));
        assert!(matches!(classify(&ctrl('q')), KeyCommand::Quit));
        assert!(matches!(classify(&ctrl('n')), KeyCommand::AddField));
        assert!(matches!(classify(&ctrl('d')), KeyCommand::RemoveField));
        assert!(matches!(classify(&ctrl('z')), KeyCommand::None));
    }

    #[test]
    fn plain_keys_navigate_or_edit() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(classify(&tab), KeyCommand::NextCell));
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert!(matches!(classify(&left), KeyCommand::Edit(_)));
        let ch = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(matches!(classify(&ch), KeyCommand::Edit(_)));
    }
}
