use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    ConfirmDelete,
    Activity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    SelectNext,
    SelectPrev,
    JumpTop,
    JumpBottom,
    ToggleChecked,
    EnterSearch,
    DeleteChecked,
    Reload,
    ShowActivity,
    CloseActivity,
    SearchInput(char),
    SearchBackspace,
    SubmitSearch,
    LeaveSearch,
    ConfirmYes,
    ConfirmNo,
}

pub fn map_key_to_command(key: KeyEvent, mode: InputMode) -> Option<Command> {
    match mode {
        InputMode::Normal => map_normal_key(key),
        InputMode::Search => map_search_key(key),
        InputMode::ConfirmDelete => map_confirm_key(key),
        InputMode::Activity => map_activity_key(key),
    }
}

fn map_normal_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::SelectPrev),
        KeyCode::Char('g') => Some(Command::JumpTop),
        KeyCode::Char('G') => Some(Command::JumpBottom),
        KeyCode::Char(' ') => Some(Command::ToggleChecked),
        KeyCode::Char('/') => Some(Command::EnterSearch),
        KeyCode::Char('d') => Some(Command::DeleteChecked),
        KeyCode::Char('r') => Some(Command::Reload),
        KeyCode::Char('L') => Some(Command::ShowActivity),
        _ => None,
    }
}

fn map_search_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Enter => Some(Command::SubmitSearch),
        KeyCode::Esc => Some(Command::LeaveSearch),
        KeyCode::Backspace => Some(Command::SearchBackspace),
        KeyCode::Char(c) => Some(Command::SearchInput(c)),
        _ => None,
    }
}

fn map_confirm_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Some(Command::ConfirmYes),
        KeyCode::Char('n') | KeyCode::Esc => Some(Command::ConfirmNo),
        _ => None,
    }
}

fn map_activity_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('L') => Some(Command::CloseActivity),
        _ => None,
    }
}
