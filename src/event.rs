//! Event handling module.
//!
//! Converts crossterm keyboard, mouse, and resize events into
//! application actions. Keyboard mapping differs between browse mode and
//! form-input mode (where characters feed the focused field).

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::constants::POLL_TIMEOUT;

/// Pointer activity forwarded to the app with its screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    /// Pointer moved (hover tracking).
    Moved { col: u16, row: u16 },
    /// Left button pressed.
    Down { col: u16, row: u16 },
    /// Left button released.
    Up { col: u16, row: u16 },
    /// Wheel scrolled.
    WheelUp,
    WheelDown,
}

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Directional input, interpreted per view (scroll, cycle, move)
    Up,
    Down,
    Left,
    Right,
    /// Jump to the top of the page
    Top,
    /// Jump to the bottom of the page
    Bottom,
    /// Activate the current item
    Enter,
    /// Dismiss the current overlay / leave the form
    Back,
    /// Show help
    Help,
    /// Toggle the nav menu
    ToggleMenu,
    /// Cycle the product category filter
    CycleFilter,
    /// Switch the site language variant
    SwitchLanguage,
    /// Copy the contact details to the clipboard
    Copy,
    /// Jump straight to a section (nav shortcut keys)
    Section(usize),
    /// Move form focus forward / backward
    FocusNext,
    FocusPrev,
    /// Character input (form-input mode)
    Char(char),
    /// Backspace (form-input mode)
    Backspace,
    /// Pointer activity
    Mouse(MouseAction),
    /// Terminal resized to (cols, rows)
    Resize(u16, u16),
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    pub fn next(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            return Ok(match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.key_to_action(key),
                Event::Mouse(mouse) => mouse_to_action(mouse),
                Event::Resize(cols, rows) => Some(Action::Resize(cols, rows)),
                _ => None,
            });
        }
        Ok(None)
    }

    /// Polls for form-input events (text entry into the focused field).
    pub fn next_input(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            return Ok(match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.key_to_input_action(key)
                }
                Event::Mouse(mouse) => mouse_to_action(mouse),
                Event::Resize(cols, rows) => Some(Action::Resize(cols, rows)),
                _ => None,
            });
        }
        Ok(None)
    }

    /// Converts a key event to a form-input action.
    pub(crate) fn key_to_input_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),
            KeyCode::Up => Some(Action::Up),
            KeyCode::Down => Some(Action::Down),
            KeyCode::Left => Some(Action::Left),
            KeyCode::Right => Some(Action::Right),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Char(c)),
            _ => None,
        }
    }

    /// Converts a key event to a browse-mode action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        // Map keys to actions
        match key.code {
            // Navigation
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
            KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
            KeyCode::Enter => Some(Action::Enter),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),

            // Actions
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('m') => Some(Action::ToggleMenu),
            KeyCode::Char('f') => Some(Action::CycleFilter),
            KeyCode::Char('v') => Some(Action::SwitchLanguage),
            KeyCode::Char('c') => Some(Action::Copy),
            KeyCode::Char('?') | KeyCode::F(1) => Some(Action::Help),

            // Section shortcuts 1-5
            KeyCode::Char(c @ '1'..='5') => {
                Some(Action::Section(c as usize - '1' as usize))
            }

            // No matching action
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a mouse event to an action. Only the left button is used.
fn mouse_to_action(mouse: MouseEvent) -> Option<Action> {
    let (col, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Action::Mouse(MouseAction::Moved { col, row }))
        }
        MouseEventKind::Down(MouseButton::Left) => {
            Some(Action::Mouse(MouseAction::Down { col, row }))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(Action::Mouse(MouseAction::Up { col, row })),
        MouseEventKind::ScrollUp => Some(Action::Mouse(MouseAction::WheelUp)),
        MouseEventKind::ScrollDown => Some(Action::Mouse(MouseAction::WheelDown)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn make_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_ctrl_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_mouse_event(kind: MouseEventKind, col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_vim_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('j'))),
            Some(Action::Down)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('k'))),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('h'))),
            Some(Action::Left)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('l'))),
            Some(Action::Right)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('g'))),
            Some(Action::Top)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('G'))),
            Some(Action::Bottom)
        );
    }

    #[test]
    fn test_arrow_navigation_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Up)),
            Some(Action::Up)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Left)),
            Some(Action::Left)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Right)),
            Some(Action::Right)
        );
    }

    #[test]
    fn test_quit_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(
            handler.key_to_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_widget_action_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('m'))),
            Some(Action::ToggleMenu)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('f'))),
            Some(Action::CycleFilter)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('v'))),
            Some(Action::SwitchLanguage)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('c'))),
            Some(Action::Copy)
        );
    }

    #[test]
    fn test_section_shortcut_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('1'))),
            Some(Action::Section(0))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('5'))),
            Some(Action::Section(4))
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('6'))),
            None
        );
    }

    #[test]
    fn test_help_keys() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('?'))),
            Some(Action::Help)
        );
        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::F(1))),
            Some(Action::Help)
        );
    }

    #[test]
    fn test_unknown_key_returns_none() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_action(make_key_event(KeyCode::Char('z'))),
            None
        );
        assert_eq!(handler.key_to_action(make_key_event(KeyCode::F(12))), None);
    }

    #[test]
    fn test_input_mode_actions() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Enter)),
            Some(Action::Enter)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Esc)),
            Some(Action::Back)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Backspace)),
            Some(Action::Backspace)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('a'))),
            Some(Action::Char('a'))
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Tab)),
            Some(Action::FocusNext)
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::BackTab)),
            Some(Action::FocusPrev)
        );
    }

    #[test]
    fn test_input_mode_keeps_characters_literal() {
        let handler = EventHandler::new();

        // Browse shortcuts must not fire while typing into a field.
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('q'))),
            Some(Action::Char('q'))
        );
        assert_eq!(
            handler.key_to_input_action(make_key_event(KeyCode::Char('m'))),
            Some(Action::Char('m'))
        );
    }

    #[test]
    fn test_input_mode_ctrl_c_quits() {
        let handler = EventHandler::new();

        assert_eq!(
            handler.key_to_input_action(make_ctrl_key_event(KeyCode::Char('c'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_mouse_events_map_with_position() {
        assert_eq!(
            mouse_to_action(make_mouse_event(
                MouseEventKind::Down(MouseButton::Left),
                10,
                5
            )),
            Some(Action::Mouse(MouseAction::Down { col: 10, row: 5 }))
        );
        assert_eq!(
            mouse_to_action(make_mouse_event(MouseEventKind::Moved, 3, 4)),
            Some(Action::Mouse(MouseAction::Moved { col: 3, row: 4 }))
        );
        assert_eq!(
            mouse_to_action(make_mouse_event(MouseEventKind::ScrollDown, 0, 0)),
            Some(Action::Mouse(MouseAction::WheelDown))
        );
        // Right button is ignored.
        assert_eq!(
            mouse_to_action(make_mouse_event(
                MouseEventKind::Down(MouseButton::Right),
                0,
                0
            )),
            None
        );
    }
}
