//! The `Component` trait every screen implements.

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::action::Action;

/// A renderable UI element that reacts to keys and dispatched actions.
///
/// Key handling and action handling both may answer with a follow-up
/// [`Action`]; the app loop feeds it back through the dispatch queue.
pub trait Component: Send {
    /// React to a key press routed to this component.
    fn on_key(&mut self, _key: KeyEvent) -> Option<Action> {
        None
    }

    /// React to a dispatched action (snapshots, ticks).
    fn on_action(&mut self, _action: &Action) -> Option<Action> {
        None
    }

    /// Draw into the given frame area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// True while the component needs every key for itself (an open
    /// form). Global keybindings are bypassed then, except Ctrl+C.
    fn wants_keys(&self) -> bool {
        false
    }

    /// Inform the component whether it is the active screen.
    fn set_focus(&mut self, _focused: bool) {}
}
