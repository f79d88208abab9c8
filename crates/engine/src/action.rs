//! Driver actions - one tagged variant per event source

use crate::core::RuleEngine;
use crate::types::GameAction;

/// A logical event handed to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Directional or spawn request from an input device
    Control(GameAction),
    /// The fall timer fired
    Timer,
    /// Stop driving the engine
    Quit,
}

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Action {
    /// Parse from a command word: an engine action name, `"timer"` or `"quit"`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::Action;
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::Control(GameAction::MoveLeft)));
    /// assert_eq!(Action::from_str("timer"), Some(Action::Timer));
    /// assert_eq!(Action::from_str("jump"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "timer" => Some(Action::Timer),
            "quit" => Some(Action::Quit),
            other => GameAction::from_str(other).map(Action::Control),
        }
    }
}

/// Apply one action to the engine.
///
/// A timer tick spawns a piece when none is falling and otherwise moves the
/// falling piece down one row.
pub fn dispatch(engine: &mut RuleEngine, action: Action) -> Flow {
    match action {
        Action::Control(game_action) => {
            engine.apply_action(game_action);
            Flow::Continue
        }
        Action::Timer => {
            if engine.has_active() {
                engine.move_down();
            } else {
                engine.ensure_active_piece();
            }
            Flow::Continue
        }
        Action::Quit => Flow::Quit,
    }
}
