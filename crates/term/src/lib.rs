//! Terminal front end.
//!
//! Renders a core [`Snapshot`](blockfall_core::Snapshot) into a framebuffer and
//! flushes it with crossterm. Nothing here feeds back into the engine.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
