//! Cell-buffer terminal rendering: colors, input events, fade timing and a
//! crossterm backend that flushes only what changed between frames.

pub mod buffer;
pub mod color;
pub mod event;
pub mod fade;
pub mod rect;
pub mod terminal;
pub mod text;

pub use buffer::{Buffer, Cell, Pen};
pub use color::Rgb;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use fade::{Easing, Fade};
pub use rect::Rect;
pub use terminal::Terminal;
