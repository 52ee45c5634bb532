//! termfolio-ui: the interactive pieces of the terminal window.
//!
//! The command line widget (buffer editing, history recall, tab completion)
//! and the tick-driven timing primitives used for cosmetic delays. Nothing
//! here draws; the front end renders the state these types expose.

pub mod animation;
pub mod completion;
pub mod input_line;
pub mod timer;

pub use animation::Typewriter;
pub use completion::{Completion, complete};
pub use input_line::{InputAction, InputLine};
pub use timer::TimerQueue;
