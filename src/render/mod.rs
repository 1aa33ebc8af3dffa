//! Banner rendering and screen composition

pub(crate) mod banner;
pub(crate) mod glyphs;
pub(crate) mod screen;

pub(crate) use screen::{
    Screen, TerminalScreen, completion_frame, farewell_message, interrupted_message, timer_frame,
};
