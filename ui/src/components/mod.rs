//! Shared components for the shell. Only the Pico.css set lives here for
//! now; screen-specific markup stays in the screens module.
pub mod pico;
