//! Backend client for the Capstone MDA shell.
//!
//! There is no real backend yet; this crate holds the one outbound call the
//! UI makes (the connectivity probe) and the preferences that say where the
//! backend is expected to live.

pub mod prefs;
pub mod probe;
