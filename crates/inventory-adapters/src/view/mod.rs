//! Headless presentation adapters.

mod recording;

pub use recording::{RecordingView, ViewEvent};
