//! View-model state machines for the Calldeck dashboard
//!
//! Everything here is sans-IO: the list and batch views hand out
//! generation tokens and consume fetch results; the playback view drives
//! an injected [`playback::AudioSink`]. The binaries and tests supply the
//! actual HTTP and audio backends.

pub mod batch;
pub mod list;
pub mod playback;

pub use batch::BatchView;
pub use list::{FetchPhase, ListView};
pub use playback::{AudioSink, PlaybackPhase, PlaybackRate, PlaybackView};
