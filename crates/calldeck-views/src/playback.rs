//! Recording playback state machine
//!
//! The native media element is abstracted behind [`AudioSink`] so this
//! machine is testable without a real decoder. Progress callbacks arrive
//! at arbitrary intervals from the media backend and may repeat; every
//! transition here is idempotent against that.

use tracing::debug;

/// Port to the actual audio backend
///
/// Implementations only execute commands; all state lives in
/// [`PlaybackView`]. `seek_to` takes an absolute position in seconds.
pub trait AudioSink {
    fn play(&mut self);
    fn pause(&mut self);
    fn seek_to(&mut self, seconds: f64);
    fn set_rate(&mut self, rate: f64);
}

/// Playback lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    #[default]
    Paused,
    Playing,
}

/// Discrete playback-rate steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackRate {
    Half,
    #[default]
    Normal,
    OneAndHalf,
}

impl PlaybackRate {
    /// Multiplier handed to the sink
    pub fn multiplier(&self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackRate::Half => "0.5x",
            PlaybackRate::Normal => "1.0x",
            PlaybackRate::OneAndHalf => "1.5x",
        }
    }
}

/// Playback state for one recording in the detail view
#[derive(Debug)]
pub struct PlaybackView<S: AudioSink> {
    sink: S,
    phase: PlaybackPhase,
    /// Unknown until the backend reports metadata
    duration: Option<f64>,
    position: f64,
    /// 0-100, updated only while duration is known
    progress_pct: f64,
    rate: PlaybackRate,
}

impl<S: AudioSink> PlaybackView<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            phase: PlaybackPhase::Paused,
            duration: None,
            position: 0.0,
            progress_pct: 0.0,
            rate: PlaybackRate::Normal,
        }
    }

    /// Start playback. Only valid while paused; repeated calls are no-ops.
    pub fn play(&mut self) {
        if self.phase == PlaybackPhase::Playing {
            return;
        }
        self.sink.play();
        self.phase = PlaybackPhase::Playing;
    }

    /// Pause playback. Only valid while playing; repeated calls are no-ops.
    pub fn pause(&mut self) {
        if self.phase != PlaybackPhase::Playing {
            return;
        }
        self.sink.pause();
        self.phase = PlaybackPhase::Paused;
    }

    /// Progress callback from the backend.
    ///
    /// Recomputes the 0-100 percentage. A zero or non-finite duration
    /// (metadata not loaded yet) leaves the percentage untouched - the
    /// 0/0 NaN of the original implementation must never surface.
    pub fn on_time_update(&mut self, position: f64, duration: f64) {
        self.position = position;
        if duration.is_finite() && duration > 0.0 {
            self.duration = Some(duration);
            self.progress_pct = (position / duration * 100.0).clamp(0.0, 100.0);
        } else {
            debug!("time update before duration is known; progress unchanged");
        }
    }

    /// Jump to a 0-100 point in the recording.
    ///
    /// Only valid once the duration is known; before that the request is
    /// dropped rather than handed to the sink with a garbage target.
    pub fn seek(&mut self, pct: f64) {
        let Some(duration) = self.duration else {
            return;
        };
        let pct = pct.clamp(0.0, 100.0);
        let target = pct / 100.0 * duration;
        self.sink.seek_to(target);
        self.position = target;
        self.progress_pct = pct;
    }

    /// Natural end of the recording
    pub fn on_ended(&mut self) {
        self.phase = PlaybackPhase::Paused;
        if let Some(duration) = self.duration {
            self.position = duration;
            self.progress_pct = 100.0;
        }
    }

    /// Switch to a discrete rate step
    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
        self.sink.set_rate(rate.multiplier());
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    pub fn progress_pct(&self) -> f64 {
        self.progress_pct
    }

    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }
}
