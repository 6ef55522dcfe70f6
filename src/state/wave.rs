//! Wave hover effect for the title text

use std::time::{Duration, Instant};

/// One keyframe: move to `value` over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
struct Keyframe {
    value: f32,
    duration: Duration,
}

const KEYFRAMES: [Keyframe; 2] = [
    Keyframe {
        value: -5.0,
        duration: Duration::from_millis(500),
    },
    Keyframe {
        value: 5.0,
        duration: Duration::from_millis(500),
    },
];

/// Vertical translation units per terminal row
const UNITS_PER_ROW: f32 = 5.0;

/// Title wave animation state
#[derive(Debug, Default)]
pub struct WaveState {
    started: Option<Instant>,
}

impl WaveState {
    /// Start (or restart) the wave
    pub fn play(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn is_playing(&self) -> bool {
        self.started
            .is_some_and(|start| start.elapsed() < Self::total_duration())
    }

    pub fn total_duration() -> Duration {
        KEYFRAMES.iter().map(|k| k.duration).sum()
    }

    /// Current translation rounded to whole rows (negative is up)
    pub fn row_offset(&self) -> i16 {
        match self.started {
            Some(start) => Self::row_offset_at(start.elapsed()),
            None => 0,
        }
    }

    /// Row translation `elapsed` into the wave
    pub fn row_offset_at(elapsed: Duration) -> i16 {
        (Self::offset_at(elapsed) / UNITS_PER_ROW).round() as i16
    }

    /// Translation `elapsed` into the wave; back at rest once it completes
    pub fn offset_at(elapsed: Duration) -> f32 {
        let mut from = 0.0;
        let mut frame_start = Duration::ZERO;
        for frame in KEYFRAMES {
            let frame_end = frame_start + frame.duration;
            if elapsed < frame_end {
                let t = (elapsed - frame_start).as_secs_f32() / frame.duration.as_secs_f32();
                let eased = simple_easing::sine_in_out(t);
                return from + (frame.value - from) * eased;
            }
            from = frame.value;
            frame_start = frame_end;
        }
        0.0
    }
}
