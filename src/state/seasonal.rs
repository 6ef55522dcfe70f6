//! Seasonal falling-emoji animation state

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use std::time::Duration;

/// Season derived from the month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    pub fn emojis(&self) -> &'static [&'static str] {
        match self {
            Self::Spring => &["🌸", "💐", "🌷"],
            Self::Summer => &["☀️", "🍉", "🏖️"],
            Self::Fall => &["🍂", "🍁", "🌰"],
            Self::Winter => &["❄️", "☃️", "🧣"],
        }
    }
}

/// Holiday emoji for a (month, day), months 1-based
pub fn holiday_emoji(month: u32, day: u32) -> Option<&'static str> {
    match (month, day) {
        (1, 1) => Some("🎆"),
        (2, 14) => Some("❤️"),
        (3, 17) => Some("☘️"),
        (10, 31) => Some("🎃"),
        (12, 25) => Some("🎄"),
        (12, 31) => Some("🎆"),
        _ => None,
    }
}

/// Emoji set for a date: the holiday if there is one, else the season's
pub fn emojis_for(date: NaiveDate) -> Vec<&'static str> {
    match holiday_emoji(date.month(), date.day()) {
        Some(emoji) => vec![emoji],
        None => Season::from_month(date.month()).emojis().to_vec(),
    }
}

/// One emoji on its way down
#[derive(Debug, Clone, PartialEq)]
pub struct FallingItem {
    pub emoji: &'static str,
    /// Horizontal position, 0.0..100.0 percent of the width
    pub left_pct: f32,
    pub fall_duration: Duration,
    pub size: u16,
    pub spawned_at: Duration,
}

impl FallingItem {
    /// Fraction of the fall completed at `elapsed`, clamped to 0.0..=1.0
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let age = elapsed.saturating_sub(self.spawned_at);
        (age.as_secs_f32() / self.fall_duration.as_secs_f32()).min(1.0)
    }

    pub fn has_landed(&self, elapsed: Duration) -> bool {
        elapsed >= self.spawned_at + self.fall_duration
    }
}

/// Spawns emoji at a shrinking interval for a fixed window, then lets them land
#[derive(Debug)]
pub struct SeasonalAnimation {
    emojis: Vec<&'static str>,
    interval: Duration,
    next_spawn: Duration,
    next_adjust: Duration,
    stop_at: Duration,
    spawning: bool,
    pub items: Vec<FallingItem>,
}

impl SeasonalAnimation {
    const INITIAL_INTERVAL: Duration = Duration::from_millis(1000);
    const INTERVAL_STEP: Duration = Duration::from_millis(100);
    const MIN_INTERVAL: Duration = Duration::from_millis(200);
    const ADJUST_EVERY: Duration = Duration::from_millis(3000);
    const SPAWN_WINDOW: Duration = Duration::from_millis(15000);

    pub fn new(emojis: Vec<&'static str>) -> Self {
        Self {
            emojis,
            interval: Self::INITIAL_INTERVAL,
            next_spawn: Self::INITIAL_INTERVAL,
            next_adjust: Self::ADJUST_EVERY,
            stop_at: Self::SPAWN_WINDOW,
            spawning: true,
            items: Vec::new(),
        }
    }

    /// Animation for today's local date
    pub fn for_today() -> Self {
        Self::new(emojis_for(chrono::Local::now().date_naive()))
    }

    pub fn is_spawning(&self) -> bool {
        self.spawning
    }

    /// Nothing left to spawn or draw
    pub fn is_finished(&self) -> bool {
        !self.is_spawning() && self.items.is_empty()
    }

    /// Advance to `elapsed` (time since the animation started).
    ///
    /// Timer events are replayed in order; on ties a spawn fires before an
    /// interval change, which fires before the stop.
    pub fn update<R: Rng>(&mut self, elapsed: Duration, rng: &mut R) {
        while self.spawning {
            let next = self.next_spawn.min(self.next_adjust).min(self.stop_at);
            if next > elapsed {
                break;
            }
            if self.next_spawn == next {
                let at = self.next_spawn;
                self.spawn(at, rng);
                self.next_spawn += self.interval;
            } else if self.next_adjust == next {
                // shrinking the interval restarts the spawn timer
                self.interval = self
                    .interval
                    .saturating_sub(Self::INTERVAL_STEP)
                    .max(Self::MIN_INTERVAL);
                self.next_spawn = self.next_adjust + self.interval;
                self.next_adjust += Self::ADJUST_EVERY;
            } else {
                self.spawning = false;
            }
        }

        self.items.retain(|item| !item.has_landed(elapsed));
    }

    fn spawn<R: Rng>(&mut self, at: Duration, rng: &mut R) {
        if self.emojis.is_empty() {
            return;
        }
        let emoji = self.emojis[rng.gen_range(0..self.emojis.len())];
        self.items.push(FallingItem {
            emoji,
            left_pct: rng.gen_range(0.0..100.0),
            fall_duration: Duration::from_millis(rng.gen_range(10_000..15_000)),
            size: rng.gen_range(15..30),
            spawned_at: at,
        });
    }
}
