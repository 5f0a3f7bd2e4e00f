use super::profile::Tuning;

/// Quartic ease-out on `t` in [0, 1]. Input outside the range is clamped.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv * inv
}

/// Animation length for a jump of `distance` px, bounded by `cap_ms`.
#[inline]
pub fn scroll_duration_ms(distance: f64, rate: f64, cap_ms: f64) -> f64 {
    (distance.abs() * rate).clamp(0.0, cap_ms)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    pub position: f64,
    pub finished: bool,
}

/// One eased scroll from `start` toward `start + distance`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    pub start: f64,
    pub distance: f64,
    pub duration_ms: f64,
    pub started_at_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, now_ms: f64, tuning: &Tuning) -> Self {
        let distance = to - from;
        Self {
            start: from,
            distance,
            duration_ms: scroll_duration_ms(distance, tuning.scroll_rate, tuning.scroll_cap_ms),
            started_at_ms: now_ms,
        }
    }

    pub fn target(&self) -> f64 {
        self.start + self.distance
    }

    /// Linear progress at `now_ms`. Frame timestamps may predate the start
    /// by a fraction of a frame, so the lower end is clamped too.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn step(&self, now_ms: f64) -> ScrollStep {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return ScrollStep {
                position: self.target(),
                finished: true,
            };
        }
        ScrollStep {
            position: self.start + self.distance * ease_out_quart(t),
            finished: false,
        }
    }
}
