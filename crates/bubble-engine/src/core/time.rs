/// Decides how many simulation ticks a display frame runs.
///
/// Body velocities are in px/tick, so the source fully determines how fast
/// the bubbles appear to move on screen.
pub trait TickSource {
    /// Called once per display frame with the elapsed seconds.
    fn ticks(&mut self, frame_dt: f32) -> u32;
}

/// One tick per display frame, whatever the refresh rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EveryFrame;

impl TickSource for EveryFrame {
    fn ticks(&mut self, _frame_dt: f32) -> u32 {
        1
    }
}

/// Fixed timestep accumulator.
/// Keeps bubble speed independent of the display's refresh rate.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Seconds per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Cap on ticks per frame, so a long stall doesn't fast-forward.
    max_ticks: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self::with_max_ticks(dt, 10)
    }

    pub fn with_max_ticks(dt: f32, max_ticks: u32) -> Self {
        Self {
            dt: if dt > 0.0 { dt } else { 1.0 / 60.0 },
            accumulator: 0.0,
            max_ticks: max_ticks.max(1),
        }
    }

    /// Interpolation alpha between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

impl TickSource for FixedTimestep {
    fn ticks(&mut self, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt <= 0.0 {
            return 0;
        }
        self.accumulator = (self.accumulator + frame_dt).min(self.dt * self.max_ticks as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_frame_is_one_tick() {
        let mut src = EveryFrame;
        assert_eq!(src.ticks(1.0 / 144.0), 1);
        assert_eq!(src.ticks(0.5), 1);
    }

    #[test]
    fn accumulates_partial_frames() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.ticks(0.008), 0);
        assert_eq!(ts.ticks(0.010), 1);
    }

    #[test]
    fn high_refresh_display_runs_half_the_ticks() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let total: u32 = (0..120).map(|_| ts.ticks(1.0 / 120.0)).sum();
        assert!((59..=60).contains(&total), "ran {} ticks", total);
    }

    #[test]
    fn caps_long_stalls() {
        let mut ts = FixedTimestep::with_max_ticks(1.0 / 60.0, 4);
        assert_eq!(ts.ticks(1.0), 4);
    }

    #[test]
    fn ignores_bogus_deltas() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.ticks(-1.0), 0);
        assert_eq!(ts.ticks(f32::NAN), 0);
        let a = ts.alpha();
        assert!((0.0..=1.0).contains(&a), "alpha was {}", a);
    }
}
