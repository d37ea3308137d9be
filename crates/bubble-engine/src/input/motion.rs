use glam::Vec3;
use crate::api::config::Tuning;

/// Turns a stream of device-motion samples into occasional shake triggers.
///
/// Samples arriving faster than `motion_interval_ms` are dropped before
/// comparison; a detected shake then locks out further shakes for
/// `shake_cooldown_ms`.
#[derive(Debug, Clone, Default)]
pub struct ShakeDetector {
    last_sample: Option<Vec3>,
    last_sample_ms: Option<f64>,
    last_shake_ms: Option<f64>,
}

impl ShakeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample. Returns the shake strength (summed per-axis
    /// acceleration change) when this sample counts as a shake.
    pub fn sample(&mut self, accel: Vec3, time_ms: f64, tuning: &Tuning) -> Option<f32> {
        if !accel.is_finite() {
            return None;
        }
        if let Some(last) = self.last_sample_ms {
            if time_ms - last < tuning.motion_interval_ms {
                return None;
            }
        }
        self.last_sample_ms = Some(time_ms);
        let previous = self.last_sample.replace(accel)?;

        let delta = (accel - previous).abs().element_sum();
        if delta <= tuning.shake_threshold {
            return None;
        }
        if let Some(last) = self.last_shake_ms {
            if time_ms - last < tuning.shake_cooldown_ms {
                return None;
            }
        }
        self.last_shake_ms = Some(time_ms);
        Some(delta)
    }
}
