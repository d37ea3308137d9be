use serde::{Deserialize, Serialize};

/// Physics and animation constants for the bubble simulation.
///
/// Velocities are in px/tick, so every value here is tuned for one tick per
/// display frame at roughly 60 Hz. The numbers aim for visual plausibility,
/// not physical accuracy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Per-tick velocity decay for fast (thrown) bodies.
    pub friction: f32,
    /// Per-tick velocity decay for slow, idly floating bodies.
    pub ambient_friction: f32,
    /// Speed above which `friction` applies instead of `ambient_friction`.
    pub fast_speed: f32,
    /// Bounce energy retention for walls and body pairs.
    pub restitution: f32,
    /// Full width of the random drift added to each velocity axis per tick.
    pub float_force: f32,
    /// Bodies slower than this get a `float_boost` nudge so they never stop.
    pub min_speed: f32,
    pub float_boost: f32,
    /// Hard speed cap for free, non-hovered bodies.
    pub max_speed: f32,
    /// Release velocity = pointer delta of the last move × this.
    pub throw_multiplier: f32,
    /// Velocity multiplier applied each tick while hovered.
    pub hover_damping: f32,
    /// Hovered velocity components below this snap to zero.
    pub stop_epsilon: f32,
    /// Full width of the random initial velocity range per axis.
    pub initial_speed: f32,
    /// Fraction of the overlap each body is pushed when neither is dragged.
    pub overlap_push: f32,
    /// Extra factor on the push when the other body is being dragged.
    pub drag_push: f32,
    pub breathing_step: f32,
    pub breathing_amplitude: f32,
    /// Scale used while hovered or dragged.
    pub active_scale: f32,
    pub z_active: i32,
    pub z_base: i32,
    /// Pointer travel (px) under which a drag release counts as a tap.
    pub tap_slop: f32,
    /// Minimum spacing between accepted device-motion samples.
    pub motion_interval_ms: f64,
    /// Summed per-axis acceleration change that counts as a shake.
    pub shake_threshold: f32,
    pub shake_cooldown_ms: f64,
    /// Speed kick given to each free body on a shake.
    pub shake_impulse: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            friction: 0.96,
            ambient_friction: 0.995,
            fast_speed: 2.0,
            restitution: 0.7,
            float_force: 0.08,
            min_speed: 0.5,
            float_boost: 0.02,
            max_speed: 8.0,
            throw_multiplier: 1.5,
            hover_damping: 0.8,
            stop_epsilon: 0.01,
            initial_speed: 1.5,
            overlap_push: 0.5,
            drag_push: 2.0,
            breathing_step: 0.03,
            breathing_amplitude: 0.02,
            active_scale: 1.1,
            z_active: 1000,
            z_base: 1,
            tap_slop: 6.0,
            motion_interval_ms: 100.0,
            shake_threshold: 15.0,
            shake_cooldown_ms: 500.0,
            shake_impulse: 6.0,
        }
    }
}

/// Engine configuration, provided by the embedding page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the engine's random number generator.
    pub seed: u64,
    /// Margin (px) kept free on every side when spawning.
    pub spawn_padding: f32,
    /// Diameter used when a size hint is missing or malformed.
    pub default_diameter: f32,
    /// `Some(dt)` runs physics at a fixed rate of `dt` seconds per tick;
    /// `None` runs exactly one tick per display frame.
    pub fixed_dt: Option<f32>,
    /// Most ticks a single frame may run under a fixed rate.
    pub max_ticks_per_frame: u32,
    pub tuning: Tuning,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            spawn_padding: 20.0,
            default_diameter: 120.0,
            fixed_dt: None,
            max_ticks_per_frame: 10,
            tuning: Tuning::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn partial_tuning_keeps_other_defaults() {
        let json = r#"{
            "seed": 7,
            "fixed_dt": 0.016,
            "tuning": { "restitution": 1.0, "max_speed": 12.5 }
        }"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.fixed_dt, Some(0.016));
        assert_eq!(config.tuning.restitution, 1.0);
        assert_eq!(config.tuning.max_speed, 12.5);
        assert_eq!(config.tuning.friction, 0.96);
        assert_eq!(config.spawn_padding, 20.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(EngineConfig::from_json("{ \"seed\": \"nope\" }").is_err());
    }
}
