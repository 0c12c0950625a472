use log::LevelFilter;
use serde::Deserialize;

use crate::error::SiteError;

pub const CONFIG_ELEMENT_ID: &str = "motion-config";

const DEFAULT_PRELOADER_DELAY_MS: u32 = 4_000;
const DEFAULT_PRELOADER_FADE_MS: u32 = 500;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.05;
const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const DEFAULT_STAGGER_STEP_MS: u32 = 100;
const DEFAULT_NAVBAR_THRESHOLD_PX: f64 = 50.0;
const DEFAULT_STATS_THRESHOLD: f64 = 0.5;
const DEFAULT_COUNTER_DURATION_MS: f64 = 2_000.0;
const DEFAULT_KINETIC_EASE: f64 = 0.075;
const DEFAULT_KINETIC_SKEW_FACTOR: f64 = 0.15;
const DEFAULT_KINETIC_MAX_SKEW_DEG: f64 = 15.0;
const DEFAULT_KINETIC_PARALLAX_FACTOR: f64 = 0.5;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

const PRELOADER_DELAY_MS_BOUNDS: (u32, u32) = (0, 30_000);
const PRELOADER_FADE_MS_BOUNDS: (u32, u32) = (0, 10_000);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const STAGGER_STEP_MS_BOUNDS: (u32, u32) = (0, 2_000);
const NAVBAR_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 5_000.0);
const STATS_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const COUNTER_DURATION_MS_BOUNDS: (f64, f64) = (1.0, 60_000.0);
const KINETIC_EASE_BOUNDS: (f64, f64) = (0.001, 1.0);
const KINETIC_SKEW_FACTOR_BOUNDS: (f64, f64) = (0.0, 10.0);
const KINETIC_MAX_SKEW_DEG_BOUNDS: (f64, f64) = (0.0, 89.0);
const KINETIC_PARALLAX_FACTOR_BOUNDS: (f64, f64) = (0.0, 4.0);

/// Tuning knobs for every page behavior.
///
/// Values come from an optional JSON block embedded in the page; anything
/// missing, malformed or out of bounds keeps its default.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub preloader_delay_ms: u32,
    pub preloader_fade_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stagger_step_ms: u32,
    pub navbar_threshold_px: f64,
    pub stats_threshold: f64,
    pub counter_duration_ms: f64,
    pub kinetic_ease: f64,
    pub kinetic_skew_factor: f64,
    pub kinetic_max_skew_deg: f64,
    pub kinetic_parallax_factor: f64,
    pub log_level: LevelFilter,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            preloader_delay_ms: DEFAULT_PRELOADER_DELAY_MS,
            preloader_fade_ms: DEFAULT_PRELOADER_FADE_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            navbar_threshold_px: DEFAULT_NAVBAR_THRESHOLD_PX,
            stats_threshold: DEFAULT_STATS_THRESHOLD,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            kinetic_ease: DEFAULT_KINETIC_EASE,
            kinetic_skew_factor: DEFAULT_KINETIC_SKEW_FACTOR,
            kinetic_max_skew_deg: DEFAULT_KINETIC_MAX_SKEW_DEG,
            kinetic_parallax_factor: DEFAULT_KINETIC_PARALLAX_FACTOR,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMotionConfig {
    preloader_delay_ms: Option<u32>,
    preloader_fade_ms: Option<u32>,
    reveal_threshold: Option<f64>,
    reveal_root_margin: Option<String>,
    stagger_step_ms: Option<u32>,
    navbar_threshold_px: Option<f64>,
    stats_threshold: Option<f64>,
    counter_duration_ms: Option<f64>,
    kinetic_ease: Option<f64>,
    kinetic_skew_factor: Option<f64>,
    kinetic_max_skew_deg: Option<f64>,
    kinetic_parallax_factor: Option<f64>,
    log_level: Option<String>,
}

impl MotionConfig {
    /// Parses the embedded JSON block. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawMotionConfig = serde_json::from_str(raw)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawMotionConfig) -> Self {
        Self {
            preloader_delay_ms: u32_with_bounds(
                raw.preloader_delay_ms,
                DEFAULT_PRELOADER_DELAY_MS,
                PRELOADER_DELAY_MS_BOUNDS,
            ),
            preloader_fade_ms: u32_with_bounds(
                raw.preloader_fade_ms,
                DEFAULT_PRELOADER_FADE_MS,
                PRELOADER_FADE_MS_BOUNDS,
            ),
            reveal_threshold: f64_with_bounds(
                raw.reveal_threshold,
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            reveal_root_margin: raw
                .reveal_root_margin
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_REVEAL_ROOT_MARGIN.to_string()),
            stagger_step_ms: u32_with_bounds(
                raw.stagger_step_ms,
                DEFAULT_STAGGER_STEP_MS,
                STAGGER_STEP_MS_BOUNDS,
            ),
            navbar_threshold_px: f64_with_bounds(
                raw.navbar_threshold_px,
                DEFAULT_NAVBAR_THRESHOLD_PX,
                NAVBAR_THRESHOLD_PX_BOUNDS,
            ),
            stats_threshold: f64_with_bounds(
                raw.stats_threshold,
                DEFAULT_STATS_THRESHOLD,
                STATS_THRESHOLD_BOUNDS,
            ),
            counter_duration_ms: f64_with_bounds(
                raw.counter_duration_ms,
                DEFAULT_COUNTER_DURATION_MS,
                COUNTER_DURATION_MS_BOUNDS,
            ),
            kinetic_ease: f64_with_bounds(raw.kinetic_ease, DEFAULT_KINETIC_EASE, KINETIC_EASE_BOUNDS),
            kinetic_skew_factor: f64_with_bounds(
                raw.kinetic_skew_factor,
                DEFAULT_KINETIC_SKEW_FACTOR,
                KINETIC_SKEW_FACTOR_BOUNDS,
            ),
            kinetic_max_skew_deg: f64_with_bounds(
                raw.kinetic_max_skew_deg,
                DEFAULT_KINETIC_MAX_SKEW_DEG,
                KINETIC_MAX_SKEW_DEG_BOUNDS,
            ),
            kinetic_parallax_factor: f64_with_bounds(
                raw.kinetic_parallax_factor,
                DEFAULT_KINETIC_PARALLAX_FACTOR,
                KINETIC_PARALLAX_FACTOR_BOUNDS,
            ),
            log_level: parse_log_level(raw.log_level.as_deref(), DEFAULT_LOG_LEVEL),
        }
    }
}

fn u32_with_bounds(value: Option<u32>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn f64_with_bounds(value: Option<f64>, default: f64, bounds: (f64, f64)) -> f64 {
    value
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    match value
        .map(|value| value.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_block_yields_defaults() {
        let config = MotionConfig::from_json("  \n").expect("blank config parses");
        assert_eq!(config, MotionConfig::default());
        assert_eq!(config.preloader_delay_ms, 4_000);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn provided_values_within_bounds_are_used() {
        let config = MotionConfig::from_json(
            r#"{"preloaderDelayMs": 1200, "staggerStepMs": 60, "kineticEase": 0.2, "logLevel": "DEBUG"}"#,
        )
        .expect("valid config");

        assert_eq!(config.preloader_delay_ms, 1_200);
        assert_eq!(config.stagger_step_ms, 60);
        assert_eq!(config.kinetic_ease, 0.2);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.preloader_fade_ms, DEFAULT_PRELOADER_FADE_MS);
    }

    #[test]
    fn out_of_bounds_values_fall_back_to_defaults() {
        let config = MotionConfig::from_json(
            r#"{"revealThreshold": 1.5, "kineticMaxSkewDeg": 120, "counterDurationMs": 0, "revealRootMargin": "   "}"#,
        )
        .expect("valid config");

        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.kinetic_max_skew_deg, DEFAULT_KINETIC_MAX_SKEW_DEG);
        assert_eq!(config.counter_duration_ms, DEFAULT_COUNTER_DURATION_MS);
        assert_eq!(config.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN);
    }

    #[test]
    fn unknown_log_level_keeps_default() {
        let config = MotionConfig::from_json(r#"{"logLevel": "verbose"}"#).expect("valid config");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = MotionConfig::from_json(r#"{"theme": "neon"}"#).expect("valid config");
        assert_eq!(config, MotionConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = MotionConfig::from_json(r#"{"preloaderDelayMs": "#);
        assert!(matches!(result, Err(SiteError::Config(_))));
    }
}
