use super::js_number;

/// Start, target and duration read from a counter element's data attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterSpec {
    pub start: f64,
    pub target: f64,
    pub duration_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterFrame {
    Running(f64),
    Finished(f64),
}

impl CounterFrame {
    pub fn text(self) -> String {
        match self {
            Self::Running(value) | Self::Finished(value) => js_number(value),
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl CounterSpec {
    /// Reads raw `data-target`, `data-start` and `data-duration` values.
    ///
    /// A missing or unparseable target counts as 0. A start of 0 or garbage
    /// means 0, and a duration that is not strictly positive falls back to
    /// `default_duration_ms`. Only decimal notation is accepted, so hex
    /// (`0x10`) or binary literals count as unparseable.
    pub fn from_attributes(
        target: Option<&str>,
        start: Option<&str>,
        duration: Option<&str>,
        default_duration_ms: f64,
    ) -> Self {
        let target = target.and_then(parse_js_number).unwrap_or(0.0);
        let start = start.and_then(parse_js_number).unwrap_or(0.0);
        let duration_ms = duration
            .and_then(parse_js_number)
            .filter(|value| *value > 0.0)
            .unwrap_or(default_duration_ms);

        Self {
            start,
            target,
            duration_ms,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        let progress = self.progress(elapsed_ms);

        if progress >= 1.0 {
            return CounterFrame::Finished(self.target);
        }

        let value = self.start + (self.target - self.start) * ease_out_expo(progress);
        CounterFrame::Running(js_round(value))
    }
}

/// Exponential ease-out: fast start, long deceleration, exactly 1 at the end.
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

// Halves round toward positive infinity, matching `Math.round`.
fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn parse_js_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(start: f64, target: f64, duration_ms: f64) -> CounterSpec {
        CounterSpec {
            start,
            target,
            duration_ms,
        }
    }

    #[test]
    fn full_progress_displays_exact_target() {
        let counter = spec(0.0, 100.0, 1_000.0);
        let frame = counter.frame(1_000.0);

        assert_eq!(frame, CounterFrame::Finished(100.0));
        assert_eq!(frame.text(), "100");
    }

    #[test]
    fn zero_progress_displays_start() {
        let counter = spec(25.0, 100.0, 1_000.0);
        assert_eq!(counter.frame(0.0), CounterFrame::Running(25.0));
    }

    #[test]
    fn frames_before_start_time_stay_at_start() {
        let counter = spec(0.0, 100.0, 1_000.0);
        assert_eq!(counter.frame(-8.0), CounterFrame::Running(0.0));
    }

    #[test]
    fn displayed_value_never_decreases_for_rising_counter() {
        let counter = spec(3.0, 1_250.0, 2_000.0);
        let mut previous = f64::MIN;

        for step in 0..=2_100 {
            let value = match counter.frame(f64::from(step)) {
                CounterFrame::Running(value) | CounterFrame::Finished(value) => value,
            };
            assert!(value >= previous, "value dropped at {step}ms");
            previous = value;
        }
    }

    #[test]
    fn ease_out_expo_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert!((ease_out_expo(0.5) - (1.0 - 1.0 / 32.0)).abs() < 1e-12);
    }

    #[test]
    fn running_values_round_half_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(7.49), 7.0);
    }

    #[test]
    fn attributes_fall_back_to_defaults() {
        let counter = CounterSpec::from_attributes(Some("500"), None, None, 2_000.0);
        assert_eq!(counter, spec(0.0, 500.0, 2_000.0));

        let counter = CounterSpec::from_attributes(Some("abc"), Some("x"), Some("0"), 2_000.0);
        assert_eq!(counter, spec(0.0, 0.0, 2_000.0));

        let counter = CounterSpec::from_attributes(Some(" 80 "), Some("20"), Some("-5"), 1_500.0);
        assert_eq!(counter, spec(20.0, 80.0, 1_500.0));
    }

    #[test]
    fn prefixed_literals_are_not_numbers() {
        let counter = CounterSpec::from_attributes(Some("0x10"), Some("0b11"), Some("0x20"), 2_000.0);
        assert_eq!(counter, spec(0.0, 0.0, 2_000.0));
    }

    #[test]
    fn explicit_start_and_duration_are_used() {
        let counter = CounterSpec::from_attributes(Some("2024"), Some("1990"), Some("3000"), 2_000.0);
        assert_eq!(counter, spec(1_990.0, 2_024.0, 3_000.0));
        assert_eq!(counter.progress(1_500.0), 0.5);
    }

    #[test]
    fn fractional_target_snaps_without_rounding() {
        let counter = spec(0.0, 4.8, 1_000.0);
        assert_eq!(counter.frame(5_000.0).text(), "4.8");
        assert!(counter.frame(5_000.0).is_finished());
    }
}
