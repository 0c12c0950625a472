//! Behavior logic shared by the browser wiring in `frontend`.
//!
//! Nothing in here touches the DOM, so the math and bookkeeping behind each
//! page effect can be exercised by plain host-side tests.

pub mod counter;
pub mod kinetic;
pub mod lightbox;
pub mod navigation;
pub mod reveal;
pub mod theme;

/// Formats a number the way a browser stringifies it for text and CSS.
pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let exponent = format!("{value:e}");
        return match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exponent,
        };
    }

    // `-0 + 0` is `+0`, which keeps "-0" out of the output.
    format!("{}", value + 0.0)
}
