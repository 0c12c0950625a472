use super::js_number;
use crate::config::MotionConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KineticParams {
    /// Fraction of the remaining gap the tracked scroll closes each frame.
    pub ease: f64,
    pub skew_factor: f64,
    pub max_skew_deg: f64,
    pub parallax_factor: f64,
}

impl From<&MotionConfig> for KineticParams {
    fn from(config: &MotionConfig) -> Self {
        Self {
            ease: config.kinetic_ease,
            skew_factor: config.kinetic_skew_factor,
            max_skew_deg: config.kinetic_max_skew_deg,
            parallax_factor: config.kinetic_parallax_factor,
        }
    }
}

/// Layout numbers sampled from the section and the window each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub offset_top: f64,
    pub offset_height: f64,
    pub viewport_height: f64,
}

impl SectionGeometry {
    /// Scroll offset at which the section's middle sits in the viewport's middle.
    pub fn center_point(&self) -> f64 {
        self.offset_top - self.viewport_height / 2.0 + self.offset_height / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KineticFrame {
    pub left_offset: f64,
    pub right_offset: f64,
    pub skew_deg: f64,
}

impl KineticFrame {
    pub fn left_transform(&self) -> String {
        track_transform(self.left_offset, self.skew_deg)
    }

    pub fn right_transform(&self) -> String {
        track_transform(self.right_offset, self.skew_deg)
    }
}

fn track_transform(offset: f64, skew_deg: f64) -> String {
    format!(
        "translate3d({}px, 0, 0) skewX({}deg)",
        js_number(offset),
        js_number(skew_deg)
    )
}

#[derive(Clone, Debug)]
pub struct KineticScroll {
    params: KineticParams,
    current_scroll: f64,
}

impl KineticScroll {
    pub fn new(params: KineticParams, initial_scroll: f64) -> Self {
        Self {
            params,
            current_scroll: initial_scroll,
        }
    }

    /// Advances one frame toward `scroll_y` and returns the track transforms.
    pub fn step(&mut self, scroll_y: f64, geometry: SectionGeometry) -> KineticFrame {
        let diff = scroll_y - self.current_scroll;
        self.current_scroll += diff * self.params.ease;

        let max_skew = self.params.max_skew_deg;
        let skew_deg = (diff * self.params.skew_factor).clamp(-max_skew, max_skew);

        let distance = scroll_y - geometry.center_point();

        KineticFrame {
            left_offset: -distance * self.params.parallax_factor,
            right_offset: distance * self.params.parallax_factor,
            skew_deg,
        }
    }
}
