pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

/// A click on the overlay closes it only when the event target is the overlay
/// itself; clicks on its content (the enlarged image) bubble up with a
/// different target.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, overlay: &T) -> bool {
    target == Some(overlay)
}

/// Open/closed state of the gallery overlay.
#[derive(Debug, Default)]
pub struct LightboxState {
    current: Option<LightboxImage>,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn open(&mut self, image: LightboxImage) {
        self.current = Some(image);
    }

    /// Returns the image that was showing, if the overlay was open.
    pub fn close(&mut self) -> Option<LightboxImage> {
        self.current.take()
    }

    pub fn should_close_on_key(&self, key: &str) -> bool {
        key == ESCAPE_KEY && self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> LightboxImage {
        LightboxImage {
            src: "/img/team.jpg".to_string(),
            alt: "Team photo".to_string(),
        }
    }

    #[test]
    fn open_keeps_image_source_and_alt() {
        let mut lightbox = LightboxState::default();
        lightbox.open(image());

        assert!(lightbox.is_open());
        assert_eq!(lightbox.close(), Some(image()));
    }

    #[test]
    fn backdrop_click_closes_but_inner_click_does_not() {
        let overlay = "gallery-lightbox";
        let inner_image = "lightbox-img";

        assert!(is_backdrop_click(Some(&overlay), &overlay));
        assert!(!is_backdrop_click(Some(&inner_image), &overlay));
        assert!(!is_backdrop_click(None, &overlay));
    }

    #[test]
    fn escape_only_closes_an_open_lightbox() {
        let mut lightbox = LightboxState::default();
        assert!(!lightbox.should_close_on_key(ESCAPE_KEY));

        lightbox.open(image());
        assert!(!lightbox.should_close_on_key("Enter"));
        assert!(lightbox.should_close_on_key(ESCAPE_KEY));
    }

    #[test]
    fn closing_a_closed_lightbox_reports_no_change() {
        let mut lightbox = LightboxState::default();
        assert_eq!(lightbox.close(), None);
    }
}
