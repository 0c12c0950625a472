pub const DEFAULT_PAGE: &str = "index.html";

/// Final segment of a location path; a trailing slash means the index page.
pub fn current_page(pathname: &str) -> &str {
    pathname
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(DEFAULT_PAGE)
}

pub fn is_active_link(href: Option<&str>, current_page: &str) -> bool {
    href == Some(current_page)
}

pub fn navbar_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_page_is_last_path_segment() {
        assert_eq!(current_page("/about.html"), "about.html");
        assert_eq!(current_page("/site/team/sponsors.html"), "sponsors.html");
    }

    #[test]
    fn root_and_trailing_slash_mean_index() {
        assert_eq!(current_page("/"), DEFAULT_PAGE);
        assert_eq!(current_page(""), DEFAULT_PAGE);
        assert_eq!(current_page("/gallery/"), DEFAULT_PAGE);
    }

    #[test]
    fn link_matches_on_exact_href() {
        assert!(is_active_link(Some("gallery.html"), "gallery.html"));
        assert!(!is_active_link(Some("./gallery.html"), "gallery.html"));
        assert!(!is_active_link(None, "index.html"));
    }

    #[test]
    fn navbar_threshold_is_strict() {
        assert!(!navbar_scrolled(49.0, 50.0));
        assert!(!navbar_scrolled(50.0, 50.0));
        assert!(navbar_scrolled(51.0, 50.0));
    }
}
