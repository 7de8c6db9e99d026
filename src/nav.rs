/// Open/closed state of the mobile navigation overlay.
///
/// The overlay class, `aria-expanded` and body scroll lock are all derived
/// from the one flag, so they cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Value for `document.body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

/// The element id an in-page link points at, if any.
///
/// Only `#fragment` hrefs qualify; a bare `#` has no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(nav: &NavState) {
        if nav.is_open() {
            assert_eq!(nav.aria_expanded(), "true");
            assert_eq!(nav.body_overflow(), "hidden");
        } else {
            assert_eq!(nav.aria_expanded(), "false");
            assert_eq!(nav.body_overflow(), "");
        }
    }

    #[test]
    fn starts_closed() {
        let nav = NavState::new();
        assert!(!nav.is_open());
        assert_consistent(&nav);
    }

    #[test]
    fn any_sequence_stays_consistent() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut nav = NavState::new();
        let mut expected = false;
        for _ in 0..500 {
            match rng.u8(0..3) {
                0 => {
                    nav.toggle();
                    expected = !expected;
                }
                1 => {
                    nav.open();
                    expected = true;
                }
                _ => {
                    nav.close();
                    expected = false;
                }
            }
            assert_eq!(nav.is_open(), expected);
            assert_consistent(&nav);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = NavState::new();
        nav.close();
        nav.close();
        assert!(!nav.is_open());
        nav.open();
        nav.open();
        assert!(nav.is_open());
    }

    #[test]
    fn anchor_targets() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about#team"), None);
        assert_eq!(anchor_target("https://example.com"), None);
    }
}
