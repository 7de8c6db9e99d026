pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Inline styles that cancel CSS-driven motion on an element.
pub const STILL_STYLES: [(&str, &str); 2] = [("transition", "none"), ("animation", "none")];

/// System motion preference, read once at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    NoPreference,
    Reduce,
}

impl MotionPreference {
    pub fn from_query_match(matches: bool) -> Self {
        if matches {
            Self::Reduce
        } else {
            Self::NoPreference
        }
    }

    pub fn is_reduced(self) -> bool {
        self == Self::Reduce
    }
}
