/// Edge reported when the sticky header should change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderChange {
    Show,
    Hide,
}

/// Sticky header visibility, re-evaluated on every scroll tick.
#[derive(Debug, Clone)]
pub struct HeaderState {
    offset: f64,
    visible: bool,
}

impl HeaderState {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// `intro_bottom` is the intro's bottom edge relative to the viewport top.
    pub fn update(&mut self, intro_bottom: f64) -> Option<HeaderChange> {
        let should_show = intro_bottom < self.offset;
        match (should_show, self.visible) {
            (true, false) => {
                self.visible = true;
                Some(HeaderChange::Show)
            }
            (false, true) => {
                self.visible = false;
                Some(HeaderChange::Hide)
            }
            _ => None,
        }
    }
}
