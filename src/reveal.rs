//! One-shot reveal bookkeeping.
//!
//! Each registered element moves from pending to revealed exactly once. The
//! DOM half feeds intersection notifications in and gets back the delay to
//! wait before adding the reveal class.

use std::collections::HashMap;

/// Delay before revealing an element with stagger index `index`.
pub fn stagger_delay_ms(index: u32, unit_ms: u32) -> u32 {
    index.saturating_mul(unit_ms)
}

/// Reads a `data-delay` value the way `parseInt(v, 10)` would: leading
/// whitespace, an optional sign, then the leading digits (`"2.5"` is 2,
/// `"3px"` is 3). Absent or digit-less values mean 0; negatives clamp to 0.
pub fn parse_delay_index(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else { return 0 };
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if negative {
        return 0;
    }
    rest.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(u32::from(d - b'0')))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealAction {
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending { index: u32 },
    Revealed,
}

/// Tracks which observed elements are still waiting for their reveal.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    unit_ms: u32,
    elements: HashMap<usize, Phase>,
}

impl RevealTracker {
    pub fn new(unit_ms: u32) -> Self {
        Self {
            unit_ms,
            elements: HashMap::new(),
        }
    }

    /// Registers an element. Re-registering a revealed element is a no-op.
    pub fn register(&mut self, id: usize, index: u32) {
        self.elements.entry(id).or_insert(Phase::Pending { index });
    }

    /// First intersection of a pending element yields its action; anything
    /// after that (or an unknown id) yields `None`.
    pub fn on_intersect(&mut self, id: usize) -> Option<RevealAction> {
        let phase = self.elements.get_mut(&id)?;
        match *phase {
            Phase::Pending { index } => {
                *phase = Phase::Revealed;
                Some(RevealAction {
                    delay_ms: stagger_delay_ms(index, self.unit_ms),
                })
            }
            Phase::Revealed => None,
        }
    }

    pub fn is_revealed(&self, id: usize) -> bool {
        matches!(self.elements.get(&id), Some(Phase::Revealed))
    }

    pub fn pending_count(&self) -> usize {
        self.elements
            .values()
            .filter(|p| matches!(p, Phase::Pending { .. }))
            .count()
    }

    /// Marks everything revealed at once (reduced motion).
    pub fn reveal_all(&mut self) -> Vec<usize> {
        let mut ids: Vec<usize> = self
            .elements
            .iter_mut()
            .filter(|(_, p)| matches!(p, Phase::Pending { .. }))
            .map(|(id, p)| {
                *p = Phase::Revealed;
                *id
            })
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_index_times_unit() {
        for n in 0..10 {
            assert_eq!(stagger_delay_ms(n, 120), n * 120);
        }
    }

    #[test]
    fn delay_attribute_parsing() {
        assert_eq!(parse_delay_index(None), 0);
        assert_eq!(parse_delay_index(Some("")), 0);
        assert_eq!(parse_delay_index(Some("3")), 3);
        assert_eq!(parse_delay_index(Some(" 2 ")), 2);
        assert_eq!(parse_delay_index(Some("-4")), 0);
        assert_eq!(parse_delay_index(Some("abc")), 0);
        assert_eq!(parse_delay_index(Some("2.5")), 2);
        assert_eq!(parse_delay_index(Some("3px")), 3);
        assert_eq!(parse_delay_index(Some("+4")), 4);
        assert_eq!(parse_delay_index(Some("px3")), 0);
        assert_eq!(parse_delay_index(Some("99999999999")), u32::MAX);
    }

    #[test]
    fn fires_once_per_element() {
        let mut t = RevealTracker::new(120);
        t.register(0, 0);
        t.register(1, 2);
        assert_eq!(t.pending_count(), 2);

        assert_eq!(t.on_intersect(1), Some(RevealAction { delay_ms: 240 }));
        assert!(t.is_revealed(1));
        for _ in 0..5 {
            assert_eq!(t.on_intersect(1), None);
        }

        assert_eq!(t.on_intersect(0), Some(RevealAction { delay_ms: 0 }));
        assert_eq!(t.pending_count(), 0);
    }

    #[test]
    fn revealed_never_returns_to_pending() {
        let mut t = RevealTracker::new(120);
        t.register(7, 1);
        t.on_intersect(7);
        t.register(7, 1);
        assert!(t.is_revealed(7));
        assert_eq!(t.on_intersect(7), None);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut t = RevealTracker::new(120);
        assert_eq!(t.on_intersect(42), None);
        assert!(!t.is_revealed(42));
    }

    #[test]
    fn reveal_all_only_touches_pending() {
        let mut t = RevealTracker::new(120);
        t.register(0, 0);
        t.register(1, 1);
        t.register(2, 2);
        t.on_intersect(1);
        assert_eq!(t.reveal_all(), vec![0, 2]);
        assert_eq!(t.pending_count(), 0);
        assert_eq!(t.on_intersect(0), None);
    }
}
