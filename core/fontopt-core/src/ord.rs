//! Total ordering for float fields (made by FontLab https://www.fontlab.com/)

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// `f32` compared with IEEE-754 `totalOrder`, so it can sit in `Ord` keys.
///
/// Two values are equal exactly when their bit patterns match, which keeps
/// `Eq`, `Ord` and `Hash` consistent (`-0.0 != 0.0`, `NaN == NaN`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Total(pub f32);

impl PartialEq for Total {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Total {}

impl PartialOrd for Total {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Total {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Total {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

pub(crate) fn total(value: Option<f32>) -> Option<Total> {
    value.map(Total)
}
