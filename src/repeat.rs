//! String repetition with amortized-doubling construction.
//!
//! The break normalizer emits runs of newline characters; building them by
//! doubling keeps that linear in the output size. [`RepeatCache`] is an
//! explicit, caller-owned memo for repeated calls with the same unit; it is
//! never shared globally, so concurrent extractions stay independent.

/// Repeats `unit` `count` times.
///
/// `count == 1` and `count == 2` are direct fast paths. Larger counts build
/// the result by doubling a chunk and appending it on the low bit of the
/// remaining count, then truncating to the exact length. The truncation
/// point is always a multiple of the unit's byte length, so it always lands
/// on a character boundary.
#[must_use]
pub fn repeat(unit: &str, count: usize) -> String {
    if count == 1 {
        return unit.to_owned();
    }
    if count == 2 {
        let mut out = String::with_capacity(unit.len() * 2);
        out.push_str(unit);
        out.push_str(unit);
        return out;
    }

    let target = unit.len() * count;
    let mut out = String::with_capacity(target);
    let mut chunk = unit.to_owned();
    let mut remaining = count;

    while out.len() < target && remaining > 1 {
        if remaining & 1 == 1 {
            out.push_str(&chunk);
        }
        remaining >>= 1;
        let doubled = chunk.clone();
        chunk.push_str(&doubled);
    }

    out.push_str(&chunk);
    out.truncate(target);
    out
}

/// A single-slot memo for the last-used unit.
///
/// Reusing a cache across calls with the same unit avoids rebuilding the
/// repeated string from scratch; switching units resets the slot so state
/// never leaks between units.
#[derive(Debug, Default)]
pub struct RepeatCache {
    unit: String,
    grown: String,
}

impl RepeatCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeats `unit` `count` times, reusing the grown buffer when the unit
    /// matches the previous call.
    #[must_use]
    pub fn repeat(&mut self, unit: &str, count: usize) -> String {
        let target = unit.len() * count;
        if target == 0 {
            return String::new();
        }

        if self.unit != unit {
            self.unit.clear();
            self.unit.push_str(unit);
            self.grown.clear();
        }
        if self.grown.is_empty() {
            self.grown.push_str(unit);
        }
        while self.grown.len() < target {
            let doubled = self.grown.clone();
            self.grown.push_str(&doubled);
        }

        self.grown[..target].to_owned()
    }
}
