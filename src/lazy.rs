//! Lazy-render window.
//!
//! Decides which slide positions get their real content and which get the
//! placeholder.

use std::collections::BTreeSet;

/// Slide indices that are fully rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadedSet {
    indices: BTreeSet<usize>,
}

impl LoadedSet {
    /// Every index in `[0, count)`.
    pub fn all(count: usize) -> Self {
        Self {
            indices: (0..count).collect(),
        }
    }

    /// `current` plus `radius` neighbors on each side, wrapping around the
    /// ends. The window never exceeds `count` entries.
    pub fn window(current: usize, radius: usize, count: usize) -> Self {
        if count == 0 {
            return Self::default();
        }
        let current = current % count;
        // Past this radius the window covers every slide.
        let reach = radius.min(count);
        let mut indices = BTreeSet::new();
        indices.insert(current);
        for k in 1..=reach {
            let k = k % count;
            indices.insert((current + k) % count);
            indices.insert((current + count - k) % count);
        }
        Self { indices }
    }

    pub fn compute(current: usize, lazy: bool, radius: usize, count: usize) -> Self {
        let set = if lazy {
            Self::window(current, radius, count)
        } else {
            Self::all(count)
        };
        log::trace!(
            "loaded window for slide {current}/{count} (lazy={lazy}, radius={radius}): {:?}",
            set.indices
        );
        set
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}
