//! Loop-aware index arithmetic.
//!
//! Every function here is total: an empty slide list maps every index to 0
//! and single-slide lists never move.

/// Paging rules for a slide list of a given length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paging {
    pub count: usize,
    pub looping: bool,
}

impl Paging {
    pub const fn new(count: usize, looping: bool) -> Self {
        Self { count, looping }
    }

    /// Bring an arbitrary index into `[0, count)`: wrap when looping, clamp
    /// otherwise.
    pub fn normalize(&self, index: usize) -> usize {
        if self.count == 0 {
            0
        } else if self.looping {
            index % self.count
        } else {
            index.min(self.count - 1)
        }
    }

    /// The slide after `index`. Stays put on the last slide without looping.
    pub fn next(&self, index: usize) -> usize {
        if self.count == 0 {
            return 0;
        }
        let index = self.normalize(index);
        if self.looping {
            (index + 1) % self.count
        } else {
            (index + 1).min(self.count - 1)
        }
    }

    /// The slide before `index`. Stays put on the first slide without looping.
    pub fn previous(&self, index: usize) -> usize {
        if self.count == 0 {
            return 0;
        }
        let index = self.normalize(index);
        if self.looping {
            (index + self.count - 1) % self.count
        } else {
            index.saturating_sub(1)
        }
    }

    pub fn step(&self, index: usize, direction: Direction) -> usize {
        match direction {
            Direction::Forward => self.next(index),
            Direction::Backward => self.previous(index),
        }
    }

    /// Display index used for pagination.
    pub fn effective(&self, index: usize) -> usize {
        if self.looping && self.count > 1 {
            index % self.count
        } else {
            index
        }
    }
}

/// Which neighbor autoplay moves to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}
