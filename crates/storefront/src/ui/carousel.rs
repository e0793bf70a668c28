//! Home page slide rotation.
//!
//! Pure state: the front-end owns the timer and calls [`Carousel::tick`]
//! every [`AUTO_ADVANCE`].

use std::time::Duration;

/// Interval between automatic slide changes.
pub const AUTO_ADVANCE: Duration = Duration::from_secs(5);

/// Index of the visible slide, wrapping at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next slide, wrapping to the first.
    pub const fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Move to the previous slide, wrapping to the last.
    pub const fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.current = if self.current == 0 {
                self.len - 1
            } else {
                self.current - 1
            };
        }
        self.current
    }

    /// Timer tick. Same as [`Self::next`].
    pub const fn tick(&mut self) -> usize {
        self.next()
    }
}
