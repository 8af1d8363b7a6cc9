/// Errors that can occur when building a carousel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("Carousel needs at least one image")]
    Empty,
}

/// Position within a fixed, circular list of slides.
///
/// The index is always in `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { index: 0, len })
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Selects slide `index`. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        } else {
            tracing::debug!(index, len = self.len, "ignoring out-of-range slide");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn four_slides_wrap_both_ways() {
        let mut c = Carousel::new(4).unwrap();
        assert_eq!(c.current(), 0);

        c.next();
        assert_eq!(c.current(), 1);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.current(), 0);

        c.previous();
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn next_then_previous_round_trips() {
        for len in 1..=6 {
            for start in 0..len {
                let mut c = Carousel::new(len).unwrap();
                c.jump_to(start);
                c.next();
                c.previous();
                assert_eq!(c.current(), start, "len={len}");
            }
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let len = 4;
        for start in 0..len {
            let mut c = Carousel::new(len).unwrap();
            c.jump_to(start);
            for _ in 0..len {
                c.next();
            }
            assert_eq!(c.current(), start);
            for _ in 0..len {
                c.previous();
            }
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn mixed_moves_stay_in_range() {
        let mut c = Carousel::new(4).unwrap();
        // deterministic pseudo-random walk
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if seed & 0x100 == 0 {
                c.next();
            } else {
                c.previous();
            }
            assert!(c.current() < c.len());
        }
    }

    #[test]
    fn jump_ignores_out_of_range() {
        let mut c = Carousel::new(4).unwrap();
        c.jump_to(2);
        assert!(c.is_current(2));
        c.jump_to(4);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut c = Carousel::new(1).unwrap();
        c.next();
        assert_eq!(c.current(), 0);
        c.previous();
        assert_eq!(c.current(), 0);
    }
}
