use std::sync::{Arc, Mutex};

use crate::{
    core::Seconds,
    driver::Ticker,
    error::{KeepsakeError, KeepsakeResult},
};

/// Auto-advance cadence in the hands-free mode.
pub const AUTO_ADVANCE_INTERVAL: Seconds = Seconds(4.0);

/// The three card slots the 3-card view shows at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CardWindow {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

/// Cyclic index over a fixed-size ordered media list. Pure modular
/// arithmetic; rendering and drag handling live with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> KeepsakeResult<Self> {
        if len == 0 {
            return Err(KeepsakeError::validation(
                "carousel requires at least one item",
            ));
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step by `delta` items with wraparound in both directions. Returns the
    /// new center index.
    pub fn advance(&mut self, delta: isize) -> usize {
        let len = self.len as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
        self.index
    }

    pub fn window(&self) -> CardWindow {
        CardWindow {
            left: (self.index + self.len - 1) % self.len,
            center: self.index,
            right: (self.index + 1) % self.len,
        }
    }
}

/// Spawn the hands-free auto-advance for a shared carousel. Active only in
/// one presentation mode; drop the ticker on unmount or mode change.
pub fn auto_advance(
    carousel: Arc<Mutex<Carousel>>,
    interval: Seconds,
) -> KeepsakeResult<Ticker> {
    Ticker::every(interval, move || {
        let mut c = carousel
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        c.advance(1);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn wraps_in_both_directions() {
        let mut c = Carousel::new(12).unwrap();
        for _ in 0..11 {
            c.advance(1);
        }
        assert_eq!(c.index(), 11);
        assert_eq!(c.advance(1), 0);

        assert_eq!(c.advance(-1), 11);
    }

    #[test]
    fn large_negative_steps_stay_in_range() {
        let mut c = Carousel::new(5).unwrap();
        assert_eq!(c.advance(-13), 2);
        assert_eq!(c.advance(27), 4);
    }

    #[test]
    fn window_straddles_the_ends() {
        let mut c = Carousel::new(12).unwrap();
        assert_eq!(
            c.window(),
            CardWindow {
                left: 11,
                center: 0,
                right: 1
            }
        );
        c.advance(-1);
        assert_eq!(
            c.window(),
            CardWindow {
                left: 10,
                center: 11,
                right: 0
            }
        );
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(Carousel::new(0).is_err());
        assert!(!Carousel::new(1).unwrap().is_empty());
    }

    #[test]
    fn auto_advance_rotates_until_dropped() {
        let carousel = Arc::new(Mutex::new(Carousel::new(12).unwrap()));
        let ticker = auto_advance(Arc::clone(&carousel), Seconds(0.01)).unwrap();

        std::thread::sleep(Duration::from_millis(60));
        drop(ticker);
        let settled = carousel.lock().unwrap().index();
        assert!(settled >= 2);

        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(carousel.lock().unwrap().index(), settled);
    }
}
