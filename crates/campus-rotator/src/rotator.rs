//! Slide cursor over a fixed, non-empty slide sequence.

use campus_model::{CampusError, ConfigError, Result, Slide};
use serde::Serialize;

/// Why the current slide changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCause {
    Autoplay,
    Next,
    Previous,
    Jump,
}

/// Record of one index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
    pub cause: ChangeCause,
}

/// Owns the slide list and the current index.
///
/// The list never changes after construction and is never empty, so the
/// index is always valid.
#[derive(Debug, Clone)]
pub struct SlideRotator {
    slides: Vec<Slide>,
    current: usize,
    interval_ms: u64,
}

impl SlideRotator {
    /// Fails with [`ConfigError::EmptySlides`] or
    /// [`ConfigError::NonPositiveInterval`].
    pub fn new(slides: Vec<Slide>, interval_ms: u64) -> std::result::Result<Self, ConfigError> {
        if slides.is_empty() {
            return Err(ConfigError::EmptySlides);
        }
        if interval_ms == 0 {
            return Err(ConfigError::NonPositiveInterval {
                name: "autoplay_interval_ms",
                value: interval_ms,
            });
        }
        Ok(Self {
            slides,
            current: 0,
            interval_ms,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true for a constructed rotator.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Move to the following slide, wrapping at the end.
    pub fn advance(&mut self) -> SlideChange {
        self.step(ChangeCause::Autoplay, (self.current + 1) % self.len())
    }

    pub fn next(&mut self) -> SlideChange {
        self.step(ChangeCause::Next, (self.current + 1) % self.len())
    }

    pub fn previous(&mut self) -> SlideChange {
        let len = self.len();
        self.step(ChangeCause::Previous, (self.current + len - 1) % len)
    }

    /// Move to `index`. Out-of-range targets leave the index unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<SlideChange> {
        if index >= self.len() {
            return Err(CampusError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.step(ChangeCause::Jump, index))
    }

    fn step(&mut self, cause: ChangeCause, to: usize) -> SlideChange {
        let from = self.current;
        self.current = to;
        SlideChange { from, to, cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("/static/{i}.jpg"), format!("T{i}"), format!("S{i}")))
            .collect()
    }

    #[test]
    fn starts_at_first_slide() {
        let rotator = SlideRotator::new(slides(3), 5_000).unwrap();
        assert_eq!(rotator.current_index(), 0);
        assert_eq!(rotator.current_slide().title, "T0");
    }

    #[test]
    fn empty_or_zero_interval_rejected() {
        assert_eq!(
            SlideRotator::new(vec![], 5_000).unwrap_err(),
            ConfigError::EmptySlides
        );
        assert!(matches!(
            SlideRotator::new(slides(2), 0).unwrap_err(),
            ConfigError::NonPositiveInterval { value: 0, .. }
        ));
    }

    #[test]
    fn advance_wraps() {
        let mut rotator = SlideRotator::new(slides(2), 5_000).unwrap();
        assert_eq!(rotator.advance().to, 1);
        let change = rotator.advance();
        assert_eq!((change.from, change.to), (1, 0));
    }

    #[test]
    fn previous_wraps_backwards() {
        let mut rotator = SlideRotator::new(slides(4), 5_000).unwrap();
        assert_eq!(rotator.previous().to, 3);
        assert_eq!(rotator.previous().to, 2);
        assert_eq!(rotator.next().to, 3);
    }

    #[test]
    fn single_slide_advances_onto_itself() {
        let mut rotator = SlideRotator::new(slides(1), 5_000).unwrap();
        let change = rotator.advance();
        assert_eq!((change.from, change.to), (0, 0));
    }

    #[test]
    fn out_of_range_jump_keeps_index() {
        let mut rotator = SlideRotator::new(slides(3), 5_000).unwrap();
        rotator.jump_to(2).unwrap();
        let err = rotator.jump_to(3).unwrap_err();
        assert!(matches!(err, CampusError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(rotator.current_index(), 2);
    }
}
