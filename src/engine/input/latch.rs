// Debounced, set-once-until-cleared ability button flag

/// Default debounce window in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 150;

/// Single-bit button latch shared between the button handler and the frame loop
///
/// The handler calls [`AbilityLatch::press`] on every raw edge; presses inside the
/// debounce window are dropped. The frame loop calls [`AbilityLatch::take`] exactly
/// once per frame, which reports and clears the flag, so a flag left set is never
/// seen twice.
#[derive(Debug, Clone, Copy)]
pub struct AbilityLatch {
    pressed: bool,
    last_accepted_ms: Option<u32>,
    debounce_ms: u32,
}

impl AbilityLatch {
    /// Create a latch with the given debounce window
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            pressed: false,
            last_accepted_ms: None,
            debounce_ms,
        }
    }

    /// Get the debounce window
    pub fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    /// Register a raw button edge at `now_ms` (a wrapping millisecond clock).
    /// Returns true if the press was accepted.
    pub fn press(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < self.debounce_ms {
                return false;
            }
        }

        self.last_accepted_ms = Some(now_ms);
        self.pressed = true;
        true
    }

    /// Check the flag without consuming it
    pub fn is_set(&self) -> bool {
        self.pressed
    }

    /// Consume the flag. Returns true if a press was pending.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pressed)
    }

    /// Drop any pending press and forget the debounce history
    pub fn clear(&mut self) {
        self.pressed = false;
        self.last_accepted_ms = None;
    }
}

impl Default for AbilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_starts_clear() {
        let mut latch = AbilityLatch::default();
        assert!(!latch.is_set());
        assert!(!latch.take());
    }

    #[test]
    fn test_take_consumes_once() {
        let mut latch = AbilityLatch::default();
        assert!(latch.press(0));
        assert!(latch.is_set());
        assert!(latch.take());
        assert!(!latch.take(), "Flag must clear after being taken");
    }

    #[test]
    fn test_bounce_inside_window_is_dropped() {
        let mut latch = AbilityLatch::new(150);
        assert!(latch.press(1_000));
        latch.take();

        assert!(!latch.press(1_060));
        assert!(!latch.is_set());

        assert!(latch.press(1_150));
        assert!(latch.is_set());
    }

    #[test]
    fn test_repeated_presses_do_not_stack() {
        let mut latch = AbilityLatch::new(0);
        latch.press(10);
        latch.press(20);
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn test_clock_wraparound() {
        let mut latch = AbilityLatch::new(150);
        assert!(latch.press(u32::MAX - 50));
        latch.take();
        // 100 ms later, across the wrap
        assert!(!latch.press(49));
        assert!(latch.press(150));
    }

    #[test]
    fn test_clear_resets_history() {
        let mut latch = AbilityLatch::new(150);
        latch.press(500);
        latch.clear();
        assert!(!latch.is_set());
        assert!(latch.press(510));
    }
}
