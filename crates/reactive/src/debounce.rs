//! Trailing-edge debounce for coalescing bursts of writes
//!
//! Buffers the latest written value and releases it once a quiet window has
//! elapsed since the last write. Time is passed in explicitly so behavior
//! is deterministic under test; nothing here reads the clock.

use std::time::{Duration, Instant};

/// Trailing-edge coalescer over a stream of writes
///
/// `write` buffers the latest value and restarts the quiet window; `poll`
/// releases the buffered value once the window has elapsed. Bursts of
/// writes inside one window collapse into a single emission carrying the
/// final value.
///
/// By default a released value equal to the last emission is suppressed;
/// `notify_always` keeps such emissions.
#[derive(Debug)]
pub struct Debounced<T> {
    window: Duration,
    notify_always: bool,
    pending: Option<Pending<T>>,
    last_emitted: Option<T>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    written_at: Instant,
}

impl<T: Clone + PartialEq> Debounced<T> {
    /// Create a debouncer with the given quiet window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            notify_always: false,
            pending: None,
            last_emitted: None,
        }
    }

    /// Emit on every released write, even when the value is unchanged
    pub fn notify_always(mut self) -> Self {
        self.notify_always = true;
        self
    }

    /// Buffer a value, restarting the quiet window
    pub fn write(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            written_at: now,
        });
    }

    /// Release the buffered value if the quiet window has elapsed
    ///
    /// Returns `None` while the window is still running, when nothing was
    /// written, or (unless `notify_always`) when the released value equals
    /// the previous emission.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = match &self.pending {
            Some(pending) => now.saturating_duration_since(pending.written_at) >= self.window,
            None => false,
        };
        if !due {
            return None;
        }

        let value = self.pending.take().map(|p| p.value)?;
        if !self.notify_always && self.last_emitted.as_ref() == Some(&value) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }

    /// Whether no write is waiting on the window
    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(100);

    #[test]
    fn holds_value_until_window_elapses() {
        let mut debounced = Debounced::new(WINDOW);
        let t0 = Instant::now();

        debounced.write(1, t0);
        assert_eq!(debounced.poll(t0 + Duration::from_millis(50)), None);
        assert_eq!(debounced.poll(t0 + WINDOW), Some(1));
        assert!(debounced.is_idle());
    }

    #[test]
    fn burst_collapses_to_final_value() {
        let mut debounced = Debounced::new(WINDOW);
        let t0 = Instant::now();

        debounced.write(1, t0);
        debounced.write(2, t0 + Duration::from_millis(5));
        debounced.write(3, t0 + Duration::from_millis(10));

        // Window restarts from the last write.
        assert_eq!(debounced.poll(t0 + Duration::from_millis(105)), None);
        assert_eq!(debounced.poll(t0 + Duration::from_millis(110)), Some(3));
        assert_eq!(debounced.poll(t0 + Duration::from_millis(300)), None);
    }

    #[test]
    fn suppresses_repeat_of_last_emission_by_default() {
        let mut debounced = Debounced::new(WINDOW);
        let t0 = Instant::now();

        debounced.write(4, t0);
        assert_eq!(debounced.poll(t0 + WINDOW), Some(4));

        debounced.write(4, t0 + Duration::from_millis(200));
        assert_eq!(debounced.poll(t0 + Duration::from_millis(300)), None);
    }

    #[test]
    fn notify_always_keeps_repeat_emissions() {
        let mut debounced = Debounced::new(WINDOW).notify_always();
        let t0 = Instant::now();

        debounced.write(4, t0);
        assert_eq!(debounced.poll(t0 + WINDOW), Some(4));

        debounced.write(4, t0 + Duration::from_millis(200));
        assert_eq!(debounced.poll(t0 + Duration::from_millis(300)), Some(4));
    }

    #[test]
    fn zero_window_releases_on_next_poll() {
        let mut debounced = Debounced::new(Duration::ZERO);
        let t0 = Instant::now();

        debounced.write(7, t0);
        assert_eq!(debounced.poll(t0), Some(7));
    }

    #[test]
    fn poll_without_write_is_quiet() {
        let mut debounced: Debounced<u32> = Debounced::new(WINDOW);
        assert_eq!(debounced.poll(Instant::now()), None);
        assert!(debounced.is_idle());
    }
}
