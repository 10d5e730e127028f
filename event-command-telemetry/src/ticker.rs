/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Pure tick-state model behind the dashboard's live clock.
//!
//! The UI schedules the actual timers; this struct only answers "what does
//! one tick do to the state". Pause is re-checked on every tick, so a timer
//! that keeps firing while paused is a no-op by construction.

/// Seconds on the spike countdown when the page loads.
pub const COUNTDOWN_START_SECS: u32 = 245;

/// Value the countdown wraps to after hitting zero.
pub const COUNTDOWN_CEILING_SECS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickerState {
    /// Seconds until the next predicted commercial spike, in
    /// `[0, COUNTDOWN_CEILING_SECS]`.
    pub countdown_secs: u32,
    /// Index of the highlighted telemetry log entry.
    pub active_log: usize,
    /// While set, ticks keep firing but change nothing.
    pub paused: bool,
    log_len: usize,
}

impl TickerState {
    pub fn new(log_len: usize) -> Self {
        Self {
            countdown_secs: COUNTDOWN_START_SECS,
            active_log: 0,
            paused: false,
            log_len,
        }
    }

    /// One firing of the 1 s countdown timer.
    pub fn tick_second(&mut self) {
        if self.paused {
            return;
        }
        self.countdown_secs = if self.countdown_secs > 0 {
            self.countdown_secs - 1
        } else {
            COUNTDOWN_CEILING_SECS
        };
    }

    /// One firing of the 3 s log-rotation timer.
    pub fn tick_log(&mut self) {
        if self.paused || self.log_len == 0 {
            return;
        }
        self.active_log = (self.active_log + 1) % self.log_len;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shared-clock simulation: advances both cadences by elapsed time
    /// instead of counting ticks, firing each timer at its own period.
    struct SharedClock {
        state: TickerState,
        elapsed_ms: u64,
    }

    impl SharedClock {
        fn new(state: TickerState) -> Self {
            Self {
                state,
                elapsed_ms: 0,
            }
        }

        fn advance_ms(&mut self, ms: u64) {
            let target = self.elapsed_ms + ms;
            loop {
                let next_second = (self.elapsed_ms / 1_000 + 1) * 1_000;
                let next_log = (self.elapsed_ms / 3_000 + 1) * 3_000;
                let next = next_second.min(next_log);
                if next > target {
                    break;
                }
                if next == next_second {
                    self.state.tick_second();
                }
                if next == next_log {
                    self.state.tick_log();
                }
                self.elapsed_ms = next;
            }
            self.elapsed_ms = target;
        }
    }

    #[test]
    fn countdown_decrements_by_one_per_tick() {
        let mut state = TickerState::new(4);
        for expected in (0..COUNTDOWN_START_SECS).rev() {
            state.tick_second();
            assert_eq!(state.countdown_secs, expected);
        }
    }

    #[test]
    fn countdown_wraps_to_ceiling_never_negative() {
        let mut state = TickerState::new(4);
        state.countdown_secs = 0;
        state.tick_second();
        assert_eq!(state.countdown_secs, COUNTDOWN_CEILING_SECS);

        // A full cycle from the ceiling lands back on the ceiling.
        for _ in 0..=COUNTDOWN_CEILING_SECS {
            state.tick_second();
        }
        assert_eq!(state.countdown_secs, COUNTDOWN_CEILING_SECS);
    }

    #[test]
    fn log_index_rotates_modulo_len() {
        let mut state = TickerState::new(4);
        assert_eq!(state.active_log, 0);
        for expected in [1usize, 2, 3, 0, 1] {
            state.tick_log();
            assert_eq!(state.active_log, expected);
        }
    }

    #[test]
    fn four_log_ticks_return_to_start() {
        let mut state = TickerState::new(4);
        state.active_log = 2;
        for _ in 0..4 {
            state.tick_log();
        }
        assert_eq!(state.active_log, 2);
    }

    #[test]
    fn empty_log_never_advances() {
        let mut state = TickerState::new(0);
        state.tick_log();
        assert_eq!(state.active_log, 0);
    }

    #[test]
    fn paused_ticks_change_nothing() {
        let mut state = TickerState::new(4);
        state.toggle_paused();
        let frozen = state.clone();
        for _ in 0..500 {
            state.tick_second();
            state.tick_log();
        }
        assert_eq!(state, frozen);
    }

    #[test]
    fn rapid_pause_unpause_neither_loses_nor_doubles_ticks() {
        let mut state = TickerState::new(4);
        // Alternate pause state between every firing: exactly half the
        // second-ticks land.
        for _ in 0..10 {
            state.tick_second();
            state.toggle_paused();
            state.tick_second();
            state.toggle_paused();
        }
        assert_eq!(state.countdown_secs, COUNTDOWN_START_SECS - 10);
    }

    #[test]
    fn elapsed_time_scenario_from_the_shared_clock() {
        // 5 s elapsed: five 1 s ticks, one 3 s tick.
        let mut clock = SharedClock::new(TickerState::new(4));
        clock.advance_ms(5_000);
        assert_eq!(clock.state.countdown_secs, 240);
        assert_eq!(clock.state.active_log, 1);

        // 3 s elapsed from load: countdown 242, log fired exactly once.
        let mut clock = SharedClock::new(TickerState::new(4));
        clock.advance_ms(3_000);
        assert_eq!(clock.state.countdown_secs, 242);
        assert_eq!(clock.state.active_log, 1);
    }

    #[test]
    fn shared_clock_pause_freezes_both_cadences() {
        let mut clock = SharedClock::new(TickerState::new(4));
        clock.advance_ms(4_000);
        clock.state.toggle_paused();
        let frozen = clock.state.clone();
        clock.advance_ms(60_000);
        assert_eq!(clock.state, frozen);
    }
}
