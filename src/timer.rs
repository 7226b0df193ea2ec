/// Timer module driving a countdown from its total down to zero
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::config::Settings;
use crate::display::Screen;
use crate::duration::format_duration;

/// Source of time and the only place the countdown blocks.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);

    fn sleep_until(&mut self, deadline: Instant) {
        let now = self.now();
        if deadline > now {
            self.sleep(deadline - now);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Fixed-rate tick source. Boundaries sit at `start + n * period` no matter
/// how long the caller spends between ticks.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn start(now: Instant, period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "ticker period must be non-zero");
        Self {
            period,
            next: now + period,
        }
    }

    /// Block until the next boundary. An overdue boundary returns at once;
    /// any further boundaries already in the past are dropped.
    pub fn tick<C: Clock>(&mut self, clock: &mut C) {
        clock.sleep_until(self.next);
        self.next += self.period;
        let now = clock.now();
        while self.next <= now {
            self.next += self.period;
        }
    }
}

pub struct Countdown<C: Clock, S: Screen> {
    settings: Settings,
    clock: C,
    screen: S,
}

impl<C: Clock, S: Screen> Countdown<C, S> {
    pub fn new(settings: Settings, clock: C, screen: S) -> Self {
        Self {
            settings,
            clock,
            screen,
        }
    }

    /// Count `total` down to zero, showing the remaining time every step,
    /// then sound the alert.
    pub fn run(&mut self, total: Duration) {
        let step = self.settings.step;
        debug!("countdown of {} started", format_duration(total));

        if total < step {
            self.finish(total);
            return;
        }

        let mut ticker = Ticker::start(self.clock.now(), step);
        let mut remaining = total;
        loop {
            self.display(remaining);
            ticker.tick(&mut self.clock);
            remaining -= step;
            if remaining < step {
                self.finish(remaining);
                return;
            }
        }
    }

    // Last partial step: show it, wait it out exactly, then alert.
    fn finish(&mut self, remaining: Duration) {
        self.display(remaining);
        self.clock.sleep(remaining);
        self.alert();
    }

    pub fn display(&mut self, remaining: Duration) {
        trace!("{} remaining", format_duration(remaining));
        if let Err(err) = self.screen.show(remaining) {
            warn!("failed to draw remaining time: {err}");
        }
    }

    pub fn alert(&mut self) {
        debug!("time is up, sounding {} alerts", self.settings.alert_count);
        for _ in 0..self.settings.alert_count {
            if let Err(err) = self.screen.bell() {
                warn!("failed to sound alert: {err}");
            }
            self.clock.sleep(self.settings.alert_spacing);
        }
    }
}
