//! Session - one engine plus the fall timer, fed by a single game loop
//!
//! Input events and timer fires are funneled through [`Session::handle`] in arrival
//! order, so the engine only ever sees one call at a time.

use std::env;
use std::time::{Duration, Instant};

use log::Level;

use crate::action::{dispatch, Action, Flow};
use crate::core::logger::{self, SharedLogger};
use crate::core::RuleEngine;
use crate::timer::FallTimer;
use crate::types::{FALL_INTERVAL_MS, FRAME_MS};

/// Target for driver log records
pub const DRIVER_TARGET: &str = "blockfall::driver";

/// Driver timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    pub fall_interval: Duration,
    pub frame_interval: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            fall_interval: Duration::from_millis(FALL_INTERVAL_MS),
            frame_interval: Duration::from_millis(FRAME_MS),
        }
    }
}

impl DriverConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let millis = |key: &str, default: u64| {
            env::var(key)
                .ok()
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|&ms| ms > 0)
                .unwrap_or(default)
        };

        Self {
            fall_interval: Duration::from_millis(millis("BLOCKFALL_FALL_MS", FALL_INTERVAL_MS)),
            frame_interval: Duration::from_millis(millis("BLOCKFALL_FRAME_MS", FRAME_MS)),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    engine: RuleEngine,
    timer: FallTimer,
    config: DriverConfig,
    quit: bool,
    events: u64,
}

impl Session {
    pub fn new(engine: RuleEngine, config: DriverConfig, now: Instant) -> Self {
        Self {
            engine,
            timer: FallTimer::new(config.fall_interval, now),
            config,
            quit: false,
            events: 0,
        }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Number of actions handled so far
    pub fn events(&self) -> u64 {
        self.events
    }

    /// False once the player quit or the game ended
    pub fn is_running(&self) -> bool {
        !self.quit && !self.engine.is_game_over()
    }

    fn logger(&self) -> &SharedLogger {
        self.engine.logger()
    }

    /// Handle one action, in order
    pub fn handle(&mut self, action: Action) -> Flow {
        if self.quit {
            return Flow::Quit;
        }
        self.events += 1;

        let was_over = self.engine.is_game_over();
        let flow = dispatch(&mut self.engine, action);

        if flow == Flow::Quit {
            self.quit = true;
            logger::emit_to(
                self.logger().as_ref(),
                DRIVER_TARGET,
                Level::Info,
                format_args!("quit after {} events", self.events),
            );
        } else if !was_over && self.engine.is_game_over() {
            logger::emit_to(
                self.logger().as_ref(),
                DRIVER_TARGET,
                Level::Info,
                format_args!(
                    "session ended: {} lines, score {}",
                    self.engine.lines(),
                    self.engine.score()
                ),
            );
        }
        flow
    }

    /// Feed a timer action if the fall timer fired
    pub fn poll_timer(&mut self, now: Instant) -> Flow {
        if self.timer.poll(now) {
            return self.handle(Action::Timer);
        }
        if self.quit {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    /// How long the loop may wait for input before the next timer poll
    pub fn wait_budget(&self, now: Instant) -> Duration {
        self.timer.remaining(now).min(self.config.frame_interval)
    }
}
