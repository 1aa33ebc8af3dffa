//! Countdown state machine
//!
//! `Running(n)` ticks down to zero, `Completed` persists the day's count,
//! `AwaitingChoice` either restarts the countdown or quits. Restarts loop
//! back to `Running`; they never recurse.

mod interrupt;

use std::time::Duration;

use crate::error::AppError;
use crate::render::screen::{choice_prompt, invalid_choice_message};
use crate::render::{Screen, completion_frame, timer_frame};
use crate::store::SessionStore;
use crate::utils::Timezone;

pub(crate) use interrupt::{Clock, Interrupt, SystemClock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerState {
    Running(u64),
    Completed,
    AwaitingChoice,
    Restarting,
    Quitting,
    Interrupted,
}

/// How a timer run ended, with the day's persisted count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerOutcome {
    Quit { count: i64 },
    Interrupted { count: i64 },
    /// Standard input closed while waiting for a choice
    InputClosed { count: i64 },
}

pub(crate) struct Timer<'a, S: Screen, C: Clock> {
    store: &'a SessionStore,
    screen: &'a mut S,
    clock: C,
    interrupt: Interrupt,
    timezone: Timezone,
    total_secs: u64,
    tick: Duration,
    completed_runs: u32,
}

impl<'a, S: Screen, C: Clock> Timer<'a, S, C> {
    pub(crate) fn new(
        store: &'a SessionStore,
        screen: &'a mut S,
        clock: C,
        interrupt: Interrupt,
        timezone: Timezone,
        total_secs: u64,
    ) -> Self {
        Self {
            store,
            screen,
            clock,
            interrupt,
            timezone,
            total_secs,
            tick: Duration::from_secs(1),
            completed_runs: 0,
        }
    }

    /// Number of countdowns that reached zero during this run
    pub(crate) fn completed_runs(&self) -> u32 {
        self.completed_runs
    }

    pub(crate) fn run(&mut self) -> Result<TimerOutcome, AppError> {
        let mut count = self.store.load_count(self.timezone.today());
        let mut state = TimerState::Running(self.total_secs);

        loop {
            log::trace!("timer state {state:?}");
            state = match state {
                TimerState::Running(remaining) => self.step(remaining, count)?,
                TimerState::Completed => {
                    count = self.store.increment(self.timezone.today())?;
                    self.completed_runs += 1;
                    log::debug!("Pomodoro completed, count now {count}");
                    let size = self.screen.size();
                    self.screen.draw(&completion_frame(count, size))?;
                    TimerState::AwaitingChoice
                }
                TimerState::AwaitingChoice => {
                    // Ctrl-C between saving and the prompt
                    if self.interrupt.is_requested() {
                        return Ok(TimerOutcome::Interrupted { count });
                    }
                    self.interrupt.enter_prompt(count);
                    let size = self.screen.size();
                    let input = self.screen.read_line(&choice_prompt(size));
                    self.interrupt.leave_prompt();
                    match input? {
                        None => return Ok(TimerOutcome::InputClosed { count }),
                        Some(line) => match line.trim().to_ascii_lowercase().as_str() {
                            "r" => TimerState::Restarting,
                            "q" => TimerState::Quitting,
                            _ => {
                                self.screen.print_line(&invalid_choice_message(size))?;
                                TimerState::AwaitingChoice
                            }
                        },
                    }
                }
                TimerState::Restarting => {
                    count = self.store.load_count(self.timezone.today());
                    TimerState::Running(self.total_secs)
                }
                TimerState::Quitting => return Ok(TimerOutcome::Quit { count }),
                TimerState::Interrupted => {
                    let count = self.store.load_count(self.timezone.today());
                    return Ok(TimerOutcome::Interrupted { count });
                }
            };
        }
    }

    /// One `Running` tick: draw, then either complete or sleep and count down
    fn step(&mut self, remaining: u64, count: i64) -> Result<TimerState, AppError> {
        if self.interrupt.is_requested() {
            return Ok(TimerState::Interrupted);
        }
        let size = self.screen.size();
        self.screen.draw(&timer_frame(remaining, count, size))?;
        if remaining == 0 {
            return Ok(TimerState::Completed);
        }
        self.clock.sleep(self.tick, &self.interrupt);
        if self.interrupt.is_requested() {
            return Ok(TimerState::Interrupted);
        }
        Ok(TimerState::Running(remaining - 1))
    }
}
