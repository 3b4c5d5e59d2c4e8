/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use serde::Serialize;
use std::thread::sleep;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
/// A single observable step taken by a car while serving requests.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "step")]
pub enum Step {
    Queued { floor: i32 },
    Moved { from: i32, to: i32 },
    Arrived { floor: i32 },
    DirectionChanged { from: Direction, to: Direction },
}

/**
 * Receives every step a car takes.
 *
 * Hooks are notification-only: the car has already made its decision when
 * `on_step` is called, so nothing a hook does can change the schedule.
 */
pub trait MotionHook: Send {
    fn on_step(&mut self, step: &Step);
}

/// Default hook. Steps happen immediately and are not reported anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

impl MotionHook for NoDelay {
    fn on_step(&mut self, _step: &Step) {}
}

/// Pauses for a fixed time on every single-floor move. Demo pacing only.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> FixedDelay {
        FixedDelay { delay }
    }

    pub fn from_millis(millis: u64) -> FixedDelay {
        FixedDelay::new(Duration::from_millis(millis))
    }
}

impl MotionHook for FixedDelay {
    fn on_step(&mut self, step: &Step) {
        if let Step::Moved { .. } = step {
            sleep(self.delay);
        }
    }
}

/// Forwards every step to a channel.
pub struct ChannelHook {
    step_tx: cbc::Sender<Step>,
}

impl ChannelHook {
    pub fn new(step_tx: cbc::Sender<Step>) -> ChannelHook {
        ChannelHook { step_tx }
    }

    /// Creates a hook together with the receiving end of its channel.
    pub fn unbounded() -> (ChannelHook, cbc::Receiver<Step>) {
        let (step_tx, step_rx) = cbc::unbounded::<Step>();
        (ChannelHook::new(step_tx), step_rx)
    }
}

impl MotionHook for ChannelHook {
    fn on_step(&mut self, step: &Step) {
        // A dropped receiver just means nobody is listening anymore
        let _ = self.step_tx.send(*step);
    }
}

/// Runs two hooks one after the other.
impl<A: MotionHook, B: MotionHook> MotionHook for (A, B) {
    fn on_step(&mut self, step: &Step) {
        self.0.on_step(step);
        self.1.on_step(step);
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
