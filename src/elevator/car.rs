/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::ops::Bound;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::CarConfig;
use crate::elevator::motion::{MotionHook, NoDelay, Step};
use crate::error::{CarError, CarResult};
use crate::shared::{CarState, Direction};

pub const MIN_FLOORS: i32 = 2;

/**
 * A single elevator car running a directional scan (LOOK) schedule.
 *
 * The car keeps serving requests in its scan direction, always stopping at the
 * nearest pending floor ahead of it, and only reverses once nothing is left
 * ahead. Within a direction the order is purely spatial; how long a request
 * has been waiting is not taken into account.
 *
 * # Fields
 * - `floor_count`:     Number of floors served. Valid floors are `1..=floor_count`.
 * - `current_floor`:   The floor the car is at.
 * - `direction`:       The scan direction currently being served.
 * - `pending`:         Floors requested and not yet served.
 * - `verbose`:         Emits step traces at `info` level instead of `debug`.
 * - `hook`:            Observer notified of every step the car takes.
 */
pub struct Car {
    floor_count: i32,
    current_floor: i32,
    direction: Direction,
    pending: BTreeSet<i32>,
    verbose: bool,
    hook: Box<dyn MotionHook>,
}

impl Car {
    /// Creates a car at floor 1 scanning upwards. `floor_count` below 2 is
    /// raised to 2.
    pub fn new(floor_count: i32, verbose: bool) -> Car {
        Car {
            floor_count: floor_count.max(MIN_FLOORS),
            current_floor: 1,
            direction: Direction::Up,
            pending: BTreeSet::new(),
            verbose,
            hook: Box::new(NoDelay),
        }
    }

    pub fn from_config(config: &CarConfig) -> Car {
        Car::new(config.n_floors, config.verbose)
    }

    pub fn with_hook<H: MotionHook + 'static>(mut self, hook: H) -> Car {
        self.hook = Box::new(hook);
        self
    }

    /**
     * Requests the car to stop at `floor`.
     *
     * The floor is queued and the car is then driven to the next stop in its
     * scan direction, clearing every request it passes, before the direction
     * is re-evaluated. The next stop is not necessarily `floor` itself.
     *
     * Returns the requested floor, or `CarError::InvalidFloorRequest` without
     * touching the car if `floor` is outside `1..=floor_count`.
     */
    pub fn request(&mut self, floor: i32) -> CarResult<i32> {
        self.enqueue(floor)?;
        self.dispatch();
        Ok(floor)
    }

    pub fn is_valid_floor(&self, floor: i32) -> bool {
        floor > 0 && floor <= self.floor_count
    }

    /// The floor the car will stop at next. Returns the current floor when
    /// nothing is pending ahead of the car.
    pub fn next_floor(&self) -> i32 {
        self.floors_ahead()
            .first()
            .copied()
            .unwrap_or(self.current_floor)
    }

    /***************************************/
    /*             Accessors               */
    /***************************************/
    pub fn floor_count(&self) -> i32 {
        self.floor_count
    }

    pub fn current_floor(&self) -> i32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// All pending floors, lowest first.
    pub fn pending_floors(&self) -> Vec<i32> {
        self.pending.iter().copied().collect()
    }

    /// Pending floors strictly above the car, nearest first.
    pub fn floors_above(&self) -> Vec<i32> {
        self.pending
            .range((Bound::Excluded(self.current_floor), Bound::Unbounded))
            .copied()
            .collect()
    }

    /// Pending floors strictly below the car, nearest first.
    pub fn floors_below(&self) -> Vec<i32> {
        self.pending
            .range(..self.current_floor)
            .rev()
            .copied()
            .collect()
    }

    /// Pending floors in the scan direction, nearest first.
    pub fn floors_ahead(&self) -> Vec<i32> {
        match self.direction {
            Direction::Up => self.floors_above(),
            Direction::Down => self.floors_below(),
        }
    }

    /// Pending floors behind the scan direction, nearest first.
    pub fn floors_behind(&self) -> Vec<i32> {
        match self.direction {
            Direction::Up => self.floors_below(),
            Direction::Down => self.floors_above(),
        }
    }

    pub fn state(&self) -> CarState {
        CarState {
            floor_count: self.floor_count,
            current_floor: self.current_floor,
            direction: self.direction,
            pending_requests: self.pending_floors(),
        }
    }

    /***************************************/
    /*          Dispatch internals         */
    /***************************************/
    pub(crate) fn enqueue(&mut self, floor: i32) -> CarResult<i32> {
        if !self.is_valid_floor(floor) {
            warn!(
                "Rejected request for floor {} (valid floors are 1..={})",
                floor, self.floor_count
            );
            return Err(CarError::InvalidFloorRequest {
                floor,
                floor_count: self.floor_count,
            });
        }

        self.say(format_args!("Adding floor to queue: {}", floor));
        self.notify(Step::Queued { floor });

        // The car is already there, so the request is served on the spot
        if floor == self.current_floor {
            self.say(format_args!("Already at floor {}", floor));
            self.pending.remove(&floor);
            self.notify(Step::Arrived { floor });
        } else {
            self.pending.insert(floor);
        }

        Ok(floor)
    }

    /// Drives the car to the next stop, then re-evaluates the scan direction.
    /// Returns the floor the car ends up at.
    pub(crate) fn dispatch(&mut self) -> i32 {
        let target = self.next_floor();

        self.say(format_args!(
            "Executing move from floor {} going {}, next floor is {}",
            self.current_floor, self.direction, target
        ));
        self.say(format_args!(
            "Queue above: {:?}, queue below: {:?}",
            self.floors_above(),
            self.floors_below()
        ));

        while self.current_floor != target {
            let from = self.current_floor;
            let to = match self.direction {
                Direction::Up => self.move_up(),
                Direction::Down => self.move_down(),
            };

            if to == from {
                warn!("Car stuck at floor {} while heading for {}", from, target);
                break;
            }

            if self.pending.remove(&to) {
                self.say(format_args!("Welcome to floor {}", to));
                self.notify(Step::Arrived { floor: to });
            }
        }

        self.conditionally_change_direction();
        self.current_floor
    }

    /// Moves one floor up. At the top floor this is a no-op.
    pub(crate) fn move_up(&mut self) -> i32 {
        if self.current_floor >= self.floor_count {
            return self.current_floor;
        }
        self.step(Direction::Up)
    }

    /// Moves one floor down. At floor 1 this is a no-op.
    pub(crate) fn move_down(&mut self) -> i32 {
        if self.current_floor <= 1 {
            return self.current_floor;
        }
        self.step(Direction::Down)
    }

    /// Reverses the scan direction if nothing is pending ahead of the car.
    /// Returns whether the direction changed.
    pub(crate) fn conditionally_change_direction(&mut self) -> bool {
        if !self.floors_ahead().is_empty() {
            self.say(format_args!("Keeping direction {}", self.direction));
            return false;
        }

        let from = self.direction;
        self.direction = from.reversed();
        self.say(format_args!("Changing direction from {} to {}", from, self.direction));
        self.notify(Step::DirectionChanged {
            from,
            to: self.direction,
        });
        true
    }

    fn step(&mut self, direction: Direction) -> i32 {
        let from = self.current_floor;
        self.current_floor += direction.step();
        self.say(format_args!("Moving {} to {}", direction, self.current_floor));
        self.notify(Step::Moved {
            from,
            to: self.current_floor,
        });
        self.current_floor
    }

    #[cfg(test)]
    pub(crate) fn test_set_position(&mut self, floor: i32, direction: Direction) {
        self.current_floor = floor;
        self.direction = direction;
    }

    fn notify(&mut self, step: Step) {
        self.hook.on_step(&step);
    }

    fn say(&self, args: fmt::Arguments<'_>) {
        if self.verbose {
            info!("{}", args);
        } else {
            debug!("{}", args);
        }
    }
}

impl fmt::Debug for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Car")
            .field("floor_count", &self.floor_count)
            .field("current_floor", &self.current_floor)
            .field("direction", &self.direction)
            .field("pending", &self.pending)
            .field("verbose", &self.verbose)
            .finish()
    }
}
