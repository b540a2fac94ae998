mod tick;

use std::fmt;

use tracing::debug;

use crate::error::DispatchError;
use crate::queue::RequestQueue;
use crate::types::Floor;
use crate::types::direction::{Direction, Heading};

/// State of one car: where it is, where it is heading, and the stops it still
/// owes in each direction.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    floor_count: Floor,
    current_floor: Floor,
    direction: Direction,
    future_direction: Heading,
    up_queue: RequestQueue,
    down_queue: RequestQueue,
}

impl Dispatcher {
    /// Builds an idle car. The starting floor saturates into the building.
    pub fn new(floor_count: Floor, starting_floor: Floor) -> Result<Self, DispatchError> {
        if floor_count < 1 {
            return Err(DispatchError::Configuration { floor_count });
        }
        let mut dispatcher = Dispatcher {
            floor_count,
            current_floor: 0,
            direction: Direction::Idle,
            future_direction: Heading::Up,
            up_queue: RequestQueue::new(Heading::Up),
            down_queue: RequestQueue::new(Heading::Down),
        };
        dispatcher.set_current_floor(starting_floor);
        Ok(dispatcher)
    }

    pub fn floor_count(&self) -> Floor {
        self.floor_count
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn future_direction(&self) -> Heading {
        self.future_direction
    }

    pub fn queue(&self, heading: Heading) -> &RequestQueue {
        match heading {
            Heading::Up => &self.up_queue,
            Heading::Down => &self.down_queue,
        }
    }

    pub fn up_queue(&self) -> &RequestQueue {
        &self.up_queue
    }

    pub fn down_queue(&self) -> &RequestQueue {
        &self.down_queue
    }

    pub fn has_pending(&self) -> bool {
        !(self.up_queue.is_empty() && self.down_queue.is_empty())
    }

    /// Hall call: stop at `floor` while travelling `direction`.
    ///
    /// Returns `true` if the floor was newly queued. An idle car commits to
    /// the requested direction and will turn around once that queue drains.
    pub fn call(&mut self, floor: Floor, direction: Direction) -> Result<bool, DispatchError> {
        self.check_floor(floor)?;
        let heading = Heading::try_from(direction)?;

        if self.direction == Direction::Idle {
            self.direction = heading.into();
            self.future_direction = heading.opposite();
        }
        let added = self.queue_mut(heading).insert(floor);
        debug!(floor, %heading, added, "hall call");
        Ok(added)
    }

    /// In-car request, queued against the car's travel intent. Floors behind
    /// the car go to the return sweep. Returns the queue it landed in.
    pub fn request_from_car(&mut self, floor: Floor) -> Result<Heading, DispatchError> {
        self.check_floor(floor)?;

        let heading = match self.direction {
            Direction::Idle => self.future_direction,
            Direction::Up if floor >= self.current_floor => Heading::Up,
            Direction::Down if floor <= self.current_floor => Heading::Down,
            Direction::Up => Heading::Down,
            Direction::Down => Heading::Up,
        };
        let added = self.queue_mut(heading).insert(floor);
        debug!(floor, %heading, added, "car request");
        Ok(heading)
    }

    pub fn status(&self) -> Status {
        Status {
            floor: self.current_floor,
            direction: self.direction,
            future_direction: self.future_direction,
            up: self.up_queue.iter().collect(),
            down: self.down_queue.iter().collect(),
        }
    }

    fn check_floor(&self, floor: Floor) -> Result<(), DispatchError> {
        if (0..self.floor_count).contains(&floor) {
            Ok(())
        } else {
            Err(DispatchError::InvalidFloor {
                floor,
                floor_count: self.floor_count,
            })
        }
    }

    fn queue_mut(&mut self, heading: Heading) -> &mut RequestQueue {
        match heading {
            Heading::Up => &mut self.up_queue,
            Heading::Down => &mut self.down_queue,
        }
    }

    fn set_current_floor(&mut self, floor: Floor) {
        self.current_floor = floor.clamp(0, self.floor_count - 1);
    }
}

/// Point-in-time copy of the dispatcher, for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub floor: Floor,
    pub direction: Direction,
    pub future_direction: Heading,
    pub up: Vec<Floor>,
    pub down: Vec<Floor>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ FLOOR {} | {:4} | next {:4} | U:{:?} | D:{:?} ]",
            self.floor, self.direction, self.future_direction, self.up, self.down
        )
    }
}
