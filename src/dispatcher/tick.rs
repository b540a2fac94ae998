use std::ops::ControlFlow;

use tracing::debug;

use super::Dispatcher;
use crate::queue::Lookahead;
use crate::types::Floor;
use crate::types::direction::{Direction, Heading};
use crate::types::tick_event::TickEvent;

impl Dispatcher {
    /// Runs one scheduling step. A tick either moves the car one floor,
    /// services the current floor, or does nothing; never two of those.
    pub fn tick(&mut self) -> TickEvent {
        let event = self.decide();
        debug!(
            %event,
            floor = self.current_floor,
            direction = %self.direction,
            "tick"
        );
        event
    }

    fn decide(&mut self) -> TickEvent {
        let heading = match self.active_heading() {
            ControlFlow::Continue(heading) => heading,
            ControlFlow::Break(event) => return event,
        };

        if let Some(event) = self.service(heading) {
            return event;
        }

        if !self.has_pending() {
            self.direction = Direction::Idle;
            return TickEvent::Idle;
        }

        let heading = if self.queue(heading).is_empty() {
            let reversed = heading.opposite();
            debug!(from = %heading, to = %reversed, "reversing");
            self.direction = reversed.into();
            if let Some(event) = self.service(reversed) {
                return event;
            }
            reversed
        } else {
            heading
        };

        match self.queue(heading).next_ahead(self.current_floor) {
            Lookahead::Found(_) => TickEvent::Passing(self.advance(heading)),
            Lookahead::NoneAhead => {
                // Everything left in this queue is behind the car.
                let next = if self.queue(heading.opposite()).is_empty() {
                    heading
                } else {
                    heading.opposite()
                };
                debug!(%heading, %next, "no stop ahead, re-seeding from idle");
                self.direction = Direction::Idle;
                self.future_direction = next;
                match self.active_heading() {
                    ControlFlow::Break(event) => event,
                    ControlFlow::Continue(heading) => {
                        self.service(heading).unwrap_or(TickEvent::Idle)
                    }
                }
            }
        }
    }

    /// Travelling cars keep their heading. An idle car looks at the queue it
    /// promised to serve next and either departs from here, creeps one floor
    /// toward that queue's head, or stays put.
    fn active_heading(&mut self) -> ControlFlow<TickEvent, Heading> {
        match self.direction {
            Direction::Up => ControlFlow::Continue(Heading::Up),
            Direction::Down => ControlFlow::Continue(Heading::Down),
            Direction::Idle => self.leave_idle(),
        }
    }

    fn leave_idle(&mut self) -> ControlFlow<TickEvent, Heading> {
        let preferred = self.future_direction;
        if self.queue(preferred).is_empty() && !self.queue(preferred.opposite()).is_empty() {
            self.future_direction = preferred.opposite();
        }

        let heading = self.future_direction;
        match self.queue(heading).head() {
            None => ControlFlow::Break(TickEvent::Idle),
            Some(head) if head == self.current_floor => {
                self.direction = heading.into();
                ControlFlow::Continue(heading)
            }
            Some(head) => {
                let toward = if head > self.current_floor {
                    Heading::Up
                } else {
                    Heading::Down
                };
                ControlFlow::Break(TickEvent::Passing(self.advance(toward)))
            }
        }
    }

    fn service(&mut self, heading: Heading) -> Option<TickEvent> {
        let floor = self.current_floor;
        self.queue_mut(heading)
            .remove(floor)
            .then_some(TickEvent::Servicing(floor))
    }

    fn advance(&mut self, heading: Heading) -> Floor {
        self.set_current_floor(self.current_floor + heading.step());
        self.current_floor
    }
}
