use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates, origin at the bottom-left.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step away in `direction`.
    #[must_use]
    pub fn moved(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body plus the heading it last moved in and the direction the next
/// step will take.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending: Direction,
}

impl Snake {
    /// Lays out `length` segments in a straight line behind `head`, facing
    /// `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let trailing = direction.opposite();
        let body = std::iter::successors(Some(head), |segment| Some(segment.moved(trailing)))
            .take(length.max(1))
            .collect();

        Self {
            body,
            heading: direction,
            pending: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        debug_assert!(!segments.is_empty(), "snake needs at least a head");

        Self {
            body: VecDeque::from(segments),
            heading: direction,
            pending: direction,
        }
    }

    /// Queues `requested` for the next step unless it reverses the most
    /// recently accepted direction.
    ///
    /// Returns whether the request was accepted. Two quick perpendicular
    /// turns within one tick can still point the next step back into the
    /// neck.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if !direction_change_is_valid(self.pending, requested) {
            return false;
        }

        self.pending = requested;
        true
    }

    /// Returns the head position the next step would move to.
    #[must_use]
    pub fn next_head_position(&self) -> Position {
        self.head().moved(self.pending)
    }

    /// Moves one cell in the pending direction, keeping the tail when `grow`.
    pub fn advance(&mut self, grow: bool) {
        let next_head = self.next_head_position();
        self.heading = self.pending;

        self.body.push_front(next_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if `position` hits any segment behind the head.
    ///
    /// The tail counts even though a non-growing step would vacate it.
    #[must_use]
    pub fn body_contains(&self, position: Position) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction of the most recent step.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Returns the direction the next step will take.
    #[must_use]
    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
