//! Identifier navigation with wrap-around.
//!
//! [`Navigator`] is a small value: computing a target never changes it, and
//! [`Navigator::commit`] returns a new value. The browse cycle commits only
//! after the fetch for a target succeeds.

use rand::Rng;
use thiserror::Error;

/// Upper bound of the national catalog at the time of writing.
pub const DEFAULT_MAX_ID: u32 = 1025;

/// Identifier loaded when the browser starts.
pub const START_ID: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigatorError {
    #[error("maximum id must be at least 1")]
    EmptyRange,

    #[error("id {id} is outside 1..={max_id}")]
    OutOfRange { id: u32, max_id: u32 },
}

/// A navigation request raised by one of the three controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    Random,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Previous => "previous",
            Action::Next => "next",
            Action::Random => "random",
        }
    }
}

/// Current identifier within `1..=max_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: u32,
    max_id: u32,
}

impl Navigator {
    /// Start at [`START_ID`].
    pub fn new(max_id: u32) -> Result<Self, NavigatorError> {
        if max_id == 0 {
            return Err(NavigatorError::EmptyRange);
        }
        Ok(Self {
            current: START_ID,
            max_id,
        })
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max_id(&self) -> u32 {
        self.max_id
    }

    /// `current - 1`, wrapping from 1 to `max_id`.
    pub fn previous(&self) -> u32 {
        if self.current > 1 {
            self.current - 1
        } else {
            self.max_id
        }
    }

    /// `current + 1`, wrapping from `max_id` to 1.
    pub fn next(&self) -> u32 {
        if self.current < self.max_id {
            self.current + 1
        } else {
            1
        }
    }

    /// Uniform over `1..=max_id`, ignoring the current id.
    pub fn random_with_rng<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.gen_range(1..=self.max_id)
    }

    pub fn random(&self) -> u32 {
        self.random_with_rng(&mut rand::thread_rng())
    }

    /// Target id for an action.
    pub fn target(&self, action: Action) -> u32 {
        self.target_with_rng(action, &mut rand::thread_rng())
    }

    pub fn target_with_rng<R: Rng>(&self, action: Action, rng: &mut R) -> u32 {
        match action {
            Action::Previous => self.previous(),
            Action::Next => self.next(),
            Action::Random => self.random_with_rng(rng),
        }
    }

    /// A navigator whose current id is `id`.
    pub fn commit(self, id: u32) -> Result<Self, NavigatorError> {
        if !(1..=self.max_id).contains(&id) {
            return Err(NavigatorError::OutOfRange {
                id,
                max_id: self.max_id,
            });
        }
        Ok(Self {
            current: id,
            ..self
        })
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self {
            current: START_ID,
            max_id: DEFAULT_MAX_ID,
        }
    }
}
