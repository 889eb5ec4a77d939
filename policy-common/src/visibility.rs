//! Modal visibility state machine
//!
//! Hidden -> Opening -> Active -> Closing -> Hidden. The two timed edges
//! (Opening -> Active, Closing -> Hidden) are returned to the caller as
//! [`ScheduledStep`]s to run after a delay. Each step records the generation it
//! was issued in; any later transition bumps the generation, so a step left
//! over from an earlier open or close is rejected when it finally fires.

use std::time::Duration;
use tracing::debug;

use crate::config::ModalConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVisibility {
    #[default]
    Hidden,
    Opening,
    Active,
    Closing,
}

/// Class markers on the modal root, plus the body scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub hidden: bool,
    pub active: bool,
    pub scroll_locked: bool,
}

impl ModalVisibility {
    pub fn markers(self) -> Markers {
        match self {
            ModalVisibility::Hidden => Markers {
                hidden: true,
                active: false,
                scroll_locked: false,
            },
            ModalVisibility::Opening | ModalVisibility::Closing => Markers {
                hidden: false,
                active: false,
                scroll_locked: true,
            },
            ModalVisibility::Active => Markers {
                hidden: false,
                active: true,
                scroll_locked: true,
            },
        }
    }
}

/// A delayed transition the caller must run via [`ModalMachine::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub generation: u64,
    pub delay: Duration,
    pub target: ModalVisibility,
}

pub struct ModalMachine {
    state: ModalVisibility,
    generation: u64,
    activate_delay: Duration,
    hide_delay: Duration,
}

impl Default for ModalMachine {
    fn default() -> Self {
        Self::new(&ModalConfig::default())
    }
}

impl ModalMachine {
    pub fn new(config: &ModalConfig) -> Self {
        Self {
            state: ModalVisibility::Hidden,
            generation: 0,
            activate_delay: config.activate_delay(),
            hide_delay: config.hide_delay(),
        }
    }

    pub fn state(&self) -> ModalVisibility {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Request the modal be shown.
    ///
    /// Returns the activation step to schedule, or `None` when already Active
    /// (the caller still refreshes content).
    pub fn open(&mut self) -> Option<ScheduledStep> {
        match self.state {
            ModalVisibility::Active => None,
            ModalVisibility::Hidden | ModalVisibility::Opening | ModalVisibility::Closing => {
                Some(self.transition(ModalVisibility::Opening, ModalVisibility::Active))
            }
        }
    }

    /// Request the modal be hidden.
    ///
    /// Returns `None` when already Hidden or Closing; a pending hide is kept.
    pub fn close(&mut self) -> Option<ScheduledStep> {
        match self.state {
            ModalVisibility::Hidden | ModalVisibility::Closing => None,
            ModalVisibility::Opening | ModalVisibility::Active => {
                Some(self.transition(ModalVisibility::Closing, ModalVisibility::Hidden))
            }
        }
    }

    /// Run a scheduled step. Returns false (and changes nothing) for a step
    /// issued before the latest transition.
    pub fn complete(&mut self, step: ScheduledStep) -> bool {
        if step.generation != self.generation {
            debug!(
                "Ignoring stale modal step to {:?} (generation {} != {})",
                step.target, step.generation, self.generation
            );
            return false;
        }
        debug!("Modal {:?} -> {:?}", self.state, step.target);
        self.state = step.target;
        true
    }

    fn transition(&mut self, now: ModalVisibility, next: ModalVisibility) -> ScheduledStep {
        debug!("Modal {:?} -> {:?}", self.state, now);
        self.state = now;
        self.generation += 1;
        let delay = match next {
            ModalVisibility::Active => self.activate_delay,
            _ => self.hide_delay,
        };
        ScheduledStep {
            generation: self.generation,
            delay,
            target: next,
        }
    }
}
