//! Drives the visibility state machine against a [`ModalSurface`]
//!
//! The controller never schedules anything itself. Operations that start a
//! timed transition hand back a [`ScheduledStep`]; whoever owns the event loop
//! waits `step.delay` and then calls [`ModalController::complete`].

use policy_common::{
    CardPayload, ModalConfig, ModalContent, ModalError, ModalMachine, ModalVisibility,
    ScheduledStep,
};
use tracing::debug;

use crate::dom::ids;
use crate::surface::ModalSurface;

/// Whether a click seen by the root's listener landed on the root itself.
///
/// Clicks inside the content bubble up to the root with a different target;
/// a click with no target never dismisses.
pub fn is_backdrop_target<T: PartialEq + ?Sized>(target: Option<&T>, root: &T) -> bool {
    target.is_some_and(|target| target == root)
}

pub struct ModalController<S> {
    surface: S,
    machine: ModalMachine,
    config: ModalConfig,
}

impl<S: ModalSurface> ModalController<S> {
    pub fn new(surface: S, config: ModalConfig) -> Self {
        Self {
            surface,
            machine: ModalMachine::new(&config),
            config,
        }
    }

    pub fn state(&self) -> ModalVisibility {
        self.machine.state()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Populate the modal from a card's raw payload attribute and start
    /// showing it.
    ///
    /// On error nothing on the surface has been touched.
    pub fn open_payload(&mut self, raw: Option<&str>) -> Result<Option<ScheduledStep>, ModalError> {
        if !self.surface.is_attached() {
            return Err(ModalError::MissingElement(ids::ROOT));
        }
        let payload = CardPayload::from_attribute(raw)?;
        let content = ModalContent::from_payload(&payload, &self.config);
        debug!("Opening policy modal: {:?}", content.title);

        self.surface.render(&content);
        let step = self.machine.open();
        self.sync();
        Ok(step)
    }

    /// Start hiding the modal (close button).
    pub fn close(&mut self) -> Option<ScheduledStep> {
        let step = self.machine.close();
        self.sync();
        step
    }

    /// Click on the modal root. Only a click whose target is the root itself
    /// dismisses; clicks bubbling up from the content are ignored.
    pub fn backdrop_click(&mut self, target_is_root: bool) -> Option<ScheduledStep> {
        if !target_is_root {
            return None;
        }
        self.close()
    }

    /// Run a step previously returned by this controller. Stale steps are
    /// ignored.
    pub fn complete(&mut self, step: ScheduledStep) -> bool {
        if !self.machine.complete(step) {
            return false;
        }
        self.sync();
        true
    }

    fn sync(&mut self) {
        self.surface.apply_markers(self.machine.state().markers());
    }
}
