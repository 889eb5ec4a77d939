//! The page's single policy modal
//!
//! [`PolicyModal::install`] resolves the modal elements, wires the close
//! button, backdrop and card clicks, and keeps the listeners alive for as long
//! as the returned handle lives. Timed transitions run as Dioxus tasks;
//! scheduling a new one cancels the previous task, and the state machine's
//! generation check catches anything that slips through.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_core::{current_scope_id, Runtime, RuntimeGuard, ScopeId, Task};
use policy_common::payload::PAYLOAD_ATTRIBUTE;
use policy_common::{ModalConfig, ModalError, ModalVisibility, ScheduledStep};
use tracing::{error, info, warn};
use wasm_bindgen_x::{JsCast, JsValue};

use crate::controller::{is_backdrop_target, ModalController};
use crate::dom::{ids, DomModalSurface};
use crate::wasm_utils::EventListener;

/// Selector for elements that open the modal when clicked
const CARD_SELECTOR: &str = "[data-json]";

struct ModalInner {
    controller: ModalController<DomModalSurface>,
    // Listener callbacks run from wasm-bindgen outside the Dioxus runtime;
    // these let them spawn and cancel tasks anyway.
    runtime: Rc<Runtime>,
    scope: ScopeId,
    pending: PendingStep<Task>,
}

type SharedInner = Rc<RefCell<ModalInner>>;

/// Handle to the installed modal. Dropping it removes every listener it added
/// and cancels a pending transition.
pub struct PolicyModal {
    inner: SharedInner,
    _listeners: Vec<EventListener>,
}

impl PolicyModal {
    /// Bind to the modal markup in `document`.
    ///
    /// Must be called from inside a Dioxus scope; pending transitions are
    /// spawned as tasks of that scope. A missing root is logged here and again
    /// on every card click, since each open attempt fails with
    /// [`ModalError::MissingElement`].
    pub fn install(document: &web_sys_x::Document, config: ModalConfig) -> Self {
        let surface = DomModalSurface::locate(document);
        let root = surface.root().cloned();
        if root.is_none() {
            error!(
                "Policy modal markup incomplete: {}",
                ModalError::MissingElement(ids::ROOT)
            );
        }

        let inner = Rc::new(RefCell::new(ModalInner {
            controller: ModalController::new(surface, config),
            runtime: Runtime::current(),
            scope: current_scope_id(),
            pending: PendingStep::default(),
        }));

        let mut listeners = Vec::new();

        if let Some(button) = document.get_element_by_id(ids::CLOSE_BUTTON) {
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListener::new(button.into(), "click", move |_| {
                with_inner(&weak, close);
            }));
        }

        if let Some(root) = root {
            let weak = Rc::downgrade(&inner);
            let backdrop = root.clone();
            listeners.push(EventListener::new(root.into(), "click", move |event| {
                let target = event_target(&event);
                let target: Option<&JsValue> = target.as_ref().map(AsRef::as_ref);
                let backdrop: &JsValue = backdrop.as_ref();
                let target_is_root = is_backdrop_target(target, backdrop);
                with_inner(&weak, |inner| backdrop_click(inner, target_is_root));
            }));
        }

        {
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListener::new(
                document.clone().into(),
                "click",
                move |event| {
                    let Some(card) = event_target(&event)
                        .and_then(|target| target.dyn_into::<web_sys_x::Element>().ok())
                        .and_then(|el| el.closest(CARD_SELECTOR).ok().flatten())
                    else {
                        return;
                    };
                    let raw = card.get_attribute(PAYLOAD_ATTRIBUTE);
                    with_inner(&weak, |inner| open(inner, raw.as_deref()));
                },
            ));
        }

        info!("Policy modal installed ({} listeners)", listeners.len());

        Self {
            inner,
            _listeners: listeners,
        }
    }

    /// Open the modal for `source`, reading its `data-json` payload.
    ///
    /// Failures are logged; the modal keeps its previous state.
    pub fn open_card(&self, source: &web_sys_x::Element) {
        let raw = source.get_attribute(PAYLOAD_ATTRIBUTE);
        open(&self.inner, raw.as_deref());
    }

    /// Run the hide sequence, as the close button does.
    pub fn close(&self) {
        close(&self.inner);
    }

    pub fn state(&self) -> ModalVisibility {
        self.inner.borrow().controller.state()
    }
}

impl Drop for PolicyModal {
    fn drop(&mut self) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return;
        };
        let _guard = RuntimeGuard::new(inner.runtime.clone());
        inner.pending.cancel();
    }
}

/// Read a config override from the page, falling back to defaults.
pub fn read_config(document: &web_sys_x::Document) -> ModalConfig {
    let Some(text) = document
        .get_element_by_id(ids::CONFIG)
        .and_then(|el| el.text_content())
    else {
        return ModalConfig::default();
    };
    match ModalConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default modal config: {}", e);
            ModalConfig::default()
        }
    }
}

/// Hook that installs the page's modal once the markup is mounted.
///
/// Render `PolicyModalView` in the same tree. The handle is kept in the
/// returned signal; the listeners go away when the owning component unmounts.
pub fn use_policy_modal() -> Signal<Option<PolicyModal>> {
    let mut modal = use_signal(|| None::<PolicyModal>);

    // use_effect rather than use_hook so the DOM lookups run after the modal
    // markup has been committed.
    use_effect(move || {
        if modal.peek().is_some() {
            return;
        }
        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            error!("Policy modal not installed: {}", ModalError::NoWindow);
            return;
        };
        let config = read_config(&document);
        modal.set(Some(PolicyModal::install(&document, config)));
    });

    modal
}

/// Something that stops a scheduled step before it runs.
trait CancelStep {
    fn cancel(self);
}

impl CancelStep for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// The one timed transition allowed to be in flight.
struct PendingStep<H: CancelStep> {
    handle: Option<H>,
}

impl<H: CancelStep> Default for PendingStep<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: CancelStep> PendingStep<H> {
    /// Track `handle`, cancelling whatever was pending before it.
    fn replace(&mut self, handle: H) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.cancel();
        }
    }

    fn cancel(&mut self) {
        if let Some(previous) = self.handle.take() {
            previous.cancel();
        }
    }
}

fn event_target(event: &JsValue) -> Option<web_sys_x::EventTarget> {
    event.dyn_ref::<web_sys_x::Event>()?.target()
}

fn with_inner(weak: &Weak<RefCell<ModalInner>>, f: impl FnOnce(&SharedInner)) {
    if let Some(inner) = weak.upgrade() {
        f(&inner);
    }
}

fn open(inner: &SharedInner, raw: Option<&str>) {
    let result = inner.borrow_mut().controller.open_payload(raw);
    match result {
        Ok(Some(step)) => schedule(inner, step),
        Ok(None) => {}
        Err(e) => error!("Cannot open policy modal: {}", e),
    }
}

fn close(inner: &SharedInner) {
    let step = inner.borrow_mut().controller.close();
    if let Some(step) = step {
        schedule(inner, step);
    }
}

fn backdrop_click(inner: &SharedInner, target_is_root: bool) {
    let step = inner.borrow_mut().controller.backdrop_click(target_is_root);
    if let Some(step) = step {
        schedule(inner, step);
    }
}

fn schedule(inner: &SharedInner, step: ScheduledStep) {
    let weak = Rc::downgrade(inner);
    let mut guard = inner.borrow_mut();
    let _runtime = RuntimeGuard::new(guard.runtime.clone());
    let scope = guard.scope;

    let task = scope.in_runtime(|| {
        spawn(async move {
            sleep(step.delay).await;
            with_inner(&weak, |inner| {
                inner.borrow_mut().controller.complete(step);
            });
        })
    });
    guard.pending.replace(task);
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let ms = delay.as_millis().min(u32::MAX as u128) as u32;
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}
