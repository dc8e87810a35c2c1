//! Trigger sources: viewport visibility and pointer hover.
//!
//! The controller never touches an engine directly. It turns signals into
//! [`TriggerCommand`]s that the owner applies, which keeps it testable
//! without a clock or a renderer.
//!
//! Visibility is an abstract [`VisibilitySource`]; any host that can report
//! "this element intersects the viewport" satisfies it. The subscription is
//! held by a [`Subscription`] guard and released when the latch fires, when
//! the trigger switches to hover, or when the controller is dropped.

use crate::event::{LogLevel, emit_event, emit_log, names};
use crate::options::AnimateOn;
use std::fmt;
use std::rc::Rc;

/// Intersection threshold used for the view trigger.
pub const VIEW_THRESHOLD: f32 = 0.1;

/// Options passed to the visibility source on subscribe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f32,
    /// Margin around the viewport, in cells.
    pub root_margin: u32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: VIEW_THRESHOLD,
            root_margin: 0,
        }
    }
}

/// One visibility notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f32,
}

impl VisibilityEntry {
    #[must_use]
    pub fn visible() -> Self {
        Self {
            is_intersecting: true,
            intersection_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

/// Opaque id returned by a visibility source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverHandle(pub u64);

/// Host-side "element intersects viewport" signal.
///
/// Methods take `&self`; sources are single-threaded and use interior
/// mutability for their bookkeeping.
pub trait VisibilitySource {
    fn observe(&self, options: ObserverOptions) -> ObserverHandle;
    fn unobserve(&self, handle: ObserverHandle);
}

/// Live subscription; unobserves on drop.
pub struct Subscription {
    source: Rc<dyn VisibilitySource>,
    handle: ObserverHandle,
}

impl Subscription {
    #[must_use]
    pub fn new(source: Rc<dyn VisibilitySource>, options: ObserverOptions) -> Self {
        let handle = source.observe(options);
        Self { source, handle }
    }

    #[must_use]
    pub fn handle(&self) -> ObserverHandle {
        self.handle
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.source.unobserve(self.handle);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("handle", &self.handle)
            .finish_non_exhaustive()
    }
}

/// Command for the engine owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerCommand {
    Start,
    Stop,
}

/// Turns visibility and hover signals into start/stop commands.
#[derive(Default)]
pub struct TriggerController {
    animate_on: AnimateOn,
    has_animated: bool,
    hovering: bool,
    source: Option<Rc<dyn VisibilitySource>>,
    subscription: Option<Subscription>,
}

impl TriggerController {
    #[must_use]
    pub fn new(animate_on: AnimateOn) -> Self {
        Self {
            animate_on,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn animate_on(&self) -> AnimateOn {
        self.animate_on
    }

    /// The once-only view latch has fired.
    #[must_use]
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether the current trigger still wants the animation running: the
    /// pointer is over the text in hover mode, or the view latch has fired.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self.animate_on {
            AnimateOn::View => self.has_animated,
            AnimateOn::Hover => self.hovering,
        }
    }

    /// Connect a visibility source. Subscribes right away in view mode.
    pub fn attach(&mut self, source: Rc<dyn VisibilitySource>) {
        self.subscription = None;
        self.source = Some(source);
        self.sync_subscription();
    }

    /// Release the visibility source and any subscription on it.
    pub fn detach(&mut self) {
        self.subscription = None;
        self.source = None;
    }

    /// Switch trigger source.
    ///
    /// Leaving hover mode while the pointer is inside yields
    /// [`TriggerCommand::Stop`] and forgets the hover, so a later mode switch
    /// cannot replay it.
    pub fn set_animate_on(&mut self, animate_on: AnimateOn) -> Option<TriggerCommand> {
        if animate_on == self.animate_on {
            return None;
        }
        let was_hovering = std::mem::take(&mut self.hovering);
        self.animate_on = animate_on;
        self.sync_subscription();
        (was_hovering && animate_on != AnimateOn::Hover).then_some(TriggerCommand::Stop)
    }

    /// Visibility notification from the source.
    pub fn on_visibility(&mut self, entry: VisibilityEntry) -> Option<TriggerCommand> {
        if self.animate_on != AnimateOn::View || self.has_animated || !entry.is_intersecting {
            return None;
        }
        self.has_animated = true;
        self.subscription = None;
        emit_log(LogLevel::Debug, "decrypt: view latch fired");
        emit_event(
            names::LATCH,
            &format!("{{\"ratio\":{}}}", entry.intersection_ratio),
        );
        Some(TriggerCommand::Start)
    }

    pub fn pointer_enter(&mut self) -> Option<TriggerCommand> {
        if self.animate_on != AnimateOn::Hover || self.hovering {
            return None;
        }
        self.hovering = true;
        Some(TriggerCommand::Start)
    }

    pub fn pointer_leave(&mut self) -> Option<TriggerCommand> {
        if self.animate_on != AnimateOn::Hover || !self.hovering {
            return None;
        }
        self.hovering = false;
        Some(TriggerCommand::Stop)
    }

    fn sync_subscription(&mut self) {
        let wants = self.animate_on == AnimateOn::View && !self.has_animated;
        match (&self.source, wants) {
            (Some(source), true) if self.subscription.is_none() => {
                self.subscription = Some(Subscription::new(
                    Rc::clone(source),
                    ObserverOptions::default(),
                ));
            }
            (_, false) => self.subscription = None,
            _ => {}
        }
    }
}

impl fmt::Debug for TriggerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerController")
            .field("animate_on", &self.animate_on)
            .field("has_animated", &self.has_animated)
            .field("hovering", &self.hovering)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}
