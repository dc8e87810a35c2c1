//! A decrypting text: one engine driven by one trigger controller.

use crate::engine::{RevealEngine, TickOutcome};
use crate::layout::DisplayFrame;
use crate::options::DecryptOptions;
use crate::pointer::{HoverRegion, MouseEvent, PointerTransition};
use crate::scramble::RandomSource;
use crate::trigger::{TriggerCommand, TriggerController, VisibilityEntry, VisibilitySource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Text that scrambles and settles when its trigger fires.
///
/// The host forwards signals (`on_visibility`, `on_mouse` or
/// `pointer_enter`/`pointer_leave`), calls [`DecryptedText::advance`] from its
/// loop and paints [`DecryptedText::frame`].
#[derive(Debug)]
pub struct DecryptedText<R: RandomSource = StdRng> {
    engine: RevealEngine<R>,
    trigger: TriggerController,
    region: HoverRegion,
    region_pinned: bool,
}

impl DecryptedText<StdRng> {
    #[must_use]
    pub fn new(options: DecryptOptions) -> Self {
        Self::with_rng(options, StdRng::from_entropy())
    }
}

impl<R: RandomSource> DecryptedText<R> {
    pub fn with_rng(options: DecryptOptions, rng: R) -> Self {
        let trigger = TriggerController::new(options.animate_on);
        let (width, height) = text_extent(&options.text);
        Self {
            engine: RevealEngine::with_rng(options, rng),
            trigger,
            region: HoverRegion::new(0, 0, width, height),
            region_pinned: false,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &RevealEngine<R> {
        &self.engine
    }

    #[must_use]
    pub fn trigger(&self) -> &TriggerController {
        &self.trigger
    }

    #[must_use]
    pub fn options(&self) -> &DecryptOptions {
        self.engine.options()
    }

    #[must_use]
    pub fn displayed(&self) -> &str {
        self.engine.displayed()
    }

    /// Full original text for assistive technology, whatever the animation
    /// is showing.
    #[must_use]
    pub fn accessible_text(&self) -> &str {
        self.engine.accessible_text()
    }

    #[must_use]
    pub fn frame(&self) -> DisplayFrame {
        self.engine.frame()
    }

    #[must_use]
    pub fn is_scrambling(&self) -> bool {
        self.engine.is_scrambling()
    }

    /// Connect the viewport-visibility source.
    pub fn attach(&mut self, source: Rc<dyn VisibilitySource>) {
        self.trigger.attach(source);
    }

    pub fn detach(&mut self) {
        self.trigger.detach();
    }

    /// Visibility notification. Returns whether it started the animation.
    pub fn on_visibility(&mut self, entry: VisibilityEntry, now: Instant) -> bool {
        let command = self.trigger.on_visibility(entry);
        self.apply(command, now)
    }

    pub fn pointer_enter(&mut self, now: Instant) -> bool {
        let command = self.trigger.pointer_enter();
        self.apply(command, now)
    }

    pub fn pointer_leave(&mut self, now: Instant) {
        let command = self.trigger.pointer_leave();
        self.apply(command, now);
    }

    #[must_use]
    pub fn region(&self) -> &HoverRegion {
        &self.region
    }

    /// Place the hover region on screen. Once placed, the region no longer
    /// follows the text's extent on reconfiguration.
    pub fn set_region(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.region.set_bounds(x, y, width, height);
        self.region_pinned = true;
    }

    /// Feed a terminal mouse event through the hover region.
    pub fn on_mouse(&mut self, event: &MouseEvent, now: Instant) {
        match self.region.update(event) {
            Some(PointerTransition::Enter) => {
                self.pointer_enter(now);
            }
            Some(PointerTransition::Leave) => self.pointer_leave(now),
            None => {}
        }
    }

    /// Run the pending tick if due.
    pub fn advance(&mut self, now: Instant) -> TickOutcome {
        self.engine.advance(now)
    }

    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.engine.time_until_next_tick(now)
    }

    /// Replace the options.
    ///
    /// A change to the animation resets the engine; if the trigger is still
    /// active (pointer inside in hover mode, or the view latch already fired)
    /// the animation starts over with the new options.
    pub fn reconfigure(&mut self, options: DecryptOptions, now: Instant) {
        if !self.region_pinned && options.text != self.engine.accessible_text() {
            let (width, height) = text_extent(&options.text);
            self.region.set_bounds(0, 0, width, height);
        }
        let command = self.trigger.set_animate_on(options.animate_on);
        let reset = self.engine.reconfigure(options);
        self.apply(command, now);
        if reset && self.trigger.is_active() {
            self.engine.start(now);
        }
    }

    fn apply(&mut self, command: Option<TriggerCommand>, now: Instant) -> bool {
        match command {
            Some(TriggerCommand::Start) => self.engine.start(now),
            Some(TriggerCommand::Stop) => {
                self.engine.stop();
                false
            }
            None => false,
        }
    }
}

/// Columns and rows `text` occupies when painted.
fn text_extent(text: &str) -> (u32, u32) {
    let frame = DisplayFrame::plain(text);
    (frame.width() as u32, frame.lines.len() as u32)
}
