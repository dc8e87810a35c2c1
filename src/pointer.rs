//! Pointer events and hover detection over a screen region.
//!
//! Terminals report mouse motion as positioned events, not enter/leave
//! notifications. [`HoverRegion`] turns the former into the latter for the
//! cells a decrypting text occupies.

/// Mouse button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// No button (for move events).
    None,
}

/// Kind of mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    Press,
    Release,
    Move,
    ScrollUp,
    ScrollDown,
}

/// A mouse event in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    /// X position (column).
    pub x: u32,
    /// Y position (row).
    pub y: u32,
    pub button: MouseButton,
    pub kind: MouseEventKind,
}

impl MouseEvent {
    #[must_use]
    pub fn new(x: u32, y: u32, button: MouseButton, kind: MouseEventKind) -> Self {
        Self { x, y, button, kind }
    }

    /// Create a move event.
    #[must_use]
    pub fn move_to(x: u32, y: u32) -> Self {
        Self::new(x, y, MouseButton::None, MouseEventKind::Move)
    }

    /// Create a press event.
    #[must_use]
    pub fn press(x: u32, y: u32, button: MouseButton) -> Self {
        Self::new(x, y, button, MouseEventKind::Press)
    }
}

/// Edge produced when the pointer crosses a region boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTransition {
    Enter,
    Leave,
}

/// Rectangle of cells that reacts to hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverRegion {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    inside: bool,
}

impl HoverRegion {
    #[must_use]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            inside: false,
        }
    }

    /// Check whether a cell lies inside the region.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x.saturating_add(self.width)
            && y < self.y.saturating_add(self.height)
    }

    /// Whether the pointer was last seen inside.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.inside
    }

    /// Move or resize the region. A pointer that was inside stays inside until
    /// the next event says otherwise.
    pub fn set_bounds(&mut self, x: u32, y: u32, width: u32, height: u32) {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    /// Feed a mouse event; returns an edge when the inside/outside state
    /// changes. Scroll events carry a position too and count as motion.
    pub fn update(&mut self, event: &MouseEvent) -> Option<PointerTransition> {
        let now_inside = self.contains(event.x, event.y);
        match (self.inside, now_inside) {
            (false, true) => {
                self.inside = true;
                Some(PointerTransition::Enter)
            }
            (true, false) => {
                self.inside = false;
                Some(PointerTransition::Leave)
            }
            _ => None,
        }
    }

    /// The pointer left the terminal entirely (focus lost).
    pub fn pointer_lost(&mut self) -> Option<PointerTransition> {
        if self.inside {
            self.inside = false;
            Some(PointerTransition::Leave)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_bounds() {
        let region = HoverRegion::new(10, 5, 4, 2);
        assert!(region.contains(10, 5));
        assert!(region.contains(13, 6));
        assert!(!region.contains(14, 5));
        assert!(!region.contains(10, 7));
        assert!(!region.contains(9, 5));
    }

    #[test]
    fn test_enter_leave_edges() {
        let mut region = HoverRegion::new(0, 0, 5, 1);
        assert_eq!(region.update(&MouseEvent::move_to(10, 0)), None);
        assert_eq!(
            region.update(&MouseEvent::move_to(2, 0)),
            Some(PointerTransition::Enter)
        );
        assert!(region.is_hovered());
        assert_eq!(region.update(&MouseEvent::move_to(3, 0)), None);
        assert_eq!(
            region.update(&MouseEvent::press(4, 0, MouseButton::Left)),
            None
        );
        assert_eq!(
            region.update(&MouseEvent::move_to(3, 1)),
            Some(PointerTransition::Leave)
        );
        assert!(!region.is_hovered());
    }

    #[test]
    fn test_zero_sized_region_never_hovers() {
        let mut region = HoverRegion::new(3, 3, 0, 0);
        assert_eq!(region.update(&MouseEvent::move_to(3, 3)), None);
    }

    #[test]
    fn test_saturating_bounds() {
        let region = HoverRegion::new(u32::MAX - 1, 0, 10, 1);
        assert!(region.contains(u32::MAX - 1, 0));
    }

    #[test]
    fn test_pointer_lost() {
        let mut region = HoverRegion::new(0, 0, 2, 2);
        assert_eq!(region.pointer_lost(), None);
        region.update(&MouseEvent::move_to(1, 1));
        assert_eq!(region.pointer_lost(), Some(PointerTransition::Leave));
        assert_eq!(region.pointer_lost(), None);
    }
}
