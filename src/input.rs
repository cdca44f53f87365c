use crate::viewport::ViewportState;

/// Pointer position relative to the viewport center, roughly in \[-0.5, 0.5\].
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn update(&mut self, client_x: f32, client_y: f32, viewport: &ViewportState) {
        self.x = client_x / viewport.width - 0.5;
        self.y = client_y / viewport.height - 0.5;
    }
}

/// Emitted once when the settled section index changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub previous: i32,
    pub current: i32,
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f32,
    pub current_section: i32,
}

impl ScrollState {
    /// Record a new scroll offset. Returns a change only when the rounded
    /// section differs from the stored one; skipped sections are not reported.
    pub fn update(&mut self, scroll_y: f32, viewport: &ViewportState) -> Option<SectionChange> {
        self.scroll_y = scroll_y;
        let section = section_index(scroll_y, viewport.height);
        if section == self.current_section {
            return None;
        }
        let change = SectionChange {
            previous: self.current_section,
            current: section,
        };
        self.current_section = section;
        Some(change)
    }
}

/// `round(scroll_y / height)` with halves rounding up, as browsers do.
#[inline]
pub fn section_index(scroll_y: f32, viewport_height: f32) -> i32 {
    (scroll_y / viewport_height + 0.5).floor() as i32
}
