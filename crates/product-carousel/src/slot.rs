//! Slot assignment and per-slot target styles

/// Visual position of an item relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Center,
    Left,
    Right,
    Hidden,
}

/// Cyclic distance of `index` ahead of `active`: `(index - active + len) mod len`
pub fn offset(index: usize, active: usize, len: usize) -> usize {
    debug_assert!(len > 0 && index < len && active < len);
    (index + len - active) % len
}

/// Map a cyclic offset to a slot.
///
/// The wrap-around neighbour (`len - 1`) is checked before `1`, so with two
/// items the other one sits on the left.
pub fn slot_for_offset(offset: usize, len: usize) -> Slot {
    if offset == 0 {
        Slot::Center
    } else if offset == len - 1 {
        Slot::Left
    } else if offset == 1 {
        Slot::Right
    } else {
        Slot::Hidden
    }
}

/// Animatable presentation of a carousel card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStyle {
    /// Horizontal offset from the center, in card widths
    pub offset_x: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Yaw in degrees; positive turns the card's right edge away
    pub rotation_y: f32,
    pub visible: bool,
}

impl Slot {
    pub fn target_style(self) -> SlotStyle {
        match self {
            Slot::Center => SlotStyle {
                offset_x: 0.0,
                scale: 1.0,
                opacity: 1.0,
                rotation_y: 0.0,
                visible: true,
            },
            Slot::Left => SlotStyle {
                offset_x: -0.62,
                scale: 0.82,
                opacity: 0.55,
                rotation_y: 18.0,
                visible: true,
            },
            Slot::Right => SlotStyle {
                offset_x: 0.62,
                scale: 0.82,
                opacity: 0.55,
                rotation_y: -18.0,
                visible: true,
            },
            Slot::Hidden => SlotStyle {
                offset_x: 0.0,
                scale: 0.6,
                opacity: 0.0,
                rotation_y: 0.0,
                visible: false,
            },
        }
    }

    /// Paint order; higher draws on top
    pub fn depth(self) -> u8 {
        match self {
            Slot::Center => 2,
            Slot::Left | Slot::Right => 1,
            Slot::Hidden => 0,
        }
    }

    /// Only the centered card takes clicks
    pub fn is_interactive(self) -> bool {
        self == Slot::Center
    }
}
