//! Window background appearance

/// RGBA colour, 8 bits per channel.
pub type Rgba = (u8, u8, u8, u8);

/// How the window background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// Windowed: clear background, non-opaque, no shadow. Only the clock
    /// face itself is visible.
    Transparent,
    /// Fullscreen: opaque black backdrop around the clock.
    OpaqueBlack,
}

impl Appearance {
    pub fn for_fullscreen(fullscreen: bool) -> Self {
        if fullscreen {
            Appearance::OpaqueBlack
        } else {
            Appearance::Transparent
        }
    }

    pub fn background(self) -> Rgba {
        match self {
            Appearance::Transparent => (0, 0, 0, 0),
            Appearance::OpaqueBlack => (0, 0, 0, 255),
        }
    }

    pub fn is_opaque(self) -> bool {
        matches!(self, Appearance::OpaqueBlack)
    }

    pub fn has_shadow(self) -> bool {
        false
    }
}
