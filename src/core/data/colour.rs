#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colours used when painting a maze frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MazePalette {
    pub background: Colour,
    pub floor: Colour,
    pub wall: Colour,
    pub focus: Colour,
}

impl Default for MazePalette {
    fn default() -> Self {
        Self {
            background: Colour::new(30, 30, 35),
            floor: Colour::new(30, 30, 35),
            wall: Colour::new(40, 220, 220),
            focus: Colour::new(220, 80, 240),
        }
    }
}
