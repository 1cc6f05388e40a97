use crate::foundation::core::Rgb8;

/// Number of built-in colors.
pub const COLOR_COUNT: usize = 6;

/// Fixed sprite palette.
///
/// Color `i` sets red when bit 2 of `i + 1` is set, green for bit 1, blue for bit 0, which
/// yields blue, green, cyan, red, magenta, yellow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPalette {
    colors: [Rgb8; COLOR_COUNT],
}

impl ColorPalette {
    /// The six built-in colors.
    pub fn builtin() -> Self {
        let colors = std::array::from_fn(|i| {
            let code = i + 1;
            let on = |bit: usize| if code & bit != 0 { 255 } else { 0 };
            Rgb8::new(on(4), on(2), on(1))
        });
        Self { colors }
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; the palette is fixed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index`, wrapping around.
    pub fn get(&self, index: usize) -> Rgb8 {
        self.colors[index % COLOR_COUNT]
    }
}
