#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    PaletteGradient,
    Grayscale,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::PaletteGradient, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PaletteGradient => "Palette gradient",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl std::fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
