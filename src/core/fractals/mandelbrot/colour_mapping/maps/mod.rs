pub mod grayscale;
pub mod palette_gradient;
