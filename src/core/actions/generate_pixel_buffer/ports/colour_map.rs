use crate::core::data::colour::Colour;
use std::error::Error;

pub type ColourMapFailure = Box<dyn Error + Send + Sync>;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, ColourMapFailure>;

    fn display_name(&self) -> &str;
}
