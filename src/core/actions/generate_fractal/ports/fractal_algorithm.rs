use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel computation driven by the grid generators.
///
/// `compute` must depend only on `pixel` and the algorithm's own state: the
/// rayon generator calls it concurrently and in no particular order.
pub trait FractalAlgorithm: Sync {
    type Success: Send;
    type Failure: Error + Send;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
