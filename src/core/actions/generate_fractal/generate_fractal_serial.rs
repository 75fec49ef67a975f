use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Single-threaded reference implementation, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..viewport.height())
        .flat_map(|y| (0..viewport.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
