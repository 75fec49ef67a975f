use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Either the render was abandoned or the algorithm failed on a pixel.
#[derive(Debug)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}

/// Computes every pixel of the viewport with rows spread over the rayon pool.
///
/// Output is row-major and identical to the serial path.
pub fn generate_fractal_parallel_rayon<Alg>(
    viewport: Viewport,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm,
{
    generate_fractal_parallel_rayon_cancelable(viewport, algorithm, &NeverCancel).map_err(|e| {
        match e {
            GenerateFractalError::Algorithm(alg_err) => alg_err,
            GenerateFractalError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    })
}

/// Like [`generate_fractal_parallel_rayon`], polling `cancel` before each row.
///
/// Rows already in flight finish; no partial grid is returned.
pub fn generate_fractal_parallel_rayon_cancelable<Alg, C>(
    viewport: Viewport,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
{
    let width = viewport.width();

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0
        ..viewport.height())
        .into_par_iter()
        .map(|y| {
            if cancel.is_cancelled() {
                return Err(GenerateFractalError::Cancelled(Cancelled));
            }

            (0..width)
                .map(|x| {
                    algorithm
                        .compute(Point { x, y })
                        .map_err(GenerateFractalError::Algorithm)
                })
                .collect()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
