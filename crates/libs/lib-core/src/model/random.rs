//! Randomness seam for the effect generators.

/// Source of uniform `[0, 1)` samples.
///
/// Implemented for [`fastrand::Rng`]; the web crate seeds one from
/// `Math.random()`, tests seed one with a constant.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl RandomSource for fastrand::Rng {
    fn next_f64(&mut self) -> f64 {
        self.f64()
    }
}

/// Pick one palette entry uniformly at random.
///
/// Returns `None` only for an empty palette, which validated configuration
/// never contains.
pub fn random_star_color<'a, R: RandomSource + ?Sized>(
    palette: &'a [String],
    rng: &mut R,
) -> Option<&'a str> {
    if palette.is_empty() {
        return None;
    }
    palette.get(rng.index(palette.len())).map(String::as_str)
}
