//! Uniform random source

/// Produces samples uniformly distributed in [0, 1)
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// `Math.random()` from the host
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
