/// Equivalent to `f32::round` but with identical results on every target.
#[inline]
pub(crate) fn roundf(x: f32) -> f32 {
    libm::roundf(x)
}
