/// Round to the nearest integer, ties away from zero.
pub(crate) fn round_half_away(x: f64) -> i64 {
    x.round() as i64
}

/// `true` when `pos` lies in `[margin, dim - 1 - margin]`, widened by `eps` on both ends.
pub(crate) fn within_interior(pos: f64, margin: u32, dim: u32, eps: f64) -> bool {
    let lo = f64::from(margin) - eps;
    let hi = f64::from(dim) - 1.0 - f64::from(margin) + eps;
    pos >= lo && pos <= hi
}

/// `under + alpha * (over - under)`, rounded and truncated to 8 bits.
pub(crate) fn blend_u8(under: u8, over: u8, alpha: f32) -> u8 {
    let u = f32::from(under);
    let out = u + alpha * (f32::from(over) - u);
    out.round().clamp(0.0, 255.0) as u8
}

/// Map a uniform sample in `[0, 1)` to an index in `0..n`.
pub(crate) fn uniform_index(u: f64, n: usize) -> usize {
    ((u * n as f64).floor() as usize).min(n.saturating_sub(1))
}

/// Map a uniform sample in `[0, 1)` to `1 + var * (2u - 1)`, i.e. `[1 - var, 1 + var)`.
pub(crate) fn symmetric_jitter(u: f64, var: f64) -> f64 {
    1.0 + var * (2.0 * u - 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
