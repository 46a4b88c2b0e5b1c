/// Sign that never returns zero: `-1` for negative input, `1` otherwise.
///
/// Used where a distance must pick a side even on the boundary.
#[inline]
pub fn sign(x: f32) -> f32 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Sign with a zero case: `0` for `0`, `-1` for negative, `1` for positive.
#[inline]
pub fn sign0(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}
