/// Degree arithmetic on a circle, see https://en.wikipedia.org/wiki/Modular_arithmetic.
pub trait DegreesExt {
    /// Wraps `self` into `[0, 360)`.
    fn normalize_360(self) -> Self;

    /// Returns the signed shortest rotation from `from` to `self`, in `(-180, 180]`.
    fn shortest_diff_from(self, from: Self) -> Self;
}

macro_rules! impl_degrees_ext {
    ($($t:ty)*) => ($(
        impl DegreesExt for $t {
            fn normalize_360(self) -> $t {
                let wrapped = self.rem_euclid(360.0);
                // rem_euclid may round up to the modulus for tiny negative inputs
                if wrapped >= 360.0 { 0.0 } else { wrapped }
            }

            fn shortest_diff_from(self, from: $t) -> $t {
                let diff = (self - from + 540.0).rem_euclid(360.0) - 180.0;
                if diff <= -180.0 { diff + 360.0 } else { diff }
            }
        }
    )*)
}

impl_degrees_ext! { f32 f64 }

/// Wraps `degrees` into `[0, 360)`.
pub fn normalize_360(degrees: f64) -> f64 {
    degrees.normalize_360()
}

/// Signed shortest rotation from `current` to `target`, in `(-180, 180]`.
pub fn shortest_angle_diff(target: f64, current: f64) -> f64 {
    target.shortest_diff_from(current)
}
