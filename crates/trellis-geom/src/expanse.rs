/// A width and height with no location. Backends report container sizes as
/// an `Expanse`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Expanse {
    /// Construct an expanse.
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Scale the width by a fraction, truncating toward zero.
    pub fn fraction_of_width(&self, fraction: f64) -> i32 {
        (f64::from(self.w) * fraction) as i32
    }
}
