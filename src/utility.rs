/// Numeric helpers used by the Gauss-Krüger series.
///
/// The hyperbolic functions are written out with their exponential
/// identities so results match the published Lantmäteriet formulas bit for
/// bit instead of depending on the platform's libm.
pub(crate) trait GeoMath {
    fn sinh_exp(&self) -> Self;
    fn cosh_exp(&self) -> Self;
    fn atanh_ln(&self) -> Self;
    fn round_to(&self, decimals: i32) -> Self;
}

impl GeoMath for f64 {
    fn sinh_exp(&self) -> f64 {
        0.5 * (self.exp() - (-*self).exp())
    }

    fn cosh_exp(&self) -> f64 {
        0.5 * (self.exp() + (-*self).exp())
    }

    fn atanh_ln(&self) -> f64 {
        0.5 * ((1.0 + *self) / (1.0 - *self)).ln()
    }

    /// Round half away from zero to a fixed number of decimals
    fn round_to(&self, decimals: i32) -> f64 {
        let factor = 10_f64.powi(decimals);
        let scaled = *self * factor;
        if scaled.is_finite() {
            scaled.round() / factor
        } else {
            *self
        }
    }
}

/// Key used for tolerant equality and hashing of coordinate values.
///
/// The value is rounded to `decimals` places and the bit pattern of the
/// result is returned. Negative zero is folded into positive zero so that
/// `0.0 == -0.0` keeps holding after rounding.
#[allow(clippy::float_cmp)]
pub(crate) fn rounded_key(value: f64, decimals: i32) -> u64 {
    let rounded = value.round_to(decimals);
    if rounded == 0.0 {
        0_f64.to_bits()
    } else {
        rounded.to_bits()
    }
}
