//! Fixed-point numeric literal formatting.
//!
//! Graphing tools reject exponent notation, so every coefficient in the
//! emitted formulas must be a plain decimal string. Rust's `f64` `Display`
//! is locale-invariant and renders the shortest round-trip decimal, which
//! in current implementations never carries an exponent; the expansion
//! path below guards the contract against any rendering that does, and is
//! exercised directly by the tests.

/// Render a finite float as a fixed-point decimal string.
///
/// The output round-trips through `str::parse::<f64>` to the same value
/// and never contains an `e`/`E` exponent marker. Negative zero is
/// normalized to `"0"`. NaN and infinities are out of contract; glyph
/// geometry never produces them.
#[must_use]
pub fn format_literal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    let rendered = value.to_string();
    if rendered.contains(['e', 'E']) {
        expand_scientific(&rendered)
    } else {
        rendered
    }
}

/// Expand a scientific-notation rendering (`-1.23E-5`) to fixed point.
///
/// Falls back to the input unchanged if it does not parse as
/// `[-]digits[.digits][eE][-]digits`.
fn expand_scientific(rendered: &str) -> String {
    let (negative, body) = match rendered.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, rendered),
    };
    let Some((mantissa, exponent)) = body.split_once(['e', 'E']) else {
        return rendered.to_owned();
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return rendered.to_owned();
    };
    // A mantissa without a decimal point has an empty fraction part.
    let (int_digits, frac_digits) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = format!("{int_digits}{frac_digits}");

    let result = if exponent >= 0 {
        let shift = usize::try_from(exponent).unwrap_or(usize::MAX);
        if shift >= frac_digits.len() {
            // Shift consumes the whole fraction: pad trailing zeros.
            format!("{digits}{}", "0".repeat(shift - frac_digits.len()))
        } else {
            // Shift lands inside the fraction: re-insert the point.
            let point = int_digits.len() + shift;
            trim_fraction(&format!("{}.{}", &digits[..point], &digits[point..]))
        }
    } else {
        let shift = usize::try_from(-exponent).unwrap_or(usize::MAX);
        if shift >= int_digits.len() {
            let leading = "0".repeat(shift - int_digits.len());
            trim_fraction(&format!("0.{leading}{digits}"))
        } else {
            let point = int_digits.len() - shift;
            trim_fraction(&format!("{}.{}", &digits[..point], &digits[point..]))
        }
    };

    if negative {
        format!("-{result}")
    } else {
        result
    }
}

/// Strip trailing fraction zeros, and the point itself if nothing remains.
fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        s.to_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(format_literal(0.2), "0.2");
        assert_eq!(format_literal(-1.5), "-1.5");
        assert_eq!(format_literal(4.0), "4");
        assert_eq!(format_literal(0.0000123), "0.0000123");
    }

    #[test]
    fn zero_is_normalized() {
        assert_eq!(format_literal(0.0), "0");
        assert_eq!(format_literal(-0.0), "0");
    }

    #[test]
    fn large_values_have_no_exponent() {
        assert_eq!(format_literal(123_000_000.0), "123000000");
        let s = format_literal(1e21);
        assert!(!s.contains(['e', 'E']), "exponent leaked: {s}");
        assert_eq!(s.len(), 22, "1e21 should be 22 digits: {s}");
    }

    #[test]
    fn roundtrip_preserves_value() {
        let values = [
            0.1,
            -0.30000000000000004,
            1.0 / 3.0,
            4095.99998,
            1e-7,
            -2.5e-12,
            9.007_199_254_740_993e15,
            6.25e20,
        ];
        for v in values {
            let s = format_literal(v);
            assert!(!s.contains(['e', 'E']), "exponent in {s}");
            let back: f64 = s.parse().expect("parse back");
            assert_eq!(back, v, "round-trip failed for {v}: {s}");
        }
    }

    // Direct tests of the expansion path, since `Display` short-circuits
    // step 1 of the contract.

    #[test]
    fn expands_negative_exponents() {
        assert_eq!(expand_scientific("1.23E-5"), "0.0000123");
        assert_eq!(expand_scientific("-4.2e-3"), "-0.0042");
        assert_eq!(expand_scientific("1.2e-1"), "0.12");
        assert_eq!(expand_scientific("5e-4"), "0.0005");
    }

    #[test]
    fn expands_positive_exponents() {
        assert_eq!(expand_scientific("1.23E5"), "123000");
        assert_eq!(expand_scientific("5E3"), "5000");
        assert_eq!(expand_scientific("1.5e1"), "15");
        assert_eq!(expand_scientific("-2e2"), "-200");
    }

    #[test]
    fn small_positive_exponent_reinserts_the_point() {
        assert_eq!(expand_scientific("1.234e2"), "123.4");
        assert_eq!(expand_scientific("1.000500e3"), "1000.5");
    }

    #[test]
    fn negative_exponent_strips_trailing_zeros() {
        assert_eq!(expand_scientific("1.200e-2"), "0.012");
        assert_eq!(expand_scientific("2.50e-1"), "0.25");
    }
}
