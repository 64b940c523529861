use std::fmt;

/// Significant digits written for every number in a trace.
const SIGNIFICANT: i32 = 6;

/// Displays a float in `%g` style with [`SIGNIFICANT`] significant digits.
///
/// Trailing zeros are dropped. Scientific notation, with a signed exponent of
/// at least two digits, is used when the decimal exponent is below -4 or at
/// least the number of significant digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct General(pub f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        let mantissa_digits = usize::try_from(SIGNIFICANT - 1).unwrap_or(0);
        let scientific = format!("{value:.mantissa_digits$e}");
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= SIGNIFICANT {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_zeros(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = usize::try_from(SIGNIFICANT - 1 - exponent).unwrap_or(0);
            f.write_str(trim_zeros(&format!("{value:.decimals$}")))
        }
    }
}

fn trim_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
