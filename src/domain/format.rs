//! Display formatting for metric values.
//!
//! Currency is rounded to pence; percentages are printed in full. The two
//! deliberately disagree: `to_percent` never rounds.

/// `£` followed by the value rounded to two decimal places.
pub fn to_currency(value: f64) -> String {
    format!("£{:.2}", value)
}

/// A number that can be printed as a percentage.
///
/// Floats keep their shortest round-trip digits and always show a fractional
/// part, so a whole result prints as `16.0`. Integers print without one.
pub trait Percent {
    fn percent_digits(self) -> String;
}

impl Percent for f64 {
    fn percent_digits(self) -> String {
        format!("{:?}", self * 100.0)
    }
}

macro_rules! integer_percent {
    ($($t:ty),*) => {
        $(
            impl Percent for $t {
                fn percent_digits(self) -> String {
                    (i128::from(self) * 100).to_string()
                }
            }
        )*
    };
}

integer_percent!(i32, i64, u32, u64);

/// `value * 100` followed by `%`, without rounding.
pub fn to_percent<T: Percent>(value: T) -> String {
    format!("{}%", value.percent_digits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_keeps_two_decimals() {
        assert_eq!(to_currency(35.76), "£35.76");
        assert_eq!(to_currency(50.0), "£50.00");
        assert_eq!(to_currency(0.0), "£0.00");
    }

    #[test]
    fn currency_rounds_to_pence() {
        assert_eq!(to_currency(16000.0 / 300.0), "£53.33");
        assert_eq!(to_currency(2.0 / 3.0), "£0.67");
        // 35.765 is stored just above the half-penny
        assert_eq!(to_currency(35.765), "£35.77");
        assert_eq!(to_currency(1234.5678), "£1234.57");
    }

    #[test]
    fn percent_is_not_rounded() {
        assert_eq!(to_percent(1.0 / 3.0), "33.33333333333333%");
        assert_eq!(to_percent(0.025), "2.5%");
    }

    #[test]
    fn whole_float_percent_keeps_fraction() {
        assert_eq!(to_percent(1.0), "100.0%");
        assert_eq!(to_percent(0.0), "0.0%");
        assert_eq!(to_percent(0.16), "16.0%");
        assert_eq!(to_percent(0.02), "2.0%");
    }

    #[test]
    fn integer_percent_has_no_fraction() {
        assert_eq!(to_percent(1), "100%");
        assert_eq!(to_percent(0_u32), "0%");
        assert_eq!(to_percent(u64::MAX), format!("{}00%", u64::MAX));
        assert_eq!(to_percent(-3_i64), "-300%");
    }

    #[test]
    fn currency_rounds_where_percent_does_not() {
        let third = 1.0 / 3.0;
        assert_eq!(to_currency(third), "£0.33");
        assert_eq!(to_percent(third), "33.33333333333333%");
    }
}
