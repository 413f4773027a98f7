//! Display formatting for amounts and dates, plus the numeric helpers used
//! when projecting chart data.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, Month};

/// Format an amount as a whole-unit currency string, e.g. `$1,234`.
///
/// Amounts are rounded to the nearest whole unit. Negative amounts are
/// prefixed with `-$`.
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    let amount = amount.round();

    if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0".to_owned()
    }
}

/// Format a date for display as day, abbreviated month, and year, e.g.
/// `15 Jan 2024`.
pub fn format_date(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        short_month_name(date.month()),
        date.year()
    )
}

/// The three-letter abbreviation for a month, e.g. "Jan", "Feb".
pub fn short_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// The percentage of `total` that `value` represents.
///
/// Returns `0.0` when `total` is zero so that callers deriving chart shares
/// from an empty summary never see NaN or infinity.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }

    (value / total) * 100.0
}

/// Restrict `value` to the inclusive range [`min`, `max`].
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linearly interpolate between `start` and `end` by the factor `t`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

#[cfg(test)]
mod tests {
    use time::{Month, macros::date};

    use super::{clamp, format_currency, format_date, lerp, percentage, short_month_name};

    #[test]
    fn currency_separates_thousands() {
        assert_eq!(format_currency(60000.0), "$60,000");
    }

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(format_currency(1234.56), "$1,235");
    }

    #[test]
    fn currency_prefixes_negative_amounts() {
        assert_eq!(format_currency(-2000.0), "-$2,000");
    }

    #[test]
    fn currency_renders_zero() {
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn date_renders_day_month_year() {
        assert_eq!(format_date(date!(2024 - 01 - 15)), "15 Jan 2024");
    }

    #[test]
    fn month_names_are_three_letter_abbreviations() {
        assert_eq!(short_month_name(Month::January), "Jan");
        assert_eq!(short_month_name(Month::June), "Jun");
        assert_eq!(short_month_name(Month::December), "Dec");
    }

    #[test]
    fn percentage_of_total() {
        assert_eq!(percentage(50.0, 200.0), 25.0);
    }

    #[test]
    fn percentage_is_zero_when_total_is_zero() {
        assert_eq!(percentage(0.0, 0.0), 0.0);
        assert_eq!(percentage(50.0, 0.0), 0.0);
    }

    #[test]
    fn clamp_restricts_to_range() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn lerp_interpolates_between_endpoints() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }
}
