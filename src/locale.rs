//! Explicit currency and date formatting rules.
//!
//! Formatting is driven by a [Locale] value passed in by the caller rather
//! than an implicit process-wide locale, so the same list of transactions
//! always renders the same way no matter where the code runs.

use time::OffsetDateTime;

/// The formatting rules for one locale: how currency amounts are grouped and
/// how calendar dates are written.
///
/// The tracker ships with [Locale::pt_br], which renders amounts like
/// `R$ 6.000,00` and dates like `12/02/2021`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    currency_symbol: &'static str,
    thousands_separator: char,
    decimal_separator: char,
}

impl Locale {
    /// Brazilian Portuguese conventions: `R$` currency marker, `.` thousands
    /// separator, `,` decimal separator, `DD/MM/YYYY` dates.
    pub fn pt_br() -> Self {
        Self {
            currency_symbol: "R$",
            thousands_separator: '.',
            decimal_separator: ',',
        }
    }

    /// Formats a non-negative currency magnitude with two decimal places and
    /// grouped thousands, e.g. `6000.0` becomes `R$ 6.000,00`.
    ///
    /// Callers guarantee a finite, non-negative magnitude; the sign of a
    /// transaction is carried by its kind and applied by
    /// [Locale::signed_currency] where the display calls for it.
    pub fn currency(&self, magnitude: f64) -> String {
        self.currency_from_cents(to_cents(magnitude))
    }

    /// Formats a currency value that may be negative.
    ///
    /// Negative values render as the magnitude prefixed with a literal `- `
    /// before the currency marker, e.g. `-175.0` becomes `- R$ 175,00`. Zero
    /// renders unsigned.
    pub fn signed_currency(&self, value: f64) -> String {
        let cents = to_cents(value);

        if cents < 0 {
            format!("- {}", self.currency_from_cents(-cents))
        } else {
            self.currency_from_cents(cents)
        }
    }

    /// Formats the calendar date of `timestamp` as `DD/MM/YYYY`.
    ///
    /// The time of day never appears in the output.
    pub fn date(&self, timestamp: OffsetDateTime) -> String {
        let date = timestamp.date();

        format!(
            "{:02}/{:02}/{:04}",
            date.day(),
            u8::from(date.month()),
            date.year()
        )
    }

    fn currency_from_cents(&self, cents: i64) -> String {
        let whole = self.group_thousands(cents / 100);
        let fraction = cents % 100;

        format!(
            "{} {whole}{}{fraction:02}",
            self.currency_symbol, self.decimal_separator
        )
    }

    fn group_thousands(&self, value: i64) -> String {
        let digits = value.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        grouped
    }
}

/// Rounds a currency value to whole cents.
fn to_cents(value: f64) -> i64 {
    (value * 100.0).round() as i64
}
