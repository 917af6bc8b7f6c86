//! Number formatting entry points
//!
//! `formatBase` is implemented here. `formatNumber` only resolves its decimal
//! format options; applying the picture string is the job of a
//! [`DecimalFormatter`] supplied by the host.

use serde_json::Value;

use crate::error::{JlibError, JlibResult};

/// Symbols used when formatting a decimal number, after XPath's
/// `xsl:decimal-format`
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalFormat {
    pub decimal_separator: char,
    pub group_separator: char,
    pub exponent_separator: char,
    pub minus_sign: char,
    pub infinity: String,
    pub nan: String,
    pub percent: String,
    pub per_mille: String,
    pub zero_digit: char,
    pub optional_digit: char,
    pub pattern_separator: char,
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            exponent_separator: 'e',
            minus_sign: '-',
            infinity: "Infinity".to_string(),
            nan: "NaN".to_string(),
            percent: "%".to_string(),
            per_mille: "\u{2030}".to_string(),
            zero_digit: '0',
            optional_digit: '#',
            pattern_separator: ';',
        }
    }
}

impl DecimalFormat {
    /// Build a format from an options object such as
    /// `{"decimal-separator": ",", "grouping-separator": "."}`
    ///
    /// # Errors
    ///
    /// Returns `JlibError::DecimalFormat` if `options` is not an object of
    /// strings or names an unknown option.
    pub fn from_options(options: &Value) -> JlibResult<Self> {
        let Value::Object(map) = options else {
            return Err(JlibError::decimal_format("decimal format options must be a map"));
        };

        let mut format = Self::default();
        for (key, value) in map {
            let Value::String(value) = value else {
                return Err(JlibError::decimal_format(
                    "decimal format options must be a map of strings to strings",
                ));
            };
            format.set(key, value)?;
        }
        Ok(format)
    }

    /// Update a single option by name
    ///
    /// # Errors
    ///
    /// Returns `JlibError::DecimalFormat` for unknown names and for
    /// single-character options given anything but exactly one character.
    pub fn set(&mut self, key: &str, value: &str) -> JlibResult<()> {
        match key {
            "infinity" => self.infinity = value.to_string(),
            "NaN" => self.nan = value.to_string(),
            "percent" => self.percent = value.to_string(),
            "per-mille" => self.per_mille = value.to_string(),
            _ => {
                let slot = match key {
                    "decimal-separator" => &mut self.decimal_separator,
                    "grouping-separator" => &mut self.group_separator,
                    "exponent-separator" => &mut self.exponent_separator,
                    "minus-sign" => &mut self.minus_sign,
                    "zero-digit" => &mut self.zero_digit,
                    "digit" => &mut self.optional_digit,
                    "pattern-separator" => &mut self.pattern_separator,
                    _ => {
                        return Err(JlibError::decimal_format(format!("unknown option {key:?}")));
                    }
                };
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => *slot = c,
                    _ => {
                        return Err(JlibError::decimal_format(format!(
                            "invalid value {value:?} for option {key:?}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Applies an XPath picture string to a number
pub trait DecimalFormatter {
    fn format(&self, value: f64, picture: &str, format: &DecimalFormat) -> JlibResult<String>;
}

impl<F> DecimalFormatter for F
where
    F: Fn(f64, &str, &DecimalFormat) -> JlibResult<String>,
{
    fn format(&self, value: f64, picture: &str, format: &DecimalFormat) -> JlibResult<String> {
        self(value, picture, format)
    }
}

/// Format `value` according to `picture`
///
/// `options`, when given, overrides symbols of the default decimal format.
///
/// # Errors
///
/// Returns `JlibError::DecimalFormat` for bad options and propagates
/// formatter errors.
pub fn format_number(
    value: f64,
    picture: &str,
    options: Option<&Value>,
    formatter: &dyn DecimalFormatter,
) -> JlibResult<String> {
    let format = match options {
        Some(options) => DecimalFormat::from_options(options)?,
        None => DecimalFormat::default(),
    };
    formatter.format(value, picture, &format)
}

/// Render `value`, rounded half to even, in the given radix (default 10)
///
/// # Errors
///
/// Returns `JlibError::Argument` unless the rounded radix is within 2..=36.
pub fn format_base(value: f64, base: Option<f64>) -> JlibResult<String> {
    let radix = base.map_or(10.0, f64::round_ties_even);
    if !(2.0..=36.0).contains(&radix) {
        return Err(JlibError::argument(
            "the second argument to formatBase must be between 2 and 36",
        ));
    }
    let radix = radix as u32;

    let n = value.round_ties_even() as i64;
    let mut magnitude = n.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        let digit = (magnitude % u64::from(radix)) as u32;
        digits.push(char::from_digit(digit, radix).unwrap_or('?'));
        magnitude /= u64::from(radix);
        if magnitude == 0 {
            break;
        }
    }
    if n < 0 {
        digits.push('-');
    }

    Ok(digits.iter().rev().collect())
}
