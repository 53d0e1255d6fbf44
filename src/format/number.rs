use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::config::{MAX_DECIMAL_PLACES, NumberNotation};

/// How the sign of a number is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum SignMode {
    /// `-` for negatives only.
    #[default]
    Negative,
    /// `+` for positives, `-` for negatives.
    Always,
    /// A space in front of positives.
    Space,
    /// Negatives wrapped in parentheses.
    Parentheses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum NumberKind {
    Fixed,
    Exponent,
    Engineering,
    Compact,
    Si,
    Percent,
    Integer,
}

/// Compiled number rendering rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NumberStyle {
    pub(crate) kind: NumberKind,
    pub(crate) decimals: usize,
    pub(crate) grouping: bool,
    pub(crate) trim_zeros: bool,
    pub(crate) sign: SignMode,
    /// Set by a `$` in a custom specifier.
    pub(crate) currency: bool,
}

impl NumberStyle {
    pub(crate) fn from_options(decimals: u8, grouping: bool, notation: NumberNotation) -> Self {
        let kind = match notation {
            NumberNotation::Standard => NumberKind::Fixed,
            NumberNotation::Compact => NumberKind::Compact,
            NumberNotation::Scientific => NumberKind::Exponent,
            NumberNotation::Engineering => NumberKind::Engineering,
        };
        Self {
            kind,
            decimals: usize::from(decimals.min(MAX_DECIMAL_PLACES)),
            grouping,
            // Compact labels read better without padding zeros (`1.5K`, not `1.50K`).
            trim_zeros: kind == NumberKind::Compact,
            sign: SignMode::Negative,
            currency: false,
        }
    }

    /// Parses a d3-style specifier: `[sign][$][,][.precision][~][type]`
    /// with sign one of `+ - ( space` and type one of `f e s % d`.
    ///
    /// Returns `None` for anything outside that grammar.
    pub(crate) fn parse_specifier(specifier: &str) -> Option<Self> {
        let mut chars = specifier.chars().peekable();
        let mut style = Self {
            kind: NumberKind::Fixed,
            decimals: 0,
            grouping: false,
            trim_zeros: false,
            sign: SignMode::Negative,
            currency: false,
        };

        style.sign = match chars.peek() {
            Some('+') => SignMode::Always,
            Some('-') => SignMode::Negative,
            Some('(') => SignMode::Parentheses,
            Some(' ') => SignMode::Space,
            _ => SignMode::Negative,
        };
        if matches!(chars.peek(), Some('+' | '-' | '(' | ' ')) {
            chars.next();
        }
        if chars.next_if_eq(&'$').is_some() {
            style.currency = true;
        }
        if chars.next_if_eq(&',').is_some() {
            style.grouping = true;
        }

        let mut precision = None;
        if chars.next_if_eq(&'.').is_some() {
            let mut digits = String::new();
            while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                digits.push(digit);
            }
            let value: u8 = digits.parse().ok()?;
            if value > MAX_DECIMAL_PLACES {
                return None;
            }
            precision = Some(usize::from(value));
        }
        if chars.next_if_eq(&'~').is_some() {
            style.trim_zeros = true;
        }

        let type_char = chars.next();
        let has_type = type_char.is_some();
        style.kind = match type_char {
            None | Some('f') => NumberKind::Fixed,
            Some('e') => NumberKind::Exponent,
            Some('s') => NumberKind::Si,
            Some('%') => NumberKind::Percent,
            Some('d') => NumberKind::Integer,
            Some(_) => return None,
        };
        if chars.next().is_some() {
            return None;
        }

        style.decimals = match (style.kind, precision, has_type) {
            (NumberKind::Integer, _, _) => 0,
            (_, Some(precision), _) => precision,
            // No type and no precision: shortest rendering.
            (_, None, false) => {
                style.trim_zeros = true;
                usize::from(MAX_DECIMAL_PLACES)
            }
            (_, None, true) => DEFAULT_SPECIFIER_PRECISION,
        };
        Some(style)
    }

    /// Renders the magnitude and sign; currency placement is the caller's job.
    pub(crate) fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return String::new();
        }
        if value.is_infinite() {
            return apply_sign("\u{221e}".to_owned(), value < 0.0, self.sign);
        }

        let magnitude = value.abs();
        let body = match self.kind {
            NumberKind::Fixed => self.fixed(magnitude),
            NumberKind::Integer => fixed_body(magnitude, 0, self.grouping, false),
            NumberKind::Percent => format!("{}%", self.fixed(magnitude * 100.0)),
            NumberKind::Exponent => exponent_body(magnitude, self.decimals, self.trim_zeros),
            NumberKind::Engineering => engineering_body(magnitude, self.decimals, self.trim_zeros),
            NumberKind::Compact => self.scaled(magnitude, &COMPACT_SUFFIXES),
            NumberKind::Si => self.scaled(magnitude, &SI_SUFFIXES),
        };

        // A value that rounds to zero never carries a minus sign.
        let negative = value < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
        apply_sign(body, negative, self.sign)
    }

    fn fixed(&self, magnitude: f64) -> String {
        fixed_body(magnitude, self.decimals, self.grouping, self.trim_zeros)
    }

    fn scaled(&self, magnitude: f64, suffixes: &[(f64, &str)]) -> String {
        let position = suffixes
            .iter()
            .position(|(threshold, _)| magnitude >= *threshold);
        let (mut divisor, mut suffix) = position.map_or((1.0, ""), |index| suffixes[index]);
        // Rounding can carry the scaled value to 1000 (999.95K -> 1000.0K).
        let larger = match position {
            Some(index) => index.checked_sub(1),
            None => suffixes.len().checked_sub(1),
        };
        if let Some(&(threshold, larger_suffix)) = larger.and_then(|index| suffixes.get(index)) {
            if threshold > divisor && rounds_to_at_least(magnitude / divisor, self.decimals, 1000.0) {
                (divisor, suffix) = (threshold, larger_suffix);
            }
        }
        let mut body = fixed_body(magnitude / divisor, self.decimals, self.grouping, self.trim_zeros);
        body.push_str(suffix);
        body
    }
}

/// Precision a specifier with a type but no `.precision` falls back to.
const DEFAULT_SPECIFIER_PRECISION: usize = 6;

const COMPACT_SUFFIXES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

const SI_SUFFIXES: [(f64, &str); 8] = [
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "\u{b5}"),
    (1e-9, "n"),
];

fn apply_sign(body: String, negative: bool, sign: SignMode) -> String {
    match (sign, negative) {
        (SignMode::Parentheses, true) => format!("({body})"),
        (_, true) => format!("-{body}"),
        (SignMode::Always, false) => format!("+{body}"),
        (SignMode::Space, false) => format!(" {body}"),
        (SignMode::Negative | SignMode::Parentheses, false) => body,
    }
}

/// Rounds half away from zero to `decimals` places and renders the result
/// without sign.
pub(crate) fn fixed_body(magnitude: f64, decimals: usize, grouping: bool, trim_zeros: bool) -> String {
    let text = round_to_string(magnitude, decimals);
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_owned(), fraction.to_owned()),
        None => (text, String::new()),
    };

    let integer = if grouping {
        group_digits(&integer)
    } else {
        integer
    };
    let mut fraction = format!("{fraction:0<decimals$}");
    if trim_zeros {
        let trimmed = fraction.trim_end_matches('0').len();
        fraction.truncate(trimmed);
    }

    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

fn round_to_string(magnitude: f64, decimals: usize) -> String {
    let dp = u32::try_from(decimals).unwrap_or(u32::from(MAX_DECIMAL_PLACES));
    match Decimal::from_f64(magnitude) {
        Some(decimal) => decimal
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
            .to_string(),
        // Outside the decimal range; binary rounding is close enough there.
        None => format!("{magnitude:.decimals$}"),
    }
}

fn rounds_to_at_least(value: f64, decimals: usize, bound: f64) -> bool {
    round_to_string(value, decimals)
        .parse::<f64>()
        .is_ok_and(|rounded| rounded >= bound)
}

fn group_digits(integer: &str) -> String {
    match integer.parse::<u128>() {
        Ok(value) => value.to_formatted_string(&Locale::en),
        Err(_) => integer.to_owned(),
    }
}

fn exponent_body(magnitude: f64, decimals: usize, trim_zeros: bool) -> String {
    let text = format!("{magnitude:.decimals$e}");
    if trim_zeros { trim_mantissa(&text) } else { text }
}

fn engineering_body(magnitude: f64, decimals: usize, trim_zeros: bool) -> String {
    if magnitude == 0.0 {
        return format!("{}e0", fixed_body(0.0, decimals, false, trim_zeros));
    }
    let mut exponent = (magnitude.log10().floor() as i32).div_euclid(3) * 3;
    let mut mantissa_text = fixed_body(scale_down(magnitude, exponent), decimals, false, trim_zeros);
    // Rounding can carry the mantissa to 1000 (999.96 -> 1000.0).
    if mantissa_text
        .split('.')
        .next()
        .is_some_and(|integer| integer.len() > 3)
    {
        exponent += 3;
        mantissa_text = fixed_body(scale_down(magnitude, exponent), decimals, false, trim_zeros);
    }
    format!("{mantissa_text}e{exponent}")
}

/// `magnitude / 10^exponent` in two steps, so subnormal inputs do not divide
/// by a power of ten that underflows to zero.
fn scale_down(magnitude: f64, exponent: i32) -> f64 {
    let half = exponent / 2;
    magnitude / 10f64.powi(half) / 10f64.powi(exponent - half)
}

fn trim_mantissa(text: &str) -> String {
    match text.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
            format!("{mantissa}e{exponent}")
        }
        _ => text.to_owned(),
    }
}

/// Shortest plain rendering of a number, `42` rather than `42.0`.
pub(crate) fn plain_number(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(fixed_body(2.5, 0, false, false), "3");
        assert_eq!(fixed_body(0.125, 2, false, false), "0.13");
    }

    #[test]
    fn pads_and_groups() {
        assert_eq!(fixed_body(1234567.5, 2, true, false), "1,234,567.50");
        assert_eq!(fixed_body(1.5, 3, false, true), "1.5");
    }

    #[test]
    fn specifier_grammar() {
        let style = NumberStyle::parse_specifier(",.2f").expect("valid");
        assert!(style.grouping);
        assert_eq!(style.decimals, 2);
        assert_eq!(style.format(-1234.567), "-1,234.57");

        assert_eq!(
            NumberStyle::parse_specifier(".1%").map(|s| s.format(0.256)),
            Some("25.6%".to_owned())
        );
        assert_eq!(
            NumberStyle::parse_specifier("+d").map(|s| s.format(41.6)),
            Some("+42".to_owned())
        );
        assert!(NumberStyle::parse_specifier(".2q").is_none());
        assert!(NumberStyle::parse_specifier(".99f").is_none());
        assert!(NumberStyle::parse_specifier("#,##0.00").is_none());
    }

    #[test]
    fn scaled_notations() {
        let compact = NumberStyle::from_options(1, false, NumberNotation::Compact);
        assert_eq!(compact.format(1_500.0), "1.5K");
        assert_eq!(compact.format(2_000_000.0), "2M");
        assert_eq!(compact.format(12.0), "12");

        let si = NumberStyle::parse_specifier(".1~s").expect("valid");
        assert_eq!(si.format(0.0042), "4.2m");
    }

    #[test]
    fn scaled_suffix_follows_rounding_carry() {
        let compact = NumberStyle::from_options(1, true, NumberNotation::Compact);
        assert_eq!(compact.format(999_950.0), "1M");
        assert_eq!(compact.format(999_999_999.0), "1B");
        assert_eq!(compact.format(999.96), "1K");
        assert_eq!(compact.format(999_940.0), "999.9K");
        assert_eq!(compact.format(-999_950.0), "-1M");

        let si = NumberStyle::parse_specifier(".1~s").expect("valid");
        assert_eq!(si.format(0.99996), "1");
        assert_eq!(si.format(999_960.0), "1M");
    }

    #[test]
    fn engineering_handles_subnormal_values() {
        let engineering = NumberStyle::from_options(2, false, NumberNotation::Engineering);
        assert_eq!(engineering.format(5e-324), "4.94e-324");
        assert_eq!(engineering.format(f64::MIN_POSITIVE), "22.25e-309");
    }

    #[test]
    fn exponent_notations() {
        let scientific = NumberStyle::from_options(2, false, NumberNotation::Scientific);
        assert_eq!(scientific.format(12_345.0), "1.23e4");

        let engineering = NumberStyle::from_options(1, false, NumberNotation::Engineering);
        assert_eq!(engineering.format(12_345.0), "12.3e3");
        assert_eq!(engineering.format(999_960.0), "1.0e6");
    }

    #[test]
    fn negative_zero_drops_its_sign() {
        let style = NumberStyle::from_options(1, false, NumberNotation::Standard);
        assert_eq!(style.format(-0.01), "0.0");
    }

    #[test]
    fn plain_numbers_drop_integral_fraction() {
        assert_eq!(plain_number(42.0), "42");
        assert_eq!(plain_number(0.25), "0.25");
    }
}
