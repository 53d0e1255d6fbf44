use serde::{Deserialize, Serialize};

use super::config::{
    AxisFormatterConfig, CurrencyStyle, FormatterConfig, FormatterType, NumberNotation,
};
use super::date::{format_epoch_millis, is_valid_date_pattern, pick_date_pattern};
use super::duration::DurationPattern;
use super::number::{NumberStyle, SignMode, plain_number};

const VALUE_PLACEHOLDER: &str = "{value}";

/// The inputs a formatter function depends on, as a comparable value.
///
/// Two equal specs always build formatters with identical output, so a
/// cached formatter stays valid until the resolved spec changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatterSpec {
    pub formatter_type: FormatterType,
    pub custom_format: String,
    pub currency_symbol: String,
    pub currency_style: CurrencyStyle,
    pub decimal_places: u8,
    pub notation: NumberNotation,
    pub date_format: String,
    pub duration_format: String,
    pub use_grouping: bool,
}

impl FormatterSpec {
    /// Resolves the spec of one axis. Absent or disabled configs and the
    /// `none` type produce no spec: the renderer keeps its built-in labels.
    #[must_use]
    pub fn resolve(config: Option<&AxisFormatterConfig>) -> Option<Self> {
        let config = config.filter(|config| config.use_formatter)?;
        if config.formatter_type == FormatterType::None {
            return None;
        }
        Some(Self {
            formatter_type: config.formatter_type,
            custom_format: config.custom_format.trim().to_owned(),
            currency_symbol: config.currency_symbol.clone(),
            currency_style: config.currency_style,
            decimal_places: config.decimal_places,
            notation: config.notation,
            date_format: config.date_format.clone(),
            duration_format: config.duration_format.clone(),
            use_grouping: config.use_grouping,
        })
    }

    /// Whether the custom pattern is usable for this type. An empty custom
    /// pattern counts as valid; it simply defers to the typed options.
    #[must_use]
    pub fn custom_format_is_valid(&self) -> bool {
        let custom = self.custom_format.as_str();
        if custom.is_empty() {
            return true;
        }
        match self.formatter_type {
            FormatterType::None => true,
            FormatterType::Number | FormatterType::Currency => {
                NumberStyle::parse_specifier(custom).is_some()
            }
            FormatterType::Date => is_valid_date_pattern(custom),
            FormatterType::Duration => DurationPattern::parse(custom).is_some(),
            FormatterType::String => custom.contains(VALUE_PLACEHOLDER),
        }
    }

    pub(crate) fn compile(&self) -> CompiledFormatter {
        let custom = Some(self.custom_format.as_str()).filter(|custom| !custom.is_empty());
        match self.formatter_type {
            FormatterType::Number | FormatterType::None => {
                CompiledFormatter::Number(self.number_style(custom))
            }
            FormatterType::Currency => CompiledFormatter::Currency {
                style: self.number_style(custom),
                symbol: self.currency_symbol.clone(),
                placement: self.currency_style,
            },
            FormatterType::Date => CompiledFormatter::Date {
                pattern: pick_date_pattern(custom.into_iter().chain([self.date_format.as_str()])),
            },
            FormatterType::Duration => CompiledFormatter::Duration(DurationPattern::pick(
                custom.into_iter().chain([self.duration_format.as_str()]),
            )),
            FormatterType::String => CompiledFormatter::Text {
                template: custom
                    .filter(|template| template.contains(VALUE_PLACEHOLDER))
                    .map(str::to_owned),
            },
        }
    }

    fn number_style(&self, custom: Option<&str>) -> NumberStyle {
        custom
            .and_then(NumberStyle::parse_specifier)
            .unwrap_or_else(|| {
                NumberStyle::from_options(self.decimal_places, self.use_grouping, self.notation)
            })
    }
}

/// Formatter ready to turn numbers into text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum CompiledFormatter {
    Number(NumberStyle),
    Currency {
        style: NumberStyle,
        symbol: String,
        placement: CurrencyStyle,
    },
    /// Values are epoch milliseconds.
    Date { pattern: String },
    /// Values are seconds.
    Duration(DurationPattern),
    Text { template: Option<String> },
}

impl CompiledFormatter {
    pub(crate) fn is_date(&self) -> bool {
        matches!(self, Self::Date { .. })
    }

    /// Renders non-numeric text; only string formatters apply to it.
    pub(crate) fn format_text(&self, text: &str) -> Option<String> {
        match self {
            Self::Text {
                template: Some(template),
            } => Some(template.replace(VALUE_PLACEHOLDER, text)),
            _ => None,
        }
    }

    pub(crate) fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return String::new();
        }
        match self {
            Self::Number(style) => {
                let text = style.format(value);
                if style.currency {
                    place_currency(text, "$", CurrencyStyle::Prefix)
                } else {
                    text
                }
            }
            Self::Currency {
                style,
                symbol,
                placement,
            } => {
                let style = match placement {
                    CurrencyStyle::Accounting => NumberStyle {
                        sign: SignMode::Parentheses,
                        ..*style
                    },
                    CurrencyStyle::Prefix | CurrencyStyle::Suffix => *style,
                };
                place_currency(style.format(value), symbol, *placement)
            }
            Self::Date { pattern } => {
                format_epoch_millis(value, pattern).unwrap_or_else(|| plain_number(value))
            }
            Self::Duration(pattern) => pattern.format(value),
            Self::Text { template } => {
                let text = plain_number(value);
                match template {
                    Some(template) => template.replace(VALUE_PLACEHOLDER, &text),
                    None => text,
                }
            }
        }
    }
}

/// Puts `symbol` next to the digits, inside any sign or parentheses.
fn place_currency(text: String, symbol: &str, placement: CurrencyStyle) -> String {
    if symbol.is_empty() {
        return text;
    }
    let (lead, rest) = match text.find(|ch: char| !matches!(ch, '-' | '+' | '(' | ' ')) {
        Some(index) => text.split_at(index),
        None => return text,
    };
    let (body, trail) = match rest.strip_suffix(')') {
        Some(body) => (body, ")"),
        None => (rest, ""),
    };
    match placement {
        CurrencyStyle::Prefix | CurrencyStyle::Accounting => format!("{lead}{symbol}{body}{trail}"),
        CurrencyStyle::Suffix => format!("{lead}{body} {symbol}{trail}"),
    }
}

/// How an axis will format its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PatternStatus {
    /// No formatter; the renderer's built-in labels apply.
    Inactive,
    /// Typed options drive the formatter.
    Options,
    /// The custom pattern is in use.
    Custom,
    /// The custom pattern was rejected and the typed options apply instead.
    InvalidCustom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatterDiagnostics {
    pub x_axis: PatternStatus,
    pub y_axis: PatternStatus,
}

impl FormatterDiagnostics {
    #[must_use]
    pub fn has_invalid_pattern(self) -> bool {
        self.x_axis == PatternStatus::InvalidCustom || self.y_axis == PatternStatus::InvalidCustom
    }
}

/// Reports, per axis, whether a formatter applies and which pattern feeds it.
/// Malformed patterns are reported, never raised.
#[must_use]
pub fn validate_formatter_config(config: Option<&FormatterConfig>) -> FormatterDiagnostics {
    let status = |axis: Option<&AxisFormatterConfig>| match FormatterSpec::resolve(axis) {
        None => PatternStatus::Inactive,
        Some(spec) if spec.custom_format.is_empty() => PatternStatus::Options,
        Some(spec) if spec.custom_format_is_valid() => PatternStatus::Custom,
        Some(_) => PatternStatus::InvalidCustom,
    };
    FormatterDiagnostics {
        x_axis: status(config.map(|config| &config.x_axis)),
        y_axis: status(config.map(|config| &config.y_axis)),
    }
}
