use serde::{Deserialize, Serialize};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_DURATION_FORMAT: &str = "hh:mm:ss";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;
/// Upper bound applied to any requested number of fraction digits.
pub const MAX_DECIMAL_PLACES: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatterType {
    #[default]
    None,
    Number,
    Currency,
    Date,
    Duration,
    String,
}

/// Placement of the currency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// `$1,234.50`
    #[default]
    Prefix,
    /// `1,234.50 $`
    Suffix,
    /// Prefix placement with negatives in parentheses: `($1,234.50)`.
    Accounting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumberNotation {
    #[default]
    Standard,
    /// `1.2K`, `3.4M`, `5B`, `1T`.
    Compact,
    /// `1.23e4`
    Scientific,
    /// Exponent restricted to multiples of three: `12.3e3`.
    Engineering,
}

/// User-facing formatting options of one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxisFormatterConfig {
    pub use_formatter: bool,
    pub formatter_type: FormatterType,
    /// Overrides the type-specific options when non-empty: a d3-style
    /// specifier for numbers and currency, a strftime pattern for dates, a
    /// token pattern for durations, a `{value}` template for strings.
    pub custom_format: String,
    pub currency_symbol: String,
    pub currency_style: CurrencyStyle,
    pub decimal_places: u8,
    pub notation: NumberNotation,
    pub date_format: String,
    pub duration_format: String,
    pub use_grouping: bool,
}

impl Default for AxisFormatterConfig {
    fn default() -> Self {
        Self {
            use_formatter: false,
            formatter_type: FormatterType::None,
            custom_format: String::new(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
            currency_style: CurrencyStyle::Prefix,
            decimal_places: DEFAULT_DECIMAL_PLACES,
            notation: NumberNotation::Standard,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            duration_format: DEFAULT_DURATION_FORMAT.to_owned(),
            use_grouping: true,
        }
    }
}

impl AxisFormatterConfig {
    /// Enabled formatter of `formatter_type` with default options.
    #[must_use]
    pub fn enabled(formatter_type: FormatterType) -> Self {
        Self {
            use_formatter: true,
            formatter_type,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_custom_format(mut self, custom_format: impl Into<String>) -> Self {
        self.custom_format = custom_format.into();
        self
    }

    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u8) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    #[must_use]
    pub fn with_notation(mut self, notation: NumberNotation) -> Self {
        self.notation = notation;
        self
    }

    #[must_use]
    pub fn with_currency(mut self, symbol: impl Into<String>, style: CurrencyStyle) -> Self {
        self.currency_symbol = symbol.into();
        self.currency_style = style;
        self
    }

    #[must_use]
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    #[must_use]
    pub fn with_duration_format(mut self, duration_format: impl Into<String>) -> Self {
        self.duration_format = duration_format.into();
        self
    }
}

/// Formatting options for both axes; each axis is configured independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatterConfig {
    pub x_axis: AxisFormatterConfig,
    pub y_axis: AxisFormatterConfig,
}
