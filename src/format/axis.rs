use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::config::FormatterConfig;
use super::date::parse_calendar_date;
use super::spec::FormatterSpec;

/// Vertical-axis formatter: numeric tick value to label.
pub type NumericFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;
/// Horizontal-axis formatter: raw category/number/date cell to label.
pub type HorizontalFormatterFn =
    Arc<dyn for<'v> Fn(AxisValue<'v>) -> String + Send + Sync + 'static>;

/// Raw value found on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisValue<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl From<f64> for AxisValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<&'a str> for AxisValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a, T: Into<AxisValue<'a>>> From<Option<T>> for AxisValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl<'a> From<&'a Value> for AxisValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(number) => number.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(text) => Self::Text(text),
            Value::Bool(true) => Self::Text("true"),
            Value::Bool(false) => Self::Text("false"),
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Missing,
        }
    }
}

/// Builds the vertical-axis formatter for `spec`.
#[must_use]
pub fn build_vertical_formatter(spec: &FormatterSpec) -> NumericFormatterFn {
    let compiled = spec.compile();
    Arc::new(move |value| compiled.format(value))
}

/// Builds the horizontal-axis formatter for `spec`.
///
/// Missing and blank values render empty, date-typed axes parse date text
/// first (trying `date_input_format` before the built-in shapes), numeric
/// text is formatted as a number, string templates wrap any other text and
/// the rest is echoed unchanged.
#[must_use]
pub fn build_horizontal_formatter(
    spec: &FormatterSpec,
    date_input_format: Option<&str>,
) -> HorizontalFormatterFn {
    let compiled = spec.compile();
    let date_input_format = date_input_format.map(str::to_owned);
    horizontal_fn(move |value| match value {
        AxisValue::Missing => String::new(),
        AxisValue::Number(number) => compiled.format(number),
        AxisValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return String::new();
            }
            if compiled.is_date() {
                if let Some(millis) = parse_calendar_date(trimmed, date_input_format.as_deref()) {
                    return compiled.format(millis as f64);
                }
            }
            match trimmed.parse::<f64>() {
                Ok(number) if number.is_finite() => compiled.format(number),
                _ => compiled
                    .format_text(trimmed)
                    .unwrap_or_else(|| text.to_owned()),
            }
        }
    })
}

fn horizontal_fn<F>(formatter: F) -> HorizontalFormatterFn
where
    F: for<'v> Fn(AxisValue<'v>) -> String + Send + Sync + 'static,
{
    Arc::new(formatter)
}

/// Formatters of both axes; `None` means the renderer keeps its default labels.
#[derive(Clone, Default)]
pub struct AxisFormatters {
    pub x: Option<HorizontalFormatterFn>,
    pub y: Option<NumericFormatterFn>,
}

impl fmt::Debug for AxisFormatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisFormatters")
            .field("x", &self.x.is_some())
            .field("y", &self.y.is_some())
            .finish()
    }
}

impl AxisFormatters {
    /// Formats an x-axis value, falling back to a plain rendering.
    #[must_use]
    pub fn format_x<'a>(&self, value: impl Into<AxisValue<'a>>) -> String {
        let value = value.into();
        match &self.x {
            Some(formatter) => formatter(value),
            None => match value {
                AxisValue::Missing => String::new(),
                AxisValue::Number(number) => super::number::plain_number(number),
                AxisValue::Text(text) => text.to_owned(),
            },
        }
    }

    /// Formats a y-axis value, falling back to a plain rendering.
    #[must_use]
    pub fn format_y(&self, value: f64) -> String {
        match &self.y {
            Some(formatter) => formatter(value),
            None => super::number::plain_number(value),
        }
    }
}

/// Resolves the formatters of both axes from a chart's formatter config.
#[must_use]
pub fn resolve_axis_formatters(config: Option<&FormatterConfig>) -> AxisFormatters {
    resolve_axis_formatters_with_date_input(config, None)
}

/// Like [`resolve_axis_formatters`], with a strftime pattern describing how
/// the x-axis column writes its dates.
#[must_use]
pub fn resolve_axis_formatters_with_date_input(
    config: Option<&FormatterConfig>,
    date_input_format: Option<&str>,
) -> AxisFormatters {
    AxisFormatters {
        x: FormatterSpec::resolve(config.map(|config| &config.x_axis))
            .map(|spec| build_horizontal_formatter(&spec, date_input_format)),
        y: FormatterSpec::resolve(config.map(|config| &config.y_axis))
            .map(|spec| build_vertical_formatter(&spec)),
    }
}
