use chart_config::format::{
    AxisFormatterCache, AxisFormatterConfig, CurrencyStyle, FormatterConfig, FormatterType,
    NumberNotation, PatternStatus, resolve_axis_formatters, resolve_axis_formatters_with_date_input,
    validate_formatter_config,
};
use serde_json::json;

fn config(x_axis: AxisFormatterConfig, y_axis: AxisFormatterConfig) -> FormatterConfig {
    FormatterConfig { x_axis, y_axis }
}

#[test]
fn absent_or_disabled_config_yields_no_formatters() {
    let formatters = resolve_axis_formatters(None);
    assert!(formatters.x.is_none() && formatters.y.is_none());
    assert_eq!(formatters.format_y(1.5), "1.5");
    assert_eq!(formatters.format_x("Q1"), "Q1");

    let disabled = FormatterConfig::default();
    let formatters = resolve_axis_formatters(Some(&disabled));
    assert!(formatters.x.is_none() && formatters.y.is_none());
}

#[test]
fn date_axis_formats_dates_and_echoes_other_text() {
    let date = AxisFormatterConfig::enabled(FormatterType::Date);
    let formatters = resolve_axis_formatters(Some(&config(date, AxisFormatterConfig::default())));

    assert_eq!(formatters.format_x("2023-12-31"), "2023-12-31");
    assert_eq!(formatters.format_x("hello"), "hello");
    assert_eq!(formatters.format_x(None::<f64>), "");
    assert_eq!(formatters.format_x("   "), "");
    assert_eq!(formatters.format_x(1_703_980_800_000.0), "2023-12-31");
}

#[test]
fn date_axis_reads_years_and_months_as_period_starts() {
    let date = AxisFormatterConfig::enabled(FormatterType::Date);
    let formatters = resolve_axis_formatters(Some(&config(date, AxisFormatterConfig::default())));

    assert_eq!(formatters.format_x("2023"), "2023-01-01");
    assert_eq!(formatters.format_x("2023-12"), "2023-12-01");
    assert_eq!(formatters.format_x(&json!("1999")), "1999-01-01");
    assert_eq!(formatters.format_x("2023-13"), "2023-13");
}

#[test]
fn custom_date_pattern_and_input_hint() {
    let date = AxisFormatterConfig::enabled(FormatterType::Date).with_custom_format("%d %b %Y");
    let config = config(date, AxisFormatterConfig::default());

    let formatters = resolve_axis_formatters(Some(&config));
    assert_eq!(formatters.format_x("12/31/2023"), "31 Dec 2023");

    let hinted = resolve_axis_formatters_with_date_input(Some(&config), Some("%d.%m.%Y"));
    assert_eq!(hinted.format_x("31.12.2023"), "31 Dec 2023");
}

#[test]
fn invalid_custom_date_pattern_falls_back() {
    let date = AxisFormatterConfig::enabled(FormatterType::Date)
        .with_custom_format("%Q nonsense %")
        .with_date_format("%Y/%m/%d");
    let formatters = resolve_axis_formatters(Some(&config(date, AxisFormatterConfig::default())));
    assert_eq!(formatters.format_x("2023-12-31"), "2023/12/31");
}

#[test]
fn vertical_axis_number_and_currency() {
    let number = AxisFormatterConfig::enabled(FormatterType::Number).with_decimal_places(1);
    let formatters = resolve_axis_formatters(Some(&config(AxisFormatterConfig::default(), number)));
    assert_eq!(formatters.format_y(1234.56), "1,234.6");

    let compact = AxisFormatterConfig::enabled(FormatterType::Number)
        .with_notation(NumberNotation::Compact);
    let formatters =
        resolve_axis_formatters(Some(&config(AxisFormatterConfig::default(), compact)));
    assert_eq!(formatters.format_y(1_500.0), "1.5K");

    let rounded = AxisFormatterConfig::enabled(FormatterType::Number)
        .with_notation(NumberNotation::Compact)
        .with_decimal_places(1);
    let formatters =
        resolve_axis_formatters(Some(&config(AxisFormatterConfig::default(), rounded)));
    assert_eq!(formatters.format_y(999_950.0), "1M");
    assert_eq!(formatters.format_y(999_999_999.0), "1B");

    let currency = AxisFormatterConfig::enabled(FormatterType::Currency)
        .with_currency("$", CurrencyStyle::Accounting);
    let formatters =
        resolve_axis_formatters(Some(&config(AxisFormatterConfig::default(), currency)));
    assert_eq!(formatters.format_y(1234.5), "$1,234.50");
    assert_eq!(formatters.format_y(-1234.5), "($1,234.50)");
}

#[test]
fn duration_and_string_formatters() {
    let duration = AxisFormatterConfig::enabled(FormatterType::Duration);
    let template =
        AxisFormatterConfig::enabled(FormatterType::String).with_custom_format("{value} pts");
    let formatters = resolve_axis_formatters(Some(&config(template, duration)));

    assert_eq!(formatters.format_y(3_725.0), "01:02:05");
    assert_eq!(formatters.format_x("12"), "12 pts");
    assert_eq!(formatters.format_x(&json!("north")), "north pts");
}

#[test]
fn non_finite_values_never_panic() {
    for formatter_type in [
        FormatterType::Number,
        FormatterType::Currency,
        FormatterType::Date,
        FormatterType::Duration,
        FormatterType::String,
    ] {
        let axis = AxisFormatterConfig::enabled(formatter_type);
        let formatters = resolve_axis_formatters(Some(&config(axis.clone(), axis)));
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX, -0.0] {
            let _ = formatters.format_y(value);
            let _ = formatters.format_x(value);
        }
    }
}

#[test]
fn diagnostics_report_custom_pattern_state() {
    let config = config(
        AxisFormatterConfig::enabled(FormatterType::Date).with_custom_format("%Q"),
        AxisFormatterConfig::enabled(FormatterType::Number).with_custom_format(",.2f"),
    );
    let diagnostics = validate_formatter_config(Some(&config));
    assert_eq!(diagnostics.x_axis, PatternStatus::InvalidCustom);
    assert_eq!(diagnostics.y_axis, PatternStatus::Custom);

    let diagnostics = validate_formatter_config(None);
    assert_eq!(diagnostics.x_axis, PatternStatus::Inactive);
}

#[test]
fn cache_rebuilds_only_when_spec_changes() {
    let mut cache = AxisFormatterCache::new();
    let mut config = config(
        AxisFormatterConfig::enabled(FormatterType::Date),
        AxisFormatterConfig::enabled(FormatterType::Number),
    );

    let first = cache.resolve(Some(&config));
    let stats = cache.stats();
    assert_eq!((stats.x_generation, stats.y_generation), (1, 1));

    let second = cache.resolve(Some(&config));
    assert_eq!(cache.stats(), stats);
    let (Some(a), Some(b)) = (&first.y, &second.y) else {
        panic!("y formatter expected");
    };
    assert!(std::sync::Arc::ptr_eq(a, b));

    config.y_axis = config.y_axis.with_decimal_places(0);
    let third = cache.resolve(Some(&config));
    assert_eq!(cache.stats().x_generation, 1);
    assert_eq!(cache.stats().y_generation, 2);
    assert_eq!(third.format_y(2.5), "3");

    cache.clear();
    assert_eq!(cache.stats().y_generation, 0);
}
