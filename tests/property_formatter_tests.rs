use chart_config::format::{
    AxisFormatterConfig, CurrencyStyle, FormatterConfig, FormatterType, NumberNotation,
    resolve_axis_formatters,
};
use proptest::prelude::*;

fn formatter_type() -> impl Strategy<Value = FormatterType> {
    prop::sample::select(vec![
        FormatterType::None,
        FormatterType::Number,
        FormatterType::Currency,
        FormatterType::Date,
        FormatterType::Duration,
        FormatterType::String,
    ])
}

fn notation() -> impl Strategy<Value = NumberNotation> {
    prop::sample::select(vec![
        NumberNotation::Standard,
        NumberNotation::Compact,
        NumberNotation::Scientific,
        NumberNotation::Engineering,
    ])
}

fn currency_style() -> impl Strategy<Value = CurrencyStyle> {
    prop::sample::select(vec![
        CurrencyStyle::Prefix,
        CurrencyStyle::Suffix,
        CurrencyStyle::Accounting,
    ])
}

fn axis_config() -> impl Strategy<Value = AxisFormatterConfig> {
    (
        any::<bool>(),
        formatter_type(),
        "[%a-zA-Z0-9:.,$~+()' {}-]{0,12}",
        0u8..20,
        notation(),
        currency_style(),
        any::<bool>(),
    )
        .prop_map(
            |(use_formatter, formatter_type, custom, decimals, notation, style, grouping)| {
                let mut config = AxisFormatterConfig::enabled(formatter_type)
                    .with_custom_format(custom)
                    .with_decimal_places(decimals)
                    .with_notation(notation)
                    .with_currency("\u{20ac}", style)
                    .with_grouping(grouping);
                config.use_formatter = use_formatter;
                config
            },
        )
}

proptest! {
    #[test]
    fn formatters_never_panic(
        x_axis in axis_config(),
        y_axis in axis_config(),
        value in prop_oneof![
            any::<f64>(),
            Just(f64::NAN),
            Just(f64::INFINITY),
            -1e18f64..1e18,
        ],
        text in "\\PC{0,16}"
    ) {
        let config = FormatterConfig { x_axis, y_axis };
        let formatters = resolve_axis_formatters(Some(&config));
        let _ = formatters.format_y(value);
        let _ = formatters.format_x(value);
        let _ = formatters.format_x(text.as_str());
        let _ = formatters.format_x(None::<&str>);
    }

    #[test]
    fn non_date_text_is_echoed_by_date_axes(text in "[a-zA-Z ]{1,12}") {
        prop_assume!(!text.trim().is_empty());
        let config = FormatterConfig {
            x_axis: AxisFormatterConfig::enabled(FormatterType::Date),
            y_axis: AxisFormatterConfig::default(),
        };
        let formatters = resolve_axis_formatters(Some(&config));
        prop_assert_eq!(formatters.format_x(text.as_str()), text);
    }
}
