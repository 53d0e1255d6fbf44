use std::borrow::Cow;

use chart_config::binding::{
    BindingField, build_reset_bindings_patch, cleanup_chart_config,
    cleanup_chart_config_with_report, migrate_legacy_column_indices,
};
use chart_config::core::{
    ChartConfiguration, ChartType, ChartVariant, ColumnType, DataHeader, SeriesConfig,
    default_chart_config,
};

fn salary_chart() -> ChartConfiguration {
    ChartConfiguration::from_json_str(
        r#"{
            "chartType": "line",
            "axisConfigs": {
                "xAxisKey": "age",
                "seriesConfigs": [{ "id": "s1", "dataColumn": "salary" }]
            }
        }"#,
    )
    .expect("valid config json")
}

#[test]
fn stale_series_is_removed_and_live_axis_kept() {
    let config = salary_chart();
    let headers = vec![DataHeader::named("age"), DataHeader::named("bonus")];

    let (cleaned, report) = cleanup_chart_config_with_report(&config, &headers);
    assert!(matches!(cleaned, Cow::Owned(_)));
    assert!(cleaned.axis_configs.series_configs.is_empty());
    assert_eq!(cleaned.axis_configs.x_axis_key.as_deref(), Some("age"));
    assert_eq!(report.removed_series(), vec!["s1"]);
    assert_eq!(report.cleared.len(), 1);
    assert_eq!(report.cleared[0].column, "salary");

    // Input untouched.
    assert_eq!(config.axis_configs.series_configs.len(), 1);
}

#[test]
fn removed_series_leave_no_hidden_series_toggle() {
    let headers = vec![DataHeader::named("age"), DataHeader::named("bonus")];
    let line = ChartConfiguration::from_json_str(
        r#"{
            "chartType": "line",
            "disabledLines": ["s1", "s2"],
            "axisConfigs": {
                "xAxisKey": "age",
                "seriesConfigs": [
                    { "id": "s1", "dataColumn": "salary" },
                    { "id": "s2", "dataColumn": "bonus" }
                ]
            }
        }"#,
    )
    .expect("valid config json");

    let cleaned = cleanup_chart_config(&line, &headers);
    let ChartVariant::Line(options) = &cleaned.options else {
        panic!("cleanup keeps the chart type");
    };
    assert_eq!(options.disabled_lines.iter().collect::<Vec<_>>(), vec!["s2"]);
    assert_eq!(cleaned.axis_configs.series_configs.len(), 1);

    let bar = ChartConfiguration::from_json_str(
        r#"{
            "chartType": "bar",
            "disabledBars": ["s1"],
            "axisConfigs": { "seriesConfigs": [{ "id": "s1", "dataColumn": "salary" }] }
        }"#,
    )
    .expect("valid config json");
    let cleaned = cleanup_chart_config(&bar, &headers);
    let ChartVariant::Bar(options) = &cleaned.options else {
        panic!("cleanup keeps the chart type");
    };
    assert!(options.disabled_bars.is_empty());
    assert!(matches!(cleanup_chart_config(&cleaned, &headers), Cow::Borrowed(_)));
}

#[test]
fn valid_config_is_returned_by_reference() {
    let config = salary_chart();
    let headers = vec![DataHeader::named("age"), DataHeader::named("salary")];

    let cleaned = cleanup_chart_config(&config, &headers);
    match cleaned {
        Cow::Borrowed(borrowed) => assert!(std::ptr::eq(borrowed, &config)),
        Cow::Owned(_) => panic!("nothing was stale, no copy expected"),
    }
}

#[test]
fn empty_header_set_never_clears() {
    let config = salary_chart();
    let (cleaned, report) = cleanup_chart_config_with_report(&config, &[]);
    assert!(matches!(cleaned, Cow::Borrowed(_)));
    assert!(!report.changed());
}

#[test]
fn references_resolve_by_id_legacy_id_or_name() {
    let mut config = default_chart_config(ChartType::Line);
    config.axis_configs.x_axis_key = Some("col_1".to_owned());
    config
        .axis_configs
        .series_configs
        .push(SeriesConfig::new("s1", "Revenue", "old-revenue", 0));
    config
        .axis_configs
        .series_configs
        .push(SeriesConfig::new("s2", "Cost", "Cost", 1));

    let headers = vec![
        DataHeader::new("col_1", "Month", ColumnType::Date),
        DataHeader::new("col_2", "Revenue", ColumnType::Number).with_legacy_id("old-revenue"),
        DataHeader::new("col_3", "Cost", ColumnType::Number),
    ];
    assert!(matches!(
        cleanup_chart_config(&config, &headers),
        Cow::Borrowed(_)
    ));
}

#[test]
fn pie_keys_are_cleared_to_empty_strings() {
    let mut config = default_chart_config(ChartType::Donut);
    if let ChartVariant::Donut(options) = &mut config.options {
        options.label_key = "region".to_owned();
        options.value_key = "total".to_owned();
    }
    let headers = vec![DataHeader::named("region"), DataHeader::named("amount")];

    let (cleaned, report) = cleanup_chart_config_with_report(&config, &headers);
    let pie = cleaned.options.pie_options().expect("donut options");
    assert_eq!(pie.label_key, "region");
    assert_eq!(pie.value_key, "");
    assert_eq!(report.cleared[0].field, BindingField::PieValueKey);
    assert_eq!(cleaned.chart_type(), ChartType::Donut);
}

#[test]
fn heatmap_and_cycle_keys_are_cleared() {
    let mut heatmap = default_chart_config(ChartType::Heatmap);
    if let ChartVariant::Heatmap(options) = &mut heatmap.options {
        options.x_axis_key = Some("day".to_owned());
        options.y_axis_key = Some("hour".to_owned());
        options.value_key = Some("visits".to_owned());
    }
    let headers = vec![DataHeader::named("day"), DataHeader::named("visits")];
    let cleaned = cleanup_chart_config(&heatmap, &headers);
    let options = cleaned.options.heatmap_options().expect("heatmap options");
    assert_eq!(options.x_axis_key.as_deref(), Some("day"));
    assert!(options.y_axis_key.is_none());
    assert_eq!(options.value_key.as_deref(), Some("visits"));

    let mut cycle = default_chart_config(ChartType::Cycleplot);
    cycle.axis_configs.cycle_key = Some("year".to_owned());
    cycle.axis_configs.period_key = Some("month".to_owned());
    cycle.axis_configs.value_key = Some("rain".to_owned());
    let headers = vec![DataHeader::named("year"), DataHeader::named("rain")];
    let cleaned = cleanup_chart_config(&cycle, &headers);
    assert_eq!(cleaned.axis_configs.cycle_key.as_deref(), Some("year"));
    assert!(cleaned.axis_configs.period_key.is_none());
    assert_eq!(cleaned.axis_configs.value_key.as_deref(), Some("rain"));
}

#[test]
fn unbound_series_survive_cleanup() {
    let mut config = default_chart_config(ChartType::Bar);
    config
        .axis_configs
        .series_configs
        .push(SeriesConfig::new("s1", "Pending", "", 0));
    let headers = vec![DataHeader::named("a")];
    assert!(matches!(
        cleanup_chart_config(&config, &headers),
        Cow::Borrowed(_)
    ));
}

#[test]
fn cleanup_is_idempotent() {
    let config = salary_chart();
    let headers = vec![DataHeader::named("bonus")];
    let once = cleanup_chart_config(&config, &headers).into_owned();
    assert!(once.axis_configs.x_axis_key.is_none());
    assert!(matches!(
        cleanup_chart_config(&once, &headers),
        Cow::Borrowed(_)
    ));
}

#[test]
fn reset_patch_clears_bindings_for_every_type() {
    for chart_type in ChartType::ALL {
        let mut config = default_chart_config(chart_type);
        config.common.title = "Kept".to_owned();
        config.axis_configs.x_axis_key = Some("x".to_owned());
        config
            .axis_configs
            .series_configs
            .push(SeriesConfig::new("s1", "One", "y", 0));
        config.axis_configs.cycle_key = Some("c".to_owned());
        match &mut config.options {
            ChartVariant::Pie(options) | ChartVariant::Donut(options) => {
                options.label_key = "l".to_owned();
                options.value_key = "v".to_owned();
            }
            ChartVariant::Heatmap(options) => {
                options.x_axis_key = Some("x".to_owned());
                options.value_key = Some("v".to_owned());
            }
            _ => {}
        }

        let patch = build_reset_bindings_patch(&config);
        let reset = config.apply_patch(&patch).expect("reset patch applies");
        assert_eq!(reset.common.title, "Kept");
        assert_eq!(reset.chart_type(), chart_type);

        if chart_type.uses_series() {
            assert!(reset.axis_configs.x_axis_key.is_none());
            assert!(reset.axis_configs.series_configs.is_empty());
        }
        match &reset.options {
            ChartVariant::Pie(options) | ChartVariant::Donut(options) => {
                assert!(options.label_key.is_empty() && options.value_key.is_empty());
            }
            ChartVariant::Heatmap(options) => {
                assert!(options.x_axis_key.is_none() && options.value_key.is_none());
            }
            ChartVariant::Cycleplot(_) => assert!(reset.axis_configs.cycle_key.is_none()),
            _ => {}
        }
    }
}

#[test]
fn legacy_column_indices_are_migrated() {
    let mut config = default_chart_config(ChartType::Line);
    let mut legacy = SeriesConfig::new("s1", "Sales", "", 0);
    legacy.column_index = Some(1);
    let mut out_of_range = SeriesConfig::new("s2", "Lost", "", 1);
    out_of_range.column_index = Some(9);
    config.axis_configs.series_configs = vec![legacy, out_of_range];

    let headers = vec![
        DataHeader::new("h_date", "Date", ColumnType::Date),
        DataHeader::new("h_sales", "Sales", ColumnType::Number),
    ];
    let migrated = migrate_legacy_column_indices(&config, &headers);
    let series = &migrated.axis_configs.series_configs;
    assert_eq!(series[0].data_column, "h_sales");
    assert!(series[0].column_index.is_none());
    assert_eq!(series[1].data_column, "");
    assert!(series[1].column_index.is_none());
}
