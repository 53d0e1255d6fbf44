use chart_config::core::{
    AxisStart, ChartType, ChartVariant, CurveKind, Theme, default_chart_config,
    default_chart_config_for_tag,
};
use chart_config::error::ConfigError;

#[test]
fn line_default_matches_documented_values() {
    let config = default_chart_config(ChartType::Line);
    let common = &config.common;
    assert_eq!((common.width, common.height), (800, 400));
    assert_eq!(common.margin.top, 20.0);
    assert_eq!(common.margin.right, 30.0);
    assert_eq!(common.margin.bottom, 50.0);
    assert_eq!(common.margin.left, 60.0);
    assert!(common.show_legend && common.show_grid && common.show_tooltip && common.show_points);
    assert_eq!(common.x_axis_start, AxisStart::Auto);
    assert_eq!(common.zoom_extent.min, 1.0);
    assert_eq!(common.zoom_extent.max, 10.0);
    assert_eq!(common.theme, Theme::Auto);
    assert!(config.axis_configs.series_configs.is_empty());
    assert!(config.axis_configs.x_axis_key.is_none());
    assert!(config.formatter_config.is_none());

    let ChartVariant::Line(options) = &config.options else {
        panic!("line default must carry line options");
    };
    assert_eq!(options.curve, CurveKind::MonotoneX);
    assert!(options.disabled_lines.is_empty());
}

#[test]
fn proportional_defaults_start_unbound() {
    for chart_type in [ChartType::Pie, ChartType::Donut] {
        let config = default_chart_config(chart_type);
        let pie = config.options.pie_options().expect("pie options");
        assert!(pie.label_key.is_empty());
        assert!(pie.value_key.is_empty());
        assert!(!config.common.show_grid);
        assert_eq!((config.common.width, config.common.height), (400, 400));
    }
    let pie = default_chart_config(ChartType::Pie);
    assert_eq!(pie.options.pie_options().map(|p| p.inner_radius), Some(0.0));
}

#[test]
fn heatmap_default_has_no_keys() {
    let config = default_chart_config(ChartType::Heatmap);
    let heatmap = config.options.heatmap_options().expect("heatmap options");
    assert!(heatmap.x_axis_key.is_none());
    assert!(heatmap.y_axis_key.is_none());
    assert!(heatmap.value_key.is_none());
}

#[test]
fn defaults_are_independent_values() {
    let mut first = default_chart_config(ChartType::Bar);
    first.common.title = "Revenue".to_owned();
    first.common.colors.insert(
        "accent".to_owned(),
        chart_config::core::ThemedColor::new("#000000", "#ffffff"),
    );

    let second = default_chart_config(ChartType::Bar);
    assert!(second.common.title.is_empty());
    assert!(second.common.colors.get("accent").is_none());
    assert_ne!(first, second);
}

#[test]
fn every_tag_round_trips_through_the_factory() {
    for chart_type in ChartType::ALL {
        let config = default_chart_config_for_tag(chart_type.as_str()).expect("known tag");
        assert_eq!(config.chart_type(), chart_type);
        assert_eq!(config, default_chart_config(chart_type));
    }
}

#[test]
fn unknown_tag_is_rejected() {
    let err = default_chart_config_for_tag("radar").expect_err("radar is not supported");
    assert_eq!(err, ConfigError::UnsupportedChartType("radar".to_owned()));
}
