use approx::assert_relative_eq;
use chart_lifecycle::api::{
    ChartConfigBuilder, ChartLifecycleManager, ManagerConfig, Palette, RenderDefaults,
};
use chart_lifecycle::core::{
    AnimationStyle, ChartKind, Easing, FontStyle, SeriesData, Theme, ThemeColors, ThemeState,
    TooltipFormat, share_percent,
};
use chart_lifecycle::render::{Color, NullRendererBackend, NullSurfaceProvider};

fn payment_series() -> SeriesData {
    SeriesData::new(
        vec![500.0, 300.0, 400.0],
        ["Credit Card", "PayPal", "Bank Transfer"],
    )
    .expect("payment series")
}

#[test]
fn builder_resolves_defaults_and_theme_colors() {
    let config = ChartConfigBuilder::new(ChartKind::Bar, Palette::standard(), payment_series())
        .title("Payment Method Usage")
        .axis_titles(None, Some("Number of Customers"))
        .build(Theme::Dark)
        .expect("config");

    assert_eq!(config.aria_label, "bar chart");
    assert_eq!(config.title.as_deref(), Some("Payment Method Usage"));
    assert_eq!(config.axis_titles.y.as_deref(), Some("Number of Customers"));
    assert_eq!(config.style.colors, ThemeColors::DARK);
    assert_eq!(config.style.animation.duration_ms, 1000);
    assert_eq!(config.style.animation.easing, Easing::EaseOutQuart);
    assert!(config.kind.has_axes());
}

#[test]
fn palette_cycles_when_series_outgrows_it() {
    let palette = Palette::new([Color::rgb8(255, 0, 0), Color::rgb8(0, 255, 0)]).expect("palette");
    let config = ChartConfigBuilder::new(ChartKind::Bar, palette, payment_series())
        .build(Theme::Light)
        .expect("config");

    assert_eq!(config.style.color_for_index(2), Some(Color::rgb8(255, 0, 0)));
    assert_eq!(config.style.color_for_index(3), Some(Color::rgb8(0, 255, 0)));
}

#[test]
fn palette_rejects_empty_and_malformed_input() {
    assert!(Palette::new(Vec::new()).is_err());
    assert!(Palette::from_hex(["#667eea", "not-a-color"]).is_err());
    let palette = Palette::from_hex(["#667eea", "#764ba2"]).expect("palette");
    assert_eq!(palette.colors().len(), 2);
}

#[test]
fn builder_rejects_invalid_kind_geometry() {
    let series = SeriesData::new(vec![88.0, 12.0], ["Correct", "Incorrect"]).expect("series");
    let result = ChartConfigBuilder::new(
        ChartKind::Doughnut {
            cutout_percent: 140.0,
        },
        Palette::premium(),
        series,
    )
    .build(Theme::Light);
    assert!(result.is_err());
}

#[test]
fn builder_rejects_blank_accessibility_label() {
    let result = ChartConfigBuilder::new(ChartKind::Pie, Palette::standard(), payment_series())
        .aria_label("   ")
        .build(Theme::Light);
    assert!(result.is_err());
}

#[test]
fn render_defaults_flow_into_style() {
    let defaults = RenderDefaults {
        font: FontStyle {
            family: "'Plus Jakarta Sans', sans-serif".to_owned(),
            size_px: 13.0,
        },
        animation: AnimationStyle {
            duration_ms: 600,
            easing: Easing::Linear,
        },
    };
    let config = ChartConfigBuilder::new(ChartKind::Pie, Palette::standard(), payment_series())
        .with_render_defaults(&defaults)
        .build(Theme::Light)
        .expect("config");

    assert_eq!(config.style.font, defaults.font);
    assert_eq!(config.style.animation, defaults.animation);
}

#[test]
fn tooltip_formats_cover_dashboard_variants() {
    let churn = SeriesData::new(vec![300.0, 900.0], ["Churned", "Active"]).expect("series");

    let share = TooltipFormat::Share {
        unit: Some("customers".to_owned()),
    };
    assert_eq!(
        share.format(&churn, 0).as_deref(),
        Some("Churned: 300 customers (25.0%)")
    );
    assert_eq!(
        TooltipFormat::Count {
            unit: "customers".to_owned()
        }
        .format(&churn, 1)
        .as_deref(),
        Some("Active: 900 customers")
    );
    assert_eq!(TooltipFormat::Raw.format(&churn, 2), None);

    let accuracy = SeriesData::new(vec![88.0, 12.0], ["Correct", "Incorrect"]).expect("series");
    assert_eq!(
        TooltipFormat::Percent.format(&accuracy, 0).as_deref(),
        Some("Correct: 88%")
    );

    let features = SeriesData::new(vec![0.35], ["Contract Type"]).expect("series");
    assert_eq!(
        TooltipFormat::Ratio.format(&features, 0).as_deref(),
        Some("Contract Type: 35%")
    );
}

#[test]
fn share_of_empty_total_is_zero() {
    assert_relative_eq!(share_percent(0.0, 0.0), 0.0);
    assert_relative_eq!(share_percent(300.0, 1200.0), 25.0);

    let zeros = SeriesData::new(vec![0.0, 0.0], ["a", "b"]).expect("series");
    let share = TooltipFormat::Share { unit: None };
    assert_eq!(share.format(&zeros, 0).as_deref(), Some("a: 0 (0.0%)"));
}

#[test]
fn config_tooltip_text_uses_primary_series() {
    let config = ChartConfigBuilder::new(ChartKind::Pie, Palette::standard(), payment_series())
        .tooltip(TooltipFormat::Share { unit: None })
        .build(Theme::Light)
        .expect("config");
    let expected = format!("PayPal: 300 ({:.1}%)", 300.0 / 1200.0 * 100.0);
    assert_eq!(config.tooltip_text(1), Some(expected));
}

#[test]
fn manager_config_json_fills_defaults() {
    let config = ManagerConfig::from_json_str("{}").expect("empty config");
    assert_eq!(config, ManagerConfig::default());
    assert_eq!(config.resize_quiet_window_ms, 250);
    assert_eq!(config.surface_role, "img");

    let custom = ManagerConfig::from_json_str(r#"{"resize_quiet_window_ms": 100}"#)
        .expect("custom config");
    assert_eq!(custom.resize_quiet_window_ms, 100);

    let json = custom.to_json_pretty().expect("serialize");
    assert_eq!(ManagerConfig::from_json_str(&json).expect("reparse"), custom);
}

#[test]
fn manager_config_json_rejects_invalid_values() {
    assert!(ManagerConfig::from_json_str(r#"{"surface_role": ""}"#).is_err());
    assert!(
        ManagerConfig::from_json_str(
            r#"{"render_defaults": {"font": {"family": "x", "size_px": 0.0}}}"#
        )
        .is_err()
    );
    assert!(ManagerConfig::from_json_str("not json").is_err());
}

#[test]
fn manager_builder_applies_configured_render_defaults() {
    let defaults = RenderDefaults {
        font: FontStyle {
            family: "'Plus Jakarta Sans', sans-serif".to_owned(),
            size_px: 14.0,
        },
        animation: AnimationStyle {
            duration_ms: 400,
            easing: Easing::EaseOutCubic,
        },
    };
    let config = ManagerConfig::default().with_render_defaults(defaults.clone());
    let provider = NullSurfaceProvider::with_surfaces(["paymentChart"]);
    let mut manager = ChartLifecycleManager::with_config(
        provider,
        NullRendererBackend::new(),
        ThemeState::new(),
        config,
    )
    .expect("manager init");

    let chart = manager
        .config_builder(ChartKind::Bar, Palette::standard(), payment_series())
        .title("Payment Method Usage")
        .build(manager.applied_theme())
        .expect("config");
    manager
        .create_or_replace("paymentChart", chart)
        .expect("create payment");

    let binding = manager.binding("paymentChart").expect("binding");
    assert_eq!(binding.config().style.font, defaults.font);
    assert_eq!(binding.config().style.animation, defaults.animation);
    assert_eq!(
        binding.instance().expect("instance").style().font,
        defaults.font
    );
}
