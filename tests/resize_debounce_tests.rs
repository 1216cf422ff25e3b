use std::time::{Duration, Instant};

use chart_lifecycle::api::{
    ChartConfigBuilder, ChartLifecycleManager, ExternalSignal, ManagerConfig, Palette,
};
use chart_lifecycle::core::{ChartKind, SeriesData, Theme, ThemeState};
use chart_lifecycle::render::{NullRenderLog, NullRendererBackend, NullSurfaceProvider};

type Manager = ChartLifecycleManager<NullSurfaceProvider, NullRendererBackend>;

fn build_manager(config: ManagerConfig) -> (Manager, NullRenderLog) {
    let backend = NullRendererBackend::new();
    let log = backend.log();
    let provider = NullSurfaceProvider::with_surfaces(["tenureChart", "paymentChart"]);
    let mut manager =
        ChartLifecycleManager::with_config(provider, backend, ThemeState::new(), config)
            .expect("manager init");

    for id in ["tenureChart", "paymentChart"] {
        let series = SeriesData::new(vec![100.0, 200.0, 300.0], ["0-3 mo", "4-6 mo", "7-12 mo"])
            .expect("series");
        let config = ChartConfigBuilder::new(
            ChartKind::Line {
                fill: true,
                tension: 0.4,
            },
            Palette::premium(),
            series,
        )
        .build(Theme::Light)
        .expect("config");
        manager.create_or_replace(id, config).expect("create");
    }
    (manager, log)
}

#[test]
fn burst_of_resizes_triggers_single_pass_after_quiet_window() {
    let (mut manager, log) = build_manager(ManagerConfig::default());
    let start = Instant::now();

    for step in 0..10u64 {
        let at = start + Duration::from_millis(step * 10);
        manager.handle_viewport_resize_at(at);
        assert!(!manager.poll_timers_at(at));
    }
    let last = start + Duration::from_millis(90);
    assert_eq!(
        manager.next_timer_deadline(),
        Some(last + Duration::from_millis(250))
    );

    assert!(!manager.poll_timers_at(last + Duration::from_millis(249)));
    assert_eq!(manager.render_pass_count(), 0);

    assert!(manager.poll_timers_at(last + Duration::from_millis(250)));
    assert_eq!(manager.render_pass_count(), 1);
    assert_eq!(log.render_count(), 2);

    assert!(!manager.poll_timers_at(last + Duration::from_secs(5)));
    assert_eq!(manager.render_pass_count(), 1);
    assert!(!manager.has_pending_resize());
}

#[test]
fn resize_after_fired_pass_schedules_a_new_one() {
    let (mut manager, _log) = build_manager(ManagerConfig::default());
    let start = Instant::now();

    manager.handle_viewport_resize_at(start);
    assert!(manager.poll_timers_at(start + Duration::from_millis(300)));

    let later = start + Duration::from_secs(1);
    manager.handle_viewport_resize_at(later);
    assert!(manager.has_pending_resize());
    assert!(manager.poll_timers_at(later + Duration::from_millis(250)));
    assert_eq!(manager.render_pass_count(), 2);
}

#[test]
fn configured_quiet_window_is_honored() {
    let config = ManagerConfig::default().with_resize_quiet_window_ms(50);
    let (mut manager, _log) = build_manager(config);
    let start = Instant::now();

    manager.handle_viewport_resize_at(start);
    assert!(!manager.poll_timers_at(start + Duration::from_millis(49)));
    assert!(manager.poll_timers_at(start + Duration::from_millis(50)));
}

#[test]
fn dispatched_resize_signal_is_debounced() {
    let (mut manager, log) = build_manager(ManagerConfig::default());
    let start = Instant::now();

    assert!(manager.dispatch_at(ExternalSignal::ViewportResized, start));
    assert!(manager.dispatch_at(
        ExternalSignal::ViewportResized,
        start + Duration::from_millis(100)
    ));
    assert_eq!(log.render_count(), 0);

    assert!(manager.poll_timers_at(start + Duration::from_millis(350)));
    assert_eq!(manager.render_pass_count(), 1);
}

#[test]
fn render_failure_on_one_binding_does_not_stop_the_pass() {
    let backend = {
        let mut backend = NullRendererBackend::new();
        backend.fail_render_on("paymentChart");
        backend
    };
    let log = backend.log();
    let provider = NullSurfaceProvider::with_surfaces(["tenureChart", "paymentChart"]);
    let mut manager = ChartLifecycleManager::new(provider, backend, ThemeState::new());
    for id in ["paymentChart", "tenureChart"] {
        let series = SeriesData::new(vec![500.0, 300.0], ["Card", "PayPal"]).expect("series");
        let config = ChartConfigBuilder::new(ChartKind::Bar, Palette::standard(), series)
            .build(Theme::Light)
            .expect("config");
        manager.create_or_replace(id, config).expect("create");
    }

    let report = manager.render_all();
    assert_eq!(report.rendered, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(log.render_count(), 1);
    assert_eq!(manager.len(), 2);
}
