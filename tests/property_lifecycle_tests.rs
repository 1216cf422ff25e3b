use std::time::{Duration, Instant};

use chart_lifecycle::api::{ChartConfigBuilder, ChartLifecycleManager, Palette};
use chart_lifecycle::core::{ChartKind, SeriesData, Theme, ThemeState};
use chart_lifecycle::render::{NullRenderEvent, NullRendererBackend, NullSurfaceProvider};
use proptest::prelude::*;

const IDS: [&str; 3] = ["churnChart", "contractChart", "missingChart"];

#[derive(Debug, Clone)]
enum Op {
    Create(usize),
    Update(usize, Vec<f64>),
    Destroy(usize),
    DestroyAll,
    Theme(bool),
    Resize(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IDS.len()).prop_map(Op::Create),
        (0..IDS.len(), prop::collection::vec(-1_000.0f64..1_000.0, 0..5))
            .prop_map(|(index, values)| Op::Update(index, values)),
        (0..IDS.len()).prop_map(Op::Destroy),
        Just(Op::DestroyAll),
        any::<bool>().prop_map(Op::Theme),
        (0u64..600).prop_map(Op::Resize),
    ]
}

fn pie_config() -> chart_lifecycle::core::ChartConfig {
    let series = SeriesData::new(vec![300.0, 900.0], ["Churned", "Active"]).expect("series");
    ChartConfigBuilder::new(ChartKind::Pie, Palette::standard(), series)
        .build(Theme::Light)
        .expect("config")
}

proptest! {
    #[test]
    fn registry_never_leaks_or_duplicates_renderers(
        ops in prop::collection::vec(op_strategy(), 1..40)
    ) {
        let provider = NullSurfaceProvider::with_surfaces(["churnChart", "contractChart"]);
        let backend = NullRendererBackend::new();
        let log = backend.log();
        let mut manager = ChartLifecycleManager::new(provider, backend, ThemeState::new());
        let mut clock = Instant::now();

        for op in ops {
            match op {
                Op::Create(index) => {
                    let _ = manager.create_or_replace(IDS[index], pie_config());
                }
                Op::Update(index, values) => {
                    let registered = manager.contains(IDS[index]);
                    let updated = manager.update_series(IDS[index], values);
                    prop_assert_eq!(updated, registered);
                }
                Op::Destroy(index) => {
                    manager.destroy(IDS[index]);
                }
                Op::DestroyAll => manager.destroy_all(),
                Op::Theme(dark) => {
                    let theme = if dark { Theme::Dark } else { Theme::Light };
                    manager.apply_theme_change(theme);
                }
                Op::Resize(step_ms) => {
                    clock += Duration::from_millis(step_ms);
                    manager.poll_timers_at(clock);
                    manager.handle_viewport_resize_at(clock);
                }
            }

            prop_assert!(!manager.contains("missingChart"));
            prop_assert_eq!(log.live_instances().len(), manager.len());
            prop_assert_eq!(
                log.constructed_count() - log.released_count(),
                manager.len()
            );
            for id in manager.ids() {
                let binding = manager.binding(id).expect("binding");
                prop_assert!(binding.is_live());
                prop_assert_eq!(binding.config().series.len(), 2);
            }
        }

        manager.destroy_all();
        prop_assert!(log.live_instances().is_empty());
        for event in log.events() {
            if let NullRenderEvent::Constructed { instance, .. } = event {
                prop_assert_eq!(log.release_calls_for(instance), 1);
            }
        }
    }

    #[test]
    fn resize_bursts_fire_exactly_once(gaps in prop::collection::vec(0u64..249, 1..20)) {
        let provider = NullSurfaceProvider::with_surfaces(["churnChart"]);
        let mut manager =
            ChartLifecycleManager::new(provider, NullRendererBackend::new(), ThemeState::new());
        manager
            .create_or_replace("churnChart", pie_config())
            .expect("create");

        let mut clock = Instant::now();
        for gap in gaps {
            clock += Duration::from_millis(gap);
            prop_assert!(!manager.poll_timers_at(clock));
            manager.handle_viewport_resize_at(clock);
        }

        prop_assert!(!manager.poll_timers_at(clock + Duration::from_millis(249)));
        prop_assert!(manager.poll_timers_at(clock + Duration::from_millis(250)));
        prop_assert!(!manager.poll_timers_at(clock + Duration::from_millis(10_000)));
        prop_assert_eq!(manager.render_pass_count(), 1);
    }
}
