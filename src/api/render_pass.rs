use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::Theme;
use crate::error::ChartResult;
use crate::extensions::LifecycleEvent;
use crate::render::{RendererBackend, RendererInstance, SurfaceProvider};

use super::{ChartBinding, ChartLifecycleManager};

/// Outcome of one pass over all live bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderPassReport {
    pub rendered: usize,
    pub failed: usize,
}

impl<P, B> ChartLifecycleManager<P, B>
where
    P: SurfaceProvider,
    B: RendererBackend<Surface = P::Surface>,
{
    /// Restyles every live binding for `theme` and requests a re-render.
    ///
    /// Only the theme-dependent style fields change; series data is never
    /// touched. A binding keeps its previous style when its renderer rejects
    /// the restyle. A renderer error on one binding is logged and the pass
    /// continues with its siblings.
    pub fn apply_theme_change(&mut self, theme: Theme) -> RenderPassReport {
        self.applied_theme = theme;
        self.observed_theme_state = self.theme_state.current();
        self.restyle_pass(theme)
    }

    /// Restyles all bindings when the shared `ThemeState` changed since the
    /// manager last looked at it and now disagrees with the applied theme.
    pub(super) fn sync_theme_state(&mut self) {
        if let Some(theme) = self.take_theme_drift() {
            debug!(?theme, "theme state changed without a theme signal");
            self.restyle_pass(theme);
        }
    }

    fn take_theme_drift(&mut self) -> Option<Theme> {
        let current = self.theme_state.current();
        if current == self.observed_theme_state {
            return None;
        }
        self.observed_theme_state = current;
        if current == self.applied_theme {
            return None;
        }
        self.applied_theme = current;
        Some(current)
    }

    fn restyle_pass(&mut self, theme: Theme) -> RenderPassReport {
        let mut report = RenderPassReport::default();
        for binding in self.bindings.values_mut() {
            if !binding.is_live() {
                continue;
            }
            let outcome = restyle_binding(binding, theme).and_then(|()| render_binding(binding));
            tally(&mut report, binding.id(), outcome, "theme restyle failed");
        }
        debug!(?theme, rendered = report.rendered, failed = report.failed, "theme applied");
        self.emit(LifecycleEvent::ThemeApplied {
            theme,
            bindings: report.rendered + report.failed,
        });
        report
    }

    /// Records a viewport resize signal using the wall clock.
    pub fn handle_viewport_resize(&mut self) {
        self.handle_viewport_resize_at(Instant::now());
    }

    /// Records a viewport resize signal observed at `now`.
    ///
    /// Each call cancels and reschedules the pending pass; the pass runs
    /// once the host polls after the quiet window elapsed.
    pub fn handle_viewport_resize_at(&mut self, now: Instant) {
        self.resize.signal(now);
        trace!(
            coalesced = self.resize.coalesced_signals(),
            "viewport resize debounced"
        );
    }

    /// Runs due timer work against the wall clock. Returns `true` when a
    /// render pass ran.
    pub fn poll_timers(&mut self) -> bool {
        self.poll_timers_at(Instant::now())
    }

    /// Runs due timer work as of `now`. Returns `true` when a render pass ran.
    pub fn poll_timers_at(&mut self, now: Instant) -> bool {
        if !self.resize.poll(now) {
            return false;
        }
        self.render_all();
        true
    }

    /// Deadline of the pending debounced pass, if any; hosts use it to
    /// schedule their next wake-up.
    #[must_use]
    pub fn next_timer_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.resize.is_pending()
    }

    /// Number of completed render passes over all bindings.
    #[must_use]
    pub fn render_pass_count(&self) -> u64 {
        self.render_passes
    }

    /// Requests a re-render of every live binding immediately.
    ///
    /// A `ThemeState` change the host made without a theme signal is picked
    /// up here: bindings are restyled as part of the same pass.
    pub fn render_all(&mut self) -> RenderPassReport {
        let drift = self.take_theme_drift();
        let mut report = RenderPassReport::default();
        for binding in self.bindings.values_mut() {
            if !binding.is_live() {
                continue;
            }
            let outcome = match drift {
                Some(theme) => {
                    restyle_binding(binding, theme).and_then(|()| render_binding(binding))
                }
                None => render_binding(binding),
            };
            tally(&mut report, binding.id(), outcome, "re-render failed");
        }
        self.render_passes += 1;
        debug!(
            pass = self.render_passes,
            rendered = report.rendered,
            failed = report.failed,
            restyled = drift.is_some(),
            "render pass finished"
        );
        if let Some(theme) = drift {
            self.emit(LifecycleEvent::ThemeApplied {
                theme,
                bindings: report.rendered + report.failed,
            });
        }
        self.emit(LifecycleEvent::RenderPass {
            rendered: report.rendered,
            failed: report.failed,
        });
        report
    }
}

/// Pushes `theme` into the renderer and commits the new style to the
/// binding's config only once the renderer accepted it.
fn restyle_binding<S, I: RendererInstance>(
    binding: &mut ChartBinding<S, I>,
    theme: Theme,
) -> ChartResult<()> {
    let (_, config, instance) = binding.parts_mut();
    let mut style = config.style.clone();
    style.apply_theme(theme);
    if let Some(instance) = instance {
        instance.restyle(&style)?;
    }
    binding.config_mut().style = style;
    Ok(())
}

fn render_binding<S, I: RendererInstance>(binding: &mut ChartBinding<S, I>) -> ChartResult<()> {
    let (_, _, instance) = binding.parts_mut();
    instance.map_or(Ok(()), |instance| instance.request_render())
}

fn tally(report: &mut RenderPassReport, id: &str, outcome: ChartResult<()>, message: &str) {
    match outcome {
        Ok(()) => report.rendered += 1,
        Err(err) => {
            warn!(id, error = %err, "{message}");
            report.failed += 1;
        }
    }
}
