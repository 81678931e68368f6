//! The engine: owns the dependency container and the registered effects,
//! and fans dispatched events out to them.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use crate::effect::{Effect, EffectContext};

/// Outcome of one `process` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Effects whose extractor accepted the event.
    pub matched: usize,
    /// Matched effects that returned an error (already logged).
    pub failed: usize,
}

pub struct Engine<D> {
    deps: Arc<D>,
    effects: Vec<Effect<D>>,
}

impl<D: Send + Sync + 'static> Engine<D> {
    pub fn with_deps(deps: D) -> Self {
        Self {
            deps: Arc::new(deps),
            effects: Vec::new(),
        }
    }

    /// Register an effect. Effects run in registration order.
    pub fn effect(mut self, effect: Effect<D>) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn deps(&self) -> &D {
        &self.deps
    }

    /// Dispatch an event to every matching effect.
    ///
    /// Effect errors are logged under the effect's id and counted in the
    /// report; they never surface to the caller. A caller that has already
    /// committed its own mutation can therefore dispatch unconditionally.
    pub async fn process<E>(&self, event: E) -> DispatchReport
    where
        E: Any + Send + Sync + Debug,
    {
        let mut report = DispatchReport::default();
        let erased: &(dyn Any + Send + Sync) = &event;

        for effect in &self.effects {
            let ctx = EffectContext::new(Arc::clone(&self.deps));
            let Some(future) = effect.run(erased, ctx) else {
                continue;
            };
            report.matched += 1;
            if let Err(error) = future.await {
                report.failed += 1;
                tracing::error!(
                    effect = effect.id(),
                    error = %error,
                    event = ?event,
                    "effect failed; continuing dispatch"
                );
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::effect;

    #[derive(Debug)]
    enum OrderEvent {
        Placed { total: u32 },
        Cancelled,
    }

    #[derive(Default)]
    struct Counters {
        ran: AtomicUsize,
    }

    fn record_effect() -> Effect<Counters> {
        effect::on::<OrderEvent>()
            .extract(|event| match event {
                OrderEvent::Placed { total } => Some(*total),
                OrderEvent::Cancelled => None,
            })
            .id("record_order")
            .then(|_total, ctx| async move {
                ctx.deps().ran.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
    }

    fn failing_effect() -> Effect<Counters> {
        effect::on::<OrderEvent>()
            .extract(|event| match event {
                OrderEvent::Placed { .. } => Some(()),
                OrderEvent::Cancelled => None,
            })
            .id("always_fails")
            .then(|_, _ctx| async { anyhow::bail!("boom") })
    }

    #[tokio::test]
    async fn dispatch_runs_matching_effects() {
        let engine = Engine::with_deps(Counters::default()).effect(record_effect());

        let report = engine.process(OrderEvent::Placed { total: 30 }).await;

        assert_eq!(report, DispatchReport { matched: 1, failed: 0 });
        assert_eq!(engine.deps().ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn declined_event_matches_nothing() {
        let engine = Engine::with_deps(Counters::default()).effect(record_effect());

        let report = engine.process(OrderEvent::Cancelled).await;

        assert_eq!(report, DispatchReport::default());
        assert_eq!(engine.deps().ran.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failing_effect_does_not_stop_later_effects() {
        let engine = Engine::with_deps(Counters::default())
            .effect(failing_effect())
            .effect(record_effect());

        let report = engine.process(OrderEvent::Placed { total: 30 }).await;

        assert_eq!(report, DispatchReport { matched: 2, failed: 1 });
        assert_eq!(engine.deps().ran.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dispatch_with_no_effects_is_a_noop() {
        let engine: Engine<Counters> = Engine::with_deps(Counters::default());
        let report = engine.process(OrderEvent::Placed { total: 1 }).await;
        assert_eq!(report, DispatchReport::default());
    }
}
