//! Effect handlers and their builder.
//!
//! An [`Effect`] is a type-erased subscriber: it inspects a dispatched event,
//! and when the event is of its type and the extractor yields a payload, it
//! returns a future doing the side work. Construction goes through the
//! builder chain `on::<E>().extract(..).id(..).then(..)`.

use std::any::Any;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Context handed to every effect invocation.
///
/// Carries the engine's shared dependency container. Cheap to clone.
pub struct EffectContext<D> {
    deps: Arc<D>,
}

impl<D> EffectContext<D> {
    pub(crate) fn new(deps: Arc<D>) -> Self {
        Self { deps }
    }

    pub fn deps(&self) -> &D {
        &self.deps
    }

    pub fn deps_arc(&self) -> Arc<D> {
        Arc::clone(&self.deps)
    }
}

impl<D> Clone for EffectContext<D> {
    fn clone(&self) -> Self {
        Self {
            deps: Arc::clone(&self.deps),
        }
    }
}

type Handler<D> = Box<
    dyn Fn(&(dyn Any + Send + Sync), EffectContext<D>) -> Option<BoxFuture<anyhow::Result<()>>>
        + Send
        + Sync,
>;

/// A registered event subscriber.
pub struct Effect<D> {
    id: &'static str,
    handler: Handler<D>,
}

impl<D> Effect<D> {
    /// The identifier given at build time (used in failure logs).
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Run against a dispatched event. `None` means the event was not for
    /// this effect (wrong type, or the extractor declined the variant).
    pub(crate) fn run(
        &self,
        event: &(dyn Any + Send + Sync),
        ctx: EffectContext<D>,
    ) -> Option<BoxFuture<anyhow::Result<()>>> {
        (self.handler)(event, ctx)
    }
}

/// Entry point of the builder chain: subscribe to events of type `E`.
pub fn on<E: Any + Send + Sync>() -> EffectBuilder<E> {
    EffectBuilder {
        _event: PhantomData,
    }
}

pub struct EffectBuilder<E> {
    _event: PhantomData<fn() -> E>,
}

impl<E: Any + Send + Sync> EffectBuilder<E> {
    /// Select the variants this effect cares about and pull out the payload.
    /// Returning `None` skips the effect for that event.
    pub fn extract<P, X>(self, extract: X) -> ExtractedBuilder<E, P, X>
    where
        P: Send + 'static,
        X: Fn(&E) -> Option<P> + Send + Sync + 'static,
    {
        ExtractedBuilder {
            extract,
            id: "unnamed_effect",
            _event: PhantomData,
            _payload: PhantomData,
        }
    }
}

pub struct ExtractedBuilder<E, P, X> {
    extract: X,
    id: &'static str,
    _event: PhantomData<fn() -> E>,
    _payload: PhantomData<fn() -> P>,
}

impl<E, P, X> ExtractedBuilder<E, P, X>
where
    E: Any + Send + Sync,
    P: Send + 'static,
    X: Fn(&E) -> Option<P> + Send + Sync + 'static,
{
    /// Name the effect for logs.
    pub fn id(mut self, id: &'static str) -> Self {
        self.id = id;
        self
    }

    /// Attach the handler and finish the build.
    pub fn then<D, F, Fut>(self, handler: F) -> Effect<D>
    where
        D: Send + Sync + 'static,
        F: Fn(P, EffectContext<D>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let extract = self.extract;
        Effect {
            id: self.id,
            handler: Box::new(move |event, ctx| {
                let event = event.downcast_ref::<E>()?;
                let payload = (extract)(event)?;
                Some(Box::pin(handler(payload, ctx)))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestEvent {
        Wanted(u32),
        Ignored,
    }

    struct NoDeps;

    fn counting_effect() -> Effect<NoDeps> {
        on::<TestEvent>()
            .extract(|event| match event {
                TestEvent::Wanted(n) => Some(*n),
                TestEvent::Ignored => None,
            })
            .id("counting")
            .then(|_n, _ctx| async { Ok(()) })
    }

    #[test]
    fn matching_event_produces_future() {
        let effect = counting_effect();
        let ctx = EffectContext::new(Arc::new(NoDeps));
        assert!(effect.run(&TestEvent::Wanted(1), ctx).is_some());
    }

    #[test]
    fn declined_variant_is_skipped() {
        let effect = counting_effect();
        let ctx = EffectContext::new(Arc::new(NoDeps));
        assert!(effect.run(&TestEvent::Ignored, ctx).is_none());
    }

    #[test]
    fn foreign_event_type_is_skipped() {
        #[derive(Debug)]
        struct OtherEvent;

        let effect = counting_effect();
        let ctx = EffectContext::new(Arc::new(NoDeps));
        assert!(effect.run(&OtherEvent, ctx).is_none());
    }
}
