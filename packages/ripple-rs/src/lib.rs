//! ripple - a small event-driven coordination layer.
//!
//! Domain actions perform their own IO and return an *event*: an immutable
//! fact about what happened. The [`Engine`] fans each event out to the
//! [`Effect`]s registered for its type. Effects run side work (notifications,
//! email, streaming) against a shared dependency container.
//!
//! Two guarantees shape the whole crate:
//!
//! 1. An effect failure is logged and counted, never propagated. The caller
//!    that dispatched the event has already committed its own mutation; side
//!    effects are best-effort by contract.
//! 2. Dispatch is exactly-once per `process` call, in registration order.
//!    There is no queue, retry, or persistence here.
//!
//! ```
//! use ripple::{effect, Engine};
//!
//! #[derive(Debug)]
//! enum PingEvent {
//!     Pinged { count: u32 },
//! }
//!
//! # #[derive(Default)] struct Deps;
//! let engine: Engine<Deps> = Engine::with_deps(Deps::default()).effect(
//!     effect::on::<PingEvent>()
//!         .extract(|event| match event {
//!             PingEvent::Pinged { count } => Some(*count),
//!         })
//!         .id("log_ping")
//!         .then(|count, _ctx| async move {
//!             let _ = count;
//!             Ok(())
//!         }),
//! );
//! ```

pub mod effect;
pub mod engine;

pub use effect::{Effect, EffectContext};
pub use engine::{DispatchReport, Engine};
