//! Notification fan-out effects.
//!
//! One effect per event family; each composes the copy and hands off to
//! `actions::notify`, which swallows every delivery failure. The effects
//! themselves therefore never fail the dispatch.

use ripple::effect;

use crate::domains::bookings::events::BookingEvent;
use crate::domains::notifications::{actions, messages};
use crate::domains::properties::events::PropertyEvent;
use crate::domains::services::events::ServiceEvent;
use crate::kernel::ServerDeps;

/// PropertyApproved/Rejected/Deleted → owner notification.
pub fn property_notification_effect() -> ripple::Effect<ServerDeps> {
    effect::on::<PropertyEvent>()
        .extract(|event| Some(event.clone()))
        .id("notify_on_property_moderation")
        .then(|event: PropertyEvent, ctx: ripple::EffectContext<ServerDeps>| async move {
            let deps = ctx.deps_arc();
            let notification = messages::property_notification(&event, &deps.app_base_url);
            actions::notify(notification, &deps).await;
            Ok(())
        })
}

/// ServiceApproved/Rejected/Deleted and edit outcomes → owner notification.
pub fn service_notification_effect() -> ripple::Effect<ServerDeps> {
    effect::on::<ServiceEvent>()
        .extract(|event| Some(event.clone()))
        .id("notify_on_service_moderation")
        .then(|event: ServiceEvent, ctx: ripple::EffectContext<ServerDeps>| async move {
            let deps = ctx.deps_arc();
            let notification = messages::service_notification(&event, &deps.app_base_url);
            actions::notify(notification, &deps).await;
            Ok(())
        })
}

/// BookingCreated/ReviewSubmitted → owner notification.
pub fn booking_notification_effect() -> ripple::Effect<ServerDeps> {
    effect::on::<BookingEvent>()
        .extract(|event| Some(event.clone()))
        .id("notify_on_engagement")
        .then(|event: BookingEvent, ctx: ripple::EffectContext<ServerDeps>| async move {
            let deps = ctx.deps_arc();
            let notification = messages::booking_notification(&event, &deps.app_base_url);
            actions::notify(notification, &deps).await;
            Ok(())
        })
}
