//! Human-readable notification copy for each domain event.
//!
//! Pure composition - NO IO. One event in, one notification out, addressed
//! to the listing owner the event already carries.

use crate::common::NotificationKind;
use crate::domains::bookings::events::BookingEvent;
use crate::domains::notifications::models::NewNotification;
use crate::domains::properties::events::PropertyEvent;
use crate::domains::services::events::ServiceEvent;

pub fn property_notification(event: &PropertyEvent, base_url: &str) -> NewNotification {
    match event {
        PropertyEvent::PropertyApproved {
            property_id,
            host_id,
            title,
        } => NewNotification {
            user_id: *host_id,
            kind: NotificationKind::Success,
            title: "Listing approved".to_string(),
            message: format!("Your property \"{}\" is now live.", title),
            link: Some(format!("{}/properties/{}", base_url, property_id)),
        },

        PropertyEvent::PropertyRejected {
            host_id,
            title,
            reason,
            ..
        } => NewNotification {
            user_id: *host_id,
            kind: NotificationKind::Warning,
            title: "Listing rejected".to_string(),
            message: format!("Your property \"{}\" was rejected: {}", title, reason),
            link: Some(format!("{}/host/listings", base_url)),
        },

        PropertyEvent::PropertyDeleted {
            host_id,
            title,
            reason,
            ..
        } => NewNotification {
            user_id: *host_id,
            kind: NotificationKind::Error,
            title: "Listing removed".to_string(),
            message: match reason {
                Some(reason) => {
                    format!("Your property \"{}\" was removed: {}", title, reason)
                }
                None => format!("Your property \"{}\" was removed.", title),
            },
            link: None,
        },
    }
}

pub fn service_notification(event: &ServiceEvent, base_url: &str) -> NewNotification {
    match event {
        ServiceEvent::ServiceApproved {
            service_id,
            provider_id,
            title,
        } => NewNotification {
            user_id: *provider_id,
            kind: NotificationKind::Success,
            title: "Listing approved".to_string(),
            message: format!("Your service \"{}\" is now live.", title),
            link: Some(format!("{}/services/{}", base_url, service_id)),
        },

        ServiceEvent::ServiceRejected {
            provider_id,
            title,
            reason,
            ..
        } => NewNotification {
            user_id: *provider_id,
            kind: NotificationKind::Warning,
            title: "Listing rejected".to_string(),
            message: format!("Your service \"{}\" was rejected: {}", title, reason),
            link: Some(format!("{}/provider/listings", base_url)),
        },

        ServiceEvent::ServiceDeleted {
            provider_id,
            title,
            reason,
            ..
        } => NewNotification {
            user_id: *provider_id,
            kind: NotificationKind::Error,
            title: "Listing removed".to_string(),
            message: match reason {
                Some(reason) => format!("Your service \"{}\" was removed: {}", title, reason),
                None => format!("Your service \"{}\" was removed.", title),
            },
            link: None,
        },

        ServiceEvent::EditApproved {
            service_id,
            provider_id,
            title,
            ..
        } => NewNotification {
            user_id: *provider_id,
            kind: NotificationKind::Success,
            title: "Changes approved".to_string(),
            message: format!("Your changes to \"{}\" were approved and applied.", title),
            link: Some(format!("{}/services/{}", base_url, service_id)),
        },

        ServiceEvent::EditRejected {
            provider_id,
            title,
            reason,
            ..
        } => NewNotification {
            user_id: *provider_id,
            kind: NotificationKind::Warning,
            title: "Changes rejected".to_string(),
            message: match reason {
                Some(reason) => {
                    format!("Your changes to \"{}\" were rejected: {}", title, reason)
                }
                None => format!("Your changes to \"{}\" were rejected.", title),
            },
            link: Some(format!("{}/provider/listings", base_url)),
        },
    }
}

pub fn booking_notification(event: &BookingEvent, base_url: &str) -> NewNotification {
    match event {
        BookingEvent::BookingCreated {
            booking_id,
            owner_id,
            item_title,
            ..
        } => NewNotification {
            user_id: *owner_id,
            kind: NotificationKind::Info,
            title: "New booking".to_string(),
            message: format!("\"{}\" was booked.", item_title),
            link: Some(format!("{}/bookings/{}", base_url, booking_id)),
        },

        BookingEvent::ReviewSubmitted {
            owner_id,
            item_title,
            rating,
            ..
        } => NewNotification {
            user_id: *owner_id,
            kind: NotificationKind::Info,
            title: "New review".to_string(),
            message: format!("\"{}\" received a {}-star review.", item_title, rating),
            link: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{PropertyId, ServiceId, UserId};

    const BASE: &str = "https://holibay.test";

    #[test]
    fn rejection_carries_the_reason_and_warns() {
        let host_id = UserId::new();
        let event = PropertyEvent::PropertyRejected {
            property_id: PropertyId::new(),
            host_id,
            title: "Seaside Villa".to_string(),
            reason: "incomplete photos".to_string(),
        };

        let notification = property_notification(&event, BASE);
        assert_eq!(notification.user_id, host_id);
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert!(notification.message.contains("incomplete photos"));
    }

    #[test]
    fn approval_links_to_the_live_listing() {
        let service_id = ServiceId::new();
        let event = ServiceEvent::ServiceApproved {
            service_id,
            provider_id: UserId::new(),
            title: "Fiat Egea".to_string(),
        };

        let notification = service_notification(&event, BASE);
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(
            notification.link.as_deref(),
            Some(format!("{}/services/{}", BASE, service_id).as_str())
        );
    }

    #[test]
    fn deletion_without_reason_stays_terse() {
        let event = ServiceEvent::ServiceDeleted {
            service_id: ServiceId::new(),
            provider_id: UserId::new(),
            title: "Old Kayak Tour".to_string(),
            reason: None,
        };

        let notification = service_notification(&event, BASE);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(
            notification.message,
            "Your service \"Old Kayak Tour\" was removed."
        );
    }

    #[test]
    fn deletion_reason_is_passed_through() {
        let event = ServiceEvent::ServiceDeleted {
            service_id: ServiceId::new(),
            provider_id: UserId::new(),
            title: "Old Kayak Tour".to_string(),
            reason: Some("duplicate listing".to_string()),
        };

        let notification = service_notification(&event, BASE);
        assert!(notification.message.contains("duplicate listing"));
    }

    #[test]
    fn booking_notifies_the_owner_not_the_guest() {
        let owner_id = UserId::new();
        let event = BookingEvent::BookingCreated {
            booking_id: crate::common::BookingId::new(),
            guest_id: UserId::new(),
            owner_id,
            item_title: "Seaside Villa".to_string(),
        };

        let notification = booking_notification(&event, BASE);
        assert_eq!(notification.user_id, owner_id);
        assert_eq!(notification.kind, NotificationKind::Info);
    }
}
