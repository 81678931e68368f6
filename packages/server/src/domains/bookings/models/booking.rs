use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{BookingId, BookingStatus, ListingKind, PropertyId, ServiceId, UserId};
use crate::domains::properties::models::Property;
use crate::domains::services::models::Service;

/// What a booking points at. The tagged form replaces raw
/// (item_type, item_id) column pairs everywhere above the model layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingItem {
    Property(PropertyId),
    Service(ServiceId),
}

impl BookingItem {
    pub fn kind(&self) -> ListingKind {
        match self {
            BookingItem::Property(_) => ListingKind::Property,
            BookingItem::Service(_) => ListingKind::Service,
        }
    }

    pub fn raw_id(&self) -> Uuid {
        match self {
            BookingItem::Property(id) => id.into_uuid(),
            BookingItem::Service(id) => id.into_uuid(),
        }
    }
}

/// Booking - a guest's reservation of a property or service.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Booking {
    pub id: BookingId,
    pub guest_id: UserId,
    pub item_type: String, // 'property', 'service'
    pub item_id: Uuid,
    pub status: String, // 'pending', 'confirmed', 'completed', 'cancelled'
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn item(&self) -> Result<BookingItem> {
        match self.item_type.parse::<ListingKind>()? {
            ListingKind::Property => Ok(BookingItem::Property(PropertyId::from_uuid(self.item_id))),
            ListingKind::Service => Ok(BookingItem::Service(ServiceId::from_uuid(self.item_id))),
        }
    }
}

/// A booking enriched with its item's display title (explorer leaf rows,
/// admin lists). The title is None when the item has since been deleted.
#[derive(Debug, Clone)]
pub struct BookingSummary {
    pub booking: Booking,
    pub item_title: Option<String>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Booking {
    pub async fn find_by_id(id: BookingId, pool: &PgPool) -> Result<Self> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(booking)
    }

    pub async fn find_by_status(status: BookingStatus, pool: &PgPool) -> Result<Vec<Self>> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status.to_string())
        .fetch_all(pool)
        .await?;
        Ok(bookings)
    }

    pub async fn create(
        guest_id: UserId,
        item: BookingItem,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_price: f64,
        pool: &PgPool,
    ) -> Result<Self> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, guest_id, item_type, item_id, status, start_date, end_date, total_price)
            VALUES ($1, $2, $3, $4, 'pending', $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(BookingId::new())
        .bind(guest_id)
        .bind(item.kind().to_string())
        .bind(item.raw_id())
        .bind(start_date)
        .bind(end_date)
        .bind(total_price)
        .fetch_one(pool)
        .await?;
        Ok(booking)
    }

    /// Resolve display titles for a batch of bookings with one query per
    /// item kind, not one per row.
    pub async fn with_titles(bookings: Vec<Booking>, pool: &PgPool) -> Result<Vec<BookingSummary>> {
        let mut property_ids: Vec<PropertyId> = Vec::new();
        let mut service_ids: Vec<ServiceId> = Vec::new();

        for booking in &bookings {
            match booking.item()? {
                BookingItem::Property(id) => property_ids.push(id),
                BookingItem::Service(id) => service_ids.push(id),
            }
        }
        property_ids.sort();
        property_ids.dedup();
        service_ids.sort();
        service_ids.dedup();

        let mut titles: HashMap<Uuid, String> = HashMap::new();
        if !property_ids.is_empty() {
            for (id, title) in Property::titles_by_ids(&property_ids, pool).await? {
                titles.insert(id.into_uuid(), title);
            }
        }
        if !service_ids.is_empty() {
            for (id, title) in Service::titles_by_ids(&service_ids, pool).await? {
                titles.insert(id.into_uuid(), title);
            }
        }

        Ok(bookings
            .into_iter()
            .map(|booking| {
                let item_title = titles.get(&booking.item_id).cloned();
                BookingSummary {
                    booking,
                    item_title,
                }
            })
            .collect())
    }
}
