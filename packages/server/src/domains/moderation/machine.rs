//! Listing review state machine
//!
//! Pure decision logic - NO IO, only state transitions. Properties and
//! services share the same table of legal moves:
//!
//!   pending  --approve-->         approved
//!   pending  --reject(reason)-->  rejected
//!   rejected --approve-->         approved   (rejection reason cleared)
//!
//! Nothing moves back to pending. A live (approved) listing is never
//! rejected in place; changes to live services go through edit requests.
//! Deletion is not a review transition - it is valid from any state and
//! handled by the domain actions directly.

use thiserror::Error;

use crate::common::ListingStatus;

/// What the reviewing admin asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject { reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("listing is already approved")]
    AlreadyApproved,
    #[error("listing is already rejected")]
    AlreadyRejected,
    #[error("an approved listing cannot be rejected; changes go through edit requests")]
    RejectApproved,
}

/// The state a legal transition lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reviewed {
    pub status: ListingStatus,
    pub rejection_reason: Option<String>,
}

/// Decide the outcome of a review decision against the current status.
pub fn review(
    current: ListingStatus,
    decision: ReviewDecision,
) -> Result<Reviewed, TransitionError> {
    match (current, decision) {
        (ListingStatus::Pending, ReviewDecision::Approve)
        | (ListingStatus::Rejected, ReviewDecision::Approve) => Ok(Reviewed {
            status: ListingStatus::Approved,
            rejection_reason: None,
        }),

        (ListingStatus::Approved, ReviewDecision::Approve) => {
            Err(TransitionError::AlreadyApproved)
        }

        (ListingStatus::Pending, ReviewDecision::Reject { reason }) => Ok(Reviewed {
            status: ListingStatus::Rejected,
            rejection_reason: Some(reason),
        }),

        (ListingStatus::Approved, ReviewDecision::Reject { .. }) => {
            Err(TransitionError::RejectApproved)
        }

        (ListingStatus::Rejected, ReviewDecision::Reject { .. }) => {
            Err(TransitionError::AlreadyRejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_approved() {
        let outcome = review(ListingStatus::Pending, ReviewDecision::Approve).unwrap();
        assert_eq!(outcome.status, ListingStatus::Approved);
        assert_eq!(outcome.rejection_reason, None);
    }

    #[test]
    fn pending_can_be_rejected_with_reason() {
        let outcome = review(
            ListingStatus::Pending,
            ReviewDecision::Reject {
                reason: "incomplete photos".to_string(),
            },
        )
        .unwrap();
        assert_eq!(outcome.status, ListingStatus::Rejected);
        assert_eq!(outcome.rejection_reason.as_deref(), Some("incomplete photos"));
    }

    #[test]
    fn approving_a_rejected_listing_clears_the_reason() {
        let outcome = review(ListingStatus::Rejected, ReviewDecision::Approve).unwrap();
        assert_eq!(outcome.status, ListingStatus::Approved);
        assert_eq!(outcome.rejection_reason, None);
    }

    #[test]
    fn approved_listings_cannot_be_rejected() {
        let result = review(
            ListingStatus::Approved,
            ReviewDecision::Reject {
                reason: "changed my mind".to_string(),
            },
        );
        assert_eq!(result, Err(TransitionError::RejectApproved));
    }

    #[test]
    fn double_approve_is_an_error() {
        assert_eq!(
            review(ListingStatus::Approved, ReviewDecision::Approve),
            Err(TransitionError::AlreadyApproved)
        );
    }

    #[test]
    fn double_reject_is_an_error() {
        assert_eq!(
            review(
                ListingStatus::Rejected,
                ReviewDecision::Reject {
                    reason: "again".to_string()
                }
            ),
            Err(TransitionError::AlreadyRejected)
        );
    }
}
