//! The submission workflow for one district's broadcast list.
//!
//! Drives the two external-facing actions (add-number, broadcast) and their
//! observable state machine. The workflow is long-lived for a session: every
//! attempt, success or failure, returns the state to `Idle`. A busy guard
//! rejects a competing invocation while an action is in flight, independent
//! of whatever presentation layer sits on top.

use crate::broadcast::BroadcastList;
use crate::client::SmsGateway;
use crate::domain::PhoneNumber;
use crate::error::SmsApiError;
use crate::models::District;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// User-facing message when the candidate number fails validation.
pub const INVALID_NUMBER_MESSAGE: &str =
    "Please enter a valid Uganda phone number (format: +256XXXXXXXXX)";

/// Fallback error message for a failed add-number call.
pub const ADD_NUMBER_FAILED_MESSAGE: &str = "Failed to add phone number";

/// User-facing message after a confirmed add.
pub const NUMBER_ADDED_MESSAGE: &str = "Phone number successfully added to the broadcast list!";

/// User-facing message when broadcasting with no recipients.
pub const EMPTY_LIST_MESSAGE: &str = "No phone numbers in the broadcast list.";

/// Fallback error message for a failed broadcast call.
pub const BROADCAST_FAILED_MESSAGE: &str = "Failed to send SMS broadcast";

/// User-facing message after an accepted broadcast.
pub const BROADCAST_SENT_MESSAGE: &str =
    "SMS broadcast initiated successfully! Recipients will receive the message shortly.";

/// Observable workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// No action in flight
    Idle,
    /// An add-number request is outstanding
    AddingNumber,
    /// A broadcast request is outstanding
    Broadcasting,
}

/// Severity of a user-facing outcome notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

/// A user-facing outcome notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// A notification together with its dismissal policy.
///
/// Success notifications auto-dismiss after the configured TTL; warnings and
/// errors persist until the next action clears or replaces them.
#[derive(Debug, Clone)]
struct PostedNotification {
    notification: Notification,
    posted_at: Instant,
    auto_dismiss: bool,
}

/// Result of invoking the add-number action.
#[derive(Debug)]
pub enum AddNumberOutcome {
    /// The number was confirmed by the backend and appended to the list
    Added,
    /// The candidate failed validation; no network call was made
    InvalidNumber,
    /// The backend rejected the request or the transport failed
    Failed(SmsApiError),
    /// Another action is in flight; the invocation was rejected
    Busy,
}

/// Result of invoking the broadcast action.
#[derive(Debug)]
pub enum BroadcastOutcome {
    /// The backend accepted the broadcast request
    Initiated,
    /// The list has no recipients; no network call was made
    EmptyList,
    /// The user declined at the confirmation step; no side effects
    Declined,
    /// The backend rejected the request or the transport failed
    Failed(SmsApiError),
    /// Another action is in flight; the invocation was rejected
    Busy,
}

/// Submission workflow for one district's broadcast list.
///
/// Owns the session's `BroadcastList` and serializes the two outbound
/// actions: at most one request is in flight at any time, and the list is
/// mutated only after the backend confirms an add.
pub struct SubmissionWorkflow {
    region: String,
    district: String,
    list: BroadcastList,
    gateway: Arc<dyn SmsGateway>,
    state: SubmissionState,
    notification: Option<PostedNotification>,
    notification_ttl: Duration,
}

impl SubmissionWorkflow {
    /// Create a workflow for a district, seeding the broadcast list from the
    /// district's catalog numbers.
    pub fn new(
        region: impl Into<String>,
        district: &District,
        gateway: Arc<dyn SmsGateway>,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            region: region.into(),
            district: district.name.clone(),
            list: BroadcastList::for_district(district),
            gateway,
            state: SubmissionState::Idle,
            notification: None,
            notification_ttl,
        }
    }

    /// Current workflow state.
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// The session's broadcast list.
    pub fn list(&self) -> &BroadcastList {
        &self.list
    }

    /// The current notification, if any and not yet auto-dismissed.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref().and_then(|posted| {
            if posted.auto_dismiss && posted.posted_at.elapsed() >= self.notification_ttl {
                None
            } else {
                Some(&posted.notification)
            }
        })
    }

    /// Validate a candidate number and, if admissible, register it with the
    /// backend and append it to the broadcast list.
    ///
    /// State transitions `Idle -> AddingNumber -> Idle`. Invalid input and
    /// failed requests leave the list unchanged; the list grows only after
    /// the backend confirms the add.
    pub async fn add_number(&mut self, candidate: &str) -> AddNumberOutcome {
        if self.state != SubmissionState::Idle {
            tracing::debug!(state = ?self.state, "add-number rejected while busy");
            return AddNumberOutcome::Busy;
        }

        let number = match PhoneNumber::new(candidate) {
            Ok(number) => number,
            Err(_) => {
                self.post(NotificationKind::Error, INVALID_NUMBER_MESSAGE, false);
                return AddNumberOutcome::InvalidNumber;
            }
        };

        self.state = SubmissionState::AddingNumber;
        self.notification = None;

        let result = self
            .gateway
            .add_phone_number(&self.region, &self.district, &number)
            .await;

        self.state = SubmissionState::Idle;

        match result {
            Ok(_) => {
                self.list.append(&number);
                tracing::info!(district = %self.district, number = %number, "number added");
                self.post(NotificationKind::Success, NUMBER_ADDED_MESSAGE, true);
                AddNumberOutcome::Added
            }
            Err(error) => {
                let message = error
                    .server_message()
                    .unwrap_or(ADD_NUMBER_FAILED_MESSAGE)
                    .to_string();
                self.post(NotificationKind::Error, message, false);
                AddNumberOutcome::Failed(error)
            }
        }
    }

    /// Send an SMS broadcast to every number in the list.
    ///
    /// The confirmation callback receives the exact recipient count; the
    /// request is only issued if it returns `true`. State transitions
    /// `Idle -> Broadcasting -> Idle`. The list is never mutated.
    pub async fn broadcast<F>(&mut self, confirm: F) -> BroadcastOutcome
    where
        F: FnOnce(usize) -> bool,
    {
        if self.state != SubmissionState::Idle {
            tracing::debug!(state = ?self.state, "broadcast rejected while busy");
            return BroadcastOutcome::Busy;
        }

        if self.list.is_empty() {
            self.post(NotificationKind::Warning, EMPTY_LIST_MESSAGE, false);
            return BroadcastOutcome::EmptyList;
        }

        if !confirm(self.list.len()) {
            return BroadcastOutcome::Declined;
        }

        self.state = SubmissionState::Broadcasting;
        self.notification = None;

        let result = self
            .gateway
            .broadcast_sms(&self.region, &self.district, self.list.numbers())
            .await;

        self.state = SubmissionState::Idle;

        match result {
            Ok(_) => {
                tracing::info!(
                    district = %self.district,
                    recipients = self.list.len(),
                    "broadcast initiated"
                );
                self.post(NotificationKind::Success, BROADCAST_SENT_MESSAGE, true);
                BroadcastOutcome::Initiated
            }
            Err(error) => {
                let message = error
                    .server_message()
                    .unwrap_or(BROADCAST_FAILED_MESSAGE)
                    .to_string();
                self.post(NotificationKind::Error, message, false);
                BroadcastOutcome::Failed(error)
            }
        }
    }

    fn post(&mut self, kind: NotificationKind, message: impl Into<String>, auto_dismiss: bool) {
        self.notification = Some(PostedNotification {
            notification: Notification {
                kind,
                message: message.into(),
            },
            posted_at: Instant::now(),
            auto_dismiss,
        });
    }
}
