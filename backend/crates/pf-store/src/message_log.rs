//! Append-only log of contact submissions with per-origin throttling.
//!
//! A submission is always recorded first and the throttle is evaluated
//! afterwards, under the same write lock. A throttled caller's message is
//! therefore kept; the caller is only told it went over the ceiling.

use crate::ThrottlePolicy;

use pf_core::ContactMessage;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::warn;
use tokio::sync::RwLock;

/// Outcome of recording a submission
#[derive(Debug, Clone)]
pub struct Submission {
    pub message: ContactMessage,
    /// Submissions from the same origin inside the window, this one included
    pub recent_count: usize,
    pub throttled: bool,
}

/// Shared handle to the contact message log
#[derive(Clone)]
pub struct MessageLog {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
    policy: ThrottlePolicy,
}

impl MessageLog {
    pub fn new(policy: ThrottlePolicy) -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            policy,
        }
    }

    pub fn policy(&self) -> ThrottlePolicy {
        self.policy
    }

    /// Append a message, then count recent submissions from its origin.
    /// The message's own timestamp is the reference point for the window.
    pub async fn record(&self, message: ContactMessage) -> Submission {
        let mut messages = self.messages.write().await;

        messages.push(message.clone());
        let recent_count = count_recent(
            &messages,
            &message.origin,
            message.submitted_at,
            &self.policy,
        );

        let throttled = self.policy.exceeded_by(recent_count);
        if throttled {
            warn!(
                "Origin {} sent {} submissions within {}s (limit {})",
                message.origin,
                recent_count,
                self.policy.window.num_seconds(),
                self.policy.max_submissions
            );
        }

        Submission {
            message,
            recent_count,
            throttled,
        }
    }

    /// Submissions from `origin` strictly inside the window ending at `now`
    pub async fn recent_from(&self, origin: &str, now: DateTime<Utc>) -> usize {
        let messages = self.messages.read().await;
        count_recent(&messages, origin, now, &self.policy)
    }

    pub async fn count(&self) -> usize {
        self.messages.read().await.len()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(ThrottlePolicy::default())
    }
}

fn count_recent(
    messages: &[ContactMessage],
    origin: &str,
    now: DateTime<Utc>,
    policy: &ThrottlePolicy,
) -> usize {
    messages
        .iter()
        .filter(|m| m.origin == origin && now.signed_duration_since(m.submitted_at) < policy.window)
        .count()
}
