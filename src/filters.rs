use crate::subscription::{SubscriberSet, Subscription};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    TagSearch,
}

/// A single search constraint applied to memo listings elsewhere in the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub value: String,
}

impl Constraint {
    pub fn tag(value: impl Into<String>) -> Self {
        Self {
            kind: ConstraintKind::TagSearch,
            value: value.into(),
        }
    }
}

/// Shared collection of active search constraints.
#[derive(Clone, Default)]
pub struct FilterStore {
    constraints: Arc<Mutex<Vec<Constraint>>>,
    subscribers: Arc<SubscriberSet>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint. Adding an identical constraint twice keeps one.
    pub fn add(&self, constraint: Constraint) {
        {
            let mut list = self.constraints.lock().unwrap();
            if list.contains(&constraint) {
                return;
            }
            tracing::debug!(?constraint, "filter added");
            list.push(constraint);
        }
        self.subscribers.notify();
    }

    pub fn remove(&self, constraint: &Constraint) {
        {
            let mut list = self.constraints.lock().unwrap();
            let before = list.len();
            list.retain(|c| c != constraint);
            if list.len() == before {
                return;
            }
        }
        self.subscribers.notify();
    }

    pub fn snapshot(&self) -> Vec<Constraint> {
        self.constraints.lock().unwrap().clone()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }
}
