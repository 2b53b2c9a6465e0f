use crate::memos::MemoRecord;
use crate::subscription::{SubscriberSet, Subscription};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Observable store of tag usage counts.
#[derive(Clone, Default)]
pub struct TagStore {
    counts: Arc<Mutex<HashMap<String, u32>>>,
    subscribers: Arc<SubscriberSet>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map from tag name to usage count.
    pub fn counts(&self) -> HashMap<String, u32> {
        self.counts.lock().unwrap().clone()
    }

    /// Tag names in lexicographic order, independent of map iteration order.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.counts.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    /// Replace the counts wholesale and notify subscribers.
    pub fn set_counts(&self, counts: HashMap<String, u32>) {
        *self.counts.lock().unwrap() = counts;
        self.subscribers.notify();
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }
}

/// Count `#tag` occurrences across memo contents.
pub fn collect_tags(memos: &[MemoRecord]) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for memo in memos {
        for word in memo.content.split_whitespace() {
            if let Some(tag) = word.strip_prefix('#') {
                let tag = tag.trim_end_matches(|c: char| !c.is_alphanumeric() && c != '_');
                if !tag.is_empty() {
                    *counts.entry(tag.to_string()).or_insert(0) += 1;
                }
            }
        }
    }
    counts
}
