use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::info;

use crate::model::leave_request::LeaveRequest;

/// In-memory store for leave requests, keyed by id. State lives for the
/// process lifetime only; swapping in a durable backend later means
/// reimplementing this same create/get/list/approve/reject surface.
///
/// Cloning the store is cheap and shares the underlying map, so handlers
/// can each hold a handle via `web::Data`.
#[derive(Debug, Clone, Default)]
pub struct LeaveRequestStore {
    requests: Arc<RwLock<HashMap<String, LeaveRequest>>>,
}

impl LeaveRequestStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new leave request (auto-approval applied) and return its id.
    /// Never fails.
    pub fn create(&self, employee_name: Option<String>, days_requested: i32) -> String {
        let request = LeaveRequest::new(employee_name, days_requested);
        let id = request.id().to_owned();
        info!(
            id = %id,
            days_requested,
            approved = ?request.approved(),
            "leave request created"
        );
        self.requests
            .write()
            .expect("leave request store lock poisoned - indicates a panic in another thread")
            .insert(id.clone(), request);
        id
    }

    /// Look up a request by id. Returns a snapshot; mutating it does not
    /// affect the stored entity. An empty id is never a valid key and
    /// short-circuits to `None`.
    pub fn get(&self, id: &str) -> Option<LeaveRequest> {
        if id.is_empty() {
            return None;
        }
        self.requests
            .read()
            .expect("leave request store lock poisoned - indicates a panic in another thread")
            .get(id)
            .cloned()
    }

    /// Point-in-time snapshot of every stored request, in no particular order.
    pub fn list(&self) -> Vec<LeaveRequest> {
        self.requests
            .read()
            .expect("leave request store lock poisoned - indicates a panic in another thread")
            .values()
            .cloned()
            .collect()
    }

    /// Approve the request with the given id. Always restamps the approval
    /// date, even if the request was already approved. Returns false when
    /// the id is empty or unknown, leaving the store untouched.
    pub fn approve(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        let mut requests = self
            .requests
            .write()
            .expect("leave request store lock poisoned - indicates a panic in another thread");
        match requests.get_mut(id) {
            Some(request) => {
                request.set_approved(true);
                request.set_approval_date(Some(Utc::now()));
                info!(id, "leave request approved");
                true
            }
            None => false,
        }
    }

    /// Reject the request with the given id, clearing any approval date.
    /// Returns false when the id is empty or unknown, leaving the store
    /// untouched.
    pub fn reject(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        let mut requests = self
            .requests
            .write()
            .expect("leave request store lock poisoned - indicates a panic in another thread");
        match requests.get_mut(id) {
            Some(request) => {
                request.set_approved(false);
                request.set_approval_date(None);
                info!(id, "leave request rejected");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_after_create_returns_matching_fields() {
        let store = LeaveRequestStore::new();
        let id = store.create(Some("Alice".into()), 3);

        let request = store.get(&id).unwrap();
        assert_eq!(request.id(), id);
        assert_eq!(request.employee_name(), Some("Alice"));
        assert_eq!(request.days_requested(), Some(3));
    }

    #[test]
    fn get_unknown_or_empty_id_returns_none() {
        let store = LeaveRequestStore::new();
        store.create(Some("Alice".into()), 3);
        assert!(store.get("no-such-id").is_none());
        assert!(store.get("").is_none());
    }

    #[test]
    fn create_yields_distinct_ids() {
        let store = LeaveRequestStore::new();
        let a = store.create(None, 1);
        let b = store.create(None, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn list_grows_with_creates_and_every_entry_is_retrievable() {
        let store = LeaveRequestStore::new();
        assert!(store.list().is_empty());

        for days in 0..4 {
            store.create(Some(format!("emp-{days}")), days);
        }
        let all = store.list();
        assert_eq!(all.len(), 4);
        for request in &all {
            assert!(store.get(request.id()).is_some());
        }
    }

    #[test]
    fn approve_is_idempotent_and_restamps_the_approval_date() {
        let store = LeaveRequestStore::new();
        let id = store.create(Some("Alice".into()), 3);
        let auto_stamp = store.get(&id).unwrap().approval_date().unwrap();

        assert!(store.approve(&id));
        let first = store.get(&id).unwrap().approval_date().unwrap();
        assert!(first >= auto_stamp);

        assert!(store.approve(&id));
        let second = store.get(&id).unwrap().approval_date().unwrap();
        assert!(second >= first);
        assert_eq!(store.get(&id).unwrap().approved(), Some(true));
    }

    #[test]
    fn reject_clears_the_approval_date() {
        // Scenario: auto-approved request gets manually rejected.
        let store = LeaveRequestStore::new();
        let id = store.create(Some("Carol".into()), 2);
        assert_eq!(store.get(&id).unwrap().approved(), Some(true));

        assert!(store.reject(&id));
        let request = store.get(&id).unwrap();
        assert_eq!(request.approved(), Some(false));
        assert!(request.approval_date().is_none());

        // Idempotent.
        assert!(store.reject(&id));
        assert_eq!(store.get(&id).unwrap().approved(), Some(false));
    }

    #[test]
    fn manual_approval_of_a_long_request() {
        // Scenario: 10-day request waits for a manual decision.
        let store = LeaveRequestStore::new();
        let id = store.create(Some("Bob".into()), 10);

        let pending = store.get(&id).unwrap();
        assert_eq!(pending.approved(), Some(false));
        assert!(pending.approval_date().is_none());

        assert!(store.approve(&id));
        let approved = store.get(&id).unwrap();
        assert_eq!(approved.approved(), Some(true));
        assert!(approved.approval_date().is_some());
    }

    #[test]
    fn approve_and_reject_fail_on_unknown_or_empty_ids_without_side_effects() {
        let store = LeaveRequestStore::new();
        store.create(Some("Alice".into()), 3);

        assert!(!store.approve("nonexistent"));
        assert!(!store.reject("nonexistent"));
        assert!(!store.approve(""));
        assert!(!store.reject(""));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn snapshots_are_detached_from_the_store() {
        let store = LeaveRequestStore::new();
        let id = store.create(Some("Alice".into()), 3);

        let mut snapshot = store.get(&id).unwrap();
        snapshot.set_approved(false);
        snapshot.set_approval_date(None);

        assert_eq!(store.get(&id).unwrap().approved(), Some(true));
    }

    #[test]
    fn concurrent_creates_never_lose_requests() {
        let store = LeaveRequestStore::new();
        let threads: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| store.create(Some(format!("worker-{t}")), i))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<String> = threads
            .into_iter()
            .flat_map(|t| t.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 8 * 50);
        assert_eq!(store.list().len(), 8 * 50);
    }

    #[test]
    fn concurrent_decisions_keep_state_consistent() {
        let store = LeaveRequestStore::new();
        let id = store.create(Some("Bob".into()), 10);

        let threads: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                let id = id.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        if t % 2 == 0 {
                            assert!(store.approve(&id));
                        } else {
                            assert!(store.reject(&id));
                        }
                    }
                })
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }

        // Whichever decision landed last, approved and approval_date agree.
        let request = store.get(&id).unwrap();
        match request.approved() {
            Some(true) => assert!(request.approval_date().is_some()),
            Some(false) => assert!(request.approval_date().is_none()),
            None => panic!("decided request reverted to pending"),
        }
    }
}
