//! Mutations and the cache keys they invalidate.
//!
//! A mutation runs one server function. Only when it succeeds are the keys
//! listed by [`MutationKind::invalidates`] dropped from the cache; failures
//! come back as the message to show in a toast.

use std::collections::HashSet;
use std::future::Future;

use dioxus::prelude::*;

use crate::query::{Invalidate, QueryKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MutationKind {
    SaveProfile,
    AddBook,
    EditBook,
    DeleteBook,
    BorrowBook,
    ReturnBook,
    CreateReservation,
    CancelReservation,
    ApproveReservation,
    RejectReservation,
    AddAnnouncement,
    EditAnnouncement,
    DeleteAnnouncement,
    AddResource,
    EditResource,
    DeleteResource,
    AssignRole,
    IncrementActiveUsers,
    DecrementActiveUsers,
}

impl MutationKind {
    pub fn invalidates(self) -> &'static [QueryKey] {
        use MutationKind::*;
        use QueryKey as K;
        match self {
            SaveProfile => &[K::CurrentUserProfile, K::CallerRole],
            AddBook | EditBook | DeleteBook => &[K::Books, K::DashboardStats],
            BorrowBook | ReturnBook => &[
                K::Books,
                K::MyBorrowHistory,
                K::AllBorrowRecords,
                K::DashboardStats,
            ],
            CreateReservation | CancelReservation => &[K::MyReservations, K::AllReservations],
            ApproveReservation | RejectReservation => &[
                K::AllReservations,
                K::MyReservations,
                K::Books,
                K::DashboardStats,
            ],
            AddAnnouncement | EditAnnouncement | DeleteAnnouncement => &[K::Announcements],
            AddResource | EditResource | DeleteResource => &[K::DigitalResources],
            AssignRole => &[K::AllUsers],
            IncrementActiveUsers | DecrementActiveUsers => &[K::ActiveUserCount],
        }
    }
}

/// Await `fut`; on success invalidate the keys of `kind`.
pub async fn run_mutation<T, E, Fut>(
    cache: &mut impl Invalidate,
    kind: MutationKind,
    fut: Fut,
) -> Result<T, String>
where
    E: std::fmt::Display,
    Fut: Future<Output = Result<T, E>>,
{
    match fut.await {
        Ok(value) => {
            cache.invalidate(kind.invalidates());
            Ok(value)
        }
        Err(e) => {
            tracing::warn!(?kind, error = %e, "mutation failed");
            Err(clean_error(&e.to_string()))
        }
    }
}

/// Strip transport prefixes so toasts show the backend's own message.
pub fn clean_error(message: &str) -> String {
    let trimmed = message
        .trim_start_matches("error running server function:")
        .trim_start_matches("ServerFnError:")
        .trim();
    if trimmed.is_empty() {
        "Something went wrong".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Ids with a request in flight.
pub trait PendingStore {
    fn is_pending(&self, id: &str) -> bool;
    fn mark(&mut self, id: &str);
    fn unmark(&mut self, id: &str);
}

impl PendingStore for HashSet<String> {
    fn is_pending(&self, id: &str) -> bool {
        self.contains(id)
    }

    fn mark(&mut self, id: &str) {
        self.insert(id.to_string());
    }

    fn unmark(&mut self, id: &str) {
        self.remove(id);
    }
}

impl PendingStore for Signal<HashSet<String>> {
    fn is_pending(&self, id: &str) -> bool {
        self.read().contains(id)
    }

    fn mark(&mut self, id: &str) {
        self.write().insert(id.to_string());
    }

    fn unmark(&mut self, id: &str) {
        // The owning component may already be gone when a dropped request unmarks.
        if let Ok(mut pending) = self.try_write() {
            pending.remove(id);
        }
    }
}

/// Clears the mark when the tracked request finishes or is dropped.
struct Unmark<'a, S: PendingStore> {
    store: &'a mut S,
    id: &'a str,
}

impl<S: PendingStore> Drop for Unmark<'_, S> {
    fn drop(&mut self) {
        self.store.unmark(self.id);
    }
}

/// Run `fut` with `id` marked pending, clearing the mark afterwards whatever
/// the outcome, also when the returned future is dropped early. Returns
/// `None` without running `fut` when `id` is already pending.
pub async fn track_pending<S, T, Fut>(store: &mut S, id: &str, fut: Fut) -> Option<T>
where
    S: PendingStore,
    Fut: Future<Output = T>,
{
    if store.is_pending(id) {
        tracing::debug!(id, "request already in flight");
        return None;
    }
    store.mark(id);
    let _unmark = Unmark { store, id };
    Some(fut.await)
}

/// Per-component set of pending ids.
pub fn use_pending() -> Signal<HashSet<String>> {
    use_signal(HashSet::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryCache;

    #[test]
    fn test_invalidation_table() {
        use MutationKind::*;
        use QueryKey as K;
        assert_eq!(SaveProfile.invalidates(), &[K::CurrentUserProfile, K::CallerRole]);
        assert_eq!(DeleteBook.invalidates(), &[K::Books, K::DashboardStats]);
        assert_eq!(
            ReturnBook.invalidates(),
            &[K::Books, K::MyBorrowHistory, K::AllBorrowRecords, K::DashboardStats]
        );
        assert_eq!(CancelReservation.invalidates(), &[K::MyReservations, K::AllReservations]);
        assert_eq!(
            RejectReservation.invalidates(),
            &[K::AllReservations, K::MyReservations, K::Books, K::DashboardStats]
        );
        assert_eq!(EditAnnouncement.invalidates(), &[K::Announcements]);
        assert_eq!(AddResource.invalidates(), &[K::DigitalResources]);
        assert_eq!(AssignRole.invalidates(), &[K::AllUsers]);
        assert_eq!(DecrementActiveUsers.invalidates(), &[K::ActiveUserCount]);
    }

    fn filled_cache() -> QueryCache {
        let mut cache = QueryCache::default();
        for key in QueryKey::ALL {
            cache.insert(key, 0u8, 0);
        }
        cache
    }

    #[tokio::test]
    async fn test_success_invalidates_exactly_its_keys() {
        let mut cache = filled_cache();
        let out = run_mutation(&mut cache, MutationKind::BorrowBook, async {
            Ok::<_, String>(7)
        })
        .await;
        assert_eq!(out, Ok(7));
        for key in QueryKey::ALL {
            let expected_gone = MutationKind::BorrowBook.invalidates().contains(&key);
            assert_eq!(cache.contains(key), !expected_gone, "{key:?}");
        }
    }

    #[tokio::test]
    async fn test_failure_keeps_cache() {
        let mut cache = filled_cache();
        let out: Result<(), String> = run_mutation(&mut cache, MutationKind::AddBook, async {
            Err("Unauthorized: only admins can add books")
        })
        .await;
        assert_eq!(out, Err("Unauthorized: only admins can add books".to_string()));
        assert!(QueryKey::ALL.iter().all(|k| cache.contains(*k)));
    }

    #[tokio::test]
    async fn test_pending_cleared_on_both_paths() {
        let mut pending = HashSet::new();
        let ok = track_pending(&mut pending, "b1", async { Ok::<_, String>(()) }).await;
        assert_eq!(ok, Some(Ok(())));
        assert!(pending.is_empty());

        let err = track_pending(&mut pending, "b1", async { Err::<(), _>("boom".to_string()) }).await;
        assert_eq!(err, Some(Err("boom".to_string())));
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_pending_cleared_when_request_dropped() {
        let mut pending = HashSet::new();
        let abandoned = tokio::time::timeout(
            std::time::Duration::from_millis(10),
            track_pending(&mut pending, "b1", std::future::pending::<()>()),
        )
        .await;
        assert!(abandoned.is_err());
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_request_refused() {
        let mut pending = HashSet::new();
        pending.mark("b1");
        let mut ran = false;
        let out = track_pending(&mut pending, "b1", async { ran = true }).await;
        assert_eq!(out, None);
        assert!(!ran);
        assert!(pending.is_pending("b1"));
    }

    #[test]
    fn test_clean_error() {
        assert_eq!(
            clean_error("error running server function: No copies available"),
            "No copies available"
        );
        assert_eq!(clean_error("   "), "Something went wrong");
    }
}
