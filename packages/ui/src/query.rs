//! # Query cache
//!
//! A small request cache in front of the server functions. Every read
//! belongs to a [`QueryKey`]; a successful fetch is kept for
//! [`STALE_TIME_MS`] and handed to any later reader of the same key without
//! touching the network.
//!
//! Only one fetch per key runs at a time. A reader that finds the key already
//! in flight waits for the version signal of that key, which is bumped when
//! the fetch settles, and then picks the outcome up from the cache.
//!
//! Mutations call [`QueryClient::invalidate`] with the keys they affect. That
//! drops the cached values and bumps a per-key version signal, so every
//! [`use_query`] subscribed to one of those keys refetches.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use api::Time;
use dioxus::prelude::*;

use crate::auth::use_auth;

/// How long a fetched value is served without refetching.
pub const STALE_TIME_MS: i64 = 5 * 60 * 1000;
/// How long a failed fetch is reported to readers that were waiting on it.
pub const FAILURE_HOLD_MS: i64 = 2_000;
/// Extra attempts for reads that allow retries.
pub const DEFAULT_RETRY: u32 = 1;
/// Refresh period of the live active-user counter.
pub const ACTIVE_USERS_POLL: Duration = Duration::from_secs(30);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKey {
    Books,
    MyBorrowHistory,
    DashboardStats,
    CurrentUserProfile,
    CallerRole,
    AllUsers,
    AllBorrowRecords,
    Announcements,
    DigitalResources,
    MyReservations,
    AllReservations,
    ActiveUserCount,
}

impl QueryKey {
    pub const ALL: [QueryKey; 12] = [
        QueryKey::Books,
        QueryKey::MyBorrowHistory,
        QueryKey::DashboardStats,
        QueryKey::CurrentUserProfile,
        QueryKey::CallerRole,
        QueryKey::AllUsers,
        QueryKey::AllBorrowRecords,
        QueryKey::Announcements,
        QueryKey::DigitalResources,
        QueryKey::MyReservations,
        QueryKey::AllReservations,
        QueryKey::ActiveUserCount,
    ];
}

struct Entry {
    value: Box<dyn Any>,
    fetched_at_ms: i64,
}

struct Failure {
    message: String,
    failed_at_ms: i64,
}

/// What a reader should do about a key.
#[derive(Debug, PartialEq)]
pub enum Lookup<T> {
    Fresh(T),
    /// The last fetch failed moments ago.
    Failed(String),
    /// Another reader is fetching; wait for the key's version to move.
    Pending,
    /// The caller owns the fetch and must settle or abandon this ticket.
    Fetch(u64),
}

/// Type-erased values by key, with their fetch time and in-flight fetches.
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    failures: HashMap<QueryKey, Failure>,
    in_flight: HashMap<QueryKey, u64>,
    next_ticket: u64,
    stale_ms: i64,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(STALE_TIME_MS)
    }
}

impl QueryCache {
    pub fn new(stale_ms: i64) -> Self {
        Self {
            entries: HashMap::new(),
            failures: HashMap::new(),
            in_flight: HashMap::new(),
            next_ticket: 0,
            stale_ms,
        }
    }

    /// The cached value for `key` if it was fetched less than the staleness
    /// window before `now_ms` and has type `T`.
    pub fn get_fresh<T: Clone + 'static>(&self, key: QueryKey, now_ms: i64) -> Option<T> {
        let entry = self.entries.get(&key)?;
        if now_ms - entry.fetched_at_ms >= self.stale_ms {
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    /// Resolve a read of `key`. When nothing usable is cached and no fetch is
    /// running, the caller is handed a ticket and becomes the fetcher.
    pub fn lookup<T: Clone + 'static>(&mut self, key: QueryKey, now_ms: i64) -> Lookup<T> {
        if let Some(value) = self.get_fresh(key, now_ms) {
            return Lookup::Fresh(value);
        }
        if let Some(failure) = self.failures.get(&key) {
            if now_ms - failure.failed_at_ms < FAILURE_HOLD_MS {
                return Lookup::Failed(failure.message.clone());
            }
        }
        if self.in_flight.contains_key(&key) {
            return Lookup::Pending;
        }
        self.next_ticket += 1;
        self.in_flight.insert(key, self.next_ticket);
        Lookup::Fetch(self.next_ticket)
    }

    pub fn is_in_flight(&self, key: QueryKey) -> bool {
        self.in_flight.contains_key(&key)
    }

    /// Record the outcome of the fetch holding `ticket`. Returns `false` when
    /// the ticket was invalidated meanwhile, in which case nothing is stored.
    pub fn settle<T: 'static>(
        &mut self,
        key: QueryKey,
        ticket: u64,
        outcome: Result<T, String>,
        now_ms: i64,
    ) -> bool {
        if self.in_flight.get(&key) != Some(&ticket) {
            return false;
        }
        self.in_flight.remove(&key);
        match outcome {
            Ok(value) => {
                self.failures.remove(&key);
                self.insert(key, value, now_ms);
            }
            Err(message) => {
                self.failures.insert(
                    key,
                    Failure {
                        message,
                        failed_at_ms: now_ms,
                    },
                );
            }
        }
        true
    }

    /// Release `ticket` without an outcome. Returns whether it was still held.
    pub fn abandon(&mut self, key: QueryKey, ticket: u64) -> bool {
        if self.in_flight.get(&key) != Some(&ticket) {
            return false;
        }
        self.in_flight.remove(&key);
        true
    }

    pub fn insert<T: 'static>(&mut self, key: QueryKey, value: T, now_ms: i64) {
        self.entries.insert(
            key,
            Entry {
                value: Box::new(value),
                fetched_at_ms: now_ms,
            },
        );
    }

    pub fn contains(&self, key: QueryKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Forget `keys`, including failures and fetches still in flight.
    pub fn remove(&mut self, keys: &[QueryKey]) {
        for key in keys {
            self.entries.remove(key);
            self.failures.remove(key);
            self.in_flight.remove(key);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.failures.clear();
        self.in_flight.clear();
    }
}

/// Anything that can drop cached keys after a mutation.
pub trait Invalidate {
    fn invalidate(&mut self, keys: &[QueryKey]);
}

impl Invalidate for QueryCache {
    fn invalidate(&mut self, keys: &[QueryKey]) {
        self.remove(keys);
    }
}

/// Handle to the app-wide cache. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct QueryClient {
    cache: CopyValue<QueryCache>,
    versions: Signal<HashMap<QueryKey, u64>>,
}

impl QueryClient {
    fn new() -> Self {
        Self {
            cache: CopyValue::new(QueryCache::default()),
            versions: Signal::new(HashMap::new()),
        }
    }

    /// Current version of `key`. Reading it subscribes the caller.
    pub fn version(&self, key: QueryKey) -> u64 {
        self.versions.read().get(&key).copied().unwrap_or(0)
    }

    fn lookup<T: Clone + 'static>(&self, key: QueryKey) -> Lookup<T> {
        let mut cache = self.cache;
        let now = Time::now().as_millis();
        let found = cache.write().lookup(key, now);
        found
    }

    /// Store the outcome and wake every reader waiting on `key`.
    fn settle<T: 'static>(&self, key: QueryKey, ticket: u64, outcome: Result<T, String>) {
        let mut cache = self.cache;
        let now = Time::now().as_millis();
        if cache.write().settle(key, ticket, outcome, now) {
            self.bump(&[key]);
        }
    }

    /// Runs from `Drop`, possibly while the app is torn down.
    fn abandon(&self, key: QueryKey, ticket: u64) {
        let mut cache = self.cache;
        let released = match cache.try_write() {
            Ok(mut cache) => cache.abandon(key, ticket),
            Err(_) => false,
        };
        if !released {
            return;
        }
        let mut signal = self.versions;
        if let Ok(mut versions) = signal.try_write() {
            *versions.entry(key).or_insert(0) += 1;
        };
    }

    fn bump(&self, keys: &[QueryKey]) {
        let mut signal = self.versions;
        let mut versions = signal.write();
        for key in keys {
            *versions.entry(*key).or_insert(0) += 1;
        }
    }

    /// Drop everything, e.g. on logout.
    pub fn clear(&mut self) {
        self.cache.write().clear();
        self.bump(&QueryKey::ALL);
    }
}

impl Invalidate for QueryClient {
    fn invalidate(&mut self, keys: &[QueryKey]) {
        tracing::debug!(?keys, "invalidating queries");
        self.cache.write().remove(keys);
        self.bump(keys);
    }
}

pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>()
}

/// Provides the [`QueryClient`] to the component tree.
#[component]
pub fn QueryProvider(children: Element) -> Element {
    use_context_provider(QueryClient::new);

    rsx! {
        {children}
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QueryOptions {
    pub retry: u32,
    /// Skip the fetch until a session exists.
    pub requires_session: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            retry: DEFAULT_RETRY,
            requires_session: false,
        }
    }
}

impl QueryOptions {
    /// Reads tied to the caller's identity: no retries, no anonymous fetch.
    pub fn identity() -> Self {
        Self {
            retry: 0,
            requires_session: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    Loading,
    /// The query is waiting for a session.
    Disabled,
    Ready(T),
    Failed(String),
}

/// A cached read owned by one component.
pub struct Query<T: 'static> {
    resource: Resource<QueryState<T>>,
}

impl<T: 'static> Clone for Query<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Query<T> {}

impl<T: Clone + 'static> Query<T> {
    pub fn state(&self) -> QueryState<T> {
        self.resource.cloned().unwrap_or(QueryState::Loading)
    }

    pub fn data(&self) -> Option<T> {
        match self.state() {
            QueryState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state(), QueryState::Loading)
    }
}

/// Releases an unsettled fetch when its resource is cancelled, so a waiting
/// reader can take over.
struct FetchTicket {
    client: QueryClient,
    key: QueryKey,
    ticket: u64,
    settled: bool,
}

impl FetchTicket {
    fn settle<T: 'static>(mut self, outcome: Result<T, String>) {
        self.settled = true;
        self.client.settle(self.key, self.ticket, outcome);
    }
}

impl Drop for FetchTicket {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!(key = ?self.key, "fetch dropped before settling");
            self.client.abandon(self.key, self.ticket);
        }
    }
}

/// Read `key` through the cache, fetching with `fetch` when it is missing or
/// stale. Concurrent readers of one key share a single fetch.
pub fn use_query<T, F, Fut>(key: QueryKey, options: QueryOptions, fetch: F) -> Query<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let client = use_query_client();
    let auth = use_auth();
    let signed_in = use_memo(move || auth.read().session.is_some());
    let fetch = use_hook(|| std::rc::Rc::new(fetch));

    let resource = use_resource(move || {
        let _version = client.version(key);
        let enabled = !options.requires_session || signed_in();
        let fetch = fetch.clone();
        async move {
            if !enabled {
                return QueryState::Disabled;
            }
            let ticket = match client.lookup::<T>(key) {
                Lookup::Fresh(value) => return QueryState::Ready(value),
                Lookup::Failed(message) => return QueryState::Failed(message),
                Lookup::Pending => return QueryState::Loading,
                Lookup::Fetch(ticket) => FetchTicket {
                    client,
                    key,
                    ticket,
                    settled: false,
                },
            };

            let mut attempt = 0;
            loop {
                match fetch().await {
                    Ok(value) => {
                        ticket.settle(Ok(value.clone()));
                        return QueryState::Ready(value);
                    }
                    Err(e) if attempt < options.retry => {
                        attempt += 1;
                        tracing::warn!(?key, attempt, error = %e, "query failed, retrying");
                    }
                    Err(e) => {
                        tracing::error!(?key, error = %e, "query failed");
                        let message = e.to_string();
                        ticket.settle::<T>(Err(message.clone()));
                        return QueryState::Failed(message);
                    }
                }
            }
        }
    });

    Query { resource }
}

/// Invalidate `key` every `period` while the calling component is mounted.
pub fn use_polling(key: QueryKey, period: Duration) {
    let mut client = use_query_client();
    use_future(move || async move {
        loop {
            crate::sleep(period).await;
            client.invalidate(&[key]);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_within_window() {
        let mut cache = QueryCache::new(1_000);
        cache.insert(QueryKey::Books, vec![1u32, 2, 3], 10_000);
        assert_eq!(cache.get_fresh::<Vec<u32>>(QueryKey::Books, 10_500), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_fresh::<Vec<u32>>(QueryKey::Books, 10_999), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_fresh::<Vec<u32>>(QueryKey::Books, 11_000), None);
    }

    #[test]
    fn test_miss_on_wrong_type_or_key() {
        let mut cache = QueryCache::default();
        cache.insert(QueryKey::ActiveUserCount, 5u64, 0);
        assert_eq!(cache.get_fresh::<u32>(QueryKey::ActiveUserCount, 1), None);
        assert_eq!(cache.get_fresh::<u64>(QueryKey::Books, 1), None);
        assert_eq!(cache.get_fresh::<u64>(QueryKey::ActiveUserCount, 1), Some(5));
    }

    #[test]
    fn test_invalidate_and_clear() {
        let mut cache = QueryCache::default();
        cache.insert(QueryKey::Books, 1u8, 0);
        cache.insert(QueryKey::Announcements, 2u8, 0);
        cache.invalidate(&[QueryKey::Books]);
        assert!(!cache.contains(QueryKey::Books));
        assert_eq!(cache.get_fresh::<u8>(QueryKey::Announcements, 1), Some(2));
        cache.clear();
        assert!(!cache.contains(QueryKey::Announcements));
    }

    #[test]
    fn test_default_staleness_is_five_minutes() {
        let mut cache = QueryCache::default();
        cache.insert(QueryKey::Books, 1u8, 0);
        assert_eq!(cache.get_fresh::<u8>(QueryKey::Books, 299_999), Some(1));
        assert_eq!(cache.get_fresh::<u8>(QueryKey::Books, 300_000), None);
    }

    #[test]
    fn test_second_reader_waits_for_running_fetch() {
        let mut cache = QueryCache::default();
        let Lookup::Fetch(ticket) = cache.lookup::<Vec<u32>>(QueryKey::Books, 0) else {
            panic!("first reader should fetch");
        };
        assert_eq!(cache.lookup::<Vec<u32>>(QueryKey::Books, 5), Lookup::Pending);
        assert_eq!(cache.lookup::<Vec<u32>>(QueryKey::Books, 6), Lookup::Pending);

        assert!(cache.settle(QueryKey::Books, ticket, Ok(vec![4u32]), 10));
        assert!(!cache.is_in_flight(QueryKey::Books));
        assert_eq!(cache.lookup::<Vec<u32>>(QueryKey::Books, 11), Lookup::Fresh(vec![4]));
    }

    #[test]
    fn test_waiters_see_failure_then_refetch() {
        let mut cache = QueryCache::default();
        let Lookup::Fetch(ticket) = cache.lookup::<u8>(QueryKey::Announcements, 0) else {
            panic!("first reader should fetch");
        };
        assert!(cache.settle::<u8>(QueryKey::Announcements, ticket, Err("backend down".into()), 100));
        assert_eq!(
            cache.lookup::<u8>(QueryKey::Announcements, 150),
            Lookup::Failed("backend down".to_string())
        );
        assert!(matches!(
            cache.lookup::<u8>(QueryKey::Announcements, 100 + FAILURE_HOLD_MS),
            Lookup::Fetch(_)
        ));
    }

    #[test]
    fn test_invalidated_fetch_is_discarded() {
        let mut cache = QueryCache::default();
        let Lookup::Fetch(old) = cache.lookup::<u8>(QueryKey::Books, 0) else {
            panic!("first reader should fetch");
        };
        cache.invalidate(&[QueryKey::Books]);
        let Lookup::Fetch(new) = cache.lookup::<u8>(QueryKey::Books, 1) else {
            panic!("invalidation should allow a new fetch");
        };
        assert_ne!(old, new);
        assert!(!cache.settle(QueryKey::Books, old, Ok(1u8), 2));
        assert!(cache.is_in_flight(QueryKey::Books));
        assert!(cache.settle(QueryKey::Books, new, Ok(2u8), 3));
        assert_eq!(cache.get_fresh::<u8>(QueryKey::Books, 4), Some(2));
    }

    #[test]
    fn test_abandoned_fetch_frees_the_key() {
        let mut cache = QueryCache::default();
        let Lookup::Fetch(ticket) = cache.lookup::<u8>(QueryKey::AllUsers, 0) else {
            panic!("first reader should fetch");
        };
        assert!(cache.abandon(QueryKey::AllUsers, ticket));
        assert!(!cache.abandon(QueryKey::AllUsers, ticket));
        assert!(matches!(cache.lookup::<u8>(QueryKey::AllUsers, 1), Lookup::Fetch(_)));
    }

    #[test]
    fn test_identity_options() {
        let options = QueryOptions::identity();
        assert_eq!(options.retry, 0);
        assert!(options.requires_session);
        assert_eq!(QueryOptions::default().retry, 1);
    }
}
