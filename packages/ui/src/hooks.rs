//! One hook per backend read, each bound to its cache key.

use api::{
    Announcement, Book, BorrowRecord, BorrowerRecords, DashboardStats, DigitalResource,
    Reservation, UserEntry, UserProfile,
};

use crate::query::{use_polling, use_query, Query, QueryKey, QueryOptions, ACTIVE_USERS_POLL};

pub fn use_books() -> Query<Vec<Book>> {
    use_query(QueryKey::Books, QueryOptions::default(), api::get_all_books)
}

pub fn use_my_borrow_history() -> Query<Vec<BorrowRecord>> {
    use_query(
        QueryKey::MyBorrowHistory,
        QueryOptions::identity(),
        api::get_my_borrow_history,
    )
}

pub fn use_dashboard_stats() -> Query<DashboardStats> {
    use_query(
        QueryKey::DashboardStats,
        QueryOptions::identity(),
        api::get_dashboard_stats,
    )
}

/// `Ready(None)` means the caller has not set up a profile yet.
pub fn use_caller_profile() -> Query<Option<UserProfile>> {
    use_query(
        QueryKey::CurrentUserProfile,
        QueryOptions::identity(),
        api::get_caller_user_profile,
    )
}

pub fn use_all_users() -> Query<Vec<UserEntry>> {
    use_query(QueryKey::AllUsers, QueryOptions::identity(), api::get_all_users)
}

pub fn use_all_borrow_records() -> Query<Vec<BorrowerRecords>> {
    use_query(
        QueryKey::AllBorrowRecords,
        QueryOptions::identity(),
        api::get_all_borrow_records,
    )
}

pub fn use_announcements() -> Query<Vec<Announcement>> {
    use_query(
        QueryKey::Announcements,
        QueryOptions::default(),
        api::get_all_announcements,
    )
}

pub fn use_digital_resources() -> Query<Vec<DigitalResource>> {
    use_query(
        QueryKey::DigitalResources,
        QueryOptions::default(),
        api::get_all_digital_resources,
    )
}

pub fn use_my_reservations() -> Query<Vec<Reservation>> {
    use_query(
        QueryKey::MyReservations,
        QueryOptions::identity(),
        api::get_my_reservations,
    )
}

pub fn use_all_reservations() -> Query<Vec<Reservation>> {
    use_query(
        QueryKey::AllReservations,
        QueryOptions::identity(),
        api::get_all_reservations,
    )
}

/// Live count, refreshed every [`ACTIVE_USERS_POLL`].
pub fn use_active_user_count() -> Query<u64> {
    let query = use_query(
        QueryKey::ActiveUserCount,
        QueryOptions::default(),
        api::get_active_user_count,
    );
    use_polling(QueryKey::ActiveUserCount, ACTIVE_USERS_POLL);
    query
}
