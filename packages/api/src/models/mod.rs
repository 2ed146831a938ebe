//! Data models the backend exposes and the client renders.
//!
//! Everything here crosses the server/client boundary, so every type is
//! `Serialize + Deserialize` with the backend's camelCase field names.

mod announcement;
mod book;
mod borrow;
mod principal;
mod reservation;
mod resource;
mod time;
mod user;

pub use announcement::{latest_first, Announcement, AnnouncementCreateData, AnnouncementPriority};
pub use book::{Book, BookCreateData};
pub use borrow::{BorrowRecord, BorrowerRecords, LoanStatus};
pub use principal::{Principal, ANONYMOUS_PRINCIPAL};
pub use reservation::{sort_newest_first, Reservation, ReservationStatus};
pub use resource::{DigitalResource, DigitalResourceCreateData, RESOURCE_CATEGORIES};
pub use time::Time;
pub use user::{SessionInfo, UserEntry, UserProfile, UserRole};

#[cfg(test)]
pub(crate) use book::sample_book;

use serde::{Deserialize, Serialize};

/// Counters shown on the admin overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_books: u64,
    pub total_users: u64,
    pub books_borrowed: u64,
    pub overdue_count: u64,
}
