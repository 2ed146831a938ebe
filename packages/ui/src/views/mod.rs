use api::{LoanStatus, ReservationStatus};

use crate::components::{BadgeVariant, ToastOptions, Toasts};

pub mod admin;
pub use admin::AdminDashboard;

mod borrowed;
pub use borrowed::BorrowedBooksList;

mod catalog;
pub use catalog::BookCatalog;

mod dashboard;
pub use dashboard::StudentDashboard;

mod landing;
pub use landing::Landing;

mod login;
pub use login::{Login, SignUp};

mod my_reservations;
pub use my_reservations::MyReservations;

mod notice_board;
pub use notice_board::NoticeBoard;

mod profile;
pub use profile::StudentProfile;

mod profile_setup;
pub use profile_setup::ProfileSetupModal;

mod resources;
pub use resources::DigitalResources;

/// Toast the outcome of a mutation. `None` means the request was skipped
/// because one was already in flight, so nothing is shown.
pub(crate) fn report<T>(toast: Toasts, outcome: Option<Result<T, String>>, success: impl FnOnce(T) -> String) {
    match outcome {
        Some(Ok(value)) => {
            toast.success(success(value), ToastOptions::new());
        }
        Some(Err(message)) => {
            toast.error(message, ToastOptions::new());
        }
        None => {}
    }
}

pub(crate) fn loan_badge(status: LoanStatus) -> BadgeVariant {
    match status {
        LoanStatus::Active => BadgeVariant::Info,
        LoanStatus::Returned => BadgeVariant::Success,
        LoanStatus::Overdue => BadgeVariant::Danger,
    }
}

pub(crate) fn reservation_badge(status: ReservationStatus) -> BadgeVariant {
    match status {
        ReservationStatus::Pending => BadgeVariant::Warning,
        ReservationStatus::Approved => BadgeVariant::Success,
        ReservationStatus::Rejected => BadgeVariant::Danger,
        ReservationStatus::Cancelled => BadgeVariant::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue_and_rejected_are_flagged() {
        assert_eq!(loan_badge(LoanStatus::Overdue), BadgeVariant::Danger);
        assert_eq!(reservation_badge(ReservationStatus::Rejected), BadgeVariant::Danger);
        assert_eq!(reservation_badge(ReservationStatus::Pending), BadgeVariant::Warning);
    }
}
