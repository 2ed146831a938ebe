//! Loans and the admin dashboard counters.

use dioxus::prelude::*;

use crate::models::{BorrowRecord, BorrowerRecords, DashboardStats};
#[cfg(feature = "server")]
use crate::models::Principal;

#[cfg(feature = "server")]
#[post("/api/loans/borrow", session: tower_sessions::Session)]
pub async fn borrow_book(book_id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("borrowBook", &caller, (book_id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/loans/borrow")]
pub async fn borrow_book(book_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/loans/return", session: tower_sessions::Session)]
pub async fn return_book(book_id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("returnBook", &caller, (book_id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/loans/return")]
pub async fn return_book(book_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// The caller's loans, active and returned.
#[cfg(feature = "server")]
#[get("/api/loans/mine", session: tower_sessions::Session)]
pub async fn get_my_borrow_history() -> Result<Vec<BorrowRecord>, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("getMyBorrowHistory", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/loans/mine")]
pub async fn get_my_borrow_history() -> Result<Vec<BorrowRecord>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/loans", session: tower_sessions::Session)]
pub async fn get_all_borrow_records() -> Result<Vec<BorrowerRecords>, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    let rows: Vec<(Principal, Vec<BorrowRecord>)> =
        crate::backend::call("getAllBorrowRecords", &caller, crate::backend::NO_ARGS).await?;
    Ok(rows
        .into_iter()
        .map(|(principal, records)| BorrowerRecords { principal, records })
        .collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/loans")]
pub async fn get_all_borrow_records() -> Result<Vec<BorrowerRecords>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/stats", session: tower_sessions::Session)]
pub async fn get_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("getDashboardStats", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/stats")]
pub async fn get_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
