//! Reservation requests. The backend enforces the pending-only transitions.

use dioxus::prelude::*;

use crate::models::Reservation;

/// Request a hold on a book; returns the new reservation id.
#[cfg(feature = "server")]
#[post("/api/reservations/create", session: tower_sessions::Session)]
pub async fn create_reservation(book_id: String) -> Result<String, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("createReservation", &caller, (book_id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/reservations/create")]
pub async fn create_reservation(book_id: String) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/reservations/cancel", session: tower_sessions::Session)]
pub async fn cancel_reservation(reservation_id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("cancelReservation", &caller, (reservation_id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/reservations/cancel")]
pub async fn cancel_reservation(reservation_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/reservations/approve", session: tower_sessions::Session)]
pub async fn approve_reservation(reservation_id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("approveReservation", &caller, (reservation_id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/reservations/approve")]
pub async fn approve_reservation(reservation_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/reservations/reject", session: tower_sessions::Session)]
pub async fn reject_reservation(reservation_id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("rejectReservation", &caller, (reservation_id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/reservations/reject")]
pub async fn reject_reservation(reservation_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/reservations/mine", session: tower_sessions::Session)]
pub async fn get_my_reservations() -> Result<Vec<Reservation>, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("getMyReservations", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/reservations/mine")]
pub async fn get_my_reservations() -> Result<Vec<Reservation>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/reservations", session: tower_sessions::Session)]
pub async fn get_all_reservations() -> Result<Vec<Reservation>, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("getAllReservations", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/reservations")]
pub async fn get_all_reservations() -> Result<Vec<Reservation>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
