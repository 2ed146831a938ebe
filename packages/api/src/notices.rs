//! Announcements on the notice board.

use dioxus::prelude::*;

use crate::models::{Announcement, AnnouncementCreateData};

#[cfg(feature = "server")]
#[get("/api/announcements", session: tower_sessions::Session)]
pub async fn get_all_announcements() -> Result<Vec<Announcement>, ServerFnError> {
    let caller = crate::auth::caller_or_anonymous(&session).await?;
    crate::backend::call("getAllAnnouncements", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/announcements")]
pub async fn get_all_announcements() -> Result<Vec<Announcement>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Publish an announcement; returns its id.
#[cfg(feature = "server")]
#[post("/api/announcements/add", session: tower_sessions::Session)]
pub async fn add_announcement(data: AnnouncementCreateData) -> Result<String, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("addAnnouncement", &caller, (data,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/announcements/add")]
pub async fn add_announcement(data: AnnouncementCreateData) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/announcements/edit", session: tower_sessions::Session)]
pub async fn edit_announcement(id: String, data: AnnouncementCreateData) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("editAnnouncement", &caller, (id, data)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/announcements/edit")]
pub async fn edit_announcement(id: String, data: AnnouncementCreateData) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/announcements/delete", session: tower_sessions::Session)]
pub async fn delete_announcement(id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("deleteAnnouncement", &caller, (id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/announcements/delete")]
pub async fn delete_announcement(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
