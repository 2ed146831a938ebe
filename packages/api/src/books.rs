//! Catalog server functions and attachment uploads.

use dioxus::prelude::*;

use crate::blob::ExternalBlob;
use crate::models::{Book, BookCreateData};

/// Every book, sorted by title.
#[cfg(feature = "server")]
#[get("/api/books", session: tower_sessions::Session)]
pub async fn get_all_books() -> Result<Vec<Book>, ServerFnError> {
    let caller = crate::auth::caller_or_anonymous(&session).await?;
    crate::backend::call("getAllBooksSortedByTitle", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/books")]
pub async fn get_all_books() -> Result<Vec<Book>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[get("/api/books/:id", session: tower_sessions::Session)]
pub async fn get_book_by_id(id: String) -> Result<Book, ServerFnError> {
    let caller = crate::auth::caller_or_anonymous(&session).await?;
    crate::backend::call("getBookById", &caller, (id,)).await
}

#[cfg(not(feature = "server"))]
#[get("/api/books/:id")]
pub async fn get_book_by_id(id: String) -> Result<Book, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/books/add", session: tower_sessions::Session)]
pub async fn add_book(data: BookCreateData) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("addBook", &caller, (data,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/books/add")]
pub async fn add_book(data: BookCreateData) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/books/edit", session: tower_sessions::Session)]
pub async fn edit_book(id: String, data: BookCreateData) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("editBook", &caller, (id, data)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/books/edit")]
pub async fn edit_book(id: String, data: BookCreateData) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/books/delete", session: tower_sessions::Session)]
pub async fn delete_book(id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("deleteBook", &caller, (id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/books/delete")]
pub async fn delete_book(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Open an upload with the storage gateway and return its id.
#[cfg(feature = "server")]
#[post("/api/uploads/begin", session: tower_sessions::Session)]
pub async fn begin_upload(file_name: String, size: u64) -> Result<String, ServerFnError> {
    crate::auth::require_caller(&session).await?;
    let gateway = crate::blob::gateway()
        .await
        .map_err(|e| e.into_server_fn_error())?;
    gateway
        .begin(&file_name, size)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg(not(feature = "server"))]
#[post("/api/uploads/begin")]
pub async fn begin_upload(file_name: String, size: u64) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/uploads/chunk", session: tower_sessions::Session)]
pub async fn upload_chunk(id: String, offset: u64, bytes: Vec<u8>) -> Result<(), ServerFnError> {
    crate::auth::require_caller(&session).await?;
    let gateway = crate::blob::gateway()
        .await
        .map_err(|e| e.into_server_fn_error())?;
    gateway
        .chunk(&id, offset, bytes)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg(not(feature = "server"))]
#[post("/api/uploads/chunk")]
pub async fn upload_chunk(id: String, offset: u64, bytes: Vec<u8>) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/uploads/finish", session: tower_sessions::Session)]
pub async fn finish_upload(id: String) -> Result<ExternalBlob, ServerFnError> {
    crate::auth::require_caller(&session).await?;
    let gateway = crate::blob::gateway()
        .await
        .map_err(|e| e.into_server_fn_error())?;
    gateway
        .finish(&id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg(not(feature = "server"))]
#[post("/api/uploads/finish")]
pub async fn finish_upload(id: String) -> Result<ExternalBlob, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
