//! Digital resources: links to e-books, journals, databases and the like.

use dioxus::prelude::*;

use crate::models::{DigitalResource, DigitalResourceCreateData};

#[cfg(feature = "server")]
#[get("/api/resources", session: tower_sessions::Session)]
pub async fn get_all_digital_resources() -> Result<Vec<DigitalResource>, ServerFnError> {
    let caller = crate::auth::caller_or_anonymous(&session).await?;
    crate::backend::call("getAllDigitalResources", &caller, crate::backend::NO_ARGS).await
}

#[cfg(not(feature = "server"))]
#[get("/api/resources")]
pub async fn get_all_digital_resources() -> Result<Vec<DigitalResource>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/resources/add", session: tower_sessions::Session)]
pub async fn add_digital_resource(data: DigitalResourceCreateData) -> Result<String, ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("addDigitalResource", &caller, (data,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/resources/add")]
pub async fn add_digital_resource(data: DigitalResourceCreateData) -> Result<String, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/resources/edit", session: tower_sessions::Session)]
pub async fn edit_digital_resource(
    id: String,
    data: DigitalResourceCreateData,
) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("editDigitalResource", &caller, (id, data)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/resources/edit")]
pub async fn edit_digital_resource(
    id: String,
    data: DigitalResourceCreateData,
) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/resources/delete", session: tower_sessions::Session)]
pub async fn delete_digital_resource(id: String) -> Result<(), ServerFnError> {
    let caller = crate::auth::require_caller(&session).await?;
    crate::backend::call("deleteDigitalResource", &caller, (id,)).await
}

#[cfg(not(feature = "server"))]
#[post("/api/resources/delete")]
pub async fn delete_digital_resource(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
