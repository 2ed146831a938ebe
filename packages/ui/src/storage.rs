//! Browser `localStorage` access. Outside the browser every read misses and
//! every write is dropped.

pub const ROLE_KEY: &str = "userRole";
pub const PRINCIPAL_KEY: &str = "persistedPrincipal";
pub const THEME_KEY: &str = "theme";
pub const COUNTED_PRINCIPAL_KEY: &str = "countedActivePrincipal";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            tracing::warn!(key, "localStorage write failed");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove(_key: &str) {}

/// The role last resolved for `principal`, if this browser remembers one.
pub fn load_role_for(principal: &api::Principal) -> Option<api::UserRole> {
    if get(PRINCIPAL_KEY).as_deref() != Some(principal.as_str()) {
        return None;
    }
    get(ROLE_KEY).and_then(|r| api::UserRole::parse(&r))
}

pub fn save_role(principal: &api::Principal, role: api::UserRole) {
    set(PRINCIPAL_KEY, principal.as_str());
    set(ROLE_KEY, role.as_str());
}

pub fn clear_role() {
    remove(ROLE_KEY);
    remove(PRINCIPAL_KEY);
}

/// Whether this browser already added `principal` to the active-user count.
pub fn is_counted_active(principal: &api::Principal) -> bool {
    counts_principal(get(COUNTED_PRINCIPAL_KEY).as_deref(), principal)
}

pub fn mark_counted_active(principal: &api::Principal) {
    set(COUNTED_PRINCIPAL_KEY, principal.as_str());
}

pub fn clear_counted_active() {
    remove(COUNTED_PRINCIPAL_KEY);
}

fn counts_principal(stored: Option<&str>, principal: &api::Principal) -> bool {
    stored == Some(principal.as_str())
}

/// Value of `name` in the current page's query string.
#[cfg(target_arch = "wasm32")]
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search).ok()?.get(name)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn query_param(_name: &str) -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Principal;

    #[test]
    fn test_counted_principal_must_match() {
        let alice = Principal::new("alice-00001");
        assert!(counts_principal(Some("alice-00001"), &alice));
        assert!(!counts_principal(Some("bob-00002"), &alice));
        assert!(!counts_principal(None, &alice));
    }

    #[test]
    fn test_nothing_counted_outside_browser() {
        let alice = Principal::new("alice-00001");
        mark_counted_active(&alice);
        assert!(!is_counted_active(&alice));
    }
}
