//! Light/dark theme, remembered in `localStorage`.

use dioxus::prelude::*;

use crate::storage;

/// Theme context: `None` follows the system, otherwise `"light"` or `"dark"`.
pub type ThemeSignal = Signal<Option<String>>;

/// Set or clear the `dark` class on `<html>`.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Option<&str>) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2("light", "dark");
    if let Some(theme) = theme {
        let _ = classes.add_1(theme);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: Option<&str>) {}

pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let stored = storage::get(storage::THEME_KEY).filter(|t| t == "light" || t == "dark");
    apply_theme(stored.as_deref());
    theme.set(stored);
}

/// The theme a toggle click switches to.
pub fn next_theme(current: Option<&str>) -> &'static str {
    match current {
        Some("dark") => "light",
        _ => "dark",
    }
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Installs the theme context and restores the saved choice.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let mut theme: ThemeSignal = use_context_provider(|| Signal::new(None));
    use_effect(move || {
        load_theme_from_storage(&mut theme);
    });

    rsx! {
        {children}
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let is_dark = theme().as_deref() == Some("dark");

    rsx! {
        button {
            class: "icon-btn",
            title: if is_dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| {
                let next = next_theme(theme().as_deref());
                storage::set(storage::THEME_KEY, next);
                apply_theme(Some(next));
                theme.set(Some(next.to_string()));
            },
            if is_dark {
                crate::Icon { icon: crate::icons::FaSun, width: 16, height: 16 }
            } else {
                crate::Icon { icon: crate::icons::FaMoon, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_theme() {
        assert_eq!(next_theme(None), "dark");
        assert_eq!(next_theme(Some("light")), "dark");
        assert_eq!(next_theme(Some("dark")), "light");
    }
}
