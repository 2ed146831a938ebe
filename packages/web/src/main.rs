use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::{AuthProvider, QueryProvider, ThemeProvider};
use views::{Admin, AppLayout, Dashboard, Home, LoginPage, Profile, Resources, SignUpPage};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        LoginPage {},
        #[route("/signup")]
        SignUpPage {},
        #[route("/resources")]
        Resources {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/profile")]
        Profile {},
        #[route("/admin")]
        Admin {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    #[cfg(feature = "server")]
    {
        match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime.block_on(launch_server()),
            Err(e) => eprintln!("Failed to start tokio runtime: {e}"),
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let settings = match api::settings::settings().await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return;
        }
    };

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(settings.session.expiry_days)));

    let router = axum::Router::new()
        .route("/auth/{provider}/callback", get(oauth_callback))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

/// Finish an OAuth login started by `get_login_url` and send the browser on.
#[cfg(feature = "server")]
async fn oauth_callback(
    axum::extract::Path(provider): axum::extract::Path<String>,
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    if let Some(error) = params.get("error") {
        tracing::warn!(%provider, %error, "provider denied login");
        return Redirect::to("/login?error=oauth_error");
    }
    let Some(code) = params.get("code") else {
        tracing::error!(%provider, "callback missing code");
        return Redirect::to("/login?error=missing_code");
    };
    let Some(state) = params.get("state") else {
        tracing::error!(%provider, "callback missing state");
        return Redirect::to("/login?error=missing_state");
    };

    let verifier = match api::auth::take_pending_login(&session, &provider, state).await {
        Ok(verifier) => verifier,
        Err(e) => {
            tracing::error!(%provider, "Rejected callback: {}", e);
            return Redirect::to("/login?error=oauth_error");
        }
    };

    let settings = match api::settings::settings().await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Redirect::to("/login?error=config_error");
        }
    };

    let identity = match api::auth::exchange_code(settings, &provider, code, verifier).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::error!(%provider, "OAuth exchange error: {}", e);
            return Redirect::to("/login?error=oauth_error");
        }
    };

    match api::auth::sign_in(&session, identity).await {
        Ok(_) => Redirect::to("/login"),
        Err(e) => {
            tracing::error!("Failed to set session: {}", e);
            Redirect::to("/login?error=session_error")
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::LIBRARY_CSS }
        document::Title { "VEMU Library Portal" }

        ThemeProvider {
            QueryProvider {
                AuthProvider {
                    ToastProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}
