//! Root application component: context providers, page routing, and the
//! background session refresh.
//!
//! ARCHITECTURE
//! ============
//! Page switching is an exhaustive match on [`Page`] at a single site; there
//! is no URL router. Swapping the page unmounts the previous one entirely,
//! so per-page state (scroll, form contents, fetched data) never survives
//! navigation.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::header::Header;
use crate::pages::admin::AdminPage;
use crate::pages::auth::AuthPage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;
use crate::pages::subscriptions::SubscriptionsPage;
use crate::state::nav::Page;
use crate::state::session::SessionState;
use crate::util::token_store;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Session at startup: restored from the persisted token when one exists.
fn initial_session() -> SessionState {
    token_store::load().map_or_else(SessionState::default, SessionState::restored)
}

/// Whether the background `/api/users/me` fetch should run for this token.
/// Avoids refetching for a token that was already resolved, which would
/// otherwise loop: resolving the user rewrites the session signal the
/// effect depends on.
fn needs_user_fetch(token: Option<&str>, fetched_for: Option<&str>) -> bool {
    match token {
        Some(token) => fetched_for != Some(token),
        None => false,
    }
}

/// Root application component.
///
/// Provides the session context and mounts exactly one page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(initial_session());
    let page = RwSignal::new(Page::default());
    provide_context(session);

    // Whenever a token appears, eagerly fetch the current user. Failures
    // are logged and otherwise swallowed: the previous user value (or none)
    // stays in place and no retry is scheduled.
    let fetched_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let token = session.with(|s| s.token.clone());
        if token.is_none() {
            fetched_for.set(None);
            return;
        }
        if !needs_user_fetch(token.as_deref(), fetched_for.get_untracked().as_deref()) {
            return;
        }
        let Some(token) = token else {
            return;
        };
        fetched_for.set(Some(token.clone()));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user(&token).await {
                Ok(user) => session.update(|s| s.resolve_user(user)),
                Err(e) => {
                    log::warn!("background user refresh failed: {e}");
                    session.update(SessionState::resolve_failed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let on_auth_success = Callback::new(move |()| page.set(Page::Home));

    view! {
        <Stylesheet id="leptos" href="/pkg/newsstand.css"/>
        <Title text="Newsstand"/>

        <div class="app-shell">
            <Header page/>
            {move || match page.get() {
                Page::Home => view! { <HomePage/> }.into_any(),
                Page::Auth => view! { <AuthPage on_success=on_auth_success/> }.into_any(),
                Page::Subscriptions => view! { <SubscriptionsPage/> }.into_any(),
                Page::Admin => view! { <AdminPage/> }.into_any(),
                Page::Profile => view! { <ProfilePage/> }.into_any(),
            }}
        </div>
    }
}
