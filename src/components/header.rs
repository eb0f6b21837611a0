//! Top navigation bar with page links and the session control.

use leptos::prelude::*;

use crate::state::nav::Page;
use crate::state::session::SessionState;
use crate::util::token_store;

/// Header nav. Page links are filtered by the viewer's session; the right
/// side shows the signed-in identity and a logout control.
#[component]
pub fn Header(page: RwSignal<Page>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let links = move || {
        let state = session.get();
        let authenticated = state.is_authenticated();
        let admin = state.is_admin();
        Page::ALL
            .into_iter()
            .filter(|p| p.visible_to(authenticated, admin))
            .map(|target| {
                view! {
                    <button
                        class="header__link"
                        class:header__link--active=move || page.get() == target
                        on:click=move |_| page.set(target)
                    >
                        {target.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let identity = move || {
        session
            .get()
            .user
            .map(|user| user.display_name().to_owned())
    };

    let on_logout = move |_| {
        token_store::clear();
        session.update(SessionState::clear);
        page.set(Page::Home);
    };

    view! {
        <header class="header">
            <span class="header__brand">"Newsstand"</span>
            <nav class="header__nav">{links}</nav>
            <Show when=move || session.get().is_authenticated()>
                <div class="header__session">
                    {move || identity().map(|name| view! {
                        <span class="header__identity">{name}</span>
                    })}
                    <button class="header__link" on:click=on_logout>"Logout"</button>
                </div>
            </Show>
        </header>
    }
}
