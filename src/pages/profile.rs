//! Profile page: account information for the signed-in user.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::format;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="profile-page">
            {move || {
                session.get().user.map_or_else(
                    || {
                        view! {
                            <p class="profile-page__hint">"Please login to view your profile"</p>
                        }
                        .into_any()
                    },
                    |user| {
                        view! {
                            <div class="profile-card">
                                <div class="profile-card__banner">
                                    <h1 class="profile-card__name">
                                        {user.display_name().to_owned()}
                                    </h1>
                                    <p class="profile-card__handle">
                                        {format!("@{}", user.username)}
                                    </p>
                                </div>
                                <div class="profile-card__body">
                                    <h2 class="profile-card__heading">"Account Information"</h2>
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Email"</span>
                                        <span class="profile-card__value">{user.email.clone()}</span>
                                    </div>
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Username"</span>
                                        <span class="profile-card__value">
                                            {user.username.clone()}
                                        </span>
                                    </div>
                                    {user.full_name.as_ref().map(|name| {
                                        view! {
                                            <div class="profile-card__row">
                                                <span class="profile-card__label">"Full Name"</span>
                                                <span class="profile-card__value">{name.clone()}</span>
                                            </div>
                                        }
                                    })}
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Role"</span>
                                        <span class="tag tag--kind">{user.role.clone()}</span>
                                    </div>
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Member Since"</span>
                                        <span class="profile-card__value">
                                            {format::member_since(&user.created_at)}
                                        </span>
                                    </div>
                                    <div class="profile-card__row">
                                        <span class="profile-card__label">"Status"</span>
                                        <span class="profile-card__value" class:profile-card__value--inactive=!user.is_active>
                                            {if user.is_active { "Active" } else { "Inactive" }}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        }
                        .into_any()
                    },
                )
            }}
        </div>
    }
}
