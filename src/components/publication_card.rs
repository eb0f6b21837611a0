//! Catalog card for a single publication.

use leptos::prelude::*;

use crate::net::types::PublicationRecord;
use crate::util::format;

/// Compact card shown in the catalog grid; clicking opens the detail modal.
#[component]
pub fn PublicationCard(
    publication: PublicationRecord,
    on_select: Callback<PublicationRecord>,
) -> impl IntoView {
    let selected = publication.clone();
    let monthly = format::price(publication.price_monthly);

    view! {
        <div class="publication-card" on:click=move |_| on_select.run(selected.clone())>
            <div class="publication-card__cover">
                {publication.cover_image_url.as_ref().map_or_else(
                    || view! { <div class="publication-card__cover-placeholder"></div> }.into_any(),
                    |url| {
                        view! {
                            <img
                                class="publication-card__cover-image"
                                src=url.clone()
                                alt=publication.title.clone()
                            />
                        }
                        .into_any()
                    },
                )}
            </div>
            <div class="publication-card__body">
                <span class="tag tag--kind">{publication.kind.clone()}</span>
                {(!publication.is_available)
                    .then(|| view! { <span class="tag tag--unavailable">"Unavailable"</span> })}
                <h3 class="publication-card__title">{publication.title.clone()}</h3>
                {publication
                    .publisher
                    .as_ref()
                    .map(|p| view! { <p class="publication-card__publisher">{p.clone()}</p> })}
                <p class="publication-card__price">{monthly} "/month"</p>
            </div>
        </div>
    }
}
