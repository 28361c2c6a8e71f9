//! Item Card Component
//!
//! Read-only rendering of a wish item; actions are passed as children.

use leptos::prelude::*;

use crate::models::Item;

#[component]
pub fn ItemCard(item: Item, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let price = item.price_label();
    let link = item.link.clone().filter(|l| !l.is_empty()).map(|link| {
        let href = if link.starts_with("http") { link.clone() } else { format!("https://{}", link) };
        view! { <a class="item-link" href=href target="_blank" rel="noopener noreferrer">{link}</a> }
    });

    view! {
        <div class="item-card">
            {item.image_url.clone().map(|src| view! { <img class="item-image" src=src alt="" /> })}
            <div class="item-body">
                <span class="item-title">{item.title.clone()}</span>
                {price.map(|p| view! { <span class="item-price">{p}</span> })}
                {link}
                {item.description.clone().map(|d| view! { <p class="item-description">{d}</p> })}
                {item.note.clone().map(|n| view! { <p class="item-note">{n}</p> })}
            </div>
            <div class="item-actions">{children.map(|c| c())}</div>
        </div>
    }
}
