//! Friend Wishlist Component
//!
//! A friend's events and their items, with booking.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ItemCard;
use crate::context::use_app_context;
use crate::messages;
use crate::models::{Event, Friend, Item};
use crate::screen::{ListState, LoadPhase};
use crate::store::View;

/// Booked items cannot be booked again, and only one booking runs at a time
fn book_disabled(item: &Item, in_flight: Option<u32>) -> bool {
    item.is_booked() || in_flight.is_some()
}

/// Book control for one item; disabled once the item is booked
#[component]
fn BookButton(item: Item, booking: RwSignal<Option<u32>>) -> impl IntoView {
    let ctx = use_app_context();
    let item_id = item.id;
    let label = if item.is_booked() { "Booked" } else { "Book" };

    let book = move |_: web_sys::MouseEvent| {
        if booking.get_untracked().is_some() {
            return;
        }
        booking.set(Some(item_id));
        let api = ctx.api();
        spawn_local(async move {
            match api::items::book_item(&api, item_id).await {
                // the local booked flag is left as is until the next load
                Ok(receipt) => {
                    log::info!("[Friends] booked item {} (booking {})", item_id, receipt.id);
                    ctx.success(messages::GIFT_BOOKED);
                }
                Err(e) => ctx.report_failure(&e, messages::BOOK_FAILED),
            }
            booking.try_set(None);
        });
    };

    view! {
        <button
            class="book-btn"
            disabled=move || book_disabled(&item, booking.get())
            on:click=book
        >
            {label}
        </button>
    }
}

#[component]
pub fn FriendWishlist(friend: Friend) -> impl IntoView {
    let ctx = use_app_context();
    let friend_id = friend.id;
    let state = RwSignal::new(ListState::<Event>::new());
    let booking = RwSignal::new(None::<u32>);

    // Load on mount
    Effect::new(move |_| {
        state.update(|s| s.begin_load());
        let api = ctx.api();
        spawn_local(async move {
            let result = api::users::user_events(&api, friend_id).await.map_err(|e| {
                log::error!("[Friends] wishlist {} failed: {}", friend_id, e);
                e.user_message(messages::FETCH_EVENTS_FAILED)
            });
            state.try_update(|s| s.finish_load(result));
        });
    });

    let events_view = move || match state.with(|s| s.phase().clone()) {
        LoadPhase::Idle | LoadPhase::Loading => {
            view! { <p class="status">{messages::LOADING}</p> }.into_any()
        }
        LoadPhase::Failed(message) => view! { <p class="status error">{message}</p> }.into_any(),
        LoadPhase::Loaded => {
            let events = state.with(|s| s.entries().to_vec());
            if events.is_empty() {
                return view! { <p class="empty">{messages::NO_PUBLIC_WISHLISTS}</p> }.into_any();
            }
            events.into_iter().map(|event| view! {
                <div class="friend-event">
                    <h3>{event.title}</h3>
                    <ul class="item-list">
                        {event.items.into_iter().map(|item| view! {
                            <li>
                                <ItemCard item=item.clone()>
                                    <BookButton item=item booking=booking />
                                </ItemCard>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            }).collect_view().into_any()
        }
    };

    view! {
        <section class="screen friend-wishlist">
            <button class="back-btn" on:click=move |_| ctx.navigate(View::Friends)>"Back to friends"</button>
            <h2>{format!("{}'s wishlist", friend.name)}</h2>
            {events_view}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, is_booked: Option<bool>) -> Item {
        Item {
            id,
            title: format!("Item {}", id),
            description: None,
            image_url: None,
            link: None,
            price: None,
            note: None,
            category_id: None,
            user_id: Some(2),
            is_booked,
        }
    }

    #[test]
    fn test_booked_item_is_disabled() {
        assert!(book_disabled(&make_item(1, Some(true)), None));
    }

    #[test]
    fn test_unbooked_item_is_enabled() {
        assert!(!book_disabled(&make_item(1, Some(false)), None));
        // missing flag reads as not booked
        assert!(!book_disabled(&make_item(1, None), None));
    }

    #[test]
    fn test_disabled_while_any_booking_runs() {
        assert!(book_disabled(&make_item(1, None), Some(1)));
        assert!(book_disabled(&make_item(1, Some(false)), Some(7)));
    }
}
