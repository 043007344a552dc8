use yew::prelude::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use storefront_common::{FetchTicket, Purchase, PurchaseFeed, StatusFilter};
use crate::api_client::purchase::get_purchases;
use crate::hooks::FetchState;

/// Runs `fetch_fn` on mount and whenever the returned callback is emitted.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let fetch_fn = fetch_fn.clone();

            fetch_state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                match fut.await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => {
                        log::warn!("Fetch failed: {}", err);
                        fetch_state.set(FetchState::Error(err));
                    }
                }
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}

/// Purchase history for `filter`, refetched whenever the filter changes.
///
/// Responses are matched against the ticket they were issued for; only the
/// latest request may update the view. The returned callback retries the
/// current filter.
#[hook]
pub fn use_purchase_feed(filter: StatusFilter) -> (FetchState<Vec<Purchase>>, Callback<()>) {
    let feed = use_mut_ref(PurchaseFeed::new);
    let redraw = use_force_update();

    {
        let feed = feed.clone();
        let redraw = redraw.clone();
        use_effect_with(filter, move |filter| {
            let ticket = feed.borrow_mut().select_filter(*filter);
            spawn_purchase_fetch(feed, redraw, ticket);
            || ()
        });
    }

    let retry = {
        let feed = feed.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            log::debug!("Retrying purchase fetch");
            let ticket = feed.borrow_mut().reload();
            spawn_purchase_fetch(feed.clone(), redraw.clone(), ticket);
        })
    };

    let state = FetchState::from(feed.borrow().state());
    (state, retry)
}

fn spawn_purchase_fetch(
    feed: Rc<RefCell<PurchaseFeed>>,
    redraw: UseForceUpdateHandle,
    ticket: FetchTicket,
) {
    // Show the loading state before the request goes out
    redraw.force_update();

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = get_purchases(&ticket.query()).await;
        if feed.borrow_mut().resolve(ticket, outcome) {
            redraw.force_update();
        }
    });
}
