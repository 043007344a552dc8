use yew::prelude::*;
use chrono::{DateTime, Utc};
use storefront_common::{Purchase, StatusFilter};
use crate::common::fetch_hook::use_purchase_feed;
use crate::common::fetch_render::FetchRenderList;
use crate::hooks::FetchState;
use crate::settings;
use super::purchase_card::PurchaseCard;
use super::status_filter::StatusFilterBar;

#[function_component(PurchaseHistory)]
pub fn purchase_history() -> Html {
    let filter = use_state(StatusFilter::default);
    let (state, retry) = use_purchase_feed(*filter);

    log::trace!("PurchaseHistory rendering: filter={}, loading={}", filter.label(), state.is_loading());

    let on_select = {
        let filter = filter.clone();
        Callback::from(move |next: StatusFilter| {
            if *filter != next {
                log::debug!("Purchase filter changed to {}", next.label());
                filter.set(next);
            }
        })
    };

    html! {
        <div class="mx-auto p-4 space-y-4">
            <StatusFilterBar selected={*filter} {on_select} />
            <PurchaseResults {state} on_retry={Some(retry)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PurchaseResultsProps {
    pub state: FetchState<Vec<Purchase>>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    /// Fixed clock for relative dates; the current time when unset
    #[prop_or_default]
    pub now: Option<DateTime<Utc>>,
}

#[function_component(PurchaseResults)]
pub fn purchase_results(props: &PurchaseResultsProps) -> Html {
    let currency = AttrValue::from(settings::get_settings().currency_code);
    let now = props.now.unwrap_or_else(Utc::now);

    let render_item = Callback::from(move |purchase: Purchase| {
        let key = purchase.id;
        html! {
            <PurchaseCard key={key} {purchase} currency={currency.clone()} {now} />
        }
    });

    html! {
        <div class="space-y-4">
            <FetchRenderList<Purchase>
                state={props.state.clone()}
                {render_item}
                on_retry={props.on_retry.clone()}
                loading_text={Some("Loading...".to_string())}
                error_title={Some(AttrValue::Static("Couldn't load your purchases"))}
                empty_message={Some("No purchases found.".to_string())}
                container_class={Some("space-y-4".to_string())}
            />
        </div>
    }
}
