use yew::prelude::*;
use storefront_common::StatusFilter;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: StatusFilter,
    pub on_select: Callback<StatusFilter>,
}

#[function_component(StatusFilterBar)]
pub fn status_filter_bar(props: &Props) -> Html {
    html! {
        <div class="flex gap-4 bg-base-100 p-4 rounded-md shadow-sm mb-4 overflow-auto" role="toolbar">
            { for StatusFilter::OPTIONS.iter().map(|&filter| {
                let is_active = filter == props.selected;
                let variant = if is_active { "btn-primary" } else { "btn-outline" };
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(filter))
                };

                html! {
                    <button
                        key={filter.label()}
                        class={classes!("btn", "btn-sm", variant)}
                        aria-pressed={is_active.to_string()}
                        {onclick}
                    >
                        {filter.label()}
                    </button>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_common::PurchaseStatus;
    use yew::ServerRenderer;

    async fn render(selected: StatusFilter) -> String {
        ServerRenderer::<StatusFilterBar>::with_props(move || Props {
            selected,
            on_select: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_renders_every_filter_in_order() {
        let html = render(StatusFilter::All).await;
        let positions: Vec<usize> = ["All", "Ready to Pickup", "Completed", "Canceled", "Return &amp; Refund"]
            .iter()
            .map(|label| html.find(label).expect("filter label rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(html.matches("<button").count(), 5);
    }

    #[tokio::test]
    async fn test_only_selected_filter_is_pressed() {
        let html = render(StatusFilter::Only(PurchaseStatus::Canceled)).await;
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert_eq!(html.matches("btn-primary").count(), 1);

        let pressed = html.find("aria-pressed=\"true\"").unwrap();
        let label = html[pressed..].find("Canceled").unwrap();
        let next_button = html[pressed..].find("</button>").unwrap();
        assert!(label < next_button);
    }
}
