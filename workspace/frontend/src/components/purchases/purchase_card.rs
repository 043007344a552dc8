use yew::prelude::*;
use chrono::{DateTime, Utc};
use storefront_common::{absolute_date, format_price, relative_time, sentence_case, LineItem, Purchase};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub purchase: Purchase,
    /// ISO 4217 code for every amount on the card
    pub currency: AttrValue,
    /// Reference point for the relative order date
    pub now: DateTime<Utc>,
}

#[function_component(PurchaseCard)]
pub fn purchase_card(props: &Props) -> Html {
    let purchase = &props.purchase;

    let (relative, absolute) = match purchase.order_date {
        Some(ts) => (relative_time(ts, props.now), absolute_date(ts)),
        None => (String::new(), String::new()),
    };

    html! {
        <div class="card bg-base-100 shadow-sm rounded-sm" data-testid="purchase-card">
            <div class="card-body">
                <div class="flex flex-row justify-between items-start gap-4 border-b border-base-300 pb-2">
                    <h2 class="card-title text-lg font-semibold">{purchase.title()}</h2>
                    <p class="text-sm text-gray-600 whitespace-nowrap" title={absolute}>{relative}</p>
                </div>
                <p class="text-sm text-gray-600">
                    {"Status: "}
                    <span class="font-medium">{sentence_case(&purchase.status)}</span>
                </p>
                <p class="text-sm text-gray-600">
                    {"Amount: "}
                    <span class="font-medium">{format_price(purchase.total_amount, &props.currency)}</span>
                </p>

                if !purchase.line_items.is_empty() {
                    <div class="mt-4">
                        <div class="font-semibold mb-2">{"Items:"}</div>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                            { for purchase.line_items.iter().map(|item| render_line_item(item, &props.currency)) }
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}

fn render_line_item(item: &LineItem, currency: &str) -> Html {
    let image = match &item.image_url {
        Some(url) => html! {
            <img
                width="48"
                height="48"
                src={url.clone()}
                alt={item.name.clone()}
                class="w-12 h-12 object-cover rounded shadow"
            />
        },
        None => html! {
            <div class="w-12 h-12 bg-base-300 rounded flex items-center justify-center text-gray-400" data-testid="image-placeholder">
                {"N/A"}
            </div>
        },
    };

    html! {
        <div key={item.id} class="flex items-center gap-4 bg-base-200 rounded p-2 border" data-testid="line-item">
            {image}
            <div class="flex-1">
                <div class="font-medium text-base">{&item.name}</div>
                <div class="text-xs text-gray-500">
                    {"Qty: "}
                    <span class="font-semibold">{item.quantity}</span>
                    {" · "}
                    <span>{format_price(item.price, currency)}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use storefront_common::parse_order_date;
    use yew::ServerRenderer;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 4, 9, 0, 0).unwrap()
    }

    fn item(id: i64, name: &str, image_url: Option<&str>) -> LineItem {
        LineItem {
            id,
            name: name.to_string(),
            image_url: image_url.map(str::to_string),
            quantity: 1,
            price: Decimal::new(1250, 2),
        }
    }

    fn purchase(line_items: Vec<LineItem>, order_date: Option<&str>) -> Purchase {
        Purchase {
            id: 10,
            name: "Order #10".to_string(),
            status: "ready_to_pickup".to_string(),
            total_amount: Decimal::new(2500, 2),
            order_date: order_date.and_then(parse_order_date),
            line_items,
        }
    }

    async fn render(purchase: Purchase) -> String {
        ServerRenderer::<PurchaseCard>::with_props(move || Props {
            purchase,
            currency: AttrValue::Static("PHP"),
            now: now(),
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn test_title_status_amount_and_dates() {
        let html = render(purchase(vec![item(1, "Bowl", None), item(2, "Spoon", None)], Some("2024-01-01"))).await;

        assert!(html.contains(">Bowl</h2>"));
        assert!(html.contains("Ready to pickup"));
        assert!(html.contains("₱25.00"));
        assert!(html.contains(">3 days ago</p>"));
        assert!(html.contains("title=\"Mon Jan 01 2024\""));
        assert_eq!(html.matches("data-testid=\"line-item\"").count(), 2);
    }

    #[tokio::test]
    async fn test_missing_image_renders_placeholder() {
        let html = render(purchase(vec![item(1, "Bowl", None)], None)).await;
        assert!(html.contains("N/A"));
        assert!(!html.contains("<img"));
    }

    #[tokio::test]
    async fn test_image_rendered_when_present() {
        let html = render(purchase(vec![item(1, "Bowl", Some("/images/bowl.png"))], None)).await;
        assert!(html.contains("src=\"/images/bowl.png\""));
        assert!(html.contains("alt=\"Bowl\""));
        assert!(!html.contains("image-placeholder"));
    }

    #[tokio::test]
    async fn test_no_line_items_blank_title_and_no_grid() {
        let html = render(purchase(vec![], None)).await;
        assert!(html.contains("font-semibold\"></h2>"));
        assert!(!html.contains("Items:"));
        assert!(!html.contains("data-testid=\"line-item\""));
    }
}
