use yew::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use plotly::{Bar, Layout};
use plotly::common::{Marker, Title};
use plotly::layout::{Axis, Margin};
use storefront_common::{MONTHLY_SALES, SALES_BAR_COLOR};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_ID: &str = "chart-monthly-sales";
const CHART_HEIGHT: usize = 300;

fn sales_trace() -> Box<Bar<&'static str, u32>> {
    let months: Vec<&'static str> = MONTHLY_SALES.iter().map(|m| m.month).collect();
    let sales: Vec<u32> = MONTHLY_SALES.iter().map(|m| m.sales).collect();

    Bar::new(months, sales)
        .name("Sales")
        .marker(Marker::new().color(SALES_BAR_COLOR))
}

fn sales_layout() -> Layout {
    Layout::new()
        .height(CHART_HEIGHT)
        .margin(Margin::new().top(10).right(10).left(50).bottom(30))
        .x_axis(Axis::new().title(Title::with_text("Month")))
        .y_axis(Axis::new().title(Title::with_text("Sales")))
}

/// Serialized `(data, layout, config)` arguments for `Plotly.newPlot`
fn plot_arguments() -> Result<(String, String, String), serde_json::Error> {
    let data = serde_json::to_string(&vec![sales_trace()])?;
    let layout = serde_json::to_string(&sales_layout())?;
    let config = serde_json::json!({"responsive": true, "displayModeBar": false}).to_string();
    Ok((data, layout, config))
}

fn draw(div_id: &str) -> Result<(), String> {
    let (data, layout, config) =
        plot_arguments().map_err(|e| format!("Failed to serialize chart: {}", e))?;
    let parse = |json: &str| {
        js_sys::JSON::parse(json).map_err(|e| format!("Failed to build chart arguments: {:?}", e))
    };
    newPlot(div_id, parse(&data)?, parse(&layout)?, parse(&config)?);
    Ok(())
}

#[function_component(MonthlySalesChart)]
pub fn monthly_sales_chart() -> Html {
    let chart_ref = use_node_ref();

    use_effect_with(chart_ref.clone(), move |chart_ref| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let div_id = element.id();
            if !div_id.is_empty() {
                log::trace!("Drawing monthly sales chart into #{}", div_id);
                if let Err(e) = draw(&div_id) {
                    log::error!("{}", e);
                }
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id={CHART_ID} class="chart-container" style={format!("height: {}px;", CHART_HEIGHT)}></div>
    }
}
