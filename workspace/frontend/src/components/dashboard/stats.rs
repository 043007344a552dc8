use yew::prelude::*;
use storefront_common::SUMMARY_METRICS;

#[function_component(SummaryCards)]
pub fn summary_cards() -> Html {
    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
            { for SUMMARY_METRICS.iter().map(|metric| html! {
                <div key={metric.title} class="stats shadow bg-base-100" data-testid="metric-card">
                    <div class="stat">
                        <div class="stat-figure text-primary">
                            <i class={classes!(metric.icon, "text-2xl")}></i>
                        </div>
                        <div class="stat-title">{metric.title}</div>
                        <div class="stat-value text-2xl">{metric.value}</div>
                    </div>
                </div>
            })}
        </div>
    }
}
