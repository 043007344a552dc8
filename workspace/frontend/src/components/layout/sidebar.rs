use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="main-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-store"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"Storefront"}</span>
                    </div>
                </li>

                <li class="menu-title">{"Shop"}</li>
                <li><Link<Route> to={Route::Purchases} classes="nav-link"><i class="fas fa-shopping-bag w-5"></i> {"My Purchases"}</Link<Route>></li>

                <div class="divider"></div>

                <li class="menu-title">{"Admin"}</li>
                <li><Link<Route> to={Route::AdminDashboard} classes="nav-link"><i class="fas fa-chart-bar w-5"></i> {"Dashboard"}</Link<Route>></li>
            </ul>
        </div>
    }
}
