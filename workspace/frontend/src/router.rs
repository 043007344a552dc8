use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthProvider;
use crate::components::dashboard::AdminDashboard;
use crate::components::layout::layout::Layout;
use crate::components::purchases::PurchaseHistory;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/purchases")]
    Purchases,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Purchases => {
            log::trace!("Rendering Purchases page");
            html! { <Layout title="My Purchases"><PurchaseHistory /></Layout> }
        }
        Route::AdminDashboard => {
            log::trace!("Rendering Admin Dashboard page");
            // The dashboard brings its own layout once the session check passes
            html! { <AuthProvider><AdminDashboard /></AuthProvider> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/purchases"), Some(Route::Purchases));
        assert_eq!(Route::recognize("/admin/dashboard"), Some(Route::AdminDashboard));
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::AdminDashboard.to_path(), "/admin/dashboard");
        assert_eq!(Route::Purchases.to_path(), "/purchases");
    }
}
