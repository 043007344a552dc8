use yew::prelude::*;
use storefront_common::AuthGate;
use crate::auth::use_auth;
use crate::common::loading::LoadingSpinner;
use crate::components::layout::layout::Layout;
use super::chart::MonthlySalesChart;
use super::stats::SummaryCards;

/// Admin console landing page. Renders only a spinner while the session check
/// runs and nothing at all for signed-out visitors.
#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let auth = use_auth();

    match auth.gate() {
        AuthGate::Checking => {
            log::trace!("Admin dashboard waiting for session check");
            html! { <LoadingSpinner fullscreen=true /> }
        }
        AuthGate::Denied => {
            log::debug!("Admin dashboard hidden: no session");
            html! {}
        }
        AuthGate::Granted(user) => {
            log::trace!("Rendering admin dashboard for {}", user.email);
            html! {
                <Layout title="Admin Dashboard" user={Some(AttrValue::from(user.display_name().to_string()))}>
                    <DashboardContent />
                </Layout>
            }
        }
    }
}

#[function_component(DashboardContent)]
pub fn dashboard_content() -> Html {
    html! {
        <div class="flex-1 mx-auto">
            <h1 class="text-3xl font-bold mb-8">{"Admin Dashboard"}</h1>
            <SummaryCards />
            <div class="card bg-base-100 shadow mb-8">
                <div class="card-body">
                    <h2 class="card-title text-xl">{"Monthly Sales"}</h2>
                    <MonthlySalesChart />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_common::{AuthState, AuthUser};
    use yew::ServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        auth: AuthState,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ContextProvider<AuthState> context={props.auth.clone()}>
                <AdminDashboard />
            </ContextProvider<AuthState>>
        }
    }

    async fn render_with(auth: AuthState) -> String {
        ServerRenderer::<Harness>::with_props(move || HarnessProps { auth })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn test_loading_renders_only_spinner() {
        let html = render_with(AuthState::checking()).await;
        assert!(html.contains("data-testid=\"spinner\""));
        assert!(html.contains("h-screen"));
        assert!(!html.contains("Admin Dashboard"));
        assert!(!html.contains("metric-card"));
    }

    #[tokio::test]
    async fn test_signed_out_renders_nothing() {
        let html = render_with(AuthState::signed_out()).await;
        assert!(html.trim().is_empty(), "expected no output, got {}", html);
    }

    #[tokio::test]
    async fn test_loading_wins_even_with_user() {
        let auth = AuthState {
            user: Some(AuthUser {
                id: "u-1".to_string(),
                email: "admin@example.com".to_string(),
                name: None,
            }),
            loading: true,
        };
        let html = render_with(auth).await;
        assert!(html.contains("data-testid=\"spinner\""));
        assert!(!html.contains("metric-card"));
    }

    #[tokio::test]
    async fn test_content_renders_metrics_and_chart() {
        let html = ServerRenderer::<DashboardContent>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(html.contains("Admin Dashboard"));
        assert_eq!(html.matches("data-testid=\"metric-card\"").count(), 4);
        for value in ["₱120,000", "1,245", "320", "540"] {
            assert!(html.contains(value), "missing metric {}", value);
        }
        assert!(html.contains("Monthly Sales"));
        assert!(html.contains("id=\"chart-monthly-sales\""));
        assert!(html.contains("height: 300px;"));
    }
}
