use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::context::AuthAction;
use crate::hooks::use_auth;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Student-facing shell: sidebar navigation with active-route highlighting
/// and sign-out.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &LayoutProps) -> Html {
    let auth = use_auth();
    let route = use_route::<Route>();
    let navigator = use_navigator().expect("layout rendered under BrowserRouter");

    let username = auth
        .user
        .as_ref()
        .map(|u| u.username.clone())
        .unwrap_or_default();

    let sign_out = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            auth.dispatch(AuthAction::LoggedOut);
            navigator.push(&Route::Login);
        })
    };

    let item = |target: Route, label: &str| -> Html {
        let classes = if route.as_ref() == Some(&target) {
            classes!("nav-item", "active")
        } else {
            classes!("nav-item")
        };
        html! { <Link<Route> to={target} {classes}>{label}</Link<Route>> }
    };

    html! {
        <div class="portal-shell">
            <aside class="sidebar">
                <div class="sidebar-brand">{"Bursar Portal"}</div>
                <nav class="sidebar-nav">
                    {item(Route::StudentDashboard, "Dashboard")}
                    {item(Route::CourseRegistration, "Course Registration")}
                    {item(Route::MakePayment, "Make a Payment")}
                    {item(Route::PaymentHistory, "Payment History")}
                </nav>
                <div class="sidebar-footer">
                    <span class="sidebar-user">{username}</span>
                    <button class="btn btn-secondary" onclick={sign_out}>{"Sign out"}</button>
                </div>
            </aside>
            <main class="content">{props.children.clone()}</main>
        </div>
    }
}
