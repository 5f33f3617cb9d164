use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::context::AuthAction;
use crate::hooks::use_auth;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Finance staff shell, same structure as the student layout with the
/// staff navigation set.
#[function_component(FinanceLayout)]
pub fn finance_layout(props: &LayoutProps) -> Html {
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
            <aside class="sidebar sidebar-finance">
                <div class="sidebar-brand">{"Bursar Portal"}</div>
                <div class="sidebar-subtitle">{"Finance Department"}</div>
                <nav class="sidebar-nav">
                    {item(Route::FinanceDashboard, "Dashboard")}
                    {item(Route::StudentList, "Students")}
                    {item(Route::UnpaidStudents, "Unpaid Students")}
                    {item(Route::FeeCalculation, "Fee Setup")}
                    {item(Route::BankReconciliation, "Bank Reconciliation")}
                    {item(Route::Reports, "Reports")}
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
