use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::use_auth;

#[function_component(Home)]
pub fn home() -> Html {
    let auth = use_auth();

    let cta = match auth.user.as_ref() {
        Some(user) if auth.is_finance() => html! {
            <Link<Route> to={Route::FinanceDashboard} classes="btn btn-primary">
                {format!("Continue as {}", user.username)}
            </Link<Route>>
        },
        Some(user) => html! {
            <Link<Route> to={Route::StudentDashboard} classes="btn btn-primary">
                {format!("Continue as {}", user.username)}
            </Link<Route>>
        },
        None => html! {
            <Link<Route> to={Route::Login} classes="btn btn-primary">{"Sign in"}</Link<Route>>
        },
    };

    html! {
        <div class="page-centered">
            <div class="hero">
                <h1>{"Bursar Portal"}</h1>
                <p class="hero-subtitle">
                    {"Course registration, fee payment, and finance administration for the university."}
                </p>
                {cta}
            </div>
        </div>
    }
}
