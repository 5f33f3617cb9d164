use shared::{format_date, format_money, EnrollmentStatus, StudentStatusResponse};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::status_badge::{fees_status_badge, payment_status_badge};
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[function_component(StudentDashboard)]
pub fn student_dashboard() -> Html {
    let auth = use_auth();

    let status = use_state(|| None::<StudentStatusResponse>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    use_effect_with((), {
        let token = auth.token.clone();
        let status = status.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        move |_| {
            let api_client = ApiClient::new().with_token(token);

            spawn_local(async move {
                loading.set(true);

                match api_client.student_status().await {
                    Ok(response) => status.set(Some(response)),
                    Err(e) => {
                        Logger::error_with_component("student-dashboard", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });

            || ()
        }
    });

    if *loading {
        return html! { <div class="loading">{"Loading your account..."}</div> };
    }

    if let Some(error) = (*error_message).clone() {
        return html! { <div class="form-message error">{error}</div> };
    }

    let Some(status) = (*status).clone() else {
        return html! {};
    };

    let active_enrollments: Vec<_> = status
        .enrollments
        .iter()
        .filter(|e| e.status == EnrollmentStatus::Active)
        .cloned()
        .collect();
    let total_credits: u32 = active_enrollments.iter().map(|e| e.credits).sum();

    html! {
        <div class="page">
            <h1>{format!("Welcome, {}", status.student.name)}</h1>

            {if status.student.blocked {
                html! {
                    <div class="form-message warning">
                        {"Your account is blocked for course registration. Contact the finance office to resolve outstanding dues."}
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-label">{"Outstanding dues"}</span>
                    <span class="stat-value">{format_money(status.student.dues_balance)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Fees status"}</span>
                    <span class="stat-value">{fees_status_badge(status.student.fees_status)}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-label">{"Enrolled credits"}</span>
                    <span class="stat-value">{total_credits}</span>
                </div>
            </div>

            <section class="page-section">
                <div class="section-header">
                    <h2>{"Current enrollments"}</h2>
                    <Link<Route> to={Route::CourseRegistration} classes="btn btn-secondary">
                        {"Manage courses"}
                    </Link<Route>>
                </div>

                {if active_enrollments.is_empty() {
                    html! { <div class="empty-state">{"No active enrollments yet."}</div> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Course"}</th>
                                    <th>{"Credits"}</th>
                                    <th>{"Fee"}</th>
                                    <th>{"Enrolled"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for active_enrollments.iter().map(|enrollment| {
                                    html! {
                                        <tr>
                                            <td>{format!("{} - {}", enrollment.course_code, enrollment.course_name)}</td>
                                            <td>{enrollment.credits}</td>
                                            <td>{format_money(enrollment.fee)}</td>
                                            <td>{format_date(&enrollment.enrolled_at)}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            <section class="page-section">
                <div class="section-header">
                    <h2>{"Recent payments"}</h2>
                    <Link<Route> to={Route::MakePayment} classes="btn btn-primary">
                        {"Make a payment"}
                    </Link<Route>>
                </div>

                {if status.recent_payments.is_empty() {
                    html! { <div class="empty-state">{"No payments recorded yet."}</div> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Method"}</th>
                                    <th>{"Reference"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for status.recent_payments.iter().map(|payment| {
                                    html! {
                                        <tr>
                                            <td>{format_date(&payment.paid_at)}</td>
                                            <td>{format_money(payment.amount)}</td>
                                            <td>{payment.method.label()}</td>
                                            <td class="mono">{&payment.reference}</td>
                                            <td>{payment_status_badge(payment.status)}</td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>
        </div>
    }
}
