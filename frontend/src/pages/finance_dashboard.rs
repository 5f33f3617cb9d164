use shared::{format_money, FacultyBreakdown, FinanceSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[function_component(FinanceDashboard)]
pub fn finance_dashboard() -> Html {
    let auth = use_auth();

    let summary = use_state(|| None::<FinanceSummary>);
    let faculties = use_state(Vec::<FacultyBreakdown>::new);
    let summary_error = use_state(|| None::<String>);
    let faculty_error = use_state(|| None::<String>);

    // Two independent fetches; neither waits on the other.
    use_effect_with((), {
        let token = auth.token.clone();
        let summary = summary.clone();
        let faculties = faculties.clone();
        let summary_error = summary_error.clone();
        let faculty_error = faculty_error.clone();

        move |_| {
            let api_client = ApiClient::new().with_token(token);

            {
                let api_client = api_client.clone();
                let summary = summary.clone();
                let summary_error = summary_error.clone();
                spawn_local(async move {
                    match api_client.finance_summary().await {
                        Ok(response) => summary.set(Some(response)),
                        Err(e) => {
                            Logger::error_with_component("finance-dashboard", &e.to_string());
                            summary_error.set(Some(e.to_string()));
                        }
                    }
                });
            }

            {
                let faculties = faculties.clone();
                let faculty_error = faculty_error.clone();
                spawn_local(async move {
                    match api_client.faculty_breakdown().await {
                        Ok(response) => faculties.set(response),
                        Err(e) => {
                            Logger::error_with_component("finance-dashboard", &e.to_string());
                            faculty_error.set(Some(e.to_string()));
                        }
                    }
                });
            }

            || ()
        }
    });

    html! {
        <div class="page">
            <h1>{"Finance Dashboard"}</h1>

            {if let Some(error) = (*summary_error).clone() {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            {match summary.as_ref() {
                Some(summary) => html! {
                    <div class="stat-cards">
                        <div class="stat-card">
                            <span class="stat-label">{"Students"}</span>
                            <span class="stat-value">{summary.total_students}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-label">{"Payments collected"}</span>
                            <span class="stat-value">{format_money(summary.total_payments)}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-label">{"Outstanding"}</span>
                            <span class="stat-value">{format_money(summary.total_outstanding)}</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-label">{"Paid / Partial / Unpaid"}</span>
                            <span class="stat-value">
                                {format!(
                                    "{} / {} / {}",
                                    summary.paid_students,
                                    summary.partial_students,
                                    summary.unpaid_students
                                )}
                            </span>
                        </div>
                    </div>
                },
                None => html! { <div class="loading">{"Loading summary..."}</div> },
            }}

            <section class="page-section">
                <h2>{"By faculty"}</h2>

                {if let Some(error) = (*faculty_error).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else if faculties.is_empty() {
                    html! { <div class="loading">{"Loading faculty breakdown..."}</div> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Faculty"}</th>
                                    <th>{"Students"}</th>
                                    <th>{"Outstanding"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for faculties.iter().map(|row| {
                                    html! {
                                        <tr>
                                            <td>{&row.faculty}</td>
                                            <td>{row.student_count}</td>
                                            <td>{format_money(row.outstanding)}</td>
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
