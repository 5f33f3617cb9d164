use shared::{format_date, format_money, Payment};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::status_badge::payment_status_badge;
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::download;
use crate::services::logging::Logger;

#[function_component(PaymentHistory)]
pub fn payment_history() -> Html {
    let auth = use_auth();

    let payments = use_state(Vec::<Payment>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);

    use_effect_with((), {
        let token = auth.token.clone();
        let payments = payments.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        move |_| {
            let api_client = ApiClient::new().with_token(token);

            spawn_local(async move {
                loading.set(true);

                match api_client.payment_history().await {
                    Ok(response) => payments.set(response.payments),
                    Err(e) => {
                        Logger::error_with_component("payment-history", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });

            || ()
        }
    });

    // Serialize the visible rows in-browser; no backend round trip.
    let export_csv = {
        let payments = payments.clone();
        Callback::from(move |_: MouseEvent| {
            let rows: Vec<Vec<String>> = payments
                .iter()
                .map(|p| {
                    vec![
                        p.paid_at.clone(),
                        format!("{:.2}", p.amount),
                        p.method.label().to_string(),
                        p.reference.clone(),
                        p.status.label().to_string(),
                    ]
                })
                .collect();

            if let Err(e) = download::download_csv(
                "payment-history.csv",
                &["date", "amount", "method", "reference", "status"],
                &rows,
            ) {
                Logger::error_with_component("payment-history", &format!("export failed: {}", e));
            }
        })
    };

    if *loading {
        return html! { <div class="loading">{"Loading payment history..."}</div> };
    }

    if let Some(error) = (*error_message).clone() {
        return html! { <div class="form-message error">{error}</div> };
    }

    html! {
        <div class="page">
            <div class="section-header">
                <h1>{"Payment History"}</h1>
                <button class="btn btn-secondary" onclick={export_csv} disabled={payments.is_empty()}>
                    {"Export CSV"}
                </button>
            </div>

            {if payments.is_empty() {
                html! {
                    <div class="empty-state">
                        <p>{"No payments yet."}</p>
                        <Link<Route> to={Route::MakePayment} classes="btn btn-primary">
                            {"Make your first payment"}
                        </Link<Route>>
                    </div>
                }
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
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for payments.iter().map(|payment| {
                                html! {
                                    <tr>
                                        <td>{format_date(&payment.paid_at)}</td>
                                        <td>{format_money(payment.amount)}</td>
                                        <td>{payment.method.label()}</td>
                                        <td class="mono">{&payment.reference}</td>
                                        <td>{payment_status_badge(payment.status)}</td>
                                        <td>
                                            <Link<Route>
                                                to={Route::PaymentReceipt { id: payment.id }}
                                                classes="btn btn-secondary btn-small"
                                            >
                                                {"Receipt"}
                                            </Link<Route>>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}
        </div>
    }
}
