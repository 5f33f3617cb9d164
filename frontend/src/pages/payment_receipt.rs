use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use shared::{format_date, format_money, Payment, PaymentMethod, PaymentStatus};
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

/// LocalStorage key carrying the response of the payment just submitted
/// from the MakePayment page to the receipt view.
pub const RECEIPT_KEY: &str = "bursar.last_receipt";

/// Receipt payload handed from MakePayment to this view. Survives a reload
/// only through LocalStorage; when absent the page refetches by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReceipt {
    pub payment: Payment,
    pub msg: String,
    /// Client-captured timestamp of when the payment was initiated.
    pub initiated_at: Option<String>,
}

pub fn store_receipt(receipt: &StoredReceipt) {
    if LocalStorage::set(RECEIPT_KEY, receipt).is_err() {
        Logger::warn_with_component("receipt", "could not persist receipt for the receipt view");
    }
}

fn load_receipt(payment_id: i64) -> Option<StoredReceipt> {
    LocalStorage::get::<StoredReceipt>(RECEIPT_KEY)
        .ok()
        .filter(|r| r.payment.id == payment_id)
}

#[derive(Properties, PartialEq)]
pub struct PaymentReceiptProps {
    pub id: i64,
}

#[function_component(PaymentReceipt)]
pub fn payment_receipt(props: &PaymentReceiptProps) -> Html {
    let auth = use_auth();

    let receipt = use_state(|| load_receipt(props.id));
    let loading = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // Fall back to fetching by id when the handed-over receipt is gone
    // (hard refresh, direct link).
    use_effect_with(props.id, {
        let token = auth.token.clone();
        let receipt = receipt.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        move |&id| {
            if receipt.is_none() {
                let api_client = ApiClient::new().with_token(token);
                let receipt = receipt.clone();
                let loading = loading.clone();
                let error_message = error_message.clone();

                spawn_local(async move {
                    loading.set(true);

                    match api_client.get_payment(id).await {
                        Ok(response) => {
                            receipt.set(Some(StoredReceipt {
                                payment: response.payment,
                                msg: response.msg,
                                initiated_at: None,
                            }));
                        }
                        Err(e) => {
                            Logger::error_with_component("receipt", &e.to_string());
                            error_message.set(Some(e.to_string()));
                        }
                    }

                    loading.set(false);
                });
            }
            || ()
        }
    });

    let download_receipt = {
        let receipt = receipt.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(receipt) = (*receipt).clone() {
                let filename = format!("receipt-{}.json", receipt.payment.reference);
                if let Err(e) = download::download_json(&filename, &receipt) {
                    Logger::error_with_component("receipt", &format!("download failed: {}", e));
                }
            }
        })
    };

    if *loading {
        return html! { <div class="loading">{"Loading receipt..."}</div> };
    }

    if let Some(error) = (*error_message).clone() {
        return html! { <div class="form-message error">{error}</div> };
    }

    let Some(receipt) = (*receipt).clone() else {
        return html! { <div class="empty-state">{"Receipt not found."}</div> };
    };

    let payment = &receipt.payment;

    html! {
        <div class="page">
            <h1>{"Payment Receipt"}</h1>

            {if payment.method == PaymentMethod::BankTransfer
                && payment.status == PaymentStatus::Pending
            {
                html! {
                    <div class="form-message info">
                        {"This bank transfer is pending until the finance office verifies it against the bank statement."}
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="receipt-card">
                <div class="receipt-row">
                    <span class="receipt-label">{"Reference"}</span>
                    <span class="mono">{&payment.reference}</span>
                </div>
                <div class="receipt-row">
                    <span class="receipt-label">{"Amount"}</span>
                    <span class="receipt-amount">{format_money(payment.amount)}</span>
                </div>
                <div class="receipt-row">
                    <span class="receipt-label">{"Method"}</span>
                    <span>{payment.method.label()}</span>
                </div>
                <div class="receipt-row">
                    <span class="receipt-label">{"Status"}</span>
                    {payment_status_badge(payment.status)}
                </div>
                <div class="receipt-row">
                    <span class="receipt-label">{"Paid at"}</span>
                    <span>{format_date(&payment.paid_at)}</span>
                </div>
                {if let Some(initiated_at) = receipt.initiated_at.as_ref() {
                    html! {
                        <div class="receipt-row">
                            <span class="receipt-label">{"Initiated at"}</span>
                            <span>{format_date(initiated_at)}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class="receipt-row">
                    <span class="receipt-label">{"Remaining dues"}</span>
                    <span>{format_money(payment.remaining_dues)}</span>
                </div>
            </div>

            <div class="form-buttons">
                <button class="btn btn-secondary" onclick={download_receipt}>
                    {"Download receipt (JSON)"}
                </button>
                <Link<Route> to={Route::PaymentHistory} classes="btn btn-secondary">
                    {"Payment history"}
                </Link<Route>>
                <Link<Route> to={Route::StudentDashboard} classes="btn btn-primary">
                    {"Back to dashboard"}
                </Link<Route>>
            </div>
        </div>
    }
}
