use shared::{format_money, PaymentMethod, RecordPaymentRequest, RecordPaymentResponse, StudentSummary};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct RecordPaymentModalProps {
    pub is_open: bool,
    pub student: Option<StudentSummary>,
    pub api_client: ApiClient,
    pub on_success: Callback<RecordPaymentResponse>,
    pub on_close: Callback<()>,
}

/// Staff dialog for recording a payment that happened outside the portal
/// (bank counter, cash office).
#[function_component(RecordPaymentModal)]
pub fn record_payment_modal(props: &RecordPaymentModalProps) -> Html {
    let amount = use_state(String::new);
    let method = use_state(|| PaymentMethod::BankTransfer);
    let reference = use_state(String::new);
    let notes = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // Reset state when the modal opens
    use_effect_with(props.is_open, {
        let amount = amount.clone();
        let reference = reference.clone();
        let notes = notes.clone();
        let error_message = error_message.clone();

        move |is_open| {
            if *is_open {
                amount.set(String::new());
                reference.set(String::new());
                notes.set(String::new());
                error_message.set(None);
            }
            || ()
        }
    });

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_method_change = {
        let method = method.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            method.set(match select.value().as_str() {
                "CASH" => PaymentMethod::Cash,
                "CARD" => PaymentMethod::Card,
                _ => PaymentMethod::BankTransfer,
            });
        })
    };

    let on_reference_change = {
        let reference = reference.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            reference.set(input.value());
        })
    };

    let on_notes_change = {
        let notes = notes.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            notes.set(input.value());
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let student = props.student.clone();
        let amount = amount.clone();
        let method = method.clone();
        let reference = reference.clone();
        let notes = notes.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(student) = student.clone() else {
                error_message.set(Some("No student selected".to_string()));
                return;
            };

            let amount_value = match (*amount).trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    error_message.set(Some("Amount must be greater than 0".to_string()));
                    return;
                }
            };

            let api_client = api_client.clone();
            let reference_value = (*reference).trim().to_string();
            let request = RecordPaymentRequest {
                student_id: student.id,
                amount: amount_value,
                payment_method: *method,
                reference_number: if reference_value.is_empty() {
                    None
                } else {
                    Some(reference_value)
                },
                notes: (*notes).clone(),
            };
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);

                match api_client.record_payment(&request).await {
                    Ok(response) => {
                        on_success.emit(response);
                    }
                    Err(e) => {
                        Logger::error_with_component("record-payment", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    let Some(student) = props.student.as_ref() else {
        return html! {};
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"Record External Payment"}</h3>
                <p class="modal-message">
                    {format!(
                        "{} ({}) currently owes {}",
                        student.name,
                        student.student_number,
                        format_money(student.dues_balance)
                    )}
                </p>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="modal-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="record-amount">{"Amount"}</label>
                        <input
                            id="record-amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="0.00"
                            value={(*amount).clone()}
                            onchange={on_amount_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="record-method">{"Method"}</label>
                        <select id="record-method" onchange={on_method_change} disabled={*is_submitting}>
                            <option value="BANK_TRANSFER" selected={*method == PaymentMethod::BankTransfer}>{"Bank transfer"}</option>
                            <option value="CASH" selected={*method == PaymentMethod::Cash}>{"Cash"}</option>
                            <option value="CARD" selected={*method == PaymentMethod::Card}>{"Card"}</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="record-reference">{"Reference (optional)"}</label>
                        <input
                            id="record-reference"
                            type="text"
                            placeholder="BANK123456"
                            value={(*reference).clone()}
                            onchange={on_reference_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="record-notes">{"Notes"}</label>
                        <input
                            id="record-notes"
                            type="text"
                            placeholder="Payment received from student bank account"
                            value={(*notes).clone()}
                            onchange={on_notes_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Recording..." } else { "Record payment" }}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={*is_submitting}>
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
