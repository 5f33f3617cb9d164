use shared::{
    format_card_number, validate_bank_transfer, validate_card, BankTransferDetails, CardDetails,
    MakePaymentRequest, Payment, PaymentMethod, PaymentValidationError,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::forms::PaymentForm;
use crate::hooks::use_auth;
use crate::pages::payment_receipt::{store_receipt, StoredReceipt};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

fn empty_card() -> CardDetails {
    CardDetails {
        number: String::new(),
        expiry: String::new(),
        cvv: String::new(),
        holder: String::new(),
    }
}

#[function_component(MakePayment)]
pub fn make_payment() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("page rendered under BrowserRouter");

    let method = use_state(|| PaymentMethod::Card);
    let amount = use_state(String::new);
    let card = use_state(empty_card);
    let bank_reference = use_state(String::new);
    let proof = use_state(|| None::<(String, u64)>);
    let errors = use_state(Vec::<PaymentValidationError>::new);
    let banner_error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let on_select_card = {
        let method = method.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            method.set(PaymentMethod::Card);
            errors.set(Vec::new());
        })
    };

    let on_select_bank = {
        let method = method.clone();
        let errors = errors.clone();
        Callback::from(move |_: MouseEvent| {
            method.set(PaymentMethod::BankTransfer);
            errors.set(Vec::new());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        let banner_error = banner_error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
            banner_error.set(None);
        })
    };

    // The card number is reformatted into digit groups on every change;
    // anything past 16 digits is dropped.
    let on_card_number_change = {
        let card = card.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*card).clone();
            next.number = format_card_number(&input.value());
            card.set(next);
        })
    };

    let on_expiry_change = {
        let card = card.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*card).clone();
            next.expiry = input.value();
            card.set(next);
        })
    };

    let on_cvv_change = {
        let card = card.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*card).clone();
            next.cvv = input.value();
            card.set(next);
        })
    };

    let on_holder_change = {
        let card = card.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*card).clone();
            next.holder = input.value();
            card.set(next);
        })
    };

    let on_reference_change = {
        let bank_reference = bank_reference.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            bank_reference.set(input.value());
        })
    };

    let on_proof_change = {
        let proof = proof.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let selected = input
                .files()
                .and_then(|files| files.get(0))
                .map(|file| (file.name(), file.size() as u64));
            proof.set(selected);
        })
    };

    let on_submit = {
        let token = auth.token.clone();
        let navigator = navigator.clone();
        let method = method.clone();
        let amount = amount.clone();
        let card = card.clone();
        let bank_reference = bank_reference.clone();
        let proof = proof.clone();
        let errors = errors.clone();
        let banner_error = banner_error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |_| {
            errors.set(Vec::new());
            banner_error.set(None);

            let amount_value = match (*amount).trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    banner_error.set(Some("Enter a payment amount greater than 0".to_string()));
                    return;
                }
            };

            let now = js_sys::Date::new_0();
            let validation = match *method {
                PaymentMethod::Card => validate_card(
                    &card,
                    now.get_month() + 1, // JavaScript months are 0-indexed
                    now.get_full_year() as u32,
                ),
                _ => validate_bank_transfer(&BankTransferDetails {
                    reference: (*bank_reference).clone(),
                    proof: (*proof).clone(),
                }),
            };

            if !validation.is_valid {
                errors.set(validation.errors);
                return;
            }

            let reference = match *method {
                PaymentMethod::Card => {
                    Payment::synthetic_reference(js_sys::Date::now() as u64, &card.number)
                }
                _ => (*bank_reference).trim().to_string(),
            };

            let request = MakePaymentRequest {
                amount: amount_value,
                method: *method,
                reference,
                proof_filename: (*proof).as_ref().map(|(name, _)| name.clone()),
            };
            let initiated_at = String::from(js_sys::Date::new_0().to_iso_string());

            let api_client = ApiClient::new().with_token(token.clone());
            let navigator = navigator.clone();
            let banner_error = banner_error.clone();
            let is_submitting = is_submitting.clone();

            spawn_local(async move {
                is_submitting.set(true);

                match api_client.make_payment(&request).await {
                    Ok(response) => {
                        let payment_id = response.payment.id;
                        store_receipt(&StoredReceipt {
                            payment: response.payment,
                            msg: response.msg,
                            initiated_at: Some(initiated_at),
                        });
                        navigator.push(&Route::PaymentReceipt { id: payment_id });
                    }
                    Err(e) => {
                        Logger::error_with_component("make-payment", &e.to_string());
                        banner_error.set(Some(e.to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="page">
            <h1>{"Make a Payment"}</h1>

            <PaymentForm
                method={*method}
                amount={(*amount).clone()}
                card={(*card).clone()}
                bank_reference={(*bank_reference).clone()}
                proof={(*proof).clone()}
                errors={(*errors).clone()}
                banner_error={(*banner_error).clone()}
                submitting={*is_submitting}
                {on_select_card}
                {on_select_bank}
                {on_amount_change}
                {on_card_number_change}
                {on_expiry_change}
                {on_cvv_change}
                {on_holder_change}
                {on_reference_change}
                {on_proof_change}
                {on_submit}
            />
        </div>
    }
}
