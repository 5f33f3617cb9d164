use shared::{CardDetails, PaymentMethod, PaymentValidationError};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaymentFormProps {
    // Form state
    pub method: PaymentMethod,
    pub amount: String,
    pub card: CardDetails,
    pub bank_reference: String,
    pub proof: Option<(String, u64)>,
    pub errors: Vec<PaymentValidationError>,
    pub banner_error: Option<String>,
    pub submitting: bool,

    // Event handlers
    pub on_select_card: Callback<MouseEvent>,
    pub on_select_bank: Callback<MouseEvent>,
    pub on_amount_change: Callback<Event>,
    pub on_card_number_change: Callback<Event>,
    pub on_expiry_change: Callback<Event>,
    pub on_cvv_change: Callback<Event>,
    pub on_holder_change: Callback<Event>,
    pub on_reference_change: Callback<Event>,
    pub on_proof_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

fn field_error(
    errors: &[PaymentValidationError],
    matches: fn(&PaymentValidationError) -> bool,
) -> Html {
    match errors.iter().find(|e| matches(e)) {
        Some(error) => html! { <span class="field-error">{error.to_string()}</span> },
        None => html! {},
    }
}

/// Payment capture form: card or bank-transfer details, validated locally
/// before submission. Presentation only; state lives in the page.
#[function_component(PaymentForm)]
pub fn payment_form(props: &PaymentFormProps) -> Html {
    let card_tab_class = if props.method == PaymentMethod::Card {
        "method-tab active"
    } else {
        "method-tab"
    };
    let bank_tab_class = if props.method == PaymentMethod::BankTransfer {
        "method-tab active"
    } else {
        "method-tab"
    };

    html! {
        <section class="payment-form-section">
            {if let Some(error) = props.banner_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            <div class="method-tabs">
                <button type="button" class={card_tab_class} onclick={props.on_select_card.clone()}>
                    {"Pay by card"}
                </button>
                <button type="button" class={bank_tab_class} onclick={props.on_select_bank.clone()}>
                    {"Bank transfer"}
                </button>
            </div>

            <form class="payment-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="pay-amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="pay-amount"
                        placeholder="0.00"
                        step="0.01"
                        min="0.01"
                        value={props.amount.clone()}
                        onchange={props.on_amount_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                {if props.method == PaymentMethod::Card {
                    html! {
                        <>
                            <div class="form-group">
                                <label for="card-number">{"Card number"}</label>
                                <input
                                    type="text"
                                    id="card-number"
                                    placeholder="1234 5678 9012 3456"
                                    inputmode="numeric"
                                    value={props.card.number.clone()}
                                    onchange={props.on_card_number_change.clone()}
                                    disabled={props.submitting}
                                />
                                {field_error(&props.errors, |e| matches!(e, PaymentValidationError::CardNumberLength(_)))}
                            </div>

                            <div class="form-row">
                                <div class="form-group">
                                    <label for="card-expiry">{"Expiry (MM/YY)"}</label>
                                    <input
                                        type="text"
                                        id="card-expiry"
                                        placeholder="08/27"
                                        value={props.card.expiry.clone()}
                                        onchange={props.on_expiry_change.clone()}
                                        disabled={props.submitting}
                                    />
                                    {field_error(&props.errors, |e| matches!(
                                        e,
                                        PaymentValidationError::ExpiryFormat | PaymentValidationError::ExpiryInPast
                                    ))}
                                </div>

                                <div class="form-group">
                                    <label for="card-cvv">{"CVV"}</label>
                                    <input
                                        type="password"
                                        id="card-cvv"
                                        placeholder="123"
                                        inputmode="numeric"
                                        value={props.card.cvv.clone()}
                                        onchange={props.on_cvv_change.clone()}
                                        disabled={props.submitting}
                                    />
                                    {field_error(&props.errors, |e| matches!(e, PaymentValidationError::InvalidCvv))}
                                </div>
                            </div>

                            <div class="form-group">
                                <label for="card-holder">{"Cardholder name"}</label>
                                <input
                                    type="text"
                                    id="card-holder"
                                    placeholder="Name as printed on the card"
                                    value={props.card.holder.clone()}
                                    onchange={props.on_holder_change.clone()}
                                    disabled={props.submitting}
                                />
                                {field_error(&props.errors, |e| matches!(e, PaymentValidationError::EmptyCardHolder))}
                            </div>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <div class="form-group">
                                <label for="bank-reference">{"Transfer reference"}</label>
                                <input
                                    type="text"
                                    id="bank-reference"
                                    placeholder="Reference from your bank receipt"
                                    value={props.bank_reference.clone()}
                                    onchange={props.on_reference_change.clone()}
                                    disabled={props.submitting}
                                />
                                {field_error(&props.errors, |e| matches!(e, PaymentValidationError::ReferenceTooShort(_)))}
                            </div>

                            <div class="form-group">
                                <label for="bank-proof">{"Proof of transfer (max 5MB)"}</label>
                                <input
                                    type="file"
                                    id="bank-proof"
                                    onchange={props.on_proof_change.clone()}
                                    disabled={props.submitting}
                                />
                                {if let Some((name, _)) = props.proof.as_ref() {
                                    html! { <small class="form-text">{format!("Selected: {}", name)}</small> }
                                } else {
                                    html! {}
                                }}
                                {field_error(&props.errors, |e| matches!(
                                    e,
                                    PaymentValidationError::MissingProof | PaymentValidationError::ProofTooLarge(_)
                                ))}
                            </div>

                            <div class="form-message info">
                                {"Bank transfers stay pending until the finance office verifies them against the bank statement."}
                            </div>
                        </>
                    }
                }}

                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    {if props.submitting { "Submitting payment..." } else { "Submit payment" }}
                </button>
            </form>
        </section>
    }
}
