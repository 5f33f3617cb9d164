use shared::{
    format_money, StudentActionKind, StudentActionRequest, StudentActionResponse, StudentSummary,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct StudentActionModalProps {
    pub is_open: bool,
    pub kind: StudentActionKind,
    pub student: Option<StudentSummary>,
    pub api_client: ApiClient,
    pub on_success: Callback<StudentActionResponse>,
    pub on_close: Callback<()>,
}

/// Dialog behind the contact / penalty / block staff actions. The fields
/// shown depend on the action kind; the backend logs every action and
/// notifies the student.
#[function_component(StudentActionModal)]
pub fn student_action_modal(props: &StudentActionModalProps) -> Html {
    let contact_method = use_state(|| "EMAIL".to_string());
    let amount = use_state(String::new);
    let notes = use_state(String::new);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    use_effect_with(props.is_open, {
        let contact_method = contact_method.clone();
        let amount = amount.clone();
        let notes = notes.clone();
        let error_message = error_message.clone();

        move |is_open| {
            if *is_open {
                contact_method.set("EMAIL".to_string());
                amount.set(String::new());
                notes.set(String::new());
                error_message.set(None);
            }
            || ()
        }
    });

    let on_contact_method_change = {
        let contact_method = contact_method.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            contact_method.set(select.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
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
        let kind = props.kind;
        let student = props.student.clone();
        let contact_method = contact_method.clone();
        let amount = amount.clone();
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

            let penalty_amount = if kind == StudentActionKind::Penalty {
                match (*amount).trim().parse::<f64>() {
                    Ok(value) if value > 0.0 => Some(value),
                    _ => {
                        error_message.set(Some("Penalty amount must be greater than 0".to_string()));
                        return;
                    }
                }
            } else {
                None
            };

            let request = StudentActionRequest {
                contact_method: (kind == StudentActionKind::Contact)
                    .then(|| (*contact_method).clone()),
                amount: penalty_amount,
                notes: (*notes).clone(),
            };

            let api_client = api_client.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);

                match api_client.student_action(kind, student.id, &request).await {
                    Ok(response) => {
                        on_success.emit(response);
                    }
                    Err(e) => {
                        Logger::error_with_component("student-action", &e.to_string());
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
                <h3 class="modal-title">{props.kind.label()}</h3>
                <p class="modal-message">
                    {format!(
                        "{} ({}) - outstanding dues {}",
                        student.name,
                        student.student_number,
                        format_money(student.dues_balance)
                    )}
                </p>

                {if props.kind == StudentActionKind::Block {
                    html! {
                        <div class="form-message warning">
                            {"Blocking prevents the student from registering for courses until the block is lifted."}
                        </div>
                    }
                } else {
                    html! {}
                }}

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                <form class="modal-form" onsubmit={on_submit}>
                    {if props.kind == StudentActionKind::Contact {
                        html! {
                            <div class="form-group">
                                <label for="action-contact-method">{"Contact via"}</label>
                                <select
                                    id="action-contact-method"
                                    onchange={on_contact_method_change}
                                    disabled={*is_submitting}
                                >
                                    <option value="EMAIL" selected={*contact_method == "EMAIL"}>{"Email"}</option>
                                    <option value="PHONE" selected={*contact_method == "PHONE"}>{"Phone"}</option>
                                </select>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    {if props.kind == StudentActionKind::Penalty {
                        html! {
                            <div class="form-group">
                                <label for="action-amount">{"Penalty amount"}</label>
                                <input
                                    id="action-amount"
                                    type="number"
                                    step="0.01"
                                    min="0.01"
                                    placeholder="50.00"
                                    value={(*amount).clone()}
                                    onchange={on_amount_change}
                                    disabled={*is_submitting}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <div class="form-group">
                        <label for="action-notes">{"Notes"}</label>
                        <input
                            id="action-notes"
                            type="text"
                            placeholder="Reason for this action"
                            value={(*notes).clone()}
                            onchange={on_notes_change}
                            disabled={*is_submitting}
                        />
                    </div>

                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                            {if *is_submitting { "Submitting..." } else { props.kind.label() }}
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
