use shared::{
    format_date, format_money, BankTransaction, MatchTransactionRequest, MatchTransactionResponse,
    Payment, PaymentStatus, StudentSummary,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    PickStudent,
    PickPayment,
}

#[derive(Properties, PartialEq)]
pub struct MatchTransactionModalProps {
    pub is_open: bool,
    pub transaction: Option<BankTransaction>,
    pub api_client: ApiClient,
    pub on_success: Callback<MatchTransactionResponse>,
    pub on_close: Callback<()>,
}

/// Two-step match dialog: staff pick the student the bank line belongs to,
/// then the pending payment it settles. The selection is sent to the
/// backend as-is; all reconciliation bookkeeping happens there.
#[function_component(MatchTransactionModal)]
pub fn match_transaction_modal(props: &MatchTransactionModalProps) -> Html {
    let step = use_state(|| Step::PickStudent);
    let students = use_state(Vec::<StudentSummary>::new);
    let students_loading = use_state(|| false);
    let student_filter = use_state(String::new);
    let selected_student = use_state(|| None::<StudentSummary>);
    let payments = use_state(Vec::<Payment>::new);
    let payments_loading = use_state(|| false);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    // Reset and load the student list each time the dialog opens
    use_effect_with(props.is_open, {
        let api_client = props.api_client.clone();
        let step = step.clone();
        let students = students.clone();
        let students_loading = students_loading.clone();
        let student_filter = student_filter.clone();
        let selected_student = selected_student.clone();
        let payments = payments.clone();
        let error_message = error_message.clone();

        move |is_open| {
            if *is_open {
                step.set(Step::PickStudent);
                student_filter.set(String::new());
                selected_student.set(None);
                payments.set(Vec::new());
                error_message.set(None);

                let api_client = api_client.clone();
                let students = students.clone();
                let students_loading = students_loading.clone();
                let error_message = error_message.clone();

                spawn_local(async move {
                    students_loading.set(true);

                    match api_client.list_students().await {
                        Ok(response) => students.set(response.students),
                        Err(e) => {
                            Logger::error_with_component("reconciliation", &e.to_string());
                            error_message.set(Some(e.to_string()));
                        }
                    }

                    students_loading.set(false);
                });
            }
            || ()
        }
    });

    let on_filter_change = {
        let student_filter = student_filter.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            student_filter.set(input.value());
        })
    };

    let select_student = {
        let api_client = props.api_client.clone();
        let step = step.clone();
        let selected_student = selected_student.clone();
        let payments = payments.clone();
        let payments_loading = payments_loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |student: StudentSummary| {
            let api_client = api_client.clone();
            let step = step.clone();
            let selected_student = selected_student.clone();
            let payments = payments.clone();
            let payments_loading = payments_loading.clone();
            let error_message = error_message.clone();

            spawn_local(async move {
                payments_loading.set(true);
                error_message.set(None);

                match api_client.get_student(student.id).await {
                    Ok(response) => {
                        // Only payments still awaiting verification can be
                        // linked to a statement line.
                        let pending: Vec<Payment> = response
                            .recent_payments
                            .into_iter()
                            .filter(|p| p.status == PaymentStatus::Pending)
                            .collect();
                        payments.set(pending);
                        selected_student.set(Some(student));
                        step.set(Step::PickPayment);
                    }
                    Err(e) => {
                        Logger::error_with_component("reconciliation", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                payments_loading.set(false);
            });
        })
    };

    let back_to_students = {
        let step = step.clone();
        let selected_student = selected_student.clone();
        Callback::from(move |_: MouseEvent| {
            selected_student.set(None);
            step.set(Step::PickStudent);
        })
    };

    let select_payment = {
        let api_client = props.api_client.clone();
        let transaction = props.transaction.clone();
        let selected_student = selected_student.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |payment: Payment| {
            let Some(transaction) = transaction.clone() else {
                return;
            };
            let Some(student) = (*selected_student).clone() else {
                return;
            };

            let api_client = api_client.clone();
            let request = MatchTransactionRequest {
                student_id: student.id,
                payment_id: payment.id,
            };
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                is_submitting.set(true);
                error_message.set(None);

                match api_client.match_transaction(transaction.id, &request).await {
                    Ok(response) => {
                        on_success.emit(response);
                    }
                    Err(e) => {
                        Logger::error_with_component("reconciliation", &e.to_string());
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

    let Some(transaction) = props.transaction.as_ref() else {
        return html! {};
    };

    let filter = student_filter.to_lowercase();
    let visible_students: Vec<StudentSummary> = students
        .iter()
        .filter(|s| {
            filter.is_empty()
                || s.name.to_lowercase().contains(&filter)
                || s.student_number.to_lowercase().contains(&filter)
        })
        .cloned()
        .collect();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal modal-wide" onclick={on_modal_click}>
                <h3 class="modal-title">{"Match Bank Transaction"}</h3>
                <p class="modal-message">
                    {format!(
                        "{} - {} on {}",
                        transaction.bank_reference,
                        format_money(transaction.amount),
                        transaction.value_date
                    )}
                </p>

                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="form-message error">{error}</div> }
                } else {
                    html! {}
                }}

                {match *step {
                    Step::PickStudent => html! {
                        <>
                            <div class="form-group">
                                <label for="match-student-filter">{"Step 1 of 2: choose the student"}</label>
                                <input
                                    id="match-student-filter"
                                    type="text"
                                    placeholder="Filter by name or student number"
                                    value={(*student_filter).clone()}
                                    onchange={on_filter_change}
                                />
                            </div>

                            {if *students_loading {
                                html! { <div class="loading">{"Loading students..."}</div> }
                            } else if visible_students.is_empty() {
                                html! { <div class="empty-state">{"No students match the filter"}</div> }
                            } else {
                                html! {
                                    <ul class="picker-list">
                                        {for visible_students.into_iter().map(|student| {
                                            let select_student = select_student.clone();
                                            let entry = student.clone();
                                            html! {
                                                <li class="picker-row">
                                                    <span>{format!("{} ({})", student.name, student.student_number)}</span>
                                                    <span class="picker-detail">{format_money(student.dues_balance)}</span>
                                                    <button
                                                        class="btn btn-primary btn-small"
                                                        disabled={*payments_loading}
                                                        onclick={Callback::from(move |_: MouseEvent| select_student.emit(entry.clone()))}
                                                    >
                                                        {"Select"}
                                                    </button>
                                                </li>
                                            }
                                        })}
                                    </ul>
                                }
                            }}
                        </>
                    },
                    Step::PickPayment => html! {
                        <>
                            <div class="picker-header">
                                <span>
                                    {format!(
                                        "Step 2 of 2: choose the pending payment for {}",
                                        selected_student.as_ref().map(|s| s.name.clone()).unwrap_or_default()
                                    )}
                                </span>
                                <button class="btn btn-secondary btn-small" onclick={back_to_students}>
                                    {"Back"}
                                </button>
                            </div>

                            {if payments.is_empty() {
                                html! {
                                    <div class="empty-state">
                                        {"This student has no pending payments to match. Record the payment first, then match it here."}
                                    </div>
                                }
                            } else {
                                html! {
                                    <ul class="picker-list">
                                        {for payments.iter().map(|payment| {
                                            let select_payment = select_payment.clone();
                                            let entry = payment.clone();
                                            html! {
                                                <li class="picker-row">
                                                    <span>{format!("{} - {}", payment.reference, format_money(payment.amount))}</span>
                                                    <span class="picker-detail">{format_date(&payment.paid_at)}</span>
                                                    <button
                                                        class="btn btn-primary btn-small"
                                                        disabled={*is_submitting}
                                                        onclick={Callback::from(move |_: MouseEvent| select_payment.emit(entry.clone()))}
                                                    >
                                                        {if *is_submitting { "Matching..." } else { "Match" }}
                                                    </button>
                                                </li>
                                            }
                                        })}
                                    </ul>
                                }
                            }}
                        </>
                    },
                }}

                <div class="modal-buttons">
                    <button class="btn btn-secondary" onclick={on_cancel} disabled={*is_submitting}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
