use shared::{
    dues_severity, format_money, DuesFilter, DuesSort, StudentActionKind, StudentSummary,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::components::modals::{RecordPaymentModal, StudentActionModal};
use crate::components::status_badge::{fees_status_badge, severity_badge};
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[function_component(StudentList)]
pub fn student_list() -> Html {
    let auth = use_auth();
    let api_client = ApiClient::new().with_token(auth.token.clone());

    let students = use_state(Vec::<StudentSummary>::new);
    let dues_total = use_state(|| None::<f64>);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    // Dues filter panel; when inactive the full student list is shown.
    let min_amount = use_state(String::new);
    let max_amount = use_state(String::new);
    let sort_by = use_state(|| DuesSort::DuesBalance);
    let dues_only = use_state(|| false);

    // One modal open at a time.
    let action_target = use_state(|| None::<(StudentActionKind, StudentSummary)>);
    let record_target = use_state(|| None::<StudentSummary>);

    let refresh = {
        let api_client = api_client.clone();
        let students = students.clone();
        let dues_total = dues_total.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let min_amount = min_amount.clone();
        let max_amount = max_amount.clone();
        let sort_by = sort_by.clone();
        let dues_only = dues_only.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let students = students.clone();
            let dues_total = dues_total.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let filter = DuesFilter {
                min_amount: (*min_amount).trim().parse().ok(),
                max_amount: (*max_amount).trim().parse().ok(),
                sort_by: Some(*sort_by),
            };
            let dues_view = *dues_only;

            spawn_local(async move {
                loading.set(true);
                error_message.set(None);

                if dues_view {
                    match api_client.dues(&filter).await {
                        Ok(response) => {
                            dues_total.set(Some(response.total_outstanding_amount));
                            students.set(response.students);
                        }
                        Err(e) => {
                            Logger::error_with_component("student-list", &e.to_string());
                            error_message.set(Some(e.to_string()));
                        }
                    }
                } else {
                    match api_client.list_students().await {
                        Ok(response) => {
                            dues_total.set(None);
                            students.set(response.students);
                        }
                        Err(e) => {
                            Logger::error_with_component("student-list", &e.to_string());
                            error_message.set(Some(e.to_string()));
                        }
                    }
                }

                loading.set(false);
            });
        })
    };

    // Runs on mount and again whenever the dues-only toggle flips, after
    // the new toggle value is visible to the refresh callback.
    use_effect_with(*dues_only, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let show_success = {
        let success_message = success_message.clone();
        Callback::from(move |message: String| {
            success_message.set(Some(message));
            let success_message = success_message.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(3000).await;
                success_message.set(None);
            });
        })
    };

    let on_min_change = {
        let min_amount = min_amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            min_amount.set(input.value());
        })
    };

    let on_max_change = {
        let max_amount = max_amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            max_amount.set(input.value());
        })
    };

    let on_sort_change = {
        let sort_by = sort_by.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            sort_by.set(match select.value().as_str() {
                "username" => DuesSort::Username,
                _ => DuesSort::DuesBalance,
            });
        })
    };

    let on_dues_only_change = {
        let dues_only = dues_only.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dues_only.set(input.checked());
        })
    };

    let apply_filters = {
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let open_action = {
        let action_target = action_target.clone();
        Callback::from(move |target: (StudentActionKind, StudentSummary)| {
            action_target.set(Some(target));
        })
    };

    let on_action_success = {
        let action_target = action_target.clone();
        let refresh = refresh.clone();
        let show_success = show_success.clone();
        Callback::from(move |response: shared::StudentActionResponse| {
            action_target.set(None);
            show_success.emit(response.msg);
            refresh.emit(());
        })
    };

    let on_record_success = {
        let record_target = record_target.clone();
        let refresh = refresh.clone();
        let show_success = show_success.clone();
        Callback::from(move |response: shared::RecordPaymentResponse| {
            record_target.set(None);
            show_success.emit(response.msg);
            refresh.emit(());
        })
    };

    let close_action = {
        let action_target = action_target.clone();
        Callback::from(move |_| action_target.set(None))
    };

    let close_record = {
        let record_target = record_target.clone();
        Callback::from(move |_| record_target.set(None))
    };

    html! {
        <div class="page">
            <h1>{"Students"}</h1>

            {if let Some(error) = (*error_message).clone() {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            {if let Some(message) = (*success_message).clone() {
                html! { <div class="form-message success">{message}</div> }
            } else {
                html! {}
            }}

            <section class="filter-panel">
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        checked={*dues_only}
                        onchange={on_dues_only_change}
                    />
                    {"Only students with outstanding dues"}
                </label>

                <div class="filter-fields">
                    <div class="form-group">
                        <label for="filter-min">{"Min dues"}</label>
                        <input
                            id="filter-min"
                            type="number"
                            min="0"
                            step="0.01"
                            value={(*min_amount).clone()}
                            onchange={on_min_change}
                            disabled={!*dues_only}
                        />
                    </div>
                    <div class="form-group">
                        <label for="filter-max">{"Max dues"}</label>
                        <input
                            id="filter-max"
                            type="number"
                            min="0"
                            step="0.01"
                            value={(*max_amount).clone()}
                            onchange={on_max_change}
                            disabled={!*dues_only}
                        />
                    </div>
                    <div class="form-group">
                        <label for="filter-sort">{"Sort by"}</label>
                        <select id="filter-sort" onchange={on_sort_change} disabled={!*dues_only}>
                            <option value="dues_balance" selected={*sort_by == DuesSort::DuesBalance}>
                                {"Dues (highest first)"}
                            </option>
                            <option value="username" selected={*sort_by == DuesSort::Username}>
                                {"Username"}
                            </option>
                        </select>
                    </div>
                    <button class="btn btn-secondary" onclick={apply_filters} disabled={!*dues_only}>
                        {"Apply"}
                    </button>
                </div>

                {if let Some(total) = *dues_total {
                    html! {
                        <div class="filter-summary">
                            {format!(
                                "{} students owing {} in total",
                                students.len(),
                                format_money(total)
                            )}
                        </div>
                    }
                } else {
                    html! {}
                }}
            </section>

            {if *loading {
                html! { <div class="loading">{"Loading students..."}</div> }
            } else if students.is_empty() {
                html! { <div class="empty-state">{"No students match the current view."}</div> }
            } else {
                html! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Student"}</th>
                                <th>{"Faculty"}</th>
                                <th>{"Dues"}</th>
                                <th>{"Status"}</th>
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for students.iter().map(|student| {
                                let open_action = open_action.clone();
                                let record_target = record_target.clone();
                                let contact = student.clone();
                                let penalty = student.clone();
                                let block = student.clone();
                                let record = student.clone();
                                let open_contact = {
                                    let open_action = open_action.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        open_action.emit((StudentActionKind::Contact, contact.clone()))
                                    })
                                };
                                let open_penalty = {
                                    let open_action = open_action.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        open_action.emit((StudentActionKind::Penalty, penalty.clone()))
                                    })
                                };
                                let open_block = Callback::from(move |_: MouseEvent| {
                                    open_action.emit((StudentActionKind::Block, block.clone()))
                                });
                                let open_record = Callback::from(move |_: MouseEvent| {
                                    record_target.set(Some(record.clone()))
                                });

                                html! {
                                    <tr>
                                        <td>
                                            {format!("{} ({})", student.name, student.student_number)}
                                            {if student.blocked {
                                                html! { <span class="badge badge-danger">{"Blocked"}</span> }
                                            } else {
                                                html! {}
                                            }}
                                        </td>
                                        <td>{&student.faculty}</td>
                                        <td>
                                            {format_money(student.dues_balance)}
                                            {if student.dues_balance > 0.0 {
                                                severity_badge(dues_severity(student.dues_balance))
                                            } else {
                                                html! {}
                                            }}
                                        </td>
                                        <td>{fees_status_badge(student.fees_status)}</td>
                                        <td class="row-actions">
                                            <button class="btn btn-secondary btn-small" onclick={open_contact}>{"Contact"}</button>
                                            <button class="btn btn-secondary btn-small" onclick={open_penalty}>{"Penalty"}</button>
                                            <button class="btn btn-danger btn-small" onclick={open_block} disabled={student.blocked}>{"Block"}</button>
                                            <button class="btn btn-primary btn-small" onclick={open_record}>{"Record payment"}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            <StudentActionModal
                is_open={action_target.is_some()}
                kind={action_target.as_ref().map(|(kind, _)| *kind).unwrap_or(StudentActionKind::Contact)}
                student={action_target.as_ref().map(|(_, student)| student.clone())}
                api_client={api_client.clone()}
                on_success={on_action_success}
                on_close={close_action}
            />

            <RecordPaymentModal
                is_open={record_target.is_some()}
                student={(*record_target).clone()}
                api_client={api_client}
                on_success={on_record_success}
                on_close={close_record}
            />
        </div>
    }
}
