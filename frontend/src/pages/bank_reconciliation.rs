use shared::{format_day, format_money, BankTransaction, MatchStatus};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::components::modals::{ConfirmModal, MatchTransactionModal};
use crate::components::status_badge::match_status_badge;
use crate::hooks::use_auth;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[function_component(BankReconciliation)]
pub fn bank_reconciliation() -> Html {
    let auth = use_auth();
    let api_client = ApiClient::new().with_token(auth.token.clone());

    let transactions = use_state(Vec::<BankTransaction>::new);
    let loading = use_state(|| true);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let status_filter = use_state(|| None::<MatchStatus>);

    let match_target = use_state(|| None::<BankTransaction>);
    let ignore_candidate = use_state(|| None::<BankTransaction>);
    let ignoring = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();
        let status_filter = status_filter.clone();

        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let transactions = transactions.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let filter = *status_filter;

            spawn_local(async move {
                loading.set(true);
                error_message.set(None);

                match api_client.list_bank_transactions(filter).await {
                    Ok(response) => transactions.set(response.transactions),
                    Err(e) => {
                        Logger::error_with_component("reconciliation", &e.to_string());
                        error_message.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Runs on mount and again when the status filter changes, once the new
    // filter value is visible to the refresh callback.
    use_effect_with(*status_filter, {
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

    let on_filter_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status_filter.set(match select.value().as_str() {
                "Matched" => Some(MatchStatus::Matched),
                "Unmatched" => Some(MatchStatus::Unmatched),
                "Pending" => Some(MatchStatus::Pending),
                _ => None,
            });
        })
    };

    let on_match_success = {
        let match_target = match_target.clone();
        let refresh = refresh.clone();
        let show_success = show_success.clone();
        Callback::from(move |response: shared::MatchTransactionResponse| {
            match_target.set(None);
            show_success.emit(response.msg);
            refresh.emit(());
        })
    };

    let close_match_modal = {
        let match_target = match_target.clone();
        Callback::from(move |_| match_target.set(None))
    };

    let confirm_ignore = {
        let api_client = api_client.clone();
        let ignore_candidate = ignore_candidate.clone();
        let ignoring = ignoring.clone();
        let error_message = error_message.clone();
        let refresh = refresh.clone();
        let show_success = show_success.clone();

        Callback::from(move |_| {
            let Some(transaction) = (*ignore_candidate).clone() else {
                return;
            };

            let api_client = api_client.clone();
            let ignore_candidate = ignore_candidate.clone();
            let ignoring = ignoring.clone();
            let error_message = error_message.clone();
            let refresh = refresh.clone();
            let show_success = show_success.clone();

            spawn_local(async move {
                ignoring.set(true);

                match api_client.ignore_transaction(transaction.id).await {
                    Ok(response) => {
                        show_success.emit(response.msg);
                        ignore_candidate.set(None);
                        refresh.emit(());
                    }
                    Err(e) => {
                        Logger::error_with_component("reconciliation", &e.to_string());
                        error_message.set(Some(e.to_string()));
                        ignore_candidate.set(None);
                    }
                }

                ignoring.set(false);
            });
        })
    };

    let close_ignore_modal = {
        let ignore_candidate = ignore_candidate.clone();
        Callback::from(move |_| ignore_candidate.set(None))
    };

    let ignore_message = ignore_candidate
        .as_ref()
        .map(|t| {
            format!(
                "Ignore bank line {} for {}? It will leave the reconciliation queue.",
                t.bank_reference,
                format_money(t.amount)
            )
        })
        .unwrap_or_default();

    html! {
        <div class="page">
            <div class="section-header">
                <h1>{"Bank Reconciliation"}</h1>
                <div class="form-group">
                    <label for="recon-filter">{"Show"}</label>
                    <select id="recon-filter" onchange={on_filter_change}>
                        <option value="All" selected={status_filter.is_none()}>{"All"}</option>
                        <option value="Unmatched" selected={*status_filter == Some(MatchStatus::Unmatched)}>{"Unmatched"}</option>
                        <option value="Pending" selected={*status_filter == Some(MatchStatus::Pending)}>{"Pending"}</option>
                        <option value="Matched" selected={*status_filter == Some(MatchStatus::Matched)}>{"Matched"}</option>
                    </select>
                </div>
            </div>

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

            {if *loading {
                html! { <div class="loading">{"Loading bank transactions..."}</div> }
            } else if transactions.is_empty() {
                html! { <div class="empty-state">{"No bank transactions in this view."}</div> }
            } else {
                html! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>{"Bank reference"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Value date"}</th>
                                <th>{"Status"}</th>
                                <th>{"Linked"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for transactions.iter().map(|transaction| {
                                let match_target = match_target.clone();
                                let ignore_candidate = ignore_candidate.clone();
                                let match_entry = transaction.clone();
                                let ignore_entry = transaction.clone();
                                // Matched rows are settled; they carry exactly
                                // one payment and offer no further actions.
                                let actionable = transaction.match_status != MatchStatus::Matched;
                                html! {
                                    <tr>
                                        <td class="mono">{&transaction.bank_reference}</td>
                                        <td>{format_money(transaction.amount)}</td>
                                        <td>{format_day(&transaction.value_date)}</td>
                                        <td>{match_status_badge(transaction.match_status)}</td>
                                        <td>
                                            {match (transaction.student_id, transaction.payment_id) {
                                                (Some(student_id), Some(payment_id)) => {
                                                    format!("student #{} / payment #{}", student_id, payment_id)
                                                }
                                                (Some(student_id), None) => format!("student #{}", student_id),
                                                _ => "-".to_string(),
                                            }}
                                        </td>
                                        <td class="row-actions">
                                            {if actionable {
                                                html! {
                                                    <>
                                                        <button
                                                            class="btn btn-primary btn-small"
                                                            onclick={Callback::from(move |_: MouseEvent| match_target.set(Some(match_entry.clone())))}
                                                        >
                                                            {"Match..."}
                                                        </button>
                                                        <button
                                                            class="btn btn-secondary btn-small"
                                                            onclick={Callback::from(move |_: MouseEvent| ignore_candidate.set(Some(ignore_entry.clone())))}
                                                        >
                                                            {"Ignore"}
                                                        </button>
                                                    </>
                                                }
                                            } else {
                                                html! {}
                                            }}
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            <MatchTransactionModal
                is_open={match_target.is_some()}
                transaction={(*match_target).clone()}
                api_client={api_client}
                on_success={on_match_success}
                on_close={close_match_modal}
            />

            <ConfirmModal
                is_open={ignore_candidate.is_some()}
                title={"Ignore transaction".to_string()}
                message={ignore_message}
                confirm_label={"Ignore".to_string()}
                on_confirm={confirm_ignore}
                on_close={close_ignore_modal}
                busy={*ignoring}
            />
        </div>
    }
}
