use shared::{fee_total, format_money, FeeCategory, FeeItem, FeeItemRequest};
use web_sys::{HtmlInputElement, HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use crate::components::forms::FeeItemForm;
use crate::components::modals::ConfirmModal;
use crate::hooks::use_auth;
use crate::hooks::use_fee_items::use_fee_items;
use crate::services::api::ApiClient;

#[function_component(FeeCalculation)]
pub fn fee_calculation() -> Html {
    let auth = use_auth();
    let api_client = ApiClient::new().with_token(auth.token.clone());

    let fee_items = use_fee_items(&api_client);

    // Fee item form state
    let name = use_state(String::new);
    let amount = use_state(String::new);
    let category = use_state(|| FeeCategory::Tuition);
    let per_credit = use_state(|| false);
    let active = use_state(|| true);
    let editing_id = use_state(|| None::<i64>);
    let form_error = use_state(|| None::<String>);

    // Calculator state
    let credit_hours = use_state(|| "12".to_string());
    let include_bus = use_state(|| false);

    let delete_candidate = use_state(|| None::<FeeItem>);

    use_effect_with((), {
        let refresh = fee_items.actions.refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let reset_form = {
        let name = name.clone();
        let amount = amount.clone();
        let category = category.clone();
        let per_credit = per_credit.clone();
        let active = active.clone();
        let editing_id = editing_id.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            name.set(String::new());
            amount.set(String::new());
            category.set(FeeCategory::Tuition);
            per_credit.set(false);
            active.set(true);
            editing_id.set(None);
            form_error.set(None);
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(match select.value().as_str() {
                "BUS" => FeeCategory::Bus,
                "LIBRARY" => FeeCategory::Library,
                "LAB" => FeeCategory::Lab,
                "OTHER" => FeeCategory::Other,
                _ => FeeCategory::Tuition,
            });
        })
    };

    let on_per_credit_change = {
        let per_credit = per_credit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            per_credit.set(input.checked());
        })
    };

    let on_active_change = {
        let active = active.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            active.set(input.checked());
        })
    };

    let on_submit = {
        let name = name.clone();
        let amount = amount.clone();
        let category = category.clone();
        let per_credit = per_credit.clone();
        let active = active.clone();
        let editing_id = editing_id.clone();
        let form_error = form_error.clone();
        let create = fee_items.actions.create.clone();
        let update = fee_items.actions.update.clone();
        let reset_form = reset_form.clone();

        Callback::from(move |_| {
            if name.trim().is_empty() {
                form_error.set(Some("Fee name is required".to_string()));
                return;
            }
            let amount_value = match (*amount).trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    form_error.set(Some("Amount must be greater than 0".to_string()));
                    return;
                }
            };
            form_error.set(None);

            let request = FeeItemRequest {
                category: *category,
                name: (*name).trim().to_string(),
                amount: amount_value,
                per_credit: *per_credit,
                active: *active,
            };

            match *editing_id {
                Some(id) => update.emit((id, request)),
                None => create.emit(request),
            }
            reset_form.emit(());
        })
    };

    let on_cancel_edit = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form.emit(()))
    };

    let start_edit = {
        let name = name.clone();
        let amount = amount.clone();
        let category = category.clone();
        let per_credit = per_credit.clone();
        let active = active.clone();
        let editing_id = editing_id.clone();
        Callback::from(move |item: FeeItem| {
            name.set(item.name.clone());
            amount.set(format!("{}", item.amount));
            category.set(item.category);
            per_credit.set(item.per_credit);
            active.set(item.active);
            editing_id.set(Some(item.id));
        })
    };

    let confirm_delete = {
        let delete_candidate = delete_candidate.clone();
        let remove = fee_items.actions.remove.clone();
        Callback::from(move |_| {
            if let Some(item) = (*delete_candidate).clone() {
                remove.emit(item.id);
                delete_candidate.set(None);
            }
        })
    };

    let close_delete_modal = {
        let delete_candidate = delete_candidate.clone();
        Callback::from(move |_| delete_candidate.set(None))
    };

    let on_credits_change = {
        let credit_hours = credit_hours.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            credit_hours.set(input.value());
        })
    };

    let on_include_bus_change = {
        let include_bus = include_bus.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            include_bus.set(input.checked());
        })
    };

    let credits: u32 = (*credit_hours).trim().parse().unwrap_or(0);
    let estimated = fee_total(&fee_items.state.items, credits, *include_bus);

    let delete_message = delete_candidate
        .as_ref()
        .map(|item| format!("Delete the fee item \"{}\"?", item.name))
        .unwrap_or_default();

    html! {
        <div class="page">
            <h1>{"Fee Setup"}</h1>

            <FeeItemForm
                name={(*name).clone()}
                amount={(*amount).clone()}
                category={*category}
                per_credit={*per_credit}
                active={*active}
                editing_id={*editing_id}
                saving={fee_items.state.saving}
                error={fee_items.state.error.clone().or((*form_error).clone())}
                {on_name_change}
                {on_amount_change}
                {on_category_change}
                {on_per_credit_change}
                {on_active_change}
                {on_submit}
                {on_cancel_edit}
            />

            <section class="page-section">
                <h2>{"Configured fees"}</h2>

                {if fee_items.state.loading {
                    html! { <div class="loading">{"Loading fee items..."}</div> }
                } else if fee_items.state.items.is_empty() {
                    html! { <div class="empty-state">{"No fee items configured yet."}</div> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Name"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Billing"}</th>
                                    <th>{"Active"}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {for fee_items.state.items.iter().map(|item| {
                                    let start_edit = start_edit.clone();
                                    let delete_candidate = delete_candidate.clone();
                                    let edit_item = item.clone();
                                    let delete_item = item.clone();
                                    html! {
                                        <tr>
                                            <td>{&item.name}</td>
                                            <td>{item.category.label()}</td>
                                            <td>{format_money(item.amount)}</td>
                                            <td>{if item.per_credit { "Per credit hour" } else { "Flat" }}</td>
                                            <td>{if item.active { "Yes" } else { "No" }}</td>
                                            <td class="row-actions">
                                                <button
                                                    class="btn btn-secondary btn-small"
                                                    onclick={Callback::from(move |_: MouseEvent| start_edit.emit(edit_item.clone()))}
                                                >
                                                    {"Edit"}
                                                </button>
                                                <button
                                                    class="btn btn-danger btn-small"
                                                    onclick={Callback::from(move |_: MouseEvent| delete_candidate.set(Some(delete_item.clone())))}
                                                >
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    }
                }}
            </section>

            <section class="page-section">
                <h2>{"Semester fee calculator"}</h2>
                <div class="calculator">
                    <div class="form-group">
                        <label for="calc-credits">{"Credit hours"}</label>
                        <input
                            id="calc-credits"
                            type="number"
                            min="0"
                            step="1"
                            value={(*credit_hours).clone()}
                            onchange={on_credits_change}
                        />
                    </div>
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            checked={*include_bus}
                            onchange={on_include_bus_change}
                        />
                        {"Include bus fees"}
                    </label>
                    <div class="calculator-total">
                        <span>{"Estimated total"}</span>
                        <strong>{format_money(estimated)}</strong>
                    </div>
                </div>
            </section>

            <ConfirmModal
                is_open={delete_candidate.is_some()}
                title={"Delete fee item".to_string()}
                message={delete_message}
                confirm_label={"Delete".to_string()}
                on_confirm={confirm_delete}
                on_close={close_delete_modal}
                busy={fee_items.state.saving}
            />
        </div>
    }
}
