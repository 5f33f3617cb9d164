use shared::FeeCategory;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeeItemFormProps {
    // Form state
    pub name: String,
    pub amount: String,
    pub category: FeeCategory,
    pub per_credit: bool,
    pub active: bool,
    /// Id of the item being edited; `None` while creating.
    pub editing_id: Option<i64>,
    pub saving: bool,
    pub error: Option<String>,

    // Event handlers
    pub on_name_change: Callback<Event>,
    pub on_amount_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_per_credit_change: Callback<Event>,
    pub on_active_change: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_cancel_edit: Callback<MouseEvent>,
}

const CATEGORIES: [FeeCategory; 5] = [
    FeeCategory::Tuition,
    FeeCategory::Bus,
    FeeCategory::Library,
    FeeCategory::Lab,
    FeeCategory::Other,
];

fn category_value(category: FeeCategory) -> &'static str {
    match category {
        FeeCategory::Tuition => "TUITION",
        FeeCategory::Bus => "BUS",
        FeeCategory::Library => "LIBRARY",
        FeeCategory::Lab => "LAB",
        FeeCategory::Other => "OTHER",
    }
}

/// Settings-style form for creating and editing fee items.
#[function_component(FeeItemForm)]
pub fn fee_item_form(props: &FeeItemFormProps) -> Html {
    html! {
        <section class="fee-item-form-section">
            <h2>
                {if props.editing_id.is_some() { "Edit fee item" } else { "Add fee item" }}
            </h2>

            {if let Some(error) = props.error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else {
                html! {}
            }}

            <form class="fee-item-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-row">
                    <div class="form-group">
                        <label for="fee-name">{"Name"}</label>
                        <input
                            type="text"
                            id="fee-name"
                            placeholder="Tuition per credit hour"
                            value={props.name.clone()}
                            onchange={props.on_name_change.clone()}
                            disabled={props.saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="fee-amount">{"Amount"}</label>
                        <input
                            type="number"
                            id="fee-amount"
                            placeholder="150.00"
                            step="0.01"
                            min="0.01"
                            value={props.amount.clone()}
                            onchange={props.on_amount_change.clone()}
                            disabled={props.saving}
                        />
                    </div>

                    <div class="form-group">
                        <label for="fee-category">{"Category"}</label>
                        <select
                            id="fee-category"
                            onchange={props.on_category_change.clone()}
                            disabled={props.saving}
                        >
                            {for CATEGORIES.iter().map(|category| {
                                html! {
                                    <option
                                        value={category_value(*category)}
                                        selected={props.category == *category}
                                    >
                                        {category.label()}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            checked={props.per_credit}
                            onchange={props.on_per_credit_change.clone()}
                            disabled={props.saving}
                        />
                        {"Charged per credit hour"}
                    </label>

                    <label class="checkbox-label">
                        <input
                            type="checkbox"
                            checked={props.active}
                            onchange={props.on_active_change.clone()}
                            disabled={props.saving}
                        />
                        {"Active"}
                    </label>
                </div>

                <div class="form-buttons">
                    <button type="submit" class="btn btn-primary" disabled={props.saving}>
                        {if props.saving {
                            "Saving..."
                        } else if props.editing_id.is_some() {
                            "Save changes"
                        } else {
                            "Add fee item"
                        }}
                    </button>
                    {if props.editing_id.is_some() {
                        html! {
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={props.on_cancel_edit.clone()}
                                disabled={props.saving}
                            >
                                {"Cancel"}
                            </button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </form>
        </section>
    }
}
