use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub is_open: bool,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
    #[prop_or(false)]
    pub busy: bool,
}

/// Blocking yes/no dialog used where the legacy flows reached for
/// `window.confirm`.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
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

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={on_modal_click}>
                <h3 class="modal-title">{&props.title}</h3>
                <p class="modal-message">{&props.message}</p>
                <div class="modal-buttons">
                    <button
                        class="btn btn-danger"
                        onclick={on_confirm}
                        disabled={props.busy}
                    >
                        {if props.busy { "Working..." } else { props.confirm_label.as_str() }}
                    </button>
                    <button class="btn btn-secondary" onclick={on_cancel} disabled={props.busy}>
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
