use shared::{FeeItem, FeeItemRequest};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone)]
pub struct FeeItemsState {
    pub items: Vec<FeeItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub saving: bool,
}

pub struct UseFeeItemsResult {
    pub state: FeeItemsState,
    pub actions: UseFeeItemsActions,
}

#[derive(Clone)]
pub struct UseFeeItemsActions {
    pub refresh: Callback<()>,
    pub create: Callback<FeeItemRequest>,
    pub update: Callback<(i64, FeeItemRequest)>,
    pub remove: Callback<i64>,
}

/// Fee configuration CRUD backing the fee setup page.
#[hook]
pub fn use_fee_items(api_client: &ApiClient) -> UseFeeItemsResult {
    let items = use_state(Vec::<FeeItem>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let refresh = {
        let api_client = api_client.clone();
        let items = items.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let items = items.clone();
            let loading = loading.clone();
            let error = error.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_fee_items().await {
                    Ok(response) => {
                        error.set(None);
                        items.set(response.fee_items);
                    }
                    Err(e) => {
                        Logger::error_with_component("fee-items", &e.to_string());
                        error.set(Some(e.to_string()));
                    }
                }

                loading.set(false);
            });
        })
    };

    let create = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        use_callback((), move |request: FeeItemRequest, _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let error = error.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                saving.set(true);
                error.set(None);

                match api_client.create_fee_item(&request).await {
                    Ok(_) => refresh.emit(()),
                    Err(e) => error.set(Some(e.to_string())),
                }

                saving.set(false);
            });
        })
    };

    let update = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        use_callback((), move |(id, request): (i64, FeeItemRequest), _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let error = error.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                saving.set(true);
                error.set(None);

                match api_client.update_fee_item(id, &request).await {
                    Ok(_) => refresh.emit(()),
                    Err(e) => error.set(Some(e.to_string())),
                }

                saving.set(false);
            });
        })
    };

    let remove = {
        let api_client = api_client.clone();
        let saving = saving.clone();
        let error = error.clone();
        let refresh = refresh.clone();

        use_callback((), move |id: i64, _| {
            let api_client = api_client.clone();
            let saving = saving.clone();
            let error = error.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                saving.set(true);
                error.set(None);

                match api_client.delete_fee_item(id).await {
                    Ok(_) => refresh.emit(()),
                    Err(e) => error.set(Some(e.to_string())),
                }

                saving.set(false);
            });
        })
    };

    let state = FeeItemsState {
        items: (*items).clone(),
        loading: *loading,
        error: (*error).clone(),
        saving: *saving,
    };

    let actions = UseFeeItemsActions {
        refresh,
        create,
        update,
        remove,
    };

    UseFeeItemsResult { state, actions }
}
