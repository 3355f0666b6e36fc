// lunasea/mod.rs
pub mod controller;
pub mod error;
pub mod form;
pub mod messages;

use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::context::{AppState, UIState};
use crate::components::notification_type_selector::NotificationTypeSelector;
use crate::requests::notification_types::NotificationTypes;
use crate::requests::setting_reqs::LunaSeaClient;
use controller::LunaSeaController;
use form::{Field, FormAction, PanelAction, PanelState, Phase};

type PanelController = LunaSeaController<LunaSeaClient, Dispatch<UIState>>;

#[function_component(LunaSeaNotifications)]
pub fn lunasea_notifications() -> Html {
    let (state, _dispatch) = use_store::<AppState>();
    let (_ui_state, ui_dispatch) = use_store::<UIState>();
    let panel = use_reducer(PanelState::default);
    let server_details = state.server_details.clone();

    let controller: Rc<Option<Rc<PanelController>>> = {
        let dispatcher = panel.dispatcher();
        use_memo(server_details.clone(), move |server_details| {
            server_details.clone().map(|config| {
                let dispatch =
                    Callback::from(move |action: PanelAction| dispatcher.dispatch(action));
                Rc::new(LunaSeaController::new(
                    LunaSeaClient::new(config),
                    ui_dispatch,
                    dispatch,
                ))
            })
        })
    };

    // Fetch current settings once the server details are known
    {
        let controller = controller.clone();
        use_effect_with(server_details, move |_| {
            let guard = (*controller).clone().map(|controller| {
                let guard = controller.mount_guard();
                spawn_local(async move {
                    controller.load().await;
                });
                guard
            });
            move || drop(guard)
        });
    }

    let edit = {
        let dispatcher = panel.dispatcher();
        move |action: FormAction| dispatcher.dispatch(PanelAction::Form(action))
    };

    let on_enabled_change = {
        let edit = edit.clone();
        Callback::from(move |_: Event| edit(FormAction::ToggleEnabled))
    };

    let on_device_token_change = {
        let edit = edit.clone();
        Callback::from(move |_: Event| edit(FormAction::ToggleDeviceToken))
    };

    let on_access_token_input = {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            edit(FormAction::SetAccessToken(
                e.target_unchecked_into::<HtmlInputElement>().value(),
            ))
        })
    };

    let on_profile_input = {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            edit(FormAction::SetProfile(
                e.target_unchecked_into::<HtmlInputElement>().value(),
            ))
        })
    };

    let on_json_payload_input = {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            edit(FormAction::SetJsonPayload(
                e.target_unchecked_into::<HtmlTextAreaElement>().value(),
            ))
        })
    };

    let on_types_update =
        Callback::from(move |types: NotificationTypes| edit(FormAction::SetTypes(types)));

    let on_submit = {
        let controller = controller.clone();
        let panel = panel.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(controller), Some(form)) = ((*controller).clone(), panel.form().cloned())
            else {
                return;
            };
            spawn_local(async move {
                controller.save(&form).await;
            });
        })
    };

    let on_test = {
        let controller = controller.clone();
        let panel = panel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let (Some(controller), Some(form)) = ((*controller).clone(), panel.form().cloned())
            else {
                return;
            };
            spawn_local(async move {
                controller.test(&form).await;
            });
        })
    };

    let form = match &panel.phase {
        Phase::Loading => {
            return html! {
                <div class="flex justify-center items-center p-8" aria-label={messages::LOADING}>
                    <div class="loading-spinner"></div>
                </div>
            };
        }
        Phase::LoadError(reason) => {
            return html! {
                <div class="p-4 rounded-lg border border-solid border-red-500 item_container-text">
                    <i class="ph ph-warning-circle text-xl mr-2"></i>
                    { reason.clone() }
                </div>
            };
        }
        Phase::Ready(form) => form.clone(),
    };

    let actions_disabled = !form.can_submit();
    let access_token_error = form.visible_error(Field::AccessToken).map(str::to_string);

    html! {
        <>
            <div class="mb-6 p-4 rounded-lg bg-blue-50 dark:bg-blue-900/20" role="alert">
                <h4 class="text-sm font-medium mb-2">{ messages::VERSION_REQUIREMENT_TITLE }</h4>
                <p class="text-xs">{ messages::VERSION_REQUIREMENT_DESCRIPTION }</p>
            </div>
            <form class="space-y-6" onsubmit={on_submit}>
                <div class="flex items-center">
                    <input
                        type="checkbox"
                        id={Field::Enabled.name()}
                        checked={form.values.enabled}
                        onchange={on_enabled_change}
                        class="h-4 w-4 rounded"
                    />
                    <label for={Field::Enabled.name()} class="ml-2 block text-sm item_container-text">
                        { messages::AGENT_ENABLED }
                    </label>
                </div>

                <div>
                    <label for={Field::AccessToken.name()} class="block text-sm font-medium item_container-text mb-2">
                        { messages::ACCESS_TOKEN }
                        <span class="label-required">{"*"}</span>
                    </label>
                    <input
                        type="text"
                        id={Field::AccessToken.name()}
                        placeholder={messages::ACCESS_TOKEN}
                        value={form.values.access_token.clone()}
                        oninput={on_access_token_input}
                        class="search-bar-input w-full px-3 py-2 rounded-md"
                    />
                    if let Some(error) = access_token_error {
                        <div class="error text-sm mt-1">{ error }</div>
                    }
                </div>

                <div>
                    <label for={Field::Profile.name()} class="block text-sm font-medium item_container-text mb-2">
                        { messages::PROFILE }
                    </label>
                    <input
                        type="text"
                        id={Field::Profile.name()}
                        placeholder={messages::PROFILE}
                        value={form.values.profile.clone()}
                        oninput={on_profile_input}
                        class="search-bar-input w-full px-3 py-2 rounded-md"
                    />
                </div>

                <div class="flex items-start">
                    <input
                        type="checkbox"
                        id={Field::IsDeviceToken.name()}
                        checked={form.values.is_device_token}
                        onchange={on_device_token_change}
                        class="h-4 w-4 mt-1 rounded"
                    />
                    <label for={Field::IsDeviceToken.name()} class="ml-2 block text-sm item_container-text">
                        <span>{ messages::IS_DEVICE_TOKEN }</span>
                        <p class="opacity-80">{ messages::IS_DEVICE_TOKEN_TIP }</p>
                    </label>
                </div>

                <div>
                    <label for={Field::JsonPayload.name()} class="block text-sm font-medium item_container-text mb-2">
                        { messages::JSON_PAYLOAD }
                        <p class="text-xs opacity-80">{ messages::JSON_PAYLOAD_TIP }</p>
                    </label>
                    <textarea
                        id={Field::JsonPayload.name()}
                        rows="4"
                        value={form.values.json_payload.clone().unwrap_or_default()}
                        oninput={on_json_payload_input}
                        class="search-bar-input w-full px-3 py-2 rounded-md font-mono"
                    />
                </div>

                <div role="group" aria-labelledby="group-label">
                    <span id="group-label" class="block text-sm font-medium item_container-text mb-2">
                        { messages::NOTIFICATION_TYPES }
                    </span>
                    <NotificationTypeSelector
                        current_types={form.values.types}
                        on_update={on_types_update}
                        disabled={form.is_busy()}
                    />
                </div>

                <div class="flex justify-end gap-4 pt-6 border-t border-solid">
                    <button
                        type="button"
                        onclick={on_test}
                        disabled={actions_disabled}
                        class="settings-button px-4 py-2 rounded-md disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        { if form.testing { messages::TESTING } else { messages::TEST } }
                    </button>
                    <button
                        type="submit"
                        disabled={actions_disabled}
                        class="settings-button px-4 py-2 rounded-md disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        { if form.submitting { messages::SAVING } else { messages::SAVE } }
                    </button>
                </div>
            </form>
        </>
    }
}
