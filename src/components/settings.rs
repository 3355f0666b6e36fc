use gloo_events::EventListener;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::components::context::{UIState, UIStateMsg};
use crate::components::setting_components;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsSectionProps {
    pub title: String,
    pub icon: String,
    pub children: Html,
}

#[function_component(SettingsSection)]
fn settings_section(props: &SettingsSectionProps) -> Html {
    html! {
        <div class="user-settings-container">
            <div class="settings-header">
                <div class="flex items-center gap-4">
                    <i class={format!("ph {} text-2xl", props.icon)}></i>
                    <h2 class="text-xl font-semibold">{ &props.title }</h2>
                </div>
            </div>
            <div class="p-5">
                { props.children.clone() }
            </div>
        </div>
    }
}

#[function_component(Settings)]
pub fn settings() -> Html {
    let (ui_state, ui_dispatch) = use_store::<UIState>();
    let error_message = ui_state.error_message.clone();
    let info_message = ui_state.info_message.clone();

    // Any click dismisses the snackbars
    use_effect_with((), move |_| {
        let listener = web_sys::window()
            .and_then(|window| window.document())
            .map(|document| {
                EventListener::new(&document, "click", move |_| {
                    ui_dispatch.apply(UIStateMsg::ClearErrorMessage);
                    ui_dispatch.apply(UIStateMsg::ClearInfoMessage);
                })
            });
        move || drop(listener)
    });

    html! {
        <div class="main-container">
            <div class="my-4">
                <h1 class="item_container-text text-2xl font-bold mb-3">{ "Notification Settings" }</h1>
                <div class="setting-box p-1 shadow rounded-lg">
                    <SettingsSection title="LunaSea" icon="ph-bell">
                        <setting_components::lunasea::LunaSeaNotifications />
                    </SettingsSection>
                </div>
            </div>
            if let Some(error) = error_message {
                <div class="error-snackbar">{ error }</div>
            }
            if let Some(info) = info_message {
                <div class="info-snackbar">{ info }</div>
            }
        </div>
    }
}
