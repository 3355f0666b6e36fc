use yew::prelude::*;

use crate::requests::notification_types::{NotificationType, NotificationTypes};

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationTypeSelectorProps {
    pub current_types: NotificationTypes,
    /// Receives the complete new selection, never a delta.
    pub on_update: Callback<NotificationTypes>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(NotificationTypeSelector)]
pub fn notification_type_selector(props: &NotificationTypeSelectorProps) -> Html {
    let NotificationTypeSelectorProps {
        current_types,
        on_update,
        disabled,
    } = props.clone();

    html! {
        <div class="space-y-4">
            { for NotificationType::SELECTABLE.into_iter().map(|ty| {
                let on_update = on_update.clone();
                let onchange = Callback::from(move |_: Event| {
                    on_update.emit(current_types.toggled(ty));
                });

                html! {
                    <div class="flex items-start" key={ty.id()}>
                        <input
                            type="checkbox"
                            id={ty.id()}
                            name="types"
                            checked={current_types.contains(ty)}
                            disabled={disabled}
                            {onchange}
                            class="h-4 w-4 mt-1 rounded"
                        />
                        <label for={ty.id()} class="ml-3 block text-sm item_container-text">
                            <span class="font-medium">{ ty.label() }</span>
                            <p class="opacity-80">{ ty.description() }</p>
                        </label>
                    </div>
                }
            }) }
        </div>
    }
}
