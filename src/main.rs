// Custom Mods
mod components;
mod config;
mod logging;
mod requests;

#[cfg(test)]
mod tests;

use components::context::AppState;
use components::routes::Route;
use components::settings::Settings;
use config::ServerConfig;

// Yew Imports
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen p-8">
            <div class="flex flex-col items-center text-center max-w-md space-y-6">
                <div class="flex items-center gap-4 mb-4">
                    <i class="ph ph-warning-circle text-8xl item_container-text opacity-80" />
                    <span class="text-8xl font-bold item_container-text opacity-80">{"404"}</span>
                </div>

                <h1 class="text-3xl font-bold item_container-text">
                    {"Page Not Found"}
                </h1>

                <Link<Route> to={Route::LunaSea} classes="flex items-center gap-2 px-6 py-3 mt-4 rounded-lg item_container-text border-2 border-current hover:opacity-80 text-lg font-medium">
                    <i class="ph ph-bell text-xl" />
                    {"Back to notification settings"}
                </Link<Route>>
            </div>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::LunaSea} /> },
        Route::LunaSea => html! { <Settings /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(Main)]
fn main_component() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    use_effect_with((), move |_| {
        let config = ServerConfig::load();
        log::debug!("Using settings backend at '{}'", config.server_name);
        dispatch.reduce_mut(|state| state.server_details = Some(config));
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logging::init(level);
    yew::Renderer::<Main>::new().render();
}
