use std::rc::Rc;

use yewdux::prelude::*;

use crate::components::setting_components::lunasea::controller::{Reporter, ToastKind};
use crate::config::ServerConfig;

#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub server_details: Option<ServerConfig>,
}

/// Snackbar messages shown by the settings shell.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct UIState {
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

pub enum UIStateMsg {
    ClearErrorMessage,
    ClearInfoMessage,
}

impl Reducer<UIState> for UIStateMsg {
    fn apply(self, mut state: Rc<UIState>) -> Rc<UIState> {
        let state = Rc::make_mut(&mut state);

        match self {
            UIStateMsg::ClearErrorMessage => {
                state.error_message = None;
            }
            UIStateMsg::ClearInfoMessage => {
                state.info_message = None;
            }
        }

        (*state).clone().into()
    }
}

impl Reporter for Dispatch<UIState> {
    fn report(&self, kind: ToastKind, message: String) {
        self.reduce_mut(|state| match kind {
            ToastKind::Error => state.error_message = Some(message),
            ToastKind::Success | ToastKind::Info => state.info_message = Some(message),
        });
    }
}
