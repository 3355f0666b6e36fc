use std::cell::Cell;
use std::rc::Rc;

use yew::Callback;

use super::error::SettingsError;
use super::form::{FormAction, FormState, PanelAction};
use super::messages;
use crate::components::gen_funcs::format_error_message;
use crate::requests::setting_reqs::SettingsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

/// Fire-and-forget transient messages.
pub trait Reporter {
    fn report(&self, kind: ToastKind, message: String);
}

/// Marks the panel unmounted when dropped. Completions that arrive after
/// that no longer touch panel state.
pub struct MountGuard {
    mounted: Rc<Cell<bool>>,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.mounted.set(false);
    }
}

/// Holds the controller's single request slot until dropped.
struct InFlight<'a>(&'a Cell<bool>);

impl<'a> InFlight<'a> {
    fn claim(slot: &'a Cell<bool>) -> Option<Self> {
        if slot.replace(true) {
            None
        } else {
            Some(InFlight(slot))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Drives reads, writes and test sends against the settings store and
/// feeds their outcomes back into the panel reducer.
pub struct LunaSeaController<S, R> {
    store: S,
    reporter: R,
    dispatch: Callback<PanelAction>,
    mounted: Rc<Cell<bool>>,
    in_flight: Cell<bool>,
}

impl<S: SettingsStore, R: Reporter> LunaSeaController<S, R> {
    pub fn new(store: S, reporter: R, dispatch: Callback<PanelAction>) -> Self {
        Self {
            store,
            reporter,
            dispatch,
            mounted: Rc::new(Cell::new(true)),
            in_flight: Cell::new(false),
        }
    }

    pub fn mount_guard(&self) -> MountGuard {
        MountGuard {
            mounted: self.mounted.clone(),
        }
    }

    fn emit(&self, action: PanelAction) {
        if self.mounted.get() {
            self.dispatch.emit(action);
        } else {
            log::debug!("LunaSea panel unmounted, dropping {:?}", action);
        }
    }

    /// Initial read. A failure here leaves the panel in its error phase.
    pub async fn load(&self) {
        self.emit(PanelAction::Reload);
        match self.store.fetch().await {
            Ok(settings) => {
                log::debug!("LunaSea settings loaded");
                self.emit(PanelAction::Loaded(settings));
            }
            Err(e) => {
                let error = SettingsError::LoadFailure(format_error_message(&e.to_string()));
                log::error!("{}", error);
                self.emit(PanelAction::LoadFailed(error.to_string()));
            }
        }
    }

    async fn resync(&self) {
        if !self.mounted.get() {
            log::debug!("LunaSea panel unmounted, skipping resync");
            return;
        }

        match self.store.fetch().await {
            Ok(settings) => self.emit(PanelAction::Loaded(settings)),
            Err(e) => log::warn!(
                "Could not refresh LunaSea settings after save: {}",
                format_error_message(&e.to_string())
            ),
        }
    }

    /// Persists the form values, then always re-reads the resource so the
    /// form shows what the server holds.
    pub async fn save(&self, form: &FormState) {
        if form.is_busy() {
            log::debug!("Save ignored, a request is already in flight");
            return;
        }
        if !form.is_valid() {
            self.emit(PanelAction::Form(FormAction::TouchAll));
            return;
        }
        let Some(slot) = InFlight::claim(&self.in_flight) else {
            log::debug!("Save ignored, a request is already in flight");
            return;
        };

        self.emit(PanelAction::Form(FormAction::SubmitStarted));

        let settings = form.values.to_settings();
        log::debug!("Saving LunaSea settings for types {:?}", settings.types);
        match self.store.save(&settings).await {
            Ok(()) => {
                log::info!("LunaSea settings saved");
                self.reporter
                    .report(ToastKind::Success, messages::SETTINGS_SAVED.to_string());
            }
            Err(e) => {
                let error = SettingsError::SaveFailure(format_error_message(&e.to_string()));
                log::error!("{}", error);
                self.reporter.report(ToastKind::Error, error.to_string());
            }
        }

        self.emit(PanelAction::Form(FormAction::SubmitFinished));
        drop(slot);
        self.resync().await;
    }

    /// Sends the current values to the test endpoint with `enabled` forced
    /// on. Nothing is persisted and no resync follows.
    pub async fn test(&self, form: &FormState) {
        if !form.can_submit() {
            log::debug!("Test ignored, form is busy or invalid");
            return;
        }
        let Some(_slot) = InFlight::claim(&self.in_flight) else {
            log::debug!("Test ignored, a request is already in flight");
            return;
        };

        self.emit(PanelAction::Form(FormAction::TestStarted));

        match self.store.test(&form.values.to_test_payload()).await {
            Ok(()) => {
                log::info!("LunaSea test notification sent");
                self.reporter
                    .report(ToastKind::Info, messages::TEST_SENT.to_string());
            }
            Err(e) => {
                let error = SettingsError::TestFailure(format_error_message(&e.to_string()));
                log::error!("{}", error);
                self.reporter.report(ToastKind::Error, error.to_string());
            }
        }

        self.emit(PanelAction::Form(FormAction::TestFinished));
    }
}
