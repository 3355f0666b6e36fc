// src/tests/mod.rs
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::task::Poll;

use anyhow::Error;
use futures::executor::block_on;
use futures::future::poll_fn;
use yew::Callback;
use yew_router::Routable;

use crate::components::routes::Route;
use crate::components::setting_components::lunasea::controller::{
    LunaSeaController, MountGuard, Reporter, ToastKind,
};
use crate::components::setting_components::lunasea::form::{
    FormAction, FormState, PanelAction, PanelState,
};
use crate::components::setting_components::lunasea::messages;
use crate::requests::notification_types::{NotificationType, NotificationTypes};
use crate::requests::setting_reqs::{LunaSeaOptions, LunaSeaSettings, SettingsStore};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Fetch,
    Save(LunaSeaSettings),
    Test(LunaSeaSettings),
}

pub(crate) fn settings_with_token(token: &str) -> LunaSeaSettings {
    LunaSeaSettings {
        enabled: false,
        types: NotificationTypes::empty(),
        options: LunaSeaOptions {
            access_token: token.to_string(),
            profile: String::new(),
            is_device_token: false,
            json_payload: None,
        },
    }
}

/// Scripted store that records every request and what the panel looked
/// like while the request was outstanding.
pub(crate) struct FakeStore {
    calls: Rc<RefCell<Vec<Call>>>,
    state: Rc<RefCell<PanelState>>,
    fetches: RefCell<VecDeque<Result<LunaSeaSettings, String>>>,
    save_result: Rc<RefCell<Result<(), String>>>,
    test_result: Rc<RefCell<Result<(), String>>>,
    in_flight: Rc<RefCell<Vec<Option<FormState>>>>,
    unmount_on_save: Rc<RefCell<Option<MountGuard>>>,
    suspend: Rc<Cell<bool>>,
}

/// Returns `Pending` once so other futures on the same executor get polled
/// while the request is outstanding.
async fn yield_once() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await
}

impl FakeStore {
    async fn observe(&self) {
        self.in_flight
            .borrow_mut()
            .push(self.state.borrow().form().cloned());
        if self.suspend.get() {
            yield_once().await;
        }
    }
}

impl SettingsStore for FakeStore {
    async fn fetch(&self) -> Result<LunaSeaSettings, Error> {
        self.calls.borrow_mut().push(Call::Fetch);
        self.fetches
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted fetch".to_string()))
            .map_err(Error::msg)
    }

    async fn save(&self, settings: &LunaSeaSettings) -> Result<(), Error> {
        self.calls.borrow_mut().push(Call::Save(settings.clone()));
        self.observe().await;
        drop(self.unmount_on_save.borrow_mut().take());
        self.save_result.borrow().clone().map_err(Error::msg)
    }

    async fn test(&self, settings: &LunaSeaSettings) -> Result<(), Error> {
        self.calls.borrow_mut().push(Call::Test(settings.clone()));
        self.observe().await;
        self.test_result.borrow().clone().map_err(Error::msg)
    }
}

pub(crate) struct RecordingReporter(Rc<RefCell<Vec<(ToastKind, String)>>>);

impl Reporter for RecordingReporter {
    fn report(&self, kind: ToastKind, message: String) {
        self.0.borrow_mut().push((kind, message));
    }
}

/// A controller wired to fakes, with the panel reducer applied in place
/// of the component's `use_reducer` handle.
pub(crate) struct Harness {
    pub controller: LunaSeaController<FakeStore, RecordingReporter>,
    calls: Rc<RefCell<Vec<Call>>>,
    state: Rc<RefCell<PanelState>>,
    toasts: Rc<RefCell<Vec<(ToastKind, String)>>>,
    save_result: Rc<RefCell<Result<(), String>>>,
    test_result: Rc<RefCell<Result<(), String>>>,
    in_flight: Rc<RefCell<Vec<Option<FormState>>>>,
    unmount_on_save: Rc<RefCell<Option<MountGuard>>>,
    suspend: Rc<Cell<bool>>,
}

impl Harness {
    pub fn new(fetches: Vec<Result<LunaSeaSettings, String>>) -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let state = Rc::new(RefCell::new(PanelState::default()));
        let toasts = Rc::new(RefCell::new(Vec::new()));
        let save_result = Rc::new(RefCell::new(Ok(())));
        let test_result = Rc::new(RefCell::new(Ok(())));
        let in_flight = Rc::new(RefCell::new(Vec::new()));
        let unmount_on_save = Rc::new(RefCell::new(None));
        let suspend = Rc::new(Cell::new(false));

        let store = FakeStore {
            calls: calls.clone(),
            state: state.clone(),
            fetches: RefCell::new(fetches.into()),
            save_result: save_result.clone(),
            test_result: test_result.clone(),
            in_flight: in_flight.clone(),
            unmount_on_save: unmount_on_save.clone(),
            suspend: suspend.clone(),
        };
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: PanelAction| state.borrow_mut().apply(action))
        };
        let controller =
            LunaSeaController::new(store, RecordingReporter(toasts.clone()), dispatch);

        Harness {
            controller,
            calls,
            state,
            toasts,
            save_result,
            test_result,
            in_flight,
            unmount_on_save,
            suspend,
        }
    }

    pub fn edit(&self, action: FormAction) {
        self.state.borrow_mut().apply(PanelAction::Form(action));
    }

    pub fn form(&self) -> FormState {
        self.state
            .borrow()
            .form()
            .cloned()
            .expect("panel should be ready")
    }

    pub fn state(&self) -> PanelState {
        self.state.borrow().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toasts.borrow().clone()
    }

    pub fn in_flight(&self) -> Vec<Option<FormState>> {
        self.in_flight.borrow().clone()
    }

    pub fn fail_saves(&self, reason: &str) {
        *self.save_result.borrow_mut() = Err(reason.to_string());
    }

    pub fn fail_tests(&self, reason: &str) {
        *self.test_result.borrow_mut() = Err(reason.to_string());
    }

    pub fn unmount_during_save(&self, guard: MountGuard) {
        *self.unmount_on_save.borrow_mut() = Some(guard);
    }

    /// Makes saves and tests stay pending for one poll.
    pub fn suspend_requests(&self) {
        self.suspend.set(true);
    }
}

#[test]
fn test_routes_resolve_panel_path() {
    assert!(matches!(
        Route::recognize("/settings/notifications/lunasea"),
        Some(Route::LunaSea)
    ));
    assert!(matches!(Route::recognize("/"), Some(Route::Home)));
    assert_eq!(Route::LunaSea.to_path(), "/settings/notifications/lunasea");
}

#[test]
fn test_save_flow_with_empty_initial_token() {
    let mut after_save = settings_with_token("tok123");
    after_save.options.profile = "server side".to_string();
    let harness = Harness::new(vec![Ok(settings_with_token("")), Ok(after_save.clone())]);

    block_on(harness.controller.load());
    assert!(!harness.form().can_submit());

    harness.edit(FormAction::SetAccessToken("tok123".to_string()));
    assert!(harness.form().can_submit());

    block_on(harness.controller.save(&harness.form()));

    assert_eq!(
        harness.calls(),
        vec![
            Call::Fetch,
            Call::Save(settings_with_token("tok123")),
            Call::Fetch,
        ]
    );
    assert_eq!(
        harness.toasts(),
        vec![(ToastKind::Success, messages::SETTINGS_SAVED.to_string())]
    );
    let form = harness.form();
    assert_eq!(form.values.profile, "server side");
    assert!(form.can_submit());
}

#[test]
fn test_failed_save_still_resyncs() {
    let harness = Harness::new(vec![
        Ok(settings_with_token("")),
        Ok(settings_with_token("")),
    ]);
    harness.fail_saves("Network error: connection refused");

    block_on(harness.controller.load());
    harness.edit(FormAction::SetAccessToken("tok123".to_string()));
    block_on(harness.controller.save(&harness.form()));

    assert_eq!(
        harness.calls(),
        vec![
            Call::Fetch,
            Call::Save(settings_with_token("tok123")),
            Call::Fetch,
        ]
    );
    let toasts = harness.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].0, ToastKind::Error);
    assert!(toasts[0].1.contains("connection refused"), "{}", toasts[0].1);

    // The resync brought back the server's (still empty) token.
    assert!(!harness.form().can_submit());
    assert!(!harness.form().submitting);
}

#[test]
fn test_save_and_test_disabled_while_outstanding() {
    let harness = Harness::new(vec![
        Ok(settings_with_token("tok")),
        Ok(settings_with_token("tok")),
    ]);
    block_on(harness.controller.load());

    block_on(harness.controller.save(&harness.form()));
    block_on(harness.controller.test(&harness.form()));

    let observed = harness.in_flight();
    assert_eq!(observed.len(), 2);
    for form in observed {
        let form = form.expect("panel should stay ready during requests");
        assert!(form.is_busy());
        assert!(!form.can_submit());
    }
    assert!(harness.form().can_submit());
}

#[test]
fn test_sends_enabled_true_without_touching_form() {
    let mut loaded = settings_with_token("tok");
    loaded.types = NotificationTypes::empty().with(NotificationType::MediaAvailable);
    let harness = Harness::new(vec![Ok(loaded.clone())]);
    block_on(harness.controller.load());
    assert!(!harness.form().values.enabled);

    block_on(harness.controller.test(&harness.form()));

    let mut expected = loaded;
    expected.enabled = true;
    assert_eq!(harness.calls(), vec![Call::Fetch, Call::Test(expected)]);
    assert!(!harness.form().values.enabled);
    assert_eq!(
        harness.toasts(),
        vec![(ToastKind::Info, messages::TEST_SENT.to_string())]
    );
}

#[test]
fn test_test_failure_is_reported() {
    let harness = Harness::new(vec![Ok(settings_with_token("tok"))]);
    harness.fail_tests(r#"{"message":"Failed to send notification"}"#);
    block_on(harness.controller.load());

    block_on(harness.controller.test(&harness.form()));

    assert_eq!(
        harness.toasts(),
        vec![(
            ToastKind::Error,
            "LunaSea test notification failed to send: Failed to send notification".to_string()
        )]
    );
    assert!(!harness.form().testing);
    assert_eq!(harness.calls().len(), 2);
}

#[test]
fn test_test_with_blank_token_never_hits_network() {
    let harness = Harness::new(vec![Ok(settings_with_token("  "))]);
    block_on(harness.controller.load());

    block_on(harness.controller.test(&harness.form()));

    assert_eq!(harness.calls(), vec![Call::Fetch]);
    assert!(harness.toasts().is_empty());
}

#[test]
fn test_selector_replaces_previous_selection() {
    let mut loaded = settings_with_token("tok");
    loaded.types = NotificationTypes::empty().with(NotificationType::MediaDeclined);
    let harness = Harness::new(vec![Ok(loaded), Ok(settings_with_token("tok"))]);
    block_on(harness.controller.load());

    let chosen: NotificationTypes = [
        NotificationType::MediaPending,
        NotificationType::MediaAvailable,
    ]
    .into_iter()
    .collect();
    harness.edit(FormAction::SetTypes(chosen));

    assert_eq!(harness.form().values.types, chosen);
    block_on(harness.controller.save(&harness.form()));
    match &harness.calls()[1] {
        Call::Save(body) => {
            assert_eq!(body.types, chosen);
            assert!(!body.types.contains(NotificationType::MediaDeclined));
        }
        other => panic!("expected a save, got {:?}", other),
    }
}
