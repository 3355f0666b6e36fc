use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use yew::Reducible;

use super::error::SettingsError;
use crate::requests::notification_types::NotificationTypes;
use crate::requests::setting_reqs::{LunaSeaOptions, LunaSeaSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Enabled,
    AccessToken,
    Profile,
    IsDeviceToken,
    JsonPayload,
    Types,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Enabled,
        Field::AccessToken,
        Field::Profile,
        Field::IsDeviceToken,
        Field::JsonPayload,
        Field::Types,
    ];

    /// Wire name, also used as the input's DOM id.
    pub fn name(self) -> &'static str {
        match self {
            Field::Enabled => "enabled",
            Field::AccessToken => "accessToken",
            Field::Profile => "profile",
            Field::IsDeviceToken => "isDeviceToken",
            Field::JsonPayload => "jsonPayload",
            Field::Types => "types",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

/// The editable copy of the settings resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    pub enabled: bool,
    pub types: NotificationTypes,
    pub access_token: String,
    pub profile: String,
    pub is_device_token: bool,
    pub json_payload: Option<String>,
}

impl From<LunaSeaSettings> for FormValues {
    fn from(settings: LunaSeaSettings) -> Self {
        FormValues {
            enabled: settings.enabled,
            types: settings.types,
            access_token: settings.options.access_token,
            profile: settings.options.profile,
            is_device_token: settings.options.is_device_token,
            json_payload: settings.options.json_payload,
        }
    }
}

impl FormValues {
    pub fn to_settings(&self) -> LunaSeaSettings {
        LunaSeaSettings {
            enabled: self.enabled,
            types: self.types,
            options: LunaSeaOptions {
                access_token: self.access_token.clone(),
                profile: self.profile.clone(),
                is_device_token: self.is_device_token,
                json_payload: self.json_payload.clone(),
            },
        }
    }

    /// The body for a test send. A test always exercises the enabled path,
    /// whatever the toggle currently says.
    pub fn to_test_payload(&self) -> LunaSeaSettings {
        LunaSeaSettings {
            enabled: true,
            ..self.to_settings()
        }
    }
}

/// Field-level validation. An empty map means the values are submittable.
pub fn validate(values: &FormValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if values.access_token.trim().is_empty() {
        errors.insert(
            Field::AccessToken,
            SettingsError::MissingAccessToken.to_string(),
        );
    }
    errors
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    ToggleEnabled,
    ToggleDeviceToken,
    SetAccessToken(String),
    SetProfile(String),
    SetJsonPayload(String),
    SetTypes(NotificationTypes),
    TouchAll,
    SubmitStarted,
    SubmitFinished,
    TestStarted,
    TestFinished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub touched: BTreeSet<Field>,
    pub submitting: bool,
    pub testing: bool,
}

impl FormState {
    pub fn new(values: FormValues) -> Self {
        FormState {
            errors: validate(&values),
            values,
            touched: BTreeSet::new(),
            submitting: false,
            testing: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.submitting || self.testing
    }

    /// Whether Save and Test are enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.is_valid()
    }

    /// The error to render under a field; hidden until the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    pub fn apply(&mut self, action: FormAction) {
        let edited = match action {
            FormAction::ToggleEnabled => {
                self.values.enabled = !self.values.enabled;
                Some(Field::Enabled)
            }
            FormAction::ToggleDeviceToken => {
                self.values.is_device_token = !self.values.is_device_token;
                Some(Field::IsDeviceToken)
            }
            FormAction::SetAccessToken(token) => {
                self.values.access_token = token;
                Some(Field::AccessToken)
            }
            FormAction::SetProfile(profile) => {
                self.values.profile = profile;
                Some(Field::Profile)
            }
            FormAction::SetJsonPayload(payload) => {
                self.values.json_payload = Some(payload);
                Some(Field::JsonPayload)
            }
            FormAction::SetTypes(types) => {
                self.values.types = types;
                Some(Field::Types)
            }
            FormAction::TouchAll => {
                self.touched.extend(Field::ALL);
                None
            }
            FormAction::SubmitStarted => {
                self.touched.extend(Field::ALL);
                self.submitting = true;
                None
            }
            FormAction::SubmitFinished => {
                self.submitting = false;
                None
            }
            FormAction::TestStarted => {
                self.testing = true;
                None
            }
            FormAction::TestFinished => {
                self.testing = false;
                None
            }
        };

        if let Some(field) = edited {
            self.touched.insert(field);
            self.errors = validate(&self.values);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    LoadError(String),
    Ready(FormState),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    /// A fresh initial read is starting, e.g. against a different server.
    Reload,
    Loaded(LunaSeaSettings),
    LoadFailed(String),
    Form(FormAction),
}

/// Lifecycle of the LunaSea settings panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub phase: Phase,
}

impl Default for PanelState {
    fn default() -> Self {
        PanelState {
            phase: Phase::Loading,
        }
    }
}

impl PanelState {
    pub fn form(&self) -> Option<&FormState> {
        match &self.phase {
            Phase::Ready(form) => Some(form),
            _ => None,
        }
    }

    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::Reload => self.phase = Phase::Loading,
            PanelAction::Loaded(settings) => {
                // A read while Ready is a resync: server truth replaces the
                // values, in-flight flags carry over.
                let mut next = FormState::new(settings.into());
                if let Phase::Ready(current) = &self.phase {
                    next.submitting = current.submitting;
                    next.testing = current.testing;
                }
                self.phase = Phase::Ready(next);
            }
            PanelAction::LoadFailed(reason) => {
                if self.phase == Phase::Loading {
                    self.phase = Phase::LoadError(reason);
                }
            }
            PanelAction::Form(action) => {
                if let Phase::Ready(form) = &mut self.phase {
                    form.apply(action);
                }
            }
        }
    }
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}
