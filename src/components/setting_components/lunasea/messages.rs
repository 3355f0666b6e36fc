pub const AGENT_ENABLED: &str = "Enable Agent";
pub const ACCESS_TOKEN: &str = "Access Token";
pub const PROFILE: &str = "Profile";
pub const IS_DEVICE_TOKEN: &str = "Send to Single Device";
pub const IS_DEVICE_TOKEN_TIP: &str =
    "Enable this option if you are using a device token for a single device";
pub const JSON_PAYLOAD: &str = "JSON Payload";
pub const JSON_PAYLOAD_TIP: &str = "Optional payload template, sent to LunaSea as-is";
pub const NOTIFICATION_TYPES: &str = "Notification Types";

pub const VERSION_REQUIREMENT_TITLE: &str = "LunaSea Version Requirement";
pub const VERSION_REQUIREMENT_DESCRIPTION: &str =
    "Notification support requires LunaSea v5.0.0 (or higher), which is currently in open beta testing.";

pub const SETTINGS_SAVED: &str = "LunaSea notification settings saved successfully!";
pub const TEST_SENT: &str = "Test notification sent!";
pub const ACCESS_TOKEN_REQUIRED: &str = "You must provide a user or device token";

pub const LOADING: &str = "Loading LunaSea settings...";
pub const TEST: &str = "Test";
pub const TESTING: &str = "Testing...";
pub const SAVE: &str = "Save Changes";
pub const SAVING: &str = "Saving...";
