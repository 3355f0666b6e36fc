pub mod notification_types;
pub mod setting_reqs;
