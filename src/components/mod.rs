// In components/mod.rs
pub(crate) mod context;
pub mod gen_funcs;
pub(crate) mod notification_type_selector;
pub(crate) mod routes;
pub(crate) mod settings;

pub mod setting_components;
