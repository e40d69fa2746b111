//! Frontend utilities: runtime configuration, build metadata, the reactive
//! backend address and browser logging. Configuration values are public; do
//! not store secrets here.

pub(crate) mod backend;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod telemetry;

pub(crate) use backend::BackendAddress;
pub(crate) use config::AppConfig;
