use crate::{
    app_lib::{AppConfig, BackendAddress},
    components::{Alert, AlertKind},
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;
use tracing::error;
use useradmin::{
    views::format::{parse_locale, TimestampFormatter},
    ApiClient, ConfigStore,
};

/// Handles shared by every page: the API client (and through it the config
/// store the login page edits), the reactive copy of that address and the
/// timestamp formatter.
#[derive(Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub backend: BackendAddress,
    pub formatter: TimestampFormatter,
}

impl AppContext {
    fn from_config(config: AppConfig) -> Result<Self, useradmin::AppError> {
        let formatter = parse_locale(&config.locale)
            .map(TimestampFormatter::new)
            .unwrap_or_default();
        let store = ConfigStore::new(config.api_base_url);
        let client = ApiClient::new(store.clone())?;
        Ok(Self {
            client,
            backend: BackendAddress::new(store),
            formatter,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ConfigStore {
        self.client.config()
    }
}

/// Returns the context provided by [`App`].
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

#[component]
pub fn App() -> impl IntoView {
    match AppContext::from_config(AppConfig::load()) {
        Ok(context) => {
            provide_context(context);
            view! {
                <Router>
                    <AppRoutes />
                </Router>
            }
            .into_any()
        }
        Err(err) => {
            error!("failed to start: {err}");
            view! {
                <div class="container mx-auto p-4 mt-6">
                    <Alert kind=AlertKind::Error message=err.to_string() />
                </div>
            }
            .into_any()
        }
    }
}
