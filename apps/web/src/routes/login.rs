//! Login form plus the backend address field. The address is written to the
//! shared config store on every keystroke, so the next request from any page
//! goes to the new backend. A successful login only navigates; no session is
//! kept.

use crate::{
    app::use_app,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::hooks::use_navigate;
use useradmin::views::{LoginState, LoginView};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let navigate = use_navigate();
    let backend = app.backend.clone();
    let view_state = RwSignal::new(LoginView::new(app.config().clone()));
    let initial_address = view_state.with_untracked(LoginView::base_url);

    let submitting = Signal::derive(move || {
        view_state.with(|view| *view.state() == LoginState::Submitting)
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let Some(request) = view_state.try_update(LoginView::submit).flatten() else {
            return;
        };
        let client = app.client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = client.login(&request).await;
            if let Some(route) = view_state.try_update(|view| view.finish(result)).flatten() {
                navigate(&route.path(), Default::default());
            }
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="base-url">
                        "Backend address"
                    </label>
                    <input
                        id="base-url"
                        type="text"
                        class=INPUT_CLASS
                        value=initial_address
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            view_state.update(|view| view.set_base_url(value));
                            backend.refresh();
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class=INPUT_CLASS
                        autocomplete="username"
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            view_state.update(|view| view.set_username(value));
                        }
                    />
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="current-password"
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            view_state.update(|view| view.set_password(value.into()));
                        }
                    />
                </div>
                <Button button_type="submit" disabled=submitting>
                    "Login"
                </Button>
                {move || {
                    submitting
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    view_state
                        .with(|view| match view.state() {
                            LoginState::Failed { error } => Some((AlertKind::Error, error.clone())),
                            LoginState::Succeeded { message } => {
                                Some((AlertKind::Success, message.clone()))
                            }
                            LoginState::Editing | LoginState::Submitting => None,
                        })
                        .map(|(kind, message)| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=kind message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
