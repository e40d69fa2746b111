//! Single-user page. The uid comes from the location path so that
//! percent-encoded ids round-trip exactly; the user is fetched again whenever
//! it changes.

use crate::{
    app::use_app,
    components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::hooks::use_location;
use useradmin::{
    router::Route,
    views::{detail::LOADING_MESSAGE, DetailField, DetailState, DetailView, FieldValue},
};

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let app = use_app();
    let location = use_location();
    let uid = Memo::new(move |_| match Route::parse(&location.pathname.get()) {
        Some(Route::UserDetail(uid)) => uid,
        _ => String::new(),
    });
    let detail = RwSignal::new(DetailView::new(uid.get_untracked(), app.formatter));

    let client = app.client.clone();
    let formatter = app.formatter;
    Effect::new(move |_| {
        let uid = uid.get();
        detail.set(DetailView::new(uid.clone(), formatter));
        let client = client.clone();
        spawn_local(async move {
            let result = client.get_user(&uid).await;
            detail.update(|view| {
                // A later navigation may have replaced the view.
                if view.uid() == uid {
                    view.finish_load(result);
                }
            });
        });
    });

    let client = app.client;
    let on_toggle = Callback::new(move |()| {
        let Some(request) = detail.try_update(DetailView::begin_toggle).flatten() else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let result = client.update_disable(&request.uid, request.value).await;
            detail.update(|view| {
                if view.uid() == request.uid {
                    view.finish_toggle(result);
                }
            });
        });
    });

    view! {
        <AppShell>
            <div class="block rounded-lg border border-neutral-200 bg-white p-6 dark:border-neutral-300 dark:bg-neutral-600 space-y-4">
                <h1 class="text-lg font-semibold text-gray-900 dark:text-white">"User Detail"</h1>
                {move || {
                    detail
                        .with(|view| match view.state() {
                            DetailState::Loading => {
                                view! { <Spinner label=LOADING_MESSAGE /> }.into_any()
                            }
                            DetailState::NotFound => {
                                let message = view.status_message().unwrap_or_default().to_string();
                                view! { <Alert kind=AlertKind::Info message=message /> }.into_any()
                            }
                            DetailState::Error(message) => {
                                view! { <Alert kind=AlertKind::Error message=message.clone() /> }
                                    .into_any()
                            }
                            DetailState::Ready(_) => {
                                let fields = view.fields();
                                let toggle_error = view.toggle_error().map(ToString::to_string);
                                view! {
                                    <dl class="space-y-4">
                                        {fields
                                            .into_iter()
                                            .map(|field| view! { <FieldRow field=field on_toggle=on_toggle /> })
                                            .collect_view()}
                                    </dl>
                                    {toggle_error
                                        .map(|error| view! { <Alert kind=AlertKind::Error message=error /> })}
                                }
                                .into_any()
                            }
                        })
                }}
            </div>
        </AppShell>
    }
}

#[component]
fn FieldRow(field: DetailField, on_toggle: Callback<()>) -> impl IntoView {
    let value = match field.value {
        FieldValue::Text(text) => view! { <span>{text}</span> }.into_any(),
        FieldValue::Toggle { label, pending } => {
            let variant = if label == "Disable" {
                ButtonVariant::Danger
            } else {
                ButtonVariant::Secondary
            };
            view! {
                <Button variant=variant disabled=pending on_click=on_toggle>
                    {label}
                </Button>
            }
            .into_any()
        }
    };

    view! {
        <div data-field=field.key>
            <dt class="block text-sm font-medium text-gray-500 dark:text-gray-200">
                {field.label}
            </dt>
            <dd class="text-gray-900 dark:text-white">{value}</dd>
        </div>
    }
}
