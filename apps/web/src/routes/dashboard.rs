//! Users table. The list is fetched once when the page mounts; a failed fetch
//! is logged and the table stays empty.

use crate::{
    app::use_app,
    components::{AppShell, Button, ButtonVariant, Spinner},
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use useradmin::views::{
    dashboard::{LoadState, COLUMNS},
    DashboardView, TableRow,
};

const CELL_CLASS: &str = "px-4 py-3 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app = use_app();
    let dashboard = RwSignal::new(DashboardView::new());

    if dashboard.try_update(DashboardView::begin_load).unwrap_or(false) {
        let client = app.client.clone();
        spawn_local(async move {
            let result = client.list_users().await;
            dashboard.update(|view| view.finish_load(result));
        });
    }

    let on_toggle = Callback::new(move |uid: String| {
        let Some(request) = dashboard
            .try_update(|view| view.begin_toggle(&uid))
            .flatten()
        else {
            return;
        };
        let client = app.client.clone();
        spawn_local(async move {
            let result = client.update_disable(&request.uid, request.value).await;
            dashboard.update(|view| view.finish_toggle(&request.uid, result));
        });
    });

    view! {
        <AppShell>
            <div class="space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Users"</h1>
                {move || {
                    (dashboard.with(DashboardView::state) == LoadState::Loading)
                        .then_some(view! { <Spinner label="Loading..." /> })
                }}
                <div class="overflow-x-auto bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                    <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                        <thead class="bg-gray-50 dark:bg-gray-900/50">
                            <tr>
                                {COLUMNS
                                    .iter()
                                    .map(|header| {
                                        view! {
                                            <th
                                                scope="col"
                                                class="px-4 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider"
                                            >
                                                {*header}
                                            </th>
                                        }
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                            <For
                                each=move || dashboard.with(DashboardView::table)
                                key=|row| (row.uid.clone(), row.toggle_label, row.toggle_pending, row.error.clone())
                                children=move |row| view! { <UserTableRow row=row on_toggle=on_toggle /> }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </AppShell>
    }
}

#[component]
fn UserTableRow(row: TableRow, on_toggle: Callback<String>) -> impl IntoView {
    let uid = row.uid.clone();
    let variant = if row.toggle_label == "Disable" {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Secondary
    };

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class=CELL_CLASS>{row.uid}</td>
            <td class=CELL_CLASS>{row.user_type}</td>
            <td class=CELL_CLASS>{row.created}</td>
            <td class=CELL_CLASS>{row.last_entry}</td>
            <td class=CELL_CLASS>{row.password}</td>
            <td class=CELL_CLASS>
                <Button
                    variant=variant
                    disabled=row.toggle_pending
                    on_click=move |()| on_toggle.run(uid.clone())
                >
                    {row.toggle_label}
                </Button>
                {row
                    .error
                    .map(|error| view! { <p class="mt-1 text-xs text-red-600" role="alert">{error}</p> })}
            </td>
            <td class=CELL_CLASS>{row.first_name}</td>
            <td class=CELL_CLASS>{row.last_name}</td>
            <td class=CELL_CLASS>{row.username}</td>
            <td class=CELL_CLASS>{row.companies}</td>
            <td class=CELL_CLASS>
                <A
                    href=row.details_path
                    {..}
                    class="text-blue-600 hover:text-blue-800 dark:text-blue-400 dark:hover:text-blue-300"
                >
                    "Details"
                </A>
            </td>
        </tr>
    }
}
