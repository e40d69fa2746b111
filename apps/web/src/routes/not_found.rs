use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;
use useradmin::router::paths;

/// Fallback for paths outside the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
                <h1 class="text-6xl font-black text-gray-200 dark:text-gray-700 select-none">
                    "404"
                </h1>
                <p class="text-gray-500 dark:text-gray-400">"Page not found"</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href=paths::DASHBOARD
                        {..}
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                    >
                        "Dashboard"
                    </A>
                    <button
                        on:click=move |_| {
                            if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
                                let _ = history.back();
                            }
                        }
                        class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:bg-gray-700"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
