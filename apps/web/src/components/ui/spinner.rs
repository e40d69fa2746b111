use leptos::prelude::*;

/// Loading indicator. The optional label is shown next to the wheel.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let aria_label = label.clone().unwrap_or_else(|| "Loading".to_string());

    view! {
        <div class="inline-flex items-center gap-3" role="status" aria-live="polite">
            <div
                class="h-6 w-6 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                aria-label=aria_label
            ></div>
            {label.map(|text| view! { <span class="text-sm text-gray-500 dark:text-gray-400">{text}</span> })}
        </div>
    }
}
