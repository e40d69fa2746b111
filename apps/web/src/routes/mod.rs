mod dashboard;
mod login;
mod not_found;
mod user_detail;

pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use user_detail::UserDetailPage;

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::path;
use useradmin::router::paths;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=|| view! { <Redirect path=paths::LOGIN /> } />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/UserDetail/:uid") view=UserDetailPage />
        </Routes>
    }
}
