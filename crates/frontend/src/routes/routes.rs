use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

/// Client-side route table.
///
/// No route guard: screens are reachable without a session. The session
/// produced by the login screen lives in AuthService but nothing consumes
/// it yet (open requirements question, see DESIGN.md).
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/login" /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/products") view=ProductList />
                <Route path=path!("/categories") view=CategoryList />
                <Route path=path!("/categories/:id") view=CategoryList />
            </Routes>
        </Router>
    }
}
