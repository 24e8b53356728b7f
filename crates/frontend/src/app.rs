use std::sync::Arc;

use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthService;
use crate::system::auth::strategy::StaticAuthenticator;

#[component]
pub fn App() -> impl IntoView {
    // Provide ToastService for transient error notifications
    provide_context(ToastService::new());

    // Composition root is the only place that knows the expected credential
    // pair; the login screen talks to the strategy through AuthService.
    provide_context(AuthService::new(Arc::new(StaticAuthenticator::new(
        "abbasovr455@gmail.com",
        "rustam2005",
    ))));

    view! {
        <ToastHost />
        <AppRoutes />
    }
}
