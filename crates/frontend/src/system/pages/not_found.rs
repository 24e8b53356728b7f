use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1>"Страница не найдена"</h1>
            <A href="/products">"К списку товаров"</A>
        </div>
    }
}
