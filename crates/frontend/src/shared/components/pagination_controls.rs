use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-indexed. The page size is fixed, so the strip renders prev/next
/// plus a numbered button per page; the empty collection shows a single
/// disabled page.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (at least 1)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                let total = total_pages.get().max(1);
                (1..=total).map(|page| {
                    view! {
                        <button
                            class="pagination-btn pagination-btn--number"
                            class:pagination-btn--active=move || page == current
                            disabled=move || page == current
                            on:click=move |_| on_page_change.run(page)
                        >
                            {page.to_string()}
                        </button>
                    }
                }).collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
