pub mod view_model;

use leptos::prelude::*;

use crate::domain::a001_product::query::SortKey;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_paging::{page_slice, total_pages};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use view_model::ProductListViewModel;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let vm = ProductListViewModel::new(use_toasts());
    vm.load();

    let items = vm.items;
    let query = vm.query;
    let editor = vm.editor;
    let prefill = vm.prefill;

    let displayed = move || {
        let q = query.get();
        page_slice(&items.get(), q.page, q.limit).to_vec()
    };
    let pages = Signal::derive(move || total_pages(items.get().len(), query.get().limit));
    let current_page = Signal::derive(move || query.get().page);

    let vm_search = vm.clone();
    let vm_sort = vm.clone();
    let vm_page = vm.clone();
    let vm_add = vm.clone();
    let vm_refresh = vm.clone();
    let vm_rows = vm.clone();
    let vm_modal = vm.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Товары"}</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| vm_add.open_for_create()>
                        {icon("plus")}
                        {"Добавить"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| vm_refresh.load()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div class="toolbar">
                <SearchInput
                    value=Signal::derive(move || query.get().search)
                    on_change=Callback::new(move |s| vm_search.set_search(s))
                    placeholder="Поиск по товарам..."
                />
                <span class="toolbar__badge" title="Всего записей">
                    {move || items.get().len()}
                </span>
                <select
                    class="toolbar__sort"
                    on:change=move |ev| vm_sort.set_sort(SortKey::from_label(&event_target_value(&ev)))
                    prop:value=move || query.get().sort.label().to_string()
                >
                    {SortKey::ALL.into_iter().map(|key| {
                        let label = key.label();
                        view! {
                            <option value={label} selected=move || query.get().sort == key>
                                {label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>

            <div class="cards-row">
                {move || displayed().into_iter().map(|el| {
                    let id_edit = el.id.clone();
                    let id_delete = el.id.clone();
                    let vm_edit = vm_rows.clone();
                    let vm_delete = vm_rows.clone();
                    view! {
                        <div class="card">
                            <img src=el.image.clone() class="card__image" alt=el.name.clone() />
                            <div class="card__body">
                                <h5 class="card__title">{el.name.clone()}</h5>
                                <p class="card__email">{el.email.clone()}</p>
                                <p class="card__price">{"Цена: "}{el.price.clone()}</p>
                                <div class="card__actions">
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| vm_edit.open_for_edit(id_edit.clone())
                                    >
                                        {icon("edit")}
                                        {"Изменить"}
                                    </button>
                                    <button
                                        class="button button--danger"
                                        on:click=move |_| vm_delete.delete(id_delete.clone())
                                    >
                                        {icon("delete")}
                                        {"Удалить"}
                                    </button>
                                    // Router перехватывает клики по same-origin ссылкам,
                                    // поэтому обычный <a> даёт клиентскую навигацию.
                                    <a class="button button--link" href=format!("/categories/{}", el.id)>
                                        {icon("link")}
                                        {"Вложенные"}
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=pages
                on_page_change=Callback::new(move |page| vm_page.set_page(page))
            />

            <Show when=move || editor.get().is_open()>
                {
                    let vm = vm_modal.clone();
                    move || {
                        let vm_close = vm.clone();
                        let vm_saved = vm.clone();
                        let vm_cancel = vm.clone();
                        let on_saved = Callback::new(move |_| {
                            vm_saved.close_editor();
                            vm_saved.load();
                        });
                        let on_cancel = Callback::new(move |_| vm_cancel.close_editor());
                        view! {
                            <Modal
                                title="Карточка товара".to_string()
                                on_close=Callback::new(move |_| vm_close.close_editor())
                            >
                                <ProductDetails
                                    initial=prefill.get_untracked()
                                    on_saved=on_saved
                                    on_cancel=on_cancel
                                />
                            </Modal>
                        }
                    }
                }
            </Show>
        </div>
    }
}
