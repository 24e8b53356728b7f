pub mod view_model;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toasts;
use view_model::CategoryListViewModel;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let vm = CategoryListViewModel::new(use_toasts());

    let items = vm.items;
    let editor = vm.editor;
    let prefill = vm.prefill;
    let cat_id = vm.cat_id;

    // Route param changes do not remount the component, so the parent id is
    // tracked through an effect.
    let params = use_params_map();
    {
        let vm = vm.clone();
        Effect::new(move |_| {
            let id = params.read().get("id");
            if id != vm.cat_id.get_untracked() {
                vm.switch_category(id);
            }
        });
    }

    let vm_add = vm.clone();
    let vm_refresh = vm.clone();
    let vm_rows = vm.clone();
    let vm_modal = vm.clone();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || match cat_id.get() {
                            Some(id) => format!("Категория {}", id),
                            None => "Категории".to_string(),
                        }}
                    </h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| vm_add.open_for_create()
                        disabled=move || cat_id.get().is_none()
                    >
                        {icon("plus")}
                        {"Добавить"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| vm_refresh.load()
                        disabled=move || cat_id.get().is_none()
                    >
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                    <span class="toolbar__badge" title="Всего записей">
                        {move || items.get().len()}
                    </span>
                </div>
            </div>

            <Show
                when=move || cat_id.get().is_some()
                fallback=|| view! {
                    <div class="empty-state">
                        <p>"Родительская категория не выбрана."</p>
                        <A href="/products">"Выбрать на экране товаров"</A>
                    </div>
                }
            >
                <div class="cards-row">
                    {
                        let vm_rows = vm_rows.clone();
                        move || items.get().into_iter().map(|el| {
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
                                        </div>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                </div>
            </Show>

            <Show when=move || editor.get().is_open()>
                {
                    let vm = vm_modal.clone();
                    move || {
                        let cat = cat_id.get_untracked().unwrap_or_default();
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
                                title="Карточка категории".to_string()
                                on_close=Callback::new(move |_| vm_close.close_editor())
                            >
                                <CategoryDetails
                                    cat_id=cat
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
