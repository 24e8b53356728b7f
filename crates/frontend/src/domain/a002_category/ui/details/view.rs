use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_product::aggregate::ProductDto;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    cat_id: String,
    initial: ProductDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(cat_id, initial, use_toasts());

    let vm_clone = vm.clone();

    view! {
        <div class="details-container category-details">
            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Название"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                                vm.errors.update(|e| e.name = None);
                            }
                        }
                        placeholder="Введите название"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().name.map(|e| view! { <p class="field-error">{e}</p> })
                    }
                </div>

                <div class="form-group">
                    <label for="email">{"E-mail"}</label>
                    <input
                        type="email"
                        id="email"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().email
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.email = event_target_value(&ev));
                                vm.errors.update(|e| e.email = None);
                            }
                        }
                        placeholder="Контактный e-mail"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().email.map(|e| view! { <p class="field-error">{e}</p> })
                    }
                </div>

                <div class="form-group">
                    <label for="price">{"Цена"}</label>
                    <input
                        type="text"
                        id="price"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().price
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.price = event_target_value(&ev));
                                vm.errors.update(|e| e.price = None);
                            }
                        }
                        placeholder="0"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().price.map(|e| view! { <p class="field-error">{e}</p> })
                    }
                </div>

                <div class="form-group">
                    <label for="image">{"Изображение (URL)"}</label>
                    <input
                        type="text"
                        id="image"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().image
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.image = event_target_value(&ev));
                                vm.errors.update(|e| e.image = None);
                            }
                        }
                        placeholder="https://..."
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.errors.get().image.map(|e| view! { <p class="field-error">{e}</p> })
                    }
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(on_saved)
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.saving.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Сохранить" } else { "Создать" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("x")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
