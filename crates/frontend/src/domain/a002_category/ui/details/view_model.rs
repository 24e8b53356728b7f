use contracts::domain::a001_product::aggregate::{FieldErrors, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_category::api;
use crate::shared::toast::ToastService;

/// ViewModel формы вложенной коллекции: та же валидация, что и у товара,
/// но запись уходит на вложенные пути с родительским идентификатором.
#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    cat_id: String,
    pub form: RwSignal<ProductDto>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl CategoryDetailsViewModel {
    pub fn new(cat_id: String, initial: ProductDto, toasts: ToastService) -> Self {
        Self {
            cat_id,
            form: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::default()),
            saving: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(field_errors) = current.validate() {
            self.errors.set(field_errors);
            return;
        }
        self.errors.set(FieldErrors::default());
        self.saving.set(true);

        let cat = self.cat_id.clone();
        let saving = self.saving;
        let toasts = self.toasts;
        spawn_local(async move {
            let result = match current.id.as_deref() {
                Some(id) => api::update(&cat, id, &current).await,
                None => api::create(&cat, &current).await,
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("category item save failed: {}", e);
                    toasts.error("Не удалось сохранить запись");
                }
            }
        });
    }
}
