use contracts::domain::a001_product::aggregate::{FieldErrors, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;
use crate::shared::toast::ToastService;

/// ViewModel for the product create/edit form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    toasts: ToastService,
}

impl ProductDetailsViewModel {
    pub fn new(initial: ProductDto, toasts: ToastService) -> Self {
        Self {
            form: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::default()),
            saving: RwSignal::new(false),
            toasts,
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    /// Validate and submit: POST in create mode, PUT by id in edit mode.
    /// On failure the form stays open with the entered values intact.
    pub fn save_command(&self, on_saved: Callback<()>) {
        let current = self.form.get();

        if let Err(field_errors) = current.validate() {
            self.errors.set(field_errors);
            return;
        }
        self.errors.set(FieldErrors::default());
        self.saving.set(true);

        let saving = self.saving;
        let toasts = self.toasts;
        spawn_local(async move {
            let result = match current.id.as_deref() {
                Some(id) => api::update(id, &current).await,
                None => api::create(&current).await,
            };
            saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("product save failed: {}", e);
                    toasts.error("Не удалось сохранить запись");
                }
            }
        });
    }
}
