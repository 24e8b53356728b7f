use std::sync::Arc;

use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_category::api;
use crate::shared::editor_mode::EditorMode;
use crate::shared::request_seq::RequestSequencer;
use crate::shared::toast::ToastService;

/// ViewModel вложенной коллекции категории.
///
/// Сокращённая форма контроллера списка: бэкенд-эндпоинт не принимает
/// параметров запроса, поэтому здесь нет Query State — только загрузка по
/// родительскому идентификатору и CRUD-цикл. Без родителя экран пуст и
/// запросов не делает.
#[derive(Clone)]
pub struct CategoryListViewModel {
    pub cat_id: RwSignal<Option<String>>,
    pub items: RwSignal<Vec<Product>>,
    pub editor: RwSignal<EditorMode>,
    pub prefill: RwSignal<ProductDto>,
    seq: Arc<RequestSequencer>,
    toasts: ToastService,
}

impl CategoryListViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            cat_id: RwSignal::new(None),
            items: RwSignal::new(Vec::new()),
            editor: RwSignal::new(EditorMode::Closed),
            prefill: RwSignal::new(ProductDto::default()),
            seq: Arc::new(RequestSequencer::new()),
            toasts,
        }
    }

    /// Смена родителя: прежний список отбрасывается и строится заново
    /// свежей загрузкой.
    pub fn switch_category(&self, cat_id: Option<String>) {
        self.cat_id.set(cat_id.clone());
        self.items.set(Vec::new());
        self.editor.update(|m| m.close());
        if cat_id.is_some() {
            self.load();
        }
    }

    pub fn load(&self) {
        let Some(cat) = self.cat_id.get_untracked() else {
            return;
        };
        let tag = self.seq.begin();
        let vm = self.clone();
        spawn_local(async move {
            match api::fetch_items(&cat).await {
                Ok(data) => {
                    if vm.seq.try_commit(tag) {
                        vm.items.set(data);
                    }
                }
                Err(e) => {
                    log::error!("category {} items load failed: {}", cat, e);
                    // a superseded load that fails late stays silent
                    if !vm.seq.is_stale(tag) {
                        vm.toasts.error("Не удалось загрузить список");
                    }
                }
            }
        });
    }

    pub fn open_for_create(&self) {
        if self.cat_id.get_untracked().is_none() {
            return;
        }
        self.prefill.set(ProductDto::default());
        self.editor.update(|m| m.open_for_create());
    }

    pub fn open_for_edit(&self, id: String) {
        let Some(cat) = self.cat_id.get_untracked() else {
            return;
        };
        let vm = self.clone();
        spawn_local(async move {
            match api::fetch_item(&cat, &id).await {
                Ok(item) => {
                    vm.prefill.set(ProductDto::from(item));
                    vm.editor.update(|m| m.open_for_edit(id));
                }
                Err(e) => {
                    log::error!("category item {} fetch failed: {}", id, e);
                    vm.toasts.error("Не удалось открыть карточку");
                }
            }
        });
    }

    pub fn close_editor(&self) {
        self.editor.update(|m| m.close());
    }

    pub fn delete(&self, id: String) {
        let Some(cat) = self.cat_id.get_untracked() else {
            return;
        };
        // TODO: гейтить удаление по результату confirm — сейчас диалог
        // декоративный, поведение сохранено до решения продукта.
        let _confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Вы уверены, что хотите удалить?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);

        let vm = self.clone();
        spawn_local(async move {
            match api::remove(&cat, &id).await {
                Ok(()) => vm.load(),
                Err(e) => {
                    log::error!("category item {} delete failed: {}", id, e);
                    vm.toasts.error("Не удалось удалить запись");
                }
            }
        });
    }
}
