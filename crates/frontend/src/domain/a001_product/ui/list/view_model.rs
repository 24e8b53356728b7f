use std::sync::Arc;

use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_product::api;
use crate::domain::a001_product::query::{ListQuery, SortKey};
use crate::shared::editor_mode::EditorMode;
use crate::shared::list_paging::clamp_page;
use crate::shared::request_seq::RequestSequencer;
use crate::shared::toast::ToastService;

/// ViewModel экрана товаров: состояние списка и жизненный цикл модалки.
///
/// Коллекцию мутирует только этот объект; форма после успешной записи лишь
/// просит перезагрузку. Запросы списка нумеруются, устаревший ответ
/// отбрасывается и состояние не трогает.
#[derive(Clone)]
pub struct ProductListViewModel {
    pub items: RwSignal<Vec<Product>>,
    pub query: RwSignal<ListQuery>,
    pub editor: RwSignal<EditorMode>,
    pub prefill: RwSignal<ProductDto>,
    seq: Arc<RequestSequencer>,
    toasts: ToastService,
}

impl ProductListViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            query: RwSignal::new(ListQuery::default()),
            editor: RwSignal::new(EditorMode::Closed),
            prefill: RwSignal::new(ProductDto::default()),
            seq: Arc::new(RequestSequencer::new()),
            toasts,
        }
    }

    /// Единственная попытка чтения; при ошибке прежний список остаётся на
    /// экране, пользователю показывается уведомление.
    pub fn load(&self) {
        let tag = self.seq.begin();
        let current = self.query.get_untracked();
        let vm = self.clone();
        spawn_local(async move {
            match api::fetch_products(&current).await {
                Ok(data) => {
                    if vm.seq.try_commit(tag) {
                        let len = data.len();
                        vm.items.set(data);
                        // a shrunk collection may leave the page dangling
                        vm.query
                            .update(|q| q.page = clamp_page(q.page, len, q.limit));
                    }
                }
                Err(e) => {
                    log::error!("products load failed: {}", e);
                    // a superseded load that fails late stays silent
                    if !vm.seq.is_stale(tag) {
                        vm.toasts.error("Не удалось загрузить список");
                    }
                }
            }
        });
    }

    pub fn set_search(&self, search: String) {
        self.query.update(|q| q.set_search(search));
        self.load();
    }

    pub fn set_sort(&self, sort: SortKey) {
        self.query.update(|q| q.set_sort(sort));
        self.load();
    }

    pub fn set_page(&self, page: usize) {
        self.query.update(|q| q.set_page(page));
        self.load();
    }

    pub fn open_for_create(&self) {
        self.prefill.set(ProductDto::default());
        self.editor.update(|m| m.open_for_create());
    }

    /// Форма открывается только после успешной загрузки карточки; при
    /// ошибке модалка остаётся закрытой.
    pub fn open_for_edit(&self, id: String) {
        let vm = self.clone();
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(product) => {
                    vm.prefill.set(ProductDto::from(product));
                    vm.editor.update(|m| m.open_for_edit(id));
                }
                Err(e) => {
                    log::error!("product {} fetch failed: {}", id, e);
                    vm.toasts.error("Не удалось открыть карточку");
                }
            }
        });
    }

    pub fn close_editor(&self) {
        self.editor.update(|m| m.close());
    }

    pub fn delete(&self, id: String) {
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
            match api::remove(&id).await {
                Ok(()) => vm.load(),
                Err(e) => {
                    log::error!("product {} delete failed: {}", id, e);
                    vm.toasts.error("Не удалось удалить запись");
                }
            }
        });
    }
}
