use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    message: String,
}

/// Centralized toast notifications.
///
/// Controllers report fetch/submit failures here; the user sees a transient
/// generic message, the cause goes to the console log only.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show an error toast; auto-dismisses after a fixed delay.
    pub fn error(&self, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|t| {
            t.push(Toast {
                id,
                message: message.into(),
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|toast| toast.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the toast service
pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

/// Renders the visible toasts in a fixed corner; click dismisses early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_toasts();
    let toasts = svc.toasts;

    view! {
        <div class="toast-container">
            {move || toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class="toast toast--error" on:click=move |_| svc.dismiss(id)>
                        {toast.message}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
