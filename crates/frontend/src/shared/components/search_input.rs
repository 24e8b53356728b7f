use crate::shared::icons::icon;
use leptos::prelude::*;

/// Поле поиска с кнопкой очистки.
///
/// Значение уходит наверх на каждое нажатие клавиши, без debounce: гонки
/// ответов разруливает нумерация запросов в контроллере списка.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=move |_| on_change.run(String::new())
                        title="Очистить"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
