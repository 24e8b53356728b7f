use contracts::system::auth::{CredentialErrors, Credentials};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(CredentialErrors::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let auth = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };

        // Local validation first, the strategy is only called on a
        // well-formed pair.
        if let Err(errors) = credentials.validate() {
            set_field_errors.set(errors);
            return;
        }
        set_field_errors.set(CredentialErrors::default());

        match auth.login(&credentials) {
            Ok(()) => {
                set_error_message.set(None);
                navigate("/products", Default::default());
            }
            Err(e) => {
                log::warn!("login rejected: {}", e);
                set_error_message.set(Some("Неверный логин или пароль".to_string()));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Catalog Admin"</h1>
                <h2>"Вход в систему"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_field_errors.update(|e| e.email = None);
                            }
                        />
                        {move || field_errors.get().email.map(|e| view! {
                            <p class="field-error">{e}</p>
                        })}
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_field_errors.update(|e| e.password = None);
                            }
                        />
                        {move || field_errors.get().password.map(|e| view! {
                            <p class="field-error">{e}</p>
                        })}
                    </div>

                    <button type="submit" class="btn-primary">
                        "Войти"
                    </button>
                </form>
            </div>
        </div>
    }
}
