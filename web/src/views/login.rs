use dioxus::prelude::*;

#[component]
pub fn Login(error: Option<String>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    let can_submit = !username.read().trim().is_empty() && !password.read().is_empty();

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "SIPANDU" }
                    p { class: "login-subtitle", "Sign in to the admin dashboard" }
                }
                if let Some(error) = error.filter(|e| !e.is_empty()) {
                    div { class: "alert alert-error", role: "alert", "{error}" }
                }
                form {
                    action: "/auth/login",
                    method: "post",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            name: "username",
                            class: "form-input",
                            r#type: "text",
                            autocomplete: "username",
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            class: "form-input",
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        disabled: !can_submit,
                        "Sign in"
                    }
                }
            }
        }
    }
}
