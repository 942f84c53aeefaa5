use crate::auth::{sign_in, use_auth, use_session};
use dioxus::prelude::*;
use session::DemoAccount;
use shared_ui::{
    use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    ToastOptions,
};

/// Email/password sign-in with the demo accounts listed underneath.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let session = use_session();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let loading = *auth.loading.read();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            match sign_in(session, auth, email(), password()).await {
                Ok(_) => {
                    toast.success(
                        "Welcome!".to_string(),
                        ToastOptions::new().description("You have successfully logged in."),
                    );
                }
                Err(e) => {
                    toast.error(
                        "Login Failed".to_string(),
                        ToastOptions::new().description(e.message()),
                    );
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Consultancy Management System" }
                    CardDescription { "Sign in to your account" }
                }

                CardContent {
                    form { class: "auth-form", onsubmit: handle_login,
                        Input {
                            name: "email",
                            label: "Email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            name: "password",
                            label: "Password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            class: "auth-submit",
                            button_type: "submit",
                            disabled: loading,
                            if loading { "Signing in..." } else { "Sign In" }
                        }
                    }

                    DemoAccountList { accounts: session::demo_accounts() }
                }
            }
        }
    }
}

/// Credentials for each demo role, shown under the form.
#[component]
pub fn DemoAccountList(accounts: Vec<DemoAccount>) -> Element {
    let rows: Vec<(&'static str, String, String)> = accounts
        .into_iter()
        .map(|a| (a.identity.role.display_name(), a.identity.email, a.password))
        .collect();

    rsx! {
        div { class: "auth-demo",
            p { class: "auth-demo-title", "Demo Accounts:" }
            ul { class: "auth-demo-list",
                for (role, email, password) in rows {
                    li { key: "{email}",
                        span { class: "auth-demo-role", "{role}: " }
                        code { "{email} / {password}" }
                    }
                }
            }
        }
    }
}
