use dioxus::prelude::*;

mod auth;
mod platform;
mod routes;

use auth::{AuthState, SessionHandle};
use platform::Backends;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = session::config::load_config();
    let backends = use_hook(|| Backends::for_target(&config.session));

    let mut auth = use_context_provider(AuthState::new);
    let session = use_context_provider({
        let backends = backends.clone();
        move || SessionHandle::new(backends.manager(&config.session))
    });

    // Read the persisted session once; the login form waits on `restored`.
    use_future(move || {
        let backends = backends.clone();
        let session = session.clone();
        async move {
            backends.preload(session.manager().storage_key()).await;
            session.manager().restore();
            auth.sync(session.manager());
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
