//! The client-side Dioxus application logic.

use std::rc::Rc;

use dioxus::prelude::*;

mod components;
pub mod controller;
pub mod nav;
mod screens;

use api::prefs::BackendPrefs;
use controller::Page;
use controller::ViewController;
use nav::NavigationState;
use screens::home::HomeScreen;
use screens::main_menu::MainMenuScreen;

const PICO_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.cyan.min.css";

const APP_CSS: &str = r#"
    .page-shell {
        padding: 2rem 1rem;
        text-align: center;
    }
    .page-shell > button, .page-shell > p {
        margin: 0.5rem auto;
        display: block;
    }

    .main-menu-page {
        text-align: left;
    }
    .app-header {
        text-align: center;
        margin-bottom: 1.5rem;
    }
    .app-header p {
        color: var(--pico-muted-color);
    }

    .main-menu-layout {
        display: flex;
        gap: 1.5rem;
        align-items: flex-start;
    }
    .menu-sidebar {
        flex: 0 0 20rem;
    }
    .menu-content {
        flex: 1;
        min-width: 0;
    }
    .menu-sidebar .subtitle {
        color: var(--pico-muted-color);
        margin-bottom: 0.75rem;
    }

    .menu-grid {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .menu-action-button {
        text-align: left;
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
    }
    .menu-action-title {
        font-weight: bold;
    }
    .menu-action-detail {
        font-size: 0.85em;
        color: var(--pico-muted-color);
    }

    .overview-card {
        text-align: center;
    }
    .overview-value {
        font-size: 2rem;
        font-weight: bold;
        margin: 0.25rem 0;
    }
"#;

#[cfg(target_arch = "wasm32")]
fn platform_navigation() -> Rc<dyn NavigationState> {
    Rc::new(nav::BrowserNavigation::new())
}

// Native windows have no location bar; navigation state lives in process.
#[cfg(not(target_arch = "wasm32"))]
fn platform_navigation() -> Rc<dyn NavigationState> {
    Rc::new(nav::MemoryNavigation::new())
}

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: "{PICO_CSS_URL}" }
        style { "{APP_CSS}" }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let nav = use_hook(platform_navigation);
    let mut controller = use_signal({
        let nav = nav.clone();
        move || ViewController::new(nav)
    });

    // Fragment-change notifications bump an epoch signal instead of writing
    // the controller directly, so a notification arriving inside one of our
    // own event turns cannot re-enter the controller borrow.
    let mut nav_epoch = use_signal(|| 0u32);
    let _subscription = use_hook({
        let nav = nav.clone();
        move || Rc::new(nav.subscribe(Box::new(move || nav_epoch += 1)))
    });

    use_effect(move || {
        let _ = nav_epoch();
        let _ = controller.write().on_fragment_changed();
    });

    let projects_url = use_hook(|| Rc::new(BackendPrefs::default().projects_url()));

    let on_probe = move |_| {
        let url = Rc::clone(&projects_url);
        controller.write().begin_probe();
        spawn(async move {
            let result = api::probe::check_backend(&url).await;
            if let Err(err) = &result {
                dioxus_logger::tracing::warn!("backend probe failed: {err}");
            }
            controller
                .write()
                .finish_probe(result.map_err(|e| e.to_string()));
        });
    };
    let on_menu = move |_| controller.read().navigate(Page::MainMenu);
    let on_back = move |_| controller.read().navigate(Page::Home);

    let page = controller.read().current_page();
    let status_line = controller.read().status_line();
    let probe_label = controller.read().probe_button_label().to_owned();
    let probe_disabled = controller.read().probe_in_flight();

    rsx! {
        match page {
            Page::Home => rsx! {
                HomeScreen {
                    status_line,
                    probe_label,
                    probe_disabled,
                    on_probe,
                    on_menu,
                }
            },
            Page::MainMenu => rsx! {
                MainMenuScreen {
                    on_back,
                }
            },
        }
    }
}
