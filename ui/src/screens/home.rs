//! The connection-test landing view.

use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

#[component]
pub fn HomeScreen(
    status_line: String,
    probe_label: String,
    probe_disabled: bool,
    on_probe: EventHandler<MouseEvent>,
    on_menu: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            class: "page-shell",
            h1 { "Capstone MDA App" }
            Button {
                disabled: probe_disabled,
                on_click: move |evt| on_probe.call(evt),
                "{probe_label}"
            }
            p { "{status_line}" }
            Button {
                button_type: ButtonType::Secondary,
                on_click: move |evt| on_menu.call(evt),
                "Go to Main Menu"
            }
        }
    }
}
