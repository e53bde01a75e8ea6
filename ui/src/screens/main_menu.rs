//! The main-menu dashboard view.
//!
//! Everything on this screen except the back button is static copy: the menu
//! actions, overview counters, and help panels describe features that do not
//! exist yet and are wired to nothing.

use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;

/// The six planned actions, shown as non-functional buttons.
const MENU_ITEMS: [(&str, &str); 6] = [
    (
        "Scan Project",
        "Import a local folder or zip and index commits, files, and contributors.",
    ),
    (
        "View/Manage Scanned Projects",
        "Browse existing scans, update display names, or clean up old entries.",
    ),
    (
        "Generate Resume",
        "Build a contributor-focused resume using detected evidence and project data.",
    ),
    (
        "Generate Portfolio",
        "Create a project portfolio summary with key impact highlights.",
    ),
    (
        "Rank Projects",
        "Sort by importance and compare contribution strength across projects.",
    ),
    (
        "Summarize Contributor Projects",
        "Generate short summaries for a selected contributor's strongest projects.",
    ),
];

/// Overview counters; populated once a real backend exists.
const OVERVIEW_CARDS: [(&str, &str); 3] = [
    (
        "Scanned Projects",
        "Appears after you run your first project scan.",
    ),
    (
        "Contributors",
        "Detected from commit history and linked to project evidence.",
    ),
    (
        "Generated Outputs",
        "Resumes, portfolios, and summaries are tracked here over time.",
    ),
];

#[component]
pub fn MainMenuScreen(on_back: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "page-shell main-menu-page",
            header {
                class: "app-header",
                h1 { "Capstone MDA Dashboard" }
                p { "Project analysis and portfolio generation toolkit" }
            }

            div {
                class: "main-menu-layout",
                aside {
                    class: "menu-sidebar",
                    h2 { "Main Menu" }
                    p { class: "subtitle", "Choose an action" }
                    div {
                        class: "menu-grid",
                        for (title, detail) in MENU_ITEMS {
                            button {
                                r#type: "button",
                                class: "menu-action-button",
                                span { class: "menu-action-title", "{title}" }
                                span { class: "menu-action-detail", "{detail}" }
                            }
                        }
                    }
                    Button {
                        button_type: ButtonType::Secondary,
                        on_click: move |evt| on_back.call(evt),
                        "Back to Connection Test"
                    }
                }

                section {
                    class: "menu-content",
                    Grid {
                        for (title, detail) in OVERVIEW_CARDS {
                            Card {
                                class: "overview-card",
                                h3 { "{title}" }
                                p { class: "overview-value", "--" }
                                p { "{detail}" }
                            }
                        }
                    }

                    Card {
                        class: "info-panel",
                        h2 { "Quick Help" }
                        p {
                            "Start with "
                            strong { "Scan Project" }
                            " to import a project folder or zip. Once scanned, you can "
                            "generate resumes/portfolios and run ranking or summary tools."
                        }
                    }

                    Card {
                        class: "info-panel",
                        h2 { "Project Information" }
                        p {
                            "This desktop app helps analyze code repositories and transform "
                            "repository data into contributor-focused outputs like rankings, "
                            "summaries, resumes, and portfolios."
                        }
                    }

                    Card {
                        class: "info-panel",
                        h2 { "Suggested First Steps" }
                        ol {
                            class: "help-list",
                            li { "Scan a project." }
                            li { "Review scanned projects." }
                            li { "Generate a resume or portfolio." }
                        }
                    }
                }
            }
        }
    }
}
