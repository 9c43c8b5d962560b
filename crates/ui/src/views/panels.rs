use dioxus::prelude::*;

use crate::vm::{EMPTY_LEADERBOARD, LeaderboardVm, QuestionVm, RegistrationVm, ResultsVm};

#[component]
pub fn RegistrationPanel(
    vm: RegistrationVm,
    on_name: EventHandler<String>,
    on_start: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "quiz-panel quiz-registration",
            h2 { class: "view-title", "{vm.title}" }
            input {
                class: "quiz-input",
                id: "quiz-name",
                r#type: "text",
                placeholder: "Enter your name",
                value: "{vm.player_name}",
                oninput: move |evt: FormEvent| on_name.call(evt.value()),
            }
            button {
                class: "btn btn-primary",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_start.call(()),
                "Start Quiz"
            }
        }
    }
}

#[component]
pub fn QuestionPanel(
    vm: QuestionVm,
    on_select: EventHandler<String>,
    on_advance: EventHandler<()>,
) -> Element {
    let options = vm.options.iter().map(|option| {
        let label = option.label.clone();
        rsx! {
            label { key: "{option.label}", class: option.state.css_class(),
                input {
                    r#type: "radio",
                    name: "{vm.group}",
                    value: "{option.label}",
                    checked: option.selected,
                    disabled: option.disabled,
                    onchange: move |_| on_select.call(label.clone()),
                }
                span { class: "quiz-option-label", "{option.label}" }
            }
        }
    });

    rsx! {
        div { class: "quiz-panel quiz-question",
            h2 { class: "view-title", "{vm.heading}" }
            p { class: "quiz-prompt", "{vm.prompt}" }
            div { class: "quiz-options", {options} }
            button {
                class: "btn btn-primary",
                id: "quiz-advance",
                r#type: "button",
                disabled: !vm.action_enabled,
                onclick: move |_| on_advance.call(()),
                "{vm.action_label}"
            }
        }
    }
}

#[component]
pub fn ResultsPanel(vm: ResultsVm, on_restart: EventHandler<()>) -> Element {
    let board = match &vm.leaderboard {
        LeaderboardVm::Loading => rsx! {
            p { class: "quiz-leaderboard-status", "Loading leaderboard..." }
        },
        LeaderboardVm::Empty => rsx! {
            p { class: "quiz-leaderboard-status", "{EMPTY_LEADERBOARD}" }
        },
        LeaderboardVm::Rows(rows) => {
            let items = rows.iter().map(|row| {
                rsx! {
                    li { key: "{row.rank}", class: "quiz-leaderboard-row",
                        "{row.name}: {row.score}"
                    }
                }
            });
            rsx! {
                ol { class: "quiz-leaderboard", {items} }
            }
        }
    };

    rsx! {
        div { class: "quiz-panel quiz-results",
            h2 { class: "view-title", "{vm.title}" }
            p { class: "quiz-score", "{vm.score_label}" }
            h3 { class: "quiz-leaderboard-title", "Quiz Champions:" }
            {board}
            button {
                class: "btn btn-primary",
                id: "quiz-restart",
                r#type: "button",
                disabled: !vm.restart_enabled,
                onclick: move |_| on_restart.call(()),
                "Play Again"
            }
        }
    }
}
