use crate::components::pico::Card;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Default)]
pub enum StatTone {
    #[default]
    Plain,
    Positive,
    Accent,
}

impl StatTone {
    fn color(&self) -> &'static str {
        match self {
            StatTone::Plain => "var(--pico-h1-color)",
            StatTone::Positive => "var(--pico-ins-color)",
            StatTone::Accent => "#9236a4",
        }
    }
}

/// A single headline figure.
#[component]
pub fn StatCard(title: String, value: String, #[props(default)] tone: StatTone) -> Element {
    let color = tone.color();
    rsx! {
        Card {
            h4 { style: "margin-bottom: 0.5rem;", "{title}" }
            p {
                style: "font-size: 1.875rem; font-weight: bold; margin: 0; color: {color};",
                "{value}"
            }
        }
    }
}
