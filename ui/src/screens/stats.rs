use crate::app_state::AppState;
use crate::components::pico::Grid;
use crate::components::stat_card::StatCard;
use crate::components::stat_card::StatTone;
use dioxus::prelude::*;

#[component]
pub fn StatsGrid() -> Element {
    let stats = use_context::<AppState>().prefs.stats().clone();

    rsx! {
        Grid {
            StatCard { title: "APR", value: stats.apr, tone: StatTone::Positive }
            StatCard { title: "Total Value Locked", value: stats.total_value_locked }
            StatCard { title: "Your Rewards", value: stats.rewards, tone: StatTone::Accent }
        }
    }
}
