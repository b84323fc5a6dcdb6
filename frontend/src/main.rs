use yew::prelude::*;
use chrono::NaiveDate;
use shared::to_iso_date;

mod components;
mod hooks;
mod services;

use components::week_calendar::WeekCalendar;
use services::date_utils::{format_date_for_display, today};
use services::logging::Logger;

/// Host page: keeps the picked day as a normalized `YYYY-MM-DD` string
#[function_component(App)]
fn app() -> Html {
    let selected_date = use_state(|| to_iso_date(today()));

    let on_date_change = {
        let selected_date = selected_date.clone();
        Callback::from(move |date: NaiveDate| {
            let iso_date = to_iso_date(date);
            Logger::debug_with_component("home-page", &format!("Selected date {}", iso_date));
            selected_date.set(iso_date);
        })
    };

    html! {
        <div class="home-page">
            <WeekCalendar {on_date_change} />
            <p class="selected-date" data-date={(*selected_date).clone()}>
                {format_date_for_display(&selected_date)}
            </p>
        </div>
    }
}

fn main() {
    services::logging::init();
    Logger::info_with_component("home-page", "Starting calendar picker");
    yew::Renderer::<App>::new().render();
}
