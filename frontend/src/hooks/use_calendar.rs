use yew::prelude::*;
use chrono::{NaiveDate, Weekday};
use shared::{HolidayIndex, ViewState};
use web_sys::MouseEvent;
use crate::services::date_utils::today;
use crate::services::logging::Logger;

const COMPONENT: &str = "use-calendar";

pub struct UseCalendarResult {
    pub state: ViewState,
    pub today: NaiveDate,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_period: Callback<MouseEvent>,
    pub next_period: Callback<MouseEvent>,
    pub toggle_mode: Callback<MouseEvent>,
    pub select_date: Callback<NaiveDate>,
    pub jump_to_today: Callback<MouseEvent>,
}

/// Owns the calendar's view state and wires every user action to it.
///
/// `on_date_change` receives exactly one emission per selection, whether it
/// came from a click or from "jump to today".
#[hook]
pub fn use_calendar(
    week_start: Weekday,
    holidays: &HolidayIndex,
    on_date_change: Callback<NaiveDate>,
) -> UseCalendarResult {
    let today = today();
    let view = use_state(|| ViewState::new(today, week_start));

    // Show today's holiday once the holiday feed arrives
    {
        let view = view.clone();
        use_effect_with(holidays.clone(), move |holidays| {
            if !holidays.is_empty() {
                view.set((*view).clone().refresh_holiday_banner(today, holidays));
            }
            || ()
        });
    }

    let prev_period = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            view.set((*view).clone().advance(-1));
        })
    };

    let next_period = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            view.set((*view).clone().advance(1));
        })
    };

    let toggle_mode = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*view).clone().toggle_mode();
            Logger::debug_with_component(COMPONENT, &format!("Switched to {:?} view", next.mode));
            view.set(next);
        })
    };

    let select_date = {
        let view = view.clone();
        let holidays = holidays.clone();
        let on_date_change = on_date_change.clone();
        Callback::from(move |date: NaiveDate| {
            let transition = (*view).clone().select_date(date, &holidays);
            view.set(commit_selection(transition, &on_date_change));
        })
    };

    let jump_to_today = {
        let view = view.clone();
        let holidays = holidays.clone();
        Callback::from(move |_: MouseEvent| {
            let transition = (*view).clone().jump_to_today(today, &holidays);
            view.set(commit_selection(transition, &on_date_change));
        })
    };

    UseCalendarResult {
        state: (*view).clone(),
        today,
        actions: UseCalendarActions {
            prev_period,
            next_period,
            toggle_mode,
            select_date,
            jump_to_today,
        },
    }
}

/// Emit the selected day to the host and hand back the state to store
fn commit_selection(transition: (ViewState, NaiveDate), on_date_change: &Callback<NaiveDate>) -> ViewState {
    let (next, emitted) = transition;
    on_date_change.emit(emitted);
    next
}
