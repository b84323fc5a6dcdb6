use yew::prelude::*;
use chrono::NaiveDate;
use shared::{build_grid, to_iso_date, weekday_labels, CalendarCell, TodayPosition, ViewMode};
use super::holiday_banner::HolidayBanner;
use crate::hooks::use_annotations::use_annotations;
use crate::hooks::use_calendar::use_calendar;
use crate::services::api::ApiClient;
use crate::services::config::CalendarConfig;

#[derive(Properties, PartialEq)]
pub struct WeekCalendarProps {
    /// Called with the picked day on every selection
    pub on_date_change: Callback<NaiveDate>,
    #[prop_or_default]
    pub config: CalendarConfig,
}

#[function_component(WeekCalendar)]
pub fn week_calendar(props: &WeekCalendarProps) -> Html {
    let api_client = use_memo(props.config.clone(), |config| ApiClient::new(config.clone()));
    let annotations = use_annotations(&api_client);
    let calendar = use_calendar(
        props.config.first_day_of_week,
        &annotations.holidays,
        props.on_date_change.clone(),
    );

    let state = &calendar.state;
    let actions = &calendar.actions;
    let cells = build_grid(state, calendar.today, &annotations);

    let today_button = match state.today_position(calendar.today) {
        TodayPosition::Visible => html! {},
        position => {
            let (class, label) = today_button_look(position);
            html! {
                <button class={classes!("today-button", class)} onclick={actions.jump_to_today.clone()}>
                    {label}
                </button>
            }
        }
    };

    let header = html! {
        <div class="calendar-header">
            <div class="calendar-nav">
                <button class="nav-button" title="Previous" onclick={actions.prev_period.clone()}>{"◀"}</button>
                <span class="period-label" onclick={actions.toggle_mode.clone()}>
                    {state.period_label()}
                </span>
                <button class="nav-button" title="Next" onclick={actions.next_period.clone()}>{"▶"}</button>
            </div>
            {today_button}
        </div>
    };

    let render_cell = |cell: &CalendarCell| {
        let on_click = {
            let select_date = actions.select_date.clone();
            let date = cell.date;
            Callback::from(move |_: MouseEvent| select_date.emit(date))
        };
        let dots = html! {
            <div class="event-dots">
                {for (0..cell.dot_count()).map(|_| html! { <span class="event-dot"></span> })}
            </div>
        };

        match state.mode {
            ViewMode::Week => html! {
                <div key={to_iso_date(cell.date)} class={cell_classes(cell, state.mode)} onclick={on_click}>
                    <span class="weekday-name">{cell.date.format("%a").to_string()}</span>
                    <span class="day-number">{cell.date.format("%-d").to_string()}</span>
                    {dots}
                </div>
            },
            ViewMode::Month => html! {
                <div key={to_iso_date(cell.date)} class={cell_classes(cell, state.mode)} onclick={on_click}>
                    <span class="day-number">{cell.date.format("%-d").to_string()}</span>
                    {dots}
                </div>
            },
        }
    };

    let body = match state.mode {
        ViewMode::Week => html! {
            <div class="week-strip">
                {for cells.iter().map(&render_cell)}
            </div>
        },
        ViewMode::Month => html! {
            <>
                <div class="weekday-row">
                    {for weekday_labels(state.week_start).into_iter().map(|label| html! {
                        <div class="weekday-label">{label}</div>
                    })}
                </div>
                <div class="month-grid">
                    {for cells.chunks(7).map(|week| html! {
                        <div class="month-row" key={to_iso_date(week[0].date)}>
                            {for week.iter().map(&render_cell)}
                        </div>
                    })}
                </div>
            </>
        },
    };

    html! {
        <div class="week-calendar">
            {header}
            {body}
            {if let Some(name) = &state.selected_holiday {
                html! { <HolidayBanner text={name.clone()} /> }
            } else {
                html! {}
            }}
        </div>
    }
}

/// CSS classes for one day cell. Padding days in month view are muted and
/// never emphasized; the highlighted day wins over holiday styling.
fn cell_classes(cell: &CalendarCell, mode: ViewMode) -> Classes {
    let mut classes = classes!("calendar-cell");
    classes.push(match mode {
        ViewMode::Week => "week-cell",
        ViewMode::Month => "month-cell",
    });

    if mode == ViewMode::Month && !cell.is_in_current_month {
        classes.push("outside-month");
    } else if cell.is_highlighted {
        classes.push("highlighted");
    } else if cell.is_today {
        classes.push("today");
    } else if cell.is_holiday() {
        classes.push("holiday");
    }
    classes
}

/// Class and label for the jump-to-today button; the arrow points at today
fn today_button_look(position: TodayPosition) -> (&'static str, &'static str) {
    match position {
        TodayPosition::Before => ("after-today", "◀ Today"),
        _ => ("before-today", "Today ▶"),
    }
}
