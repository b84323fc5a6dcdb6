use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::{shift_holidays_to_year, CalendarAnnotations, EventCountIndex, HolidayIndex};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

const COMPONENT: &str = "use-annotations";

/// Fetch events and holidays once on mount.
///
/// The two requests are independent. A failed request is logged and leaves
/// its index empty; a successful one replaces the index wholesale.
#[hook]
pub fn use_annotations(api_client: &ApiClient) -> CalendarAnnotations {
    let events = use_state(EventCountIndex::default);
    let holidays = use_state(HolidayIndex::default);

    {
        let events = events.clone();
        let holidays = holidays.clone();
        let api_client = api_client.clone();

        use_effect_with((), move |_| {
            {
                let api_client = api_client.clone();
                spawn_local(async move {
                    match api_client.get_events().await {
                        Ok(records) => {
                            let index = EventCountIndex::from_events(&records);
                            Logger::info_with_component(
                                COMPONENT,
                                &format!("Loaded {} events on {} days", records.len(), index.len()),
                            );
                            events.set(index);
                        }
                        Err(e) => {
                            Logger::error_with_component(COMPONENT, &format!("Error fetching events: {:#}", e));
                        }
                    }
                });
            }

            spawn_local(async move {
                match api_client.get_holidays().await {
                    Ok(records) => {
                        let target_year = api_client.config().holiday_target_year;
                        let shifted = shift_holidays_to_year(records, target_year);
                        Logger::info_with_component(
                            COMPONENT,
                            &format!("Loaded {} holidays relabeled onto {}", shifted.len(), target_year),
                        );
                        holidays.set(HolidayIndex::from_records(&shifted));
                    }
                    Err(e) => {
                        Logger::error_with_component(COMPONENT, &format!("Error fetching holidays: {:#}", e));
                    }
                }
            });

            || ()
        });
    }

    CalendarAnnotations {
        events: (*events).clone(),
        holidays: (*holidays).clone(),
    }
}
