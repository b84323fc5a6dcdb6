use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HolidayBannerProps {
    pub text: AttrValue,
}

/// Highlighted strip naming the holiday on the selected day
#[function_component(HolidayBanner)]
pub fn holiday_banner(props: &HolidayBannerProps) -> Html {
    html! {
        <div class="holiday-banner">
            <span class="holiday-banner-bar"></span>
            <span class="holiday-banner-text">{props.text.clone()}</span>
        </div>
    }
}
