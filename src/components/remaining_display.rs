use crate::util::format_remaining;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RemainingDisplayProps {
    pub remaining_secs: i64,
}

#[function_component(RemainingDisplay)]
pub fn remaining_display(props: &RemainingDisplayProps) -> Html {
    html! {<div id="remainingHours" style="font-size:20px; font-weight:600; font-variant-numeric:tabular-nums;">
        { format!("Remaining Hours: {}", format_remaining(props.remaining_secs)) }
    </div>}
}
