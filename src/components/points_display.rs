use crate::model::PointsStyle;
use crate::util::format_points;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PointsDisplayProps {
    pub points: f64,
}

#[function_component]
pub fn PointsDisplay(props: &PointsDisplayProps) -> Html {
    let style = PointsStyle::of(props.points);
    html! {
        <div id="number" class={classes!("number", style.class())}>
            { format_points(props.points) }
        </div>
    }
}
