use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub start_stop_label: AttrValue,
    pub on_start_stop: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_add_points: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_stop_cb = {
        let cb = props.on_start_stop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset_cb = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let add_cb = {
        let cb = props.on_add_points.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div class="controls" style="display:flex; gap:8px; justify-content:center;">
        <button id="startStopButton" onclick={start_stop_cb}>{ props.start_stop_label.clone() }</button>
        <button id="resetButton" onclick={reset_cb}>{"Reset Timer"}</button>
        <button id="addPointsButton" onclick={add_cb}>{"Add Points"}</button>
    </div>}
}
