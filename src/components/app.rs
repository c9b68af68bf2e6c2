use super::{
    controls_panel::ControlsPanel, points_display::PointsDisplay,
    remaining_display::RemainingDisplay,
};
use crate::api::{ApiClient, ApiRequest};
use crate::config::ClientConfig;
use crate::error::js_error_text;
use crate::model::{Ack, ClientAction, ClientState};
use crate::poller::Poller;
use crate::util::{cerr, clog};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const ADD_POINTS_PROMPT: &str = "Enter the number of points to add:";
const INVALID_NUMBER_ALERT: &str = "Please enter a valid number.";

fn log_ack(ack: Ack) {
    if let Some(msg) = ack.message {
        clog(&msg);
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| ClientConfig::load());
    let api = use_memo(config.api_base.clone(), |base| ApiClient::new(base));
    let total_duration = config.total_duration_secs;
    let state = use_reducer(move || ClientState::new(total_duration));

    // Poll once at mount, then every period until unmount
    {
        let state = state.clone();
        let api = api.clone();
        let period = config.poll_interval_ms;
        use_effect_with((), move |_| {
            clog(&format!("polling {} every {}ms", api.base(), period));
            let refresh = move || {
                let state = state.clone();
                let api = api.clone();
                spawn_local(async move {
                    match api.points_info().await {
                        Ok(info) => state.dispatch(ClientAction::Snapshot(info)),
                        Err(e) => cerr(&format!("Error fetching timer status: {e}")),
                    }
                });
            };
            refresh();
            let poller = match Poller::start(period, refresh) {
                Ok(p) => Some(p),
                Err(e) => {
                    cerr(&format!("could not schedule polling: {e}"));
                    None
                }
            };
            move || {
                clog("polling stopped");
                drop(poller);
            }
        });
    }

    let on_start_stop = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |_| {
            let state = state.clone();
            let api = api.clone();
            let running = state.timer_running;
            spawn_local(async move {
                if running {
                    match api.stop_timer().await {
                        Ok(ack) => {
                            log_ack(ack);
                            state.dispatch(ClientAction::Stopped);
                        }
                        Err(e) => cerr(&format!("Error stopping timer: {e}")),
                    }
                } else {
                    match api.start_timer().await {
                        Ok(ack) => {
                            log_ack(ack);
                            state.dispatch(ClientAction::Started);
                        }
                        Err(e) => cerr(&format!("Error starting timer: {e}")),
                    }
                }
            });
        })
    };

    let on_reset = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |_| {
            let state = state.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.reset_timer().await {
                    Ok(ack) => {
                        log_ack(ack);
                        state.dispatch(ClientAction::Reset);
                    }
                    Err(e) => cerr(&format!("Error resetting timer: {e}")),
                }
            });
        })
    };

    let on_add_points = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |_| {
            let Some(window) = web_sys::window() else {
                cerr("add points: no browser window available");
                return;
            };
            let input = match window.prompt_with_message(ADD_POINTS_PROMPT) {
                Ok(input) => input,
                Err(e) => {
                    cerr(&format!("could not show prompt: {}", js_error_text(&e)));
                    return;
                }
            };
            match ApiRequest::add_points_from_input(input.as_deref()) {
                Ok(req) => {
                    let state = state.clone();
                    let api = api.clone();
                    spawn_local(async move {
                        match api.add_points(&req).await {
                            Ok(update) => state.dispatch(ClientAction::PointsAdded(update.points)),
                            Err(e) => cerr(&format!("Error adding points: {e}")),
                        }
                    });
                }
                Err(e) => {
                    clog(&format!("add points rejected: {e}"));
                    if let Err(e) = window.alert_with_message(INVALID_NUMBER_ALERT) {
                        cerr(&format!("could not show alert: {}", js_error_text(&e)));
                    }
                }
            }
        })
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; align-items:center; gap:16px; padding:24px;">
            <PointsDisplay points={state.points} />
            <RemainingDisplay remaining_secs={state.remaining_seconds()} />
            <ControlsPanel
                start_stop_label={state.start_stop_label()}
                on_start_stop={on_start_stop}
                on_reset={on_reset}
                on_add_points={on_add_points}
            />
        </div>
    }
}
