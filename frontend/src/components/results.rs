use super::super::Model;
use shared::prediction::PredictionStatus;
use yew::prelude::*;

pub fn render_results(model: &Model) -> Html {
    let panel = &model.prediction;

    html! {
        <div class="results-container">
            <h2>{"Analysis Result"}</h2>
            <p id="prediction" class={classes!("prediction", panel.emphasis().classes())}>
                if matches!(panel.status(), PredictionStatus::Analyzing) {
                    <span class="loader mr-2"></span>
                }
                { panel.text() }
            </p>
        </div>
    }
}
