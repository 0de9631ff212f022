use super::super::Model;
use yew::prelude::*;

/// Result panel, shown only while the last submission's classification is
/// current. The panel text is the label exactly as the service returned it;
/// the styling keys off the known Parasitized/Uninfected pair.
pub fn render_results(model: &Model) -> Html {
    let Some(result) = model.controller.result() else {
        return html! {};
    };

    let parasitized = result.label.eq_ignore_ascii_case("parasitized");
    let analyzed_filename = model
        .controller
        .image()
        .map_or_else(|| "Selected image".to_string(), |image| image.name.clone());

    html! {
        <div class={classes!("results-container", if parasitized { "parasitized" } else { "uninfected" })}>
            <div class="result-header">
                <h2 title={format!("Classification for: {}", analyzed_filename)}>
                    {
                        if parasitized {
                            html! { <><i class="fa-solid fa-virus"></i>{ format!(" {}", result.label) }</> }
                        } else {
                            html! { <><i class="fa-solid fa-shield-heart"></i>{ format!(" {}", result.label) }</> }
                        }
                    }
                    <span class="analyzed-filename-display">{ format!("({})", analyzed_filename) }</span>
                </h2>
                <div class="confidence-meter">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", result.confidence * 100.0)}></div>
                    </div>
                    <div class="meter-value">{ result.confidence_percent() }</div>
                </div>
            </div>
        </div>
    }
}
