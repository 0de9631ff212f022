use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-microscope"></i>{" Malaria Detection using Cell Images"}</h1>
            <p class="subtitle">{"Upload a blood cell image to check it for parasitized cells"}</p>
        </header>
    }
}
