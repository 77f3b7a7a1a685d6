use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"שאלון רישוי עסקים"}</h1>
            <p class="subtitle">{"מילוי פרופיל העסק והרצת פייפליין הדוחות"}</p>
        </header>
    }
}
