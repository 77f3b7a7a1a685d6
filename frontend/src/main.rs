use yew::events::SubmitEvent;
use yew::prelude::*;

mod components;
mod config;

use components::handlers;
use components::header::render_header;
use components::questionnaire::{render_form, FieldRefs};
use components::results::render_result;
use config::RunConfig;

// Outcome of a single pipeline run, as shown in the result region.
pub enum RunOutcome {
    Success { report_text: String },
    Failure { message: String },
    ConnectionError { message: String },
}

pub enum Msg {
    Submit(SubmitEvent),
    RunFinished(RunOutcome),
}

// Main component
pub struct Model {
    pub refs: FieldRefs,
    pub running: bool,
    pub outcome: Option<RunOutcome>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = RunConfig;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            refs: FieldRefs::default(),
            running: false,
            outcome: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit(event) => handlers::handle_submit(self, ctx, event),
            Msg::RunFinished(outcome) => handlers::handle_run_finished(self, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_form(self, ctx) }
                    { render_result(self) }
                </main>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
