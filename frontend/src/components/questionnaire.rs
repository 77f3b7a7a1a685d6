use super::super::Model;
use super::super::Msg;
use yew::prelude::*;

pub const SUBMIT_LABEL: &str = "הרץ פייפליין";
pub const RUNNING_LABEL: &str = "מריץ...";

/// Flag fields in display order: element id (matching the wire field name)
/// and its Hebrew label.
pub const FLAG_FIELDS: [(&str, &str); 10] = [
    ("uses_gas", "האם העסק משתמש בגז?"),
    ("delivers", "האם העסק מבצע משלוחים?"),
    ("has_meat", "האם מוגש בשר?"),
    ("uses_fryer", "האם יש טיגון בשמן עמוק?"),
    ("has_alcohol", "האם מוגש אלכוהול?"),
    ("serves_dairy", "האם מוגשים מוצרי חלב?"),
    ("has_seating", "האם יש מקומות ישיבה?"),
    ("is_open_air", "האם העסק בשטח פתוח?"),
    ("uses_gas_grill", "האם יש גריל גז?"),
    ("is_kosher", "האם העסק כשר?"),
];

/// Explicit bindings to every questionnaire element. The submit handler
/// reads through these instead of querying the document by id.
#[derive(Default, Clone, PartialEq)]
pub struct FieldRefs {
    pub business_name: NodeRef,
    pub area_sqm: NodeRef,
    pub num_seats: NodeRef,
    pub uses_gas: NodeRef,
    pub delivers: NodeRef,
    pub has_meat: NodeRef,
    pub uses_fryer: NodeRef,
    pub has_alcohol: NodeRef,
    pub serves_dairy: NodeRef,
    pub has_seating: NodeRef,
    pub is_open_air: NodeRef,
    pub uses_gas_grill: NodeRef,
    pub is_kosher: NodeRef,
}

impl FieldRefs {
    pub fn flag_ref(&self, id: &str) -> Option<&NodeRef> {
        match id {
            "uses_gas" => Some(&self.uses_gas),
            "delivers" => Some(&self.delivers),
            "has_meat" => Some(&self.has_meat),
            "uses_fryer" => Some(&self.uses_fryer),
            "has_alcohol" => Some(&self.has_alcohol),
            "serves_dairy" => Some(&self.serves_dairy),
            "has_seating" => Some(&self.has_seating),
            "is_open_air" => Some(&self.is_open_air),
            "uses_gas_grill" => Some(&self.uses_gas_grill),
            "is_kosher" => Some(&self.is_kosher),
            _ => None,
        }
    }
}

pub fn render_form(model: &Model, ctx: &Context<Model>) -> Html {
    let onsubmit = ctx.link().callback(Msg::Submit);

    html! {
        <form id="pipelineForm" {onsubmit}>
            <div class="form-field">
                <label for="business_name">{"שם העסק"}</label>
                <input
                    type="text"
                    id="business_name"
                    ref={model.refs.business_name.clone()}
                />
            </div>
            <div class="form-field">
                <label for="area_sqm">{"שטח העסק במ\"ר"}</label>
                <input
                    type="number"
                    id="area_sqm"
                    ref={model.refs.area_sqm.clone()}
                />
            </div>
            <div class="form-field">
                <label for="num_seats">{"מספר מקומות ישיבה"}</label>
                <input
                    type="number"
                    id="num_seats"
                    ref={model.refs.num_seats.clone()}
                />
            </div>

            { for FLAG_FIELDS.iter().map(|&(id, label)| render_flag_select(model, id, label)) }

            <button type="submit" disabled={model.running}>
                { if model.running { RUNNING_LABEL } else { SUBMIT_LABEL } }
            </button>
        </form>
    }
}

fn render_flag_select(model: &Model, id: &'static str, label: &'static str) -> Html {
    let node = model.refs.flag_ref(id).cloned().unwrap_or_default();

    html! {
        <div class="form-field" key={id}>
            <label for={id}>{ label }</label>
            <select id={id} ref={node}>
                <option value="" selected=true>{"בחר"}</option>
                <option value="true">{"כן"}</option>
                <option value="false">{"לא"}</option>
            </select>
        </div>
    }
}
