use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Text | FieldKind::TextArea => "text",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub id: &'static str,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<(&'static str, String)>,
    #[prop_or_default]
    pub kind: FieldKind,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub required: bool,
    /// Restricts the choices to a fixed list; the first entry is the
    /// unselected prompt.
    #[prop_or_default]
    pub options: Option<&'static [&'static str]>,
}

/// Labelled, controlled form input. Every edit is reported as
/// `(id, new value)`.
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let id = props.id;
    let kind = props.kind;

    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let value = match kind {
                FieldKind::TextArea => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            on_input.emit((id, value));
        })
    };

    let onchange = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_input.emit((id, select.value()));
        })
    };

    let control = match (props.options, kind) {
        (Some(options), _) => html! {
            <select {id} {onchange} required={props.required}>
                { for options.iter().enumerate().map(|(i, option)| html! {
                    <option
                        value={if i == 0 { "" } else { *option }}
                        selected={if i == 0 { props.value.is_empty() } else { props.value.as_str() == *option }}
                    >
                        { *option }
                    </option>
                }) }
            </select>
        },
        (None, FieldKind::TextArea) => html! {
            <textarea
                {id}
                rows="6"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required={props.required}
                {oninput}
            />
        },
        (None, _) => html! {
            <input
                {id}
                type={kind.input_type()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                required={props.required}
                {oninput}
            />
        },
    };

    html! {
        <div class="field">
            <label for={id}>{ props.label.clone() }</label>
            { control }
        </div>
    }
}
