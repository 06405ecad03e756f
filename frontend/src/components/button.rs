use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Renders an `<a>` instead of a `<button>` when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub external: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub kind: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!("btn", props.variant.class(), props.class.clone());
    let onclick = props.onclick.clone().unwrap_or_else(Callback::noop);

    match &props.href {
        Some(href) => {
            let (target, rel) = if props.external {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            html! {
                <a href={href.clone()} class={classes} {onclick} {target} {rel}>
                    { for props.children.iter() }
                </a>
            }
        }
        None => html! {
            <button type={props.kind.clone()} class={classes} {onclick} disabled={props.disabled}>
                { for props.children.iter() }
            </button>
        },
    }
}
