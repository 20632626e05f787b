use yew::{classes, html, Component, Context, Html, Properties};

/// Dialog sheet sliding over the page while `open` holds.
pub struct ModalSheet;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub open: bool,
    #[prop_or_default]
    pub children: Html,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }
        html! {
            <div class="sheet-backdrop">
                <div class={classes!("top-sheet", "show")} role="dialog" aria-modal="true">
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
