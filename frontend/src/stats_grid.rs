use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub columns: usize,
    pub children: Children,
}

/// Equal-width grid for the statistic cards.
pub struct StatsGrid;

impl Component for StatsGrid {
    type Message = ();
    type Properties = StatsGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        StatsGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat({}, 1fr);
             gap: 1.5rem;
             margin-bottom: 2rem;",
            props.columns
        );

        html! {
            <div style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
