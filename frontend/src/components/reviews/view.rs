//! View rendering for the review page.
//!
//! Pure rendering from the store: every control sends a `Msg` back through
//! the component link. Text is in Spanish.

use common::model::review::Review;
use viewmodel::display::{
    avatar_initial, comment_text, date_label, likes_label, product_name, product_option_label,
    reviewer_name,
};
use viewmodel::pipeline::{CategoryFilter, RatingFilter, SortMode, ALL};
use viewmodel::store::Msg;
use viewmodel::submission::FormEdit;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::ReviewsPage;
use crate::modal_sheet::ModalSheet;
use crate::stats_grid::StatsGrid;

const SKELETON_COUNT: usize = 3;

pub fn view(component: &ReviewsPage, ctx: &Context<ReviewsPage>) -> Html {
    let store = &component.store;
    let link = ctx.link();

    if let Some(message) = store.fatal_error() {
        return error_view(link, message, store.api_base());
    }

    html! {
        <div class="page">
            <header class="page-header">
                <div>
                    <h1>{"Reseñas de Productos"}</h1>
                    <p class="subtitle">{"Descubre experiencias reales con bicicletas y accesorios"}</p>
                </div>
                <button
                    class="primary"
                    disabled={!store.can_open_form()}
                    onclick={link.callback(|_| Msg::OpenForm)}
                >
                    {"+ Escribir Reseña"}
                </button>
            </header>

            <main>
                { if store.is_loading() { html! {} } else { stats_view(component) } }
                { filters_view(component, link) }
                { list_view(component) }
            </main>

            <ModalSheet open={store.is_form_open()}>
                { form_view(component, link) }
            </ModalSheet>
        </div>
    }
}

fn stats_view(component: &ReviewsPage) -> Html {
    let stats = component.store.stats();
    html! {
        <StatsGrid columns={3}>
            <div class="stat-card stat-average">
                <p class="stat-title">{"Promedio"}</p>
                <p class="stat-value">{ stats.average_label() }</p>
                { stars(stats.rounded_rating(), None) }
            </div>
            <div class="stat-card stat-total">
                <p class="stat-title">{"Total"}</p>
                <p class="stat-value">{ stats.total.to_string() }</p>
                <p class="stat-note">{"reseñas"}</p>
            </div>
            <div class="stat-card stat-verified">
                <p class="stat-title">{"Verificadas"}</p>
                <p class="stat-value">{ stats.verified_count.to_string() }</p>
                <p class="stat-note">{ format!("{}% del total", stats.verified_percentage) }</p>
            </div>
        </StatsGrid>
    }
}

fn filters_view(component: &ReviewsPage, link: &Scope<ReviewsPage>) -> Html {
    let store = &component.store;
    let filters = store.filters();

    let on_search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SearchChanged(input.value())
    });
    let on_category = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::CategoryFilterChanged(CategoryFilter::from_value(&select.value()))
    });
    let on_rating = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::RatingFilterChanged(RatingFilter::from_value(&select.value()))
    });
    let on_sort = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value().parse::<SortMode>().ok().map(Msg::SortChanged)
    });

    html! {
        <section class="filters">
            <input
                type="text"
                class="search"
                placeholder="Buscar por producto, usuario o comentario..."
                value={filters.search.clone()}
                oninput={on_search}
            />
            <select onchange={on_category}>
                <option value={ALL} selected={filters.category == CategoryFilter::All}>
                    {"Todas las categorías"}
                </option>
                { for store.categories().iter().map(|category| html! {
                    <option
                        value={category.id.to_string()}
                        selected={filters.category == CategoryFilter::Only(category.id)}
                    >
                        { category.name.clone() }
                    </option>
                }) }
            </select>
            <select onchange={on_rating}>
                { for RatingFilter::OPTIONS.iter().map(|option| html! {
                    <option value={option.value()} selected={filters.rating == *option}>
                        { option.label() }
                    </option>
                }) }
            </select>
            <select onchange={on_sort}>
                { for SortMode::ALL.iter().map(|mode| html! {
                    <option value={mode.as_str()} selected={filters.sort == *mode}>
                        { mode.label() }
                    </option>
                }) }
            </select>
        </section>
    }
}

fn list_view(component: &ReviewsPage) -> Html {
    let store = &component.store;
    if store.is_loading() {
        return html! {
            <div class="review-list">
                { for (0..SKELETON_COUNT).map(|_| html! { <div class="review-card skeleton"></div> }) }
            </div>
        };
    }
    if store.displayed_len() == 0 {
        return html! {
            <div class="empty">
                <h3>{"No hay reseñas"}</h3>
                <p>{"Prueba con otros filtros o escribe la primera reseña."}</p>
            </div>
        };
    }
    html! {
        <div class="review-list">
            { for store.displayed().map(review_card) }
        </div>
    }
}

fn review_card(review: &Review) -> Html {
    html! {
        <article class="review-card" key={review.id}>
            <div class="review-head">
                <div class="avatar">{ avatar_initial(review) }</div>
                <div>
                    <h4>
                        { reviewer_name(review) }
                        if review.is_verified() {
                            <span class="badge verified">{"Verificado"}</span>
                        }
                    </h4>
                    <p class="product">{ product_name(review) }</p>
                    if let Some(category) = review.category_name() {
                        <span class="badge category">{ category.to_string() }</span>
                    }
                </div>
                <span class="date">{ date_label(review.date) }</span>
            </div>
            { stars(review.rating, None) }
            <p class="comment">{ comment_text(review).to_string() }</p>
            <span class="likes">{ likes_label(review) }</span>
        </article>
    }
}

/// Five-star strip; clicking a star sends its value when `on_pick` is set.
fn stars(rating: u8, on_pick: Option<&Callback<u8>>) -> Html {
    html! {
        <div class="stars">
            { for (1..=5u8).map(|star| {
                let class = classes!("star", (star <= rating).then_some("filled"));
                let onclick = on_pick.map(|cb| cb.reform(move |_: MouseEvent| star));
                html! { <span class={class} {onclick}>{"★"}</span> }
            }) }
        </div>
    }
}

fn form_view(component: &ReviewsPage, link: &Scope<ReviewsPage>) -> Html {
    let store = &component.store;
    let form = store.form();
    let draft = form.draft();
    let submitting = form.is_submitting();

    let on_user = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::EditForm(FormEdit::User(select.value().parse().unwrap_or_default()))
    });
    let on_product = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::EditForm(FormEdit::Product(select.value().parse().unwrap_or_default()))
    });
    let on_comment = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::EditForm(FormEdit::Comment(textarea.value()))
    });
    let on_rating = link.callback(|star: u8| Msg::EditForm(FormEdit::Rating(star)));

    html! {
        <div class="review-form">
            <h3>{"Nueva Reseña"}</h3>

            <label>{"Usuario"}</label>
            <select onchange={on_user} disabled={submitting}>
                { for store.users().iter().map(|user| html! {
                    <option value={user.id.to_string()} selected={draft.user_id == user.id}>
                        { user.username.clone() }
                    </option>
                }) }
            </select>

            <label>{"Producto"}</label>
            <select onchange={on_product} disabled={submitting}>
                <option value="0" selected={draft.product_id == 0}>{"Selecciona un producto"}</option>
                { for store.products().iter().map(|product| html! {
                    <option value={product.id.to_string()} selected={draft.product_id == product.id}>
                        { product_option_label(product) }
                    </option>
                }) }
            </select>

            <label>{"Calificación"}</label>
            { stars(draft.rating, Some(&on_rating)) }

            <label>{"Tu comentario"}</label>
            <textarea
                rows="4"
                placeholder="Comparte los detalles de tu experiencia..."
                value={draft.comment.clone()}
                oninput={on_comment}
                disabled={submitting}
            />

            <div class="form-actions">
                <button
                    class="primary"
                    disabled={submitting}
                    onclick={link.callback(|_| Msg::SubmitRequested)}
                >
                    { if submitting { "Publicando..." } else { "Publicar Reseña" } }
                </button>
                <button disabled={submitting} onclick={link.callback(|_| Msg::CloseForm)}>
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}

fn error_view(link: &Scope<ReviewsPage>, message: &str, api_base: &str) -> Html {
    html! {
        <div class="page error-page">
            <div class="error">
                <h3>{"Error de conexión"}</h3>
                <p>{ message.to_string() }</p>
                <button class="primary" onclick={link.callback(|_| Msg::Retry)}>{"Reintentar"}</button>
                <p class="hint">{"Asegúrate de que el servicio de reseñas esté ejecutándose"}</p>
                <p class="hint">{"URL: "}<code>{ api_base.to_string() }</code></p>
            </div>
        </div>
    }
}
