// ============================================================================
// SHELL VIEW - Estructura fija de la SPA
// ============================================================================
// Se pinta una vez en #app. Las regiones, botones e indicadores que usan
// navegación, badge y timer de carga se localizan por los IDs de `ids`.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::models::Page;
use crate::state::navigation::{ViewRegistry, ACTIVE_CLASS};
use crate::state::LoadAction;

pub mod ids {
    pub const USER_ID_INPUT: &str = "userId";
    pub const LOAD_USER_BUTTON: &str = "loadUserData";

    pub const PRODUCTS_LOADING: &str = "productsLoading";
    pub const PRODUCTS_GRID: &str = "productsGrid";

    pub const CART_LOADING: &str = "cartLoading";
    pub const CART_ITEMS: &str = "cartItems";
    pub const TOTAL_ITEMS: &str = "totalItems";
    pub const TOTAL_AMOUNT: &str = "totalAmount";
    pub const CHECKOUT_BUTTON: &str = "checkoutBtn";
    pub const CLEAR_CART_BUTTON: &str = "clearCartBtn";

    pub const LOAD_MY_ORDERS_BUTTON: &str = "loadMyOrdersBtn";
    pub const LOAD_ALL_ORDERS_BUTTON: &str = "loadAllOrdersBtn";
    pub const ORDERS_LIST: &str = "ordersList";

    pub const TOAST_CONTAINER: &str = "toastContainer";
    pub const MODAL: &str = "modal";
    pub const MODAL_BODY: &str = "modalBody";
    pub const MODAL_CLOSE: &str = "modalClose";

    pub use crate::viewmodels::cart_viewmodel::CART_BADGE_ID as CART_BADGE;
    pub use crate::viewmodels::orders_viewmodel::{LOADING_TIMER_ID as LOADING_TIMER, ORDERS_LOADING_ID as ORDERS_LOADING};
}

/// Renderizar la estructura completa
/// Lista que se vacía antes de lanzar una acción de recarga
pub fn stale_list(action: LoadAction) -> Option<&'static str> {
    match action {
        LoadAction::ReloadCart => Some(ids::CART_ITEMS),
        LoadAction::ReloadMyOrders => Some(ids::ORDERS_LIST),
        LoadAction::TrackCartView => None,
    }
}

pub fn render_shell(user_id: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("app-shell")
        .child(render_header(user_id)?)?
        .child(
            ElementBuilder::new("main")?
                .class("container")
                .child(render_products_page()?)?
                .child(render_cart_page()?)?
                .child(render_orders_page()?)?
                .build(),
        )?
        .child(ElementBuilder::new("div")?.class("toast-container").id(ids::TOAST_CONTAINER)?.build())?
        .child(render_modal()?)
        .map(ElementBuilder::build)
}

fn render_header(user_id: &str) -> Result<Element, JsValue> {
    let mut nav = ElementBuilder::new("nav")?.class("nav");
    for entry in ViewRegistry::entries() {
        let mut button = ElementBuilder::new("button")?
            .class("nav-btn")
            .id(entry.nav_button_id)?
            .attr("data-page", entry.page.as_str())?
            .text(nav_label(entry.page));
        if entry.page == Page::Cart {
            button = button.child(
                ElementBuilder::new("span")?
                    .class("cart-badge")
                    .id(ids::CART_BADGE)?
                    .attr("style", "display: none")?
                    .text("0")
                    .build(),
            )?;
        }
        nav = nav.child(button.build())?;
    }

    let user_section = ElementBuilder::new("div")?
        .class("user-section")
        .child(
            ElementBuilder::new("input")?
                .id(ids::USER_ID_INPUT)?
                .attr("type", "text")?
                .attr("placeholder", "User ID")?
                .attr("value", user_id)?
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-secondary btn-small")
                .id(ids::LOAD_USER_BUTTON)?
                .text("Load")
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("header")?
        .class("header")
        .child(text_element("h1", "logo", "🛍️ Shop Demo")?)?
        .child(nav.build())?
        .child(user_section)?
        .build())
}

fn nav_label(page: Page) -> &'static str {
    match page {
        Page::Products => "Products",
        Page::Cart => "Cart",
        Page::Orders => "Orders",
    }
}

fn page_region(page: Page) -> Result<ElementBuilder, JsValue> {
    let entry = ViewRegistry::entry(page);
    let class = if page == Page::default() {
        format!("page {}", ACTIVE_CLASS)
    } else {
        "page".to_string()
    };
    ElementBuilder::new("section")?.class(&class).id(entry.region_id)
}

fn loading(id: &str, label: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("loading")
        .id(id)?
        .attr("style", "display: none")?
        .child(text_element("div", "spinner", "")?)?
        .child(text_element("p", "loading-label", label)?)?
        .build())
}

fn render_products_page() -> Result<Element, JsValue> {
    Ok(page_region(Page::Products)?
        .child(text_element("h2", "page-title", "Products")?)?
        .child(loading(ids::PRODUCTS_LOADING, "Loading products...")?)?
        .child(ElementBuilder::new("div")?.class("products-grid").id(ids::PRODUCTS_GRID)?.build())?
        .build())
}

fn render_cart_page() -> Result<Element, JsValue> {
    let summary = ElementBuilder::new("div")?
        .class("cart-summary")
        .child(
            ElementBuilder::new("div")?
                .class("summary-row")
                .child(text_element("span", "", "Items:")?)?
                .child(ElementBuilder::new("span")?.id(ids::TOTAL_ITEMS)?.text("0").build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("summary-row total")
                .child(text_element("span", "", "Total:")?)?
                .child(ElementBuilder::new("span")?.id(ids::TOTAL_AMOUNT)?.text("$0.00").build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-primary")
                .id(ids::CHECKOUT_BUTTON)?
                .attr("disabled", "")?
                .text("Checkout")
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-danger")
                .id(ids::CLEAR_CART_BUTTON)?
                .text("Clear Cart")
                .build(),
        )?
        .build();

    Ok(page_region(Page::Cart)?
        .child(text_element("h2", "page-title", "Shopping Cart")?)?
        .child(loading(ids::CART_LOADING, "Loading cart...")?)?
        .child(ElementBuilder::new("div")?.class("cart-items").id(ids::CART_ITEMS)?.build())?
        .child(summary)?
        .build())
}

fn render_orders_page() -> Result<Element, JsValue> {
    let actions = ElementBuilder::new("div")?
        .class("orders-actions")
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-primary btn-small")
                .id(ids::LOAD_MY_ORDERS_BUTTON)?
                .text("My Orders")
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn btn-secondary btn-small")
                .id(ids::LOAD_ALL_ORDERS_BUTTON)?
                .text("All Orders")
                .build(),
        )?
        .build();

    let orders_loading = ElementBuilder::new("div")?
        .class("loading")
        .id(ids::ORDERS_LOADING)?
        .attr("style", "display: none")?
        .child(text_element("div", "spinner", "")?)?
        .child(text_element("p", "loading-label", "Loading orders...")?)?
        .child(ElementBuilder::new("div")?.class("loading-timer").id(ids::LOADING_TIMER)?.build())?
        .build();

    Ok(page_region(Page::Orders)?
        .child(text_element("h2", "page-title", "Orders")?)?
        .child(actions)?
        .child(orders_loading)?
        .child(ElementBuilder::new("div")?.class("orders-list").id(ids::ORDERS_LIST)?.build())?
        .build())
}

fn render_modal() -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?
        .class("modal-content")
        .child(
            ElementBuilder::new("button")?
                .class("modal-close")
                .id(ids::MODAL_CLOSE)?
                .text("×")
                .build(),
        )?
        .child(ElementBuilder::new("div")?.id(ids::MODAL_BODY)?.build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("modal")
        .id(ids::MODAL)?
        .child(content)?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reloads_clear_their_list_first() {
        assert_eq!(stale_list(LoadAction::ReloadCart), Some("cartItems"));
        assert_eq!(stale_list(LoadAction::ReloadMyOrders), Some("ordersList"));
        assert_eq!(stale_list(LoadAction::TrackCartView), None);
    }
}
