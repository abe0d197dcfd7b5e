//! Cart Modal Component
//!
//! Backdrop + dialog showing the aggregated cart, with inline clear and
//! checkout buttons that re-render in place.

use leptos::prelude::*;

use crate::cart::CartView;
use crate::context::CartContext;
use crate::controller::{messages, ModalState};

const BACKDROP_STYLE: &str = "position: fixed; inset: 0; background: rgba(0,0,0,0.4); \
    align-items: center; justify-content: center; z-index: 9999;";
const DIALOG_STYLE: &str = "background: var(--parchment, #fff); max-width: 560px; width: 92%; \
    border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.2); padding: 1rem 1.25rem; \
    font-family: inherit; color: var(--bookish-black, #131C26);";
const FOOTER_STYLE: &str = "margin-top: 1rem; display: flex; justify-content: space-between; gap: .5rem; \
    flex-wrap: wrap; border-top: 1px solid rgba(0,0,0,0.06); padding-top: .85rem;";
const GROUP_STYLE: &str = "display: flex; gap: .5rem; flex-wrap: wrap;";
const TH_STYLE: &str = "text-align: left; padding: .4rem .2rem; border-bottom: 1px solid rgba(0,0,0,0.06);";
const TD_STYLE: &str = "padding: .45rem .2rem; border-bottom: 1px solid rgba(0,0,0,0.04);";

#[component]
pub fn CartModal(ctx: CartContext) -> impl IntoView {
    let backdrop_style = move || {
        let display = if ctx.modal.with(ModalState::is_open) { "flex" } else { "none" };
        format!("{} display: {};", BACKDROP_STYLE, display)
    };

    view! {
        <div
            class="cart-modal-backdrop"
            style=backdrop_style
            on:click=move |ev: web_sys::MouseEvent| {
                // only clicks on the backdrop itself, not inside the dialog
                if ev.target() == ev.current_target() {
                    ctx.close();
                }
            }
        >
            <div class="cart-modal" style=DIALOG_STYLE>
                <div style="display: flex; align-items: center; justify-content: space-between; gap: .75rem;">
                    <h3 style="margin: 0; font-size: 1.15rem;">"Your Cart"</h3>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        style="margin-left: 1rem;"
                        on:click=move |_| ctx.close()
                    >
                        "Close"
                    </button>
                </div>

                <div class="cart-body" style="margin-top: 0.75rem;">
                    {move || match ctx.modal.get() {
                        ModalState::Open(contents) => render_cart_view(contents),
                        ModalState::Closed => ().into_any(),
                    }}
                </div>

                <div style=FOOTER_STYLE>
                    <div style=GROUP_STYLE>
                        <button type="button" class="btn btn-secondary" on:click=move |_| ctx.clear()>
                            "Clear Cart"
                        </button>
                    </div>
                    <div style=GROUP_STYLE>
                        <button type="button" class="btn btn-primary" on:click=move |_| ctx.process()>
                            "Process Order"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Table of (item, qty) rows, or the empty-cart notice
fn render_cart_view(contents: CartView) -> AnyView {
    match contents {
        CartView::Empty => view! { <p>{messages::CART_EMPTY}</p> }.into_any(),
        CartView::Rows(rows) => view! {
            <table style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr>
                        <th style=TH_STYLE>"Item"</th>
                        <th style=TH_STYLE>"Qty"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            <td style=TD_STYLE>{row.name}</td>
                            <td style=TD_STYLE>{row.count.to_string()}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }.into_any(),
    }
}
