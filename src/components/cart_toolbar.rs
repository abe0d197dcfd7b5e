//! Cart Toolbar Component
//!
//! Renders only the cart controls the host page does not already provide.

use leptos::prelude::*;

use crate::context::CartContext;

/// Which standard controls were not found on the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissingControls {
    pub view: bool,
    pub clear: bool,
    pub process: bool,
}

impl MissingControls {
    /// A control is missing exactly when the page has no element for it,
    /// so an existing control is never rendered a second time
    pub fn from_present(view: Option<()>, clear: Option<()>, process: Option<()>) -> Self {
        Self {
            view: view.is_none(),
            clear: clear.is_none(),
            process: process.is_none(),
        }
    }

    pub fn any(&self) -> bool {
        self.view || self.clear || self.process
    }
}

#[component]
pub fn CartToolbar(ctx: CartContext, missing: MissingControls) -> impl IntoView {
    view! {
        <div class="cart-toolbar" style="display: flex; gap: 0.5rem; margin: 1rem 0; flex-wrap: wrap;">
            {missing.view.then(|| view! {
                <button id="view-cart" class="btn btn-secondary" type="button" on:click=move |_| ctx.open()>
                    "View Cart"
                </button>
            })}
            {missing.clear.then(|| view! {
                <button id="clear-cart" class="btn btn-secondary" type="button" on:click=move |_| ctx.clear()>
                    "Clear Cart"
                </button>
            })}
            {missing.process.then(|| view! {
                <button id="process-order" class="btn btn-primary" type="button" on:click=move |_| ctx.process()>
                    "Process Order"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_missing() {
        assert!(!MissingControls::default().any());
        assert!(MissingControls { clear: true, ..Default::default() }.any());
    }

    #[test]
    fn test_only_absent_controls_are_missing() {
        let flag = |present: bool| present.then_some(());
        for mask in 0u8..8 {
            let (view, clear, process) = (mask & 1 != 0, mask & 2 != 0, mask & 4 != 0);
            let missing = MissingControls::from_present(flag(view), flag(clear), flag(process));

            assert_eq!(missing.view, !view, "view, mask {mask:03b}");
            assert_eq!(missing.clear, !clear, "clear, mask {mask:03b}");
            assert_eq!(missing.process, !process, "process, mask {mask:03b}");
            assert_eq!(missing.any(), mask != 0b111, "any, mask {mask:03b}");
        }
    }

    #[test]
    fn test_full_page_needs_no_toolbar() {
        let missing = MissingControls::from_present(Some(()), Some(()), Some(()));
        assert_eq!(missing, MissingControls::default());
    }
}
