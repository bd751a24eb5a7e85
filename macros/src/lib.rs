//! Proc macros for gilt-vdom: `view!` RSX tree construction.
//!
//! This crate is not meant to be used directly — enable the `macros` feature on `gilt-vdom`.

use proc_macro::TokenStream;

mod view_macro;

/// RSX-style virtual tree macro.
///
/// Expands to a `gilt_vdom::VNode` built with the `Element` builder API.
///
/// # Syntax
///
/// - `<tag />` — element without children
/// - `<tag attr="val"> ... </tag>` — element with children
/// - `"text"` — text child
/// - `{expr}` — any `Into<VNode>` child (a `VNode`, an `Element`, a `String`)
///
/// # Attributes
///
/// - `name="value"` or any literal (`tabindex=0`, `hidden=true`)
/// - `name={expr}` — any `Display` value, stringified when the tree is built
/// - Names may be Rust keywords (`for`, `type`) and may contain dashes (`data-count`)
///
/// Exactly one root element is allowed.
///
/// # Example
///
/// ```ignore
/// let count = 3;
/// let tree = view! {
///     <div id="container" data-count={count}>
///         <h1>"Hello World - " <span id="count">{count.to_string()}</span></h1>
///         <label for="email">"Email "</label>
///     </div>
/// };
/// ```
#[proc_macro]
pub fn view(input: TokenStream) -> TokenStream {
    view_macro::view_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
