//! RSX view! macro: parse JSX-like syntax and generate gilt-vdom builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::{braced, Error, Expr, Ident, Lit, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// AST types
// ---------------------------------------------------------------------------

/// A tag or attribute name. May be a Rust keyword (`for`, `type`) and may
/// contain dashes (`data-count`, `my-widget`).
#[derive(Clone)]
pub(crate) struct Name {
    pub value: String,
    pub span: Span,
}

impl std::fmt::Debug for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Right-hand side of an attribute: a literal or a braced expression.
#[derive(Clone)]
pub(crate) enum AttrValue {
    Lit(Lit),
    Expr(Expr),
}

/// A parsed RSX attribute: `name="value"` or `name={expr}`.
#[derive(Clone, Debug)]
pub(crate) struct Attribute {
    pub name: Name,
    pub value: AttrValue,
}

impl std::fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lit(lit) => write!(f, "Lit({})", quote!(#lit)),
            Self::Expr(expr) => write!(f, "Expr({})", quote!(#expr)),
        }
    }
}

/// A child of an element.
#[derive(Clone)]
pub(crate) enum Child {
    Element(Element),
    Text(LitStr),
    Expr(Expr),
}

impl std::fmt::Debug for Child {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(el) => std::fmt::Debug::fmt(el, f),
            Self::Text(lit) => write!(f, "Text({:?})", lit.value()),
            Self::Expr(expr) => write!(f, "Expr({})", quote!(#expr)),
        }
    }
}

/// A parsed RSX element: `<tag attrs... />` or `<tag attrs...> children </tag>`.
#[derive(Clone)]
pub(crate) struct Element {
    pub tag: Name,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Child>,
    pub self_closing: bool,
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("children", &self.children)
            .field("self_closing", &self.self_closing)
            .finish()
    }
}

/// The top-level view! input: exactly one root element.
#[derive(Debug)]
struct ViewInput {
    root: Element,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl Parse for ViewInput {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::new(
                Span::call_site(),
                "view! macro requires a root element",
            ));
        }
        let root = parse_element(input)?;
        if !input.is_empty() {
            return Err(input.error("view! macro takes exactly one root element; wrap siblings in a parent"));
        }
        Ok(ViewInput { root })
    }
}

/// Parse a possibly dashed, possibly keyword name: `div`, `for`, `data-count`.
fn parse_name(input: ParseStream) -> Result<Name> {
    let first = Ident::parse_any(input)?;
    let span = first.span();
    let mut value = first.to_string();
    while input.peek(Token![-]) {
        input.parse::<Token![-]>()?;
        let segment = Ident::parse_any(input)?;
        value.push('-');
        value.push_str(&segment.to_string());
    }
    Ok(Name { value, span })
}

fn parse_attr_value(input: ParseStream) -> Result<AttrValue> {
    if input.peek(syn::token::Brace) {
        let content;
        braced!(content in input);
        return Ok(AttrValue::Expr(content.parse()?));
    }
    if input.peek(Lit) {
        return Ok(AttrValue::Lit(input.parse()?));
    }
    Err(input.error("expected a literal or `{expr}` as attribute value"))
}

/// Parse a single RSX element from the token stream.
pub(crate) fn parse_element(input: ParseStream) -> Result<Element> {
    // Expect `<`
    input.parse::<Token![<]>()?;

    // Parse tag name
    let tag = parse_name(input)?;

    // Parse attributes until we hit `/>` or `>`
    let mut attrs = Vec::new();
    loop {
        // Check for self-closing `/>`.
        if input.peek(Token![/]) {
            input.parse::<Token![/]>()?;
            input.parse::<Token![>]>()?;
            return Ok(Element {
                tag,
                attrs,
                children: Vec::new(),
                self_closing: true,
            });
        }

        // Check for open tag close `>`.
        if input.peek(Token![>]) {
            input.parse::<Token![>]>()?;
            break;
        }

        // Parse attribute: `name = value`
        let name = parse_name(input)?;
        input.parse::<Token![=]>()?;
        let value = parse_attr_value(input)?;
        attrs.push(Attribute { name, value });
    }

    // Parse children until closing tag `</tag>`.
    let mut children = Vec::new();
    loop {
        // Check for closing tag: `</`
        if input.peek(Token![<]) && input.peek2(Token![/]) {
            input.parse::<Token![<]>()?;
            input.parse::<Token![/]>()?;
            let closing = parse_name(input)?;
            if closing.value != tag.value {
                return Err(Error::new(
                    closing.span,
                    format!(
                        "mismatched closing tag: expected `</{}>`, found `</{}>`",
                        tag.value, closing.value
                    ),
                ));
            }
            input.parse::<Token![>]>()?;
            break;
        }

        if input.is_empty() {
            return Err(Error::new(
                tag.span,
                format!("unclosed element: missing `</{}>`", tag.value),
            ));
        }

        children.push(parse_child(input)?);
    }

    Ok(Element {
        tag,
        attrs,
        children,
        self_closing: false,
    })
}

fn parse_child(input: ParseStream) -> Result<Child> {
    if input.peek(Token![<]) {
        return Ok(Child::Element(parse_element(input)?));
    }
    if input.peek(LitStr) {
        return Ok(Child::Text(input.parse()?));
    }
    if input.peek(syn::token::Brace) {
        let content;
        braced!(content in input);
        return Ok(Child::Expr(content.parse()?));
    }
    Err(input.error("invalid child: expected `<element>`, a string literal or `{expr}`"))
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Generate a `gilt_vdom::Element` builder chain for one element.
fn generate_element(elem: &Element) -> TokenStream {
    let tag = &elem.tag.value;

    let attr_calls = elem.attrs.iter().map(|attr| {
        let name = &attr.name.value;
        match &attr.value {
            AttrValue::Lit(lit) => quote! { .with_attr(#name, #lit) },
            AttrValue::Expr(expr) => quote! { .with_attr(#name, #expr) },
        }
    });

    let child_calls = elem.children.iter().map(|child| match child {
        Child::Element(el) => {
            let code = generate_element(el);
            quote! { .with_child(#code) }
        }
        Child::Text(lit) => quote! { .with_child(#lit) },
        Child::Expr(expr) => quote! { .with_child(#expr) },
    });

    quote! {
        ::gilt_vdom::Element::new(#tag) #(#attr_calls)* #(#child_calls)*
    }
}

/// Entry point: generate code for the entire view! macro.
pub(crate) fn view_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ViewInput = syn::parse2(input)?;
    let root = generate_element(&parsed.root);
    Ok(quote! {
        ::gilt_vdom::VNode::from(#root)
    })
}

// ===========================================================================
// Tests
// ===========================================================================
