//! Derive macros for Composable Todo
//!
//! This crate provides procedural macros to reduce boilerplate around action
//! enums.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `composable_todo_core::action::Action`
//!   and lists every wire tag of the enum
//!
//! # Example
//!
//! ```ignore
//! use composable_todo_macros::Action;
//! use composable_todo_core::action::Action as _;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     ReadInput(String),
//!     ClearInput,
//! }
//!
//! assert_eq!(TodoAction::ClearInput.action_type(), "clearInput");
//! assert_eq!(TodoAction::ACTION_TYPES, &["readInput", "clearInput"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input};

/// Derive macro for Action enums
///
/// Generates:
/// - `impl composable_todo_core::action::Action` whose `action_type()`
///   returns the variant name in lowerCamelCase (`AddItem` → `"addItem"`)
/// - `ACTION_TYPES`, an associated constant listing every tag in
///   declaration order
///
/// # Attributes
///
/// - `#[action(rename = "tag")]` - Override the tag of one variant
///
/// # Errors
///
/// This macro produces a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
/// - Two variants end up with the same tag
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut tags: Vec<String> = Vec::with_capacity(data_enum.variants.len());
    let mut arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let tag = match renamed_tag(&variant.attrs) {
            Ok(Some(tag)) => tag,
            Ok(None) => lower_camel(&variant_name.to_string()),
            Err(error) => return error.to_compile_error().into(),
        };

        if tags.contains(&tag) {
            return syn::Error::new_spanned(variant, format!("duplicate action type `{tag}`"))
                .to_compile_error()
                .into();
        }

        let arm = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #tag, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #tag, },
            Fields::Unit => quote! { Self::#variant_name => #tag, },
        };

        arms.push(arm);
        tags.push(tag);
    }

    let expanded = quote! {
        impl #impl_generics #name #ty_generics #where_clause {
            /// Every action type tag, in declaration order
            pub const ACTION_TYPES: &'static [&'static str] = &[#(#tags),*];
        }

        impl #impl_generics composable_todo_core::action::Action for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                match self {
                    #(#arms)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(rename = "...")]` if present
fn renamed_tag(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut tag = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                tag = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `rename`"))
            }
        })?;
    }

    Ok(tag)
}

/// `AddItem` → `addItem`
fn lower_camel(ident: &str) -> String {
    let mut chars = ident.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
