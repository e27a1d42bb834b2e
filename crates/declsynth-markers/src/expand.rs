// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Argument validation and pass-through expansion.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, ImplItemFn, Item, Lit, Meta};

const DESCRIPTION: &str = "description";
const NOTIFY_PROPERTY: &str = "notify_property";

#[derive(Debug, Default, FromMeta)]
struct EnumTransformArgs {
    extension: Option<String>
}

// Only `name` is checked here; the rest is type-checked by parsing.
#[allow(dead_code)]
#[derive(Debug, Default, FromMeta)]
struct NotifyPropertyArgs {
    name:       Option<String>,
    observable: Option<bool>
}

#[allow(dead_code)]
#[derive(Debug, Default, FromMeta)]
struct CommandArgs {
    name:        Option<String>,
    can_execute: Option<syn::Path>,
    wrapper:     Option<syn::Path>
}

fn parse_args<T: FromMeta>(args: TokenStream) -> darling::Result<T> {
    let items = NestedMeta::parse_meta_list(args)?;
    T::from_list(&items)
}

fn check_identifier(key: &str, value: Option<&str>) -> darling::Result<()> {
    match value {
        Some(text) if syn::parse_str::<syn::Ident>(text).is_err() => {
            Err(darling::Error::custom(format!("`{text}` is not a valid identifier")).at(key))
        }
        _ => Ok(())
    }
}

fn check_description(attr: &Attribute) -> darling::Result<()> {
    match &attr.meta {
        Meta::List(list) => {
            list.parse_args::<syn::LitStr>()?;
            Ok(())
        }
        Meta::NameValue(meta) => match &meta.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(_), ..
            }) => Ok(()),
            other => Err(darling::Error::unexpected_expr_type(other))
        },
        Meta::Path(path) => Err(darling::Error::custom(
            "expected `description(\"text\")` or `description = \"text\"`"
        )
        .with_span(path))
    }
}

/// `#[enum_transform]`: validate, strip variant descriptions, re-emit.
pub fn enum_transform(args: TokenStream, item: TokenStream) -> darling::Result<TokenStream> {
    let args: EnumTransformArgs = parse_args(args)?;
    check_identifier("extension", args.extension.as_deref())?;

    let mut item = match syn::parse2::<Item>(item)? {
        Item::Enum(item) => item,
        other => {
            return Err(
                darling::Error::custom("`#[enum_transform]` applies to enums").with_span(&other)
            );
        }
    };

    let mut errors = darling::Error::accumulator();
    for variant in &mut item.variants {
        for attr in variant.attrs.iter().filter(|a| a.path().is_ident(DESCRIPTION)) {
            errors.handle(check_description(attr));
        }
        variant.attrs.retain(|a| !a.path().is_ident(DESCRIPTION));
    }
    errors.finish()?;

    Ok(quote!(#item))
}

/// `#[command]`: validate and re-emit the method.
pub fn command(args: TokenStream, item: TokenStream) -> darling::Result<TokenStream> {
    let args: CommandArgs = parse_args(args)?;
    check_identifier("name", args.name.as_deref())?;

    let method: ImplItemFn = syn::parse2(item)
        .map_err(|err| syn::Error::new(err.span(), "`#[command]` applies to methods with a body"))?;
    Ok(quote!(#method))
}

/// `#[derive(NotifyProperties)]`: validate field markers, emit nothing.
pub fn notify_properties(input: &DeriveInput) -> darling::Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        return Err(darling::Error::custom("`NotifyProperties` can only be derived for structs")
            .with_span(&input.ident));
    };

    let mut errors = darling::Error::accumulator();
    for field in &data.fields {
        for attr in field.attrs.iter().filter(|a| a.path().is_ident(NOTIFY_PROPERTY)) {
            errors.handle(check_property(attr));
        }
    }
    errors.finish()?;

    Ok(TokenStream::new())
}

fn check_property(attr: &Attribute) -> darling::Result<()> {
    let args = match &attr.meta {
        Meta::Path(_) => NotifyPropertyArgs::default(),
        meta => NotifyPropertyArgs::from_meta(meta)?
    };
    check_identifier("name", args.name.as_deref())
}

#[cfg(test)]
mod tests {
    use quote::quote;
    use syn::ItemEnum;

    use super::*;

    #[test]
    fn enum_transform_strips_descriptions() {
        let out = enum_transform(
            quote!(extension = "ModeOps"),
            quote! {
                #[derive(Debug)]
                pub enum Mode {
                    /// Reading.
                    #[description("Read only")]
                    Read,
                    #[description = "Read and write"]
                    Write,
                }
            }
        )
        .unwrap();

        let item: ItemEnum = syn::parse2(out).unwrap();
        assert_eq!(item.ident, "Mode");
        assert!(item.attrs[0].path().is_ident("derive"));
        assert_eq!(item.variants.len(), 2);
        assert_eq!(item.variants[0].attrs.len(), 1);
        assert!(item.variants[0].attrs[0].path().is_ident("doc"));
        assert!(item.variants[1].attrs.is_empty());
    }

    #[test]
    fn enum_transform_rejects_other_items() {
        let err = enum_transform(TokenStream::new(), quote!(pub struct Mode;)).unwrap_err();
        assert!(err.to_string().contains("applies to enums"));
    }

    #[test]
    fn enum_transform_rejects_bad_extension_name() {
        let err = enum_transform(quote!(extension = "Mode Ops"), quote!(enum Mode { A }))
            .unwrap_err();
        assert!(err.to_string().contains("not a valid identifier"));
    }

    #[test]
    fn enum_transform_rejects_unknown_argument() {
        assert!(enum_transform(quote!(suffix = "Ex"), quote!(enum Mode { A })).is_err());
    }

    #[test]
    fn description_needs_a_string() {
        let err = enum_transform(
            TokenStream::new(),
            quote! {
                enum Mode {
                    #[description]
                    A,
                    #[description(42)]
                    B,
                }
            }
        )
        .unwrap_err();
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn command_passes_method_through() {
        let method = quote! {
            fn on_save_executed(&mut self) {
                self.dirty = false;
            }
        };
        let out = command(
            quote!(can_execute = is_dirty, wrapper = widgets::Tracked, name = "store"),
            method.clone()
        )
        .unwrap();
        assert_eq!(out.to_string(), method.to_string());
    }

    #[test]
    fn command_rejects_bad_name() {
        let err = command(quote!(name = "1st"), quote!(fn go(&self) {})).unwrap_err();
        assert!(err.to_string().contains("not a valid identifier"));
    }

    #[test]
    fn command_needs_a_body() {
        let err = command(TokenStream::new(), quote!(fn go(&self);)).unwrap_err();
        assert!(err.to_string().contains("methods with a body"));
    }

    #[test]
    fn notify_properties_expands_to_nothing() {
        let input: DeriveInput = syn::parse_quote! {
            struct Form {
                #[notify_property]
                title: String,
                #[notify_property(name = "Handle", observable = false)]
                login: String,
            }
        };
        assert!(notify_properties(&input).unwrap().is_empty());
    }

    #[test]
    fn notify_properties_reports_every_bad_field() {
        let input: DeriveInput = syn::parse_quote! {
            struct Form {
                #[notify_property(name = "type")]
                kind: u8,
                #[notify_property(observable = "yes")]
                flag: bool,
            }
        };
        assert_eq!(notify_properties(&input).unwrap_err().len(), 2);
    }

    #[test]
    fn notify_properties_rejects_enums() {
        let input: DeriveInput = syn::parse_quote!(enum Form { A });
        let err = notify_properties(&input).unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }
}
