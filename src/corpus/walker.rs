// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Item collection over `syn` parse trees.
//!
//! Collection runs in two steps. The first walks every file and records
//! types, syntax entries and pending `impl` facts. The second binds each
//! pending `impl` to its self type once every type of the corpus is known,
//! so impl blocks may appear in any file and in any order.

use darling::ast::NestedMeta;
use proc_macro2::Span;
use syn::{
    Attribute, Expr, Fields, ImplItem, Item, ItemEnum, ItemImpl, ItemStruct, Lit, Meta, ReturnType,
    Type, punctuated::Punctuated, spanned::Spanned
};
use tracing::{debug, trace, warn};

use super::{ParseFailure, SourceFile, SynModel, Target};
use crate::{
    model::{
        DeclId, DeclKind, DeclarationModel, FieldDecl, Location, Marker, MarkerValue, MethodDecl,
        Receiver, SyntaxDecl, TypeDecl, TypeKey, TypeShape, VariantDecl
    },
    utils::{
        docs::collect_doc_text,
        tokens::{compact_of, path_text, visibility_text}
    }
};

struct PendingMethod {
    scope:   String,
    self_ty: String,
    decl:    MethodDecl,
    syntax:  usize
}

struct PendingTraitImpl {
    scope:   String,
    self_ty: String,
    trait_:  String
}

#[derive(Default)]
struct Collector {
    model:       SynModel,
    methods:     Vec<PendingMethod>,
    trait_impls: Vec<PendingTraitImpl>
}

/// Parse `files` and build the model.
pub(super) fn build(files: &[SourceFile]) -> SynModel {
    let mut collector = Collector::default();

    for file in files {
        let source_name = file.path.display().to_string();
        match syn::parse_file(&file.text) {
            Ok(parsed) => collector.items(&parsed.items, &file.module_path, &source_name),
            Err(err) => {
                warn!(file = %source_name, error = %err, "skipping unparsable source file");
                collector.model.parse_failures.push(ParseFailure {
                    path:    file.path.clone(),
                    message: err.to_string()
                });
            }
        }
    }

    collector.bind_impls();
    let model = collector.model;
    debug!(
        types = model.types.len(),
        methods = model.methods.len(),
        declarations = model.syntax.len(),
        "corpus model built"
    );
    model
}

fn location(span: Span, file: &str) -> Location {
    let start = span.start();
    Location::new(file, start.line, start.column + 1)
}

impl Collector {
    fn items(&mut self, items: &[Item], scope: &str, file: &str) {
        for item in items {
            match item {
                Item::Enum(item) => self.enum_item(item, scope, file),
                Item::Struct(item) => self.struct_item(item, scope, file),
                Item::Impl(item) => self.impl_item(item, scope, file),
                Item::Mod(module) => {
                    if let Some((_, content)) = &module.content {
                        let nested = format!("{scope}::{}", module.ident);
                        self.items(content, &nested, file);
                    }
                }
                _ => {}
            }
        }
    }

    fn push_syntax(
        &mut self,
        kind: DeclKind,
        name: String,
        attrs: &[Attribute],
        location: Location,
        target: Target
    ) -> usize {
        let id = self.model.syntax.len();
        self.model.syntax.push(SyntaxDecl {
            id: DeclId(id),
            kind,
            name,
            attribute_names: attribute_names(attrs),
            location
        });
        self.model.targets.push(target);
        id
    }

    fn push_type(&mut self, decl: TypeDecl, attrs: &[Attribute]) -> usize {
        let index = self.model.types.len();
        for derived in derives(attrs) {
            self.model
                .capabilities
                .insert((decl.key.clone(), derived));
        }
        self.model.by_key.insert(decl.key.clone(), index);
        self.model
            .by_name
            .entry(decl.name.clone())
            .or_default()
            .push(index);
        self.model.types.push(decl);
        index
    }

    fn enum_item(&mut self, item: &ItemEnum, scope: &str, file: &str) {
        let variants: Vec<VariantDecl> = item
            .variants
            .iter()
            .map(|v| VariantDecl {
                name:         v.ident.to_string(),
                discriminant: v.discriminant.as_ref().map(|(_, expr)| compact_of(expr)),
                has_fields:   !matches!(v.fields, Fields::Unit),
                markers:      markers(&v.attrs, file),
                docs:         collect_doc_text(&v.attrs),
                location:     location(v.ident.span(), file)
            })
            .collect();

        let name = item.ident.to_string();
        let type_location = location(item.ident.span(), file);
        let ty = self.push_type(
            TypeDecl {
                key:         TypeKey::new(scope, &name),
                name:        name.clone(),
                module_path: scope.to_string(),
                visibility:  visibility_text(&item.vis),
                shape:       TypeShape::Enum(variants),
                generic:     !item.generics.params.is_empty(),
                markers:     markers(&item.attrs, file),
                docs:        collect_doc_text(&item.attrs),
                location:    type_location.clone()
            },
            &item.attrs
        );

        self.push_syntax(DeclKind::Enum, name, &item.attrs, type_location, Target::Type(ty));
        for (index, v) in item.variants.iter().enumerate() {
            self.push_syntax(
                DeclKind::Variant,
                v.ident.to_string(),
                &v.attrs,
                location(v.ident.span(), file),
                Target::Variant { ty, index }
            );
        }
    }

    fn struct_item(&mut self, item: &ItemStruct, scope: &str, file: &str) {
        let fields: Vec<FieldDecl> = item
            .fields
            .iter()
            .enumerate()
            .map(|(index, f)| FieldDecl {
                name: f.ident.as_ref().map(ToString::to_string),
                index,
                ty: compact_of(&f.ty),
                markers: markers(&f.attrs, file),
                docs: collect_doc_text(&f.attrs),
                location: location(field_span(f), file)
            })
            .collect();

        let name = item.ident.to_string();
        let type_location = location(item.ident.span(), file);
        let ty = self.push_type(
            TypeDecl {
                key:         TypeKey::new(scope, &name),
                name:        name.clone(),
                module_path: scope.to_string(),
                visibility:  visibility_text(&item.vis),
                shape:       TypeShape::Struct(fields),
                generic:     !item.generics.params.is_empty(),
                markers:     markers(&item.attrs, file),
                docs:        collect_doc_text(&item.attrs),
                location:    type_location.clone()
            },
            &item.attrs
        );

        self.push_syntax(DeclKind::Struct, name, &item.attrs, type_location, Target::Type(ty));
        for (index, f) in item.fields.iter().enumerate() {
            let name = f
                .ident
                .as_ref()
                .map_or_else(|| index.to_string(), ToString::to_string);
            self.push_syntax(
                DeclKind::Field,
                name,
                &f.attrs,
                location(field_span(f), file),
                Target::Field { ty, index }
            );
        }
    }

    fn impl_item(&mut self, item: &ItemImpl, scope: &str, file: &str) {
        let Type::Path(self_path) = item.self_ty.as_ref() else {
            trace!(file, "impl for non-path type ignored");
            return;
        };
        let self_ty = path_text(&self_path.path);

        if let Some((_, trait_path, _)) = &item.trait_ {
            if let Some(last) = trait_path.segments.last() {
                self.trait_impls.push(PendingTraitImpl {
                    scope: scope.to_string(),
                    self_ty,
                    trait_: last.ident.to_string()
                });
            }
            return;
        }

        for impl_item in &item.items {
            let ImplItem::Fn(method) = impl_item else {
                continue;
            };
            let sig = &method.sig;
            let method_location = location(sig.ident.span(), file);
            let decl = MethodDecl {
                owner:       TypeKey::from_qualified(self_ty.clone()),
                name:        sig.ident.to_string(),
                receiver:    receiver_of(sig),
                params:      sig.inputs.len(),
                return_type: return_type_of(&sig.output),
                markers:     markers(&method.attrs, file),
                docs:        collect_doc_text(&method.attrs),
                location:    method_location.clone()
            };
            let syntax = self.push_syntax(
                DeclKind::Method,
                decl.name.clone(),
                &method.attrs,
                method_location,
                Target::Unresolved
            );
            self.methods.push(PendingMethod {
                scope: scope.to_string(),
                self_ty: self_ty.clone(),
                decl,
                syntax
            });
        }
    }

    fn bind_impls(&mut self) {
        for pending in std::mem::take(&mut self.trait_impls) {
            let key = self
                .model
                .find_type(&pending.scope, &pending.self_ty)
                .map(|ty| ty.key.clone());
            if let Some(key) = key {
                self.model.capabilities.insert((key, pending.trait_));
            }
        }

        for pending in std::mem::take(&mut self.methods) {
            let key = self
                .model
                .find_type(&pending.scope, &pending.self_ty)
                .map(|ty| ty.key.clone());
            let Some(key) = key else {
                trace!(
                    method = %pending.decl.name,
                    self_ty = %pending.self_ty,
                    "method owner not in corpus"
                );
                continue;
            };
            let index = self.model.methods.len();
            let mut decl = pending.decl;
            decl.owner = key.clone();
            self.model.methods.push(decl);
            self.model
                .methods_by_owner
                .entry(key)
                .or_default()
                .push(index);
            self.model.targets[pending.syntax] = Target::Method(index);
        }
    }
}

fn field_span(field: &syn::Field) -> Span {
    field
        .ident
        .as_ref()
        .map_or_else(|| field.ty.span(), proc_macro2::Ident::span)
}

fn attribute_names(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .filter_map(|attr| attr.path().segments.last().map(|s| s.ident.to_string()))
        .collect()
}

fn derives(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<syn::Path, syn::Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .filter_map(|path| path.segments.last().map(|s| s.ident.to_string()))
        .collect()
}

fn receiver_of(sig: &syn::Signature) -> Receiver {
    let Some(receiver) = sig.receiver() else {
        return Receiver::None;
    };
    if receiver.reference.is_some() {
        return if receiver.mutability.is_some() {
            Receiver::RefMut
        } else {
            Receiver::Ref
        };
    }
    match receiver.ty.as_ref() {
        Type::Reference(reference) if reference.mutability.is_some() => Receiver::RefMut,
        Type::Reference(_) => Receiver::Ref,
        _ => Receiver::Value
    }
}

fn return_type_of(output: &ReturnType) -> Option<String> {
    match output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Tuple(tuple) if tuple.elems.is_empty() => None,
            ty => Some(compact_of(ty))
        }
    }
}

/// Every non-doc attribute as a marker.
fn markers(attrs: &[Attribute], file: &str) -> Vec<Marker> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .map(|attr| parse_marker(attr, file))
        .collect()
}

fn parse_marker(attr: &Attribute, file: &str) -> Marker {
    let name = attr
        .path()
        .segments
        .last()
        .map(|s| s.ident.to_string())
        .unwrap_or_default();
    let mut marker = Marker::new(name, location(attr.span(), file));

    match &attr.meta {
        Meta::Path(_) => {}
        Meta::NameValue(meta) => match expr_value(&meta.value) {
            Some(value) => marker.positional.push(value),
            None => marker.malformed = true
        },
        Meta::List(list) => match NestedMeta::parse_meta_list(list.tokens.clone()) {
            Ok(items) => {
                for item in items {
                    if !push_nested(&mut marker, item) {
                        marker.malformed = true;
                    }
                }
            }
            Err(_) => marker.malformed = true
        }
    }
    marker
}

fn push_nested(marker: &mut Marker, item: NestedMeta) -> bool {
    match item {
        NestedMeta::Lit(lit) => match lit_value(&lit) {
            Some(value) => {
                marker.positional.push(value);
                true
            }
            None => false
        },
        NestedMeta::Meta(Meta::Path(path)) => {
            marker.args.push((path_text(&path), MarkerValue::Bool(true)));
            true
        }
        NestedMeta::Meta(Meta::NameValue(meta)) => match expr_value(&meta.value) {
            Some(value) => {
                marker.args.push((path_text(&meta.path), value));
                true
            }
            None => false
        },
        NestedMeta::Meta(Meta::List(_)) => false
    }
}

fn lit_value(lit: &Lit) -> Option<MarkerValue> {
    match lit {
        Lit::Str(s) => Some(MarkerValue::Str(s.value())),
        Lit::Bool(b) => Some(MarkerValue::Bool(b.value)),
        Lit::Int(i) => i.base10_parse::<i128>().ok().map(MarkerValue::Int),
        _ => None
    }
}

fn expr_value(expr: &Expr) -> Option<MarkerValue> {
    match expr {
        Expr::Lit(lit) => lit_value(&lit.lit),
        Expr::Path(path) if path.qself.is_none() => Some(MarkerValue::Path(path_text(&path.path))),
        _ => None
    }
}
