//! Procedural macros for the tinct capability surface.
//!
//! This crate provides the `#[style_surface]` attribute, which reads the
//! operations declared on a style type and generates the static metadata that
//! the directive engine uses to resolve property names at runtime.
//!
//! # Operation shapes
//!
//! Only `pub fn` items with a `self` receiver are considered:
//!
//! - `fn name(self, ..) -> Self`: a setter. Each parameter is classified by its
//!   declared type (integer primitives, `bool`, `Position`, `Color`, `Border`).
//!   A trailing `&[T]` parameter makes the setter variadic over `T`.
//! - `fn unset_name(self) -> Self`: the unsetter paired with setter `name`.
//! - `fn get_name(&self) -> T`: the getter read by the exporter.
//!
//! Setters whose return type is not the style, or whose parameters have no
//! argument kind, are recorded as rejected so that resolution can explain why
//! the property is unavailable.
//!
//! # Attributes
//!
//! ```ignore
//! #[style_surface]
//! impl Style {
//!     pub fn bold(mut self, v: bool) -> Self { .. }
//!     pub fn unset_bold(mut self) -> Self { .. }
//!     pub fn get_bold(&self) -> bool { .. }
//!
//!     #[surface(derived)]
//!     pub fn get_horizontal_padding(&self) -> usize { .. }
//!
//!     #[surface(skip)]
//!     pub fn debug_name(self) -> String { .. }
//! }
//! ```
//!
//! - `derived`: a read-only getter computed from other properties; the
//!   exporter never emits it.
//! - `skip`: the method is not part of the surface at all.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, Attribute, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, ReturnType, Type,
    Visibility,
};

/// Generate the capability surface for a style type.
///
/// Apply to the inherent `impl` block that declares the style's operations.
/// The block is emitted unchanged apart from `#[surface(..)]` attributes, and
/// an implementation of `tinct::meta::Surfaced` is added for the type.
#[proc_macro_attribute]
pub fn style_surface(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = TokenStream2::from(attr);
        return syn::Error::new_spanned(attr, "style_surface takes no arguments")
            .to_compile_error()
            .into();
    }

    let mut input = parse_macro_input!(item as ItemImpl);

    match impl_style_surface(&mut input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Argument kind a parameter or getter type maps to.
#[derive(Clone, Copy)]
enum Kind {
    Int,
    Bool,
    Position,
    Color,
    Border,
}

impl Kind {
    fn tokens(self) -> TokenStream2 {
        match self {
            Kind::Int => quote! { ::tinct::meta::ArgKind::Int },
            Kind::Bool => quote! { ::tinct::meta::ArgKind::Bool },
            Kind::Position => quote! { ::tinct::meta::ArgKind::Position },
            Kind::Color => quote! { ::tinct::meta::ArgKind::Color },
            Kind::Border => quote! { ::tinct::meta::ArgKind::Border },
        }
    }
}

/// Parsed setter information.
struct SetterInfo {
    method: Ident,
    params: Vec<(Kind, Type)>,
    variadic: Option<(Kind, Type)>,
}

/// Parsed unsetter information.
struct UnsetterInfo {
    method: Ident,
    property: String,
}

/// Parsed getter information.
struct GetterInfo {
    method: Ident,
    property: String,
    kind: Option<Kind>,
    derived: bool,
}

/// Why a setter-shaped method cannot be used as a property.
enum Rejection {
    ReturnsNonStyle,
    UnsupportedParameter(String),
}

struct RejectedInfo {
    method: String,
    reason: Rejection,
}

#[derive(Default)]
struct Operations {
    setters: Vec<SetterInfo>,
    unsetters: Vec<UnsetterInfo>,
    getters: Vec<GetterInfo>,
    rejected: Vec<RejectedInfo>,
}

/// Parsed method-level #[surface(...)] attributes.
struct SurfaceAttrs {
    skip: bool,
    derived: bool,
}

fn impl_style_surface(input: &mut ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &input.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "style_surface only supports inherent impl blocks",
        ));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "style_surface does not support generic style types",
        ));
    }

    let self_ty = (*input.self_ty).clone();
    let style_ident = match &self_ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.clone()),
        _ => None,
    }
    .ok_or_else(|| syn::Error::new_spanned(&self_ty, "style_surface requires a named style type"))?;

    let mut ops = Operations::default();
    for item in input.items.iter_mut() {
        let ImplItem::Fn(method) = item else {
            continue;
        };
        let attrs = take_surface_attrs(&mut method.attrs)?;
        if attrs.skip || !matches!(method.vis, Visibility::Public(_)) {
            continue;
        }
        classify_method(method, &style_ident, attrs.derived, &mut ops);
    }

    let type_tag = style_ident.to_string().to_lowercase();
    let type_name = style_ident.to_string();
    let surface_static = format_ident!("__TINCT_{}_SURFACE", type_name.to_uppercase());

    let setter_fns = generate_setter_fns(&self_ty, &type_tag, &ops.setters);
    let getter_fns = generate_getter_fns(&self_ty, &type_tag, &ops.getters);
    let setter_meta = generate_setter_meta(&type_tag, &ops.setters);
    let unsetter_meta = generate_unsetter_meta(&self_ty, &ops.unsetters);
    let getter_meta = generate_getter_meta(&type_tag, &ops.getters);
    let rejected_meta = generate_rejected_meta(&ops.rejected);

    let expanded = quote! {
        #input

        #setter_fns
        #getter_fns

        /// Static capability surface for this type (generated by #[style_surface]).
        #[allow(non_upper_case_globals)]
        static #surface_static: ::tinct::meta::Surface<#self_ty> = ::tinct::meta::Surface {
            type_name: #type_name,
            setters: &[#(#setter_meta),*],
            unsetters: &[#(#unsetter_meta),*],
            getters: &[#(#getter_meta),*],
            rejected: &[#(#rejected_meta),*],
        };

        impl ::tinct::meta::Surfaced for #self_ty {
            fn surface() -> &'static ::tinct::meta::Surface<Self> {
                &#surface_static
            }
        }
    };

    Ok(expanded)
}

/// Parse and strip #[surface(...)] attributes from a method.
fn take_surface_attrs(attrs: &mut Vec<Attribute>) -> syn::Result<SurfaceAttrs> {
    let mut result = SurfaceAttrs {
        skip: false,
        derived: false,
    };

    for attr in attrs.iter() {
        if !attr.path().is_ident("surface") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                result.skip = true;
                Ok(())
            } else if meta.path.is_ident("derived") {
                result.derived = true;
                Ok(())
            } else {
                Err(meta.error("unknown surface attribute, expected `skip` or `derived`"))
            }
        })?;
    }

    attrs.retain(|attr| !attr.path().is_ident("surface"));
    Ok(result)
}

/// Sort a public method into setters, unsetters, getters, or rejections.
fn classify_method(method: &ImplItemFn, style: &Ident, derived: bool, ops: &mut Operations) {
    let sig = &method.sig;
    let Some(FnArg::Receiver(receiver)) = sig.inputs.first() else {
        // Associated functions (constructors) are not operations.
        return;
    };
    if receiver.colon_token.is_some() {
        // Typed receivers like `self: Box<Self>`.
        return;
    }

    let ident = sig.ident.clone();
    let name = ident.to_string();
    let output = match &sig.output {
        ReturnType::Type(_, ty) => Some(&**ty),
        ReturnType::Default => None,
    };

    if receiver.reference.is_some() {
        if let Some(property) = name.strip_prefix("get_")
            && sig.inputs.len() == 1
            && receiver.mutability.is_none()
        {
            ops.getters.push(GetterInfo {
                method: ident,
                property: property.to_string(),
                kind: output.and_then(classify),
                derived,
            });
        }
        return;
    }

    let returns_style = output.is_some_and(|ty| is_style_type(ty, style));

    if let Some(property) = name.strip_prefix("unset_") {
        if sig.inputs.len() == 1 && returns_style {
            ops.unsetters.push(UnsetterInfo {
                method: ident,
                property: property.to_string(),
            });
        }
        return;
    }
    if name.starts_with("get_") {
        return;
    }

    if !returns_style {
        ops.rejected.push(RejectedInfo {
            method: name,
            reason: Rejection::ReturnsNonStyle,
        });
        return;
    }

    let param_types: Vec<&Type> = sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat_type) => Some(&*pat_type.ty),
            FnArg::Receiver(_) => None,
        })
        .collect();

    match classify_params(&param_types) {
        Ok((params, variadic)) => ops.setters.push(SetterInfo {
            method: ident,
            params,
            variadic,
        }),
        Err(ty) => ops.rejected.push(RejectedInfo {
            method: name,
            reason: Rejection::UnsupportedParameter(ty),
        }),
    }
}

type ClassifiedParams = (Vec<(Kind, Type)>, Option<(Kind, Type)>);

/// Classify setter parameters, returning the offending type name on failure.
fn classify_params(types: &[&Type]) -> Result<ClassifiedParams, String> {
    let mut params = Vec::with_capacity(types.len());
    let mut variadic = None;

    for (index, ty) in types.iter().enumerate() {
        let is_last = index + 1 == types.len();

        if let Some(elem) = slice_element(ty) {
            match classify(elem) {
                Some(kind) if is_last => variadic = Some((kind, elem.clone())),
                _ => return Err(type_to_string(ty)),
            }
            continue;
        }

        match classify(ty) {
            Some(kind) => params.push((kind, (*ty).clone())),
            None => return Err(type_to_string(ty)),
        }
    }

    Ok((params, variadic))
}

/// Map a declared type to its argument kind.
fn classify(ty: &Type) -> Option<Kind> {
    match ty {
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let segment = type_path.path.segments.last()?;
            if !segment.arguments.is_none() {
                return None;
            }
            match segment.ident.to_string().as_str() {
                "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize" => {
                    Some(Kind::Int)
                }
                "bool" => Some(Kind::Bool),
                "Position" => Some(Kind::Position),
                "Color" => Some(Kind::Color),
                "Border" => Some(Kind::Border),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Extract `T` from `&[T]`.
fn slice_element(ty: &Type) -> Option<&Type> {
    match ty {
        Type::Reference(reference) if reference.mutability.is_none() => match &*reference.elem {
            Type::Slice(slice) => Some(&slice.elem),
            _ => None,
        },
        _ => None,
    }
}

/// Check whether a return type is `Self` or the style type itself.
fn is_style_type(ty: &Type, style: &Ident) -> bool {
    match ty {
        Type::Group(group) => is_style_type(&group.elem, style),
        Type::Paren(paren) => is_style_type(&paren.elem, style),
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| {
                segment.arguments.is_none() && (segment.ident == "Self" || segment.ident == *style)
            }),
        _ => false,
    }
}

/// Convert a type to a string representation.
fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

fn setter_fn_ident(type_tag: &str, setter: &SetterInfo) -> Ident {
    format_ident!("__tinct_{}_set_{}", type_tag, setter.method)
}

fn getter_fn_ident(type_tag: &str, getter: &GetterInfo) -> Ident {
    format_ident!("__tinct_{}_get_{}", type_tag, getter.property)
}

/// Generate type-erased setter shims.
fn generate_setter_fns(self_ty: &Type, type_tag: &str, setters: &[SetterInfo]) -> TokenStream2 {
    let fns = setters.iter().map(|setter| {
        let shim = setter_fn_ident(type_tag, setter);
        let method = &setter.method;
        let bindings: Vec<Ident> = (0..setter.params.len())
            .map(|index| format_ident!("__arg{}", index))
            .collect();

        let extracts = setter.params.iter().enumerate().map(|(index, (_, ty))| {
            let binding = &bindings[index];
            quote! {
                let #binding = <#ty as ::tinct::meta::FromArg>::from_arg(
                    args.next().ok_or(::tinct::meta::ArgMismatch::Missing { index: #index })?,
                )?;
            }
        });

        let (rest, call) = match &setter.variadic {
            Some((_, elem)) => (
                quote! {
                    let __rest = args
                        .map(<#elem as ::tinct::meta::FromArg>::from_arg)
                        .collect::<::std::result::Result<::std::vec::Vec<#elem>, _>>()?;
                },
                quote! { target.#method(#(#bindings,)* &__rest) },
            ),
            None => (
                quote! {
                    if args.next().is_some() {
                        return ::std::result::Result::Err(::tinct::meta::ArgMismatch::Excess);
                    }
                },
                quote! { target.#method(#(#bindings),*) },
            ),
        };

        quote! {
            #[doc(hidden)]
            #[allow(non_snake_case, unused_mut)]
            fn #shim(
                target: #self_ty,
                args: ::std::vec::Vec<::tinct::meta::ArgValue>,
            ) -> ::std::result::Result<#self_ty, ::tinct::meta::ArgMismatch> {
                let mut args = args.into_iter();
                #(#extracts)*
                #rest
                ::std::result::Result::Ok(#call)
            }
        }
    });

    quote! { #(#fns)* }
}

/// Generate getter shims for getters whose return type has an argument kind.
fn generate_getter_fns(self_ty: &Type, type_tag: &str, getters: &[GetterInfo]) -> TokenStream2 {
    let fns = getters.iter().filter(|getter| getter.kind.is_some()).map(|getter| {
        let shim = getter_fn_ident(type_tag, getter);
        let method = &getter.method;
        quote! {
            #[doc(hidden)]
            #[allow(non_snake_case)]
            fn #shim(target: &#self_ty) -> ::tinct::meta::ArgValue {
                ::tinct::meta::IntoArg::into_arg(target.#method())
            }
        }
    });

    quote! { #(#fns)* }
}

fn generate_setter_meta(type_tag: &str, setters: &[SetterInfo]) -> Vec<TokenStream2> {
    setters
        .iter()
        .map(|setter| {
            let name = setter.method.to_string();
            let shim = setter_fn_ident(type_tag, setter);
            let params = setter.params.iter().map(|(kind, _)| kind.tokens());
            let variadic = match &setter.variadic {
                Some((kind, _)) => {
                    let kind = kind.tokens();
                    quote! { ::std::option::Option::Some(#kind) }
                }
                None => quote! { ::std::option::Option::None },
            };

            quote! {
                ::tinct::meta::SetterMeta {
                    name: #name,
                    params: &[#(#params),*],
                    variadic: #variadic,
                    call: #shim,
                }
            }
        })
        .collect()
}

fn generate_unsetter_meta(self_ty: &Type, unsetters: &[UnsetterInfo]) -> Vec<TokenStream2> {
    unsetters
        .iter()
        .map(|unsetter| {
            let name = &unsetter.property;
            let method = &unsetter.method;
            quote! {
                ::tinct::meta::UnsetterMeta {
                    name: #name,
                    call: <#self_ty>::#method,
                }
            }
        })
        .collect()
}

fn generate_getter_meta(type_tag: &str, getters: &[GetterInfo]) -> Vec<TokenStream2> {
    getters
        .iter()
        .map(|getter| {
            let name = &getter.property;
            let derived = getter.derived;
            let (kind, read) = match getter.kind {
                Some(kind) => {
                    let kind = kind.tokens();
                    let shim = getter_fn_ident(type_tag, getter);
                    (
                        quote! { ::std::option::Option::Some(#kind) },
                        quote! { ::std::option::Option::Some(#shim) },
                    )
                }
                None => (
                    quote! { ::std::option::Option::None },
                    quote! { ::std::option::Option::None },
                ),
            };

            quote! {
                ::tinct::meta::GetterMeta {
                    name: #name,
                    kind: #kind,
                    read: #read,
                    derived: #derived,
                }
            }
        })
        .collect()
}

fn generate_rejected_meta(rejected: &[RejectedInfo]) -> Vec<TokenStream2> {
    rejected
        .iter()
        .map(|rejected| {
            let name = &rejected.method;
            let reason = match &rejected.reason {
                Rejection::ReturnsNonStyle => quote! { ::tinct::meta::Rejection::ReturnsNonStyle },
                Rejection::UnsupportedParameter(ty) => quote! {
                    ::tinct::meta::Rejection::UnsupportedParameter { ty: #ty }
                },
            };

            quote! {
                ::tinct::meta::RejectedMeta {
                    name: #name,
                    reason: #reason,
                }
            }
        })
        .collect()
}
