//! Implementation of the `#[derive(Family)]` macro.
//!
//! The expansion is a single empty trait impl. All of the work is in
//! validating that the marker carries no runtime data.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Fields, GenericParam, Type, TypePath,
};

/// Main implementation of the Family derive macro.
pub fn derive_family_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_family(&input))
}

/// Expands a parsed marker into its `Family` impl, or into a compile error.
fn expand_family(input: &DeriveInput) -> TokenStream2 {
    if let Err(error) = check_marker_shape(input) {
        return error.to_compile_error();
    }

    let name = &input.ident;
    let mut generics = input.generics.clone();
    for parameter in generics.type_params_mut() {
        parameter.bounds.push(parse_quote!('static));
    }
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::genums::Family for #name #type_generics #where_clause {}
    }
}

fn check_marker_shape(input: &DeriveInput) -> syn::Result<()> {
    if let Some(lifetime) = input.generics.params.iter().find_map(|parameter| match parameter {
        GenericParam::Lifetime(lifetime) => Some(lifetime),
        _ => None,
    }) {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Family markers must be 'static and cannot have lifetime parameters.",
        ));
    }

    match &input.data {
        Data::Struct(data_struct) => check_phantom_only(&input.ident, &data_struct.fields),
        Data::Enum(data_enum) => data_enum
            .variants
            .iter()
            .find(|variant| !matches!(variant.fields, Fields::Unit))
            .map_or(Ok(()), |variant| {
                Err(syn::Error::new_spanned(
                    variant,
                    "Family markers carry no data: enum variants must not have fields.",
                ))
            }),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Family cannot be derived for unions.",
        )),
    }
}

fn check_phantom_only(name: &syn::Ident, fields: &Fields) -> syn::Result<()> {
    fields
        .iter()
        .find(|field| !is_phantom_data(&field.ty))
        .map_or(Ok(()), |field| {
            Err(syn::Error::new_spanned(
                field,
                format!(
                    "Family markers carry no data: every field of `{name}` must be `PhantomData`."
                ),
            ))
        })
}

fn is_phantom_data(field_type: &Type) -> bool {
    match field_type {
        Type::Path(TypePath { qself: None, path }) => path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "PhantomData"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::expand_family;
    use rstest::rstest;
    use syn::{parse_quote, DeriveInput};

    fn expand(input: &DeriveInput) -> String {
        expand_family(input).to_string()
    }

    #[rstest]
    fn test_uninhabited_enum_gets_empty_impl() {
        let expanded = expand(&parse_quote! { enum Color {} });
        assert_eq!(expanded, "impl :: genums :: Family for Color { }");
    }

    #[rstest]
    fn test_unit_struct_gets_empty_impl() {
        let expanded = expand(&parse_quote! { pub struct Status; });
        assert_eq!(expanded, "impl :: genums :: Family for Status { }");
    }

    #[rstest]
    fn test_unit_variant_enum_is_accepted() {
        let expanded = expand(&parse_quote! { enum Marker { Only } });
        assert!(expanded.contains(":: genums :: Family for Marker"));
    }

    #[rstest]
    fn test_type_parameters_get_static_bound() {
        let expanded = expand(&parse_quote! {
            struct Scoped<T>(std::marker::PhantomData<T>);
        });
        assert!(expanded.contains("impl < T : 'static >"));
        assert!(expanded.contains("for Scoped < T >"));
    }

    #[rstest]
    #[case::named_field(parse_quote! { struct Carrier { name: String } })]
    #[case::tuple_field(parse_quote! { struct Carrier(u8); })]
    #[case::data_variant(parse_quote! { enum Carrier { Some(u8) } })]
    #[case::union(parse_quote! { union Carrier { left: u8, right: u16 } })]
    #[case::lifetime(parse_quote! { struct Carrier<'a>(std::marker::PhantomData<&'a ()>); })]
    fn test_data_carrying_types_are_rejected(#[case] input: DeriveInput) {
        assert!(expand(&input).contains("compile_error"));
    }
}
