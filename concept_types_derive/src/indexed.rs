use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Expr, ExprLit, Fields, Lit, Result};

/// Generate an `Indexed` impl for a unit-only enum.
///
/// The index of a variant is its declaration position.
/// An explicit discriminant is allowed only if it is an integer literal equal to that position.
pub(crate) fn impl_indexed_macro(ast: &DeriveInput) -> Result<TokenStream> {
    let data_enum = match &ast.data {
        Data::Enum(data_enum) => data_enum,
        _ => {
            return Err(Error::new_spanned(
                &ast.ident,
                "Indexed can only be derived for enum types",
            ))
        }
    };
    let name = &ast.ident;
    let type_name = name.to_string();
    let size = data_enum.variants.len();

    let mut variant_identifiers = Vec::with_capacity(size);
    for (i, variant) in data_enum.variants.iter().enumerate() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new_spanned(
                variant,
                format!(
                    "Indexed only applies to enums whose variants have no internal data. \
                     This is violated by {}::{}",
                    name, variant.ident
                ),
            ));
        }
        if let Some((_, discriminant)) = &variant.discriminant {
            check_discriminant(discriminant, i)?;
        }
        variant_identifiers.push(&variant.ident);
    }

    let index_arms = variant_identifiers
        .iter()
        .enumerate()
        .map(|(i, ident)| quote! {Self::#ident => #i});

    let from_index_arms = variant_identifiers
        .iter()
        .enumerate()
        .map(|(i, ident)| quote! {#i => ::core::option::Option::Some(Self::#ident),});

    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::concept_types::Indexed for #name #ty_generics #where_clause {
            const SIZE: usize = #size;
            const TYPE_NAME: &'static str = #type_name;

            fn index(&self) -> usize {
                match *self {
                    #(#index_arms),*
                }
            }

            fn from_index(index: usize) -> ::core::option::Option<Self> {
                match index {
                    #(#from_index_arms)*
                    _ => ::core::option::Option::None
                }
            }
        }
    })
}

fn check_discriminant(discriminant: &Expr, position: usize) -> Result<()> {
    let value = match discriminant {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => int.base10_parse::<usize>()?,
        _ => {
            return Err(Error::new_spanned(
                discriminant,
                "Indexed requires discriminants to be integer literals",
            ))
        }
    };
    if value != position {
        return Err(Error::new_spanned(
            discriminant,
            format!(
                "discriminant {} does not match variant position {}",
                value, position
            ),
        ));
    }
    Ok(())
}
