mod attrs;

use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Error, Field, Fields, Ident, Result};

use crate::paths::{core as core_paths, std as std_paths};
use attrs::{ContainerAttrs, FieldAttrs, FieldRole};

/// Helper to extract named struct fields
fn extract_struct_fields(
    input: &DeriveInput,
) -> Result<&syn::punctuated::Punctuated<Field, syn::token::Comma>> {
    let struct_name = &input.ident;
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => Ok(&fields.named),
            Fields::Unnamed(_) => Err(Error::new_spanned(
                struct_name,
                "Entity cannot be derived for tuple structs",
            )),
            Fields::Unit => Err(Error::new_spanned(
                struct_name,
                "Entity cannot be derived for unit structs",
            )),
        },
        _ => Err(Error::new_spanned(
            struct_name,
            "Entity can only be derived for structs",
        )),
    }
}

/// Generates `impl Entity` plus one `FieldRef` constant per field.
pub(crate) fn generate_entity_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let container = ContainerAttrs::parse(&input.attrs)?;
    let fields = extract_struct_fields(&input)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let turbofish = ty_generics.as_turbofish();

    let entity = core_paths::entity();
    let column_field = core_paths::column_field();
    let field_ref = core_paths::field_ref();
    let result = std_paths::result();

    let entity_name = container
        .name
        .clone()
        .unwrap_or_else(|| struct_name.unraw().to_string());

    let mut columns = Vec::new();
    let mut relations = Vec::new();
    let mut ignored = Vec::new();
    let mut field_refs = Vec::new();

    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;
        let attrs = FieldAttrs::parse(field)?;
        let name = ident.unraw().to_string();
        let ty = &field.ty;
        let vis = &field.vis;

        let const_name = field_const_name(&name);
        field_refs.push(quote! {
            #vis const #const_name: #field_ref<#struct_name #ty_generics, #ty> = {
                fn access #impl_generics (entity: &mut #struct_name #ty_generics) -> &mut #ty #where_clause {
                    &mut entity.#ident
                }
                #field_ref::new(#name, access #turbofish)
            };
        });

        match attrs.role {
            FieldRole::Relation => relations.push(name),
            FieldRole::Ignore => ignored.push(name),
            FieldRole::Column => {
                let column = attrs
                    .column
                    .map(|lit| lit.value())
                    .unwrap_or_else(|| container.column_for(&name));
                let type_name = quote!(#ty).to_string().replace(' ', "");
                let optional = attrs.optional;
                columns.push(quote! {
                    #column_field::<Self>::new(
                        #name,
                        #column,
                        #type_name,
                        #optional,
                        |entity, value| {
                            entity.#ident = value.convert()?;
                            #result::Ok(())
                        },
                    )
                });
            }
        }
    }

    Ok(quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_refs)*
        }

        impl #impl_generics #entity for #struct_name #ty_generics #where_clause {
            const NAME: &'static str = #entity_name;
            const RELATIONS: &'static [&'static str] = &[#(#relations),*];
            const IGNORED: &'static [&'static str] = &[#(#ignored),*];

            fn columns() -> ::std::vec::Vec<#column_field<Self>> {
                ::std::vec![#(#columns),*]
            }
        }
    })
}

/// Associated constants of `Entity` that a field constant must not shadow.
const RESERVED_CONSTS: &[&str] = &["NAME", "RELATIONS", "IGNORED"];

fn field_const_name(field: &str) -> Ident {
    let shouty = field.to_shouty_snake_case();
    if RESERVED_CONSTS.contains(&shouty.as_str()) {
        format_ident!("{}_FIELD", shouty)
    } else {
        format_ident!("{}", shouty)
    }
}
