use ahash::AHashMap;
use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::{quote, quote_spanned, ToTokens};
use syn::spanned::Spanned;

#[proc_macro_derive(Schema, attributes(schema))]
pub fn schema_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    match impl_schema(&input) {
        Ok(output) => output.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn impl_schema(ast: &syn::DeriveInput) -> darling::Result<TokenStream> {
    match &ast.data {
        syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Unnamed(fields),
            ..
        }) => {
            if fields.unnamed.is_empty() {
                return Err(darling::Error::custom(
                    "a schema needs at least one column type",
                )
                .with_span(&ast.ident));
            }
        }
        _ => {
            return Err(darling::Error::custom(
                "`Schema` can only be derived for tuple structs whose fields are the column types",
            )
            .with_span(&ast.ident));
        }
    }

    let options = SchemaOptions::from_derive_input(ast)?;

    let ident = &options.ident;
    let (impl_generics, ty_generics, where_clause) = options.generics.split_for_impl();

    let fields = options
        .data
        .take_struct()
        .ok_or_else(|| darling::Error::unsupported_shape("enum").with_span(ast))?
        .fields;

    let mut errors = darling::Error::accumulator();

    // Columns are addressed by type, so the same type may only appear once.
    let mut seen: AHashMap<String, usize> = AHashMap::new();
    for (position, field) in fields.iter().enumerate() {
        let key = field.ty.to_token_stream().to_string();
        let first = *seen.entry(key).or_insert(position);
        if first != position {
            errors.push(
                darling::Error::custom(format!(
                    "column type `{}` is already used by column {}; schema column types must be distinct",
                    field.ty.to_token_stream(),
                    first
                ))
                .with_span(&field.ty),
            );
        }
    }

    errors.finish()?;

    let width = fields.len();
    let types: Vec<&syn::Type> = fields.iter().map(|field| &field.ty).collect();
    let members: Vec<syn::Index> = (0..width).map(syn::Index::from).collect();
    let positions: Vec<usize> = (0..width).collect();

    let headers = fields.iter().map(|field| match &field.header {
        Some(header) => quote! { ::std::string::String::from(#header) },
        None => {
            let ty = &field.ty;
            quote! { ::typetable::names::type_header::<#ty>() }
        }
    });

    // Column types must satisfy the `Cell + Default` contract; checked at each type's span.
    let column_checks = types.iter().map(|ty| {
        quote_spanned! {ty.span()=>
            ::typetable::assert_column::<#ty>();
        }
    });

    let alias = options.table.as_ref().map(|table| {
        let vis = &options.vis;
        // Type aliases do not enforce bounds, so only the parameters are repeated.
        let params: Vec<TokenStream> = options
            .generics
            .params
            .iter()
            .map(|param| match param {
                syn::GenericParam::Type(param) => param.ident.to_token_stream(),
                syn::GenericParam::Lifetime(param) => param.lifetime.to_token_stream(),
                syn::GenericParam::Const(param) => {
                    let (ident, ty) = (&param.ident, &param.ty);
                    quote! { const #ident: #ty }
                }
            })
            .collect();
        let generics = if params.is_empty() {
            TokenStream::new()
        } else {
            quote! { <#(#params),*> }
        };
        quote! {
            #vis type #table #generics = ::typetable::Table<#ident #ty_generics>;
        }
    });

    Ok(quote! {
        impl #impl_generics ::typetable::Schema for #ident #ty_generics #where_clause {
            const WIDTH: usize = #width;

            fn blank() -> Self {
                #(#column_checks)*
                Self(#(<#types as ::std::default::Default>::default()),*)
            }

            fn headers() -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#headers),*]
            }
        }

        #(
            impl #impl_generics ::typetable::Field<#types> for #ident #ty_generics #where_clause {
                const POSITION: usize = #positions;

                #[inline]
                fn field(&self) -> &#types {
                    &self.#members
                }

                #[inline]
                fn field_mut(&mut self) -> &mut #types {
                    &mut self.#members
                }
            }
        )*

        #alias
    })
}

#[derive(FromDeriveInput)]
#[darling(attributes(schema), supports(struct_tuple))]
struct SchemaOptions {
    ident: syn::Ident,
    vis: syn::Visibility,
    generics: syn::Generics,
    data: darling::ast::Data<(), FieldOptions>,
    #[darling(default)]
    table: Option<syn::Ident>,
}

#[derive(FromField)]
#[darling(attributes(schema))]
struct FieldOptions {
    ty: syn::Type,
    #[darling(default)]
    header: Option<String>,
}
