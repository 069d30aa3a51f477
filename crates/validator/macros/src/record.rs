use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Field, Ident, LitStr, Type, Visibility, parse_macro_input};

use crate::support::{attrs, diag, utils};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// One entry of the generated descriptor table.
struct Entry<'f> {
    ident: &'f Ident,
    ty: &'f Type,
    name: LitStr,
    rules: Option<LitStr>,
}

impl<'f> Entry<'f> {
    /// Returns `None` for fields that stay out of the table.
    fn from_field(field: &'f Field) -> syn::Result<Option<Self>> {
        let args = attrs::parse_attrs(&field.attrs, "binding")?;
        args.deny_unknown("binding", &["skip"], &["name", "rules"])?;

        let Some(ident) = field.ident.as_ref() else {
            return Err(diag::error_spanned(field, "Record fields must be named"));
        };

        if args.has_flag("skip") || matches!(field.vis, Visibility::Inherited) {
            return Ok(None);
        }

        let rules = match (args.positional_string()?, args.get_string("rules")?) {
            (Some(positional), Some(_)) => {
                return Err(diag::error_spanned(
                    &positional,
                    "rules given twice; use either a bare string or `rules = \"...\"`",
                ));
            }
            (positional, keyed) => positional.or(keyed),
        };

        let name = args
            .get_string("name")?
            .unwrap_or_else(|| LitStr::new(&utils::unraw(ident), ident.span()));
        if name.value().is_empty() {
            return Err(diag::error_spanned(&name, "field name must not be empty"));
        }

        Ok(Some(Self {
            ident,
            ty: &field.ty,
            name,
            rules,
        }))
    }

    fn descriptor(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.rules {
            Some(rules) => quote! {
                ::binding_validator::FieldDescriptor::new(#name).with_rules(#rules)
            },
            None => quote! { ::binding_validator::FieldDescriptor::new(#name) },
        }
    }
}

pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let fields = utils::require_named_fields(&input)?;

    let mut entries = Vec::with_capacity(fields.named.len());
    for field in &fields.named {
        if let Some(entry) = Entry::from_field(field)? {
            entries.push(entry);
        }
    }

    let descriptors = entries.iter().map(Entry::descriptor);
    let arms = entries.iter().enumerate().map(|(index, entry)| {
        let ident = entry.ident;
        quote! {
            #index => ::core::option::Option::Some(
                ::binding_validator::Bindable::field_value(&self.#ident)
            ),
        }
    });

    // Concrete field types are checked where they are used; only generic
    // structs need the bounds spelled out.
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for entry in &entries {
            let ty = entry.ty;
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: ::binding_validator::Bindable));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::binding_validator::Record for #struct_name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                ::core::stringify!(#struct_name)
            }

            fn fields(&self) -> &'static [::binding_validator::FieldDescriptor] {
                const FIELDS: &[::binding_validator::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            #[allow(clippy::match_single_binding)]
            fn field_value(
                &self,
                index: usize,
            ) -> ::core::option::Option<::binding_validator::FieldValue<'_>> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::binding_validator::Bindable for #struct_name #ty_generics #where_clause {
            fn kind() -> ::binding_validator::ValueKind {
                ::binding_validator::ValueKind::Composite
            }

            fn field_value(&self) -> ::binding_validator::FieldValue<'_> {
                ::binding_validator::FieldValue::Composite(self)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand_str(input: DeriveInput) -> String {
        expand(input).unwrap().to_string()
    }

    #[test]
    fn table_follows_declaration_order() {
        let out = expand_str(syn::parse_quote! {
            pub struct Req {
                #[binding("required,min=1")]
                pub id: i64,
                #[binding(rules = "required,gte=60")]
                pub score: i64,
                pub custom: Custom,
            }
        });

        let id = out.find("\"id\"").unwrap();
        let score = out.find("\"score\"").unwrap();
        let custom = out.find("\"custom\"").unwrap();
        assert!(id < score && score < custom, "{out}");
        assert!(out.contains("\"required,min=1\""));
        assert!(out.contains("\"required,gte=60\""));
    }

    #[test]
    fn private_and_skipped_fields_are_left_out() {
        let out = expand_str(syn::parse_quote! {
            pub struct Account {
                #[binding("required")]
                pub email: String,
                #[binding("required")]
                secret: String,
                #[binding(skip)]
                pub cache: Vec<u8>,
            }
        });

        assert!(out.contains("\"email\""));
        assert!(!out.contains("\"secret\""));
        assert!(!out.contains("\"cache\""));
        assert!(!out.contains("self . secret"));
    }

    #[test]
    fn crate_visible_fields_are_included() {
        let out = expand_str(syn::parse_quote! {
            pub struct Internal {
                pub(crate) level: u8,
            }
        });
        assert!(out.contains("\"level\""));
    }

    #[test]
    fn name_override_and_raw_identifiers() {
        let out = expand_str(syn::parse_quote! {
            pub struct Item {
                #[binding(name = "ID", rules = "required")]
                pub id: u32,
                pub r#type: String,
            }
        });

        assert!(out.contains("\"ID\""));
        assert!(out.contains("\"type\""));
        assert!(!out.contains("\"r#type\""));
    }

    #[test]
    fn generic_fields_get_bounds() {
        let out = expand(syn::parse_quote! {
            pub struct Wrapper<T> {
                pub inner: T,
            }
        })
        .unwrap();
        let file: syn::File = syn::parse2(out).unwrap();

        for item in file.items {
            let syn::Item::Impl(item) = item else {
                panic!("expected only impl blocks");
            };
            let where_clause = item.generics.where_clause.unwrap();
            assert_eq!(where_clause.predicates.len(), 1);
        }
    }

    #[test]
    fn duplicate_rules_are_rejected() {
        let err = expand(syn::parse_quote! {
            pub struct Bad {
                #[binding("required", rules = "min=1")]
                pub id: i64,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("rules given twice"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = expand(syn::parse_quote! {
            pub struct Bad {
                #[binding(rule = "required")]
                pub id: i64,
            }
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "unknown key `rule` in #[binding(...)]");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(
            expand(syn::parse_quote! {
                pub struct Bad {
                    #[binding(name = "")]
                    pub id: i64,
                }
            })
            .is_err()
        );
    }
}
