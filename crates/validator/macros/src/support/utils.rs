use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident};

/// Return named fields if the input is a struct that has them; otherwise error.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&syn::FieldsNamed> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Record can only be derived for structs",
            ));
        }
    };

    match fields {
        Fields::Named(n) => Ok(n),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "Record requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            fields.span(),
            "Record requires a non-unit struct with fields",
        )),
    }
}

/// Identifier text without a raw-identifier prefix (`r#type` -> `type`).
pub fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
