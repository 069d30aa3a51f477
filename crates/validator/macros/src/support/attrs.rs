use syn::{
    Attribute, Ident, Lit, LitStr, Meta, Result, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Parsed attribute arguments container.
#[derive(Debug, Clone)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

/// A single attribute item.
#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A flag like `skip`
    Flag(Ident),
    /// Key-value pair like `name = "value"`
    KeyValue { key: Ident, value: Lit },
    /// A bare literal like `"required,min=1"`
    Positional(Lit),
}

impl AttrArgs {
    /// Find a key-value pair by key name.
    pub fn get_value(&self, key: &str) -> Option<&Lit> {
        self.items.iter().find_map(|item| match item {
            AttrItem::KeyValue { key: k, value } if k == key => Some(value),
            _ => None,
        })
    }

    /// Get a string value by key, erroring if the value is another literal.
    pub fn get_string(&self, key: &str) -> Result<Option<LitStr>> {
        match self.get_value(key) {
            None => Ok(None),
            Some(Lit::Str(s)) => Ok(Some(s.clone())),
            Some(other) => Err(diag::error_spanned(
                other,
                format!("expected a string literal for `{key}`"),
            )),
        }
    }

    /// The first bare literal, which must be a string.
    pub fn positional_string(&self) -> Result<Option<LitStr>> {
        let lit = self.items.iter().find_map(|item| match item {
            AttrItem::Positional(lit) => Some(lit),
            _ => None,
        });
        match lit {
            None => Ok(None),
            Some(Lit::Str(s)) => Ok(Some(s.clone())),
            Some(other) => Err(diag::error_spanned(other, "expected a rule string literal")),
        }
    }

    /// Check if a flag is present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Reject any item that is not a known flag or key.
    pub fn deny_unknown(&self, attr: &str, flags: &[&str], keys: &[&str]) -> Result<()> {
        for item in &self.items {
            match item {
                AttrItem::Flag(f) if !flags.iter().any(|known| f == known) => {
                    return Err(diag::error_spanned(
                        f,
                        format!("unknown flag `{f}` in #[{attr}(...)]"),
                    ));
                }
                AttrItem::KeyValue { key, .. } if !keys.iter().any(|known| key == known) => {
                    return Err(diag::error_spanned(
                        key,
                        format!("unknown key `{key}` in #[{attr}(...)]"),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Parse attribute like `#[binding(...)]` (the whole Attribute, not only args).
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs { items: vec![] })),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] (not name-value)"),
        )),
    }
}

/// Parse all attributes of a given type and merge them.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs { items: vec![] };

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = if input.is_empty() {
            vec![]
        } else {
            Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
                .into_iter()
                .map(|x| x.0)
                .collect()
        };
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.peek(Lit) {
            return Ok(Self(AttrItem::Positional(input.parse()?)));
        }

        let key: Ident = input.parse()?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}
