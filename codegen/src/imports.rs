//! The canonical imports of generated source.
//!
//! Generated statements refer to these items by their last path segment,
//! so every generated file imports exactly this list, in this order, and
//! ends with one forced-reference item per import so that the import is
//! used even when the template never prints or renders anything.
use proc_macro2::{Ident, Span};
use syn::{parse_quote, Item, ItemUse, UseName, UsePath, UseTree};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportRole {
    /// Formats values for print blocks and attributes.
    Stringify,
    /// Escapes printed values for HTML.
    HtmlEscape,
    /// The trait of the output stream.
    StringWriter,
    /// The ambient context passed to components.
    Context,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanonicalImport {
    pub path: &'static str,
    pub role: ImportRole,
}

pub const DISPLAY: CanonicalImport = CanonicalImport {
    path: "std::fmt::Display",
    role: ImportRole::Stringify,
};

pub const HTML_ESCAPE: CanonicalImport = CanonicalImport {
    path: "html_escape::encode_text",
    role: ImportRole::HtmlEscape,
};

pub const STRING_WRITER: CanonicalImport = CanonicalImport {
    path: "std::fmt::Write",
    role: ImportRole::StringWriter,
};

pub const CONTEXT: CanonicalImport = CanonicalImport {
    path: "stencil_runtime::Context",
    role: ImportRole::Context,
};

pub const CANONICAL_IMPORTS: [CanonicalImport; 4] = [DISPLAY, HTML_ESCAPE, STRING_WRITER, CONTEXT];

impl CanonicalImport {
    /// The name that generated code uses for the import.
    pub fn name(&self) -> &'static str {
        self.path.rsplit("::").next().unwrap_or(self.path)
    }

    /// Returns true if the segments name this import.
    pub fn matches(&self, segments: &[String]) -> bool {
        let mut expected = self.path.split("::");
        let mut actual = segments.iter();
        loop {
            match (expected.next(), actual.next()) {
                (Some(lhs), Some(rhs)) if lhs == rhs => continue,
                (None, None) => return true,
                _ => return false,
            }
        }
    }

    /// Creates the `use` item for the import.
    pub fn use_item(&self) -> ItemUse {
        let mut segments = self.path.rsplit("::");
        let name = segments.next().unwrap_or(self.path);

        let mut tree = UseTree::Name(UseName {
            ident: Ident::new(name, Span::call_site()),
        });
        for segment in segments {
            tree = UseTree::Path(UsePath {
                ident: Ident::new(segment, Span::call_site()),
                colon2_token: Default::default(),
                tree: Box::new(tree),
            });
        }

        parse_quote!(use #tree;)
    }

    /// Creates an item that is never used but that names the import in
    /// its type or value.
    pub fn forced_reference(&self) -> Item {
        let name = Ident::new(self.name(), Span::call_site());
        match self.role {
            ImportRole::Stringify | ImportRole::StringWriter => {
                parse_quote!(const _: Option<&dyn #name> = None;)
            }
            ImportRole::HtmlEscape => parse_quote!(
                const _: fn(&'static str) -> ::std::borrow::Cow<'static, str> = #name::<str>;
            ),
            ImportRole::Context => parse_quote!(const _: Option<&#name> = None;),
        }
    }
}
