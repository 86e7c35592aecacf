//! Transform that rewrites the imports of a generated file so that it
//! imports the canonical list exactly once.
//!
//! Code blocks may import any of the canonical items themselves, and a
//! generated file may be fed through the generator again, so the transform
//! first strips every canonical import and every forced reference, then
//! prepends the canonical imports and appends the forced references.
//! Applying the transform to its own output does not change the file.
use log::trace;
use syn::punctuated::Punctuated;
use syn::{File, Item, UsePath, UseTree};

use crate::imports::CanonicalImport;

pub fn apply(file: &mut File, imports: &[CanonicalImport]) {
    let forced: Vec<Item> = imports.iter().map(|i| i.forced_reference()).collect();

    let items = std::mem::take(&mut file.items);
    let mut resolved: Vec<Item> = Vec::with_capacity(items.len() + 2 * imports.len());
    resolved.extend(imports.iter().map(|i| Item::Use(i.use_item())));

    let mut removed = 0;
    for item in items {
        match item {
            Item::Use(mut item_use) => {
                let mut prefix = vec![];
                match strip_tree(&mut prefix, item_use.tree, imports) {
                    Some(tree) => {
                        item_use.tree = tree;
                        resolved.push(Item::Use(item_use));
                    }
                    None => removed += 1,
                }
            }
            item if forced.contains(&item) => removed += 1,
            item => resolved.push(item),
        }
    }

    resolved.extend(forced);
    trace!(
        "Injected {} imports, removed {} existing items",
        imports.len(),
        removed
    );

    file.items = resolved;
}

/// Removes the canonical paths from a use tree. Returns `None` if nothing
/// remains of the tree.
fn strip_tree(
    prefix: &mut Vec<String>,
    tree: UseTree,
    imports: &[CanonicalImport],
) -> Option<UseTree> {
    match tree {
        UseTree::Path(path) => {
            prefix.push(path.ident.to_string());
            let inner = strip_tree(prefix, *path.tree, imports);
            prefix.pop();

            Some(UseTree::Path(UsePath {
                ident: path.ident,
                colon2_token: path.colon2_token,
                tree: Box::new(inner?),
            }))
        }
        UseTree::Name(name) => {
            let ident = name.ident.to_string();
            keep_leaf(prefix, &ident, imports).then_some(UseTree::Name(name))
        }
        UseTree::Rename(rename) => {
            let ident = rename.ident.to_string();
            keep_leaf(prefix, &ident, imports).then_some(UseTree::Rename(rename))
        }
        UseTree::Glob(glob) => Some(UseTree::Glob(glob)),
        UseTree::Group(mut group) => {
            let original = group.items.len();
            let items: Punctuated<UseTree, syn::Token![,]> = std::mem::take(&mut group.items)
                .into_iter()
                .filter_map(|item| strip_tree(prefix, item, imports))
                .collect();

            // `self` is only allowed within a group
            let only_self = items.len() == 1 && items.iter().all(is_self_leaf);
            match items.len() {
                0 => None,
                1 if items.len() < original && !only_self => items.into_iter().next(),
                _ => {
                    group.items = items;
                    Some(UseTree::Group(group))
                }
            }
        }
    }
}

fn is_self_leaf(tree: &UseTree) -> bool {
    match tree {
        UseTree::Name(name) => name.ident == "self",
        UseTree::Rename(rename) => rename.ident == "self",
        _ => false,
    }
}

/// Returns true if the leaf `ident` under `prefix` is not a canonical import.
fn keep_leaf(prefix: &[String], ident: &str, imports: &[CanonicalImport]) -> bool {
    let mut segments = prefix.to_vec();
    // `use a::b::{self}` imports `a::b`
    if ident != "self" {
        segments.push(ident.to_string());
    }
    !imports.iter().any(|import| import.matches(&segments))
}
