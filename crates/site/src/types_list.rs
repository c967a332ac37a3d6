//! Content types shown in navigation

use portalkit_core::TypeRegistry;

/// Registered type names minus `blacklist`, in registry order
pub fn types_to_list<R, S>(registry: &R, blacklist: &[S]) -> Vec<String>
where
    R: TypeRegistry + ?Sized,
    S: AsRef<str>,
{
    registry
        .type_names()
        .into_iter()
        .filter(|name| !blacklist.iter().any(|b| b.as_ref() == *name))
        .map(str::to_string)
        .collect()
}
