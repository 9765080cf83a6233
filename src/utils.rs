use dioxus::prelude::Attribute;

/// Merge caller-supplied attributes onto a base attribute list.
///
/// An extra attribute replaces the base entry with the same name in place,
/// otherwise it is appended. HTML parsers keep the first occurrence of a
/// duplicated attribute, so the caller's value has to replace the base entry
/// rather than being spread after it.
pub fn merge_attributes(base: Vec<Attribute>, extras: Vec<Attribute>) -> Vec<Attribute> {
    let mut merged = base;
    for extra in extras {
        match merged
            .iter_mut()
            .find(|attribute| attribute.name == extra.name)
        {
            Some(existing) => *existing = extra,
            None => merged.push(extra),
        }
    }
    merged
}
