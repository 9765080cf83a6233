#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::merge_attributes;

/// Path geometry of the chevron glyph. Fixed, shared by every instance.
const CHEVRON_LEFT_PATH: &str = "M13.3334 17.2917C13.1675 17.2925 13.0083 17.2264 12.8917 17.1083L6.22502 10.4417C5.98131 10.1977 5.98131 9.80236 6.22502 9.55835L12.8917 2.89168C13.1379 2.66222 13.5217 2.66899 13.7597 2.907C13.9977 3.14501 14.0045 3.52876 13.775 3.77501L7.55002 10L13.775 16.225C14.0187 16.469 14.0187 16.8643 13.775 17.1083C13.6584 17.2264 13.4992 17.2925 13.3334 17.2917Z";

/// Left-pointing chevron icon.
///
/// `class` is appended to the `app_icons` base class; any other attribute is
/// forwarded to the root `svg` element and wins over the fixed ones on
/// collision.
#[component]
pub fn ChevronLeft(
    #[props(default)] class: String,
    #[props(extends = GlobalAttributes, extends = SvgAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let attributes = merge_attributes(
        vec![
            Attribute::new("viewBox", "0 0 20 20", None, false),
            Attribute::new("class", format!("app_icons {class}"), None, false),
        ],
        attributes,
    );

    rsx! {
        svg {
            ..attributes,

            path { d: CHEVRON_LEFT_PATH, fill_rule: "evenodd" }
        }
    }
}

// `GlobalAttributes` and `SvgAttributes` both define `id` with the same
// name/namespace, which makes the extension-trait method call ambiguous;
// an inherent method takes precedence and resolves it.
#[cfg(test)]
impl<T> ChevronLeftPropsBuilder<T>
where
    Self: HasAttributes,
{
    fn id<V>(self, value: impl dioxus_core::IntoAttributeValue<V>) -> Self {
        let d = dioxus_elements::global_attributes::id;
        self.push_attribute(d.0, d.1, value, d.2)
    }
}
