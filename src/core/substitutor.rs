// src/core/substitutor.rs

use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(&format!(
        r"{}([^{{}}]+){}",
        regex::escape(PLACEHOLDER_OPEN),
        regex::escape(PLACEHOLDER_CLOSE)
    ))
    .expect("placeholder pattern must compile");
}

/// Runtime values available to annotation text, keyed by placeholder name.
pub type AnnotationVars = HashMap<String, String>;

/// Replaces every `{$name}` in `text` whose name is in `vars`.
///
/// Unknown placeholders are kept verbatim. Substituted values are not scanned
/// again, so a value that itself contains `{$...}` is inserted as-is.
pub fn substitute(text: &str, vars: &AnnotationVars) -> String {
    if vars.is_empty() || !text.contains(PLACEHOLDER_OPEN) {
        return text.to_string();
    }

    PLACEHOLDER_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let name = caps.get(1).map_or("", |m| m.as_str());
            match vars.get(name) {
                Some(value) => value.clone(),
                None => {
                    log::trace!("Leaving unknown placeholder '{}' untouched.", whole);
                    whole.to_string()
                }
            }
        })
        .into_owned()
}
