//! Type hints recovered from constructor documentation.
//!
//! Recognizes `@param <Type> $<name>` tags, where `<Type>` may be a
//! namespaced (`\App\Foo`) or path-qualified (`app::Foo`) name.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static PARAM_TAG: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"@param\s*([A-Za-z0-9_\\:]+)\s*\$(\w+)").expect("static @param pattern is valid")
});

/// Finds the type documented for `parameter` in `doc`, if any.
pub(crate) fn type_for_param(doc: &str, parameter: &str) -> Option<String> {
  let found = PARAM_TAG
    .captures_iter(doc)
    .find(|caps| &caps[2] == parameter)
    .map(|caps| caps[1].trim_start_matches('\\').to_owned())
    .filter(|name| !name.is_empty());
  trace!(parameter, hint = ?found, "doc hint lookup");
  found
}
