//! Display names for keys.
//!
//! Names are resolved once, at construction, and never recomputed:
//! - an explicit non-empty name is used verbatim,
//! - otherwise `anonymous(<file>:<line>)@<token>` when the construction site is known,
//! - otherwise `anonymous@<token>`.
//!
//! The token address keeps anonymous names unique even for two keys built on the same line.

use featurekey_core::{CallSite, Token};

/// Prefix shared by every fallback name.
pub const ANONYMOUS_PREFIX: &str = "anonymous";

/// Resolve the display name for a key.
///
/// ## Parameters
/// - `explicit`: caller-supplied name; `None` and `Some("")` both mean "no name".
/// - `call_site`: construction site, if it could be resolved.
/// - `token`: the key's identity token.
///
/// ## Returns
/// - (`String`): the final display name.
///
/// ## Examples
/// ```rust
/// use featurekey::naming::resolve_name;
/// use featurekey::{CallSite, Token};
///
/// let token = Token::new();
/// assert_eq!(resolve_name(Some("beta-ui"), None, &token), "beta-ui");
///
/// let name = resolve_name(None, Some(CallSite::new("src/flags.rs", 42)), &token);
/// assert_eq!(name, format!("anonymous(src/flags.rs:42)@{token}"));
/// ```
pub fn resolve_name(explicit: Option<&str>, call_site: Option<CallSite>, token: &Token) -> String {
    match (explicit.filter(|name| !name.is_empty()), call_site) {
        (Some(name), _) => name.to_string(),
        (None, Some(site)) => format!("{ANONYMOUS_PREFIX}({site})@{token}"),
        (None, None) => format!("{ANONYMOUS_PREFIX}@{token}"),
    }
}
