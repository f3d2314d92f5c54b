//! Construction options for keys.

use featurekey_core::CallSite;

/// How the construction call site is obtained for anonymous keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CallSiteSource {
    /// Capture the user's call site via `#[track_caller]`.
    #[default]
    Caller,
    /// Use a site supplied by the host (e.g. a code generator that knows the real origin).
    Fixed(CallSite),
    /// Call-site resolution is unavailable; names degrade to `anonymous@<token>`.
    Unavailable,
}

/// Configure how a key is built.
///
/// ## Notes
/// - An empty name is the same as no name: the key falls back to a call-site derived label.
/// - Options only affect the display name; identity is always a freshly allocated token.
///
/// ## Examples
/// ```rust
/// use featurekey::{Key, KeyOptions};
///
/// let retries: Key<u32> = Key::with_options(KeyOptions::new().with_name("max-retries"));
/// assert_eq!(retries.name(), "max-retries");
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyOptions {
    name: Option<String>,
    call_site: CallSiteSource,
}

impl KeyOptions {
    /// Create options with no name and automatic call-site capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debug name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Report `site` as the construction call site instead of capturing it.
    pub fn with_call_site(mut self, site: CallSite) -> Self {
        self.call_site = CallSiteSource::Fixed(site);
        self
    }

    /// Disable call-site capture; anonymous names become `anonymous@<token>`.
    pub fn without_call_site(mut self) -> Self {
        self.call_site = CallSiteSource::Unavailable;
        self
    }

    /// Return the explicit name, treating an empty string as absent.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Resolve the call site, capturing the caller's location when no override was given.
    #[track_caller]
    pub(crate) fn resolve_call_site(&self) -> Option<CallSite> {
        match self.call_site {
            CallSiteSource::Caller => Some(CallSite::caller()),
            CallSiteSource::Fixed(site) => Some(site),
            CallSiteSource::Unavailable => None,
        }
    }
}
