//! Link classification and authoring-time checks for literal content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links are literal strings typed by the site owner. Nothing here runs in the
//! browser; the host binary checks content before it writes a page.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use url::Url;

/// Errors found while checking literal page content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// A required text field is blank.
    #[error("{field} must not be empty")]
    EmptyField { field: String },
    /// An email address is not usable in a `mailto:` link.
    #[error("{field} is not a valid email address: {value:?}")]
    InvalidEmail { field: String, value: String },
    /// A link could not be classified at all.
    #[error("{field} is not a valid link ({reason}): {value:?}")]
    InvalidLink { field: String, value: String, reason: String },
    /// A link parsed but is the wrong kind for where it is used.
    #[error("{field} is a {} link, expected {}: {value:?}", .kind.label(), expected_labels(.expected))]
    DisallowedLink { field: String, value: String, kind: LinkTarget, expected: Vec<LinkTarget> },
}

/// Kind of a literal `href` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Absolute `http` or `https` URL.
    Absolute,
    /// `mailto:` address.
    Mailto,
    /// In-page fragment such as `#publications`.
    Anchor,
    /// Path relative to the page, such as `CV.pdf`.
    Relative,
}

impl LinkTarget {
    /// Classify a literal link. Returns the reason when it is none of the known kinds.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason for blank values, whitespace, unsupported
    /// schemes, and URLs that fail to parse.
    pub fn classify(value: &str) -> Result<Self, String> {
        if value.is_empty() {
            return Err("empty".to_owned());
        }
        if value.chars().any(char::is_whitespace) {
            return Err("contains whitespace".to_owned());
        }
        if let Some(address) = value.strip_prefix("mailto:") {
            return if is_valid_email(address) {
                Ok(Self::Mailto)
            } else {
                Err("mailto address is malformed".to_owned())
            };
        }
        if let Some(fragment) = value.strip_prefix('#') {
            return if fragment.is_empty() {
                Err("empty fragment".to_owned())
            } else {
                Ok(Self::Anchor)
            };
        }
        match Url::parse(value) {
            Ok(url) => match url.scheme() {
                "http" | "https" if url.host_str().is_some_and(|h| !h.is_empty()) => Ok(Self::Absolute),
                "http" | "https" => Err("missing host".to_owned()),
                scheme => Err(format!("unsupported scheme `{scheme}`")),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Self::Relative),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Mailto => "mailto",
            Self::Anchor => "anchor",
            Self::Relative => "relative",
        }
    }

    /// Whether a link of this kind leaves the current page.
    pub fn is_outbound(self) -> bool {
        matches!(self, Self::Absolute | Self::Mailto)
    }
}

fn expected_labels(expected: &[LinkTarget]) -> String {
    expected.iter().map(|k| k.label()).collect::<Vec<_>>().join(" or ")
}

/// Loose address check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// # Errors
///
/// Returns [`ContentError::InvalidEmail`] when [`is_valid_email`] rejects `value`.
pub fn validate_email(field: &str, value: &str) -> Result<(), ContentError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ContentError::InvalidEmail { field: field.to_owned(), value: value.to_owned() })
    }
}

/// Require an absolute `http`/`https` URL.
///
/// # Errors
///
/// Returns [`ContentError::InvalidLink`] or [`ContentError::DisallowedLink`].
pub fn validate_http_url(field: &str, value: &str) -> Result<(), ContentError> {
    validate_target(field, value, &[LinkTarget::Absolute])
}

/// Require `value` to classify as one of `allowed`.
///
/// # Errors
///
/// Returns [`ContentError::InvalidLink`] when the link cannot be classified,
/// or [`ContentError::DisallowedLink`] when its kind is not in `allowed`.
pub fn validate_target(field: &str, value: &str, allowed: &[LinkTarget]) -> Result<(), ContentError> {
    let kind = LinkTarget::classify(value).map_err(|reason| ContentError::InvalidLink {
        field: field.to_owned(),
        value: value.to_owned(),
        reason,
    })?;
    if allowed.contains(&kind) {
        Ok(())
    } else {
        Err(ContentError::DisallowedLink {
            field: field.to_owned(),
            value: value.to_owned(),
            kind,
            expected: allowed.to_vec(),
        })
    }
}
