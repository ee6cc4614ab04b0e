//! Checking and normalizing names.
//!
//! This is a private module. Its public items are re-exported by the parent
//! module.

use core::fmt;
use idna::uts46::{AsciiDenyList, Hyphens, Uts46};
use unicode_security::MixedScript;
use crate::base::ChainAddress;
use crate::conf::LENGTH_EXEMPT;
use super::absolute::Name;
use super::label::is_encoded_labelhash;

//------------ validate_name -------------------------------------------------

/// Checks a name and returns it in normalized form.
///
/// The name is split into the domain part and the suffix, which is the
/// final label. For the special case of a name of the form `x.eth.bnb`,
/// the domain part is just the first label. The checks are:
///
/// * the name must not be empty and must not contain empty labels,
/// * the visible length of the domain part must be between 3 and 512
///   unless the whole name appears in [`LENGTH_EXEMPT`],
/// * names outside the `eth` suffix must not use any blacklisted
///   character in their domain part,
/// * the domain part must stay within a single script,
/// * every label must survive normalization.
///
/// On success, the name is returned with every label normalized. Labels
/// that are encoded label hashes are kept verbatim.
pub fn validate_name(name: &str) -> Result<Name, InvalidNameError> {
    if name.is_empty() {
        return Err(InvalidNameError::Empty);
    }
    let labels: Vec<&str> = name.split('.').collect();
    let mut domain = if labels.len() == 1 {
        name.to_string()
    } else {
        labels[..labels.len() - 1].join(".")
    };
    let suffix = labels[labels.len() - 1];
    if labels.len() == 3
        && suffix.eq_ignore_ascii_case("bnb")
        && labels[1].eq_ignore_ascii_case("eth")
    {
        domain = labels[0].to_string();
    }
    if labels.iter().any(|label| label.is_empty()) {
        return Err(InvalidNameError::EmptyLabel);
    }
    if !label_length_ok(&domain)
        && !LENGTH_EXEMPT.contains(&name.to_lowercase().as_str())
    {
        return Err(InvalidNameError::BadLength);
    }
    if !domain_allowed(&domain, suffix) {
        return Err(InvalidNameError::BadCharacter);
    }
    normalize(name).map(Name::from_normalized)
}

/// Checks the visible length of the domain part of a name.
///
/// Both the number of displayed symbols of the raw string and the number
/// of UTF-16 code units of its normalized form must be between 3 and 512.
fn label_length_ok(domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    if !(3..=512).contains(&symbol_count(domain)) {
        return false;
    }
    let normalized = match normalize(domain) {
        Ok(normalized) => normalized,
        Err(_) => domain.to_string(),
    };
    (3..=512).contains(&normalized.encode_utf16().count())
}

/// Counts the displayed symbols of a string.
///
/// Combining marks and variation selectors attach to the symbol before
/// them and zero width joiners glue their surroundings into one symbol.
fn symbol_count(s: &str) -> usize {
    let mut res = 0;
    let mut joined = false;
    for ch in s.chars() {
        if is_mark(ch) {
            continue;
        }
        if ch == '\u{200d}' {
            joined = true;
            continue;
        }
        if joined {
            joined = false;
            continue;
        }
        res += 1;
    }
    res
}

fn is_mark(ch: char) -> bool {
    matches!(ch,
        '\u{0300}'..='\u{036f}'
            | '\u{1ab0}'..='\u{1aff}'
            | '\u{1dc0}'..='\u{1dff}'
            | '\u{20d0}'..='\u{20ff}'
            | '\u{fe0e}'..='\u{fe0f}'
            | '\u{fe20}'..='\u{fe2f}'
    )
}

/// Checks the characters of the domain part of a name.
///
/// Names outside the `eth` suffix must not contain blacklisted characters
/// in their domain part. The domain part must also stay within a single
/// script.
fn domain_allowed(domain: &str, suffix: &str) -> bool {
    if !suffix.eq_ignore_ascii_case("eth")
        && domain.chars().any(is_blacklisted)
    {
        return false;
    }
    domain.is_single_script()
}

/// The ASCII separators and controls plus the zero width characters.
fn is_blacklisted(ch: char) -> bool {
    matches!(ch,
        '\u{0000}'..='\u{002c}'
            | '\u{002e}'..='\u{002f}'
            | '\u{003a}'..='\u{0040}'
            | '\u{005b}'..='\u{005e}'
            | '\u{0060}'
            | '\u{007b}'..='\u{007f}'
            | '\u{200b}'..='\u{200d}'
            | '\u{feff}'
    )
}

//------------ normalize -----------------------------------------------------

/// Normalizes a name.
///
/// Each label is normalized separately following UTS 46 with the STD3
/// rules for ASCII characters. Labels that are encoded label hashes are
/// kept verbatim.
pub fn normalize(name: &str) -> Result<String, InvalidNameError> {
    let mut labels = Vec::new();
    for label in name.split('.') {
        if is_encoded_labelhash(label) {
            labels.push(label.to_string());
        } else {
            labels.push(normalize_label(label)?);
        }
    }
    Ok(labels.join("."))
}

/// Normalizes a single label.
pub(crate) fn normalize_label(
    label: &str,
) -> Result<String, InvalidNameError> {
    let (normalized, result) = Uts46::new().to_unicode(
        label.as_bytes(),
        AsciiDenyList::STD3,
        Hyphens::Allow,
    );
    match result {
        Ok(()) => Ok(normalized.into_owned()),
        Err(_) => Err(InvalidNameError::BadCharacter),
    }
}

//------------ is_label_valid ------------------------------------------------

/// Returns whether a string can be used as a single new label.
#[must_use]
pub fn is_label_valid(label: &str) -> bool {
    validate_name(label).is_ok() && !label.contains('.')
}

//------------ SearchTerm ----------------------------------------------------

/// The classification of a search input.
///
/// This is returned by [`parse_search_term`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchTerm {
    /// The input cannot be used as a name.
    Invalid,

    /// The input is a name under a supported top level but too short.
    Short,

    /// The input is a name under a supported top level.
    Supported,

    /// The input is a name under an unsupported top level.
    Unsupported,

    /// The input is an account address.
    Address,

    /// The input is a bare supported top level.
    Tld,

    /// The input is a plain search word.
    Search,
}

//--- Display

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SearchTerm::Invalid => "invalid",
            SearchTerm::Short => "short",
            SearchTerm::Supported => "supported",
            SearchTerm::Unsupported => "unsupported",
            SearchTerm::Address => "address",
            SearchTerm::Tld => "tld",
            SearchTerm::Search => "search",
        })
    }
}

//------------ parse_search_term ---------------------------------------------

/// Classifies a search input.
///
/// The caller states through `valid_tld` whether the final label of the
/// term is a top level it supports.
#[must_use]
pub fn parse_search_term(term: &str, valid_tld: bool) -> SearchTerm {
    if validate_name(term).is_err() {
        return SearchTerm::Invalid;
    }
    if term.contains('.') {
        let labels: Vec<&str> = term.split('.').collect();
        if valid_tld {
            if labels[labels.len() - 1] == "bnb"
                && labels[labels.len() - 2].encode_utf16().count() < 3
            {
                return SearchTerm::Short;
            }
            return SearchTerm::Supported;
        }
        return SearchTerm::Unsupported;
    }
    if term.parse::<ChainAddress>().is_ok() {
        return SearchTerm::Address;
    }
    if valid_tld {
        SearchTerm::Tld
    } else {
        SearchTerm::Search
    }
}

//------------ InvalidNameError ----------------------------------------------

/// A name failed validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidNameError {
    /// The name is empty.
    Empty,

    /// The name contains an empty label.
    EmptyLabel,

    /// The domain part of the name is too short or too long.
    BadLength,

    /// The name contains a character that is not allowed.
    BadCharacter,
}

//--- Display and Error

impl fmt::Display for InvalidNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            InvalidNameError::Empty => "empty name",
            InvalidNameError::EmptyLabel => "empty label in name",
            InvalidNameError::BadLength => "name too short or too long",
            InvalidNameError::BadCharacter => "illegal character in name",
        })
    }
}

impl std::error::Error for InvalidNameError {}

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_names() {
        assert_eq!(
            validate_name("space-id.bnb").unwrap().as_str(),
            "space-id.bnb"
        );
        assert_eq!(
            validate_name("SPACE-ID.bnb").unwrap().as_str(),
            "space-id.bnb"
        );
        assert_eq!(
            validate_name("space-id.eth").unwrap().as_str(),
            "space-id.eth"
        );
        assert_eq!(
            validate_name("1️⃣2️⃣8️⃣9️⃣.bnb").unwrap().as_str(),
            "1⃣2⃣8⃣9⃣.bnb"
        );
        assert!(validate_name("space").is_ok());
    }

    #[test]
    fn short_domain_behind_eth() {
        // The length rule looks at the first label only here.
        assert!(validate_name("abc.eth.bnb").is_ok());
        assert_eq!(
            validate_name("ab.eth.bnb").unwrap_err(),
            InvalidNameError::BadLength
        );
    }

    #[test]
    fn rejected_names() {
        assert_eq!(
            validate_name("").unwrap_err(),
            InvalidNameError::Empty
        );
        assert_eq!(
            validate_name("space..bnb").unwrap_err(),
            InvalidNameError::EmptyLabel
        );
        assert_eq!(
            validate_name(".bnb").unwrap_err(),
            InvalidNameError::EmptyLabel
        );
        assert_eq!(
            validate_name("space-id.bnb.").unwrap_err(),
            InvalidNameError::EmptyLabel
        );
        assert_eq!(
            validate_name("ab.bnb").unwrap_err(),
            InvalidNameError::BadLength
        );
        assert_eq!(
            validate_name("$pace.bnb").unwrap_err(),
            InvalidNameError::BadCharacter
        );
        assert_eq!(
            validate_name("space id.bnb").unwrap_err(),
            InvalidNameError::BadCharacter
        );
        assert_eq!(
            validate_name("space id.eth").unwrap_err(),
            InvalidNameError::BadCharacter
        );
        assert_eq!(
            validate_name("sub.space.bnb").unwrap_err(),
            InvalidNameError::BadCharacter
        );
    }

    #[test]
    fn normalization() {
        assert_eq!(normalize("SPACE-ID.bnb").unwrap(), "space-id.bnb");
        assert_eq!(normalize("").unwrap(), "");
        let bracket = format!("[{}]", "0".repeat(64));
        assert_eq!(
            normalize(&format!("{}.eth", bracket)).unwrap(),
            format!("{}.eth", bracket)
        );
        assert!(normalize("spa ce").is_err());
    }

    #[test]
    fn label_validity() {
        assert!(is_label_valid("space-id"));
        assert!(!is_label_valid("space.id"));
        assert!(!is_label_valid("$pace"));
        assert!(!is_label_valid(""));
    }

    #[test]
    fn search_terms() {
        assert_eq!(
            parse_search_term("space-id.bnb", true),
            SearchTerm::Supported
        );
        assert_eq!(
            parse_search_term("space-id.xyz", false),
            SearchTerm::Unsupported
        );
        assert_eq!(
            parse_search_term("space id.bnb", true),
            SearchTerm::Invalid
        );
        assert_eq!(
            parse_search_term(
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
                false
            ),
            SearchTerm::Address
        );
        assert_eq!(parse_search_term("bnb", true), SearchTerm::Tld);
        assert_eq!(parse_search_term("space", false), SearchTerm::Search);
    }

    #[test]
    fn symbol_counting() {
        assert_eq!(symbol_count("abc"), 3);
        // Keycap sequences collapse into one symbol each.
        assert_eq!(symbol_count("1️⃣2️⃣8️⃣9️⃣"), 4);
        // A zero width joiner glues its surroundings together.
        assert_eq!(symbol_count("👩\u{200d}👩\u{200d}👦"), 1);
        assert_eq!(symbol_count("e\u{0301}e\u{0301}"), 2);
    }
}
