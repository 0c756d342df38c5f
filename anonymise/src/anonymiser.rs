//! The closed set of anonymisers selectable from `#[anon("...")]` tags.
//!
//! Anonymisers are pure string transformations. They do not traverse
//! structures or decide which fields are sensitive; that is the walker's job.
//!
//! Lengths are measured in UTF-8 bytes, not characters: `"á2"` is three bytes
//! long, so `stars_with_len` turns it into `"***"`.

use std::fmt;

use sha2::{Digest, Sha512};

/// Tag for [`stars`].
pub const TAG_STARS: &str = "stars";
/// Tag for [`empty`].
pub const TAG_EMPTY: &str = "empty";
/// Tag for [`stars_with_len`].
pub const TAG_STARS_WITH_LEN: &str = "stars_with_len";
/// Tag for [`with_info`].
pub const TAG_WITH_INFO: &str = "with_info";
/// Tag for [`sha512`].
pub const TAG_SHA512: &str = "sha512";

/// Output of [`stars`].
pub const STARS: &str = "****";

/// A built-in anonymiser.
///
/// The registry is closed: these five variants are the only tags a field can
/// name. Variants are `Copy` and carry no state, so the registry can be read
/// from any number of threads without synchronisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anonymiser {
    /// Replace the value with [`STARS`].
    Stars,
    /// Replace the value with the empty string.
    Empty,
    /// Replace every byte of the value with `*`.
    StarsWithLen,
    /// Replace the value with its byte length and ASCII-ness.
    WithInfo,
    /// Replace the value with its raw SHA-512 digest.
    Sha512,
}

impl Anonymiser {
    /// Every registered anonymiser, in registry order.
    pub const ALL: [Anonymiser; 5] = [
        Anonymiser::Stars,
        Anonymiser::Empty,
        Anonymiser::StarsWithLen,
        Anonymiser::WithInfo,
        Anonymiser::Sha512,
    ];

    /// Looks up an anonymiser by its tag name.
    ///
    /// Returns `None` for anything outside the registry, including the skip
    /// tags `""` and `"-"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            TAG_STARS => Some(Self::Stars),
            TAG_EMPTY => Some(Self::Empty),
            TAG_STARS_WITH_LEN => Some(Self::StarsWithLen),
            TAG_WITH_INFO => Some(Self::WithInfo),
            TAG_SHA512 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// The tag that selects this anonymiser.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Stars => TAG_STARS,
            Self::Empty => TAG_EMPTY,
            Self::StarsWithLen => TAG_STARS_WITH_LEN,
            Self::WithInfo => TAG_WITH_INFO,
            Self::Sha512 => TAG_SHA512,
        }
    }

    /// Applies the anonymiser to `value`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Stars => stars(value),
            Self::Empty => empty(value),
            Self::StarsWithLen => stars_with_len(value),
            Self::WithInfo => with_info(value),
            Self::Sha512 => sha512(value),
        }
    }
}

impl fmt::Display for Anonymiser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returns [`STARS`] whatever the input.
pub fn stars(_value: &str) -> String {
    STARS.to_string()
}

/// Returns the empty string.
pub fn empty(_value: &str) -> String {
    String::new()
}

/// Returns one `*` per byte of `value`.
pub fn stars_with_len(value: &str) -> String {
    "*".repeat(value.len())
}

/// Returns `len:<bytes>,is_ascii:<bool>`.
///
/// A non-ASCII character occupies more than one byte, so it counts more than
/// once towards `len`:
///
/// ```rust
/// assert_eq!(anonymise::with_info("a"), "len:1,is_ascii:true");
/// assert_eq!(anonymise::with_info("á"), "len:2,is_ascii:false");
/// ```
pub fn with_info(value: &str) -> String {
    format!("len:{},is_ascii:{}", value.len(), value.is_ascii())
}

/// Returns the raw SHA-512 digest of `value`, one character per digest byte.
///
/// The digest is not hex or base64 encoded. Each byte becomes the character
/// with the same code point (`0x00..=0xFF`), so the result has exactly 64
/// characters but is not meaningful text.
///
/// The UTF-8 length of the result is not 64: bytes `0x80..=0xFF` encode as two
/// UTF-8 bytes each, so `sha512(value).len()` ranges from 64 to 128. Use
/// [`sha512_digest`] when the 64 digest bytes themselves are needed.
pub fn sha512(value: &str) -> String {
    sha512_digest(value).iter().copied().map(char::from).collect()
}

/// Returns the raw SHA-512 digest of the UTF-8 bytes of `value`.
pub fn sha512_digest(value: &str) -> [u8; 64] {
    let mut digest = [0_u8; 64];
    digest.copy_from_slice(&Sha512::digest(value.as_bytes()));
    digest
}

#[cfg(test)]
mod tests {
    use super::{
        empty, sha512, sha512_digest, stars, stars_with_len, with_info, Anonymiser, STARS,
    };

    #[test]
    fn stars_ignores_input_length() {
        assert_eq!(stars(""), STARS);
        assert_eq!(stars("hello, world"), "****");
        assert_eq!(stars(&"x".repeat(1000)), "****");
    }

    #[test]
    fn empty_erases_value() {
        assert_eq!(empty("erase me"), "");
    }

    #[test]
    fn stars_with_len_counts_bytes() {
        assert_eq!(stars_with_len("swear"), "*****");
        assert_eq!(stars_with_len("á2"), "***");
        assert_eq!(stars_with_len(""), "");
        for value in ["123", "秘密", "🔒", "plain ascii"] {
            assert_eq!(stars_with_len(value).len(), value.len());
        }
    }

    #[test]
    fn with_info_reports_length_and_ascii() {
        let text = "Through the fence, between the curling flower spaces, I could see them hitting.";
        assert_eq!(with_info(text), "len:79,is_ascii:true");

        let rune = "Para a aventura indefinida, para o Mar Absoluto, para realizar o Impossível!";
        assert_eq!(with_info(rune), "len:77,is_ascii:false");

        assert_eq!(with_info(""), "len:0,is_ascii:true");
        assert_eq!(with_info("\u{7f}"), "len:1,is_ascii:true");
    }

    #[test]
    fn sha512_maps_each_digest_byte_to_a_char() {
        let hashed = sha512("hash me please");
        let digest = sha512_digest("hash me please");
        assert_eq!(hashed.chars().count(), 64);
        assert!(hashed
            .chars()
            .zip(digest.iter())
            .all(|(ch, byte)| u32::from(ch) == u32::from(*byte)));
    }

    #[test]
    fn sha512_is_deterministic() {
        assert_eq!(sha512("same"), sha512("same"));
        assert_ne!(sha512("same"), sha512("different"));
    }

    #[test]
    fn sha512_digest_matches_known_vector() {
        let digest = sha512_digest("abc");
        assert_eq!(&digest[..4], &[0xdd, 0xaf, 0x35, 0xa1]);
        assert_eq!(&digest[60..], &[0xa5, 0x4c, 0xa4, 0x9f]);
    }

    #[test]
    fn tags_round_trip_through_registry() {
        for anonymiser in Anonymiser::ALL {
            assert_eq!(Anonymiser::from_tag(anonymiser.tag()), Some(anonymiser));
            assert_eq!(anonymiser.to_string(), anonymiser.tag());
        }
    }

    #[test]
    fn registry_is_closed() {
        assert_eq!(Anonymiser::from_tag(""), None);
        assert_eq!(Anonymiser::from_tag("-"), None);
        assert_eq!(Anonymiser::from_tag("Stars"), None);
        assert_eq!(Anonymiser::from_tag("bogus"), None);
    }

    #[test]
    fn apply_dispatches_to_functions() {
        assert_eq!(Anonymiser::Stars.apply("abc"), "****");
        assert_eq!(Anonymiser::Empty.apply("abc"), "");
        assert_eq!(Anonymiser::StarsWithLen.apply("abc"), "***");
        assert_eq!(Anonymiser::WithInfo.apply("abc"), "len:3,is_ascii:true");
        assert_eq!(Anonymiser::Sha512.apply("abc"), sha512("abc"));
    }
}
