use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used by the Volcengine signature scheme.
pub const X_CONTENT_SHA_256: &str = "x-content-sha256";
pub const X_DATE: &str = "x-date";

// Env values used by the default credential chain.
pub const VOLC_ACCESSKEY: &str = "VOLC_ACCESSKEY";
pub const VOLC_SECRETKEY: &str = "VOLC_SECRETKEY";

/// Algorithm identifier carried in the string-to-sign and the
/// `Authorization` header.
pub const ALGORITHM: &str = "HMAC-SHA256";

/// Terminator of the credential scope and final input of the key
/// derivation chain.
pub const REQUEST_TERMINATOR: &str = "request";

/// AsciiSet for the Volcengine UriEncode rule.
///
/// URI encode every byte except the unreserved characters:
/// 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
///
/// Unlike most generic URL encoders this set keeps '/' encoded and never
/// produces '+' for spaces; multi-byte characters expand to one `%XX`
/// triplet per UTF-8 byte.
pub static VOLC_URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
