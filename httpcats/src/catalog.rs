//! Static catalog of the status codes served by http.cat.
//!
//! Each [`StatusEntry`] pairs a code with its canonical name and any aliases.
//! Names are stored normalized (`UPPER_SNAKE_CASE`); lookups by name apply
//! [`normalize_name`] to the caller's input before consulting the index.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::InvalidCat;

/// A known status code and the names it answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub code: u16,
    /// Canonical name, used for display.
    pub name: &'static str,
    /// Additional accepted names resolving to the same code.
    pub aliases: &'static [&'static str],
}

impl StatusEntry {
    const fn new(code: u16, name: &'static str) -> Self {
        Self {
            code,
            name,
            aliases: &[],
        }
    }

    const fn with_aliases(code: u16, name: &'static str, aliases: &'static [&'static str]) -> Self {
        Self {
            code,
            name,
            aliases,
        }
    }

    /// Canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        std::iter::once(self.name).chain(aliases.iter().copied())
    }

    /// Display form of the canonical name, e.g. `Not Found`.
    #[must_use]
    pub fn pretty_name(&self) -> String {
        pretty_name(self.name)
    }

    /// Whether `code` appears in the catalog.
    #[must_use]
    pub fn is_known(code: u16) -> bool {
        BY_CODE.contains_key(&code)
    }
}

static ENTRIES: &[StatusEntry] = &[
    StatusEntry::new(100, "CONTINUE"),
    StatusEntry::new(101, "SWITCHING_PROTOCOLS"),
    StatusEntry::new(102, "PROCESSING"),
    StatusEntry::with_aliases(200, "OK", &["SUCCESS"]),
    StatusEntry::new(201, "CREATED"),
    StatusEntry::new(202, "ACCEPTED"),
    StatusEntry::new(204, "NO_CONTENT"),
    StatusEntry::new(206, "PARTIAL_CONTENT"),
    StatusEntry::new(207, "MULTI_STATUS"),
    StatusEntry::new(300, "MULTIPLE_CHOICES"),
    StatusEntry::new(301, "MOVED_PERMANENTLY"),
    StatusEntry::new(302, "FOUND"),
    StatusEntry::new(303, "SEE_OTHER"),
    StatusEntry::new(304, "NOT_MODIFIED"),
    StatusEntry::new(305, "USE_PROXY"),
    StatusEntry::new(307, "TEMPORARY_REDIRECT"),
    StatusEntry::new(400, "BAD_REQUEST"),
    StatusEntry::new(401, "UNAUTHORIZED"),
    StatusEntry::new(402, "PAYMENT_REQUIRED"),
    StatusEntry::new(403, "FORBIDDEN"),
    StatusEntry::new(404, "NOT_FOUND"),
    StatusEntry::new(405, "METHOD_NOT_ALLOWED"),
    StatusEntry::new(406, "NOT_ACCEPTABLE"),
    StatusEntry::new(408, "REQUEST_TIMEOUT"),
    StatusEntry::new(409, "CONFLICT"),
    StatusEntry::new(410, "GONE"),
    StatusEntry::new(411, "LENGTH_REQUIRED"),
    StatusEntry::new(412, "PRECONDITION_FAILED"),
    StatusEntry::new(413, "PAYLOAD_TOO_LARGE"),
    StatusEntry::new(414, "REQUEST_URI_TOO_LONG"),
    StatusEntry::new(415, "UNSUPPORTED_MEDIA_TYPE"),
    StatusEntry::new(416, "REQUEST_RANGE_NOT_SATISFIABLE"),
    StatusEntry::new(417, "EXPECTATION_FAILED"),
    StatusEntry::new(418, "IM_A_TEAPOT"),
    StatusEntry::new(420, "ENHANCE_YOUR_CALM"),
    StatusEntry::new(421, "MISDIRECTED_REQUEST"),
    StatusEntry::new(422, "UNPROCESSABLE_ENTITY"),
    StatusEntry::new(423, "LOCKED"),
    StatusEntry::new(424, "FAILED_DEPENDENCY"),
    StatusEntry::new(425, "UNORDERED_COLLECTION"),
    StatusEntry::new(426, "UPGRADE_REQUIRED"),
    StatusEntry::new(429, "TOO_MANY_REQUESTS"),
    StatusEntry::new(431, "REQUEST_HEADER_FIELDS_TOO_LARGE"),
    StatusEntry::new(444, "NO_RESPONSE"),
    StatusEntry::new(450, "BLOCKED_BY_WINDOWS_PARENTAL_CONTROLS"),
    StatusEntry::new(451, "UNAVAILABLE_FOR_LEGAL_REASONS"),
    StatusEntry::new(499, "CLIENT_CLOSED_REQUEST"),
    StatusEntry::new(500, "INTERNAL_SERVER_ERROR"),
    StatusEntry::new(501, "NOT_IMPLEMENTED"),
    StatusEntry::new(502, "BAD_GATEWAY"),
    StatusEntry::new(503, "SERVICE_UNAVAILABLE"),
    StatusEntry::new(504, "GATEWAY_TIMEOUT"),
    StatusEntry::new(506, "VARIANT_ALSO_NEGOTIATES"),
    StatusEntry::new(507, "INSUFFICIENT_STORAGE"),
    StatusEntry::new(508, "LOOP_DETECTED"),
    StatusEntry::new(509, "BANDWIDTH_LIMIT_EXCEEDED"),
    StatusEntry::new(510, "NOT_EXTENDED"),
    StatusEntry::new(511, "NETWORK_AUTHENTICATION_REQUIRED"),
    StatusEntry::new(599, "NETWORK_CONNECT_TIMEOUT_ERROR"),
];

static BY_CODE: LazyLock<HashMap<u16, &'static StatusEntry>> =
    LazyLock::new(|| ENTRIES.iter().map(|entry| (entry.code, entry)).collect());

// First registration wins so an alias can never shadow a canonical name.
static BY_NAME: LazyLock<HashMap<&'static str, &'static StatusEntry>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for entry in ENTRIES {
        for name in entry.names() {
            index.entry(name).or_insert(entry);
        }
    }
    index
});

/// Every catalog entry, in ascending code order.
#[must_use]
pub fn entries() -> &'static [StatusEntry] {
    ENTRIES
}

/// Find the entry for a status code.
///
/// # Errors
/// Returns [`InvalidCat::Code`] if the code is not in the catalog.
pub fn lookup_by_code(code: u16) -> Result<&'static StatusEntry, InvalidCat> {
    BY_CODE.get(&code).copied().ok_or(InvalidCat::Code(code))
}

/// Find the entry for a status name or alias.
///
/// Matching is case-insensitive and treats spaces as underscores, so
/// `"not found"`, `"Not Found"` and `"NOT_FOUND"` are equivalent.
///
/// # Errors
/// Returns [`InvalidCat::Name`] carrying `name` verbatim if nothing matches.
pub fn lookup_by_name(name: &str) -> Result<&'static StatusEntry, InvalidCat> {
    BY_NAME
        .get(normalize_name(name).as_str())
        .copied()
        .ok_or_else(|| InvalidCat::Name(name.to_string()))
}

/// Turn user input into the catalog's key form: spaces become underscores,
/// letters are upper-cased.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "_").to_uppercase()
}

/// Turn a catalog name into its display form (`NOT_FOUND` -> `Not Found`).
#[must_use]
pub fn pretty_name(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
