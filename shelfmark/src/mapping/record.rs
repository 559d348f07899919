//! Mapping record and query types.

/// One physical shelf segment and the call number range it holds.
///
/// Produced by feed parsing, shared between index buckets via `Arc`, and
/// never mutated after construction. `range_start`/`range_end` stay raw
/// strings so decimal formatting like `"892.413"` survives intact; they are
/// only ever interpreted through the call number comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    /// Library display name in the primary language.
    pub library_name: String,
    /// Library display name in the alternate language, when the feed has one.
    pub library_name_alt: Option<String>,
    /// Collection display name in the primary language.
    pub collection_name: String,
    /// Collection display name in the alternate language.
    pub collection_name_alt: Option<String>,
    /// Inclusive lower bound of the call number range, raw.
    pub range_start: String,
    /// Inclusive upper bound of the call number range, raw.
    pub range_end: String,
    /// Identifier of the shelf segment on the floor plan.
    pub shelf_code: String,
    /// Floor identifier, when the feed provides one.
    pub floor: Option<String>,
    /// Human-readable shelf label.
    pub shelf_label: Option<String>,
    /// Location description in the primary language.
    pub description: Option<String>,
    /// Location description in the alternate language.
    pub description_alt: Option<String>,
    /// Free-form administrative notes.
    pub notes: Option<String>,
}

/// A caller-supplied lookup, in whichever display language is active.
///
/// Constructed per call; never stored.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    pub library_name: String,
    pub collection_name: String,
    pub raw_call_number: String,
}

impl LocationQuery {
    pub fn new(
        library_name: impl Into<String>,
        collection_name: impl Into<String>,
        raw_call_number: impl Into<String>,
    ) -> Self {
        Self {
            library_name: library_name.into(),
            collection_name: collection_name.into(),
            raw_call_number: raw_call_number.into(),
        }
    }
}
