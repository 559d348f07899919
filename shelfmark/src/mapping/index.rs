//! Two-level lookup index over mapping records.

use super::normalize::normalize_key;
use super::record::MappingRecord;
use crate::callnumber::in_range;
use std::collections::HashMap;
use std::sync::Arc;

/// Index from normalized library key to normalized collection key to the
/// records filed under that pair.
///
/// Built in one pass over the flat record list and never mutated afterwards;
/// the cache swaps whole indexes by reference, so a lookup in progress always
/// sees one fully-formed index. Each record is inserted under the cross
/// product of its normalized library keys (primary and alternate-language
/// name) and collection keys, with the same `Arc` referenced from every
/// bucket rather than a copy.
#[derive(Debug, Default)]
pub struct MappingIndex {
    buckets: HashMap<String, HashMap<String, Vec<Arc<MappingRecord>>>>,
    record_count: usize,
}

impl MappingIndex {
    /// Builds an index from a flat record list.
    pub fn build(records: Vec<MappingRecord>) -> Self {
        let record_count = records.len();
        let mut buckets: HashMap<String, HashMap<String, Vec<Arc<MappingRecord>>>> =
            HashMap::new();

        for record in records {
            let record = Arc::new(record);

            let mut library_keys = vec![normalize_key(&record.library_name)];
            if let Some(alt) = &record.library_name_alt {
                let key = normalize_key(alt);
                if !library_keys.contains(&key) {
                    library_keys.push(key);
                }
            }
            let mut collection_keys = vec![normalize_key(&record.collection_name)];
            if let Some(alt) = &record.collection_name_alt {
                let key = normalize_key(alt);
                if !collection_keys.contains(&key) {
                    collection_keys.push(key);
                }
            }

            for library_key in &library_keys {
                for collection_key in &collection_keys {
                    buckets
                        .entry(library_key.clone())
                        .or_default()
                        .entry(collection_key.clone())
                        .or_default()
                        .push(Arc::clone(&record));
                }
            }
        }

        Self {
            buckets,
            record_count,
        }
    }

    /// Returns every record whose range contains the call number, under
    /// either display-language variant of the library and collection names.
    ///
    /// Overlapping ranges may legitimately place one call number on several
    /// physical shelves at once, so all matches are returned, not the first.
    pub fn all_mappings(
        &self,
        library_name: &str,
        collection_name: &str,
        raw_call_number: &str,
    ) -> Vec<Arc<MappingRecord>> {
        let Some(collections) = self.buckets.get(&normalize_key(library_name)) else {
            return Vec::new();
        };
        let Some(records) = collections.get(&normalize_key(collection_name)) else {
            return Vec::new();
        };
        records
            .iter()
            .filter(|r| in_range(raw_call_number, &r.range_start, &r.range_end))
            .cloned()
            .collect()
    }

    /// Number of records the index was built from.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// True when the index was built from an empty record set.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        library: &str,
        library_alt: Option<&str>,
        collection: &str,
        collection_alt: Option<&str>,
        start: &str,
        end: &str,
        shelf: &str,
    ) -> MappingRecord {
        MappingRecord {
            library_name: library.to_string(),
            library_name_alt: library_alt.map(str::to_string),
            collection_name: collection.to_string(),
            collection_name_alt: collection_alt.map(str::to_string),
            range_start: start.to_string(),
            range_end: end.to_string(),
            shelf_code: shelf.to_string(),
            floor: None,
            shelf_label: None,
            description: None,
            description_alt: None,
            notes: None,
        }
    }

    #[test]
    fn test_lookup_basic() {
        let index = MappingIndex::build(vec![record(
            "Sourasky", None, "General", None, "100", "199", "SHELF-04",
        )]);

        let matches = index.all_mappings("Sourasky", "General", "150.5 XYZ");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].shelf_code, "SHELF-04");
    }

    #[test]
    fn test_lookup_normalizes_query_names() {
        let index = MappingIndex::build(vec![record(
            "Sourasky", None, "General", None, "100", "199", "SHELF-04",
        )]);

        let matches = index.all_mappings("  sourasky ", "GENERAL", "150");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_lookup_via_alternate_language_names() {
        let index = MappingIndex::build(vec![record(
            "Sourasky",
            Some("סוראסקי"),
            "General",
            Some("כללי"),
            "100",
            "199",
            "SHELF-04",
        )]);

        // Every combination of primary and alternate names reaches the record.
        for library in ["Sourasky", "סוראסקי"] {
            for collection in ["General", "כללי"] {
                let matches = index.all_mappings(library, collection, "150");
                assert_eq!(matches.len(), 1, "{library}/{collection}");
            }
        }
    }

    #[test]
    fn test_language_symmetry() {
        let index = MappingIndex::build(vec![record(
            "Sourasky",
            Some("סוראסקי"),
            "General",
            Some("כללי"),
            "100",
            "199",
            "SHELF-04",
        )]);

        let primary = index.all_mappings("Sourasky", "General", "150");
        let alternate = index.all_mappings("סוראסקי", "כללי", "150");
        assert_eq!(primary, alternate);
    }

    #[test]
    fn test_overlapping_ranges_return_all_matches() {
        let index = MappingIndex::build(vec![
            record("Sourasky", None, "General", None, "1", "999", "A-01"),
            record("Sourasky", None, "General", None, "800", "999", "B-07"),
        ]);

        let matches = index.all_mappings("Sourasky", "General", "892.4");
        let shelves: Vec<&str> = matches.iter().map(|r| r.shelf_code.as_str()).collect();
        assert_eq!(shelves, vec!["A-01", "B-07"]);
    }

    #[test]
    fn test_unknown_collection_returns_empty() {
        let index = MappingIndex::build(vec![record(
            "Sourasky", None, "General", None, "100", "199", "SHELF-04",
        )]);

        assert!(index.all_mappings("Sourasky", "Periodicals", "150").is_empty());
        assert!(index.all_mappings("Wiener", "General", "150").is_empty());
    }

    #[test]
    fn test_out_of_range_returns_empty() {
        let index = MappingIndex::build(vec![record(
            "Sourasky", None, "General", None, "100", "199", "SHELF-04",
        )]);

        assert!(index.all_mappings("Sourasky", "General", "250").is_empty());
    }

    #[test]
    fn test_records_shared_not_duplicated() {
        let index = MappingIndex::build(vec![record(
            "Sourasky",
            Some("סוראסקי"),
            "General",
            None,
            "100",
            "199",
            "SHELF-04",
        )]);

        let a = index.all_mappings("Sourasky", "General", "150");
        let b = index.all_mappings("סוראסקי", "General", "150");
        assert!(Arc::ptr_eq(&a[0], &b[0]));
    }

    #[test]
    fn test_empty_index() {
        let index = MappingIndex::default();
        assert!(index.is_empty());
        assert!(index.all_mappings("Sourasky", "General", "150").is_empty());
    }

    #[test]
    fn test_record_count() {
        let index = MappingIndex::build(vec![
            record("Sourasky", None, "General", None, "1", "999", "A-01"),
            record("Sourasky", None, "General", None, "800", "999", "B-07"),
        ]);
        assert_eq!(index.record_count(), 2);
    }
}
