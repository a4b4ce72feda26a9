// Source reconciliation
// Later layers override earlier ones record by record

use std::collections::HashMap;

use crate::entities::{Event, Ticket};

pub trait Identified {
    fn record_id(&self) -> &str;
}

impl Identified for Event {
    fn record_id(&self) -> &str {
        &self.id
    }
}

impl Identified for Ticket {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Overlays `layer` onto `base`: a record with a known id replaces the base
/// record in place, an unknown id is appended. Order of first appearance is kept.
pub fn overlay_by_id<T: Identified>(base: Vec<T>, layer: Vec<T>) -> Vec<T> {
    let mut merged = base;
    let mut positions: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(idx, item)| (item.record_id().to_string(), idx))
        .collect();
    for item in layer {
        match positions.get(item.record_id()) {
            Some(&idx) => merged[idx] = item,
            None => {
                positions.insert(item.record_id().to_string(), merged.len());
                merged.push(item);
            }
        }
    }
    merged
}

/// Collapses duplicate ids inside one source, the last occurrence wins.
pub fn dedupe_by_id<T: Identified>(items: Vec<T>) -> Vec<T> {
    overlay_by_id(Vec::new(), items)
}

/// Seed, then remote, then local.
pub fn merge_layers<T: Identified>(seed: Vec<T>, remote: Vec<T>, local: Vec<T>) -> Vec<T> {
    overlay_by_id(overlay_by_id(dedupe_by_id(seed), remote), local)
}

/// Replaces the record with the same id or appends it.
pub fn upsert_by_id<T: Identified>(items: &mut Vec<T>, item: T) {
    match items
        .iter()
        .position(|existing| existing.record_id() == item.record_id())
    {
        Some(idx) => items[idx] = item,
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Rec(&'static str, &'static str);

    impl Identified for Rec {
        fn record_id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn local_layer_wins_over_remote_and_seed() {
        let seed = vec![Rec("1", "seed"), Rec("2", "seed")];
        let remote = vec![Rec("1", "remote"), Rec("3", "remote")];
        let local = vec![Rec("1", "local"), Rec("4", "local")];
        let merged = merge_layers(seed, remote, local);
        assert_eq!(
            merged,
            vec![
                Rec("1", "local"),
                Rec("2", "seed"),
                Rec("3", "remote"),
                Rec("4", "local"),
            ]
        );
    }

    #[test]
    fn duplicate_ids_within_a_layer_collapse() {
        let merged = merge_layers(vec![], vec![], vec![Rec("9", "a"), Rec("9", "b")]);
        assert_eq!(merged, vec![Rec("9", "b")]);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut items = vec![Rec("1", "a"), Rec("2", "b")];
        upsert_by_id(&mut items, Rec("1", "c"));
        upsert_by_id(&mut items, Rec("3", "d"));
        assert_eq!(items, vec![Rec("1", "c"), Rec("2", "b"), Rec("3", "d")]);
    }
}
