//! Cyclic assignment of source images to grid slots

/// Stretch or trim a source sequence to exactly `slot_count` entries
///
/// Slots are filled in reading order. When sources run out before slots
/// do, the sequence wraps around, so slot `i` always holds source
/// `i % n`. Repeated entries are clones, and each slot owns its copy
/// outright; mutating one never touches another. Surplus sources past
/// the last slot are dropped. An empty input stays empty regardless of
/// `slot_count`.
pub fn fill_slots<T: Clone>(mut items: Vec<T>, slot_count: usize) -> Vec<T> {
    if items.len() >= slot_count {
        items.truncate(slot_count);
        return items;
    }

    let needed = slot_count - items.len();
    let repeats: Vec<T> = items.iter().cycle().take(needed).cloned().collect();
    items.extend(repeats);
    items
}
