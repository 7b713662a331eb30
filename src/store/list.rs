//! Reconciliation helpers for cached lists.

use crate::domain::Resource;

/// Insert at the head, dropping any stale entry with the same id.
pub fn prepend<R: Resource>(items: &mut Vec<R>, item: R) {
    items.retain(|existing| existing.id() != item.id());
    items.insert(0, item);
}

/// Insert a batch at the head, preserving batch order.
pub fn prepend_all<R: Resource>(items: &mut Vec<R>, batch: &[R]) {
    items.retain(|existing| batch.iter().all(|new| new.id() != existing.id()));
    items.splice(0..0, batch.iter().cloned());
}

/// Replace the entry whose id matches. Returns whether one was found.
pub fn replace_by_id<R: Resource>(items: &mut [R], item: &R) -> bool {
    let mut found = false;
    for existing in items.iter_mut().filter(|e| e.id() == item.id()) {
        *existing = item.clone();
        found = true;
    }
    found
}

/// Remove every entry with the given id.
pub fn remove_by_id<R: Resource>(items: &mut Vec<R>, id: i64) {
    items.retain(|existing| existing.id() != id);
}

/// Apply a patch to every entry with the given id.
pub fn patch_by_id<R: Resource>(items: &mut [R], id: i64, patch: impl Fn(&mut R)) {
    items.iter_mut().filter(|e| e.id() == id).for_each(patch);
}

/// Keep `selected` in lock-step with an updated item.
pub fn refresh_selected<R: Resource>(selected: &mut Option<R>, item: &R) {
    if selected.as_ref().is_some_and(|s| s.id() == item.id()) {
        *selected = Some(item.clone());
    }
}

/// Clear `selected` if it holds the given id.
pub fn clear_selected<R: Resource>(selected: &mut Option<R>, id: i64) {
    if selected.as_ref().is_some_and(|s| s.id() == id) {
        *selected = None;
    }
}
