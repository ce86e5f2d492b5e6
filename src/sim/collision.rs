//! Group collision passes
//!
//! Both passes remove entities while walking a group, so they iterate a
//! membership snapshot and re-check liveness through the handle.

use super::entity::{Collider, Sprite};
use super::group::Group;

/// Remove every member of `group` that overlaps `other`.
/// Returns how many were removed.
pub fn group_collide<C: Collider + ?Sized>(group: &mut Group<Sprite>, other: &C) -> u32 {
    let mut hits = 0;
    for handle in group.handles() {
        let Some(sprite) = group.get(handle) else {
            continue;
        };
        if sprite.collide(other) {
            group.remove(handle);
            hits += 1;
        }
    }
    hits
}

/// Missiles vs rocks.
///
/// Each rock removes every missile touching it; a rock hit by at least one
/// missile is removed too. The return value counts missiles, so two missiles
/// hitting the same rock on the same tick score two points.
pub fn group_group_collide(rocks: &mut Group<Sprite>, missiles: &mut Group<Sprite>) -> u32 {
    let mut total = 0;
    for handle in rocks.handles() {
        let Some(rock) = rocks.get(handle) else {
            continue;
        };
        let hits = group_collide(missiles, rock);
        if hits > 0 {
            rocks.remove(handle);
        }
        total += hits;
    }
    total
}
