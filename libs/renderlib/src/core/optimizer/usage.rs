// Copyright (c) 2025 Jonathan Fontanez
// SPDX-License-Identifier: BUSL-1.1

//! Usage points and lifetime ranges.
//!
//! A usage point records one touch of a resource at a position in the task
//! schedule. The containing set is keyed solely on that position: two
//! operations at the same task index must never share a physical slot, so a
//! point whose index is already occupied is discarded on insert and merging
//! requires fully disjoint indices.

use std::collections::BTreeMap;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::core::graph::AccessType;
use crate::core::id::Id;

/// One touch of a resource in the task schedule.
///
/// Equality and ordering consider the task position alone: two points at the
/// same position are the same point no matter which pass or resource they
/// name, which is what keeps co-indexed operations out of a shared slot.
#[derive(Debug, Clone, Serialize)]
pub struct UsagePoint {
    /// Position of the touching pass in the final task sequence; async
    /// companions share their parent task's position.
    pub point: i32,
    #[serde(rename = "userResId")]
    pub resource_id: Id,
    #[serde(rename = "usedAs")]
    pub resource_name: String,
    #[serde(rename = "userNodeId")]
    pub pass_id: Id,
    #[serde(rename = "usedBy")]
    pub pass_name: String,
    pub access: AccessType,
}

impl PartialEq for UsagePoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for UsagePoint {}

impl PartialOrd for UsagePoint {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UsagePoint {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.point.cmp(&other.point)
    }
}

impl UsagePoint {
    /// Field-wise comparison, unlike `==` which only looks at the position.
    fn same_entry(&self, other: &Self) -> bool {
        self.point == other.point
            && self.resource_id == other.resource_id
            && self.resource_name == other.resource_name
            && self.pass_id == other.pass_id
            && self.pass_name == other.pass_name
            && self.access == other.access
    }
}

/// Inclusive span over task positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: i32,
    pub end: i32,
}

impl Range {
    /// Panics when `start > end`; an inverted range can only come from a
    /// corrupt usage-point set, which is a programmer error.
    pub fn new(start: i32, end: i32) -> Self {
        assert!(
            start <= end,
            "range starting point {start} is greater than the end point {end}"
        );
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start.max(other.start) <= self.end.min(other.end)
    }
}

/// Ordered set of usage points, keyed on the task position alone.
#[derive(Debug, Clone, Default)]
pub struct UsagePointSet {
    points: BTreeMap<i32, UsagePoint>,
}

// Position-only point equality would make a derived comparison treat any two
// sets with matching positions as equal; set equality compares full entries.
impl PartialEq for UsagePointSet {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len()
            && self
                .points
                .values()
                .zip(other.points.values())
                .all(|(a, b)| a.same_entry(b))
    }
}

impl Eq for UsagePointSet {}

impl UsagePointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point. Returns false and discards the point when its
    /// position is already occupied.
    pub fn insert(&mut self, point: UsagePoint) -> bool {
        match self.points.entry(point.point) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(point);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Merge another set into this one. Succeeds only when no position is
    /// shared; on conflict nothing is inserted.
    pub fn merge(&mut self, other: &UsagePointSet) -> bool {
        if other.points.keys().any(|point| self.points.contains_key(point)) {
            return false;
        }
        for point in other.points.values() {
            self.points.insert(point.point, point.clone());
        }
        true
    }

    pub fn get(&self, point: i32) -> Option<&UsagePoint> {
        self.points.get(&point)
    }

    /// Inclusive span of the contained positions. Panics on an empty set.
    pub fn range(&self) -> Range {
        let start = self.points.keys().next().copied();
        let end = self.points.keys().next_back().copied();
        match (start, end) {
            (Some(start), Some(end)) => Range::new(start, end),
            _ => panic!("usage range requested for an empty usage-point set"),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = &UsagePoint> {
        self.points.values()
    }
}

impl Serialize for UsagePointSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.points.len()))?;
        for point in self.points.values() {
            seq.serialize_element(point)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(position: i32, name: &str) -> UsagePoint {
        UsagePoint {
            point: position,
            resource_id: 0,
            resource_name: name.to_string(),
            pass_id: 0,
            pass_name: String::new(),
            access: AccessType::Read,
        }
    }

    #[test]
    fn test_point_equality_considers_the_position_alone() {
        let mut a = point(2, "first");
        let b = point(2, "second");
        assert_eq!(a, b);
        assert!(a.cmp(&b).is_eq());

        a.access = AccessType::Write;
        a.resource_id = 42;
        assert_eq!(a, b);

        assert_ne!(point(1, "first"), point(2, "first"));
        assert!(point(1, "x") < point(2, "x"));
    }

    #[test]
    fn test_set_equality_compares_full_entries() {
        let mut a = UsagePointSet::new();
        a.insert(point(1, "color"));
        a.insert(point(2, "color"));

        let mut same = UsagePointSet::new();
        same.insert(point(1, "color"));
        same.insert(point(2, "color"));
        assert_eq!(a, same);

        // Matching positions are not enough for the sets to be equal.
        let mut renamed = UsagePointSet::new();
        renamed.insert(point(1, "color"));
        renamed.insert(point(2, "depth"));
        assert_ne!(a, renamed);

        let mut shorter = UsagePointSet::new();
        shorter.insert(point(1, "color"));
        assert_ne!(a, shorter);
    }

    #[test]
    fn test_insert_discards_second_point_at_same_position() {
        let mut set = UsagePointSet::new();
        assert!(set.insert(point(2, "first")));
        assert!(!set.insert(point(2, "second")));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(2).unwrap().resource_name, "first");
    }

    #[test]
    fn test_merge_requires_disjoint_positions() {
        let mut a = UsagePointSet::new();
        a.insert(point(1, "a1"));
        a.insert(point(2, "a2"));

        let mut overlap = UsagePointSet::new();
        overlap.insert(point(2, "b2"));
        overlap.insert(point(3, "b3"));
        assert!(!a.merge(&overlap));
        // A failed merge must leave the target untouched.
        assert_eq!(a.len(), 2);
        assert!(a.get(3).is_none());

        let mut disjoint = UsagePointSet::new();
        disjoint.insert(point(3, "b3"));
        disjoint.insert(point(4, "b4"));
        assert!(a.merge(&disjoint));
        assert_eq!(a.len(), 4);
        assert_eq!(a.range(), Range::new(1, 4));
    }

    #[test]
    fn test_range_overlap_is_inclusive() {
        assert!(Range::new(0, 2).overlaps(&Range::new(2, 4)));
        assert!(Range::new(2, 4).overlaps(&Range::new(0, 2)));
        assert!(!Range::new(0, 1).overlaps(&Range::new(2, 3)));
        assert!(Range::new(0, 10).overlaps(&Range::new(4, 5)));
    }

    #[test]
    #[should_panic(expected = "greater than the end point")]
    fn test_inverted_range_panics() {
        let _ = Range::new(3, 1);
    }

    #[test]
    fn test_iteration_is_position_ordered() {
        let mut set = UsagePointSet::new();
        set.insert(point(5, "c"));
        set.insert(point(1, "a"));
        set.insert(point(3, "b"));
        let order: Vec<i32> = set.iter().map(|p| p.point).collect();
        assert_eq!(order, vec![1, 3, 5]);
    }
}
