// Snapshots of the array and the renderers that consume them

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Semantic label for a bar, drives its color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Default,
    Comparing,
    Pivot,
    Swapping,
    Sorted,
    HeapActive,
    InsertionActive,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Default,
        Role::Comparing,
        Role::Pivot,
        Role::Swapping,
        Role::Sorted,
        Role::HeapActive,
        Role::InsertionActive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Default => "default",
            Role::Comparing => "comparing",
            Role::Pivot => "pivot",
            Role::Swapping => "swapping",
            Role::Sorted => "sorted",
            Role::HeapActive => "heap_active",
            Role::InsertionActive => "insertion_active",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index -> role tags for one frame
pub type RoleMap = FxHashMap<usize, Role>;

/// Build a role map tagging every index in `range` with `role`
pub fn tag_range(range: std::ops::Range<usize>, role: Role) -> RoleMap {
    range.map(|i| (i, role)).collect()
}

/// One frame: the array contents plus optional role tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    values: Vec<u32>,
    roles: Option<RoleMap>,
}

impl Snapshot {
    pub fn new(values: &[u32], roles: Option<RoleMap>) -> Self {
        Snapshot {
            values: values.to_vec(),
            roles,
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn roles(&self) -> Option<&RoleMap> {
        self.roles.as_ref()
    }

    /// Role of the bar at `index`; untagged bars are `Default`
    pub fn role_at(&self, index: usize) -> Role {
        self.roles
            .as_ref()
            .and_then(|roles| roles.get(&index).copied())
            .unwrap_or_default()
    }

    /// True when every index carries the `Sorted` tag
    pub fn is_all_sorted(&self) -> bool {
        (0..self.values.len()).all(|i| self.role_at(i) == Role::Sorted)
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough: 4 bytes per value, 16 per map entry
        let roles = self.roles.as_ref().map_or(0, |r| r.len());
        self.values.len() * 4 + roles * 16
    }
}

/// Something that displays a frame and returns once it has been shown
///
/// Implementations own the pacing: a visible renderer blocks for the
/// configured per-frame delay before returning.
pub trait Renderer {
    fn render(&mut self, snapshot: Snapshot);
}

/// Discards every frame without delay (headless runs and tests)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: Snapshot) {}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("frame history limit exceeded: {current} + {requested} > {limit} bytes")]
    LimitExceeded {
        current: usize,
        requested: usize,
        limit: usize,
    },
}

/// Recorded frames of one run, capped by estimated memory
#[derive(Debug, Clone)]
pub struct FrameHistory {
    frames: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl FrameHistory {
    pub fn new(max_memory: usize) -> Self {
        FrameHistory {
            frames: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a frame to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), HistoryError> {
        let size = snapshot.estimated_size();

        if self.current_memory + size > self.max_memory {
            return Err(HistoryError::LimitExceeded {
                current: self.current_memory,
                requested: size,
                limit: self.max_memory,
            });
        }

        self.current_memory += size;
        self.frames.push(snapshot);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.frames.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.frames.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
        self.current_memory = 0;
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

/// Records every frame into a `FrameHistory`, without delay
#[derive(Debug)]
pub struct RecordingRenderer {
    history: FrameHistory,
    dropped: usize,
}

impl RecordingRenderer {
    pub fn new(max_memory: usize) -> Self {
        RecordingRenderer {
            history: FrameHistory::new(max_memory),
            dropped: 0,
        }
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    pub fn into_history(self) -> FrameHistory {
        self.history
    }

    /// Frames that did not fit under the memory cap
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: Snapshot) {
        if let Err(e) = self.history.push(snapshot) {
            if self.dropped == 0 {
                log::warn!("{}; later frames are not recorded", e);
            }
            self.dropped += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup_defaults() {
        let mut roles = RoleMap::default();
        roles.insert(1, Role::Pivot);
        let snapshot = Snapshot::new(&[3, 1, 2], Some(roles));

        assert_eq!(snapshot.role_at(0), Role::Default);
        assert_eq!(snapshot.role_at(1), Role::Pivot);
        assert_eq!(Snapshot::new(&[3], None).role_at(0), Role::Default);
    }

    #[test]
    fn test_all_sorted() {
        let snapshot = Snapshot::new(&[1, 2, 3], Some(tag_range(0..3, Role::Sorted)));
        assert!(snapshot.is_all_sorted());

        let partial = Snapshot::new(&[1, 2, 3], Some(tag_range(1..3, Role::Sorted)));
        assert!(!partial.is_all_sorted());
    }

    #[test]
    fn test_role_names() {
        let names: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
        assert_eq!(
            names,
            [
                "default",
                "comparing",
                "pivot",
                "swapping",
                "sorted",
                "heap_active",
                "insertion_active"
            ]
        );
    }

    #[test]
    fn test_history_limit() {
        // 3 values = 12 bytes per frame
        let mut history = FrameHistory::new(30);
        assert!(history.push(Snapshot::new(&[1, 2, 3], None)).is_ok());
        assert!(history.push(Snapshot::new(&[1, 2, 3], None)).is_ok());
        assert_eq!(
            history.push(Snapshot::new(&[1, 2, 3], None)),
            Err(HistoryError::LimitExceeded {
                current: 24,
                requested: 12,
                limit: 30
            })
        );
        assert_eq!(history.len(), 2);
        assert_eq!(history.memory_usage(), 24);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.memory_usage(), 0);
    }

    #[test]
    fn test_recording_renderer_counts_dropped() {
        let mut recorder = RecordingRenderer::new(8);
        recorder.render(Snapshot::new(&[1, 2], None));
        recorder.render(Snapshot::new(&[1, 2], None));
        recorder.render(Snapshot::new(&[1, 2], None));

        assert_eq!(recorder.history().len(), 2);
        assert_eq!(recorder.dropped(), 1);
    }
}
