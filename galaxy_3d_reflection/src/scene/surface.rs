/// Surfaces receiving the reflection texture.
///
/// The list is authored by the host. Reflection code reads it in order
/// and never resizes or reorders it.

/// Host-side identity of a renderable surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

/// Ordered list of surfaces that sample the reflection texture.
///
/// `None` entries are unassigned slots; publishing skips them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceTargetList {
    entries: Vec<Option<SurfaceId>>,
}

impl SurfaceTargetList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots (including unassigned ones)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no slots
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slots in authoring order
    pub fn iter(&self) -> impl Iterator<Item = Option<SurfaceId>> + '_ {
        self.entries.iter().copied()
    }
}

impl From<Vec<Option<SurfaceId>>> for SurfaceTargetList {
    fn from(entries: Vec<Option<SurfaceId>>) -> Self {
        Self { entries }
    }
}

impl FromIterator<SurfaceId> for SurfaceTargetList {
    fn from_iter<I: IntoIterator<Item = SurfaceId>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(Some).collect() }
    }
}
