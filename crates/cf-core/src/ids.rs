use core::fmt;
use core::num::NonZeroU32;

/// 1-based compression stage number assigned when a cylinder is appended.
///
/// - `u32` keeps memory small
/// - `NonZero` makes stage 0 unrepresentable and lets `Option<StageIndex>`
///   stay the same size
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StageIndex(NonZeroU32);

impl StageIndex {
    pub const MAX: StageIndex = StageIndex(NonZeroU32::MAX);

    /// Stage number for the element about to be appended to a list of `len` stages.
    pub fn next_after(len: usize) -> Option<Self> {
        let len = u32::try_from(len).ok()?;
        len.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Create from a 1-based stage number. Returns `None` for 0.
    pub fn new(stage: u32) -> Option<Self> {
        NonZeroU32::new(stage).map(Self)
    }

    /// The 1-based stage number.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Position of this stage in its list (0-based).
    pub fn position(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl fmt::Debug for StageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage({})", self.get())
    }
}

impl fmt::Display for StageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
