#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Keep relaxing after the finish is finalized, until every reachable
    /// cell has its minimum distance.
    pub exhaustive: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { exhaustive: false }
    }
}

impl SearchConfig {
    pub fn exhaustive() -> Self {
        Self { exhaustive: true }
    }
}
