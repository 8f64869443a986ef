#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntVectorError {
    #[error("cannot pop from an empty vector")]
    Empty,

    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("allocation of {capacity} elements failed")]
    AllocFailed { capacity: usize },
}

impl IntVectorError {
    /// `true` for the errors raised by reading or popping past the live elements.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::Empty | Self::IndexOutOfRange { .. })
    }
}
