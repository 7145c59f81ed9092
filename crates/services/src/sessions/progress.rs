/// Snapshot of how far an attempt has progressed, for shells to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Question count of the session's snapshot.
    pub total: usize,
    /// How many questions have a recorded answer so far.
    pub answered: usize,
    /// Index of the question currently presented.
    pub current: usize,
    pub is_complete: bool,
}
