//! Marker types.

/// Marker type describing a range start.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing a range end.
#[derive(Clone, Copy, Debug)]
pub struct End;
