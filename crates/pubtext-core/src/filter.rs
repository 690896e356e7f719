//! PMID range filtering

/// Optional exclusive PMID bounds.
///
/// A citation is skipped when its PMID is <= `greater_than` or
/// >= `lower_than`; either bound may be absent independently.
#[derive(Debug, Default, Clone, Copy)]
pub struct PmidRange {
    pub greater_than: Option<u64>,
    pub lower_than: Option<u64>,
}

impl PmidRange {
    pub fn excludes(&self, pmid: u64) -> bool {
        self.greater_than.is_some_and(|lo| pmid <= lo)
            || self.lower_than.is_some_and(|hi| pmid >= hi)
    }

    pub fn is_unbounded(&self) -> bool {
        self.greater_than.is_none() && self.lower_than.is_none()
    }
}
