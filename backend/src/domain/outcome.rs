//! Mutation outcome classification.

/// Result of a mutation that may legitimately match zero rows.
///
/// Matching zero rows is a success-shaped outcome distinct from a storage
/// failure: the delete endpoints report it to the client as a 200 with a
/// descriptive body, never as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// At least one row was affected.
    Applied(u64),
    /// The mutation's predicate matched nothing.
    NoRowsMatched,
}

impl MutationOutcome {
    /// Classify a storage-reported affected-row count.
    pub const fn from_affected(rows: u64) -> Self {
        if rows == 0 {
            Self::NoRowsMatched
        } else {
            Self::Applied(rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, MutationOutcome::NoRowsMatched)]
    #[case(1, MutationOutcome::Applied(1))]
    #[case(7, MutationOutcome::Applied(7))]
    fn affected_counts_classify(#[case] rows: u64, #[case] expected: MutationOutcome) {
        assert_eq!(MutationOutcome::from_affected(rows), expected);
    }
}
