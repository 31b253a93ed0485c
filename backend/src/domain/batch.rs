//! Array-length reconciliation for batch write requests.
//!
//! Batch endpoints submit one scalar user id plus several parallel columns,
//! one column per item field. Every column must carry the same number of
//! elements before any storage call is issued; the reconciler is the single
//! gate enforcing that invariant. Zero-length columns are a legitimate empty
//! batch, not a mismatch.

use thiserror::Error as ThisError;

/// Raised when parallel batch columns disagree on their length.
///
/// Carries no further detail: the HTTP adapters attach the endpoint-specific
/// message literal when translating this into a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("parallel arrays have unequal lengths")]
pub struct ArityMismatch;

/// Verify that every column length matches, returning the shared row count.
///
/// An empty slice of columns and all-zero lengths both reconcile to zero
/// rows; only unequal lengths fail.
///
/// # Examples
/// ```
/// use pantry_backend::domain::batch::reconciled_len;
///
/// assert_eq!(reconciled_len(&[2, 2, 2]), Ok(2));
/// assert_eq!(reconciled_len(&[0, 0]), Ok(0));
/// assert!(reconciled_len(&[2, 1]).is_err());
/// ```
pub fn reconciled_len(lengths: &[usize]) -> Result<usize, ArityMismatch> {
    let Some((&first, rest)) = lengths.split_first() else {
        return Ok(0);
    };
    if rest.iter().any(|&len| len != first) {
        return Err(ArityMismatch);
    }
    Ok(first)
}

/// Outcome of a single dispatched row within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// The storage collaborator applied the row.
    Applied,
    /// The row's predicate matched nothing; a success-shaped outcome, not an
    /// error.
    NoRowsMatched,
}

/// Per-row outcome list produced by dispatching a reconciled batch.
///
/// Rows are processed best-effort and in order; a storage failure aborts the
/// remainder of the batch but rows dispatched earlier stay written. The
/// report only ever describes rows that were actually dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    rows: Vec<RowOutcome>,
}

impl BatchReport {
    /// Record the outcome of the next dispatched row.
    pub fn record(&mut self, outcome: RowOutcome) {
        self.rows.push(outcome);
    }

    /// Number of rows dispatched so far.
    pub fn dispatched(&self) -> usize {
        self.rows.len()
    }

    /// True when at least one dispatched row was applied.
    pub fn any_applied(&self) -> bool {
        self.rows.iter().any(|row| *row == RowOutcome::Applied)
    }

    /// Outcomes in dispatch order.
    pub fn rows(&self) -> &[RowOutcome] {
        &self.rows
    }
}
