use crate::geometry::check_probe_count;
use crate::ProfileError;

/// Scan rows of equal width, one value per probe, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanTable {
    probe_count: usize,
    data: Vec<f64>,
}

impl ScanTable {
    /// Empty table expecting `probe_count` values per row.
    pub fn new(probe_count: usize) -> Result<Self, ProfileError> {
        check_probe_count(probe_count)?;
        Ok(Self {
            probe_count,
            data: Vec::new(),
        })
    }

    /// Build a table from owned rows, rejecting the first row of the wrong width.
    pub fn from_rows<I, R>(probe_count: usize, rows: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let mut table = Self::new(probe_count)?;
        for row in rows {
            table.push_row(row.as_ref())?;
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: &[f64]) -> Result<(), ProfileError> {
        if row.len() != self.probe_count {
            return Err(ProfileError::ShapeMismatch {
                row: self.num_rows(),
                expected: self.probe_count,
                got: row.len(),
            });
        }
        self.data.extend_from_slice(row);
        Ok(())
    }

    #[inline]
    pub fn probe_count(&self) -> usize {
        self.probe_count
    }

    #[inline]
    pub fn num_rows(&self) -> usize {
        self.data.len() / self.probe_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.probe_count)?;
        let end = start.checked_add(self.probe_count)?;
        self.data.get(start..end)
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.probe_count)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn from_raw(probe_count: usize, data: Vec<f64>) -> Self {
        debug_assert!(probe_count > 0 && data.len() % probe_count == 0);
        Self { probe_count, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_round_trip_in_order() {
        let table = ScanTable::from_rows(3, [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).expect("table");
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.row(1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(table.row(2), None);
        let rows: Vec<&[f64]> = table.rows().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
    }

    #[test]
    fn short_row_reports_its_index() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
        let err = ScanTable::from_rows(3, rows).unwrap_err();
        assert_eq!(
            err,
            ProfileError::ShapeMismatch {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn empty_table_is_allowed_until_fitted() {
        let table = ScanTable::new(40).expect("table");
        assert!(table.is_empty());
        assert_eq!(table.num_rows(), 0);
    }

    #[test]
    fn zero_width_table_is_rejected() {
        assert_eq!(
            ScanTable::new(0),
            Err(ProfileError::InvalidProbeCount { probe_count: 0 })
        );
    }

    #[test]
    fn out_of_range_row_index_is_none() {
        let table = ScanTable::from_rows(2, [[1.0, 2.0]]).unwrap();
        assert_eq!(table.row(usize::MAX / 2), None);
        assert_eq!(table.row(usize::MAX), None);
    }
}
