//! Derived versions: increments and field overrides
//!
//! Every operation returns a new release version. Prerelease and build are
//! dropped, fields of lower significance are reset to zero.

use crate::error::{Field, Result, SemverError};
use crate::version::Version;

fn increment(field: Field, value: u64) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or(SemverError::FieldOverflow { field, value })
}

fn non_negative(field: Field, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| SemverError::NegativeField { field, value })
}

impl Version {
    /// `1.2.3-rc.1` becomes `2.0.0`
    pub fn next_major(&self) -> Result<Version> {
        let major = increment(Field::Major, self.major())?;
        Ok(Version::new(major, 0, 0))
    }

    /// `1.2.3-rc.1` becomes `1.3.0`
    pub fn next_minor(&self) -> Result<Version> {
        let minor = increment(Field::Minor, self.minor())?;
        Ok(Version::new(self.major(), minor, 0))
    }

    /// `1.2.3-rc.1` becomes `1.2.4`
    pub fn next_patch(&self) -> Result<Version> {
        let patch = increment(Field::Patch, self.patch())?;
        Ok(Version::new(self.major(), self.minor(), patch))
    }

    pub fn with_major(&self, major: i64) -> Result<Version> {
        let major = non_negative(Field::Major, major)?;
        Ok(Version::new(major, 0, 0))
    }

    pub fn with_minor(&self, minor: i64) -> Result<Version> {
        let minor = non_negative(Field::Minor, minor)?;
        Ok(Version::new(self.major(), minor, 0))
    }

    pub fn with_patch(&self, patch: i64) -> Result<Version> {
        let patch = non_negative(Field::Patch, patch)?;
        Ok(Version::new(self.major(), self.minor(), patch))
    }
}
