//! Version parsing and validation module

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SemverError};
use crate::version::Version;

lazy_static! {
    /// Numeric identifier without leading zeros. `\d` would also accept non-ASCII digits.
    static ref NUMERIC_REGEX: &'static str = r"0|[1-9][0-9]*";

    /// Prerelease identifier: numeric, or alphanumeric with at least one non-digit
    static ref PRERELEASE_ID_REGEX: String = format!(r"{}|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*", *NUMERIC_REGEX);

    static ref BUILD_ID_REGEX: &'static str = r"[0-9a-zA-Z-]+";

    // Full SemVer 2.0.0 grammar; groups are major, minor, patch, prerelease, build
    static ref SEMVER_RE: Regex = Regex::new(&format!(
        r"^({num})\.({num})\.({num})(?:-((?:{pre})(?:\.(?:{pre}))*))?(?:\+({build}(?:\.{build})*))?$",
        num = *NUMERIC_REGEX,
        pre = *PRERELEASE_ID_REGEX,
        build = *BUILD_ID_REGEX,
    )).unwrap();
}

/// Parse a plain `major.minor.patch` without prerelease or build.
///
/// Returns `None` for anything else, including numeric overflow, so the
/// caller falls back to the full grammar.
fn fast_parse_core(version: &str) -> Option<(u64, u64, u64)> {
    let bytes = version.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(|&b| b.is_ascii_digit() || b == b'.') {
        return None;
    }

    let mut parts = version.split('.');
    let major = parse_numeric(parts.next()?)?;
    let minor = parse_numeric(parts.next()?)?;
    let patch = parse_numeric(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    Some((major, minor, patch))
}

/// Parse a numeric field, rejecting empty input and leading zeros
fn parse_numeric(part: &str) -> Option<u64> {
    let bytes = part.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    part.parse().ok()
}

/// Parser for SemVer 2.0.0 version strings
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a possibly absent version string.
    ///
    /// `None` is reported as [`SemverError::NullInput`], everything else goes
    /// through [`VersionParser::parse`].
    pub fn parse_nullable(&self, version: Option<&str>) -> Result<Version> {
        match version {
            Some(version) => self.parse(version),
            None => Err(SemverError::NullInput),
        }
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is trimmed first and the trimmed text is kept
    /// as the display form of the returned version. Empty input fails with
    /// [`SemverError::EmptyVersion`], anything not matching the grammar with
    /// [`SemverError::MalformedVersion`].
    pub fn parse(&self, version: &str) -> Result<Version> {
        let version = version.trim();

        if version.is_empty() {
            log::debug!("Rejected empty version string");
            return Err(SemverError::EmptyVersion);
        }

        if let Some((major, minor, patch)) = fast_parse_core(version) {
            log::trace!("Parsed release version \"{}\"", version);
            return Ok(Version::from_parts(major, minor, patch, None, None, version.to_string()));
        }

        let caps = match SEMVER_RE.captures(version) {
            Some(caps) => caps,
            None => {
                log::debug!("Rejected malformed version string \"{}\"", version);
                return Err(SemverError::MalformedVersion(version.to_string()));
            }
        };

        // The grammar guarantees digits only, so a failure here is overflow
        let field = |index: usize| -> Result<u64> {
            caps.get(index)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| {
                    log::debug!("Version field out of range in \"{}\"", version);
                    SemverError::MalformedVersion(version.to_string())
                })
        };

        let major = field(1)?;
        let minor = field(2)?;
        let patch = field(3)?;
        let prerelease = caps.get(4).map(|m| m.as_str().to_string());
        let build = caps.get(5).map(|m| m.as_str().to_string());

        log::trace!("Parsed version \"{}\"", version);
        Ok(Version::from_parts(major, minor, patch, prerelease, build, version.to_string()))
    }
}
