// Copyright (c) 2025 - Cowboy AI, Inc.
//! OVM server version splitting
//!
//! `ovmVersion` combines the release and build numbers, e.g. `3.4.2-1234`.

/// Split a composite OVM version into `(osver, osverno)`.
///
/// The release is everything before the first hyphen and the build number is
/// the segment after it; any further hyphenated segments are dropped. A
/// version without a hyphen is returned whole with no build number.
///
/// ```rust
/// use ovm_cmdb_sync::domain::split_ovm_version;
///
/// assert_eq!(split_ovm_version("3.4.2-1234"), ("3.4.2", Some("1234")));
/// assert_eq!(split_ovm_version("3.4.2"), ("3.4.2", None));
/// assert_eq!(split_ovm_version("3.4.2-1234-uek"), ("3.4.2", Some("1234")));
/// ```
pub fn split_ovm_version(version: &str) -> (&str, Option<&str>) {
    let mut segments = version.split('-');
    let release = segments.next().unwrap_or(version);
    (release, segments.next())
}
