//! Shared types for describing a multi-part download.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::size;

/// Opaque identifier for a [`Part`].
///
/// Assigned once when the part is created and never changed. New ids
/// are random v4 UUIDs, but any string is accepted on deserialization
/// so settings files written with other id schemes (e.g. millisecond
/// timestamps) still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(String);

impl PartId {
    /// Generate a fresh, unique id.
    #[must_use]
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PartId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PartId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for PartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A label that does not name any variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {label:?}")]
pub struct ParseLabelError {
    kind: &'static str,
    label: String,
}

/// Unit a part's size is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SizeUnit {
    /// Megabytes.
    #[serde(rename = "MB")]
    Mb,
    /// Gigabytes (1024 MB).
    #[default]
    #[serde(rename = "GB")]
    Gb,
}

impl SizeUnit {
    /// Every unit, in the order offered by the UI.
    pub const ALL: [Self; 2] = [Self::Mb, Self::Gb];

    /// Display label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mb => "MB",
            Self::Gb => "GB",
        }
    }

    /// Convert `size` expressed in this unit to megabytes.
    #[must_use]
    pub fn to_megabytes(self, size: f64) -> f64 {
        match self {
            Self::Mb => size,
            Self::Gb => size * size::MB_PER_GB,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SizeUnit {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "size unit",
                label: s.to_owned(),
            })
    }
}

/// Archive or image format of the file being described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileType {
    #[default]
    #[serde(rename = "ZIP")]
    Zip,
    #[serde(rename = "RAR")]
    Rar,
    #[serde(rename = "7Z")]
    SevenZip,
    #[serde(rename = "TAR")]
    Tar,
    #[serde(rename = "PKG")]
    Pkg,
    #[serde(rename = "ISO")]
    Iso,
}

impl FileType {
    /// Every file type, in the order offered by the UI.
    pub const ALL: [Self; 6] = [
        Self::Zip,
        Self::Rar,
        Self::SevenZip,
        Self::Tar,
        Self::Pkg,
        Self::Iso,
    ];

    /// Upper-case label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Zip => "ZIP",
            Self::Rar => "RAR",
            Self::SevenZip => "7Z",
            Self::Tar => "TAR",
            Self::Pkg => "PKG",
            Self::Iso => "ISO",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FileType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.label() == s)
            .ok_or_else(|| ParseLabelError {
                kind: "file type",
                label: s.to_owned(),
            })
    }
}

/// One named, sized, linked piece of the larger download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Immutable identifier.
    pub id: PartId,
    /// Display label. Not required to be unique.
    pub name: String,
    /// Non-negative magnitude in [`unit`](Self::unit)s.
    pub size: f64,
    /// Unit of [`size`](Self::size).
    pub unit: SizeUnit,
    /// Link the generated page points at. Free text, not validated as a URL.
    pub download_url: String,
}

impl Part {
    /// Size of the part initially.
    pub const DEFAULT_SIZE: f64 = 1.0;

    /// Create a part with default size and unit and an empty URL.
    ///
    /// `ordinal` is the 1-based creation position used for the
    /// default `"Part N"` name.
    #[must_use]
    pub fn new(ordinal: usize) -> Self {
        Self {
            id: PartId::random(),
            name: format!("Part {ordinal}"),
            size: Self::DEFAULT_SIZE,
            unit: SizeUnit::default(),
            download_url: String::new(),
        }
    }

    /// Size of this part in megabytes.
    #[must_use]
    pub fn megabytes(&self) -> f64 {
        self.unit.to_megabytes(self.size)
    }

    /// Merge `update` into this part, leaving unspecified fields alone.
    pub fn apply(&mut self, update: PartUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(size) = update.size {
            self.size = sanitize_size(size);
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(download_url) = update.download_url {
            self.download_url = download_url;
        }
    }
}

/// Clamp user-entered sizes to a finite, non-negative value.
fn sanitize_size(size: f64) -> f64 {
    if size.is_finite() { size.max(0.0) } else { 0.0 }
}

/// Partial update for a [`Part`]. `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartUpdate {
    pub name: Option<String>,
    pub size: Option<f64>,
    pub unit: Option<SizeUnit>,
    pub download_url: Option<String>,
}

impl PartUpdate {
    /// Update only the name.
    #[must_use]
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Update only the size.
    #[must_use]
    pub fn size(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// Update only the unit.
    #[must_use]
    pub fn unit(unit: SizeUnit) -> Self {
        Self {
            unit: Some(unit),
            ..Self::default()
        }
    }

    /// Update only the download URL.
    #[must_use]
    pub fn download_url(url: impl Into<String>) -> Self {
        Self {
            download_url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// The complete user input a download page is generated from.
///
/// Serialized as camelCase JSON (`fileName`, `fileType`, `parts`).
/// Missing top-level fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorState {
    /// Label of the file being described.
    pub file_name: String,
    /// Format of the file being described.
    pub file_type: FileType,
    /// Parts in display order.
    pub parts: Vec<Part>,
}

impl GeneratorState {
    /// Append a new default part and return its id.
    pub fn add_part(&mut self) -> PartId {
        let part = Part::new(self.parts.len() + 1);
        let id = part.id.clone();
        self.parts.push(part);
        id
    }

    /// Remove the part with `id`. Returns `false` if no such part exists.
    pub fn remove_part(&mut self, id: &PartId) -> bool {
        let before = self.parts.len();
        self.parts.retain(|p| &p.id != id);
        self.parts.len() != before
    }

    /// Merge `update` into the part with `id`. Returns `false` if no such
    /// part exists.
    pub fn update_part(&mut self, id: &PartId, update: PartUpdate) -> bool {
        match self.parts.iter_mut().find(|p| &p.id == id) {
            Some(part) => {
                part.apply(update);
                true
            }
            None => false,
        }
    }

    /// Look up a part by id.
    #[must_use]
    pub fn part(&self, id: &PartId) -> Option<&Part> {
        self.parts.iter().find(|p| &p.id == id)
    }

    /// Total size of all parts, formatted for display.
    #[must_use]
    pub fn total_size(&self) -> String {
        size::calculate_total_size(&self.parts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty_zip() {
        let state = GeneratorState::default();
        assert_eq!(state.file_name, "");
        assert_eq!(state.file_type, FileType::Zip);
        assert!(state.parts.is_empty());
    }

    #[test]
    fn add_part_uses_defaults_and_count_based_name() {
        let mut state = GeneratorState::default();
        let first = state.add_part();
        let second = state.add_part();

        assert_ne!(first, second);
        let part = state.part(&second).unwrap();
        assert_eq!(part.name, "Part 2");
        assert!((part.size - 1.0).abs() < f64::EPSILON);
        assert_eq!(part.unit, SizeUnit::Gb);
        assert_eq!(part.download_url, "");
    }

    #[test]
    fn names_follow_current_count_after_removal() {
        let mut state = GeneratorState::default();
        let a = state.add_part();
        state.add_part();
        assert!(state.remove_part(&a));
        state.add_part();
        // Two parts exist before the add, so the new one is "Part 3"
        // even though a "Part 2" is still present.
        let names: Vec<&str> = state.parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Part 2", "Part 3"]);
    }

    #[test]
    fn remove_missing_part_is_noop() {
        let mut state = GeneratorState::default();
        state.add_part();
        let before = state.clone();
        assert!(!state.remove_part(&PartId::from("missing")));
        assert_eq!(state, before);
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut state = GeneratorState::default();
        let id = state.add_part();
        assert!(state.update_part(&id, PartUpdate::download_url("https://x/1")));
        assert!(state.update_part(&id, PartUpdate::unit(SizeUnit::Mb)));

        let part = state.part(&id).unwrap();
        assert_eq!(part.name, "Part 1");
        assert_eq!(part.unit, SizeUnit::Mb);
        assert_eq!(part.download_url, "https://x/1");
        assert!((part.size - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn update_missing_part_is_noop() {
        let mut state = GeneratorState::default();
        state.add_part();
        let before = state.clone();
        assert!(!state.update_part(&PartId::from("nope"), PartUpdate::name("x")));
        assert_eq!(state, before);
    }

    #[test]
    fn update_sanitizes_size() {
        let mut state = GeneratorState::default();
        let id = state.add_part();

        state.update_part(&id, PartUpdate::size(-3.0));
        assert!(state.part(&id).unwrap().size.abs() < f64::EPSILON);

        state.update_part(&id, PartUpdate::size(f64::NAN));
        assert!(state.part(&id).unwrap().size.abs() < f64::EPSILON);

        state.update_part(&id, PartUpdate::size(2.5));
        assert!((state.part(&id).unwrap().size - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn file_type_labels_round_trip() {
        for ty in FileType::ALL {
            assert_eq!(ty.label().parse::<FileType>().unwrap(), ty);
        }
        assert!("zip".parse::<FileType>().is_err());
    }

    #[test]
    fn size_unit_labels_round_trip() {
        for unit in SizeUnit::ALL {
            assert_eq!(unit.label().parse::<SizeUnit>().unwrap(), unit);
        }
        assert!("TB".parse::<SizeUnit>().is_err());
    }

    #[test]
    fn serializes_with_camel_case_keys_and_labels() {
        let state = GeneratorState {
            file_name: "Game".into(),
            file_type: FileType::SevenZip,
            parts: vec![Part {
                id: PartId::from("1712345678901"),
                name: "Part 1".into(),
                size: 1.5,
                unit: SizeUnit::Gb,
                download_url: "https://x/1".into(),
            }],
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fileName": "Game",
                "fileType": "7Z",
                "parts": [{
                    "id": "1712345678901",
                    "name": "Part 1",
                    "size": 1.5,
                    "unit": "GB",
                    "downloadUrl": "https://x/1",
                }],
            })
        );
    }

    #[test]
    fn missing_top_level_fields_take_defaults() {
        let state: GeneratorState = serde_json::from_str(r#"{"fileName": "A"}"#).unwrap();
        assert_eq!(state.file_name, "A");
        assert_eq!(state.file_type, FileType::Zip);
        assert!(state.parts.is_empty());
    }

    #[test]
    fn unknown_file_type_is_rejected() {
        let result = serde_json::from_str::<GeneratorState>(r#"{"fileType": "DMG"}"#);
        assert!(result.is_err());
    }
}
