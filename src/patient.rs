// src/patient.rs
//! Canonical patient schema and the physical column layout of the sheet.
//!
//! The published sheet has one more column than the schema has fields: the
//! third column is an empty spacer. [`COLUMN_LAYOUT`] maps every physical
//! column index to either a schema [`Field`] or [`Column::Spacer`], so the
//! extractor never does offset arithmetic.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of schema fields in a [`Patient`].
pub const FIELD_COUNT: usize = 22;

/// Number of physical columns in a sheet row (schema + spacer).
pub const COLUMN_COUNT: usize = FIELD_COUNT + 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    PatientNumber,
    DateAnnounced,
    DateAdded,
    Age,
    Gender,
    ResidenceDistrict,
    DetectedCity,
    DetectedDistrict,
    Status,
    TransmissionType,
    Notes,
    RelatedPatients,
    KnownCluster,
    DhsOrigPatientNumber,
    OriginState,
    OriginCountry,
    DistrictPatientNumber,
    CityPatientNumber,
    Released,
    RecoveryTime,
    Deceased,
    Sources,
}

impl Field {
    /// Schema order. Export headers and JSON keys follow this order.
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::PatientNumber,
        Field::DateAnnounced,
        Field::DateAdded,
        Field::Age,
        Field::Gender,
        Field::ResidenceDistrict,
        Field::DetectedCity,
        Field::DetectedDistrict,
        Field::Status,
        Field::TransmissionType,
        Field::Notes,
        Field::RelatedPatients,
        Field::KnownCluster,
        Field::DhsOrigPatientNumber,
        Field::OriginState,
        Field::OriginCountry,
        Field::DistrictPatientNumber,
        Field::CityPatientNumber,
        Field::Released,
        Field::RecoveryTime,
        Field::Deceased,
        Field::Sources,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::PatientNumber => "patient_number",
            Field::DateAnnounced => "date_announced",
            Field::DateAdded => "date_added",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::ResidenceDistrict => "residence_district",
            Field::DetectedCity => "detected_city",
            Field::DetectedDistrict => "detected_district",
            Field::Status => "status",
            Field::TransmissionType => "transmission_type",
            Field::Notes => "notes",
            Field::RelatedPatients => "related_patients",
            Field::KnownCluster => "known_cluster",
            Field::DhsOrigPatientNumber => "dhs_orig_patient_number",
            Field::OriginState => "origin_state",
            Field::OriginCountry => "origin_country",
            Field::DistrictPatientNumber => "district_patient_number",
            Field::CityPatientNumber => "city_patient_number",
            Field::Released => "released",
            Field::RecoveryTime => "recovery_time",
            Field::Deceased => "deceased",
            Field::Sources => "sources",
        }
    }

    /// Position of this field in [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field names in schema order (export header row).
    pub fn headers() -> Vec<String> {
        Field::ALL.iter().map(|f| f.name().to_string()).collect()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a physical sheet column holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Field(Field),
    Spacer,
}

/// Physical column index → content. Column 2 (0-based) is the spacer.
pub const COLUMN_LAYOUT: [Column; COLUMN_COUNT] = [
    Column::Field(Field::PatientNumber),
    Column::Field(Field::DateAnnounced),
    Column::Spacer,
    Column::Field(Field::DateAdded),
    Column::Field(Field::Age),
    Column::Field(Field::Gender),
    Column::Field(Field::ResidenceDistrict),
    Column::Field(Field::DetectedCity),
    Column::Field(Field::DetectedDistrict),
    Column::Field(Field::Status),
    Column::Field(Field::TransmissionType),
    Column::Field(Field::Notes),
    Column::Field(Field::RelatedPatients),
    Column::Field(Field::KnownCluster),
    Column::Field(Field::DhsOrigPatientNumber),
    Column::Field(Field::OriginState),
    Column::Field(Field::OriginCountry),
    Column::Field(Field::DistrictPatientNumber),
    Column::Field(Field::CityPatientNumber),
    Column::Field(Field::Released),
    Column::Field(Field::RecoveryTime),
    Column::Field(Field::Deceased),
    Column::Field(Field::Sources),
];

/// One patient row. Fields the source row never reached stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Patient {
    values: [Option<String>; FIELD_COUNT],
}

impl Patient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    /// Number of fields that were filled from the source row.
    pub fn populated(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Flat row in schema order; absent fields become empty strings.
    pub fn to_row(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| v.clone().unwrap_or_default())
            .collect()
    }
}

/// Serializes as a map in schema order, skipping absent fields.
impl Serialize for Patient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.populated()))?;
        for field in Field::ALL {
            if let Some(v) = self.get(field) {
                map.serialize_entry(field.name(), v)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_order_matches_indices() {
        for (i, f) in Field::ALL.iter().enumerate() {
            assert_eq!(f.index(), i, "{f} out of place");
        }
        assert_eq!(Field::headers().first().map(String::as_str), Some("patient_number"));
        assert_eq!(Field::headers().last().map(String::as_str), Some("sources"));
    }

    #[test]
    fn layout_has_one_spacer_after_second_field() {
        let spacers: Vec<usize> = COLUMN_LAYOUT
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Column::Spacer)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(spacers, vec![2]);

        // Every field appears exactly once, in schema order.
        let fields: Vec<Field> = COLUMN_LAYOUT
            .iter()
            .filter_map(|c| match c {
                Column::Field(f) => Some(*f),
                Column::Spacer => None,
            })
            .collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn json_skips_absent_fields() {
        let mut p = Patient::new();
        p.set(Field::PatientNumber, "7");
        p.set(Field::Gender, "");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"patient_number":"7","gender":""}"#);
    }

    #[test]
    fn to_row_fills_absent_with_empty() {
        let mut p = Patient::new();
        p.set(Field::Sources, "https://example.org");
        let row = p.to_row();
        assert_eq!(row.len(), FIELD_COUNT);
        assert_eq!(row[0], "");
        assert_eq!(row[FIELD_COUNT - 1], "https://example.org");
    }
}
