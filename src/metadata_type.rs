use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// The integer component type shared by every value of a metadata enum.
///
/// Tags are matched exactly as they appear in schema JSON (`"UINT16"`, not
/// `"uint16"`).
///
/// # Examples
///
/// ```
/// use metadata_enum::MetadataType;
///
/// assert_eq!(MetadataType::from_tag("INT8"), Some(MetadataType::Int8));
/// assert_eq!(MetadataType::from_tag("FLOAT32"), None);
/// assert_eq!(MetadataType::default(), MetadataType::Uint16);
/// assert_eq!(MetadataType::Uint32.bits(), 32);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetadataType {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
}

impl MetadataType {
    /// The value type used when an enum does not declare a recognized one.
    pub const DEFAULT_ENUM_VALUE_TYPE: MetadataType = MetadataType::Uint16;

    /// Every recognized value type, narrowest first.
    pub const ALL: [MetadataType; 8] = [
        MetadataType::Int8,
        MetadataType::Uint8,
        MetadataType::Int16,
        MetadataType::Uint16,
        MetadataType::Int32,
        MetadataType::Uint32,
        MetadataType::Int64,
        MetadataType::Uint64,
    ];

    /// Looks up a value type by its schema tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|value_type| value_type.tag() == tag)
    }

    /// Returns the schema tag for this value type.
    pub fn tag(&self) -> &'static str {
        match self {
            MetadataType::Int8 => "INT8",
            MetadataType::Uint8 => "UINT8",
            MetadataType::Int16 => "INT16",
            MetadataType::Uint16 => "UINT16",
            MetadataType::Int32 => "INT32",
            MetadataType::Uint32 => "UINT32",
            MetadataType::Int64 => "INT64",
            MetadataType::Uint64 => "UINT64",
        }
    }

    /// Width of the type in bits.
    pub fn bits(&self) -> u32 {
        match self {
            MetadataType::Int8 | MetadataType::Uint8 => 8,
            MetadataType::Int16 | MetadataType::Uint16 => 16,
            MetadataType::Int32 | MetadataType::Uint32 => 32,
            MetadataType::Int64 | MetadataType::Uint64 => 64,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            MetadataType::Int8
                | MetadataType::Int16
                | MetadataType::Int32
                | MetadataType::Int64
        )
    }
}

impl Default for MetadataType {
    fn default() -> Self { Self::DEFAULT_ENUM_VALUE_TYPE }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for MetadataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s).ok_or_else(|| {
            Error::invalid_argument(
                "options.enum.valueType",
                format!("unrecognized value type {:?}", s),
            )
        })
    }
}
