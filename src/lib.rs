//! Metadata enums: named sets of integer constants for 3D model metadata.
//!
//! Feature metadata in 3D tiles and glTF schemas can classify a feature as
//! one of several categorical states, e.g. a building's construction stage
//! or a road's surface type. Those states are stored as integers and named by
//! an enum definition in the schema. This crate parses one such definition
//! into an immutable [`MetadataEnum`] with precomputed lookups in both
//! directions.
//!
//! # Basic Usage
//!
//! ```rust
//! use metadata_enum::{MetadataEnum, MetadataType};
//! use serde_json::json;
//!
//! let surface = MetadataEnum::from_options(&json!({
//!     "id": "surface",
//!     "enum": {
//!         "name": "Surface",
//!         "valueType": "UINT8",
//!         "values": [
//!             {"name": "ASPHALT", "value": 0},
//!             {"name": "GRAVEL", "value": 1},
//!             {"name": "DIRT", "value": 2}
//!         ]
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(surface.name(), Some("Surface"));
//! assert_eq!(surface.value_type(), MetadataType::Uint8);
//! assert_eq!(surface.name_for_value(1), Some("GRAVEL"));
//! assert_eq!(surface.value_for_name("DIRT"), Some(2));
//! ```
//!
//! ## Value Types
//!
//! The `valueType` tag must be one of `INT8`, `UINT8`, `INT16`, `UINT16`,
//! `INT32`, `UINT32`, `INT64` or `UINT64`. Anything else, including a missing
//! tag, resolves to `UINT16`.
//!
//! ## Duplicates
//!
//! Duplicate names or values are accepted. The later entry wins in the
//! lookup maps while [`MetadataEnum::values`] keeps every entry in order.

mod error;
pub use error::{Error, Result};

mod metadata_type;
pub use metadata_type::MetadataType;

mod metadata_enum_value;
pub use metadata_enum_value::MetadataEnumValue;

mod metadata_enum;
pub use metadata_enum::MetadataEnum;
