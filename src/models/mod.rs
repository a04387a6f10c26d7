//! Shared types used across all modules.
//!
//! Defines the user shapes returned by the upstream API. Other modules
//! import from here rather than reaching into each other's internals.

pub mod user;

pub use user::{
    DatedAge, Envelope, FullName, Location, Login, NationalId, Picture, Postcode, ShortName,
    Street, Thumbnail, UserRecord, UserSummary, UserView,
};
