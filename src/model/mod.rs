//! Wire types: the JSON mappings returned by the API and the form payloads it accepts.
//!
//! Every DTO carries scalar columns only. Foreign keys appear as plain ids and no DTO
//! embeds a related entity, so serialization never follows the Game/User to Review
//! back-references.

pub mod api;
pub mod game;
pub mod review;
pub mod user;
