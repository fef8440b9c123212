//! Pure statement builders.
//!
//! Nothing here talks to a database or validates its input: an empty field
//! list produces SQL the server will reject, and that rejection is the error.

mod ident;
mod insert;
mod select;

pub use ident::quote_identifier;
pub use insert::{build_insert, build_upsert};
pub use select::build_select;

/// Comma-separated, quoted field list.
pub(crate) fn field_list(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| quote_identifier(field))
        .collect::<Vec<_>>()
        .join(", ")
}
