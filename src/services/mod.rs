//! Background services used by the HTTP routes.

pub mod revalidate;
