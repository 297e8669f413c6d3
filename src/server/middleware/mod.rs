//! Request authentication: bearer token extraction and role checks.

pub mod auth;

#[cfg(test)]
mod test;
