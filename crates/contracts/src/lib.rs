//! Wire records shared between the catalog frontend and the REST backend.

pub mod domain;
pub mod system;
