/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod block;
pub mod client;
pub mod enrich;
pub mod errors;
pub mod filter;
pub mod format;
pub mod json;
pub mod label;
pub mod project;
pub mod ranges;
