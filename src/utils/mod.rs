/// Path rendering for manifest entries.
pub mod paths;
