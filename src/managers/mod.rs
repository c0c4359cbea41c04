// sessionfiddle managers
// Managers build in-memory models out of the raw session document.

pub mod tab_grouper;
