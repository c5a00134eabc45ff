mod common;
mod edit;
mod get;
mod usage;
