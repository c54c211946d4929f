pub mod article;
pub mod config;
pub mod date;
pub mod grouping;
pub mod index;
pub mod merge;
pub mod paths;
pub mod slug;
pub mod translate;
