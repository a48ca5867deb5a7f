pub mod article;
pub mod cache;
pub mod checker;
pub mod config;
pub mod consts;
pub mod resolver;
