// Library for tests to access modules

pub mod blob;
pub mod config;
pub mod decode;
pub mod models;
pub mod validate;
pub mod version;
