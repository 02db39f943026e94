//! Infrastructure layer - store access, logging and service implementations

pub mod logging;
pub mod message;
pub mod project;
pub mod storage;
