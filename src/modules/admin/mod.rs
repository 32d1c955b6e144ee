//! Server-rendered admin panel. Pure incoming adapter: every read and write
//! goes through the record modules' use cases.

pub mod adapter;
