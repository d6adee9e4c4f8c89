//! Buffered audit emission.

pub mod sink;

pub use sink::ChannelAuditSink;
