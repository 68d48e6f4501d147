//! GRBL protocol: outbound command composition and inbound status decoding

pub mod command_creator;
pub mod status_parser;
