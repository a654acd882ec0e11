/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod sha256;

pub use sha256::sha256;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum HashError {
    // message bit-length does not fit the 64 bit length field
    InputTooLarge,
}
