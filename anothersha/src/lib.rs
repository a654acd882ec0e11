/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub(crate) mod hash;
pub(crate) mod utils;

pub use hash::sha256::sha256;
pub use hash::sha256::Digest;
pub use hash::HashError;
pub use utils::bytes::from_hex;
pub use utils::bytes::to_hex;
pub use utils::log;
