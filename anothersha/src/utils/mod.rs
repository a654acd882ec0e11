/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

pub mod bytes;

#[macro_use]
pub mod log;
