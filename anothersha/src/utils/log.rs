/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use std::env;

#[derive(PartialEq, PartialOrd, Clone, Debug)]
pub enum LogLevel {
    None = 0,
    Error = 1,
    Debug = 2,
}

pub static mut LOG_LEVEL: LogLevel = LogLevel::None;

pub fn check_log_level(level: LogLevel) -> bool {
    unsafe { LOG_LEVEL >= level }
}

pub fn init() {
    if let Ok(value) = env::var("RUST_LOG") {
        match value.to_lowercase().as_str() {
            "debug" => unsafe { LOG_LEVEL = LogLevel::Debug },
            "error" => unsafe { LOG_LEVEL = LogLevel::Error },
            _ => (),
        }
    }
}

macro_rules! debug {
    ($($x: expr),*) => {{
        $(
            if crate::utils::log::check_log_level(crate::utils::log::LogLevel::Debug) {
                print!("\x1b[33;2m* ");
                println!($x);
                print!("\x1b[0m");
            }
        )*
    }}
}
pub(crate) use debug;

macro_rules! error {
    ($($x: expr),*) => {{
        $(
            if crate::utils::log::check_log_level(crate::utils::log::LogLevel::Error) {
                print!("\x1b[31;1m* ");
                println!($x);
                print!("\x1b[0m");
            }
        )*
    }}
}
pub(crate) use error;
