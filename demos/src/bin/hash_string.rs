/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use anothersha::{sha256, to_hex};
use std::env;

fn main() {
    anothersha::log::init();

    let message = env::args()
        .nth(1)
        .unwrap_or_else(|| "hello world".to_string());

    let digest = match sha256(message.as_bytes()) {
        Ok(digest) => digest,
        Err(e) => {
            println!("Error hashing message: {:?}", e);
            return;
        }
    };

    println!("SHA-256(\"{message}\") = {}", to_hex(&digest));
}
