/*
 * Copyright (c) 2023, Tobias Müller <git@tsmr.eu>
 *
 */

use anothersha::{sha256, to_hex};
use std::{env, fs, process};

fn main() {
    anothersha::log::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            println!("usage: hash_file <path>");
            process::exit(1);
        }
    };

    let contents = match fs::read(&path) {
        Ok(contents) => contents,
        Err(e) => {
            println!("Error reading {path}: {e:?}");
            process::exit(1);
        }
    };

    let digest = match sha256(&contents) {
        Ok(digest) => digest,
        Err(e) => {
            println!("Error hashing {path}: {e:?}");
            process::exit(1);
        }
    };

    println!("{}  {path}", to_hex(&digest));
}
