#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod config;
mod effects;
mod error;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project runs in the browser. Build it with `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
