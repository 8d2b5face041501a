#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod anchor;
mod config;
mod effects;
mod frame;
mod nav;
mod reveal;
mod subscribe;
mod theme;
mod toast;

#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod logger;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
