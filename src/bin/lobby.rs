//! Lobby Client Binary
//!
//! Mounts the client-side rendered lobby view. Built for the browser
//! with the `client` feature.

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(holdem_lobby::client::App);
}
