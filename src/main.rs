//! Browser entry point (`trunk serve --features csr`).

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
    leptos::mount::mount_to_body(localchat::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("localchat runs in the browser: build with `--features csr` (e.g. `trunk serve --features csr`)");
}
