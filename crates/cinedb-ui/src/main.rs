#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! CineDB UI wasm entry point.
//!
//! Native builds only report which catalog the wasm bundle would talk to.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    cinedb_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn native_notice(collection_url: &str) -> String {
    format!(
        "cinedb-ui runs in the browser; build it with `trunk build`.\n\
         movie catalog: {collection_url} (override with CINEDB_API_URL at build time)\n"
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use cinedb_ui::core::config::resolve_collection_url;
    use std::io::{self, Write};

    let collection_url = resolve_collection_url(option_env!("CINEDB_API_URL"));
    io::stderr()
        .lock()
        .write_all(native_notice(&collection_url).as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn notice_names_the_catalog_url() {
        let notice = native_notice("http://localhost:3000/peliculas");
        assert!(notice.contains("movie catalog: http://localhost:3000/peliculas"));
        assert!(notice.contains("CINEDB_API_URL"));
    }

    #[test]
    fn native_main_writes_notice() -> std::io::Result<()> {
        main()
    }
}
