//! File: cli/src/commands/serve/utils.rs
//!
//! Startup diagnostics for `folio serve`.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::path::Path;
use tracing::{debug, info, warn};

/// Logs what is about to be served. Warns when the index file is missing,
/// since the SPA fallback would then answer every miss with 404.
pub fn log_site_summary(directory: &Path, index_file: &str) {
    match std::fs::read_dir(directory) {
        Ok(entries) => {
            let mut files = 0usize;
            let mut dirs = 0usize;
            for entry in entries.filter_map(Result::ok) {
                match entry.file_type() {
                    Ok(kind) if kind.is_dir() => dirs += 1,
                    Ok(_) => files += 1,
                    Err(e) => warn!("Could not stat {}: {}", entry.path().display(), e),
                }
            }
            info!(
                "{} contains {} files and {} directories",
                directory.display(),
                files,
                dirs
            );
            if files == 0 && dirs == 0 {
                warn!("{} is empty; did the site build run?", directory.display());
            }
        }
        Err(e) => warn!("Could not list {}: {}", directory.display(), e),
    }

    if !directory.join(index_file).is_file() {
        warn!(
            "Index file '{}' not found in {}",
            index_file,
            directory.display()
        );
    }
}

/// Best-effort LAN address of this machine. Connecting a UDP socket sends
/// nothing; it only selects the outbound interface.
pub fn get_local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
    socket.connect((Ipv4Addr::new(192, 0, 2, 1), 9)).ok()?;
    let ip = socket.local_addr().ok()?.ip();
    if ip.is_loopback() || ip.is_unspecified() {
        debug!("No LAN address detected");
        None
    } else {
        Some(ip)
    }
}
