//! macros.rs
//! Leveled diagnostics routed to `tracing`
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

/// `debug!(warn, "...")` style logging. The first token picks the level.
#[macro_export]
macro_rules! debug {
    (trace, $($arg:tt)+) => {
        ::tracing::trace!($($arg)+)
    };
    (debug, $($arg:tt)+) => {
        ::tracing::debug!($($arg)+)
    };
    (info, $($arg:tt)+) => {
        ::tracing::info!($($arg)+)
    };
    (warn, $($arg:tt)+) => {
        ::tracing::warn!($($arg)+)
    };
    (err, $($arg:tt)+) => {
        ::tracing::error!($($arg)+)
    };
}
