// Copyright (C) 2022 Nitrokey GmbH
// SPDX-License-Identifier: LGPL-3.0-only

//! This crate implements a minimal benchmarking applet for smart card readers and
//! card operating systems.  The applet does no useful work on purpose: every
//! supported command runs an empty loop for a caller-controlled number of rounds,
//! so that a host-side driver can measure the fixed per-command overhead of the
//! transport and dispatch path in isolation.
//!
//! # APDU interface
//!
//! The applet understands three commands:
//!
//! - `SELECT` (INS `0xA4`): acknowledged as a successful no-op.
//! - `RUN EMPTY` (INS `0x01`): runs the no-op loop.
//! - `RUN TEST` (INS `0x02`): runs the same no-op loop under a second
//!   instruction code, so hosts can compare two nominally distinct commands.
//!
//! For the two run commands, `P1‖P2` is a big-endian 16-bit round count; the
//! handler loops exactly that many times and produces no response data.  Any
//! other instruction is answered with SW `0x6D00` (instruction not supported).
//!
//! # Command handling
//!
//! The [`Card`] struct is the main entry point for this crate.  It can be
//! configured using [`Options`].  Its [`Card::handle`] method expects a full APDU
//! command and returns the resulting status.
//!
//! # APDU dispatch
//!
//! The APDU dispatch has to be implemented by the user of this crate.  There are
//! some mechanisms that make this easier:
//!
//! - If the `apdu-dispatch` feature is enabled, [`Card`] implements the
//!   `apdu_dispatch::App` trait and can be used with `apdu_dispatch`.
//! - If the `vpicc` feature is enabled, [`VirtualCard`] can be used to emulate
//!   the applet using [`vsmartcard`](https://frankmorgner.github.io/vsmartcard/)
//!   and `vpicc-rs`.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_ascii_idents,
    trivial_casts,
    unused,
    unused_qualifications,
    clippy::expect_used,
    clippy::unwrap_used
)]
#![deny(unsafe_code)]

mod card;
mod command;
mod error;
#[cfg(feature = "vpicc")]
mod vpicc;

#[cfg(feature = "vpicc")]
pub use self::vpicc::VirtualCard;
pub use card::{Card, Options};
pub use error::Error;
