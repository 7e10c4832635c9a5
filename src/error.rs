// Copyright (C) 2022 Nitrokey GmbH
// SPDX-License-Identifier: LGPL-3.0-only

use iso7816::Status;

/// Failures produced by the applet.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// The instruction byte does not select any handler.
    UnsupportedInstruction,
    /// The registration record passed at install time is truncated or its
    /// identifier does not fit the AID buffer.
    BadInstallRecord,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let to_write = match self {
            Error::UnsupportedInstruction => "Instruction code not supported",
            Error::BadInstallRecord => "Malformed registration record",
        };
        f.write_str(to_write)
    }
}

impl From<Error> for Status {
    fn from(error: Error) -> Status {
        match error {
            Error::UnsupportedInstruction => Status::InstructionNotSupportedOrInvalid,
            Error::BadInstallRecord => Status::WrongLength,
        }
    }
}
