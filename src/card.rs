// Copyright (C) 2022 Nitrokey GmbH
// SPDX-License-Identifier: LGPL-3.0-only

use hex_literal::hex;
use iso7816::Status;
use log::{debug, info, trace, warn};

use crate::command::Command;
use crate::error::Error;

/// Proprietary RID under which the benchmark applets are registered.
pub const RID: [u8; 5] = hex!("F0 4A 43 4D 00");
/// PIX of the no-op applet.
pub const PIX_APPLICATION: [u8; 1] = [0x01];

/// No-op benchmark applet.
///
/// This is the main entry point for this crate.  It takes care of the command
/// handling; there is no state to manage, as every command is independent.
#[derive(Clone, Debug)]
pub struct Card {
    options: Options,
}

impl Card {
    /// Creates a new applet with the given options.
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Handles an APDU command.
    ///
    /// The APDU command must be complete, i. e. chained commands must be resolved
    /// by the caller.  None of the commands produce response data, so `reply` is
    /// left untouched; errors are reported through the returned [`Status`].
    pub fn handle<const C: usize, const R: usize>(
        &mut self,
        command: &iso7816::Command<C>,
        _reply: &mut heapless::Vec<u8, R>,
    ) -> Result<(), Status> {
        trace!("Received APDU {:?}", command);
        let card_command = Command::try_from(command).map_err(|err| {
            warn!("Failed to parse command: {command:x?} {err:?}");
            err
        })?;
        info!("Executing command {:x?}", card_command);
        card_command.exec()
    }

    /// Resets the applet.
    ///
    /// The applet keeps no state between commands, so this only exists for the
    /// host surfaces that expect a reset hook (deselection, card power-off).
    pub fn reset(&mut self) {
        debug!("Reset");
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl iso7816::App for Card {
    fn aid(&self) -> iso7816::Aid {
        iso7816::Aid::new_truncatable(&self.options.aid, RID.len())
    }
}

#[cfg(feature = "apdu-dispatch")]
impl<const C: usize, const R: usize> apdu_dispatch::App<C, R> for Card {
    fn select(
        &mut self,
        interface: apdu_dispatch::dispatch::Interface,
        command: &iso7816::Command<C>,
        reply: &mut heapless::Vec<u8, R>,
    ) -> Result<(), Status> {
        use apdu_dispatch::dispatch::Interface;
        if interface != Interface::Contact {
            return Err(Status::ConditionsOfUseNotSatisfied);
        }
        self.handle(command, reply)
    }

    fn call(
        &mut self,
        interface: apdu_dispatch::dispatch::Interface,
        command: &iso7816::Command<C>,
        reply: &mut heapless::Vec<u8, R>,
    ) -> Result<(), Status> {
        use apdu_dispatch::dispatch::Interface;
        if interface != Interface::Contact {
            return Err(Status::ConditionsOfUseNotSatisfied);
        }
        self.handle(command, reply)
    }

    fn deselect(&mut self) {
        self.reset()
    }
}

/// Options for the no-op applet.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Options {
    /// The instance AID the applet was registered under.
    pub aid: heapless::Vec<u8, 16>,
}

impl Options {
    /// Parses the registration record passed by the host at install time.
    ///
    /// The identifier at `offset` starts with a length prefix, so the instance
    /// AID occupies `record[offset]` bytes starting at `offset + 1`.  The
    /// offset-by-one convention is part of the host ABI and must not change.
    pub fn from_install_record(record: &[u8], offset: usize) -> Result<Self, Error> {
        let len = usize::from(*record.get(offset).ok_or(Error::BadInstallRecord)?);
        let id = record
            .get(offset + 1..offset + 1 + len)
            .ok_or(Error::BadInstallRecord)?;
        let aid = heapless::Vec::from_slice(id).map_err(|_| Error::BadInstallRecord)?;
        Ok(Self { aid })
    }
}

/// Returns an instance with the default applet AID
impl Default for Options {
    fn default() -> Self {
        #[allow(clippy::unwrap_used)]
        Self {
            aid: heapless::Vec::from_slice(&hex!("F0 4A 43 4D 00 01")).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Testing the concatenation of arrays used in the default AID
    #[test]
    fn aid() {
        assert_eq!(Options::default().aid, hex!("F0 4A 43 4D 00 01"));
        assert_eq!(Options::default().aid[..RID.len()], RID);
    }

    #[test]
    fn install_record() {
        // one byte of padding, then a length-prefixed AID, then install options
        let record = hex!("2A 06 F0 4A 43 4D 00 02 00");
        #[allow(clippy::unwrap_used)]
        let options = Options::from_install_record(&record, 1).unwrap();
        assert_eq!(options.aid, hex!("F0 4A 43 4D 00 02"));
    }

    #[test]
    fn install_record_truncated() {
        assert_eq!(
            Options::from_install_record(&[], 0).unwrap_err(),
            Error::BadInstallRecord
        );
        // length prefix points past the end of the record
        assert_eq!(
            Options::from_install_record(&hex!("05 F0 4A"), 0).unwrap_err(),
            Error::BadInstallRecord
        );
        // identifier longer than the AID buffer
        let mut record = vec![17];
        record.extend_from_slice(&[0; 17]);
        assert_eq!(
            Options::from_install_record(&record, 0).unwrap_err(),
            Error::BadInstallRecord
        );
    }
}
