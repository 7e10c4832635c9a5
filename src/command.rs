// Copyright (C) 2022 Nitrokey GmbH
// SPDX-License-Identifier: LGPL-3.0-only

use iso7816::Status;
use log::{info, trace};

use crate::error::Error;

/// Instruction byte of the empty benchmark command.
pub const INS_RUN_EMPTY: u8 = 0x01;
/// Instruction byte of the test benchmark command.
pub const INS_RUN_TEST: u8 = 0x02;
/// Instruction byte of SELECT.
pub const INS_SELECT: u8 = 0xA4;

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum Command {
    Select,
    RunEmpty(u16),
    RunTest(u16),
}

impl Command {
    pub fn exec(&self) -> Result<(), Status> {
        match self {
            Self::Select => select(),
            Self::RunEmpty(rounds) => run_empty(*rounds),
            Self::RunTest(rounds) => run_test(*rounds),
        }
    }
}

impl<const C: usize> TryFrom<&iso7816::Command<C>> for Command {
    type Error = Status;

    fn try_from(command: &iso7816::Command<C>) -> Result<Self, Self::Error> {
        match u8::from(command.instruction()) {
            // The selection event must always succeed as a no-op, so P1 and P2
            // are deliberately not validated here.
            INS_SELECT => Ok(Self::Select),
            INS_RUN_EMPTY => Ok(Self::RunEmpty(round_count(command))),
            INS_RUN_TEST => Ok(Self::RunTest(round_count(command))),
            _ => Err(Error::UnsupportedInstruction.into()),
        }
    }
}

/// Round count carried big-endian in P1‖P2.
fn round_count<const C: usize>(command: &iso7816::Command<C>) -> u16 {
    u16::from_be_bytes([command.p1, command.p2])
}

fn select() -> Result<(), Status> {
    trace!("Selected");
    Ok(())
}

fn run_empty(rounds: u16) -> Result<(), Status> {
    let executed = run_rounds(rounds);
    info!("RUN EMPTY finished after {executed} rounds");
    Ok(())
}

fn run_test(rounds: u16) -> Result<(), Status> {
    let executed = run_rounds(rounds);
    info!("RUN TEST finished after {executed} rounds");
    Ok(())
}

/// Spins for exactly `rounds` iterations and returns how many were executed.
///
/// The burned CPU time is the whole point of this applet, so the counter is
/// routed through `black_box` to keep the optimizer from collapsing the loop.
fn run_rounds(rounds: u16) -> u16 {
    let mut executed: u16 = 0;
    for _ in 0..rounds {
        executed = core::hint::black_box(executed + 1);
    }
    executed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(apdu: &[u8]) -> Result<Command, Status> {
        #[allow(clippy::unwrap_used)]
        let command = iso7816::Command::<128>::try_from(apdu).unwrap();
        Command::try_from(&command)
    }

    #[test]
    fn round_count_is_big_endian() {
        assert_eq!(parse(&[0x00, 0x01, 0x01, 0x00]), Ok(Command::RunEmpty(256)));
        assert_eq!(parse(&[0x00, 0x01, 0x00, 0xFF]), Ok(Command::RunEmpty(255)));
        assert_eq!(
            parse(&[0x00, 0x02, 0xFF, 0xFF]),
            Ok(Command::RunTest(0xFFFF))
        );
    }

    #[test]
    fn select_ignores_parameters() {
        assert_eq!(parse(&[0x00, 0xA4, 0x04, 0x00]), Ok(Command::Select));
        assert_eq!(parse(&[0x00, 0xA4, 0x5A, 0xA5]), Ok(Command::Select));
    }

    #[test]
    fn unknown_instruction_is_rejected() {
        for ins in [0x00, 0x03, 0x7F, 0xCA, 0xFF] {
            assert_eq!(
                parse(&[0x00, ins, 0x00, 0x00]),
                Err(Status::InstructionNotSupportedOrInvalid),
                "INS {ins:#04x}"
            );
        }
    }

    #[test]
    fn rounds_run_to_completion() {
        assert_eq!(run_rounds(0), 0);
        assert_eq!(run_rounds(1), 1);
        assert_eq!(run_rounds(5), 5);
        assert_eq!(run_rounds(256), 256);
        assert_eq!(run_rounds(u16::MAX), u16::MAX);
    }
}
