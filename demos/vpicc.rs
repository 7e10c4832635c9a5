// Copyright (C) 2022 Nitrokey GmbH
// SPDX-License-Identifier: CC0-1.0

// To use this, make sure that you have vpcd from vsmartcard installed and configured (e. g.
// install vsmartcard-vpcd on Debian).  You might have to restart your pcscd, e. g.
// `systemctl restart pcscd pcscd.socket`.
//
// Now you should be able to see the card in `pcsc_scan` and drive it with any APDU tool,
// e. g. select the applet with `00 A4 04 00 06 F0 4A 43 4D 00 01` and then send
// `00 01 13 88` to burn 5000 no-op rounds.
//
// Set `RUST_LOG=nopcard::card=info` to see the executed commands.

fn main() {
    env_logger::init();

    let card = nopcard::Card::new(nopcard::Options::default());
    let mut vpicc_card = nopcard::VirtualCard::new(card);
    let vpicc = vpicc::connect().expect("failed to connect to vpicc");
    vpicc
        .run(&mut vpicc_card)
        .expect("failed to run vpicc smartcard");
}
