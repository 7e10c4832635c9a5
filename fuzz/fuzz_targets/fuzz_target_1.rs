// Copyright (C) 2022 Nitrokey GmbH
// SPDX-License-Identifier: CC0-1.0

#![no_main]
use libfuzzer_sys::fuzz_target;
use nopcard_fuzz::Input;

fuzz_target!(|input: Input| {
    let Input {
        commands,
        install_record,
        install_offset,
    } = input;

    let options = nopcard::Options::from_install_record(&install_record, install_offset)
        .unwrap_or_default();
    let mut card = nopcard::Card::new(options);
    let mut reply = heapless::Vec::<u8, 1024>::new();

    for data in commands {
        if let Ok(command) = iso7816::Command::<{ 10 * 1024 }>::try_from(&data) {
            reply.clear();
            card.handle(&command, &mut reply).ok();
        }
    }
});
