// Copyright (C) 2022 Nitrokey GmbH
// SPDX-License-Identifier: CC0-1.0

use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct Input {
    pub commands: Vec<Vec<u8>>,
    pub install_record: Vec<u8>,
    pub install_offset: usize,
}
