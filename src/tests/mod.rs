// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

pub(crate) mod spec;
pub(crate) mod write;
