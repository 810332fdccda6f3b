// Copyright (c) 2025 flatzip contributors
// MIT License (https://github.com/flatzip-rs/flatzip/blob/main/LICENSE)

// Local file header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.7)
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.12)
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.16)
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

// Limits past which an archive would need ZIP64 structures, which this crate never writes.
pub const NON_ZIP64_MAX_SIZE: u32 = u32::MAX;
pub const NON_ZIP64_MAX_NUM_FILES: u16 = u16::MAX;

// Unix permissions applied to entries which don't carry their own: rw-r--r--.
pub const DEFAULT_UNIX_PERMISSIONS: u16 = 0o644;
