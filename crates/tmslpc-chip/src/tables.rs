//! Quantization tables for the TMS5110 and TMS5220.
//!
//! Each table maps a bit-encoded symbol (the index) to the physical value the
//! chip uses for it. Reflection coefficients are 10-bit signed values scaled
//! by 512.

/// Energy table shared by both chips. Code 0 is silence and code 15 is the
/// stop sentinel, so both map to zero amplitude.
pub const ENERGY: [i32; 16] = [0, 1, 2, 3, 4, 6, 8, 11, 16, 23, 33, 47, 63, 85, 114, 0];

/// TMS5110 pitch periods (5-bit code).
pub const TMS5110_PITCH: [i32; 32] = [
    0, 15, 16, 17, 19, 21, 22, 25, //
    26, 29, 32, 36, 40, 42, 46, 50, //
    55, 60, 64, 68, 72, 76, 80, 84, //
    86, 93, 101, 110, 120, 132, 144, 159,
];

/// TMS5220 pitch periods (6-bit code).
pub const TMS5220_PITCH: [i32; 64] = [
    0, 15, 16, 17, 18, 19, 20, 21, //
    22, 23, 24, 25, 26, 27, 28, 29, //
    30, 31, 32, 33, 34, 35, 36, 37, //
    38, 39, 40, 41, 42, 44, 46, 48, //
    50, 52, 53, 56, 58, 60, 62, 65, //
    68, 70, 72, 76, 78, 80, 84, 86, //
    91, 94, 98, 101, 105, 109, 114, 118, //
    122, 127, 132, 137, 142, 148, 153, 159,
];

pub const K1: [i32; 32] = [
    -501, -498, -497, -495, -493, -491, -488, -482, //
    -478, -474, -469, -464, -459, -452, -445, -437, //
    -412, -380, -339, -288, -227, -158, -81, -1, //
    80, 157, 226, 287, 337, 379, 411, 436,
];

pub const K2: [i32; 32] = [
    -328, -303, -274, -244, -211, -175, -138, -99, //
    -59, -18, 24, 64, 105, 143, 180, 215, //
    248, 278, 306, 331, 354, 374, 392, 408, //
    422, 435, 445, 455, 463, 470, 476, 506,
];

pub const K3: [i32; 16] = [
    -441, -387, -333, -279, -225, -171, -117, -63, //
    -9, 45, 98, 152, 206, 260, 314, 368,
];

pub const K4: [i32; 16] = [
    -328, -273, -217, -161, -106, -50, 5, 61, //
    116, 172, 228, 283, 339, 394, 450, 506,
];

pub const K5: [i32; 16] = [
    -328, -282, -235, -189, -142, -96, -50, -3, //
    43, 90, 136, 182, 229, 275, 322, 368,
];

pub const K6: [i32; 16] = [
    -256, -212, -168, -123, -79, -35, 10, 54, //
    98, 143, 187, 232, 276, 320, 365, 409,
];

pub const K7: [i32; 16] = [
    -308, -260, -212, -164, -117, -69, -21, 27, //
    75, 122, 170, 218, 266, 314, 361, 409,
];

pub const K8: [i32; 8] = [-256, -161, -66, 29, 124, 219, 314, 409];

pub const K9: [i32; 8] = [-256, -176, -96, -15, 65, 146, 226, 307];

pub const K10: [i32; 8] = [-205, -132, -59, 14, 87, 160, 234, 307];

/// Reflection coefficient tables in slot order (k1 first).
pub const K_TABLES: [&[i32]; 10] = [&K1, &K2, &K3, &K4, &K5, &K6, &K7, &K8, &K9, &K10];

/// Bit width of each reflection coefficient field, k1 first.
pub const K_BITS: [u32; 10] = [5, 5, 4, 4, 4, 4, 4, 3, 3, 3];
