//! Current-carrying capacity (Iz) tables.
//!
//! Values are the IEC 60364-5-52 Annex B ampacities as published in the
//! Danish wiring rules: tables B.52.3/B.52.5 for XLPE (90 °C) and
//! B.52.2/B.52.4 for PVC (70 °C), copper and aluminium, reference methods
//! A1–D2, two and three loaded conductors. Transcribed data — do not edit
//! by hand.

use crate::types::{Insulation, Material};

/// The standard cross-section ladder in mm², ascending.
pub const STANDARD_SIZES: &[f64] = &[
    1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0,
    300.0, 400.0,
];

/// Reference methods carried by the ampacity and grouping tables.
pub const KNOWN_METHODS: &[&str] = &["A1", "A2", "B1", "B2", "C", "D1", "D2"];

/// Ampacity rows for one reference method: (size mm², Iz A) pairs for two
/// and three loaded conductors.
struct MethodRow {
    method: &'static str,
    two: &'static [(f64, f64)],
    three: &'static [(f64, f64)],
}

// Copper, XLPE insulation (tables B.52.3 / B.52.5).
const CU_XLPE: &[MethodRow] = &[
    MethodRow {
        method: "A1",
        two: &[
            (1.5, 19.0), (2.5, 26.0), (4.0, 35.0), (6.0, 45.0),
            (10.0, 61.0), (16.0, 81.0), (25.0, 106.0), (35.0, 131.0),
            (50.0, 158.0), (70.0, 200.0), (95.0, 241.0), (120.0, 278.0),
            (150.0, 318.0), (185.0, 362.0), (240.0, 424.0), (300.0, 486.0),
        ],
        three: &[
            (1.5, 17.0), (2.5, 23.0), (4.0, 31.0), (6.0, 40.0),
            (10.0, 54.0), (16.0, 73.0), (25.0, 95.0), (35.0, 117.0),
            (50.0, 141.0), (70.0, 179.0), (95.0, 216.0), (120.0, 249.0),
            (150.0, 285.0), (185.0, 324.0), (240.0, 380.0), (300.0, 435.0),
        ],
    },
    MethodRow {
        method: "A2",
        two: &[
            (1.5, 18.5), (2.5, 25.0), (4.0, 33.0), (6.0, 42.0),
            (10.0, 57.0), (16.0, 76.0), (25.0, 99.0), (35.0, 121.0),
            (50.0, 145.0), (70.0, 183.0), (95.0, 220.0), (120.0, 253.0),
            (150.0, 290.0), (185.0, 329.0), (240.0, 386.0), (300.0, 442.0),
        ],
        three: &[
            (1.5, 16.5), (2.5, 22.0), (4.0, 30.0), (6.0, 38.0),
            (10.0, 51.0), (16.0, 68.0), (25.0, 89.0), (35.0, 109.0),
            (50.0, 130.0), (70.0, 164.0), (95.0, 197.0), (120.0, 227.0),
            (150.0, 259.0), (185.0, 295.0), (240.0, 346.0), (300.0, 396.0),
        ],
    },
    MethodRow {
        method: "B1",
        two: &[
            (1.5, 23.0), (2.5, 31.0), (4.0, 42.0), (6.0, 54.0),
            (10.0, 75.0), (16.0, 100.0), (25.0, 133.0), (35.0, 164.0),
            (50.0, 198.0), (70.0, 253.0), (95.0, 306.0), (120.0, 354.0),
            (150.0, 393.0), (185.0, 449.0), (240.0, 528.0), (300.0, 603.0),
        ],
        three: &[
            (1.5, 20.0), (2.5, 28.0), (4.0, 37.0), (6.0, 48.0),
            (10.0, 66.0), (16.0, 88.0), (25.0, 117.0), (35.0, 144.0),
            (50.0, 175.0), (70.0, 222.0), (95.0, 269.0), (120.0, 312.0),
            (150.0, 342.0), (185.0, 384.0), (240.0, 450.0), (300.0, 514.0),
        ],
    },
    MethodRow {
        method: "B2",
        two: &[
            (1.5, 22.0), (2.5, 30.0), (4.0, 40.0), (6.0, 51.0),
            (10.0, 69.0), (16.0, 91.0), (25.0, 119.0), (35.0, 146.0),
            (50.0, 175.0), (70.0, 221.0), (95.0, 265.0), (120.0, 305.0),
            (150.0, 334.0), (185.0, 384.0), (240.0, 459.0), (300.0, 532.0),
        ],
        three: &[
            (1.5, 19.5), (2.5, 26.0), (4.0, 35.0), (6.0, 44.0),
            (10.0, 60.0), (16.0, 80.0), (25.0, 105.0), (35.0, 128.0),
            (50.0, 154.0), (70.0, 194.0), (95.0, 233.0), (120.0, 268.0),
            (150.0, 300.0), (185.0, 340.0), (240.0, 398.0), (300.0, 455.0),
        ],
    },
    MethodRow {
        method: "C",
        two: &[
            (1.5, 24.0), (2.5, 33.0), (4.0, 45.0), (6.0, 58.0),
            (10.0, 80.0), (16.0, 107.0), (25.0, 138.0), (35.0, 171.0),
            (50.0, 209.0), (70.0, 269.0), (95.0, 328.0), (120.0, 382.0),
            (150.0, 441.0), (185.0, 506.0), (240.0, 599.0), (300.0, 693.0),
        ],
        three: &[
            (1.5, 22.0), (2.5, 30.0), (4.0, 40.0), (6.0, 52.0),
            (10.0, 71.0), (16.0, 96.0), (25.0, 119.0), (35.0, 147.0),
            (50.0, 179.0), (70.0, 229.0), (95.0, 278.0), (120.0, 322.0),
            (150.0, 371.0), (185.0, 424.0), (240.0, 500.0), (300.0, 576.0),
        ],
    },
    MethodRow {
        method: "D1",
        two: &[
            (1.5, 25.0), (2.5, 33.0), (4.0, 43.0), (6.0, 53.0),
            (10.0, 71.0), (16.0, 91.0), (25.0, 116.0), (35.0, 139.0),
            (50.0, 164.0), (70.0, 203.0), (95.0, 239.0), (120.0, 271.0),
            (150.0, 306.0), (185.0, 343.0), (240.0, 395.0), (300.0, 446.0),
        ],
        three: &[
            (1.5, 21.0), (2.5, 28.0), (4.0, 36.0), (6.0, 44.0),
            (10.0, 58.0), (16.0, 75.0), (25.0, 96.0), (35.0, 115.0),
            (50.0, 135.0), (70.0, 157.0), (95.0, 197.0), (120.0, 223.0),
            (150.0, 251.0), (185.0, 281.0), (240.0, 324.0), (300.0, 365.0),
        ],
    },
    MethodRow {
        method: "D2",
        two: &[
            (1.5, 27.0), (2.5, 35.0), (4.0, 46.0), (6.0, 58.0),
            (10.0, 77.0), (16.0, 100.0), (25.0, 129.0), (35.0, 155.0),
            (50.0, 183.0), (70.0, 225.0), (95.0, 270.0), (120.0, 306.0),
            (150.0, 343.0), (185.0, 387.0), (240.0, 448.0), (300.0, 502.0),
        ],
        three: &[
            (1.5, 23.0), (2.5, 30.0), (4.0, 39.0), (6.0, 49.0),
            (10.0, 65.0), (16.0, 84.0), (25.0, 107.0), (35.0, 129.0),
            (50.0, 153.0), (70.0, 188.0), (95.0, 226.0), (120.0, 257.0),
            (150.0, 287.0), (185.0, 324.0), (240.0, 375.0), (300.0, 419.0),
        ],
    },
];

// Aluminium, XLPE insulation. D2 is only published from 16 mm² up.
const AL_XLPE: &[MethodRow] = &[
    MethodRow {
        method: "A1",
        two: &[
            (2.5, 20.0), (4.0, 27.0), (6.0, 35.0), (10.0, 48.0),
            (16.0, 64.0), (25.0, 84.0), (35.0, 103.0), (50.0, 125.0),
            (70.0, 158.0), (95.0, 191.0), (120.0, 220.0), (150.0, 253.0),
            (185.0, 288.0), (240.0, 338.0), (300.0, 387.0),
        ],
        three: &[
            (2.5, 19.0), (4.0, 25.0), (6.0, 32.0), (10.0, 44.0),
            (16.0, 58.0), (25.0, 76.0), (35.0, 94.0), (50.0, 113.0),
            (70.0, 142.0), (95.0, 171.0), (120.0, 197.0), (150.0, 226.0),
            (185.0, 256.0), (240.0, 300.0), (300.0, 344.0),
        ],
    },
    MethodRow {
        method: "A2",
        two: &[
            (2.5, 19.5), (4.0, 26.0), (6.0, 33.0), (10.0, 45.0),
            (16.0, 60.0), (25.0, 78.0), (35.0, 96.0), (50.0, 115.0),
            (70.0, 145.0), (95.0, 175.0), (120.0, 201.0), (150.0, 230.0),
            (185.0, 262.0), (240.0, 307.0), (300.0, 352.0),
        ],
        three: &[
            (2.5, 18.0), (4.0, 24.0), (6.0, 31.0), (10.0, 41.0),
            (16.0, 55.0), (25.0, 71.0), (35.0, 87.0), (50.0, 104.0),
            (70.0, 131.0), (95.0, 157.0), (120.0, 180.0), (150.0, 206.0),
            (185.0, 233.0), (240.0, 273.0), (300.0, 313.0),
        ],
    },
    MethodRow {
        method: "B1",
        two: &[
            (2.5, 25.0), (4.0, 33.0), (6.0, 43.0), (10.0, 59.0),
            (16.0, 79.0), (25.0, 105.0), (35.0, 130.0), (50.0, 157.0),
            (70.0, 200.0), (95.0, 242.0), (120.0, 281.0), (150.0, 307.0),
            (185.0, 351.0), (240.0, 412.0), (300.0, 471.0),
        ],
        three: &[
            (2.5, 22.0), (4.0, 29.0), (6.0, 38.0), (10.0, 52.0),
            (16.0, 71.0), (25.0, 93.0), (35.0, 116.0), (50.0, 140.0),
            (70.0, 179.0), (95.0, 217.0), (120.0, 251.0), (150.0, 267.0),
            (185.0, 300.0), (240.0, 351.0), (300.0, 402.0),
        ],
    },
    MethodRow {
        method: "B2",
        two: &[
            (2.5, 23.0), (4.0, 31.0), (6.0, 40.0), (10.0, 54.0),
            (16.0, 72.0), (25.0, 94.0), (35.0, 115.0), (50.0, 138.0),
            (70.0, 175.0), (95.0, 210.0), (120.0, 242.0), (150.0, 261.0),
            (185.0, 300.0), (240.0, 358.0), (300.0, 415.0),
        ],
        three: &[
            (2.5, 21.0), (4.0, 28.0), (6.0, 35.0), (10.0, 48.0),
            (16.0, 64.0), (25.0, 84.0), (35.0, 103.0), (50.0, 124.0),
            (70.0, 156.0), (95.0, 188.0), (120.0, 216.0), (150.0, 240.0),
            (185.0, 272.0), (240.0, 318.0), (300.0, 364.0),
        ],
    },
    MethodRow {
        method: "C",
        two: &[
            (2.5, 26.0), (4.0, 35.0), (6.0, 45.0), (10.0, 62.0),
            (16.0, 84.0), (25.0, 101.0), (35.0, 126.0), (50.0, 154.0),
            (70.0, 198.0), (95.0, 241.0), (120.0, 280.0), (150.0, 324.0),
            (185.0, 371.0), (240.0, 439.0), (300.0, 508.0),
        ],
        three: &[
            (2.5, 24.0), (4.0, 32.0), (6.0, 41.0), (10.0, 57.0),
            (16.0, 76.0), (25.0, 90.0), (35.0, 112.0), (50.0, 136.0),
            (70.0, 174.0), (95.0, 211.0), (120.0, 245.0), (150.0, 283.0),
            (185.0, 323.0), (240.0, 382.0), (300.0, 440.0),
        ],
    },
    MethodRow {
        method: "D1",
        two: &[
            (2.5, 26.0), (4.0, 33.0), (6.0, 42.0), (10.0, 55.0),
            (16.0, 71.0), (25.0, 90.0), (35.0, 108.0), (50.0, 128.0),
            (70.0, 158.0), (95.0, 186.0), (120.0, 211.0), (150.0, 238.0),
            (185.0, 267.0), (240.0, 307.0), (300.0, 346.0),
        ],
        three: &[
            (2.5, 22.0), (4.0, 28.0), (6.0, 35.0), (10.0, 46.0),
            (16.0, 59.0), (25.0, 75.0), (35.0, 90.0), (50.0, 106.0),
            (70.0, 130.0), (95.0, 154.0), (120.0, 174.0), (150.0, 197.0),
            (185.0, 220.0), (240.0, 253.0), (300.0, 286.0),
        ],
    },
    MethodRow {
        method: "D2",
        two: &[
            (16.0, 76.0), (25.0, 98.0), (35.0, 117.0), (50.0, 139.0),
            (70.0, 170.0), (95.0, 204.0), (120.0, 233.0), (150.0, 261.0),
            (185.0, 296.0), (240.0, 343.0), (300.0, 386.0),
        ],
        three: &[
            (16.0, 64.0), (25.0, 82.0), (35.0, 98.0), (50.0, 117.0),
            (70.0, 144.0), (95.0, 172.0), (120.0, 197.0), (150.0, 220.0),
            (185.0, 250.0), (240.0, 290.0), (300.0, 326.0),
        ],
    },
];

// Copper, PVC insulation (tables B.52.2 / B.52.4).
const CU_PVC: &[MethodRow] = &[
    MethodRow {
        method: "A1",
        two: &[
            (1.5, 14.5), (2.5, 19.5), (4.0, 26.0), (6.0, 34.0),
            (10.0, 46.0), (16.0, 61.0), (25.0, 80.0), (35.0, 99.0),
            (50.0, 119.0), (70.0, 151.0), (95.0, 182.0), (120.0, 210.0),
            (150.0, 240.0), (185.0, 273.0), (240.0, 321.0), (300.0, 367.0),
        ],
        three: &[
            (1.5, 13.5), (2.5, 18.0), (4.0, 24.0), (6.0, 31.0),
            (10.0, 42.0), (16.0, 56.0), (25.0, 73.0), (35.0, 89.0),
            (50.0, 108.0), (70.0, 136.0), (95.0, 164.0), (120.0, 188.0),
            (150.0, 216.0), (185.0, 245.0), (240.0, 286.0), (300.0, 328.0),
        ],
    },
    MethodRow {
        method: "A2",
        two: &[
            (1.5, 14.0), (2.5, 18.5), (4.0, 25.0), (6.0, 32.0),
            (10.0, 43.0), (16.0, 57.0), (25.0, 75.0), (35.0, 92.0),
            (50.0, 110.0), (70.0, 139.0), (95.0, 167.0), (120.0, 192.0),
            (150.0, 219.0), (185.0, 248.0), (240.0, 291.0), (300.0, 334.0),
        ],
        three: &[
            (1.5, 13.0), (2.5, 17.5), (4.0, 23.0), (6.0, 29.0),
            (10.0, 39.0), (16.0, 52.0), (25.0, 68.0), (35.0, 83.0),
            (50.0, 99.0), (70.0, 125.0), (95.0, 150.0), (120.0, 172.0),
            (150.0, 196.0), (185.0, 223.0), (240.0, 261.0), (300.0, 298.0),
        ],
    },
    MethodRow {
        method: "B1",
        two: &[
            (1.5, 17.5), (2.5, 24.0), (4.0, 32.0), (6.0, 41.0),
            (10.0, 57.0), (16.0, 76.0), (25.0, 101.0), (35.0, 125.0),
            (50.0, 151.0), (70.0, 192.0), (95.0, 232.0), (120.0, 269.0),
            (150.0, 300.0), (185.0, 341.0), (240.0, 400.0), (300.0, 458.0),
        ],
        three: &[
            (1.5, 15.5), (2.5, 21.0), (4.0, 28.0), (6.0, 36.0),
            (10.0, 50.0), (16.0, 68.0), (25.0, 89.0), (35.0, 110.0),
            (50.0, 134.0), (70.0, 171.0), (95.0, 207.0), (120.0, 239.0),
            (150.0, 262.0), (185.0, 296.0), (240.0, 346.0), (300.0, 394.0),
        ],
    },
    MethodRow {
        method: "B2",
        two: &[
            (1.5, 16.5), (2.5, 23.0), (4.0, 30.0), (6.0, 38.0),
            (10.0, 52.0), (16.0, 69.0), (25.0, 90.0), (35.0, 111.0),
            (50.0, 133.0), (70.0, 168.0), (95.0, 201.0), (120.0, 232.0),
            (150.0, 258.0), (185.0, 294.0), (240.0, 344.0), (300.0, 394.0),
        ],
        three: &[
            (1.5, 15.0), (2.5, 20.0), (4.0, 27.0), (6.0, 34.0),
            (10.0, 46.0), (16.0, 62.0), (25.0, 80.0), (35.0, 99.0),
            (50.0, 118.0), (70.0, 149.0), (95.0, 179.0), (120.0, 206.0),
            (150.0, 225.0), (185.0, 255.0), (240.0, 297.0), (300.0, 339.0),
        ],
    },
    MethodRow {
        method: "C",
        two: &[
            (1.5, 19.5), (2.5, 27.0), (4.0, 36.0), (6.0, 46.0),
            (10.0, 63.0), (16.0, 85.0), (25.0, 112.0), (35.0, 138.0),
            (50.0, 168.0), (70.0, 213.0), (95.0, 258.0), (120.0, 299.0),
            (150.0, 344.0), (185.0, 392.0), (240.0, 461.0), (300.0, 530.0),
        ],
        three: &[
            (1.5, 17.5), (2.5, 24.0), (4.0, 32.0), (6.0, 41.0),
            (10.0, 57.0), (16.0, 76.0), (25.0, 96.0), (35.0, 119.0),
            (50.0, 144.0), (70.0, 184.0), (95.0, 223.0), (120.0, 259.0),
            (150.0, 299.0), (185.0, 341.0), (240.0, 403.0), (300.0, 464.0),
        ],
    },
    MethodRow {
        method: "D1",
        two: &[
            (1.5, 22.0), (2.5, 29.0), (4.0, 37.0), (6.0, 46.0),
            (10.0, 60.0), (16.0, 78.0), (25.0, 99.0), (35.0, 119.0),
            (50.0, 140.0), (70.0, 173.0), (95.0, 204.0), (120.0, 231.0),
            (150.0, 261.0), (185.0, 292.0), (240.0, 336.0), (300.0, 379.0),
        ],
        three: &[
            (1.5, 18.0), (2.5, 24.0), (4.0, 30.0), (6.0, 38.0),
            (10.0, 50.0), (16.0, 64.0), (25.0, 82.0), (35.0, 98.0),
            (50.0, 116.0), (70.0, 143.0), (95.0, 169.0), (120.0, 192.0),
            (150.0, 217.0), (185.0, 243.0), (240.0, 280.0), (300.0, 316.0),
        ],
    },
    MethodRow {
        method: "D2",
        two: &[
            (1.5, 22.0), (2.5, 28.0), (4.0, 38.0), (6.0, 48.0),
            (10.0, 64.0), (16.0, 83.0), (25.0, 110.0), (35.0, 132.0),
            (50.0, 156.0), (70.0, 192.0), (95.0, 230.0), (120.0, 261.0),
            (150.0, 293.0), (185.0, 331.0), (240.0, 382.0), (300.0, 427.0),
        ],
        three: &[
            (1.5, 19.0), (2.5, 24.0), (4.0, 33.0), (6.0, 41.0),
            (10.0, 54.0), (16.0, 70.0), (25.0, 92.0), (35.0, 110.0),
            (50.0, 130.0), (70.0, 162.0), (95.0, 193.0), (120.0, 220.0),
            (150.0, 246.0), (185.0, 278.0), (240.0, 320.0), (300.0, 359.0),
        ],
    },
];

// Aluminium, PVC insulation. D2 from 16 mm² up, as for XLPE.
const AL_PVC: &[MethodRow] = &[
    MethodRow {
        method: "A1",
        two: &[
            (2.5, 15.0), (4.0, 20.0), (6.0, 26.0), (10.0, 36.0),
            (16.0, 48.0), (25.0, 63.0), (35.0, 77.0), (50.0, 93.0),
            (70.0, 118.0), (95.0, 142.0), (120.0, 164.0), (150.0, 189.0),
            (185.0, 215.0), (240.0, 252.0), (300.0, 289.0),
        ],
        three: &[
            (2.5, 14.0), (4.0, 18.5), (6.0, 24.0), (10.0, 32.0),
            (16.0, 43.0), (25.0, 57.0), (35.0, 70.0), (50.0, 84.0),
            (70.0, 107.0), (95.0, 129.0), (120.0, 149.0), (150.0, 170.0),
            (185.0, 194.0), (240.0, 227.0), (300.0, 261.0),
        ],
    },
    MethodRow {
        method: "A2",
        two: &[
            (2.5, 14.5), (4.0, 19.5), (6.0, 25.0), (10.0, 33.0),
            (16.0, 44.0), (25.0, 58.0), (35.0, 71.0), (50.0, 86.0),
            (70.0, 108.0), (95.0, 130.0), (120.0, 150.0), (150.0, 172.0),
            (185.0, 195.0), (240.0, 229.0), (300.0, 263.0),
        ],
        three: &[
            (2.5, 13.5), (4.0, 17.5), (6.0, 23.0), (10.0, 31.0),
            (16.0, 41.0), (25.0, 53.0), (35.0, 65.0), (50.0, 78.0),
            (70.0, 98.0), (95.0, 118.0), (120.0, 135.0), (150.0, 155.0),
            (185.0, 176.0), (240.0, 207.0), (300.0, 237.0),
        ],
    },
    MethodRow {
        method: "B1",
        two: &[
            (2.5, 18.5), (4.0, 25.0), (6.0, 32.0), (10.0, 44.0),
            (16.0, 60.0), (25.0, 79.0), (35.0, 97.0), (50.0, 118.0),
            (70.0, 150.0), (95.0, 181.0), (120.0, 210.0), (150.0, 234.0),
            (185.0, 266.0), (240.0, 312.0), (300.0, 358.0),
        ],
        three: &[
            (2.5, 16.5), (4.0, 22.0), (6.0, 28.0), (10.0, 39.0),
            (16.0, 53.0), (25.0, 70.0), (35.0, 86.0), (50.0, 104.0),
            (70.0, 133.0), (95.0, 161.0), (120.0, 186.0), (150.0, 204.0),
            (185.0, 230.0), (240.0, 269.0), (300.0, 306.0),
        ],
    },
    MethodRow {
        method: "B2",
        two: &[
            (2.5, 17.5), (4.0, 24.0), (6.0, 30.0), (10.0, 41.0),
            (16.0, 54.0), (25.0, 71.0), (35.0, 86.0), (50.0, 104.0),
            (70.0, 131.0), (95.0, 157.0), (120.0, 181.0), (150.0, 201.0),
            (185.0, 230.0), (240.0, 269.0), (300.0, 308.0),
        ],
        three: &[
            (2.5, 15.5), (4.0, 21.0), (6.0, 27.0), (10.0, 36.0),
            (16.0, 48.0), (25.0, 62.0), (35.0, 77.0), (50.0, 92.0),
            (70.0, 116.0), (95.0, 139.0), (120.0, 160.0), (150.0, 176.0),
            (185.0, 199.0), (240.0, 232.0), (300.0, 265.0),
        ],
    },
    MethodRow {
        method: "C",
        two: &[
            (2.5, 21.0), (4.0, 28.0), (6.0, 36.0), (10.0, 49.0),
            (16.0, 66.0), (25.0, 83.0), (35.0, 103.0), (50.0, 125.0),
            (70.0, 160.0), (95.0, 195.0), (120.0, 226.0), (150.0, 261.0),
            (185.0, 298.0), (240.0, 352.0), (300.0, 406.0),
        ],
        three: &[
            (2.5, 18.5), (4.0, 25.0), (6.0, 32.0), (10.0, 44.0),
            (16.0, 59.0), (25.0, 73.0), (35.0, 90.0), (50.0, 110.0),
            (70.0, 140.0), (95.0, 170.0), (120.0, 197.0), (150.0, 227.0),
            (185.0, 259.0), (240.0, 305.0), (300.0, 351.0),
        ],
    },
    MethodRow {
        method: "D1",
        two: &[
            (2.5, 22.0), (4.0, 29.0), (6.0, 36.0), (10.0, 47.0),
            (16.0, 61.0), (25.0, 77.0), (35.0, 93.0), (50.0, 109.0),
            (70.0, 135.0), (95.0, 159.0), (120.0, 180.0), (150.0, 204.0),
            (185.0, 228.0), (240.0, 262.0), (300.0, 296.0),
        ],
        three: &[
            (2.5, 18.5), (4.0, 24.0), (6.0, 30.0), (10.0, 39.0),
            (16.0, 50.0), (25.0, 64.0), (35.0, 77.0), (50.0, 91.0),
            (70.0, 112.0), (95.0, 132.0), (120.0, 150.0), (150.0, 169.0),
            (185.0, 190.0), (240.0, 218.0), (300.0, 247.0),
        ],
    },
    MethodRow {
        method: "D2",
        two: &[
            (16.0, 63.0), (25.0, 82.0), (35.0, 98.0), (50.0, 117.0),
            (70.0, 145.0), (95.0, 173.0), (120.0, 200.0), (150.0, 224.0),
            (185.0, 255.0), (240.0, 298.0), (300.0, 336.0),
        ],
        three: &[
            (16.0, 53.0), (25.0, 69.0), (35.0, 83.0), (50.0, 99.0),
            (70.0, 122.0), (95.0, 148.0), (120.0, 169.0), (150.0, 189.0),
            (185.0, 214.0), (240.0, 250.0), (300.0, 282.0),
        ],
    },
];

fn table_for(material: Material, insulation: Insulation) -> &'static [MethodRow] {
    match (material, insulation) {
        (Material::Cu, Insulation::Xlpe) => CU_XLPE,
        (Material::Cu, Insulation::Pvc) => CU_PVC,
        (Material::Al, Insulation::Xlpe) => AL_XLPE,
        (Material::Al, Insulation::Pvc) => AL_PVC,
    }
}

/// Looks up the ampacity Iz in amperes.
///
/// If the requested cross-section has no exact row, the nearest standard
/// size at or below it is used. Returns 0.0 when the reference method or
/// loaded-conductor count has no table data: "no data" is a displayable
/// state for the caller, not an error.
pub fn lookup_iz(
    material: Material,
    insulation: Insulation,
    ref_method: &str,
    cross_section: f64,
    loaded_conductors: u32,
) -> f64 {
    let table = table_for(material, insulation);
    let Some(row) = table.iter().find(|r| r.method == ref_method) else {
        return 0.0;
    };
    let sizes = match loaded_conductors {
        2 => row.two,
        3 => row.three,
        _ => return 0.0,
    };

    if let Some(&(_, iz)) = sizes.iter().find(|&&(s, _)| s == cross_section) {
        return iz;
    }

    // Nearest lower cross-section; rows are stored ascending.
    sizes
        .iter()
        .rev()
        .find(|&&(s, _)| s <= cross_section)
        .map_or(0.0, |&(_, iz)| iz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_lookup_cu_xlpe() {
        assert_eq!(lookup_iz(Material::Cu, Insulation::Xlpe, "A1", 1.5, 2), 19.0);
        assert_eq!(lookup_iz(Material::Cu, Insulation::Xlpe, "D2", 300.0, 3), 419.0);
        assert_eq!(lookup_iz(Material::Cu, Insulation::Xlpe, "C", 10.0, 3), 71.0);
    }

    #[test]
    fn exact_lookup_other_tables() {
        assert_eq!(lookup_iz(Material::Al, Insulation::Xlpe, "D2", 16.0, 3), 64.0);
        assert_eq!(lookup_iz(Material::Cu, Insulation::Pvc, "C", 6.0, 3), 41.0);
        assert_eq!(lookup_iz(Material::Al, Insulation::Pvc, "A1", 2.5, 2), 15.0);
    }

    #[test]
    fn missing_size_falls_back_to_nearest_lower() {
        // 30 mm² is not a table row; the 25 mm² row applies.
        let direct = lookup_iz(Material::Cu, Insulation::Xlpe, "B1", 25.0, 3);
        let fallback = lookup_iz(Material::Cu, Insulation::Xlpe, "B1", 30.0, 3);
        assert_eq!(direct, fallback);
    }

    #[test]
    fn below_smallest_size_is_zero() {
        assert_eq!(lookup_iz(Material::Al, Insulation::Xlpe, "D2", 10.0, 3), 0.0);
    }

    #[test]
    fn unknown_method_is_zero() {
        assert_eq!(lookup_iz(Material::Cu, Insulation::Xlpe, "E", 16.0, 3), 0.0);
    }

    #[test]
    fn unknown_conductor_count_is_zero() {
        assert_eq!(lookup_iz(Material::Cu, Insulation::Xlpe, "A1", 16.0, 4), 0.0);
    }

    #[test]
    fn ampacity_is_monotone_in_cross_section() {
        for material in [Material::Cu, Material::Al] {
            for insulation in [Insulation::Xlpe, Insulation::Pvc] {
                for method in KNOWN_METHODS {
                    for cores in [2, 3] {
                        let mut prev = 0.0;
                        for &size in STANDARD_SIZES {
                            let iz = lookup_iz(material, insulation, method, size, cores);
                            if iz > 0.0 {
                                assert!(
                                    iz >= prev,
                                    "{material} {insulation} {method} {cores}-loaded \
                                     not monotone at {size} mm²"
                                );
                                prev = iz;
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn ladder_sizes_above_300_use_the_300_row() {
        let top = lookup_iz(Material::Cu, Insulation::Xlpe, "C", 300.0, 3);
        assert_eq!(lookup_iz(Material::Cu, Insulation::Xlpe, "C", 400.0, 3), top);
    }
}
