//! Battery charge estimation
//!
//! The sampler measures VDD/3 against the 1.2 V band gap with 8 bits, so the
//! full scale of a raw sample is 3.6 V. The cell is a primary lithium coin
//! cell powering the chip directly; its discharge curve is flat for most of
//! its life and falls off quickly at the end.

/// Supply voltage represented by a full-scale sample, in millivolts
pub const FULL_SCALE_MV: u32 = 3600;

/// Largest raw sample value (8-bit conversion)
pub const SAMPLE_MAX: u32 = 255;

/// Discharge curve lookup table
///
/// Table format: (supply_millivolts, percent_remaining), sorted by
/// decreasing voltage.
const DISCHARGE_TABLE: &[(u16, u8)] = &[
    (3000, 100),
    (2900, 80),
    (2800, 60),
    (2700, 40),
    (2600, 30),
    (2500, 20),
    (2400, 10),
    (2000, 0),
];

/// Convert a raw 8-bit sample to supply millivolts
pub const fn sample_to_millivolts(sample: u8) -> u16 {
    ((sample as u32 * FULL_SCALE_MV) / SAMPLE_MAX) as u16
}

/// Estimate remaining charge from the supply voltage
///
/// Uses linear interpolation between table entries and clamps outside the
/// table range.
pub fn millivolts_to_percent(mv: u16) -> u8 {
    let (top_mv, top_pct) = DISCHARGE_TABLE[0];
    if mv >= top_mv {
        return top_pct;
    }

    let (bottom_mv, bottom_pct) = DISCHARGE_TABLE[DISCHARGE_TABLE.len() - 1];
    if mv <= bottom_mv {
        return bottom_pct;
    }

    for pair in DISCHARGE_TABLE.windows(2) {
        let (mv_high, pct_high) = pair[0];
        let (mv_low, pct_low) = pair[1];

        if mv <= mv_high && mv >= mv_low {
            // pct = pct_low + (pct_high - pct_low) * (mv - mv_low) / (mv_high - mv_low)
            let mv_range = (mv_high - mv_low) as u32;
            let pct_range = (pct_high - pct_low) as u32;
            let mv_offset = (mv - mv_low) as u32;

            return pct_low + (pct_range * mv_offset / mv_range) as u8;
        }
    }

    bottom_pct
}

/// Estimate remaining charge straight from a raw sample
pub fn percent_from_sample(sample: u8) -> u8 {
    millivolts_to_percent(sample_to_millivolts(sample))
}
