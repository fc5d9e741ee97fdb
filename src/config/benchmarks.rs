//! Organization size presets. Immutable reference data; the presenter
//! pushes these into editable fields when the size selector changes.

use serde::{Deserialize, Serialize};

use crate::core::OrgSize;

/// Default sizing values for one organization size bracket.
/// Committee plus council meetings give the total annual meeting count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrgSizeProfile {
    pub committee_meetings: u32,
    pub council_meetings: u32,
    pub staff_count: u32,
    pub hours_per_meeting: f64,
    pub hourly_rate: f64,
    pub packet_pages: u32,
    pub printed_copies: u32,
}

const SMALL: OrgSizeProfile = OrgSizeProfile {
    committee_meetings: 15,
    council_meetings: 15,
    staff_count: 2,
    hours_per_meeting: 20.0,
    hourly_rate: 35.0,
    packet_pages: 100,
    printed_copies: 10,
};

const MEDIUM: OrgSizeProfile = OrgSizeProfile {
    committee_meetings: 24,
    council_meetings: 24,
    staff_count: 3,
    hours_per_meeting: 25.0,
    hourly_rate: 40.0,
    packet_pages: 150,
    printed_copies: 15,
};

const LARGE: OrgSizeProfile = OrgSizeProfile {
    committee_meetings: 36,
    council_meetings: 36,
    staff_count: 5,
    hours_per_meeting: 30.0,
    hourly_rate: 45.0,
    packet_pages: 175,
    printed_copies: 20,
};

const MAJOR: OrgSizeProfile = OrgSizeProfile {
    committee_meetings: 60,
    council_meetings: 60,
    staff_count: 8,
    hours_per_meeting: 35.0,
    hourly_rate: 50.0,
    packet_pages: 200,
    printed_copies: 25,
};

/// Preset lookup, total over the four size brackets.
pub fn org_size_profile(size: OrgSize) -> &'static OrgSizeProfile {
    match size {
        OrgSize::Small => &SMALL,
        OrgSize::Medium => &MEDIUM,
        OrgSize::Large => &LARGE,
        OrgSize::Major => &MAJOR,
    }
}
