//! Exhaustive table test of the checklist classifier: all 32 flag
//! combinations bucket strictly by checked count.

use govroi::{classify_compliance, ComplianceChecklist, ComplianceTier};

fn checklist_from_bits(bits: u8) -> ComplianceChecklist {
    ComplianceChecklist {
        agenda_posting: bits & 0b00001 != 0,
        accessible_publishing: bits & 0b00010 != 0,
        retention_schedule: bits & 0b00100 != 0,
        audit_trail: bits & 0b01000 != 0,
        records_workflow: bits & 0b10000 != 0,
    }
}

#[test]
fn every_flag_combination_buckets_by_count() {
    for bits in 0u8..32 {
        let checklist = checklist_from_bits(bits);
        let count = bits.count_ones() as usize;
        assert_eq!(checklist.checked_count(), count);

        let expected = match count {
            0 | 1 => ComplianceTier::High,
            2 | 3 => ComplianceTier::Medium,
            _ => ComplianceTier::Low,
        };
        assert_eq!(
            classify_compliance(&checklist),
            expected,
            "bits {bits:#07b} (count {count})"
        );
    }
}

#[test]
fn tier_depends_only_on_count_not_position() {
    // Same count, different flags set
    let a = checklist_from_bits(0b00011);
    let b = checklist_from_bits(0b10100);
    assert_eq!(classify_compliance(&a), classify_compliance(&b));
}

#[test]
fn tier_labels_match_display_copy() {
    assert_eq!(ComplianceTier::High.label(), "High Risk");
    assert_eq!(ComplianceTier::Medium.label(), "Medium Risk");
    assert_eq!(ComplianceTier::Low.label(), "Low Risk");
}
